//! Implementation of the default `car` run.
//!
//! Builds one vehicle from the requested configuration and has it drive and
//! then stop.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use carbuilder_lib::{Action, BuildConfig, CarBuilder, Color, Speed, Vehicle, VehicleKind, Wheels};

use crate::output::{OutputFormat, write_json_line};

/// What to build and how to report it.
#[derive(Debug, Clone)]
pub struct DriveOptions {
  pub color: Color,
  pub wheels: Wheels,
  pub top_speed: Speed,
  pub sheets: i64,
  pub generic: bool,
  pub format: OutputFormat,
}

#[derive(Serialize)]
struct ActionRecord<'a> {
  action: Action,
  vehicle: VehicleKind,
  line: String,
  config: &'a BuildConfig,
}

pub fn cmd_drive<W: Write>(options: &DriveOptions, out: &mut W) -> Result<()> {
  let mut builder = CarBuilder::new();
  builder
    .color(options.color)
    .wheels(options.wheels)
    .top_speed(options.top_speed)
    .sheets(options.sheets);

  let vehicle = if options.generic {
    builder.build_generic()
  } else {
    builder.build()
  };
  info!(kind = %vehicle.kind(), "driving vehicle");

  for action in [Action::Drive, Action::Stop] {
    report(&vehicle, action, options.format, &mut *out)?;
  }

  out.flush().context("Failed to flush output")?;
  Ok(())
}

fn report<W: Write>(vehicle: &Vehicle, action: Action, format: OutputFormat, out: &mut W) -> Result<()> {
  if format.is_json() {
    let record = ActionRecord {
      action,
      vehicle: vehicle.kind(),
      line: vehicle.render(action),
      config: vehicle.config(),
    };
    return write_json_line(out, &record);
  }

  match action {
    Action::Drive => vehicle.drive(out).context("Failed to drive vehicle"),
    Action::Stop => vehicle.stop(out).context("Failed to stop vehicle"),
  }
}

#[cfg(test)]
mod tests {
  use std::io;

  use super::*;

  fn demo() -> DriveOptions {
    DriveOptions {
      color: Color::Blue,
      wheels: Wheels::Sports,
      top_speed: Speed::KPH,
      sheets: 2,
      generic: false,
      format: OutputFormat::Text,
    }
  }

  /// Writer whose every write fails.
  struct ClosedPipe;

  impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
      Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  fn run(options: &DriveOptions) -> String {
    let mut out = Vec::new();
    cmd_drive(options, &mut out).unwrap();
    String::from_utf8(out).unwrap()
  }

  #[test]
  fn default_run_prints_sports_lines() {
    let text = run(&demo());
    assert_eq!(
      text,
      "Sports Driving: BuildConfig { color: blue, wheels: sports, speed: 1.60934, sheets: 2 }\n\
       Sports Stop: BuildConfig { color: blue, wheels: sports, speed: 1.60934, sheets: 2 }\n"
    );
  }

  #[test]
  fn steel_and_generic_runs_use_their_labels() {
    let steel = run(&DriveOptions {
      wheels: Wheels::Steel,
      ..demo()
    });
    assert!(steel.starts_with("Steel Driving: "));
    assert!(steel.contains("\nSteel Stop: "));

    let generic = run(&DriveOptions {
      generic: true,
      ..demo()
    });
    assert!(generic.starts_with("Driving: "));
    assert!(generic.contains("\nStop: "));
  }

  #[test]
  fn json_run_emits_one_record_per_action() {
    let text = run(&DriveOptions {
      color: Color::Red,
      format: OutputFormat::Json,
      ..demo()
    });
    let records: Vec<serde_json::Value> = text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["action"], "drive");
    assert_eq!(records[1]["action"], "stop");
    assert_eq!(records[0]["vehicle"], "sports_wheel");
    assert_eq!(records[0]["config"]["color"], "red");
    assert_eq!(records[0]["config"]["sheets"], 2);
    assert_eq!(
      records[1]["line"],
      "Sports Stop: BuildConfig { color: red, wheels: sports, speed: 1.60934, sheets: 2 }"
    );
  }

  #[test]
  fn text_write_failure_carries_context() {
    let err = cmd_drive(&demo(), &mut ClosedPipe).unwrap_err();
    assert_eq!(
      format!("{:#}", err),
      "Failed to drive vehicle: failed to write to output: pipe closed"
    );
  }

  #[test]
  fn json_write_failure_carries_context() {
    let options = DriveOptions {
      format: OutputFormat::Json,
      ..demo()
    };
    let err = cmd_drive(&options, &mut ClosedPipe).unwrap_err();
    assert_eq!(format!("{:#}", err), "Failed to write JSON output: pipe closed");
  }
}
