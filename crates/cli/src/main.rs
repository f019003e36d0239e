mod cmd;
mod output;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use carbuilder_lib::{Color, Speed, Wheels};

use crate::cmd::{DriveOptions, cmd_drive};
use crate::output::{OutputFormat, print_error};

/// car - build a car with the builder pattern and take it for a drive
#[derive(Parser, Debug)]
#[command(name = "car")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Paint color: blue, green or red
  #[arg(long, default_value = "blue")]
  color: Color,

  /// Wheel type: sports or steel
  #[arg(long, default_value = "sports")]
  wheels: Wheels,

  /// Top speed multiplier: mph, kph or a number
  #[arg(long, default_value = "kph", allow_hyphen_values = true)]
  top_speed: Speed,

  /// Number of sheets
  #[arg(long, default_value_t = 2, allow_hyphen_values = true)]
  sheets: i64,

  /// Build a plain car instead of choosing by wheel type
  #[arg(long)]
  generic: bool,

  /// Output format
  #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
  format: OutputFormat,

  /// Enable debug logging
  #[arg(short, long)]
  verbose: bool,
}

fn main() {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  if let Err(e) = run(&cli) {
    print_error(&format!("{:#}", e));
    std::process::exit(1);
  }
}

fn init_logging(verbose: bool) {
  let filter = if verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
  };

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .without_time()
    .init();
}

fn run(cli: &Cli) -> Result<()> {
  let options = DriveOptions {
    color: cli.color,
    wheels: cli.wheels,
    top_speed: cli.top_speed,
    sheets: cli.sheets,
    generic: cli.generic,
    format: cli.format,
  };

  let stdout = io::stdout();
  let mut out = stdout.lock();
  cmd_drive(&options, &mut out)
}
