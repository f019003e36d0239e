//! CLI output formatting utilities.
//!
//! Vehicle lines go to stdout; diagnostics go to stderr.

use std::io::Write;

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

pub mod symbols {
  pub const ERROR: &str = "✗";
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

/// Write `value` as a single line of JSON.
pub fn write_json_line<W: Write, T: serde::Serialize>(out: &mut W, value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string(value).context("Failed to serialize to JSON")?;
  writeln!(out, "{}", json).context("Failed to write JSON output")?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn json_is_written_on_one_line() {
    let mut out = Vec::new();
    write_json_line(&mut out, &serde_json::json!({ "a": 1, "b": [1, 2] })).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "{\"a\":1,\"b\":[1,2]}\n");
  }

  #[test]
  fn text_is_the_default_format() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
    assert!(OutputFormat::Json.is_json());
    assert!(!OutputFormat::Text.is_json());
  }
}
