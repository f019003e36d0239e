use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing a configuration label.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseLabelError {
  #[error("unknown color '{value}' (expected one of: blue, green, red)")]
  UnknownColor { value: String },

  #[error("unknown wheels '{value}' (expected one of: sports, steel)")]
  UnknownWheels { value: String },

  #[error("invalid top speed '{value}' (expected mph, kph or a number)")]
  InvalidSpeed { value: String },
}

/// Paint color of a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Color {
  #[default]
  Blue,
  Green,
  Red,
}

impl Color {
  /// Returns the lowercase label for this color
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Blue => "blue",
      Self::Green => "green",
      Self::Red => "red",
    }
  }
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for Color {
  type Err = ParseLabelError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "blue" => Ok(Self::Blue),
      "green" => Ok(Self::Green),
      "red" => Ok(Self::Red),
      _ => Err(ParseLabelError::UnknownColor { value: s.to_string() }),
    }
  }
}

impl TryFrom<String> for Color {
  type Error = ParseLabelError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value.parse()
  }
}

/// Wheel type; selects which vehicle variant the builder produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Wheels {
  #[default]
  Sports,
  Steel,
}

impl Wheels {
  /// Returns the lowercase label for this wheel type
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Sports => "sports",
      Self::Steel => "steel",
    }
  }
}

impl fmt::Display for Wheels {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for Wheels {
  type Err = ParseLabelError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "sports" => Ok(Self::Sports),
      "steel" => Ok(Self::Steel),
      _ => Err(ParseLabelError::UnknownWheels { value: s.to_string() }),
    }
  }
}

impl TryFrom<String> for Wheels {
  type Error = ParseLabelError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value.parse()
  }
}

/// Top speed as a unit-conversion multiplier.
///
/// `1.0` is mph-equivalent. Parsing rejects non-finite values; no other range is enforced.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Speed(pub f64);

impl Speed {
  pub const MPH: Speed = Speed(1.0);
  pub const KPH: Speed = Speed(1.60934);
}

impl Default for Speed {
  fn default() -> Self {
    Self::MPH
  }
}

impl fmt::Display for Speed {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl FromStr for Speed {
  type Err = ParseLabelError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "mph" => Ok(Self::MPH),
      "kph" => Ok(Self::KPH),
      other => match other.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Speed(value)),
        _ => Err(ParseLabelError::InvalidSpeed { value: s.to_string() }),
      },
    }
  }
}
