//! Car configuration values.
//!
//! A [`BuildConfig`] is what the builder accumulates and what every vehicle
//! holds a frozen copy of.

mod types;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use types::{Color, ParseLabelError, Speed, Wheels};

/// Default number of sheets (seats) on a freshly configured car.
pub const DEFAULT_SHEETS: i64 = 4;

/// Aggregate configuration of a car.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
  pub color: Color,
  pub wheels: Wheels,
  pub speed: Speed,
  /// Sheet count. Not checked for positivity.
  pub sheets: i64,
}

impl Default for BuildConfig {
  fn default() -> Self {
    Self {
      color: Color::Blue,
      wheels: Wheels::Sports,
      speed: Speed::MPH,
      sheets: DEFAULT_SHEETS,
    }
  }
}

impl fmt::Display for BuildConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "BuildConfig {{ color: {}, wheels: {}, speed: {}, sheets: {} }}",
      self.color, self.wheels, self.speed, self.sheets
    )
  }
}
