//! Built vehicles and their rendering.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;
use thiserror::Error;
use tracing::trace;

use crate::config::BuildConfig;

/// Errors that can occur while a vehicle renders itself.
#[derive(Debug, Error)]
pub enum VehicleError {
  #[error("failed to write to output")]
  Write(#[from] io::Error),
}

/// Which concrete car a [`Vehicle`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
  Generic,
  SportsWheel,
  SteelWheel,
}

impl VehicleKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Generic => "generic",
      Self::SportsWheel => "sports_wheel",
      Self::SteelWheel => "steel_wheel",
    }
  }
}

impl fmt::Display for VehicleKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Something a vehicle can be asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
  Drive,
  Stop,
}

impl Action {
  fn label(&self) -> &'static str {
    match self {
      Self::Drive => "Driving",
      Self::Stop => "Stop",
    }
  }
}

/// A finished car holding the configuration it was built with.
///
/// The configuration is a snapshot: later changes to the builder that produced
/// it are not visible here.
#[derive(Debug, Clone, PartialEq)]
pub enum Vehicle {
  Generic(BuildConfig),
  SportsWheel(BuildConfig),
  SteelWheel(BuildConfig),
}

impl Vehicle {
  pub fn kind(&self) -> VehicleKind {
    match self {
      Self::Generic(_) => VehicleKind::Generic,
      Self::SportsWheel(_) => VehicleKind::SportsWheel,
      Self::SteelWheel(_) => VehicleKind::SteelWheel,
    }
  }

  pub fn config(&self) -> &BuildConfig {
    match self {
      Self::Generic(config) | Self::SportsWheel(config) | Self::SteelWheel(config) => config,
    }
  }

  /// Prefix put in front of every action label, including its trailing space.
  pub fn label_prefix(&self) -> &'static str {
    match self {
      Self::Generic(_) => "",
      Self::SportsWheel(_) => "Sports ",
      Self::SteelWheel(_) => "Steel ",
    }
  }

  /// Renders the line for `action` without writing it anywhere.
  pub fn render(&self, action: Action) -> String {
    format!("{}{}: {}", self.label_prefix(), action.label(), self.config())
  }

  /// Writes the driving line to `out`.
  pub fn drive<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), VehicleError> {
    self.emit(Action::Drive, out)
  }

  /// Writes the stop line to `out`.
  pub fn stop<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), VehicleError> {
    self.emit(Action::Stop, out)
  }

  fn emit<W: Write + ?Sized>(&self, action: Action, out: &mut W) -> Result<(), VehicleError> {
    trace!(kind = %self.kind(), ?action, "rendering vehicle");
    writeln!(out, "{}", self.render(action))?;
    Ok(())
  }
}
