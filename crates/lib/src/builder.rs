//! Chained builder for [`Vehicle`]s.
//!
//! Setters take `&mut self` and hand the same builder back, so a builder can
//! be configured in one expression, built, adjusted, and built again:
//!
//! ```
//! use carbuilder_lib::builder::CarBuilder;
//! use carbuilder_lib::config::{Color, Speed, Wheels};
//! use carbuilder_lib::vehicle::VehicleKind;
//!
//! let mut builder = CarBuilder::new();
//! let car = builder.color(Color::Red).wheels(Wheels::Steel).top_speed(Speed::KPH).sheets(2).build();
//! assert_eq!(car.kind(), VehicleKind::SteelWheel);
//! ```

use tracing::{debug, trace};

use crate::config::{BuildConfig, Color, Speed, Wheels};
use crate::vehicle::Vehicle;

/// Accumulates a [`BuildConfig`] and produces vehicles from it.
#[derive(Debug, Clone, Default)]
pub struct CarBuilder {
  config: BuildConfig,
}

impl CarBuilder {
  /// Create a builder holding the default configuration.
  pub fn new() -> Self {
    Self::default()
  }

  pub fn color(&mut self, color: Color) -> &mut Self {
    trace!(%color, "set color");
    self.config.color = color;
    self
  }

  pub fn wheels(&mut self, wheels: Wheels) -> &mut Self {
    trace!(%wheels, "set wheels");
    self.config.wheels = wheels;
    self
  }

  pub fn top_speed(&mut self, speed: Speed) -> &mut Self {
    trace!(%speed, "set top speed");
    self.config.speed = speed;
    self
  }

  pub fn sheets(&mut self, sheets: i64) -> &mut Self {
    trace!(sheets, "set sheets");
    self.config.sheets = sheets;
    self
  }

  /// The configuration accumulated so far.
  pub fn config(&self) -> &BuildConfig {
    &self.config
  }

  /// Build the vehicle matching the configured wheel type.
  pub fn build(&self) -> Vehicle {
    let snapshot = self.config.clone();
    let vehicle = match snapshot.wheels {
      Wheels::Sports => Vehicle::SportsWheel(snapshot),
      Wheels::Steel => Vehicle::SteelWheel(snapshot),
    };
    debug!(kind = %vehicle.kind(), config = %vehicle.config(), "built vehicle");
    vehicle
  }

  /// Build a plain car, ignoring the wheel type for dispatch.
  pub fn build_generic(&self) -> Vehicle {
    let vehicle = Vehicle::Generic(self.config.clone());
    debug!(kind = %vehicle.kind(), config = %vehicle.config(), "built vehicle");
    vehicle
  }
}

impl From<BuildConfig> for CarBuilder {
  fn from(config: BuildConfig) -> Self {
    Self { config }
  }
}
