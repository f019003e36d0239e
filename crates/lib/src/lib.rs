//! carbuilder-lib: a chained builder for cars
//!
//! - `config`: the value types a car is configured with (`BuildConfig`, `Color`, `Wheels`, `Speed`)
//! - `builder`: `CarBuilder`, which accumulates a configuration and builds vehicles
//! - `vehicle`: the built `Vehicle` variants and how they render themselves

pub mod builder;
pub mod config;
pub mod vehicle;

pub use builder::CarBuilder;
pub use config::{BuildConfig, Color, ParseLabelError, Speed, Wheels};
pub use vehicle::{Action, Vehicle, VehicleError, VehicleKind};
