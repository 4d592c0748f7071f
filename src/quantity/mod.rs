// ============================================================================
// Quantity Module
// Contains the immutable physical-quantity value types
// ============================================================================

pub mod angle;
pub mod distance;
pub mod errors;
pub mod pressure;
pub mod temperature;
pub mod time;
pub mod velocity;

pub use angle::Angle;
pub use distance::{Distance, DistanceUnit};
pub use errors::{UnitsError, UnitsResult};
pub use pressure::{Pressure, PressureUnit};
pub use temperature::{Temperature, TemperatureUnit};
pub use time::Time;
pub use velocity::{Velocity, VelocityUnit};
