// ============================================================================
// Astro Units Library
// Immutable physical-quantity value types for astronomical calculations
// ============================================================================

//! # Astro Units
//!
//! Immutable physical-quantity value types for astronomical calculations:
//! angles, time intervals, distances, velocities, temperatures and
//! pressures.
//!
//! ## Features
//!
//! - **Single canonical scalar** per quantity; every other unit view is a
//!   pure function of it
//! - **Sexagesimal decomposition** shared by angles (deg/arcmin/arcsec) and
//!   times (h/m/s), with one rounding pass so integer components and
//!   fraction digits always agree
//! - **Template formatting** via a compact token language
//!   (`+0d°0m'0s".3f`, `0h:0m:0s.3f`, `9D`, ...)
//! - **Exact decimal distances** backed by `rust_decimal`, so parsec and
//!   light-year conversions keep their low digits
//! - **Value semantics**: arithmetic returns new instances, safe to share
//!   read-only across threads
//!
//! ## Example
//!
//! ```rust
//! use astro_units::prelude::*;
//!
//! // Sexagesimal construction and formatting
//! let ra = Angle::from_dms(12.0, 34.0, 56.0, 0.1234);
//! assert_eq!(ra.format("+0d°0m'0s\".3f"), "+012°34'56\".123");
//!
//! // Angles and times convert through proportions of a day
//! let t = Time::from_hms(6.0, 0.0, 0.0, 0.0);
//! assert_eq!(Angle::from_time(&t, None).deg(), 90.0);
//!
//! // Normalization into an interval
//! assert_eq!(Angle::from_deg(370.0).normalize(0.0, 360.0).deg(), 10.0);
//!
//! // Exact astronomical distances
//! let d = Distance::from_au(1.0)?;
//! assert_eq!(d.get(DistanceUnit::M), 149_597_870_700.0);
//! # Ok::<(), astro_units::UnitsError>(())
//! ```

pub mod format;
pub mod quantity;
pub mod sexagesimal;

// Re-exports for convenience
pub use quantity::{
    Angle, Distance, DistanceUnit, Pressure, PressureUnit, Temperature, TemperatureUnit, Time,
    UnitsError, UnitsResult, Velocity, VelocityUnit,
};

pub mod prelude {
    pub use crate::format::Formattable;
    pub use crate::quantity::{
        Angle, Distance, DistanceUnit, Pressure, PressureUnit, Temperature, TemperatureUnit, Time,
        UnitsError, UnitsResult, Velocity, VelocityUnit,
    };
    pub use crate::sexagesimal::{compose, decompose, Sexagesimal, Sign};
}
