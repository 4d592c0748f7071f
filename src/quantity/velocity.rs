// ============================================================================
// Velocity
// Rate of travel held as a distance component over a time component
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::quantity::distance::{Distance, DistanceUnit};
use crate::quantity::errors::UnitsResult;
use crate::quantity::time::Time;
use crate::sexagesimal::round_half_away;

/// Velocity units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VelocityUnit {
    /// Meters per second
    Ms,
    /// Kilometers per second
    Kms,
    /// Kilometers per hour
    Kmh,
    /// Kilometers per day
    Kmd,
    /// Miles per hour
    Mph,
    /// Astronomical units per day
    Aud,
    /// Parsecs per Julian year
    Pcy,
}

impl VelocityUnit {
    /// Display symbol of the unit.
    pub const fn symbol(self) -> &'static str {
        match self {
            VelocityUnit::Ms => "m/s",
            VelocityUnit::Kms => "km/s",
            VelocityUnit::Kmh => "km/h",
            VelocityUnit::Kmd => "km/d",
            VelocityUnit::Mph => "mph",
            VelocityUnit::Aud => "AU/d",
            VelocityUnit::Pcy => "pc/y",
        }
    }
}

impl fmt::Display for VelocityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A measure of velocity, stored as a distance covered over a time
/// interval rather than a pre-divided scalar. Keeping the two components
/// lets `time_to_cover` and `dist_covered` stay simple proportions.
///
/// # Example
/// ```
/// use astro_units::Velocity;
///
/// let v = Velocity::from_kmh(90.0)?;
/// assert_eq!(v.ms(), 25.0);
/// assert_eq!(v.to_string(), "90 km/h");
/// # Ok::<(), astro_units::UnitsError>(())
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Velocity {
    dist: Distance,
    time: Time,
    unit: VelocityUnit,
    places: u32,
}

impl Velocity {
    /// Speed of light in a vacuum, m/s.
    pub const C_MS: f64 = 299_792_458.0;

    /// Number of km/s in one pc/y (value provided by Jean Meeus).
    pub const KMS_IN_PCY: f64 = 977_792.0;

    // ========================================================================
    // Constructors
    // ========================================================================

    /// Creates a new velocity from distance and time components.
    pub fn new(dist: Distance, time: Time) -> Self {
        Self {
            dist,
            time,
            unit: VelocityUnit::Ms,
            places: 3,
        }
    }

    /// Creates a new velocity from meters per second.
    pub fn from_ms(ms: f64) -> UnitsResult<Self> {
        Ok(Self::new(Distance::from_m(ms)?, Time::from_sec(1.0)))
    }

    /// Creates a new velocity from kilometers per second.
    pub fn from_kms(kms: f64) -> UnitsResult<Self> {
        Ok(Self::new(Distance::from_km(kms)?, Time::from_sec(1.0)).with_unit(VelocityUnit::Kms))
    }

    /// Creates a new velocity from kilometers per hour.
    pub fn from_kmh(kmh: f64) -> UnitsResult<Self> {
        Ok(Self::new(Distance::from_km(kmh)?, Time::from_hours(1.0)).with_unit(VelocityUnit::Kmh))
    }

    /// Creates a new velocity from kilometers per day.
    pub fn from_kmd(kmd: f64) -> UnitsResult<Self> {
        Ok(Self::new(Distance::from_km(kmd)?, Time::from_days(1.0)).with_unit(VelocityUnit::Kmd))
    }

    /// Creates a new velocity from miles per hour.
    pub fn from_mph(mph: f64) -> UnitsResult<Self> {
        Ok(Self::new(Distance::from_mi(mph)?, Time::from_hours(1.0)).with_unit(VelocityUnit::Mph))
    }

    /// Creates a new velocity from astronomical units per day.
    pub fn from_aud(aud: f64) -> UnitsResult<Self> {
        Ok(Self::new(Distance::from_au(aud)?, Time::from_days(1.0)).with_unit(VelocityUnit::Aud))
    }

    /// Creates a new velocity from parsecs per Julian year.
    pub fn from_pcy(pcy: f64) -> UnitsResult<Self> {
        Ok(
            Self::new(Distance::from_pc(pcy)?, Time::from_days(Time::JULIAN_YEAR))
                .with_unit(VelocityUnit::Pcy),
        )
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Velocity in meters per second.
    pub fn ms(&self) -> f64 {
        self.dist.get(DistanceUnit::M) / self.time.sec()
    }

    /// Velocity in kilometers per second.
    pub fn kms(&self) -> f64 {
        self.dist.get(DistanceUnit::Km) / self.time.sec()
    }

    /// Velocity in kilometers per hour.
    pub fn kmh(&self) -> f64 {
        self.dist.get(DistanceUnit::Km) / self.time.hours()
    }

    /// Velocity in kilometers per day.
    pub fn kmd(&self) -> f64 {
        self.dist.get(DistanceUnit::Km) / self.time.days()
    }

    /// Velocity in miles per hour.
    pub fn mph(&self) -> f64 {
        self.dist.get(DistanceUnit::Mi) / self.time.hours()
    }

    /// Velocity in astronomical units per day.
    pub fn aud(&self) -> f64 {
        self.dist.get(DistanceUnit::Au) / self.time.days()
    }

    /// Velocity in parsecs per Julian year.
    pub fn pcy(&self) -> f64 {
        self.kms() / Self::KMS_IN_PCY
    }

    /// Velocity in the given unit.
    pub fn get(&self, unit: VelocityUnit) -> f64 {
        match unit {
            VelocityUnit::Ms => self.ms(),
            VelocityUnit::Kms => self.kms(),
            VelocityUnit::Kmh => self.kmh(),
            VelocityUnit::Kmd => self.kmd(),
            VelocityUnit::Mph => self.mph(),
            VelocityUnit::Aud => self.aud(),
            VelocityUnit::Pcy => self.pcy(),
        }
    }

    /// Distance component.
    #[inline]
    pub fn dist(&self) -> &Distance {
        &self.dist
    }

    /// Time component.
    #[inline]
    pub fn time(&self) -> &Time {
        &self.time
    }

    // ========================================================================
    // Derived quantities
    // ========================================================================

    /// Time required to travel the given distance at this velocity.
    pub fn time_to_cover(&self, dist: &Distance) -> Time {
        let ratio = dist.get(DistanceUnit::M) / self.dist.get(DistanceUnit::M);
        Time::from_sec(ratio * self.time.sec())
    }

    /// Distance traveled in the given time at this velocity.
    pub fn dist_covered(&self, time: &Time) -> UnitsResult<Distance> {
        let m = self.dist.get(DistanceUnit::M) * time.sec() / self.time.sec();
        Distance::from_m(m)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Returns the sum of this velocity and another, keeping this
    /// instance's display settings.
    pub fn add(&self, other: &Velocity) -> UnitsResult<Velocity> {
        let sum = Self::from_ms(self.ms() + other.ms())?;
        Ok(Velocity {
            unit: self.unit,
            places: self.places,
            ..sum
        })
    }

    /// Returns the difference of this velocity and another.
    pub fn sub(&self, other: &Velocity) -> UnitsResult<Velocity> {
        let diff = Self::from_ms(self.ms() - other.ms())?;
        Ok(Velocity {
            unit: self.unit,
            places: self.places,
            ..diff
        })
    }

    // ========================================================================
    // Display settings
    // ========================================================================

    /// Returns the velocity displaying in the given unit.
    pub fn with_unit(mut self, unit: VelocityUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Returns the velocity displaying with the given number of decimal
    /// places (default 3).
    pub fn with_places(mut self, places: u32) -> Self {
        self.places = places;
        self
    }
}

// Equality considers the rate, not the particular distance/time pair or
// the display settings.
impl PartialEq for Velocity {
    fn eq(&self, other: &Self) -> bool {
        self.ms() == other.ms()
    }
}

impl fmt::Display for Velocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = round_half_away(self.get(self.unit), self.places);
        write!(f, "{} {}", value, self.unit.symbol())
    }
}
