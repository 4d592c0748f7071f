// ============================================================================
// Distance
// Linear distance stored canonically in meters as an exact decimal
// ============================================================================
//
// Unit factors like the astronomical unit or the parsec span 17 orders of
// magnitude; converting through f64 alone loses the low digits. Meters are
// therefore held as a rust_decimal::Decimal and all conversions and
// arithmetic happen in decimal space, with f64 only at the API boundary.

use std::fmt;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::quantity::angle::Angle;
use crate::quantity::errors::{UnitsError, UnitsResult};
use crate::sexagesimal::round_half_away;

/// Linear distance units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DistanceUnit {
    // SI
    Km,
    Hm,
    Dam,
    M,
    Dm,
    Cm,
    Mm,
    Um,
    Nm,
    Pm,
    // Imperial
    Mi,
    Yd,
    Ft,
    In,
    // Astronomy
    Au,
    Ly,
    Pc,
}

impl DistanceUnit {
    /// Display symbol of the unit.
    pub const fn symbol(self) -> &'static str {
        match self {
            DistanceUnit::Km => "km",
            DistanceUnit::Hm => "hm",
            DistanceUnit::Dam => "dam",
            DistanceUnit::M => "m",
            DistanceUnit::Dm => "dm",
            DistanceUnit::Cm => "cm",
            DistanceUnit::Mm => "mm",
            DistanceUnit::Um => "μm",
            DistanceUnit::Nm => "nm",
            DistanceUnit::Pm => "pm",
            DistanceUnit::Mi => "mi",
            DistanceUnit::Yd => "yd",
            DistanceUnit::Ft => "ft",
            DistanceUnit::In => "in",
            DistanceUnit::Au => "au",
            DistanceUnit::Ly => "ly",
            DistanceUnit::Pc => "pc",
        }
    }

    /// Exact conversion factor from this unit to meters.
    pub fn factor_to_meters(self) -> Decimal {
        match self {
            DistanceUnit::Km => Decimal::new(1_000, 0),
            DistanceUnit::Hm => Decimal::new(100, 0),
            DistanceUnit::Dam => Decimal::new(10, 0),
            DistanceUnit::M => Decimal::ONE,
            DistanceUnit::Dm => Decimal::new(1, 1),
            DistanceUnit::Cm => Decimal::new(1, 2),
            DistanceUnit::Mm => Decimal::new(1, 3),
            DistanceUnit::Um => Decimal::new(1, 6),
            DistanceUnit::Nm => Decimal::new(1, 9),
            DistanceUnit::Pm => Decimal::new(1, 12),
            DistanceUnit::Mi => Decimal::new(1_609_344, 3),
            DistanceUnit::Yd => Decimal::new(9_144, 4),
            DistanceUnit::Ft => Decimal::new(3_048, 4),
            DistanceUnit::In => Decimal::new(254, 4),
            DistanceUnit::Au => Decimal::new(149_597_870_700, 0),
            DistanceUnit::Ly => Decimal::new(9_460_730_472_580_800, 0),
            DistanceUnit::Pc => Decimal::new(30_856_776_376_340_067, 0),
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A linear distance.
///
/// # Example
/// ```
/// use astro_units::{Distance, DistanceUnit};
///
/// let d = Distance::new(1.0, DistanceUnit::Au)?;
/// assert_eq!(d.get(DistanceUnit::M), 149_597_870_700.0);
/// assert_eq!(d.to_string(), "1.000 au");
/// # Ok::<(), astro_units::UnitsError>(())
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Distance {
    m: Decimal,
    unit: DistanceUnit,
    places: u32,
}

impl Distance {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Creates a new distance from a value in the given unit.
    ///
    /// # Errors
    /// - `NonFinite` when the value is NaN or infinite
    /// - `OutOfRange` when the value exceeds exact decimal range
    pub fn new(value: f64, unit: DistanceUnit) -> UnitsResult<Self> {
        if !value.is_finite() {
            return Err(UnitsError::NonFinite);
        }
        let value = Decimal::from_f64(value).ok_or(UnitsError::OutOfRange)?;
        Ok(Self::from_decimal(value, unit))
    }

    /// Creates a new distance from an exact decimal value in the given unit.
    pub fn from_decimal(value: Decimal, unit: DistanceUnit) -> Self {
        Self {
            m: value * unit.factor_to_meters(),
            unit,
            places: 3,
        }
    }

    /// Creates a new distance from a number of meters.
    pub fn from_m(m: f64) -> UnitsResult<Self> {
        Self::new(m, DistanceUnit::M)
    }

    /// Creates a new distance from a number of kilometers.
    pub fn from_km(km: f64) -> UnitsResult<Self> {
        Self::new(km, DistanceUnit::Km)
    }

    /// Creates a new distance from a number of miles.
    pub fn from_mi(mi: f64) -> UnitsResult<Self> {
        Self::new(mi, DistanceUnit::Mi)
    }

    /// Creates a new distance from a number of feet.
    pub fn from_ft(ft: f64) -> UnitsResult<Self> {
        Self::new(ft, DistanceUnit::Ft)
    }

    /// Creates a new distance from a number of astronomical units.
    pub fn from_au(au: f64) -> UnitsResult<Self> {
        Self::new(au, DistanceUnit::Au)
    }

    /// Creates a new distance from a number of light-years.
    pub fn from_ly(ly: f64) -> UnitsResult<Self> {
        Self::new(ly, DistanceUnit::Ly)
    }

    /// Creates a new distance from a number of parsecs.
    pub fn from_pc(pc: f64) -> UnitsResult<Self> {
        Self::new(pc, DistanceUnit::Pc)
    }

    /// Creates a new distance from an astronomical parallax angle: one
    /// parsec is the reciprocal of the parallax in arcseconds.
    ///
    /// # Errors
    /// `DivisionByZero` when the parallax angle is zero.
    pub fn from_parallax(parallax: &Angle) -> UnitsResult<Self> {
        let asec = parallax.asec();
        if asec == 0.0 {
            return Err(UnitsError::DivisionByZero);
        }
        Self::from_pc(1.0 / asec)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Value of this distance in the given unit.
    pub fn get(&self, unit: DistanceUnit) -> f64 {
        (self.m / unit.factor_to_meters())
            .to_f64()
            .unwrap_or(f64::NAN)
    }

    /// Exact meter value.
    #[inline]
    pub fn meters_decimal(&self) -> Decimal {
        self.m
    }

    /// Display unit of this instance.
    #[inline]
    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// Converts this distance to an astronomical parallax angle.
    ///
    /// A zero distance produces an infinite angle, which propagates like
    /// any other non-finite scalar.
    pub fn to_parallax(&self) -> Angle {
        Angle::from_asec(1.0 / self.get(DistanceUnit::Pc))
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Returns the sum of this distance and another, keeping this
    /// instance's display settings.
    pub fn add(&self, other: &Distance) -> Distance {
        self.derive(self.m + other.m)
    }

    /// Returns the difference of this distance and another.
    pub fn sub(&self, other: &Distance) -> Distance {
        self.derive(self.m - other.m)
    }

    /// Returns the negation of this distance.
    pub fn neg(&self) -> Distance {
        self.derive(-self.m)
    }

    // ========================================================================
    // Display settings
    // ========================================================================

    /// Returns the distance displaying in the given unit.
    pub fn with_unit(mut self, unit: DistanceUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Returns the distance displaying with the given number of decimal
    /// places (default 3).
    pub fn with_places(mut self, places: u32) -> Self {
        self.places = places;
        self
    }

    fn derive(&self, m: Decimal) -> Distance {
        Distance {
            m,
            unit: self.unit,
            places: self.places,
        }
    }
}

// Equality considers only the exact meter value, not the display settings.
impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.m == other.m
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.m.partial_cmp(&other.m)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.get(self.unit);
        let places = self.places as usize;
        // Values that vanish at the requested precision, or dwarf it, are
        // shown in scientific notation instead.
        if value != 0.0 && (round_half_away(value, self.places) == 0.0 || value.abs() > 1e10) {
            write!(f, "{:.places$e} {}", value, self.unit.symbol())
        } else {
            write!(f, "{:.places$} {}", value, self.unit.symbol())
        }
    }
}
