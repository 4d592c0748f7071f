// ============================================================================
// Pressure
// Atmospheric pressure stored canonically in pascals
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sexagesimal::round_half_away;

/// Pressure units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PressureUnit {
    Pascal,
    Millibar,
    InchesOfMercury,
}

impl PressureUnit {
    /// Display symbol of the unit.
    pub const fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::Millibar => "mbar",
            PressureUnit::InchesOfMercury => "inHg",
        }
    }
}

/// A measure of pressure.
///
/// # Example
/// ```
/// use astro_units::Pressure;
///
/// let p = Pressure::from_mbar(1013.25);
/// assert_eq!(p.pa(), 101_325.0);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pressure {
    pa: f64,
    unit: PressureUnit,
    places: u32,
}

impl Pressure {
    /// Pascals in one inch of mercury.
    pub const PA_IN_INHG: f64 = 3386.0;

    /// Millibars in one pascal.
    pub const MBAR_IN_PA: f64 = 1e-2;

    // ========================================================================
    // Constructors
    // ========================================================================

    /// Creates a new pressure from pascals.
    pub fn from_pa(pa: f64) -> Self {
        Self {
            pa,
            unit: PressureUnit::Pascal,
            places: 3,
        }
    }

    /// Creates a new pressure from millibars.
    pub fn from_mbar(mbar: f64) -> Self {
        Self::from_pa(mbar / Self::MBAR_IN_PA).with_unit(PressureUnit::Millibar)
    }

    /// Creates a new pressure from inches of mercury.
    pub fn from_inhg(inhg: f64) -> Self {
        Self::from_pa(inhg * Self::PA_IN_INHG).with_unit(PressureUnit::InchesOfMercury)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Pressure in pascals.
    #[inline]
    pub fn pa(&self) -> f64 {
        self.pa
    }

    /// Pressure in millibars.
    #[inline]
    pub fn mbar(&self) -> f64 {
        self.pa * Self::MBAR_IN_PA
    }

    /// Pressure in inches of mercury.
    #[inline]
    pub fn inhg(&self) -> f64 {
        self.pa / Self::PA_IN_INHG
    }

    // ========================================================================
    // Display settings
    // ========================================================================

    /// Returns the pressure displaying in the given unit.
    pub fn with_unit(mut self, unit: PressureUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Returns the pressure displaying with the given number of decimal
    /// places (default 3).
    pub fn with_places(mut self, places: u32) -> Self {
        self.places = places;
        self
    }
}

// Equality considers only the pascal value, not the display settings.
impl PartialEq for Pressure {
    fn eq(&self, other: &Self) -> bool {
        self.pa == other.pa
    }
}

impl PartialOrd for Pressure {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.pa.partial_cmp(&other.pa)
    }
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self.unit {
            PressureUnit::Pascal => self.pa(),
            PressureUnit::Millibar => self.mbar(),
            PressureUnit::InchesOfMercury => self.inhg(),
        };
        write!(
            f,
            "{} {}",
            round_half_away(value, self.places),
            self.unit.symbol()
        )
    }
}
