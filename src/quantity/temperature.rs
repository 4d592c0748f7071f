// ============================================================================
// Temperature
// Thermodynamic temperature stored canonically in kelvins
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sexagesimal::round_half_away;

/// Offset between the Kelvin and Celsius scales.
const CELSIUS_OFFSET: f64 = 273.15;
/// Offset between the Fahrenheit and Rankine scales.
const FAHRENHEIT_OFFSET: f64 = 459.67;

/// Temperature scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
}

/// A measure of temperature.
///
/// # Example
/// ```
/// use astro_units::Temperature;
///
/// let t = Temperature::from_c(100.0);
/// assert_eq!(t.kelvin(), 373.15);
/// assert!((t.fahrenheit() - 212.0).abs() < 1e-12);
/// assert_eq!(t.to_string(), "100°C");
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Temperature {
    k: f64,
    unit: TemperatureUnit,
    places: u32,
}

impl Temperature {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Creates a new temperature from kelvins.
    pub fn from_k(kelvin: f64) -> Self {
        Self {
            k: kelvin,
            unit: TemperatureUnit::Kelvin,
            places: 3,
        }
    }

    /// Creates a new temperature from degrees Celsius.
    pub fn from_c(celsius: f64) -> Self {
        Self::from_k(celsius + CELSIUS_OFFSET).with_unit(TemperatureUnit::Celsius)
    }

    /// Creates a new temperature from degrees Fahrenheit.
    pub fn from_f(fahrenheit: f64) -> Self {
        Self::from_k((fahrenheit + FAHRENHEIT_OFFSET) * (5.0 / 9.0))
            .with_unit(TemperatureUnit::Fahrenheit)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Temperature in kelvins.
    #[inline]
    pub fn kelvin(&self) -> f64 {
        self.k
    }

    /// Temperature in degrees Celsius.
    #[inline]
    pub fn celsius(&self) -> f64 {
        self.k - CELSIUS_OFFSET
    }

    /// Temperature in degrees Fahrenheit.
    #[inline]
    pub fn fahrenheit(&self) -> f64 {
        self.k * (9.0 / 5.0) - FAHRENHEIT_OFFSET
    }

    // ========================================================================
    // Display settings
    // ========================================================================

    /// Returns the temperature displaying in the given scale.
    pub fn with_unit(mut self, unit: TemperatureUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Returns the temperature displaying with the given number of decimal
    /// places (default 3).
    pub fn with_places(mut self, places: u32) -> Self {
        self.places = places;
        self
    }
}

// Equality considers only the kelvin value, not the display settings.
impl PartialEq for Temperature {
    fn eq(&self, other: &Self) -> bool {
        self.k == other.k
    }
}

impl PartialOrd for Temperature {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.k.partial_cmp(&other.k)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            TemperatureUnit::Kelvin => {
                write!(f, "{} K", round_half_away(self.kelvin(), self.places))
            },
            TemperatureUnit::Celsius => {
                write!(f, "{}°C", round_half_away(self.celsius(), self.places))
            },
            TemperatureUnit::Fahrenheit => {
                write!(f, "{}°F", round_half_away(self.fahrenheit(), self.places))
            },
        }
    }
}
