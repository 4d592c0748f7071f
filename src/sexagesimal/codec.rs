// ============================================================================
// Sexagesimal Codec
// Signed scalar <-> (major, minor, minor, fraction) conversion
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sign of a decomposed quantity.
///
/// Zero decomposes as positive. Individual components are stored as
/// magnitudes, so the sign must be applied by the caller when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Sign of a raw scalar. `-0.0`, `0.0` and NaN all map to positive.
    #[inline]
    pub fn of(value: f64) -> Self {
        if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Sign::Positive => '+',
            Sign::Negative => '-',
        }
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A scalar decomposed into nested base-60 components.
///
/// For an angle this is degrees/arcminutes/arcseconds; for a time duration
/// it is hours/minutes/seconds. The components are magnitudes; `sign`
/// carries the sign of the original scalar.
///
/// `fraction` holds the sub-second digits at the rounding place used for
/// the decomposition, trailing zeros trimmed. An empty string means the
/// fraction is exactly zero, not that it is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sexagesimal {
    pub sign: Sign,
    pub major: i64,
    pub minor1: i64,
    pub minor2: i64,
    pub fraction: String,
}

/// Rounds `value` to `places` decimal digits, half away from zero.
#[inline]
pub fn round_half_away(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Decomposes a signed scalar into sexagesimal components.
///
/// The scalar is rounded to `round_place` decimal digits first so that the
/// integer components and the fraction string agree with each other. The
/// fraction is produced from a fixed-decimal rendering of the rounded value
/// (never scientific notation) with trailing zeros trimmed.
///
/// Non-finite scalars are not guarded; they decompose to zero components
/// and an empty fraction, and callers formatting such values get whatever
/// the continuous views produce.
///
/// # Example
/// ```
/// use astro_units::sexagesimal::{decompose, Sign};
///
/// let parts = decompose(-3661.25, 9);
/// assert_eq!(parts.sign, Sign::Negative);
/// assert_eq!((parts.major, parts.minor1, parts.minor2), (1, 1, 1));
/// assert_eq!(parts.fraction, "25");
/// ```
pub fn decompose(scalar: f64, round_place: u32) -> Sexagesimal {
    let rounded = round_half_away(scalar, round_place);
    let total = rounded.abs();

    let major = (total / 3600.0).floor() as i64;
    let minor1 = ((total / 60.0).floor() as i64) % 60;
    let minor2 = (total.floor() as i64) % 60;

    // Fixed-decimal rendering keeps the fraction digits consistent with the
    // integer components extracted above.
    let fixed = format!("{:.*}", round_place as usize, total);
    let fraction = match fixed.split_once('.') {
        Some((_, digits)) => digits.trim_end_matches('0').to_string(),
        None => String::new(),
    };

    Sexagesimal {
        sign: Sign::of(scalar),
        major,
        minor1,
        minor2,
        fraction,
    }
}

/// Composes sexagesimal components back into a signed scalar.
///
/// Any component may carry the sign; the sign of the first non-zero value
/// scanning major -> minor1 -> minor2 -> fraction determines the sign of the
/// result, which allows e.g. `(0, 0, -5, 0)` to express a negative
/// sub-minute offset. All-zero input composes to positive zero.
///
/// Major and minor1 are truncated to integers. When a non-zero fraction is
/// supplied, minor2 is truncated as well: the fraction argument and minor2's
/// own fractional part are mutually exclusive, with the fraction taking
/// precedence. A fraction with `|fraction| >= 1` is reinterpreted as
/// `0.<integer-digits>`; callers that passed `1234` meaning `.1234` get the
/// value they intended. See the characterization tests before relying on
/// that behavior.
pub fn compose(major: f64, minor1: f64, minor2: f64, fraction: f64) -> f64 {
    let sign = component_sign(major, minor1, minor2, fraction);

    let major = major.trunc();
    let minor1 = minor1.trunc();

    let (minor2, fraction) = if fraction != 0.0 {
        (minor2.trunc(), normalize_fraction(fraction))
    } else {
        (minor2, 0.0)
    };

    let magnitude = major.abs() * 3600.0 + minor1.abs() * 60.0 + minor2.abs() + fraction.abs();

    match sign {
        Sign::Negative => -magnitude,
        Sign::Positive => magnitude,
    }
}

/// Sign of the first non-zero component, scanning left to right.
fn component_sign(major: f64, minor1: f64, minor2: f64, fraction: f64) -> Sign {
    for value in [major, minor1, minor2, fraction] {
        if value != 0.0 {
            return Sign::of(value);
        }
    }
    Sign::Positive
}

/// Reinterprets an out-of-range fraction as `0.<integer-digits>`.
fn normalize_fraction(fraction: f64) -> f64 {
    if fraction.abs() >= 1.0 {
        let digits = fraction.abs().trunc() as i64;
        let width = digits.to_string().len() as i32;
        digits as f64 / 10f64.powi(width)
    } else {
        fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_positive() {
        let parts = decompose(45296.1234, 9);
        assert_eq!(parts.sign, Sign::Positive);
        assert_eq!(parts.major, 12);
        assert_eq!(parts.minor1, 34);
        assert_eq!(parts.minor2, 56);
        assert_eq!(parts.fraction, "1234");
    }

    #[test]
    fn test_decompose_negative() {
        let parts = decompose(-3661.5, 9);
        assert_eq!(parts.sign, Sign::Negative);
        assert_eq!((parts.major, parts.minor1, parts.minor2), (1, 1, 1));
        assert_eq!(parts.fraction, "5");
    }

    #[test]
    fn test_decompose_zero() {
        let parts = decompose(0.0, 9);
        assert_eq!(parts.sign, Sign::Positive);
        assert_eq!((parts.major, parts.minor1, parts.minor2), (0, 0, 0));
        assert_eq!(parts.fraction, "");
    }

    #[test]
    fn test_decompose_exact_fraction_is_empty_string() {
        // Exactly-zero fraction must come back as "", not "0".
        let parts = decompose(3600.0, 9);
        assert_eq!(parts.fraction, "");
    }

    #[test]
    fn test_decompose_rounds_before_extraction() {
        // 59.9999999996 at 9 places rounds to 60, which must carry into the
        // minute component rather than leaving s=59 against an empty fraction.
        let parts = decompose(59.999_999_999_6, 9);
        assert_eq!((parts.major, parts.minor1, parts.minor2), (0, 1, 0));
        assert_eq!(parts.fraction, "");
    }

    #[test]
    fn test_decompose_rounding_is_half_away_from_zero() {
        let parts = decompose(0.5, 0);
        assert_eq!(parts.minor2, 1);
        let parts = decompose(-0.5, 0);
        assert_eq!(parts.minor2, 1);
        assert_eq!(parts.sign, Sign::Negative);
    }

    #[test]
    fn test_decompose_round_place_zero() {
        let parts = decompose(61.75, 0);
        assert_eq!((parts.minor1, parts.minor2), (1, 2));
        assert_eq!(parts.fraction, "");
    }

    #[test]
    fn test_compose_basic() {
        assert_eq!(compose(1.0, 1.0, 1.0, 0.1), 3661.1);
        assert_eq!(compose(12.0, 34.0, 56.0, 0.1234), 45296.1234);
    }

    #[test]
    fn test_compose_sign_from_first_nonzero() {
        assert_eq!(compose(-1.0, 0.0, 0.0, 0.0), -3600.0);
        assert_eq!(compose(0.0, -1.0, 0.0, 0.0), -60.0);
        assert_eq!(compose(0.0, 0.0, -5.0, 0.0), -5.0);
        assert_eq!(compose(0.0, 0.0, 0.0, -0.5), -0.5);
        // Later signs are ignored once a leading component is non-zero.
        assert_eq!(compose(1.0, -10.0, 0.0, 0.0), 4200.0);
        assert_eq!(compose(1.0, 0.0, -10.0, 0.0), 3610.0);
    }

    #[test]
    fn test_compose_all_zero_is_positive_zero() {
        let zero = compose(0.0, 0.0, 0.0, 0.0);
        assert_eq!(zero, 0.0);
        assert!(!zero.is_sign_negative());
    }

    #[test]
    fn test_compose_truncates_major_and_minor() {
        assert_eq!(compose(1.9, 2.9, 3.0, 0.0), 3600.0 + 120.0 + 3.0);
    }

    #[test]
    fn test_compose_fraction_displaces_seconds_fraction() {
        // With a fraction present the seconds component is truncated.
        assert_eq!(compose(0.0, 0.0, 5.75, 0.5), 5.5);
        // Without one, fractional seconds pass through.
        assert_eq!(compose(0.0, 0.0, 5.75, 0.0), 5.75);
    }

    #[test]
    fn test_compose_integer_fraction_reinterpreted_as_digits() {
        // Legacy recovery: 1234 means .1234, not 1234 whole units.
        assert_eq!(compose(0.0, 0.0, 1.0, 1234.0), 1.1234);
        assert_eq!(compose(0.0, 0.0, 0.0, 5.0), 0.5);
    }

    #[test]
    fn test_round_trip() {
        let scalar = compose(12.0, 34.0, 56.0, 0.1234);
        let parts = decompose(scalar, 9);
        assert_eq!(parts.major, 12);
        assert_eq!(parts.minor1, 34);
        assert_eq!(parts.minor2, 56);
        assert_eq!(parts.fraction, "1234");
    }

    #[test]
    fn test_non_finite_propagates() {
        assert!(compose(f64::NAN, 0.0, 0.0, 0.0).is_nan());
        let parts = decompose(f64::NAN, 9);
        assert_eq!(parts.fraction, "");
    }

    #[test]
    fn test_sign_of() {
        assert_eq!(Sign::of(-1.0), Sign::Negative);
        assert_eq!(Sign::of(1.0), Sign::Positive);
        assert_eq!(Sign::of(0.0), Sign::Positive);
        assert_eq!(Sign::of(-0.0), Sign::Positive);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn round_trip_components(
                d in 0i64..360,
                m in 0i64..60,
                s in 0i64..60,
            ) {
                let scalar = compose(d as f64, m as f64, s as f64, 0.0);
                let parts = decompose(scalar, 9);
                prop_assert_eq!(parts.major, d);
                prop_assert_eq!(parts.minor1, m);
                prop_assert_eq!(parts.minor2, s);
                prop_assert_eq!(parts.fraction, "");
            }

            #[test]
            fn decomposition_magnitudes_in_range(scalar in -1.0e9f64..1.0e9) {
                let parts = decompose(scalar, 9);
                prop_assert!(parts.major >= 0);
                prop_assert!((0..60).contains(&parts.minor1));
                prop_assert!((0..60).contains(&parts.minor2));
            }

            #[test]
            fn sign_matches_scalar(scalar in -1.0e9f64..1.0e9) {
                let parts = decompose(scalar, 9);
                if scalar < 0.0 {
                    prop_assert_eq!(parts.sign, Sign::Negative);
                } else {
                    prop_assert_eq!(parts.sign, Sign::Positive);
                }
            }
        }
    }
}
