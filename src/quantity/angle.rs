// ============================================================================
// Angle
// Geometric angle stored canonically in milliarcseconds
// ============================================================================

use std::borrow::Cow;
use std::fmt;

use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::format::{render, Formattable, Grammar};
use crate::quantity::time::Time;
use crate::sexagesimal::{compose, decompose, Sign};

/// Milliarcseconds per degree.
const MAS_PER_DEG: f64 = 3.6e6;
/// Milliarcseconds per arcminute.
const MAS_PER_AMIN: f64 = 6.0e4;
/// Milliarcseconds per arcsecond.
const MAS_PER_ASEC: f64 = 1.0e3;

/// A geometric angle.
///
/// The canonical value is a single f64 holding milliarcseconds; every other
/// view (degrees, radians, arcminutes, the d/m/s components) is derived on
/// demand. Instances are immutable values: arithmetic and normalization
/// return new angles.
///
/// # Example
/// ```
/// use astro_units::Angle;
///
/// let a = Angle::from_dms(12.0, 34.0, 56.0, 0.1234);
/// assert!((a.deg() - 12.5822565).abs() < 1e-7);
/// assert_eq!(a.format("+0d°0m'0s\".3f"), "+012°34'56\".123");
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Angle {
    mas: f64,
    format: Cow<'static, str>,
    round: u32,
}

impl Angle {
    /// Default format, `-012°34'56".123`
    pub const FORMAT_DEFAULT: &'static str = "+0d°0m'0s\".3f";

    /// Compact format, `-12°34'56".1`
    pub const FORMAT_COMPACT: &'static str = "d°m's\".1f";

    /// Spaced format, `-012 34 56.123`
    pub const FORMAT_SPACED: &'static str = "+0d 0m 0s.3f";

    /// Colon format, `-012:34:56.123`
    pub const FORMAT_COLON: &'static str = "+0d:0m:0s.3f";

    /// Decimal format, `12.5822565`
    pub const FORMAT_DECIMAL: &'static str = "9D";

    // ========================================================================
    // Constructors
    // ========================================================================

    /// Creates a new angle from a number of milliarcseconds.
    pub fn from_mas(mas: f64) -> Self {
        Self {
            mas,
            format: Cow::Borrowed(Self::FORMAT_DEFAULT),
            round: 9,
        }
    }

    /// Creates a new angle from a number of arcseconds.
    pub fn from_asec(asec: f64) -> Self {
        Self::from_mas(asec * MAS_PER_ASEC)
    }

    /// Creates a new angle from a number of arcminutes.
    pub fn from_amin(amin: f64) -> Self {
        Self::from_mas(amin * MAS_PER_AMIN)
    }

    /// Creates a new angle from a number of degrees.
    pub fn from_deg(deg: f64) -> Self {
        Self::from_mas(deg * MAS_PER_DEG)
    }

    /// Creates a new angle from a number of radians.
    pub fn from_rad(rad: f64) -> Self {
        Self::from_deg(rad.to_degrees())
    }

    /// Creates a new angle from degree, arcminute and arcsecond components.
    ///
    /// Any component may carry the sign; the first non-zero component
    /// scanning left to right determines the sign of the whole angle.
    pub fn from_dms(d: f64, m: f64, s: f64, f: f64) -> Self {
        Self::from_asec(compose(d, m, s, f))
    }

    /// Creates a new angle equal to the number of revolutions of a duration
    /// of time within a time interval. The interval defaults to one day.
    pub fn from_time(time: &Time, interval: Option<&Time>) -> Self {
        let interval = interval.map_or(86400.0, Time::sec);
        Self::from_deg(time.sec() / interval * 360.0)
    }

    /// Creates a new angle representing the value of π.
    pub fn pi() -> Self {
        Self::from_rad(std::f64::consts::PI)
    }

    /// Creates a new angle from the arc tangent of two values in radians.
    pub fn atan2(y: f64, x: f64) -> Self {
        Self::from_rad(y.atan2(x))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Angle expressed in decimal milliarcseconds.
    #[inline]
    pub fn mas(&self) -> f64 {
        self.mas
    }

    /// Angle expressed in decimal arcseconds.
    #[inline]
    pub fn asec(&self) -> f64 {
        self.mas / MAS_PER_ASEC
    }

    /// Angle expressed in decimal arcminutes.
    #[inline]
    pub fn amin(&self) -> f64 {
        self.mas / MAS_PER_AMIN
    }

    /// Angle expressed in decimal degrees.
    #[inline]
    pub fn deg(&self) -> f64 {
        self.mas / MAS_PER_DEG
    }

    /// Angle expressed in decimal radians.
    #[inline]
    pub fn rad(&self) -> f64 {
        self.deg().to_radians()
    }

    /// Sign of the angle. Zero is positive.
    #[inline]
    pub fn sign(&self) -> Sign {
        Sign::of(self.mas)
    }

    /// Integer degree component (magnitude).
    pub fn d(&self) -> i64 {
        decompose(self.asec(), self.round).major
    }

    /// Integer arcminute component (magnitude).
    pub fn m(&self) -> i64 {
        decompose(self.asec(), self.round).minor1
    }

    /// Integer arcsecond component (magnitude).
    pub fn s(&self) -> i64 {
        decompose(self.asec(), self.round).minor2
    }

    /// Fractional arcsecond digits at the instance rounding place, trailing
    /// zeros trimmed. Empty means exactly zero.
    pub fn f(&self) -> String {
        decompose(self.asec(), self.round).fraction
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Returns the sum of this angle and another.
    pub fn add(&self, other: &Angle) -> Angle {
        self.derive(self.mas + other.mas)
    }

    /// Returns the difference of this angle and another.
    pub fn sub(&self, other: &Angle) -> Angle {
        self.derive(self.mas - other.mas)
    }

    /// Returns the negation of this angle.
    pub fn neg(&self) -> Angle {
        self.derive(-self.mas)
    }

    /// Normalizes the angle to the interval `[lb, ub)` in degrees.
    ///
    /// The value is reduced modulo the upper bound and shifted up by the
    /// upper bound when it falls below the lower bound. An exactly-zero
    /// result maps to the upper bound when the pre-normalized value was
    /// negative and to zero otherwise; that asymmetry is long-standing
    /// behavior that downstream ephemeris code depends on.
    pub fn normalize(&self, lb: f64, ub: f64) -> Angle {
        let lb = lb * MAS_PER_DEG;
        let ub = ub * MAS_PER_DEG;

        let mut mas = self.mas % ub;
        if mas < lb {
            mas += ub;
        }
        if mas == 0.0 {
            mas = if self.mas < 0.0 { ub } else { 0.0 };
        }

        trace!(from = self.mas, to = mas, "normalized angle");
        self.derive(mas)
    }

    /// Converts the angle to the proportion of time passed within a time
    /// interval, where 360 degrees equals the interval (default one day).
    pub fn to_time(&self, interval: Option<&Time>) -> Time {
        let interval = interval.map_or(86400.0, Time::sec);
        Time::from_sec(self.deg() / 360.0 * interval)
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Formats the angle with a template string, e.g. `+0d°0m'0s".3f`.
    pub fn format(&self, template: &str) -> String {
        render(template, self)
    }

    /// Returns the angle with a new active format used by `Display`.
    pub fn with_format(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        self.format = template.into();
        self
    }

    /// Returns the angle with a new rounding place for the component
    /// accessors (default 9).
    pub fn with_rounding(mut self, place: u32) -> Self {
        self.round = place;
        self
    }

    /// New angle with this instance's format and rounding settings.
    fn derive(&self, mas: f64) -> Angle {
        Angle {
            mas,
            format: self.format.clone(),
            round: self.round,
        }
    }
}

impl Formattable for Angle {
    const GRAMMAR: Grammar = Grammar {
        major: 'd',
        major_width: 3,
        continuous: &['D', 'R'],
        signed: true,
    };

    fn canonical(&self) -> f64 {
        self.asec()
    }

    fn continuous(&self, letter: char) -> f64 {
        match letter {
            'R' => self.rad(),
            _ => self.deg(),
        }
    }
}

// Equality and ordering consider only the canonical value, not the display
// settings.
impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.mas == other.mas
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.mas.partial_cmp(&other.mas)
    }
}

// The operator impls are written fully qualified so the traits never enter
// this file's scope: a by-value trait `add` in scope would win method
// resolution over the inherent borrowing `add` at every call site.
impl std::ops::Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle::add(&self, &rhs)
    }
}

impl std::ops::Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle::sub(&self, &rhs)
    }
}

impl std::ops::Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::neg(&self)
    }
}

impl std::ops::Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, rhs: f64) -> Angle {
        self.derive(self.mas * rhs)
    }
}

impl std::ops::Div<f64> for Angle {
    type Output = Angle;

    fn div(self, rhs: f64) -> Angle {
        self.derive(self.mas / rhs)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render(&self.format, self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_deg() {
        assert_eq!(Angle::from_deg(180.0).deg(), 180.0);
    }

    #[test]
    fn test_from_rad() {
        assert_eq!(Angle::from_rad(2.0).rad(), 2.0);
    }

    #[test]
    fn test_from_dms() {
        let deg = Angle::from_dms(180.0, 4.0, 6.7, 0.0).deg();
        assert!((deg - 180.0685277778).abs() < 1e-9);
    }

    #[test]
    fn test_from_dms_mixed_signs() {
        // First non-zero component wins; later signs are magnitudes.
        let a = Angle::from_dms(12.0, -34.0, 56.0, 0.1234);
        assert!((a.deg() - 12.5822565).abs() < 1e-7);
        assert_eq!(a.sign(), Sign::Positive);
    }

    #[test]
    fn test_from_time() {
        let t = Time::from_sec(21600.0);
        assert_eq!(Angle::from_time(&t, None).deg(), 90.0);

        let hour = Time::from_hours(1.0);
        let t = Time::from_sec(2700.0);
        assert_eq!(Angle::from_time(&t, Some(&hour)).deg(), 270.0);
    }

    #[test]
    fn test_pi() {
        assert_eq!(Angle::pi().rad(), std::f64::consts::PI);
    }

    #[test]
    fn test_atan2() {
        assert_eq!(Angle::atan2(40.0, 14.0).rad(), 40f64.atan2(14.0));
    }

    #[test]
    fn test_unit_views() {
        let a = Angle::from_deg(1.0);
        assert_eq!(a.amin(), 60.0);
        assert_eq!(a.asec(), 3600.0);
        assert_eq!(a.mas(), 3.6e6);
    }

    #[test]
    fn test_components() {
        let a = Angle::from_dms(12.0, 34.0, 56.0, 0.1234);
        assert_eq!(a.d(), 12);
        assert_eq!(a.m(), 34);
        assert_eq!(a.s(), 56);
        assert_eq!(a.f(), "1234");
    }

    #[test]
    fn test_add() {
        assert_eq!(Angle::from_deg(180.0).add(&Angle::from_deg(40.0)).deg(), 220.0);
        assert_eq!(Angle::from_deg(180.0).add(&Angle::from_deg(-40.0)).deg(), 140.0);
        assert_eq!(Angle::from_deg(-10.0).add(&Angle::from_deg(600.0)).deg(), 590.0);
    }

    #[test]
    fn test_sub() {
        assert_eq!(Angle::from_deg(180.0).sub(&Angle::from_deg(40.0)).deg(), 140.0);
        assert_eq!(Angle::from_deg(180.0).sub(&Angle::from_deg(-40.0)).deg(), 220.0);
        assert_eq!(Angle::from_deg(-10.0).sub(&Angle::from_deg(600.0)).deg(), -610.0);
    }

    #[test]
    fn test_neg() {
        assert_eq!(Angle::from_deg(15.0).neg().deg(), -15.0);
    }

    #[test]
    fn test_add_neg_inverse() {
        let a = Angle::from_dms(12.0, 34.0, 56.0, 0.1234);
        assert_eq!(a.add(&a.neg()).mas(), 0.0);
    }

    #[test]
    fn test_ops() {
        let a = Angle::from_deg(30.0) + Angle::from_deg(15.0);
        assert_eq!(a.deg(), 45.0);
        let a = Angle::from_deg(30.0) - Angle::from_deg(15.0);
        assert_eq!(a.deg(), 15.0);
        let a = -Angle::from_deg(30.0);
        assert_eq!(a.deg(), -30.0);
        let a = Angle::from_deg(30.0) * 2.0;
        assert_eq!(a.deg(), 60.0);
        let a = Angle::from_deg(30.0) / 2.0;
        assert_eq!(a.deg(), 15.0);
    }

    #[test]
    fn test_operator_and_method_forms_agree() {
        // Operator sugar and the borrowing methods must coexist in one
        // scope and produce the same values.
        let a = Angle::from_deg(30.0);
        let b = Angle::from_deg(12.0);
        assert_eq!((a.clone() + b.clone()).deg(), a.add(&b).deg());
        assert_eq!((a.clone() - b.clone()).deg(), a.sub(&b).deg());
        assert_eq!((-a.clone()).deg(), a.neg().deg());
    }

    #[test]
    fn test_normalize() {
        assert_eq!(Angle::from_deg(370.0).normalize(0.0, 360.0).deg(), 10.0);
        assert_eq!(Angle::from_deg(480.0).normalize(0.0, 360.0).deg(), 120.0);
        assert_eq!(Angle::from_deg(500.0).normalize(0.0, 180.0).deg(), 140.0);
        assert_eq!(Angle::from_deg(-10.0).normalize(0.0, 360.0).deg(), 350.0);
    }

    #[test]
    fn test_normalize_zero_asymmetry() {
        // Characterization: a negative multiple of the interval lands on the
        // upper bound, a positive one on zero.
        assert_eq!(Angle::from_deg(-360.0).normalize(0.0, 360.0).deg(), 360.0);
        assert_eq!(Angle::from_deg(360.0).normalize(0.0, 360.0).deg(), 0.0);
        assert_eq!(Angle::from_deg(0.0).normalize(0.0, 360.0).deg(), 0.0);
    }

    #[test]
    fn test_normalize_idempotent() {
        for deg in [-725.0, -10.0, 0.5, 119.0, 360.5, 1234.25] {
            let once = Angle::from_deg(deg).normalize(0.0, 360.0);
            let twice = once.normalize(0.0, 360.0);
            assert_eq!(once.deg(), twice.deg(), "deg = {}", deg);
        }
    }

    #[test]
    fn test_to_time_round_trip() {
        let a = Angle::from_deg(90.0);
        assert_eq!(a.to_time(None).sec(), 21600.0);
        let back = Angle::from_time(&a.to_time(None), None);
        assert_eq!(back.deg(), 90.0);
    }

    #[test]
    fn test_format_presets() {
        let a = Angle::from_dms(12.0, 34.0, 56.0, 0.1234);
        assert_eq!(a.format(Angle::FORMAT_DEFAULT), "+012°34'56\".123");
        assert_eq!(a.format(Angle::FORMAT_COMPACT), "12°34'56\".1");
        assert_eq!(a.format(Angle::FORMAT_SPACED), "+012 34 56.123");
        assert_eq!(a.format(Angle::FORMAT_COLON), "+012:34:56.123");
        assert_eq!(a.format(Angle::FORMAT_DECIMAL), "12.5822565");
    }

    #[test]
    fn test_format_exact_arcsecond() {
        assert_eq!(Angle::from_dms(0.0, 0.0, 1.0, 0.0).format("d m s.9f"), "0 0 1");
    }

    #[test]
    fn test_format_fractional_arcsecond() {
        assert_eq!(Angle::from_dms(0.0, 0.0, 0.0, 0.1).format("d m s.9f"), "0 0 0.1");
    }

    #[test]
    fn test_format_radians() {
        assert_eq!(Angle::pi().format("5R"), "3.14159");
    }

    #[test]
    fn test_display_uses_active_format() {
        let a = Angle::from_dms(12.0, 34.0, 56.0, 0.1234);
        assert_eq!(a.to_string(), "+012°34'56\".123");

        let a = a.with_format(Angle::FORMAT_DECIMAL);
        assert_eq!(a.to_string(), "12.5822565");
    }

    #[test]
    fn test_equality_ignores_display_settings() {
        let a = Angle::from_deg(10.0);
        let b = Angle::from_deg(10.0).with_format("9D").with_rounding(3);
        assert_eq!(a, b);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn unit_conversion_identity(deg in -720.0f64..720.0) {
                let a = Angle::from_deg(deg);
                prop_assert!((Angle::from_rad(a.rad()).deg() - deg).abs() < 1e-9);
                prop_assert!((Angle::from_asec(a.asec()).deg() - deg).abs() < 1e-9);
                prop_assert!((Angle::from_amin(a.amin()).deg() - deg).abs() < 1e-9);
            }

            #[test]
            fn normalize_idempotent(deg in -3600.0f64..3600.0) {
                let once = Angle::from_deg(deg).normalize(0.0, 360.0);
                let twice = once.normalize(0.0, 360.0);
                prop_assert_eq!(once.deg(), twice.deg());
            }

            #[test]
            fn add_neg_is_zero(deg in -720.0f64..720.0) {
                let a = Angle::from_deg(deg);
                prop_assert_eq!(a.add(&a.neg()).mas(), 0.0);
            }
        }
    }
}
