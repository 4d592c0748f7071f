// ============================================================================
// Time
// Interval of time stored canonically in seconds
// ============================================================================

use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::format::{render, Formattable, Grammar};
use crate::quantity::angle::Angle;
use crate::sexagesimal::{compose, decompose, Sign};

/// Seconds per minute.
const SEC_PER_MIN: f64 = 60.0;
/// Seconds per hour.
const SEC_PER_HOUR: f64 = 3600.0;
/// Seconds per day.
const SEC_PER_DAY: f64 = 86400.0;

/// An interval of time.
///
/// The canonical value is a single f64 holding seconds; decimal views
/// (minutes, hours, days, weeks, years) and the h/m/s components are
/// derived on demand. Instances are immutable values.
///
/// # Example
/// ```
/// use astro_units::Time;
///
/// let t = Time::from_hms(1.0, 1.0, 1.0, 0.1);
/// assert_eq!(t.sec(), 3661.1);
/// assert_eq!(t.format("0h:0m:0s.3f"), "01:01:01.1");
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Time {
    sec: f64,
    format: Cow<'static, str>,
    round: u32,
}

impl Time {
    /// Number of days in a Julian year.
    pub const JULIAN_YEAR: f64 = 365.25;

    /// Default format, `07:47:16.8`
    pub const FORMAT_DEFAULT: &'static str = "0h:0m:0s.3f";

    /// HMS format, `07ʰ47ᵐ16ˢ.8`
    pub const FORMAT_HMS: &'static str = "0hʰ0mᵐ0sˢ.3f";

    /// Spaced format, `7h 47m 16.8s`
    pub const FORMAT_SPACED: &'static str = "h\\h m\\m s.3f\\s";

    /// Year format, `1.767 years`
    pub const FORMAT_YEARS: &'static str = "3Y year\\s";

    /// Week format, `2.046 weeks`
    pub const FORMAT_WEEKS: &'static str = "3W week\\s";

    /// Day format, `1.325 days`
    pub const FORMAT_DAYS: &'static str = "3D day\\s";

    /// Hour format, `7.788 hours`
    pub const FORMAT_HOURS: &'static str = "3H \\hour\\s";

    /// Minute format, `467.28 min`
    pub const FORMAT_MIN: &'static str = "3M \\min";

    /// Second format, `86.4 sec`
    pub const FORMAT_SEC: &'static str = "3S \\sec";

    // ========================================================================
    // Constructors
    // ========================================================================

    /// Creates a new time interval from a number of seconds.
    pub fn from_sec(sec: f64) -> Self {
        Self {
            sec,
            format: Cow::Borrowed(Self::FORMAT_DEFAULT),
            round: 9,
        }
    }

    /// Creates a new time interval from a number of minutes.
    pub fn from_min(min: f64) -> Self {
        Self::from_sec(min * SEC_PER_MIN)
    }

    /// Creates a new time interval from a number of hours.
    pub fn from_hours(hours: f64) -> Self {
        Self::from_sec(hours * SEC_PER_HOUR)
    }

    /// Creates a new time interval from a number of days.
    pub fn from_days(days: f64) -> Self {
        Self::from_sec(days * SEC_PER_DAY)
    }

    /// Creates a new time interval from a number of weeks.
    pub fn from_weeks(weeks: f64) -> Self {
        Self::from_sec(weeks * SEC_PER_DAY * 7.0)
    }

    /// Creates a new time interval from a number of Julian years.
    pub fn from_years(years: f64) -> Self {
        Self::from_years_of(years, Self::JULIAN_YEAR)
    }

    /// Creates a new time interval from a number of years with an explicit
    /// days-per-year definition.
    pub fn from_years_of(years: f64, days_per_year: f64) -> Self {
        Self::from_sec(years * SEC_PER_DAY * days_per_year)
    }

    /// Creates a new time interval from hour, minute and second components.
    ///
    /// Any component may carry the sign; the first non-zero component
    /// scanning left to right determines the sign of the whole interval.
    pub fn from_hms(h: f64, m: f64, s: f64, f: f64) -> Self {
        Self::from_sec(compose(h, m, s, f))
    }

    /// Creates a new time interval from an angle representing the
    /// proportion of time passed within an interval.
    pub fn from_angle(angle: &Angle, interval: &Time) -> Self {
        angle.to_time(Some(interval))
    }

    /// Creates a new time interval from a chrono duration.
    pub fn from_duration(duration: chrono::Duration) -> Self {
        Self::from_sec(duration.num_seconds() as f64 + duration.subsec_nanos() as f64 / 1e9)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Time expressed in decimal seconds.
    #[inline]
    pub fn sec(&self) -> f64 {
        self.sec
    }

    /// Time expressed in decimal minutes.
    #[inline]
    pub fn min(&self) -> f64 {
        self.sec / SEC_PER_MIN
    }

    /// Time expressed in decimal hours.
    #[inline]
    pub fn hours(&self) -> f64 {
        self.sec / SEC_PER_HOUR
    }

    /// Time expressed in decimal days.
    #[inline]
    pub fn days(&self) -> f64 {
        self.sec / SEC_PER_DAY
    }

    /// Time expressed in decimal weeks.
    #[inline]
    pub fn weeks(&self) -> f64 {
        self.sec / SEC_PER_DAY / 7.0
    }

    /// Time expressed in decimal Julian years.
    #[inline]
    pub fn years(&self) -> f64 {
        self.sec / SEC_PER_DAY / Self::JULIAN_YEAR
    }

    /// Sign of the interval. Zero is positive.
    #[inline]
    pub fn sign(&self) -> Sign {
        Sign::of(self.sec)
    }

    /// Integer hour component (magnitude).
    pub fn h(&self) -> i64 {
        decompose(self.sec, self.round).major
    }

    /// Integer minute component (magnitude).
    pub fn m(&self) -> i64 {
        decompose(self.sec, self.round).minor1
    }

    /// Integer second component (magnitude).
    pub fn s(&self) -> i64 {
        decompose(self.sec, self.round).minor2
    }

    /// Fractional second digits at the instance rounding place, trailing
    /// zeros trimmed. Empty means exactly zero.
    pub fn f(&self) -> String {
        decompose(self.sec, self.round).fraction
    }

    /// Converts to a chrono duration. Returns `None` when the value does
    /// not fit chrono's range.
    pub fn to_duration(&self) -> Option<chrono::Duration> {
        let secs = self.sec.floor();
        let nanos = ((self.sec - secs) * 1e9).round() as u32;
        chrono::Duration::new(secs as i64, nanos)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Returns the sum of this interval and another.
    pub fn add(&self, other: &Time) -> Time {
        self.derive(self.sec + other.sec)
    }

    /// Returns the difference of this interval and another.
    pub fn sub(&self, other: &Time) -> Time {
        self.derive(self.sec - other.sec)
    }

    /// Returns the product of the canonical second values.
    pub fn mul(&self, other: &Time) -> Time {
        self.derive(self.sec * other.sec)
    }

    /// Returns the quotient of the canonical second values.
    pub fn div(&self, other: &Time) -> Time {
        self.derive(self.sec / other.sec)
    }

    /// Returns the negation of this interval.
    pub fn neg(&self) -> Time {
        self.derive(-self.sec)
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Formats the interval with a template string, e.g. `0h:0m:0s.3f`.
    pub fn format(&self, template: &str) -> String {
        render(template, self)
    }

    /// Returns the interval with a new active format used by `Display`.
    pub fn with_format(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        self.format = template.into();
        self
    }

    /// Returns the interval with a new rounding place for the component
    /// accessors (default 9).
    pub fn with_rounding(mut self, place: u32) -> Self {
        self.round = place;
        self
    }

    fn derive(&self, sec: f64) -> Time {
        Time {
            sec,
            format: self.format.clone(),
            round: self.round,
        }
    }
}

impl Formattable for Time {
    const GRAMMAR: Grammar = Grammar {
        major: 'h',
        major_width: 2,
        continuous: &['Y', 'W', 'D', 'H', 'M', 'S'],
        signed: false,
    };

    fn canonical(&self) -> f64 {
        self.sec
    }

    fn continuous(&self, letter: char) -> f64 {
        match letter {
            'Y' => self.years(),
            'W' => self.weeks(),
            'D' => self.days(),
            'H' => self.hours(),
            'M' => self.min(),
            _ => self.sec(),
        }
    }
}

impl PartialEq for Time {
    fn eq(&self, other: &Self) -> bool {
        self.sec == other.sec
    }
}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.sec.partial_cmp(&other.sec)
    }
}

// Fully qualified so the by-value trait methods never shadow the inherent
// borrowing `add`/`sub`/`mul`/`div`/`neg` in this file's scope.
impl std::ops::Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time::add(&self, &rhs)
    }
}

impl std::ops::Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        Time::sub(&self, &rhs)
    }
}

impl std::ops::Neg for Time {
    type Output = Time;

    fn neg(self) -> Time {
        Time::neg(&self)
    }
}

impl std::ops::Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        self.derive(self.sec * rhs)
    }
}

impl std::ops::Div<f64> for Time {
    type Output = Time;

    fn div(self, rhs: f64) -> Time {
        self.derive(self.sec / rhs)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render(&self.format, self))
    }
}
