// ============================================================================
// Format Engine
// One substitution pass over a scanned template
// ============================================================================

use std::fmt::Write;

use tracing::trace;

use super::token::{tokenize, Component, Grammar, Token};
use crate::sexagesimal::{decompose, round_half_away};

/// Default rounding place when a template requests no fraction digits.
const DEFAULT_ROUND_PLACE: u32 = 9;

/// A quantity that can be rendered through the template engine.
///
/// Implementors expose their canonical sexagesimal scalar (arcseconds for
/// angles, seconds for times), the template alphabet of their domain, and
/// the decimal views behind the uppercase continuous-unit letters.
pub trait Formattable {
    /// Template alphabet of this domain.
    const GRAMMAR: Grammar;

    /// Canonical scalar fed to the sexagesimal codec.
    fn canonical(&self) -> f64;

    /// Decimal view behind a continuous-unit letter from [`Grammar::continuous`].
    fn continuous(&self, letter: char) -> f64;
}

/// Renders a quantity through a token template.
///
/// The rounding place for the whole render is the maximum digit count
/// requested by any `<N>f` token (default 9), so the integer components and
/// the fraction always describe the same rounded value.
///
/// Templates are permissive: unrecognized letters pass through verbatim,
/// and a template with no recognized tokens renders as its literal text.
pub fn render<Q: Formattable>(template: &str, quantity: &Q) -> String {
    let tokens = tokenize(template, &Q::GRAMMAR);

    let round_place = tokens
        .iter()
        .filter_map(|t| match t {
            Token::Fraction { digits } => Some(*digits as u32),
            _ => None,
        })
        .max()
        .unwrap_or(DEFAULT_ROUND_PLACE);

    let parts = decompose(quantity.canonical(), round_place);
    let sign_consumed = tokens.iter().any(|t| matches!(t, Token::Sign));

    trace!(template, round_place, "rendering quantity template");

    let mut out = String::with_capacity(template.len() + 8);
    for token in &tokens {
        match token {
            Token::Literal(text) => out.push_str(text),
            Token::Escaped(c) => out.push(*c),
            Token::Sign => out.push(parts.sign.as_char()),
            Token::Component { which, padded } => {
                let value = match which {
                    Component::Major => parts.major,
                    Component::Minor1 => parts.minor1,
                    Component::Minor2 => parts.minor2,
                };
                // The major component carries the minus sign when no
                // explicit sign token claimed it.
                if *which == Component::Major && !sign_consumed && parts.sign.is_negative() {
                    out.push('-');
                }
                let width = match (which, padded) {
                    (Component::Major, true) => Q::GRAMMAR.major_width,
                    (_, true) => 2,
                    (_, false) => 0,
                };
                let _ = write!(out, "{:0width$}", value);
            },
            Token::Continuous { letter, places } => {
                let value = round_half_away(quantity.continuous(*letter), *places);
                let _ = write!(out, "{}", value);
            },
            Token::Fraction { digits } => {
                let frac: &str = &parts.fraction[..parts.fraction.len().min(*digits)];
                if frac.chars().all(|c| c == '0') {
                    // Exactly-zero fraction: drop the token and a literal
                    // '.' immediately before it, so exact values never
                    // render a dangling decimal point.
                    if out.ends_with('.') {
                        out.pop();
                    }
                } else {
                    out.push_str(frac);
                }
            },
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestAngle(f64);

    impl Formattable for TestAngle {
        const GRAMMAR: Grammar = Grammar {
            major: 'd',
            major_width: 3,
            continuous: &['D', 'R'],
            signed: true,
        };

        fn canonical(&self) -> f64 {
            self.0
        }

        fn continuous(&self, letter: char) -> f64 {
            match letter {
                'D' => self.0 / 3600.0,
                _ => (self.0 / 3600.0).to_radians(),
            }
        }
    }

    struct TestTime(f64);

    impl Formattable for TestTime {
        const GRAMMAR: Grammar = Grammar {
            major: 'h',
            major_width: 2,
            continuous: &['Y', 'W', 'D', 'H', 'M', 'S'],
            signed: false,
        };

        fn canonical(&self) -> f64 {
            self.0
        }

        fn continuous(&self, letter: char) -> f64 {
            match letter {
                'Y' => self.0 / 86400.0 / 365.25,
                'W' => self.0 / 86400.0 / 7.0,
                'D' => self.0 / 86400.0,
                'H' => self.0 / 3600.0,
                'M' => self.0 / 60.0,
                _ => self.0,
            }
        }
    }

    #[test]
    fn test_render_padded_with_sign() {
        let angle = TestAngle(45296.1234);
        assert_eq!(render("+0d 0m 0s.3f", &angle), "+012 34 56.123");
    }

    #[test]
    fn test_render_zero_fraction_suppressed() {
        let time = TestTime(3600.0);
        assert_eq!(render("0h:0m:0s.3f", &time), "01:00:00");
    }

    #[test]
    fn test_render_bare_components() {
        let angle = TestAngle(1.0);
        assert_eq!(render("d m s.9f", &angle), "0 0 1");
    }

    #[test]
    fn test_render_small_fraction() {
        let angle = TestAngle(0.1);
        assert_eq!(render("d m s.9f", &angle), "0 0 0.1");
    }

    #[test]
    fn test_render_negative_without_sign_token() {
        let angle = TestAngle(-45296.1234);
        assert_eq!(render("0d:0m:0s.3f", &angle), "-012:34:56.123");
        assert_eq!(render("d m s", &angle), "-12 34 56");
    }

    #[test]
    fn test_render_sign_token_claims_sign() {
        let angle = TestAngle(-45296.1234);
        // With an explicit + the major component must not double the sign.
        assert_eq!(render("+0d:0m:0s.3f", &angle), "-012:34:56.123");
        let positive = TestAngle(45296.1234);
        assert_eq!(render("+0d:0m:0s.3f", &positive), "+012:34:56.123");
    }

    #[test]
    fn test_render_continuous_decimal() {
        let angle = TestAngle(45296.1234);
        assert_eq!(render("9D", &angle), "12.5822565");
    }

    #[test]
    fn test_render_continuous_zero_places() {
        let time = TestTime(5400.0);
        assert_eq!(render("H", &time), "2");
    }

    #[test]
    fn test_render_time_units() {
        let time = TestTime(86400.0 * 1.325);
        assert_eq!(render("3D day\\s", &time), "1.325 days");
    }

    #[test]
    fn test_render_escaped_letters() {
        let time = TestTime(28036.8);
        assert_eq!(render("h\\h m\\m s.3f\\s", &time), "7h 47m 16.8s");
    }

    #[test]
    fn test_render_literal_template_unchanged() {
        let time = TestTime(1.0);
        assert_eq!(render("::..;;", &time), "::..;;");
    }

    #[test]
    fn test_render_unknown_letters_pass_through() {
        let angle = TestAngle(3600.0);
        assert_eq!(render("d x q", &angle), "1 x q");
    }

    #[test]
    fn test_render_fraction_round_place_consistency() {
        // 16.8 seconds at 3 fraction digits: integer second must not round
        // away from the fraction digits.
        let time = TestTime(16.8499);
        assert_eq!(render("s.1f", &time), "16.8");
        assert_eq!(render("s.3f", &time), "16.85");
    }

    #[test]
    fn test_render_fraction_all_zero_digits_suppressed() {
        // Fraction "0004" truncated to 3 digits is numerically zero and is
        // suppressed together with the preceding dot.
        let time = TestTime(5.0004);
        assert_eq!(render("s.3f", &time), "5");
        assert_eq!(render("s.4f", &time), "5.0004");
    }
}
