// ============================================================================
// Quantity Errors
// Error types for quantity construction and conversion
// ============================================================================

use std::fmt;

/// Errors that can occur when constructing or converting quantities.
///
/// Most operations in this crate are pure float arithmetic and cannot fail;
/// errors only surface where a value crosses into exact decimal space
/// (distance, velocity) or where a division has no meaningful result
/// (parallax of a zero angle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitsError {
    /// Input value was NaN or infinite
    NonFinite,
    /// Value cannot be represented in exact decimal form
    OutOfRange,
    /// Attempted division by zero
    DivisionByZero,
}

impl fmt::Display for UnitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitsError::NonFinite => write!(f, "value is not finite"),
            UnitsError::OutOfRange => {
                write!(f, "value out of range for exact decimal representation")
            },
            UnitsError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for UnitsError {}

/// Result type alias for quantity operations
pub type UnitsResult<T> = Result<T, UnitsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(UnitsError::NonFinite.to_string(), "value is not finite");
        assert_eq!(UnitsError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(UnitsError::NonFinite, UnitsError::NonFinite);
        assert_ne!(UnitsError::NonFinite, UnitsError::OutOfRange);
    }
}
