//! Error type shared by every quantity operation that can fail.

use alloc::string::String;

/// Result type for quantity construction and parsing.
pub type QuantityResult<T> = Result<T, QuantityError>;

/// Error type for quantity construction, parsing and comparison.
///
/// The `parse`/`from_*` constructors return these; the `try_*` mirrors swallow them and return `None` instead.
/// Clamping (non-negative quantities, saturating `+`/`-`) is never reported as an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    /// The text matched no unit suffix of the quantity, or its number did not parse.
    #[error("invalid {quantity} format: '{text}'")]
    InvalidFormat {
        /// Name of the quantity being parsed.
        quantity: &'static str,
        /// The offending input, as given.
        text: String,
    },

    /// The value violates a hard bound of the quantity's policy, or cannot be represented.
    #[error("{value} is outside the {range} range accepted by {quantity}")]
    OutOfRange {
        /// Name of the quantity being constructed.
        quantity: &'static str,
        /// The rejected value, rendered as text.
        value: String,
        /// Human-readable description of the accepted range.
        range: &'static str,
    },

    /// A comparison was attempted between two different quantity types.
    #[error("cannot compare {expected} with {found}")]
    TypeMismatch {
        /// Quantity on the left-hand side.
        expected: &'static str,
        /// Quantity that was supplied.
        found: &'static str,
    },

    /// A cross-quantity division had a zero divisor.
    #[error("division of {quantity} by zero")]
    DivisionByZero {
        /// Name of the dividend's quantity.
        quantity: &'static str,
    },
}

impl QuantityError {
    pub(crate) fn invalid_format(quantity: &'static str, text: &str) -> Self {
        QuantityError::InvalidFormat {
            quantity,
            text: text.into(),
        }
    }

    pub(crate) fn out_of_range(quantity: &'static str, value: impl core::fmt::Display, range: &'static str) -> Self {
        QuantityError::OutOfRange {
            quantity,
            value: alloc::format!("{value}"),
            range,
        }
    }

    /// Returns `true` for [`QuantityError::InvalidFormat`].
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, QuantityError::InvalidFormat { .. })
    }

    /// Returns `true` for [`QuantityError::OutOfRange`].
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, QuantityError::OutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn invalid_format_message_carries_text() {
        let err = QuantityError::invalid_format("Watt", "12 parsecs");
        assert!(err.is_invalid_format());
        assert_eq!(err.to_string(), "invalid Watt format: '12 parsecs'");
    }

    #[test]
    fn out_of_range_message() {
        let err = QuantityError::OutOfRange {
            quantity: "Percent",
            value: "150".into(),
            range: "[0, 100]",
        };
        assert!(err.is_out_of_range());
        assert_eq!(
            err.to_string(),
            "150 is outside the [0, 100] range accepted by Percent"
        );
    }

    #[test]
    fn type_mismatch_message() {
        let err = QuantityError::TypeMismatch {
            expected: "Ampere",
            found: "Watt",
        };
        assert_eq!(err.to_string(), "cannot compare Ampere with Watt");
    }
}
