//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll computation.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
/// use rust_decimal::Decimal;
///
/// let error = PayrollError::InvalidValue {
///     field: "base_salary".to_string(),
///     value: Decimal::new(-100, 0),
/// };
/// assert_eq!(error.to_string(), "Invalid value for 'base_salary': -100 is negative");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A numeric input was negative where a non-negative amount is required.
    #[error("Invalid value for '{field}': {value} is negative")]
    InvalidValue {
        /// The field that received the negative value.
        field: String,
        /// The offending value.
        value: Decimal,
    },

    /// A text input was empty or contained only whitespace.
    #[error("Invalid text for '{field}': value is empty or whitespace-only")]
    InvalidText {
        /// The field that received the empty text.
        field: String,
    },

    /// A level key was not one of the recognized seniority levels.
    #[error("Unrecognized level '{level}': expected one of junior, middle, senior")]
    UnrecognizedLevel {
        /// The level key that was not recognized.
        level: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_displays_field_and_value() {
        let error = PayrollError::InvalidValue {
            field: "base_salary".to_string(),
            value: Decimal::new(-4000, 0),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value for 'base_salary': -4000 is negative"
        );
    }

    #[test]
    fn test_invalid_value_displays_fractional_amounts() {
        let error = PayrollError::InvalidValue {
            field: "sale_amount".to_string(),
            value: Decimal::new(-125, 2),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value for 'sale_amount': -1.25 is negative"
        );
    }

    #[test]
    fn test_invalid_text_displays_field() {
        let error = PayrollError::InvalidText {
            field: "name".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid text for 'name': value is empty or whitespace-only"
        );
    }

    #[test]
    fn test_unrecognized_level_displays_level() {
        let error = PayrollError::UnrecognizedLevel {
            level: "principal".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unrecognized level 'principal': expected one of junior, middle, senior"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_text() -> PayrollResult<()> {
            Err(PayrollError::InvalidText {
                field: "department".to_string(),
            })
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_invalid_text()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
