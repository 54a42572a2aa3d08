//! Input validation for payroll data.
//!
//! This module provides the validators that check and normalize raw input
//! before it enters the payroll models. Each validator either returns the
//! normalized value or rejects the input with a typed error.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};

/// A validator that checks a raw input value and produces a normalized form.
///
/// Validators are stateless: validating has no side effects, and the same
/// input always produces the same outcome. The `field` argument names the
/// field being validated and is carried into any error for context.
pub trait Validator<Raw> {
    /// The normalized type produced by successful validation.
    type Valid;

    /// Validates `raw` for the named field.
    ///
    /// # Arguments
    ///
    /// * `field` - The name of the field being validated, used in errors
    /// * `raw` - The raw input value
    ///
    /// # Returns
    ///
    /// The normalized value, or an error describing why the input was
    /// rejected.
    fn validate(&self, field: &str, raw: Raw) -> PayrollResult<Self::Valid>;
}

/// Validates that a monetary amount is not negative.
///
/// Non-negative amounts pass through unchanged. Negative amounts are
/// rejected with [`PayrollError::InvalidValue`].
///
/// # Example
///
/// ```
/// use payroll_engine::validation::{NonNegativeAmountValidator, Validator};
/// use rust_decimal::Decimal;
///
/// let validator = NonNegativeAmountValidator;
/// let amount = Decimal::new(4000, 0);
/// assert_eq!(validator.validate("base_salary", amount).unwrap(), amount);
/// assert!(validator.validate("base_salary", Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NonNegativeAmountValidator;

impl Validator<Decimal> for NonNegativeAmountValidator {
    type Valid = Decimal;

    fn validate(&self, field: &str, raw: Decimal) -> PayrollResult<Decimal> {
        if raw < Decimal::ZERO {
            return Err(PayrollError::InvalidValue {
                field: field.to_string(),
                value: raw,
            });
        }
        Ok(raw)
    }
}

/// Validates that a text value contains at least one non-whitespace
/// character.
///
/// Leading and trailing whitespace is stripped from valid input. Values
/// that are empty after stripping are rejected with
/// [`PayrollError::InvalidText`].
///
/// # Example
///
/// ```
/// use payroll_engine::validation::{NonEmptyTextValidator, Validator};
///
/// let validator = NonEmptyTextValidator;
/// assert_eq!(validator.validate("name", "  Test  ").unwrap(), "Test");
/// assert!(validator.validate("name", "   ").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NonEmptyTextValidator;

impl Validator<&str> for NonEmptyTextValidator {
    type Valid = String;

    fn validate(&self, field: &str, raw: &str) -> PayrollResult<String> {
        let stripped = raw.trim();
        if stripped.is_empty() {
            return Err(PayrollError::InvalidText {
                field: field.to_string(),
            });
        }
        Ok(stripped.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// VA-001: non-negative amounts pass through unchanged
    #[test]
    fn test_non_negative_amount_is_returned_unchanged() {
        let validator = NonNegativeAmountValidator;
        assert_eq!(validator.validate("amount", dec("100")).unwrap(), dec("100"));
        assert_eq!(
            validator.validate("amount", dec("0.01")).unwrap(),
            dec("0.01")
        );
    }

    /// VA-002: zero is a valid amount
    #[test]
    fn test_zero_amount_is_valid() {
        let validator = NonNegativeAmountValidator;
        assert_eq!(
            validator.validate("amount", Decimal::ZERO).unwrap(),
            Decimal::ZERO
        );
    }

    /// VA-003: negative amounts are rejected
    #[test]
    fn test_negative_amount_is_rejected() {
        let validator = NonNegativeAmountValidator;
        let error = validator.validate("base_salary", dec("-5")).unwrap_err();
        assert!(matches!(
            error,
            PayrollError::InvalidValue { ref field, value } if field == "base_salary" && value == dec("-5")
        ));
    }

    /// VA-004: text is stripped of surrounding whitespace
    #[test]
    fn test_text_is_stripped() {
        let validator = NonEmptyTextValidator;
        assert_eq!(validator.validate("name", "  Test  ").unwrap(), "Test");
        assert_eq!(validator.validate("name", "John").unwrap(), "John");
    }

    /// VA-005: empty and whitespace-only text is rejected
    #[test]
    fn test_empty_text_is_rejected() {
        let validator = NonEmptyTextValidator;
        assert!(validator.validate("name", "").is_err());
        assert!(validator.validate("name", "   ").is_err());
        assert!(validator.validate("name", "\t\n").is_err());
    }

    #[test]
    fn test_rejected_text_error_carries_field_name() {
        let validator = NonEmptyTextValidator;
        let error = validator.validate("department", " ").unwrap_err();
        assert!(matches!(
            error,
            PayrollError::InvalidText { ref field } if field == "department"
        ));
    }

    #[test]
    fn test_inner_whitespace_is_preserved() {
        let validator = NonEmptyTextValidator;
        assert_eq!(
            validator.validate("name", "  Test Dev  ").unwrap(),
            "Test Dev"
        );
    }

    #[test]
    fn test_validation_error_propagates_with_question_mark() {
        fn validate_pair(name: &str, amount: Decimal) -> PayrollResult<(String, Decimal)> {
            let name = NonEmptyTextValidator.validate("name", name)?;
            let amount = NonNegativeAmountValidator.validate("amount", amount)?;
            Ok((name, amount))
        }

        assert!(validate_pair("John", dec("4000")).is_ok());
        assert!(validate_pair("", dec("4000")).is_err());
        assert!(validate_pair("John", dec("-1")).is_err());
    }
}
