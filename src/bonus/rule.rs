//! The bonus rule capability.
//!
//! This module defines the trait implemented by every bonus rule in the
//! engine.

use rust_decimal::Decimal;

/// A rule that computes a supplementary bonus from a base salary and
/// rule-specific parameters.
///
/// Bonus rules are stateless: the same inputs always produce the same
/// bonus amount, and computing a bonus has no side effects.
pub trait BonusRule {
    /// The rule-specific parameters consumed by this rule.
    type Params;

    /// Computes the bonus amount for the given base salary and parameters.
    ///
    /// # Arguments
    ///
    /// * `base_salary` - The base salary the bonus is computed from
    /// * `params` - The rule-specific parameters
    fn compute_bonus(&self, base_salary: Decimal, params: Self::Params) -> Decimal;
}
