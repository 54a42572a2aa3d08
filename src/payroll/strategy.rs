//! The payroll strategy capability.
//!
//! This module defines the trait implemented by every payroll strategy in
//! the engine.

use rust_decimal::Decimal;

/// A strategy that computes pay from a base salary and role-specific
/// parameters.
///
/// Strategies are stateless and reentrant: computing pay has no side
/// effects, and the same inputs always produce the same amount. Each role
/// type owns its strategy by composition and forwards its own parameters
/// when computing the full salary.
pub trait PayrollStrategy {
    /// The role-specific parameters consumed by this strategy.
    type Params;

    /// Computes the pay amount for the given base salary and parameters.
    ///
    /// # Arguments
    ///
    /// * `base_salary` - The base salary to compute pay from
    /// * `params` - The role-specific parameters
    fn compute(&self, base_salary: Decimal, params: Self::Params) -> Decimal;
}
