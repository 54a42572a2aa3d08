//! Fixed performance bonus rule.
//!
//! This module provides the flat-rate bonus granted to managers on top of
//! their strategy-computed pay.

use rust_decimal::Decimal;

use super::BonusRule;

/// Returns the flat performance bonus rate.
///
/// The rate is 0.10 (10% of the base salary).
pub fn performance_bonus_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// Grants a flat 10% of the base salary, unconditionally.
///
/// # Example
///
/// ```
/// use payroll_engine::bonus::{BonusRule, FixedPerformanceBonus};
/// use rust_decimal::Decimal;
///
/// let bonus = FixedPerformanceBonus;
/// assert_eq!(bonus.compute_bonus(Decimal::new(5000, 0), ()), Decimal::new(500, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPerformanceBonus;

impl BonusRule for FixedPerformanceBonus {
    type Params = ();

    fn compute_bonus(&self, base_salary: Decimal, _params: ()) -> Decimal {
        base_salary * performance_bonus_rate()
    }
}
