//! Developer payroll strategy.
//!
//! This module provides the strategy that scales a developer's base salary
//! by a multiplier determined by seniority level.

use rust_decimal::Decimal;

use crate::models::Level;

use super::PayrollStrategy;

/// Returns the salary multiplier for a seniority level.
///
/// Juniors are paid the base salary unchanged (multiplier 1.0), middles
/// one and a half times the base (1.5), and seniors double (2.0).
pub fn level_multiplier(level: Level) -> Decimal {
    match level {
        Level::Junior => Decimal::new(10, 1),
        Level::Middle => Decimal::new(15, 1),
        Level::Senior => Decimal::new(20, 1),
    }
}

/// Computes developer pay as the base salary scaled by the level
/// multiplier.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Level;
/// use payroll_engine::payroll::{DevPayrollStrategy, PayrollStrategy};
/// use rust_decimal::Decimal;
///
/// let strategy = DevPayrollStrategy;
/// let base = Decimal::new(2000, 0);
/// assert_eq!(strategy.compute(base, Level::Junior), Decimal::new(2000, 0));
/// assert_eq!(strategy.compute(base, Level::Senior), Decimal::new(4000, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevPayrollStrategy;

impl PayrollStrategy for DevPayrollStrategy {
    type Params = Level;

    fn compute(&self, base_salary: Decimal, level: Level) -> Decimal {
        base_salary * level_multiplier(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// DP-001: junior pay equals the base salary
    #[test]
    fn test_junior_pay_equals_base_salary() {
        let strategy = DevPayrollStrategy;
        assert_eq!(strategy.compute(dec("2000"), Level::Junior), dec("2000"));
    }

    /// DP-002: senior pay doubles the base salary
    #[test]
    fn test_senior_pay_doubles_base_salary() {
        let strategy = DevPayrollStrategy;
        assert_eq!(strategy.compute(dec("2000"), Level::Senior), dec("4000"));
    }

    /// DP-003: middle pay is one and a half times the base salary
    #[test]
    fn test_middle_pay_is_one_and_a_half_times_base() {
        let strategy = DevPayrollStrategy;
        assert_eq!(strategy.compute(dec("2000"), Level::Middle), dec("3000"));
    }

    #[test]
    fn test_zero_base_salary_pays_zero_at_every_level() {
        let strategy = DevPayrollStrategy;
        for level in [Level::Junior, Level::Middle, Level::Senior] {
            assert_eq!(strategy.compute(Decimal::ZERO, level), Decimal::ZERO);
        }
    }

    #[test]
    fn test_level_multiplier_values() {
        assert_eq!(level_multiplier(Level::Junior), dec("1.0"));
        assert_eq!(level_multiplier(Level::Middle), dec("1.5"));
        assert_eq!(level_multiplier(Level::Senior), dec("2.0"));
    }

    #[test]
    fn test_fractional_base_salary() {
        let strategy = DevPayrollStrategy;
        assert_eq!(strategy.compute(dec("2500.50"), Level::Middle), dec("3750.75"));
    }
}
