//! Level-based bonus rule.
//!
//! This module provides the bonus granted to developers, scaled by their
//! seniority level.

use rust_decimal::Decimal;

use crate::models::Level;

use super::BonusRule;

/// Returns the bonus rate for a seniority level.
///
/// Juniors receive 5% of the base salary, middles 10%, and seniors 20%.
pub fn level_bonus_rate(level: Level) -> Decimal {
    match level {
        Level::Junior => Decimal::new(5, 2),
        Level::Middle => Decimal::new(10, 2),
        Level::Senior => Decimal::new(20, 2),
    }
}

/// Grants a bonus proportional to the base salary, scaled by seniority
/// level.
///
/// Unrecognized levels cannot reach this rule: [`Level`] only represents
/// the three recognized values, and invalid keys are rejected when the
/// level is parsed.
///
/// # Example
///
/// ```
/// use payroll_engine::bonus::{BonusRule, LevelBasedBonus};
/// use payroll_engine::models::Level;
/// use rust_decimal::Decimal;
///
/// let bonus = LevelBasedBonus;
/// let base = Decimal::new(5000, 0);
/// assert_eq!(bonus.compute_bonus(base, Level::Senior), Decimal::new(1000, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelBasedBonus;

impl BonusRule for LevelBasedBonus {
    type Params = Level;

    fn compute_bonus(&self, base_salary: Decimal, level: Level) -> Decimal {
        base_salary * level_bonus_rate(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// LB-001: senior bonus is 20% of the base salary
    #[test]
    fn test_senior_bonus_is_twenty_percent() {
        let bonus = LevelBasedBonus;
        assert_eq!(bonus.compute_bonus(dec("5000"), Level::Senior), dec("1000"));
    }

    /// LB-002: junior bonus is 5% of the base salary
    #[test]
    fn test_junior_bonus_is_five_percent() {
        let bonus = LevelBasedBonus;
        assert_eq!(bonus.compute_bonus(dec("5000"), Level::Junior), dec("250"));
    }

    /// LB-003: middle bonus is 10% of the base salary
    #[test]
    fn test_middle_bonus_is_ten_percent() {
        let bonus = LevelBasedBonus;
        assert_eq!(bonus.compute_bonus(dec("5000"), Level::Middle), dec("500"));
    }

    #[test]
    fn test_zero_base_grants_zero_bonus_at_every_level() {
        let bonus = LevelBasedBonus;
        for level in [Level::Junior, Level::Middle, Level::Senior] {
            assert_eq!(bonus.compute_bonus(Decimal::ZERO, level), Decimal::ZERO);
        }
    }

    #[test]
    fn test_level_bonus_rate_values() {
        assert_eq!(level_bonus_rate(Level::Junior), dec("0.05"));
        assert_eq!(level_bonus_rate(Level::Middle), dec("0.10"));
        assert_eq!(level_bonus_rate(Level::Senior), dec("0.20"));
    }
}
