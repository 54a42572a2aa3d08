//! Manager payroll strategy.
//!
//! This module provides the strategy that adds a fixed bonus on top of a
//! manager's base salary.

use rust_decimal::Decimal;

use super::PayrollStrategy;

/// Computes manager pay as the base salary plus a fixed bonus.
///
/// # Example
///
/// ```
/// use payroll_engine::payroll::{ManagerPayrollStrategy, PayrollStrategy};
/// use rust_decimal::Decimal;
///
/// let strategy = ManagerPayrollStrategy;
/// let pay = strategy.compute(Decimal::new(7000, 0), Decimal::new(3000, 0));
/// assert_eq!(pay, Decimal::new(10000, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagerPayrollStrategy;

impl PayrollStrategy for ManagerPayrollStrategy {
    type Params = Decimal;

    fn compute(&self, base_salary: Decimal, fixed_bonus: Decimal) -> Decimal {
        base_salary + fixed_bonus
    }
}
