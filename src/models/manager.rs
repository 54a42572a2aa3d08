//! Manager role model.
//!
//! This module defines the Manager role, paid a fixed management bonus on top
//! of base salary plus the flat performance bonus.

use rust_decimal::Decimal;

use crate::bonus::{BonusRule, FixedPerformanceBonus};
use crate::error::PayrollResult;
use crate::payroll::{ManagerPayrollStrategy, PayrollStrategy};
use crate::validation::{NonNegativeAmountValidator, Validator};

use super::{Employee, StaffMember};

/// A manager paid a fixed management bonus on top of base salary.
///
/// The full salary combines [`ManagerPayrollStrategy`] (base plus the fixed
/// bonus) with [`FixedPerformanceBonus`] (10% of base).
#[derive(Debug, Clone, PartialEq)]
pub struct Manager {
    employee: Employee,
    fixed_bonus: Decimal,
    strategy: ManagerPayrollStrategy,
    bonus: FixedPerformanceBonus,
}

impl Manager {
    /// Creates a new manager from validated inputs.
    ///
    /// # Arguments
    ///
    /// * `name` - The manager's name
    /// * `department` - The department the manager belongs to
    /// * `base_salary` - The base salary (must not be negative)
    /// * `fixed_bonus` - The fixed management bonus (must not be negative)
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{Manager, StaffMember};
    /// use rust_decimal::Decimal;
    ///
    /// let mgr = Manager::new("Test Mgr", "MGMT", Decimal::new(6000, 0), Decimal::new(1500, 0))
    ///     .unwrap();
    /// // 6000 + 1500 + 600
    /// assert_eq!(mgr.full_salary(), Decimal::new(8100, 0));
    /// ```
    pub fn new(
        name: &str,
        department: &str,
        base_salary: Decimal,
        fixed_bonus: Decimal,
    ) -> PayrollResult<Self> {
        Ok(Self {
            employee: Employee::new(name, department, base_salary)?,
            fixed_bonus: NonNegativeAmountValidator.validate("fixed_bonus", fixed_bonus)?,
            strategy: ManagerPayrollStrategy,
            bonus: FixedPerformanceBonus,
        })
    }

    /// Returns the fixed management bonus.
    pub fn fixed_bonus(&self) -> Decimal {
        self.fixed_bonus
    }
}

impl StaffMember for Manager {
    fn employee(&self) -> &Employee {
        &self.employee
    }

    fn employee_mut(&mut self) -> &mut Employee {
        &mut self.employee
    }

    fn full_salary(&self) -> Decimal {
        let base = self.employee.base_salary();
        self.strategy.compute(base, self.fixed_bonus) + self.bonus.compute_bonus(base, ())
    }
}
