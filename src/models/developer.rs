//! Developer role model.
//!
//! This module defines the Developer role, paid by level multiplier with a
//! level-based bonus on top.

use rust_decimal::Decimal;

use crate::bonus::{BonusRule, LevelBasedBonus};
use crate::error::PayrollResult;
use crate::payroll::{DevPayrollStrategy, PayrollStrategy};

use super::{Employee, Level, StaffMember};

/// A developer paid by seniority level.
///
/// The full salary combines the level-scaled base pay from
/// [`DevPayrollStrategy`] with the level-scaled bonus from
/// [`LevelBasedBonus`], both owned by composition.
#[derive(Debug, Clone, PartialEq)]
pub struct Developer {
    employee: Employee,
    level: Level,
    strategy: DevPayrollStrategy,
    bonus: LevelBasedBonus,
}

impl Developer {
    /// Creates a new developer from validated inputs.
    ///
    /// # Arguments
    ///
    /// * `name` - The developer's name
    /// * `department` - The department the developer belongs to
    /// * `base_salary` - The base salary (must not be negative)
    /// * `level` - The seniority level
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{Developer, Level, StaffMember};
    /// use rust_decimal::Decimal;
    ///
    /// let dev = Developer::new("Test Dev", "DEV", Decimal::new(3000, 0), Level::Middle).unwrap();
    /// // 3000 * 1.5 + 3000 * 0.10
    /// assert_eq!(dev.full_salary(), Decimal::new(4800, 0));
    /// ```
    pub fn new(
        name: &str,
        department: &str,
        base_salary: Decimal,
        level: Level,
    ) -> PayrollResult<Self> {
        Ok(Self {
            employee: Employee::new(name, department, base_salary)?,
            level,
            strategy: DevPayrollStrategy,
            bonus: LevelBasedBonus,
        })
    }

    /// Returns the developer's seniority level.
    pub fn level(&self) -> Level {
        self.level
    }
}

impl StaffMember for Developer {
    fn employee(&self) -> &Employee {
        &self.employee
    }

    fn employee_mut(&mut self) -> &mut Employee {
        &mut self.employee
    }

    fn full_salary(&self) -> Decimal {
        let base = self.employee.base_salary();
        self.strategy.compute(base, self.level) + self.bonus.compute_bonus(base, self.level)
    }
}
