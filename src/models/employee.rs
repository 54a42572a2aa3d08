//! Base employee model and the staff member capability.
//!
//! This module defines the validated [`Employee`] record that every role
//! type embeds, and the [`StaffMember`] trait through which heterogeneous
//! roles are stored and aggregated.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::error::PayrollResult;
use crate::validation::{NonEmptyTextValidator, NonNegativeAmountValidator, Validator};

/// Represents a plain employee with a validated base record.
///
/// Field invariants are established at construction and preserved by the
/// setters: `name` and `department` are non-empty stripped text, and
/// `base_salary` is never negative. The registry id starts out unassigned
/// and is filled in when the employee is saved into storage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    emp_id: Option<u32>,
    name: String,
    department: String,
    base_salary: Decimal,
}

impl Employee {
    /// Creates a new employee from validated inputs.
    ///
    /// # Arguments
    ///
    /// * `name` - The employee's name (must contain non-whitespace text)
    /// * `department` - The department the employee belongs to
    /// * `base_salary` - The base salary (must not be negative)
    ///
    /// # Returns
    ///
    /// The validated employee, or an error if any field is rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new("John", "IT", Decimal::new(4000, 0)).unwrap();
    /// assert_eq!(employee.name(), "John");
    /// assert_eq!(employee.emp_id(), None);
    ///
    /// assert!(Employee::new("", "IT", Decimal::new(4000, 0)).is_err());
    /// assert!(Employee::new("John", "IT", Decimal::new(-1, 0)).is_err());
    /// ```
    pub fn new(name: &str, department: &str, base_salary: Decimal) -> PayrollResult<Self> {
        Ok(Self {
            emp_id: None,
            name: NonEmptyTextValidator.validate("name", name)?,
            department: NonEmptyTextValidator.validate("department", department)?,
            base_salary: NonNegativeAmountValidator.validate("base_salary", base_salary)?,
        })
    }

    /// Returns the registry id, or `None` if the employee has not been
    /// saved yet.
    pub fn emp_id(&self) -> Option<u32> {
        self.emp_id
    }

    /// Returns the employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the employee's department.
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Returns the employee's base salary.
    pub fn base_salary(&self) -> Decimal {
        self.base_salary
    }

    /// Replaces the base salary after validating the new amount.
    ///
    /// On rejection the previous salary is kept unchanged.
    pub fn set_base_salary(&mut self, base_salary: Decimal) -> PayrollResult<()> {
        self.base_salary = NonNegativeAmountValidator.validate("base_salary", base_salary)?;
        Ok(())
    }

    /// Records the registry id assigned by storage.
    pub(crate) fn assign_id(&mut self, id: u32) {
        self.emp_id = Some(id);
    }
}

/// The capability shared by every payroll-relevant staff member.
///
/// Each role type embeds a base [`Employee`] record and computes its full
/// salary from its own strategy and bonus rule. The provided accessors
/// delegate to the embedded record so callers can treat heterogeneous
/// role types uniformly through `dyn StaffMember`.
pub trait StaffMember: fmt::Debug {
    /// Returns the embedded base employee record.
    fn employee(&self) -> &Employee;

    /// Returns the embedded base employee record mutably.
    fn employee_mut(&mut self) -> &mut Employee;

    /// Computes the full salary from current state.
    ///
    /// Implementations are pure: repeated calls without intervening
    /// mutation return the same amount.
    fn full_salary(&self) -> Decimal;

    /// Returns the registry id, or `None` if not yet saved.
    fn emp_id(&self) -> Option<u32> {
        self.employee().emp_id()
    }

    /// Returns the staff member's name.
    fn name(&self) -> &str {
        self.employee().name()
    }

    /// Returns the staff member's department.
    fn department(&self) -> &str {
        self.employee().department()
    }

    /// Returns the staff member's base salary.
    fn base_salary(&self) -> Decimal {
        self.employee().base_salary()
    }
}

// Plain employees have no strategy or bonus; their full salary is the
// base salary unchanged.
impl StaffMember for Employee {
    fn employee(&self) -> &Employee {
        self
    }

    fn employee_mut(&mut self) -> &mut Employee {
        self
    }

    fn full_salary(&self) -> Decimal {
        self.base_salary
    }
}
