//! Organization-level payroll aggregation.
//!
//! This module provides [`Organization`], which registers staff members in an
//! owned [`MemoryStorage`] and aggregates payroll across everyone registered.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;

use crate::models::{PayrollLine, PayrollSummary, StaffMember};
use crate::storage::MemoryStorage;

/// A named organization with an in-memory staff registry.
///
/// Staff members of any role are added behind the [`StaffMember`] trait and
/// payroll is aggregated over each member's full salary.
#[derive(Debug)]
pub struct Organization {
    name: String,
    storage: MemoryStorage,
}

impl Organization {
    /// Creates an organization with the given name and an empty registry.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            storage: MemoryStorage::new(),
        }
    }

    /// Returns the organization's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a staff member and returns the assigned employee ID.
    pub fn add_employee(&mut self, employee: impl StaffMember + 'static) -> u32 {
        self.storage.save(employee)
    }

    /// Returns the number of registered staff members.
    pub fn headcount(&self) -> usize {
        self.storage.len()
    }

    /// Returns all registered staff members in ascending employee ID order.
    pub fn employees(&self) -> impl Iterator<Item = &dyn StaffMember> {
        self.storage.list_all()
    }

    /// Computes the total payroll as the sum of every member's full salary.
    ///
    /// Returns [`Decimal::ZERO`] for an organization with no staff.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{Developer, Level, Manager};
    /// use payroll_engine::organization::Organization;
    /// use rust_decimal::Decimal;
    ///
    /// let mut org = Organization::new("TechCorp");
    /// org.add_employee(Developer::new("John Dev", "IT", Decimal::new(4000, 0), Level::Senior).unwrap());
    /// org.add_employee(Manager::new("Jane Mgr", "MGMT", Decimal::new(7000, 0), Decimal::new(2000, 0)).unwrap());
    ///
    /// // (4000 * 2.0 + 4000 * 0.2) + (7000 + 2000 + 700)
    /// assert_eq!(org.total_payroll(), Decimal::new(18500, 0));
    /// ```
    pub fn total_payroll(&self) -> Decimal {
        self.storage.list_all().map(|member| member.full_salary()).sum()
    }

    /// Generates a timestamped payroll summary with one line per member.
    ///
    /// Lines appear in ascending employee ID order and the total equals the
    /// sum of the line full salaries.
    pub fn payroll_summary(&self) -> PayrollSummary {
        let lines: Vec<PayrollLine> = self
            .storage
            .iter()
            .map(|(id, member)| PayrollLine {
                emp_id: id,
                name: member.name().to_string(),
                department: member.department().to_string(),
                base_salary: member.base_salary(),
                full_salary: member.full_salary(),
            })
            .collect();
        let total: Decimal = lines.iter().map(|line| line.full_salary).sum();

        info!(
            organization = %self.name,
            headcount = lines.len(),
            total = %total,
            "Generated payroll summary"
        );

        PayrollSummary {
            organization: self.name.clone(),
            generated_at: Utc::now(),
            lines,
            total,
        }
    }
}
