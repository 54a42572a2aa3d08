//! Payroll summary models.
//!
//! This module contains the [`PayrollSummary`] type and its associated
//! [`PayrollLine`] structure that capture the outputs of a payroll run over
//! an organization.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single line item in a payroll summary.
///
/// Each line captures one staff member's identity and the full salary
/// computed for them.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollLine;
/// use rust_decimal::Decimal;
///
/// let line = PayrollLine {
///     emp_id: 1,
///     name: "John Dev".to_string(),
///     department: "IT".to_string(),
///     base_salary: Decimal::new(4000, 0),
///     full_salary: Decimal::new(8800, 0),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollLine {
    /// The registry-assigned employee ID.
    pub emp_id: u32,
    /// The staff member's name.
    pub name: String,
    /// The department the staff member belongs to.
    pub department: String,
    /// The base salary before role-specific computation.
    pub base_salary: Decimal,
    /// The full salary computed by the role's payroll strategy and bonus.
    pub full_salary: Decimal,
}

/// The complete result of a payroll run over an organization.
///
/// Lines appear in ascending employee ID order and the total equals the sum
/// of the line full salaries.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollSummary;
/// use chrono::Utc;
/// use rust_decimal::Decimal;
///
/// let summary = PayrollSummary {
///     organization: "TechCorp".to_string(),
///     generated_at: Utc::now(),
///     lines: vec![],
///     total: Decimal::ZERO,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// The name of the organization the summary covers.
    pub organization: String,
    /// When the summary was generated.
    pub generated_at: DateTime<Utc>,
    /// Individual lines, one per registered staff member.
    pub lines: Vec<PayrollLine>,
    /// The total payroll (sum of all line full salaries).
    pub total: Decimal,
}
