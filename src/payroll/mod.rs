//! Payroll strategies for the payroll engine.
//!
//! This module contains the pluggable strategy implementations that compute
//! pay from a base salary and role-specific parameters. Each strategy is a
//! stateless value owned by the role type that uses it.

mod dev;
mod manager;
mod sales;
mod strategy;

pub use dev::{DevPayrollStrategy, level_multiplier};
pub use manager::ManagerPayrollStrategy;
pub use sales::{SalesFigures, SalesPayrollStrategy};
pub use strategy::PayrollStrategy;
