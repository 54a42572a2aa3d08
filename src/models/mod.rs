//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod developer;
mod employee;
mod level;
mod manager;
mod sales_person;
mod summary;

pub use developer::Developer;
pub use employee::{Employee, StaffMember};
pub use level::Level;
pub use manager::Manager;
pub use sales_person::SalesPerson;
pub use summary::{PayrollLine, PayrollSummary};
