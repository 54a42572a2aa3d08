//! Payroll Computation Engine
//!
//! This crate provides functionality for computing staff pay from pluggable
//! payroll strategies and bonus rules, and for aggregating payroll totals
//! across an in-memory organization registry.

#![warn(missing_docs)]

pub mod bonus;
pub mod error;
pub mod models;
pub mod organization;
pub mod payroll;
pub mod storage;
pub mod validation;
