//! Seniority level model.
//!
//! This module defines the Level enum used by the developer payroll
//! strategy and the level-based bonus rule.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PayrollError;

/// Represents a developer's seniority level.
///
/// Levels determine both the salary multiplier applied by the developer
/// payroll strategy and the rate used by the level-based bonus rule.
/// Unrecognized level keys are rejected at the string boundary, so a
/// constructed `Level` is always one of the three recognized values.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Level;
/// use std::str::FromStr;
///
/// let level = Level::from_str("senior").unwrap();
/// assert_eq!(level, Level::Senior);
/// assert_eq!(level.to_string(), "senior");
/// assert!(Level::from_str("principal").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// Junior level (base salary unchanged, smallest bonus rate).
    Junior,
    /// Middle level.
    Middle,
    /// Senior level (highest multiplier and bonus rate).
    Senior,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Junior => write!(f, "junior"),
            Level::Middle => write!(f, "middle"),
            Level::Senior => write!(f, "senior"),
        }
    }
}

impl FromStr for Level {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "junior" => Ok(Level::Junior),
            "middle" => Ok(Level::Middle),
            "senior" => Ok(Level::Senior),
            other => Err(PayrollError::UnrecognizedLevel {
                level: other.to_string(),
            }),
        }
    }
}
