//! Bonus rules for the payroll engine.
//!
//! This module contains the pluggable bonus rules that grant supplementary
//! pay on top of strategy-computed salaries.

mod fixed;
mod level_based;
mod rule;

pub use fixed::{FixedPerformanceBonus, performance_bonus_rate};
pub use level_based::{LevelBasedBonus, level_bonus_rate};
pub use rule::BonusRule;
