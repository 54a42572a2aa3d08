//! Sales payroll strategy.
//!
//! This module provides the strategy that pays commission on accumulated
//! sales volume on top of the base salary.

use rust_decimal::Decimal;

use super::PayrollStrategy;

/// Commission parameters for sales pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesFigures {
    /// The commission rate applied to the sales volume.
    pub commission_rate: Decimal,
    /// The accumulated sales volume.
    pub sales_volume: Decimal,
}

/// Computes sales pay as the base salary plus commission on the sales
/// volume.
///
/// # Example
///
/// ```
/// use payroll_engine::payroll::{SalesFigures, SalesPayrollStrategy, PayrollStrategy};
/// use rust_decimal::Decimal;
///
/// let strategy = SalesPayrollStrategy;
/// let figures = SalesFigures {
///     commission_rate: Decimal::new(15, 2),
///     sales_volume: Decimal::new(4000, 0),
/// };
/// assert_eq!(strategy.compute(Decimal::new(3000, 0), figures), Decimal::new(3600, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesPayrollStrategy;

impl PayrollStrategy for SalesPayrollStrategy {
    type Params = SalesFigures;

    fn compute(&self, base_salary: Decimal, figures: SalesFigures) -> Decimal {
        base_salary + figures.commission_rate * figures.sales_volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn figures(rate: &str, volume: &str) -> SalesFigures {
        SalesFigures {
            commission_rate: dec(rate),
            sales_volume: dec(volume),
        }
    }

    /// SP-001: pay is the base salary plus rate times volume
    #[test]
    fn test_pay_is_base_plus_commission() {
        let strategy = SalesPayrollStrategy;
        assert_eq!(
            strategy.compute(dec("3000"), figures("0.15", "4000")),
            dec("3600")
        );
    }

    /// SP-002: zero volume pays only the base salary
    #[test]
    fn test_zero_volume_pays_base_only() {
        let strategy = SalesPayrollStrategy;
        assert_eq!(
            strategy.compute(dec("3000"), figures("0.15", "0")),
            dec("3000")
        );
    }

    #[test]
    fn test_zero_rate_pays_base_only() {
        let strategy = SalesPayrollStrategy;
        assert_eq!(
            strategy.compute(dec("3000"), figures("0", "4000")),
            dec("3000")
        );
    }

    #[test]
    fn test_commission_is_exact_for_fractional_rates() {
        let strategy = SalesPayrollStrategy;
        // 2500 + 0.12 * 8000 = 3460
        assert_eq!(
            strategy.compute(dec("2500"), figures("0.12", "8000")),
            dec("3460")
        );
    }
}
