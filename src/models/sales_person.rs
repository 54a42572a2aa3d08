//! Sales person role model.
//!
//! This module defines the SalesPerson role, paid base salary plus commission
//! on an accumulated sales volume.

use rust_decimal::Decimal;

use crate::error::PayrollResult;
use crate::payroll::{PayrollStrategy, SalesFigures, SalesPayrollStrategy};
use crate::validation::{NonNegativeAmountValidator, Validator};

use super::{Employee, StaffMember};

/// A sales person paid commission on accumulated sales.
///
/// Sales are recorded one at a time with [`record_sale`](Self::record_sale)
/// and accumulate into a running volume. The full salary is computed by
/// [`SalesPayrollStrategy`] over the current volume; sales people receive no
/// separate bonus.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesPerson {
    employee: Employee,
    commission_rate: Decimal,
    sales_volume: Decimal,
    strategy: SalesPayrollStrategy,
}

impl SalesPerson {
    /// Creates a new sales person from validated inputs.
    ///
    /// The sales volume starts at zero; use
    /// [`record_sale`](Self::record_sale) to accumulate sales.
    ///
    /// # Arguments
    ///
    /// * `name` - The sales person's name
    /// * `department` - The department the sales person belongs to
    /// * `base_salary` - The base salary (must not be negative)
    /// * `commission_rate` - The commission rate applied to sales volume
    ///   (must not be negative)
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{SalesPerson, StaffMember};
    /// use rust_decimal::Decimal;
    ///
    /// let mut sales =
    ///     SalesPerson::new("Test Sales", "SALES", Decimal::new(2500, 0), Decimal::new(12, 2))
    ///         .unwrap();
    /// sales.record_sale(Decimal::new(8000, 0)).unwrap();
    /// // 2500 + 0.12 * 8000
    /// assert_eq!(sales.full_salary(), Decimal::new(3460, 0));
    /// ```
    pub fn new(
        name: &str,
        department: &str,
        base_salary: Decimal,
        commission_rate: Decimal,
    ) -> PayrollResult<Self> {
        Ok(Self {
            employee: Employee::new(name, department, base_salary)?,
            commission_rate: NonNegativeAmountValidator
                .validate("commission_rate", commission_rate)?,
            sales_volume: Decimal::ZERO,
            strategy: SalesPayrollStrategy,
        })
    }

    /// Records a single sale, adding it to the accumulated volume.
    ///
    /// Returns an error and leaves the volume unchanged if the amount is
    /// negative.
    pub fn record_sale(&mut self, amount: Decimal) -> PayrollResult<()> {
        let amount = NonNegativeAmountValidator.validate("sale_amount", amount)?;
        self.sales_volume += amount;
        Ok(())
    }

    /// Returns the commission rate.
    pub fn commission_rate(&self) -> Decimal {
        self.commission_rate
    }

    /// Returns the accumulated sales volume.
    pub fn sales_volume(&self) -> Decimal {
        self.sales_volume
    }
}

impl StaffMember for SalesPerson {
    fn employee(&self) -> &Employee {
        &self.employee
    }

    fn employee_mut(&mut self) -> &mut Employee {
        &mut self.employee
    }

    fn full_salary(&self) -> Decimal {
        let figures = SalesFigures {
            commission_rate: self.commission_rate,
            sales_volume: self.sales_volume,
        };
        self.strategy.compute(self.employee.base_salary(), figures)
    }
}
