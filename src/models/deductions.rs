//! Statutory deduction amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The four statutory deductions, held on a monthly basis unless a method
/// says otherwise.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Deductions;
/// use rust_decimal::Decimal;
///
/// let deductions = Deductions {
///     sss: Decimal::from(1125),
///     philhealth: Decimal::from(240),
///     pagibig: Decimal::from(100),
///     tax: Decimal::ZERO,
/// };
/// assert_eq!(deductions.total(), Decimal::from(1465));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// Social Security System contribution.
    pub sss: Decimal,
    /// PhilHealth contribution.
    pub philhealth: Decimal,
    /// Pag-IBIG contribution.
    pub pagibig: Decimal,
    /// Withholding tax.
    pub tax: Decimal,
}

impl Deductions {
    /// Sum of the three contributions, excluding tax.
    pub fn contributions(&self) -> Decimal {
        self.sss + self.philhealth + self.pagibig
    }

    /// Sum of all four deductions.
    pub fn total(&self) -> Decimal {
        self.contributions() + self.tax
    }

    /// Divides every amount by `divisor`, e.g. to turn monthly figures into
    /// weekly ones. `divisor` must be non-zero.
    pub fn scaled_down(&self, divisor: Decimal) -> Self {
        Self {
            sss: self.sss / divisor,
            philhealth: self.philhealth / divisor,
            pagibig: self.pagibig / divisor,
            tax: self.tax / divisor,
        }
    }
}
