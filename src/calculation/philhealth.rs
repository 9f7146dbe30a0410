//! PhilHealth contribution.

use rust_decimal::Decimal;

/// PhilHealth rate applied to the base salary (2%).
pub const PHILHEALTH_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 2);

/// Calculates the monthly PhilHealth contribution: `base_salary × 0.02`.
pub fn philhealth_contribution(base_salary: Decimal) -> Decimal {
    base_salary * PHILHEALTH_RATE
}
