//! Base salary derivation.
//!
//! The base salary is a monthly-equivalent figure used only as the lookup
//! basis for the SSS, PhilHealth and Pag-IBIG contributions. It assumes a
//! fixed 12-hour day regardless of the hours actually worked.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};

/// Hours per day assumed by the base salary formula.
pub const BASE_SALARY_HOURS_PER_DAY: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Weeks per month used by every weekly-to-monthly conversion.
pub const WEEKS_PER_MONTH: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// Calculates the base salary: `hourly_rate × 12 × working_days × 4`.
///
/// Fails with a validation error on `hourly_rate` if the product does not
/// fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_base_salary;
/// use rust_decimal::Decimal;
///
/// assert_eq!(calculate_base_salary(Decimal::from(50), 5)?, Decimal::from(12000));
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
pub fn calculate_base_salary(hourly_rate: Decimal, working_days: u32) -> PayrollResult<Decimal> {
    hourly_rate
        .checked_mul(BASE_SALARY_HOURS_PER_DAY)
        .and_then(|daily| daily.checked_mul(Decimal::from(working_days)))
        .and_then(|weekly| weekly.checked_mul(WEEKS_PER_MONTH))
        .ok_or_else(|| PayrollError::too_large("hourly_rate"))
}
