//! Gross pay calculation.
//!
//! Gross pay is derived from the hours an employee actually works:
//! regular hours at the hourly rate plus overtime hours at 125% of it.
//! Weekly and monthly figures scale the daily amount by working days and
//! by four weeks per month.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};
use crate::models::PayPeriod;

/// The overtime premium multiplier (125% of the hourly rate).
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(125, 0, 0, false, 2);

/// Gross pay at daily, weekly and monthly granularity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrossPay {
    /// Pay for a single working day.
    pub daily: Decimal,
    /// Daily pay times working days.
    pub weekly: Decimal,
    /// Weekly pay times four.
    pub monthly: Decimal,
}

impl GrossPay {
    /// The figure for the given period.
    pub fn for_period(&self, period: PayPeriod) -> Decimal {
        match period {
            PayPeriod::Daily => self.daily,
            PayPeriod::Weekly => self.weekly,
            PayPeriod::Monthly => self.monthly,
        }
    }
}

/// Calculates the gross pay for one working day.
///
/// `hours_worked × hourly_rate + overtime_hours × hourly_rate × 1.25`
///
/// Regular hours are bounded, so an overflow is charged to `hourly_rate`
/// when overtime is zero and to `overtime_hours` otherwise.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_daily_gross_pay;
/// use rust_decimal::Decimal;
///
/// let pay = calculate_daily_gross_pay(Decimal::from(100), Decimal::from(8), Decimal::from(2))?;
/// assert_eq!(pay, Decimal::from(1050));
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
pub fn calculate_daily_gross_pay(
    hourly_rate: Decimal,
    hours_worked: Decimal,
    overtime_hours: Decimal,
) -> PayrollResult<Decimal> {
    let regular = hours_worked
        .checked_mul(hourly_rate)
        .ok_or_else(|| PayrollError::too_large("hourly_rate"))?;

    overtime_hours
        .checked_mul(hourly_rate)
        .and_then(|overtime| overtime.checked_mul(OVERTIME_MULTIPLIER))
        .and_then(|overtime| regular.checked_add(overtime))
        .ok_or_else(|| overflow(overtime_hours))
}

/// Calculates gross pay for all three granularities at once.
pub fn calculate_gross_pay(
    hourly_rate: Decimal,
    hours_worked: Decimal,
    overtime_hours: Decimal,
    working_days: u32,
) -> PayrollResult<GrossPay> {
    let daily = calculate_daily_gross_pay(hourly_rate, hours_worked, overtime_hours)?;
    let scale = |period: PayPeriod| {
        period
            .checked_scale(daily, working_days)
            .ok_or_else(|| overflow(overtime_hours))
    };

    Ok(GrossPay {
        daily,
        weekly: scale(PayPeriod::Weekly)?,
        monthly: scale(PayPeriod::Monthly)?,
    })
}

fn overflow(overtime_hours: Decimal) -> PayrollError {
    if overtime_hours.is_zero() {
        PayrollError::too_large("hourly_rate")
    } else {
        PayrollError::too_large("overtime_hours")
    }
}
