//! Pay period granularity.
//!
//! Deductions are held monthly; a [`PayPeriod`] says how many working days
//! a period covers and therefore how the monthly deductions are divided.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::WEEKS_PER_MONTH;

/// The granularity at which pay is reported.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use rust_decimal::Decimal;
///
/// assert_eq!(PayPeriod::Weekly.days_in_period(5), Decimal::from(5));
/// assert_eq!(PayPeriod::Daily.deduction_divisor(5), Decimal::from(20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayPeriod {
    /// A single working day.
    Daily,
    /// One week of working days.
    Weekly,
    /// Four weeks of working days.
    Monthly,
}

impl PayPeriod {
    /// Every period, shortest first.
    pub const ALL: [PayPeriod; 3] = [PayPeriod::Daily, PayPeriod::Weekly, PayPeriod::Monthly];

    /// Number of working days covered by this period.
    pub fn days_in_period(self, working_days: u32) -> Decimal {
        match self {
            PayPeriod::Daily => Decimal::ONE,
            PayPeriod::Weekly => Decimal::from(working_days),
            PayPeriod::Monthly => Decimal::from(working_days) * WEEKS_PER_MONTH,
        }
    }

    /// Scales a per-day amount up to this period, or `None` on overflow.
    pub fn checked_scale(self, per_day: Decimal, working_days: u32) -> Option<Decimal> {
        per_day.checked_mul(self.days_in_period(working_days))
    }

    /// What monthly deductions are divided by for this period.
    ///
    /// `working_days` must be at least 1 for [`PayPeriod::Daily`].
    pub fn deduction_divisor(self, working_days: u32) -> Decimal {
        match self {
            PayPeriod::Daily => Decimal::from(working_days) * WEEKS_PER_MONTH,
            PayPeriod::Weekly => WEEKS_PER_MONTH,
            PayPeriod::Monthly => Decimal::ONE,
        }
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PayPeriod::Daily => "daily",
            PayPeriod::Weekly => "weekly",
            PayPeriod::Monthly => "monthly",
        };
        f.write_str(label)
    }
}
