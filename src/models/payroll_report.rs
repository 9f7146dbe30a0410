//! Payroll report models.
//!
//! A [`PayrollReport`] summarises a set of records for one [`PayPeriod`]:
//! a [`PayslipLine`] per employee and the aggregated [`PayTotals`].
//! Currency formatting is left to the caller.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Deductions, PayPeriod};

/// One employee's figures for a report period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipLine {
    /// The record id, if the record has been saved.
    pub id: Option<i64>,
    /// Employee name.
    pub name: String,
    /// Job position.
    pub position: String,
    /// Hourly rate.
    pub hourly_rate: Decimal,
    /// Regular hours per working day.
    pub hours_worked: Decimal,
    /// Overtime hours accumulated over the period.
    pub overtime_hours: Decimal,
    /// Working days per week.
    pub working_days: u32,
    /// Gross pay for the period.
    pub gross_pay: Decimal,
    /// Deductions apportioned to the period.
    pub deductions: Deductions,
    /// Gross pay less deductions.
    pub net_pay: Decimal,
}

/// Aggregated totals across every line of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayTotals {
    /// Sum of gross pay.
    pub gross_pay: Decimal,
    /// Sum of all deductions.
    pub deductions: Decimal,
    /// Sum of net pay.
    pub net_pay: Decimal,
}

/// A payroll report for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// The period every figure in the report is expressed in.
    pub period: PayPeriod,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// One line per record, in input order.
    pub lines: Vec<PayslipLine>,
    /// Totals across all lines.
    pub totals: PayTotals,
}

impl PayrollReport {
    /// Returns true if the report covers no employees.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
