//! The payroll record entity.
//!
//! A [`PayrollRecord`] holds one employee's pay inputs together with the
//! figures derived from them. The derived fields (base salary and the four
//! deductions) are recomputed by every mutation before it returns, so a
//! record observed through its public API is always self-consistent.
//! Records restored from storage are the one exception: their derived
//! fields are taken as stored.

use std::ops::RangeInclusive;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    GrossPay, audit_deductions, calculate_base_salary, calculate_gross_pay, compute_deductions,
};
use crate::error::{PayrollError, PayrollResult};

use super::{AuditStep, Deductions, PayPeriod};

/// Allowed range for regular hours worked per day.
pub const HOURS_WORKED_RANGE: RangeInclusive<Decimal> =
    Decimal::ZERO..=Decimal::from_parts(12, 0, 0, false, 0);

/// Allowed range for working days per week.
pub const WORKING_DAYS_RANGE: RangeInclusive<u32> = 1..=7;

/// The eleven persisted fields of a record, without its id.
///
/// This is the row shape a [`RecordStore`](crate::store::RecordStore)
/// writes and reads back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFields {
    /// Employee name.
    pub name: String,
    /// Job position.
    pub position: String,
    /// Monthly-equivalent base salary.
    pub base_salary: Decimal,
    /// Hourly rate.
    pub hourly_rate: Decimal,
    /// Regular hours worked per day.
    pub hours_worked: Decimal,
    /// Overtime hours per day.
    pub overtime_hours: Decimal,
    /// Working days per week.
    pub working_days: u32,
    /// Monthly deductions.
    pub deductions: Deductions,
}

/// One employee's payroll inputs and derived figures.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollRecord;
/// use rust_decimal::Decimal;
///
/// let mut record = PayrollRecord::new("Juan Dela Cruz", "Clerk", Decimal::from(50), 5)?;
/// record.set_hours_worked(Decimal::from(8))?;
///
/// assert_eq!(record.base_salary(), Decimal::from(12000));
/// assert_eq!(record.monthly_gross_pay(), Decimal::from(8000));
/// assert_eq!(record.monthly_net_pay(), Decimal::from(6535));
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollRecord {
    id: Option<i64>,
    name: String,
    position: String,
    hourly_rate: Decimal,
    working_days: u32,
    hours_worked: Decimal,
    overtime_hours: Decimal,
    base_salary: Decimal,
    #[serde(flatten)]
    deductions: Deductions,
    #[serde(skip)]
    gross_pay: GrossPay,
}

impl PayrollRecord {
    /// Creates an unsaved record with zero hours and overtime.
    ///
    /// Name and position are trimmed and must not be empty; the hourly rate
    /// must not be negative and working days must be within 1 to 7. A rate
    /// so large that the derived figures overflow is rejected as well.
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        hourly_rate: Decimal,
        working_days: u32,
    ) -> PayrollResult<Self> {
        let name = required_text("name", name.into())?;
        let position = required_text("position", position.into())?;
        if hourly_rate < Decimal::ZERO {
            return Err(PayrollError::validation(
                "hourly_rate",
                "must not be negative",
            ));
        }
        validate_working_days(working_days)?;

        let mut record = Self {
            id: None,
            name,
            position,
            hourly_rate,
            working_days,
            hours_worked: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            base_salary: Decimal::ZERO,
            deductions: Deductions::default(),
            gross_pay: GrossPay::default(),
        };
        record
            .recompute()
            .map_err(|_| PayrollError::too_large("hourly_rate"))?;
        Ok(record)
    }

    /// Rebuilds a persisted record, trusting its stored derived values.
    ///
    /// Only `working_days` is checked, since every per-day figure divides
    /// by it, along with gross pay fitting in a `Decimal`.
    pub fn restore(id: i64, fields: StoredFields) -> PayrollResult<Self> {
        validate_working_days(fields.working_days)?;
        let gross_pay = calculate_gross_pay(
            fields.hourly_rate,
            fields.hours_worked,
            fields.overtime_hours,
            fields.working_days,
        )?;

        Ok(Self {
            id: Some(id),
            name: fields.name,
            position: fields.position,
            hourly_rate: fields.hourly_rate,
            working_days: fields.working_days,
            hours_worked: fields.hours_worked,
            overtime_hours: fields.overtime_hours,
            base_salary: fields.base_salary,
            deductions: fields.deductions,
            gross_pay,
        })
    }

    /// Returns the persisted field values.
    pub fn stored_fields(&self) -> StoredFields {
        StoredFields {
            name: self.name.clone(),
            position: self.position.clone(),
            base_salary: self.base_salary,
            hourly_rate: self.hourly_rate,
            hours_worked: self.hours_worked,
            overtime_hours: self.overtime_hours,
            working_days: self.working_days,
            deductions: self.deductions,
        }
    }

    /// Records the id generated by the store on first insert.
    pub(crate) fn assign_id(&mut self, id: i64) {
        debug_assert!(self.id.is_none(), "payroll record id assigned twice");
        if self.id.is_none() {
            self.id = Some(id);
        }
    }

    /// Sets regular hours worked per day, within 0 to 12.
    pub fn set_hours_worked(&mut self, hours: Decimal) -> PayrollResult<()> {
        if !HOURS_WORKED_RANGE.contains(&hours) {
            return Err(PayrollError::validation(
                "hours_worked",
                "regular hours must be between 0 and 12",
            ));
        }
        self.apply("hours_worked", |record| record.hours_worked = hours)
    }

    /// Sets overtime hours per day; must not be negative, nor so large that
    /// the derived pay overflows.
    pub fn set_overtime_hours(&mut self, hours: Decimal) -> PayrollResult<()> {
        if hours < Decimal::ZERO {
            return Err(PayrollError::validation(
                "overtime_hours",
                "overtime hours cannot be negative",
            ));
        }
        self.apply("overtime_hours", |record| record.overtime_hours = hours)
    }

    /// Sets working days per week, within 1 to 7.
    pub fn set_working_days(&mut self, days: u32) -> PayrollResult<()> {
        validate_working_days(days)?;
        self.apply("working_days", |record| record.working_days = days)
    }

    // Every input change goes through here so derived fields never go stale.
    // The change is made on a copy and committed only if recompute succeeds.
    fn apply(&mut self, field: &str, mutate: impl FnOnce(&mut Self)) -> PayrollResult<()> {
        let mut candidate = self.clone();
        mutate(&mut candidate);
        candidate
            .recompute()
            .map_err(|_| PayrollError::too_large(field))?;
        *self = candidate;
        Ok(())
    }

    fn recompute(&mut self) -> PayrollResult<()> {
        let gross_pay = calculate_gross_pay(
            self.hourly_rate,
            self.hours_worked,
            self.overtime_hours,
            self.working_days,
        )?;
        let base_salary = calculate_base_salary(self.hourly_rate, self.working_days)?;
        let deductions = compute_deductions(base_salary, gross_pay.monthly)?;

        self.gross_pay = gross_pay;
        self.base_salary = base_salary;
        self.deductions = deductions;
        Ok(())
    }

    /// Store-assigned id, absent until first saved.
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Employee name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Job position.
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Hourly rate; fixed at creation.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// Working days per week.
    pub fn working_days(&self) -> u32 {
        self.working_days
    }

    /// Regular hours worked per day.
    pub fn hours_worked(&self) -> Decimal {
        self.hours_worked
    }

    /// Overtime hours per day.
    pub fn overtime_hours(&self) -> Decimal {
        self.overtime_hours
    }

    /// Monthly-equivalent base salary used for contribution lookups.
    pub fn base_salary(&self) -> Decimal {
        self.base_salary
    }

    /// Monthly SSS contribution.
    pub fn sss(&self) -> Decimal {
        self.deductions.sss
    }

    /// Monthly PhilHealth contribution.
    pub fn philhealth(&self) -> Decimal {
        self.deductions.philhealth
    }

    /// Monthly Pag-IBIG contribution.
    pub fn pagibig(&self) -> Decimal {
        self.deductions.pagibig
    }

    /// Monthly withholding tax.
    pub fn tax(&self) -> Decimal {
        self.deductions.tax
    }

    /// All four monthly deductions.
    pub fn deductions(&self) -> Deductions {
        self.deductions
    }

    /// Gross pay for the given period.
    pub fn gross_pay(&self, period: PayPeriod) -> Decimal {
        self.gross_pay.for_period(period)
    }

    /// The monthly deductions apportioned to the given period.
    pub fn deductions_for(&self, period: PayPeriod) -> Deductions {
        self.deductions
            .scaled_down(period.deduction_divisor(self.working_days))
    }

    /// Net pay for the given period: gross pay less apportioned deductions.
    pub fn net_pay(&self, period: PayPeriod) -> Decimal {
        self.gross_pay(period)
            - self.deductions.total() / period.deduction_divisor(self.working_days)
    }

    /// `hours_worked × hourly_rate + overtime_hours × hourly_rate × 1.25`.
    pub fn daily_gross_pay(&self) -> Decimal {
        self.gross_pay(PayPeriod::Daily)
    }

    /// Daily gross pay times working days.
    pub fn weekly_gross_pay(&self) -> Decimal {
        self.gross_pay(PayPeriod::Weekly)
    }

    /// Weekly gross pay times four.
    pub fn monthly_gross_pay(&self) -> Decimal {
        self.gross_pay(PayPeriod::Monthly)
    }

    /// Daily gross pay less total deductions over `working_days × 4`.
    pub fn daily_net_pay(&self) -> Decimal {
        self.net_pay(PayPeriod::Daily)
    }

    /// Weekly gross pay less a quarter of total deductions.
    pub fn weekly_net_pay(&self) -> Decimal {
        self.net_pay(PayPeriod::Weekly)
    }

    /// Monthly gross pay less total deductions.
    pub fn monthly_net_pay(&self) -> Decimal {
        self.net_pay(PayPeriod::Monthly)
    }

    /// Explains how the current inputs produce each deduction.
    ///
    /// The steps are computed afresh from the inputs, so for a restored
    /// record whose stored deductions came from different rules they show
    /// what the current rules would charge.
    pub fn deduction_audit(&self) -> PayrollResult<Vec<AuditStep>> {
        audit_deductions(self.base_salary, self.monthly_gross_pay(), 1)
    }
}

fn required_text(field: &str, value: String) -> PayrollResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PayrollError::validation(field, "cannot be empty"));
    }
    Ok(trimmed.to_string())
}

fn validate_working_days(days: u32) -> PayrollResult<()> {
    if WORKING_DAYS_RANGE.contains(&days) {
        Ok(())
    } else {
        Err(PayrollError::validation(
            "working_days",
            "working days must be between 1 and 7",
        ))
    }
}
