//! Core data models for the payroll engine.
//!
//! This module contains the payroll record entity and the value types the
//! engine produces from it.

mod audit;
mod deductions;
mod pay_period;
mod payroll_record;
mod payroll_report;

pub use audit::AuditStep;
pub use deductions::Deductions;
pub use pay_period::PayPeriod;
pub use payroll_record::{HOURS_WORKED_RANGE, PayrollRecord, StoredFields, WORKING_DAYS_RANGE};
pub use payroll_report::{PayTotals, PayrollReport, PayslipLine};
