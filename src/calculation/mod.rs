//! Calculation logic for the payroll engine.
//!
//! This module contains one function per statutory rule: base salary
//! derivation, gross pay, the SSS bracket lookup, the PhilHealth and
//! Pag-IBIG percentage contributions, and progressive withholding tax.
//! The `deductions` step combines them, and `payroll_report` aggregates
//! records into daily, weekly or monthly reports.

mod base_salary;
mod deductions;
mod gross_pay;
mod pagibig;
mod payroll_report;
mod philhealth;
mod sss;
mod withholding_tax;

pub use base_salary::{BASE_SALARY_HOURS_PER_DAY, WEEKS_PER_MONTH, calculate_base_salary};
pub use deductions::{audit_deductions, compute_deductions, taxable_income};
pub use gross_pay::{GrossPay, OVERTIME_MULTIPLIER, calculate_daily_gross_pay, calculate_gross_pay};
pub use pagibig::{PAGIBIG_CAP, PAGIBIG_RATE, pagibig_contribution};
pub use payroll_report::generate_payroll_report;
pub use philhealth::{PHILHEALTH_RATE, philhealth_contribution};
pub use sss::{SSS_MAX_CONTRIBUTION, SSS_SCHEDULE, SssBracket, sss_contribution};
pub use withholding_tax::{
    TaxBracket, WITHHOLDING_TAX_BRACKETS, calculate_withholding_tax, tax_bracket_for,
};
