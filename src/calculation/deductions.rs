//! Combined deduction computation.
//!
//! Contributions (SSS, PhilHealth, Pag-IBIG) are looked up on the base
//! salary, while withholding tax is charged on actual monthly gross pay less
//! those contributions. The two bases differ on purpose and must not be
//! unified: base salary assumes 12 hours a day, gross pay uses hours worked.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{AuditStep, Deductions};

use super::pagibig::{PAGIBIG_CAP, PAGIBIG_RATE, pagibig_contribution};
use super::philhealth::{PHILHEALTH_RATE, philhealth_contribution};
use super::sss::sss_contribution;
use super::withholding_tax::{calculate_withholding_tax, tax_bracket_for};

/// Computes all four monthly deductions.
///
/// # Arguments
///
/// * `base_salary` - The monthly-equivalent base salary (contribution basis)
/// * `monthly_gross_pay` - Actual monthly gross pay (tax basis)
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_deductions;
/// use rust_decimal::Decimal;
///
/// let deductions = compute_deductions(Decimal::from(12000), Decimal::from(8000))?;
/// assert_eq!(deductions.sss, Decimal::from(1125));
/// assert_eq!(deductions.philhealth, Decimal::from(240));
/// assert_eq!(deductions.pagibig, Decimal::from(100));
/// assert_eq!(deductions.tax, Decimal::ZERO);
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
pub fn compute_deductions(
    base_salary: Decimal,
    monthly_gross_pay: Decimal,
) -> PayrollResult<Deductions> {
    let mut deductions = Deductions {
        sss: sss_contribution(base_salary),
        philhealth: philhealth_contribution(base_salary),
        pagibig: pagibig_contribution(base_salary),
        tax: Decimal::ZERO,
    };
    deductions.tax = calculate_withholding_tax(taxable_income(monthly_gross_pay, &deductions)?);
    Ok(deductions)
}

/// Monthly gross pay less the three contributions.
pub fn taxable_income(
    monthly_gross_pay: Decimal,
    deductions: &Deductions,
) -> PayrollResult<Decimal> {
    monthly_gross_pay
        .checked_sub(deductions.contributions())
        .ok_or_else(|| PayrollError::too_large("monthly_gross_pay"))
}

/// Produces the audit steps explaining [`compute_deductions`] for the same
/// inputs, numbered from `step_number_start`.
pub fn audit_deductions(
    base_salary: Decimal,
    monthly_gross_pay: Decimal,
    step_number_start: u32,
) -> PayrollResult<Vec<AuditStep>> {
    let deductions = compute_deductions(base_salary, monthly_gross_pay)?;
    let taxable = taxable_income(monthly_gross_pay, &deductions)?;
    let bracket = tax_bracket_for(taxable);
    let base = base_salary.normalize();

    let steps = [
        (
            "sss",
            "SSS Contribution",
            serde_json::json!({ "base_salary": base.to_string() }),
            serde_json::json!({ "amount": deductions.sss.normalize().to_string() }),
            format!(
                "Base salary {} falls in the SSS schedule at {}",
                base,
                deductions.sss.normalize()
            ),
        ),
        (
            "philhealth",
            "PhilHealth Contribution",
            serde_json::json!({ "base_salary": base.to_string() }),
            serde_json::json!({
                "rate": PHILHEALTH_RATE.normalize().to_string(),
                "amount": deductions.philhealth.normalize().to_string()
            }),
            format!(
                "{} x {} = {}",
                base,
                PHILHEALTH_RATE.normalize(),
                deductions.philhealth.normalize()
            ),
        ),
        (
            "pagibig",
            "Pag-IBIG Contribution",
            serde_json::json!({ "base_salary": base.to_string() }),
            serde_json::json!({
                "rate": PAGIBIG_RATE.normalize().to_string(),
                "cap": PAGIBIG_CAP.normalize().to_string(),
                "amount": deductions.pagibig.normalize().to_string()
            }),
            format!(
                "min({} x {}, {}) = {}",
                base,
                PAGIBIG_RATE.normalize(),
                PAGIBIG_CAP.normalize(),
                deductions.pagibig.normalize()
            ),
        ),
        (
            "withholding_tax",
            "Withholding Tax",
            serde_json::json!({
                "monthly_gross_pay": monthly_gross_pay.normalize().to_string(),
                "contributions": deductions.contributions().normalize().to_string(),
                "taxable_income": taxable.normalize().to_string()
            }),
            serde_json::json!({
                "bracket_lower": bracket.lower.to_string(),
                "bracket_upper": bracket.upper.map(|upper| upper.to_string()),
                "base_tax": bracket.base_tax.to_string(),
                "rate": bracket.rate.normalize().to_string(),
                "amount": deductions.tax.normalize().to_string()
            }),
            format!(
                "Taxable income {} (monthly gross pay, not base salary, less contributions): {} + excess over {} x {} = {}",
                taxable.normalize(),
                bracket.base_tax,
                bracket.lower,
                bracket.rate.normalize(),
                deductions.tax.normalize()
            ),
        ),
    ];

    Ok(steps
        .into_iter()
        .zip(step_number_start..)
        .map(
            |((rule_id, rule_name, input, output, reasoning), step_number)| AuditStep {
                step_number,
                rule_id: rule_id.to_string(),
                rule_name: rule_name.to_string(),
                input,
                output,
                reasoning,
            },
        )
        .collect())
}
