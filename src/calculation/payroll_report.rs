//! Payroll report generation.
//!
//! Builds a [`PayrollReport`] for a set of records at daily, weekly or
//! monthly granularity. Figures are read from each record as-is; a record
//! loaded from storage reports its stored deductions.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{PayPeriod, PayTotals, PayrollRecord, PayrollReport, PayslipLine};

/// Generates a payroll report for the given records and period.
///
/// Overtime on each line is expressed over the whole period (per day for
/// daily reports, times working days for weekly, times working days and
/// four weeks for monthly); regular hours stay per day.
///
/// Fails with a validation error if period overtime or a total does not
/// fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::generate_payroll_report;
/// use payroll_engine::models::{PayPeriod, PayrollRecord};
/// use rust_decimal::Decimal;
///
/// let mut record = PayrollRecord::new("Juan Dela Cruz", "Clerk", Decimal::from(50), 5)?;
/// record.set_hours_worked(Decimal::from(8))?;
///
/// let report = generate_payroll_report(&[record], PayPeriod::Monthly)?;
/// assert_eq!(report.lines.len(), 1);
/// assert_eq!(report.totals.gross_pay, Decimal::from(8000));
/// assert_eq!(report.totals.net_pay, Decimal::from(6535));
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
pub fn generate_payroll_report(
    records: &[PayrollRecord],
    period: PayPeriod,
) -> PayrollResult<PayrollReport> {
    let lines = records
        .iter()
        .map(|record| payslip_line(record, period))
        .collect::<PayrollResult<Vec<_>>>()?;

    let totals = lines
        .iter()
        .try_fold(PayTotals::default(), |totals, line| {
            Ok::<_, PayrollError>(PayTotals {
                gross_pay: add_to_total("gross_pay", totals.gross_pay, line.gross_pay)?,
                deductions: add_to_total(
                    "deductions",
                    totals.deductions,
                    line.deductions.total(),
                )?,
                net_pay: add_to_total("net_pay", totals.net_pay, line.net_pay)?,
            })
        })?;

    Ok(PayrollReport {
        period,
        generated_at: Utc::now(),
        lines,
        totals,
    })
}

fn add_to_total(field: &str, total: Decimal, amount: Decimal) -> PayrollResult<Decimal> {
    total
        .checked_add(amount)
        .ok_or_else(|| PayrollError::too_large(field))
}

fn payslip_line(record: &PayrollRecord, period: PayPeriod) -> PayrollResult<PayslipLine> {
    let days = record.working_days();
    let overtime_hours = period
        .checked_scale(record.overtime_hours(), days)
        .ok_or_else(|| PayrollError::too_large("overtime_hours"))?;

    Ok(PayslipLine {
        id: record.id(),
        name: record.name().to_string(),
        position: record.position().to_string(),
        hourly_rate: record.hourly_rate(),
        hours_worked: record.hours_worked(),
        overtime_hours,
        working_days: days,
        gross_pay: record.gross_pay(period),
        deductions: record.deductions_for(period),
        net_pay: record.net_pay(period),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_records() -> Vec<PayrollRecord> {
        let mut clerk = PayrollRecord::new("Maria Santos", "Clerk", dec("50"), 5).unwrap();
        clerk.set_hours_worked(dec("8")).unwrap();
        clerk.set_overtime_hours(dec("1")).unwrap();

        let mut engineer = PayrollRecord::new("Jose Rizal", "Engineer", dec("200"), 5).unwrap();
        engineer.set_hours_worked(dec("8")).unwrap();

        vec![clerk, engineer]
    }

    #[test]
    fn test_empty_report() {
        let report = generate_payroll_report(&[], PayPeriod::Weekly).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.totals, PayTotals::default());
        assert_eq!(report.period, PayPeriod::Weekly);
    }

    #[test]
    fn test_lines_follow_input_order() {
        let report = generate_payroll_report(&create_test_records(), PayPeriod::Daily).unwrap();
        let names: Vec<&str> = report.lines.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Maria Santos", "Jose Rizal"]);
    }

    #[test]
    fn test_overtime_scaled_to_period() {
        let records = create_test_records();
        let daily = generate_payroll_report(&records, PayPeriod::Daily).unwrap();
        let weekly = generate_payroll_report(&records, PayPeriod::Weekly).unwrap();
        let monthly = generate_payroll_report(&records, PayPeriod::Monthly).unwrap();

        assert_eq!(daily.lines[0].overtime_hours, dec("1"));
        assert_eq!(weekly.lines[0].overtime_hours, dec("5"));
        assert_eq!(monthly.lines[0].overtime_hours, dec("20"));
        assert_eq!(monthly.lines[0].hours_worked, dec("8"));
    }

    #[test]
    fn test_monthly_totals() {
        let report = generate_payroll_report(&create_test_records(), PayPeriod::Monthly).unwrap();
        // Clerk: daily 400 + 62.5 = 462.5 → monthly 9250; deductions 1465
        // Engineer: monthly 32000; deductions 2185 + 1796.40 = 3981.40
        assert_eq!(report.totals.gross_pay, dec("41250"));
        assert_eq!(report.totals.deductions, dec("5446.40"));
        assert_eq!(report.totals.net_pay, dec("35803.60"));
    }

    #[test]
    fn test_weekly_deductions_are_quarter_of_monthly() {
        let records = create_test_records();
        let report = generate_payroll_report(&records, PayPeriod::Weekly).unwrap();
        assert_eq!(report.lines[0].deductions.sss, dec("281.25"));
        assert_eq!(
            report.lines[1].deductions.total(),
            records[1].deductions().total() / dec("4")
        );
    }

    #[test]
    fn test_totals_match_line_sums() {
        for period in PayPeriod::ALL {
            let report = generate_payroll_report(&create_test_records(), period).unwrap();
            let net: Decimal = report.lines.iter().map(|line| line.net_pay).sum();
            assert_eq!(net, report.totals.net_pay);
            assert_eq!(
                report.totals.gross_pay - report.totals.deductions,
                report.totals.net_pay
            );
        }
    }

    #[test]
    fn test_report_serializes_period_and_lines() {
        let report = generate_payroll_report(&create_test_records(), PayPeriod::Monthly).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["period"], "monthly");
        assert_eq!(json["lines"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_totals_that_overflow_are_rejected() {
        let mut record = PayrollRecord::new("Ana", "Clerk", dec("10"), 7).unwrap();
        record
            .set_overtime_hours(dec("200000000000000000000000000"))
            .unwrap();
        let records = vec![record.clone(), record];

        assert!(generate_payroll_report(&records[..1], PayPeriod::Monthly).is_ok());
        let err = generate_payroll_report(&records, PayPeriod::Monthly).unwrap_err();
        assert!(err.is_validation());
    }
}
