//! Pag-IBIG (Home Development Mutual Fund) contribution.

use rust_decimal::Decimal;

/// Pag-IBIG rate applied to the base salary (2%).
pub const PAGIBIG_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 2);

/// Maximum monthly Pag-IBIG contribution.
pub const PAGIBIG_CAP: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Calculates the monthly Pag-IBIG contribution: `min(base_salary × 0.02, 100)`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::pagibig_contribution;
/// use rust_decimal::Decimal;
///
/// assert_eq!(pagibig_contribution(Decimal::from(2000)), Decimal::from(40));
/// assert_eq!(pagibig_contribution(Decimal::from(12000)), Decimal::from(100));
/// ```
pub fn pagibig_contribution(base_salary: Decimal) -> Decimal {
    (base_salary * PAGIBIG_RATE).min(PAGIBIG_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_below_cap() {
        assert_eq!(pagibig_contribution(dec("3360")), dec("67.20"));
    }

    #[test]
    fn test_exactly_at_cap() {
        assert_eq!(pagibig_contribution(dec("5000")), dec("100"));
    }

    #[test]
    fn test_capped_above_threshold() {
        assert_eq!(pagibig_contribution(dec("5000.01")), dec("100"));
        assert_eq!(pagibig_contribution(dec("12000")), dec("100"));
    }
}
