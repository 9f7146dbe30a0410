//! Social Security System (SSS) contribution lookup.
//!
//! The contribution is a fixed amount chosen from a bracket table keyed on
//! the base salary. Thresholds are inclusive and checked in ascending order;
//! anything above the last threshold pays the maximum contribution.

use rust_decimal::Decimal;

/// One row of the SSS contribution schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SssBracket {
    /// Inclusive upper bound of the base salary for this row.
    pub upper: Decimal,
    /// Monthly contribution for this row.
    pub contribution: Decimal,
}

/// The SSS schedule, ascending by upper bound.
pub const SSS_SCHEDULE: [SssBracket; 3] = [
    SssBracket {
        upper: Decimal::from_parts(3250, 0, 0, false, 0),
        contribution: Decimal::from_parts(13500, 0, 0, false, 2),
    },
    SssBracket {
        upper: Decimal::from_parts(3750, 0, 0, false, 0),
        contribution: Decimal::from_parts(15750, 0, 0, false, 2),
    },
    SssBracket {
        upper: Decimal::from_parts(4250, 0, 0, false, 0),
        contribution: Decimal::from_parts(18000, 0, 0, false, 2),
    },
];

/// Contribution for base salaries above every row of [`SSS_SCHEDULE`].
pub const SSS_MAX_CONTRIBUTION: Decimal = Decimal::from_parts(112500, 0, 0, false, 2);

/// Looks up the monthly SSS contribution for a base salary.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::sss_contribution;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(sss_contribution(Decimal::from(3250)), Decimal::from_str("135.00").unwrap());
/// assert_eq!(sss_contribution(Decimal::from(12000)), Decimal::from_str("1125.00").unwrap());
/// ```
pub fn sss_contribution(base_salary: Decimal) -> Decimal {
    SSS_SCHEDULE
        .iter()
        .find(|bracket| base_salary <= bracket.upper)
        .map_or(SSS_MAX_CONTRIBUTION, |bracket| bracket.contribution)
}
