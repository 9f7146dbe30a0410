//! Progressive withholding tax.
//!
//! Tax is computed on monthly taxable income (monthly gross pay minus the
//! three contributions) with a cumulative bracket formula: each bracket
//! carries the tax owed up to its lower bound plus a marginal rate on the
//! excess. Upper bounds are inclusive; the top bracket is unbounded.

use rust_decimal::Decimal;
use serde::Serialize;

/// One bracket of the withholding tax table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxBracket {
    /// Income the marginal rate is measured from.
    pub lower: Decimal,
    /// Inclusive upper bound, or `None` for the top bracket.
    pub upper: Option<Decimal>,
    /// Tax owed on income up to `lower`.
    pub base_tax: Decimal,
    /// Marginal rate applied to income above `lower`.
    pub rate: Decimal,
}

const fn whole(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, 0)
}

const fn percent(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, 2)
}

/// The monthly withholding tax table, ascending.
pub const WITHHOLDING_TAX_BRACKETS: [TaxBracket; 6] = [
    TaxBracket {
        lower: whole(0),
        upper: Some(whole(20833)),
        base_tax: whole(0),
        rate: percent(0),
    },
    TaxBracket {
        lower: whole(20833),
        upper: Some(whole(33333)),
        base_tax: whole(0),
        rate: percent(20),
    },
    TaxBracket {
        lower: whole(33333),
        upper: Some(whole(66667)),
        base_tax: whole(2500),
        rate: percent(25),
    },
    TaxBracket {
        lower: whole(66667),
        upper: Some(whole(166667)),
        base_tax: whole(10833),
        rate: percent(30),
    },
    TaxBracket {
        lower: whole(166667),
        upper: Some(whole(666667)),
        base_tax: whole(40833),
        rate: percent(32),
    },
    TaxBracket {
        lower: whole(666667),
        upper: None,
        base_tax: whole(200833),
        rate: percent(35),
    },
];

/// Returns the bracket that applies to the given taxable income.
pub fn tax_bracket_for(taxable_income: Decimal) -> &'static TaxBracket {
    let top = &WITHHOLDING_TAX_BRACKETS[WITHHOLDING_TAX_BRACKETS.len() - 1];
    WITHHOLDING_TAX_BRACKETS
        .iter()
        .find(|bracket| bracket.upper.is_none_or(|upper| taxable_income <= upper))
        .unwrap_or(top)
}

/// Calculates monthly withholding tax on taxable income.
///
/// Negative taxable income (contributions exceeding gross pay) falls in the
/// first bracket and owes nothing.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_withholding_tax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(calculate_withholding_tax(Decimal::from(20833)), Decimal::ZERO);
/// assert_eq!(
///     calculate_withholding_tax(Decimal::from(20834)),
///     Decimal::from_str("0.20").unwrap()
/// );
/// ```
pub fn calculate_withholding_tax(taxable_income: Decimal) -> Decimal {
    let bracket = tax_bracket_for(taxable_income);
    let excess = (taxable_income - bracket.lower).max(Decimal::ZERO);
    bracket.base_tax + excess * bracket.rate
}
