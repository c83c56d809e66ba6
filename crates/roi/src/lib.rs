//! Rental property return-on-investment calculator
//!
//! Takes the four figures an investor types into a calculator form
//! (purchase price, down payment, monthly rent, monthly operating expenses)
//! and derives the yearly cash flow, cap rate and cash-on-cash return.
//!
//! Nothing here fails: text that does not parse counts as `0`, and a zero
//! denominator yields a `0.00` percentage. A calculator always shows a number.

pub mod format;
pub mod parse;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use format::format_currency;
pub use parse::parse_amount;

/// Months in a year, used to annualise rent and expenses.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Calculator inputs, already coerced to numbers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoiInput {
    pub purchase_price: f64,
    pub down_payment: f64,
    pub monthly_rent: f64,
    pub monthly_expenses: f64,
}

impl RoiInput {
    pub fn new(purchase_price: f64, down_payment: f64, monthly_rent: f64, monthly_expenses: f64) -> Self {
        Self {
            purchase_price,
            down_payment,
            monthly_rent,
            monthly_expenses,
        }
    }

    /// Build inputs from free-form form fields. See [`parse_amount`].
    pub fn from_text(purchase_price: &str, down_payment: &str, monthly_rent: &str, monthly_expenses: &str) -> Self {
        Self::new(
            parse_amount(purchase_price),
            parse_amount(down_payment),
            parse_amount(monthly_rent),
            parse_amount(monthly_expenses),
        )
    }
}

/// A percentage such as a cap rate. Displays with two decimals, e.g. `4.00`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Percent(pub f64);

impl Percent {
    pub const ZERO: Percent = Percent(0.0);

    /// `numerator / denominator * 100`, or zero unless the denominator is
    /// positive and the result finite.
    pub fn ratio(numerator: f64, denominator: f64) -> Self {
        if denominator > 0.0 {
            Percent(finite_or_zero(numerator / denominator * 100.0))
        } else {
            Self::ZERO
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Avoid printing "-0.00" or "NaN"
        let value = finite_or_zero(self.0);
        let rounded = (value * 100.0).round() / 100.0;
        let value = if rounded == 0.0 { 0.0 } else { value };
        write!(f, "{:.2}", value)
    }
}

/// Derived metrics. `net_income` is not clamped and may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoiResult {
    pub annual_rent: f64,
    pub annual_expenses: f64,
    pub net_income: f64,
    pub cap_rate: Percent,
    pub cash_on_cash_return: Percent,
}

/// Overflowed or undefined figures show as zero.
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

pub fn compute_roi(input: &RoiInput) -> RoiResult {
    let annual_rent = finite_or_zero(input.monthly_rent * MONTHS_PER_YEAR);
    let annual_expenses = finite_or_zero(input.monthly_expenses * MONTHS_PER_YEAR);
    let net_income = finite_or_zero(annual_rent - annual_expenses);

    RoiResult {
        annual_rent,
        annual_expenses,
        net_income,
        cap_rate: Percent::ratio(net_income, input.purchase_price),
        cash_on_cash_return: Percent::ratio(net_income, input.down_payment),
    }
}
