//! Inverse problems over the growth formulas
//!
//! How much capital funds an income stream, and what monthly contribution
//! closes the gap between current savings and a target.

use super::growth::{annuity_future_value, compound_growth, present_value_of_annuity};
use crate::rates::{months, period_rate};

/// Capital needed to pay `monthly_income` for `years`, discounted monthly at
/// `annual_return`
///
/// The caller picks the discount rate; retirement planning passes a
/// conservative fraction of the pre-retirement return.
pub fn required_capital(monthly_income: f64, years: u32, annual_return: f64) -> f64 {
    present_value_of_annuity(monthly_income, period_rate(annual_return, 12), months(years))
}

/// Monthly contribution that grows `current_savings` to `target_amount` in `years`
///
/// Returns 0 when the savings alone reach the target. Inverts
/// [`annuity_future_value`] for the gap left after compounding the savings, so
/// a zero rate splits the gap evenly across the months.
pub fn required_monthly_contribution(
    current_savings: f64,
    target_amount: f64,
    annual_return: f64,
    years: u32,
) -> f64 {
    let rate = period_rate(annual_return, 12);
    let n = months(years);

    let gap = target_amount - compound_growth(current_savings, rate, n);
    if gap <= 0.0 {
        return 0.0;
    }

    // FV of one unit per month; gap / unit_fv is the payment
    let unit_fv = annuity_future_value(1.0, rate, n);
    gap / unit_fv
}
