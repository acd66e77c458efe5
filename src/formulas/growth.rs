//! Closed-form time-value formulas
//!
//! Rates are per period, as decimals (0.01 = 1% per month). Every formula with
//! the rate in a denominator takes its limiting linear form at a rate of exactly
//! zero rather than dividing by it. Exponents are taken in floating point, so
//! period counts beyond `i32::MAX` compound correctly.

/// Growth factor (1 + r)^n
fn growth_factor(period_rate: f64, total_periods: u64) -> f64 {
    (1.0 + period_rate).powf(total_periods as f64)
}

/// Value of a single lump sum after compounding: P(1 + r)^n
pub fn compound_growth(principal: f64, period_rate: f64, total_periods: u64) -> f64 {
    principal * growth_factor(period_rate, total_periods)
}

/// Future value of an ordinary annuity of `contribution` per period
///
/// C((1 + r)^n - 1) / r, or C·n when r = 0.
pub fn annuity_future_value(contribution: f64, period_rate: f64, total_periods: u64) -> f64 {
    if period_rate == 0.0 {
        return contribution * total_periods as f64;
    }
    contribution * (growth_factor(period_rate, total_periods) - 1.0) / period_rate
}

/// Level payment that amortizes `present_value` over `total_periods`
///
/// PV·r(1 + r)^n / ((1 + r)^n - 1), or PV/n when r = 0. `total_periods` must
/// be non-zero.
pub fn annuity_payment(present_value: f64, period_rate: f64, total_periods: u64) -> f64 {
    if period_rate == 0.0 {
        return present_value / total_periods as f64;
    }
    let factor = growth_factor(period_rate, total_periods);
    present_value * period_rate * factor / (factor - 1.0)
}

/// Present value of `periodic_amount` received for `total_periods` periods
///
/// A(1 - (1 + r)^-n) / r, or A·n when r = 0.
pub fn present_value_of_annuity(periodic_amount: f64, period_rate: f64, total_periods: u64) -> f64 {
    if period_rate == 0.0 {
        return periodic_amount * total_periods as f64;
    }
    let discount = (1.0 + period_rate).powf(-(total_periods as f64));
    periodic_amount * (1.0 - discount) / period_rate
}

/// Compound annual growth rate, in percent
///
/// Returns 0 when `years` is 0 or `beginning_value` is 0; the rate is
/// undefined there and 0 is the reported value.
pub fn cagr(beginning_value: f64, ending_value: f64, years: u32) -> f64 {
    if years == 0 || beginning_value == 0.0 {
        return 0.0;
    }
    ((ending_value / beginning_value).powf(1.0 / years as f64) - 1.0) * 100.0
}

/// Approximate years to double at `annual_return` (decimal), by the rule of 72
///
/// This is the rule-of-thumb 72 / (rate in percent), not the exact
/// ln 2 / ln(1 + r). A zero return never doubles and yields `f64::INFINITY`.
pub fn doubling_time(annual_return: f64) -> f64 {
    if annual_return == 0.0 {
        return f64::INFINITY;
    }
    72.0 / (annual_return * 100.0)
}
