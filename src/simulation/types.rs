//! Parameters, per-step rows and results for the simulators

use serde::{Deserialize, Serialize};

/// Default annual price growth for dividend simulations
pub const DEFAULT_PRICE_APPRECIATION: f64 = 0.07;

/// Dividend-paying holding with all dividends reinvested
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DividendParameters {
    pub initial_investment: f64,

    /// Annual dividend as a fraction of portfolio value
    pub dividend_yield: f64,

    pub years: u32,

    /// Annual share price growth (decimal)
    pub price_appreciation: f64,
}

impl DividendParameters {
    pub fn new(initial_investment: f64, dividend_yield: f64, years: u32) -> Self {
        Self {
            initial_investment,
            dividend_yield,
            years,
            price_appreciation: DEFAULT_PRICE_APPRECIATION,
        }
    }

    pub fn with_price_appreciation(mut self, price_appreciation: f64) -> Self {
        self.price_appreciation = price_appreciation;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividendStep {
    /// 1-indexed simulation year
    pub year: u32,

    /// Portfolio value at year end
    pub value: f64,

    /// Dividend paid this year
    pub dividends: f64,

    /// Dividends paid through this year
    pub total_dividends: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividendResult {
    pub initial_investment: f64,
    pub final_value: f64,
    pub total_dividends: f64,
    pub total_return: f64,

    /// total_return relative to the initial investment, in percent
    pub return_percentage: f64,

    /// Compound annual growth rate over the whole horizon, in percent
    pub cagr: f64,

    pub yearly_breakdown: Vec<DividendStep>,
}

/// Fixed monthly purchase along a caller-supplied price path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DcaParameters {
    pub monthly_investment: f64,
    pub years: u32,

    /// Month-over-month price changes in percent (10.0 = +10%). Months past the
    /// end of the sequence keep the price flat.
    pub price_changes: Vec<f64>,
}

impl DcaParameters {
    pub fn new(monthly_investment: f64, years: u32, price_changes: Vec<f64>) -> Self {
        Self {
            monthly_investment,
            years,
            price_changes,
        }
    }

    /// Price change for a 0-indexed month
    pub fn change_for_month(&self, month: usize) -> f64 {
        self.price_changes.get(month).copied().unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DcaStep {
    /// 1-indexed month
    pub month: u32,
    pub price: f64,
    pub shares_bought: f64,
    pub total_shares: f64,

    /// Cumulative amount invested through this month
    pub invested: f64,

    /// Holdings marked at this month's price
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DcaResult {
    pub total_invested: f64,
    pub final_value: f64,
    pub total_shares: f64,

    /// Mean cost per share (0 if nothing was bought)
    pub average_price: f64,

    pub total_return: f64,

    /// total_return relative to total_invested, in percent (0 if nothing invested)
    pub return_percentage: f64,

    pub monthly_breakdown: Vec<DcaStep>,
}
