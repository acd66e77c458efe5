//! Running state for the step simulators
//!
//! Each simulation owns one of these for the duration of a single call.

use super::types::{DcaStep, DividendStep};

/// Holdings while reinvesting dividends
#[derive(Debug, Clone)]
pub(crate) struct DividendState {
    /// Years simulated so far
    pub(crate) year: u32,

    /// Portfolio value at the end of the last simulated year
    pub(crate) current_value: f64,

    pub(crate) total_dividends: f64,
}

impl DividendState {
    pub(crate) fn new(initial_investment: f64) -> Self {
        Self {
            year: 0,
            current_value: initial_investment,
            total_dividends: 0.0,
        }
    }

    /// Advance one year: pay the dividend, reinvest it, then apply price growth
    pub(crate) fn advance_year(&mut self, dividend_yield: f64, price_appreciation: f64) -> DividendStep {
        self.year += 1;

        let dividends = self.current_value * dividend_yield;
        self.total_dividends += dividends;

        // Reinvest before appreciation so the new shares grow this year too
        self.current_value += dividends;
        self.current_value *= 1.0 + price_appreciation;

        DividendStep {
            year: self.year,
            value: self.current_value,
            dividends,
            total_dividends: self.total_dividends,
        }
    }
}

/// Holdings while buying a fixed amount every month
#[derive(Debug, Clone)]
pub(crate) struct DcaState {
    /// Months simulated so far
    pub(crate) month: u32,

    /// Price the next month's change applies to
    pub(crate) base_price: f64,

    pub(crate) total_shares: f64,
    pub(crate) total_invested: f64,
}

impl DcaState {
    pub(crate) fn new(reference_price: f64) -> Self {
        Self {
            month: 0,
            base_price: reference_price,
            total_shares: 0.0,
            total_invested: 0.0,
        }
    }

    /// Advance one month: move the price by `change_pct` percent and buy
    ///
    /// The resulting price becomes the base for the following month, so the
    /// price path compounds on itself. The caller guarantees the new price is
    /// positive.
    pub(crate) fn advance_month(&mut self, change_pct: f64, investment: f64) -> DcaStep {
        self.month += 1;

        let price = self.base_price * (1.0 + change_pct / 100.0);
        let shares_bought = investment / price;
        self.total_shares += shares_bought;
        self.total_invested += investment;
        self.base_price = price;

        DcaStep {
            month: self.month,
            price,
            shares_bought,
            total_shares: self.total_shares,
            invested: self.total_invested,
            value: self.total_shares * price,
        }
    }

    /// Holdings marked at the latest price
    pub(crate) fn portfolio_value(&self) -> f64 {
        self.total_shares * self.base_price
    }

    /// Mean cost per share (0 before any purchase)
    pub(crate) fn average_price(&self) -> f64 {
        if self.total_shares > 0.0 {
            self.total_invested / self.total_shares
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dividend_reinvest_then_appreciate() {
        let mut state = DividendState::new(1_000.0);
        let step = state.advance_year(0.05, 0.07);
        assert_eq!(step.year, 1);
        assert_eq!(step.dividends, 50.0);
        assert_eq!(step.value, (1_000.0 * 1.05) * 1.07);
        assert_eq!(state.total_dividends, 50.0);
    }

    #[test]
    fn test_dca_price_compounds_on_prior_month() {
        let mut state = DcaState::new(100.0);
        let first = state.advance_month(10.0, 100.0);
        assert!((first.price - 110.0).abs() < 1e-12);

        let second = state.advance_month(-10.0, 100.0);
        assert!((second.price - 99.0).abs() < 1e-12);
        assert!((state.base_price - 99.0).abs() < 1e-12);
    }

    #[test]
    fn test_dca_average_price_before_buying() {
        let state = DcaState::new(100.0);
        assert_eq!(state.average_price(), 0.0);
        assert_eq!(state.portfolio_value(), 0.0);
    }
}
