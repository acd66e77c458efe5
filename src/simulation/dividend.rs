//! Dividend reinvestment, stepped annually

use log::{debug, trace, warn};

use super::state::DividendState;
use super::types::{DividendParameters, DividendResult};
use crate::error::{ProjectionError, Result};
use crate::formulas::cagr;
use crate::rates::breakdown_rows;

/// Simulate reinvesting every dividend for `params.years` years
pub fn simulate_dividends(params: &DividendParameters) -> Result<DividendResult> {
    if !(params.initial_investment >= 0.0) {
        return Err(ProjectionError::invalid(
            "initial_investment",
            format!("must be non-negative, got {}", params.initial_investment),
        ));
    }

    debug!(
        "Dividend simulation: {:.2} at {:.4} yield, {:.4} appreciation, {} years",
        params.initial_investment, params.dividend_yield, params.price_appreciation, params.years
    );

    let years = breakdown_rows("years", u64::from(params.years))?;
    let mut state = DividendState::new(params.initial_investment);
    let mut yearly_breakdown = Vec::with_capacity(years as usize);

    for _year in 1..=years {
        let step = state.advance_year(params.dividend_yield, params.price_appreciation);
        trace!("year {}: value {:.2}, dividends {:.2}", step.year, step.value, step.dividends);
        yearly_breakdown.push(step);
    }

    let total_return = state.current_value - params.initial_investment;
    let return_percentage = if params.initial_investment > 0.0 {
        total_return / params.initial_investment * 100.0
    } else {
        warn!("Dividend simulation with zero initial investment; reporting 0% return");
        0.0
    };

    Ok(DividendResult {
        initial_investment: params.initial_investment,
        final_value: state.current_value,
        total_dividends: state.total_dividends,
        total_return,
        return_percentage,
        cagr: cagr(params.initial_investment, state.current_value, params.years),
        yearly_breakdown,
    })
}
