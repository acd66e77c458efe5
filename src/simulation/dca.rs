//! Dollar-cost averaging, stepped monthly

use log::{debug, trace, warn};

use super::state::DcaState;
use super::types::{DcaParameters, DcaResult};
use crate::error::{ProjectionError, Result};
use crate::rates::{breakdown_rows, months};

/// Simulate buying `params.monthly_investment` every month from `reference_price`
///
/// Month `m` (0-indexed) moves the price by `price_changes[m]` percent of the
/// previous month's price, or holds it flat once the sequence runs out.
pub fn simulate_dca(params: &DcaParameters, reference_price: f64) -> Result<DcaResult> {
    if !(params.monthly_investment >= 0.0) {
        return Err(ProjectionError::invalid(
            "monthly_investment",
            format!("must be non-negative, got {}", params.monthly_investment),
        ));
    }
    if !(reference_price > 0.0) {
        return Err(ProjectionError::invalid(
            "dca_reference_price",
            format!("must be positive, got {}", reference_price),
        ));
    }

    let total_months = breakdown_rows("years", months(params.years))?;
    if let Some((month, change)) = params
        .price_changes
        .iter()
        .take(total_months as usize)
        .enumerate()
        .find(|&(_, &change)| change <= -100.0)
    {
        return Err(ProjectionError::invalid(
            "price_changes",
            format!("month {} change of {}% leaves a non-positive price", month + 1, change),
        ));
    }

    debug!(
        "DCA simulation: {:.2}/month for {} months, {} price changes supplied",
        params.monthly_investment,
        total_months,
        params.price_changes.len()
    );

    let mut state = DcaState::new(reference_price);
    let mut monthly_breakdown = Vec::with_capacity(total_months as usize);

    for month in 0..total_months as usize {
        let step = state.advance_month(params.change_for_month(month), params.monthly_investment);
        trace!(
            "month {}: price {:.4}, bought {:.6}, holding {:.6}",
            step.month,
            step.price,
            step.shares_bought,
            step.total_shares
        );
        monthly_breakdown.push(step);
    }

    if state.total_shares == 0.0 {
        warn!("DCA simulation bought no shares; average price reported as 0");
    }

    let final_value = state.portfolio_value();
    let total_return = final_value - state.total_invested;
    let return_percentage = if state.total_invested > 0.0 {
        total_return / state.total_invested * 100.0
    } else {
        0.0
    };

    Ok(DcaResult {
        total_invested: state.total_invested,
        final_value,
        total_shares: state.total_shares,
        average_price: state.average_price(),
        total_return,
        return_percentage,
        monthly_breakdown,
    })
}
