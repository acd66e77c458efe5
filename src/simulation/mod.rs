//! Step-by-step investment simulators
//!
//! Both simulators return their totals together with one breakdown row per
//! simulated period, in order.

mod dca;
mod dividend;
mod state;
mod types;

pub use dca::simulate_dca;
pub use dividend::simulate_dividends;
pub use types::{
    DcaParameters, DcaResult, DcaStep, DividendParameters, DividendResult, DividendStep,
    DEFAULT_PRICE_APPRECIATION,
};
