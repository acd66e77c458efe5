//! Growth projections and loan amortization

mod engine;
mod loan;
mod types;

pub use engine::ProjectionEngine;
pub use loan::{AmortizationResult, AmortizationRow, LoanParameters};
pub use types::{
    InvestmentSummary, ProjectionParameters, ProjectionResult, DEFAULT_COMPOUNDS_PER_YEAR,
};
