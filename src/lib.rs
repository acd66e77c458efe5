//! Growth Projections - deterministic long-horizon financial projection engine
//!
//! This library provides:
//! - Compound growth with periodic contributions, inflation-adjusted
//! - Loan amortization payments and schedules
//! - Retirement adequacy: projected savings vs. required capital, and the
//!   contribution that closes any shortfall
//! - Dividend-reinvestment and dollar-cost-averaging simulations with a
//!   per-period breakdown
//! - Batch and rate-sweep runs across threads

pub mod config;
pub mod error;
pub mod formulas;
pub mod price_path;
pub mod projection;
pub mod rates;
pub mod retirement;
pub mod scenario;
pub mod simulation;

// Re-export commonly used types
pub use config::{EngineConfig, RetirementPolicy};
pub use error::{ProjectionError, Result};
pub use projection::{
    AmortizationResult, AmortizationRow, InvestmentSummary, LoanParameters, ProjectionEngine,
    ProjectionParameters, ProjectionResult,
};
pub use retirement::{RetirementInputs, RetirementPlan};
pub use scenario::ScenarioRunner;
pub use simulation::{
    DcaParameters, DcaResult, DcaStep, DividendParameters, DividendResult, DividendStep,
};
