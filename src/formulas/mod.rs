//! Closed-form growth formulas and the solvers built on them

pub mod growth;
pub mod solver;

pub use growth::{
    annuity_future_value, annuity_payment, cagr, compound_growth, doubling_time,
    present_value_of_annuity,
};
pub use solver::{required_capital, required_monthly_contribution};
