//! Retirement-adequacy planning

mod planner;
mod types;

pub use planner::plan_retirement;
pub use types::{RetirementInputs, RetirementPlan};
