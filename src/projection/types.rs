//! Input and output records for growth projections

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};

/// Default compounding frequency (monthly)
pub const DEFAULT_COMPOUNDS_PER_YEAR: u32 = 12;

/// Lump sum plus a level contribution, compounded at a fixed nominal rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParameters {
    /// Initial invested capital
    pub principal: f64,

    /// Nominal annual rate (decimal)
    pub annual_rate: f64,

    pub years: u32,

    /// Compounding periods per year; contributions are made once per period
    pub compounds_per_year: u32,

    /// Deposit added at the end of each period
    pub periodic_contribution: f64,
}

impl ProjectionParameters {
    /// Monthly compounding with no contributions
    pub fn new(principal: f64, annual_rate: f64, years: u32) -> Self {
        Self {
            principal,
            annual_rate,
            years,
            compounds_per_year: DEFAULT_COMPOUNDS_PER_YEAR,
            periodic_contribution: 0.0,
        }
    }

    pub fn with_contribution(mut self, periodic_contribution: f64) -> Self {
        self.periodic_contribution = periodic_contribution;
        self
    }

    pub fn with_compounds_per_year(mut self, compounds_per_year: u32) -> Self {
        self.compounds_per_year = compounds_per_year;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.compounds_per_year == 0 {
            return Err(ProjectionError::invalid(
                "compounds_per_year",
                "must be at least 1",
            ));
        }
        if !(self.principal >= 0.0) {
            return Err(ProjectionError::invalid(
                "principal",
                format!("must be non-negative, got {}", self.principal),
            ));
        }
        if !(self.periodic_contribution >= 0.0) {
            return Err(ProjectionError::invalid(
                "periodic_contribution",
                format!("must be non-negative, got {}", self.periodic_contribution),
            ));
        }
        Ok(())
    }
}

/// Outcome of a growth projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub future_value: f64,

    /// Principal plus every contribution
    pub total_invested: f64,

    /// future_value - total_invested
    pub total_interest: f64,

    /// Future value deflated by the engine's inflation rate
    pub real_value: f64,

    /// total_interest as a percentage of total_invested (0 if nothing invested)
    pub return_percentage: f64,

    /// Echo of the annual rate, in percent
    pub annual_rate_pct: f64,

    pub years: u32,
}

/// A projection together with the figures a report shows alongside it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentSummary {
    pub parameters: ProjectionParameters,
    pub result: ProjectionResult,

    /// Rule-of-72 doubling time in years (infinite at a zero rate)
    pub doubling_time_years: f64,

    /// Inflation rate used for `result.real_value`
    pub inflation_rate: f64,
}
