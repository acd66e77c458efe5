//! Retirement planning records

use serde::{Deserialize, Serialize};

use crate::config::RetirementPolicy;
use crate::error::{ProjectionError, Result};

/// A saver's current position and retirement goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementInputs {
    pub current_age: u32,
    pub retirement_age: u32,
    pub current_savings: f64,
    pub monthly_contribution: f64,

    /// Expected annual return before retirement (decimal)
    pub expected_return: f64,

    /// Income to draw each month in retirement
    pub desired_monthly_income: f64,
}

impl RetirementInputs {
    pub fn years_to_retirement(&self) -> u32 {
        self.retirement_age.saturating_sub(self.current_age)
    }

    /// Years the income must last, under `policy`'s life expectancy
    pub fn retirement_years(&self, policy: &RetirementPolicy) -> u32 {
        policy.life_expectancy.saturating_sub(self.retirement_age)
    }

    pub(crate) fn validate(&self, policy: &RetirementPolicy) -> Result<()> {
        if self.retirement_age <= self.current_age {
            return Err(ProjectionError::invalid(
                "retirement_age",
                format!(
                    "must be greater than current_age ({} <= {})",
                    self.retirement_age, self.current_age
                ),
            ));
        }
        if self.retirement_age > policy.life_expectancy {
            return Err(ProjectionError::invalid(
                "retirement_age",
                format!(
                    "exceeds life expectancy ({} > {})",
                    self.retirement_age, policy.life_expectancy
                ),
            ));
        }
        if !(self.current_savings >= 0.0) {
            return Err(ProjectionError::invalid("current_savings", "must be non-negative"));
        }
        if !(self.monthly_contribution >= 0.0) {
            return Err(ProjectionError::invalid("monthly_contribution", "must be non-negative"));
        }
        if !(self.desired_monthly_income >= 0.0) {
            return Err(ProjectionError::invalid("desired_monthly_income", "must be non-negative"));
        }
        Ok(())
    }
}

/// Projected savings against the capital the desired income requires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementPlan {
    pub current_age: u32,
    pub retirement_age: u32,
    pub years_to_retirement: u32,
    pub retirement_years: u32,
    pub current_savings: f64,
    pub monthly_contribution: f64,
    pub desired_monthly_income: f64,

    /// Savings at retirement if the current contribution continues
    pub projected_savings: f64,

    /// Present value of the desired income over the retirement years
    pub required_capital: f64,

    /// Annual rate used to discount retirement income (decimal)
    pub post_retirement_return: f64,

    /// required_capital - projected_savings, floored at 0
    pub shortfall: f64,

    /// Monthly contribution that reaches required_capital; the current
    /// contribution when there is no shortfall
    pub required_monthly_contribution: f64,
}

impl RetirementPlan {
    pub fn on_track(&self) -> bool {
        self.shortfall == 0.0
    }
}
