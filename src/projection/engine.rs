//! Projection engine: the single entry point for every calculation
//!
//! The engine holds only immutable configuration, so one instance can serve
//! any number of concurrent callers.

use log::{debug, warn};

use super::loan::{self as amortization, AmortizationResult, AmortizationRow, LoanParameters};
use super::types::{InvestmentSummary, ProjectionParameters, ProjectionResult};
use crate::config::{EngineConfig, RetirementPolicy};
use crate::error::Result;
use crate::formulas::{annuity_future_value, compound_growth, doubling_time};
use crate::rates::{period_rate, total_periods};
use crate::retirement::{self, RetirementInputs, RetirementPlan};
use crate::simulation::{
    self, DcaParameters, DcaResult, DividendParameters, DividendResult,
};

/// Main projection engine
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionEngine {
    config: EngineConfig,
    policy: RetirementPolicy,
}

impl ProjectionEngine {
    /// Create an engine with the given configuration and retirement policy
    pub fn new(config: EngineConfig, policy: RetirementPolicy) -> Self {
        Self { config, policy }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn policy(&self) -> &RetirementPolicy {
        &self.policy
    }

    /// Inflation rate used for every real-value adjustment
    pub fn inflation_rate(&self) -> f64 {
        self.config.inflation_rate
    }

    /// Compound a principal plus periodic contributions
    ///
    /// FV = P(1 + r/n)^(nt) + C((1 + r/n)^(nt) - 1) / (r/n)
    pub fn compound_interest(&self, params: &ProjectionParameters) -> Result<ProjectionResult> {
        params.validate()?;

        let rate = period_rate(params.annual_rate, params.compounds_per_year);
        let n = total_periods(params.years, params.compounds_per_year);

        let future_value = compound_growth(params.principal, rate, n)
            + annuity_future_value(params.periodic_contribution, rate, n);
        let total_invested = params.principal + params.periodic_contribution * n as f64;
        let total_interest = future_value - total_invested;

        let real_value =
            future_value / (1.0 + self.config.inflation_rate).powf(params.years as f64);

        let return_percentage = if total_invested > 0.0 {
            total_interest / total_invested * 100.0
        } else {
            warn!("Projection with nothing invested; reporting 0% return");
            0.0
        };

        debug!(
            "Projection: {} periods at {:.6}/period, FV {:.2}, invested {:.2}",
            n, rate, future_value, total_invested
        );

        Ok(ProjectionResult {
            future_value,
            total_invested,
            total_interest,
            real_value,
            return_percentage,
            annual_rate_pct: params.annual_rate * 100.0,
            years: params.years,
        })
    }

    /// Projection bundled with the doubling time and inflation rate a report needs
    pub fn investment_summary(&self, params: &ProjectionParameters) -> Result<InvestmentSummary> {
        let result = self.compound_interest(params)?;
        Ok(InvestmentSummary {
            parameters: *params,
            result,
            doubling_time_years: doubling_time(params.annual_rate),
            inflation_rate: self.config.inflation_rate,
        })
    }

    /// Level payment and totals for a fixed-rate loan
    pub fn amortize(&self, loan: &LoanParameters) -> Result<AmortizationResult> {
        loan.validate()?;
        debug!(
            "Amortizing {:.2} at {:.4} over {} years",
            loan.loan_amount, loan.annual_rate, loan.years
        );
        Ok(amortization::amortize(loan))
    }

    /// Payment-by-payment amortization schedule
    pub fn amortization_schedule(&self, loan: &LoanParameters) -> Result<Vec<AmortizationRow>> {
        loan.validate()?;
        amortization::schedule(loan)
    }

    /// Retirement adequacy under the engine's retirement policy
    pub fn plan_retirement(&self, inputs: &RetirementInputs) -> Result<RetirementPlan> {
        retirement::plan_retirement(inputs, &self.policy)
    }

    /// Reinvest dividends year by year
    pub fn dividend_reinvestment(&self, params: &DividendParameters) -> Result<DividendResult> {
        simulation::simulate_dividends(params)
    }

    /// Buy a fixed amount monthly along the supplied price path
    pub fn dollar_cost_averaging(&self, params: &DcaParameters) -> Result<DcaResult> {
        simulation::simulate_dca(params, self.config.dca_reference_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn engine() -> ProjectionEngine {
        ProjectionEngine::default()
    }

    #[test]
    fn test_reference_projection() {
        let params = ProjectionParameters::new(100_000.0, 0.12, 10).with_contribution(5_000.0);
        let result = engine().compound_interest(&params).unwrap();

        assert_eq!(result.total_invested, 700_000.0);
        let growth = 1.01_f64.powi(120);
        let expected = 100_000.0 * growth + 5_000.0 * (growth - 1.0) / 0.01;
        assert_relative_eq!(result.future_value, expected, max_relative = 1e-9);
        assert!((result.future_value - 1_480_232.14).abs() < 0.01, "got {}", result.future_value);
        assert_relative_eq!(result.total_interest, result.future_value - 700_000.0);
        assert_eq!(result.annual_rate_pct, 12.0);
        assert_eq!(result.years, 10);
    }

    #[test]
    fn test_real_value_uses_configured_inflation() {
        let params = ProjectionParameters::new(10_000.0, 0.05, 5);
        let default = engine().compound_interest(&params).unwrap();
        assert_relative_eq!(
            default.real_value,
            default.future_value / 1.04_f64.powi(5),
            max_relative = 1e-12
        );

        let no_inflation =
            ProjectionEngine::new(EngineConfig::with_inflation(0.0), RetirementPolicy::default());
        let result = no_inflation.compound_interest(&params).unwrap();
        assert_eq!(result.real_value, result.future_value);
    }

    #[test]
    fn test_zero_rate_projection() {
        let params = ProjectionParameters::new(1_000.0, 0.0, 3).with_contribution(100.0);
        let result = engine().compound_interest(&params).unwrap();
        assert_eq!(result.future_value, 1_000.0 + 100.0 * 36.0);
        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.return_percentage, 0.0);
    }

    #[test]
    fn test_nothing_invested() {
        let result = engine()
            .compound_interest(&ProjectionParameters::new(0.0, 0.08, 10))
            .unwrap();
        assert_eq!(result.total_invested, 0.0);
        assert_eq!(result.future_value, 0.0);
        assert_eq!(result.return_percentage, 0.0);
    }

    #[test]
    fn test_negative_rate_loses_money() {
        let params = ProjectionParameters::new(10_000.0, -0.02, 5).with_contribution(100.0);
        let result = engine().compound_interest(&params).unwrap();
        assert!(result.total_interest < 0.0);
        assert!(result.return_percentage < 0.0);
    }

    #[test]
    fn test_investment_summary() {
        let params = ProjectionParameters::new(100_000.0, 0.12, 10).with_contribution(5_000.0);
        let summary = engine().investment_summary(&params).unwrap();
        assert!((summary.doubling_time_years - 6.0).abs() < 1e-12);
        assert_eq!(summary.inflation_rate, 0.04);
        assert_eq!(summary.parameters, params);

        let flat = engine()
            .investment_summary(&ProjectionParameters::new(1.0, 0.0, 1))
            .unwrap();
        assert!(flat.doubling_time_years.is_infinite());
    }

    #[test]
    fn test_amortize_rejects_invalid_loan() {
        assert!(engine().amortize(&LoanParameters::new(100_000.0, 0.05, 0)).is_err());
        assert!(engine()
            .amortization_schedule(&LoanParameters::new(-5.0, 0.05, 10))
            .is_err());
    }

    #[test]
    fn test_per_second_compounding() {
        let params = ProjectionParameters::new(1_000.0, 0.05, 70).with_compounds_per_year(31_536_000);
        let result = engine().compound_interest(&params).unwrap();
        assert_relative_eq!(result.future_value, 1_000.0 * 3.5_f64.exp(), max_relative = 1e-4);
        assert!(result.future_value > 33_000.0, "got {}", result.future_value);

        // 140 years of seconds no longer fits in a u32 period count
        let params = ProjectionParameters::new(1_000.0, 0.05, 140).with_compounds_per_year(31_536_000);
        let result = engine().compound_interest(&params).unwrap();
        assert!(result.future_value.is_finite());
        assert_relative_eq!(result.future_value, 1_000.0 * 7.0_f64.exp(), max_relative = 1e-4);
    }

    #[test]
    fn test_schedule_rejects_oversized_breakdown() {
        let loan = LoanParameters::new(100_000.0, 0.05, 140).with_payments_per_year(31_536_000);
        assert!(engine().amortize(&loan).is_ok());
        assert!(matches!(
            engine().amortization_schedule(&loan),
            Err(crate::ProjectionError::InvalidInput { field: "years", .. })
        ));
    }

    #[test]
    fn test_dca_uses_configured_reference_price() {
        let config = EngineConfig {
            dca_reference_price: 50.0,
            ..EngineConfig::default()
        };
        let engine = ProjectionEngine::new(config, RetirementPolicy::default());
        let result = engine
            .dollar_cost_averaging(&DcaParameters::new(100.0, 1, vec![]))
            .unwrap();
        assert!((result.total_shares - 24.0).abs() < 1e-9);
    }
}
