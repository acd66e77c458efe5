//! Scenario runner for batch projections
//!
//! Runs many independent calculations against one engine in parallel. Every
//! engine call is a pure function of its inputs, so the work splits freely
//! across threads; results come back in input order.

use rayon::prelude::*;
use serde::Serialize;

use crate::config::{EngineConfig, RetirementPolicy};
use crate::error::Result;
use crate::projection::{ProjectionEngine, ProjectionParameters, ProjectionResult};
use crate::retirement::{RetirementInputs, RetirementPlan};

/// One point of a rate sweep
#[derive(Debug, Clone, Serialize)]
pub struct SweepPoint<T> {
    pub annual_rate: f64,
    pub result: T,
}

/// Batch runner over a shared engine
///
/// # Example
/// ```
/// use growth_projections::{ProjectionParameters, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let base = ProjectionParameters::new(10_000.0, 0.05, 20).with_contribution(200.0);
/// let sweep = runner.rate_sweep(&base, &[0.03, 0.05, 0.07]).unwrap();
/// assert!(sweep[2].result.future_value > sweep[0].result.future_value);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Runner over a default-configured engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner with explicit configuration
    pub fn with_config(config: EngineConfig, policy: RetirementPolicy) -> Self {
        Self {
            engine: ProjectionEngine::new(config, policy),
        }
    }

    pub fn with_engine(engine: ProjectionEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }

    /// Project every parameter set; fails on the first invalid one
    pub fn run_batch(&self, params: &[ProjectionParameters]) -> Result<Vec<ProjectionResult>> {
        params
            .par_iter()
            .map(|p| self.engine.compound_interest(p))
            .collect()
    }

    /// Project `base` once per annual rate in `rates`
    pub fn rate_sweep(
        &self,
        base: &ProjectionParameters,
        rates: &[f64],
    ) -> Result<Vec<SweepPoint<ProjectionResult>>> {
        rates
            .par_iter()
            .map(|&annual_rate| {
                let params = ProjectionParameters {
                    annual_rate,
                    ..*base
                };
                let result = self.engine.compound_interest(&params)?;
                Ok(SweepPoint { annual_rate, result })
            })
            .collect()
    }

    /// Plan retirement once per expected return in `returns`
    pub fn retirement_return_sweep(
        &self,
        base: &RetirementInputs,
        returns: &[f64],
    ) -> Result<Vec<SweepPoint<RetirementPlan>>> {
        returns
            .par_iter()
            .map(|&expected_return| {
                let inputs = RetirementInputs {
                    expected_return,
                    ..*base
                };
                let result = self.engine.plan_retirement(&inputs)?;
                Ok(SweepPoint {
                    annual_rate: expected_return,
                    result,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;

    #[test]
    fn test_rate_sweep_is_ordered_and_monotone() {
        let runner = ScenarioRunner::new();
        let base = ProjectionParameters::new(50_000.0, 0.0, 15).with_contribution(300.0);
        let rates: Vec<f64> = (1..=10).map(|i| i as f64 * 0.01).collect();

        let sweep = runner.rate_sweep(&base, &rates).unwrap();
        assert_eq!(sweep.len(), rates.len());
        for (point, &rate) in sweep.iter().zip(&rates) {
            assert_eq!(point.annual_rate, rate);
        }
        for pair in sweep.windows(2) {
            assert!(pair[1].result.future_value > pair[0].result.future_value);
        }
    }

    #[test]
    fn test_batch_matches_serial() {
        let runner = ScenarioRunner::new();
        let batch: Vec<_> = (0..20)
            .map(|i| ProjectionParameters::new(1_000.0 * i as f64, 0.06, i).with_contribution(10.0))
            .collect();

        let parallel = runner.run_batch(&batch).unwrap();
        for (params, result) in batch.iter().zip(&parallel) {
            let serial = runner.engine().compound_interest(params).unwrap();
            assert_eq!(&serial, result);
        }
    }

    #[test]
    fn test_batch_propagates_invalid_input() {
        let runner = ScenarioRunner::new();
        let batch = vec![
            ProjectionParameters::new(1_000.0, 0.05, 5),
            ProjectionParameters::new(1_000.0, 0.05, 5).with_compounds_per_year(0),
        ];
        assert!(matches!(
            runner.run_batch(&batch),
            Err(ProjectionError::InvalidInput { field: "compounds_per_year", .. })
        ));
    }

    #[test]
    fn test_retirement_sweep() {
        let runner = ScenarioRunner::new();
        let base = RetirementInputs {
            current_age: 40,
            retirement_age: 65,
            current_savings: 50_000.0,
            monthly_contribution: 500.0,
            expected_return: 0.0,
            desired_monthly_income: 4_000.0,
        };
        let sweep = runner
            .retirement_return_sweep(&base, &[0.03, 0.06, 0.09])
            .unwrap();
        assert_eq!(sweep.len(), 3);
        assert!(sweep[2].result.projected_savings > sweep[0].result.projected_savings);
        assert!(sweep[2].result.shortfall <= sweep[0].result.shortfall);
    }
}
