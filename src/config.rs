//! Engine configuration and planning policy
//!
//! Both are plain values fixed at construction. Nothing here is mutated while
//! a computation runs.

use serde::{Deserialize, Serialize};

/// Default annual inflation used for real-value adjustment
pub const DEFAULT_INFLATION_RATE: f64 = 0.04;

/// Starting share price for dollar-cost-averaging simulations
pub const DEFAULT_DCA_REFERENCE_PRICE: f64 = 100.0;

/// Age the retirement income stream is funded to
pub const DEFAULT_LIFE_EXPECTANCY: u32 = 85;

/// Fraction of the pre-retirement return assumed after retirement
pub const DEFAULT_POST_RETIREMENT_RETURN_FACTOR: f64 = 0.7;

/// Configuration held by a [`crate::ProjectionEngine`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Annual inflation rate (decimal) used to deflate future values
    pub inflation_rate: f64,

    /// Price the DCA price path starts from
    pub dca_reference_price: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            inflation_rate: DEFAULT_INFLATION_RATE,
            dca_reference_price: DEFAULT_DCA_REFERENCE_PRICE,
        }
    }
}

impl EngineConfig {
    /// Default config with a different inflation assumption
    pub fn with_inflation(inflation_rate: f64) -> Self {
        Self {
            inflation_rate,
            ..Self::default()
        }
    }
}

/// Policy constants for retirement-adequacy analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementPolicy {
    /// Age until which the desired income must be funded
    pub life_expectancy: u32,

    /// Multiplier on the expected return for the post-retirement discount rate
    /// (0.7 = 70% of the accumulation-phase return)
    pub post_retirement_return_factor: f64,
}

impl Default for RetirementPolicy {
    fn default() -> Self {
        Self {
            life_expectancy: DEFAULT_LIFE_EXPECTANCY,
            post_retirement_return_factor: DEFAULT_POST_RETIREMENT_RETURN_FACTOR,
        }
    }
}

impl RetirementPolicy {
    /// Discount rate applied during retirement
    pub fn post_retirement_return(&self, expected_return: f64) -> f64 {
        expected_return * self.post_retirement_return_factor
    }
}
