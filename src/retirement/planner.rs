//! Retirement adequacy analysis
//!
//! Composes the growth formulas and the contribution solver:
//! 1. project savings to the retirement age
//! 2. price the desired income as an annuity at the post-retirement rate
//! 3. compare, and solve for the contribution that closes any gap

use log::debug;

use super::types::{RetirementInputs, RetirementPlan};
use crate::config::RetirementPolicy;
use crate::error::Result;
use crate::formulas::{
    annuity_future_value, compound_growth, required_capital, required_monthly_contribution,
};
use crate::rates::{months, period_rate};

/// Build a retirement plan for `inputs` under `policy`
pub fn plan_retirement(inputs: &RetirementInputs, policy: &RetirementPolicy) -> Result<RetirementPlan> {
    inputs.validate(policy)?;

    let years_to_retirement = inputs.years_to_retirement();
    let retirement_years = inputs.retirement_years(policy);

    let rate = period_rate(inputs.expected_return, 12);
    let n = months(years_to_retirement);
    let projected_savings = compound_growth(inputs.current_savings, rate, n)
        + annuity_future_value(inputs.monthly_contribution, rate, n);

    let post_retirement_return = policy.post_retirement_return(inputs.expected_return);
    let capital = required_capital(
        inputs.desired_monthly_income,
        retirement_years,
        post_retirement_return,
    );

    // Solve against the signed gap; only the reported shortfall is clamped
    let gap = capital - projected_savings;
    let required_monthly = if gap > 0.0 {
        required_monthly_contribution(
            inputs.current_savings,
            capital,
            inputs.expected_return,
            years_to_retirement,
        )
    } else {
        inputs.monthly_contribution
    };

    debug!(
        "Retirement plan: {} years to retirement, projected {:.2}, required {:.2}, gap {:.2}",
        years_to_retirement, projected_savings, capital, gap
    );

    Ok(RetirementPlan {
        current_age: inputs.current_age,
        retirement_age: inputs.retirement_age,
        years_to_retirement,
        retirement_years,
        current_savings: inputs.current_savings,
        monthly_contribution: inputs.monthly_contribution,
        desired_monthly_income: inputs.desired_monthly_income,
        projected_savings,
        required_capital: capital,
        post_retirement_return,
        shortfall: gap.max(0.0),
        required_monthly_contribution: required_monthly,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;

    fn inputs() -> RetirementInputs {
        RetirementInputs {
            current_age: 30,
            retirement_age: 60,
            current_savings: 500_000.0,
            monthly_contribution: 15_000.0,
            expected_return: 0.10,
            desired_monthly_income: 50_000.0,
        }
    }

    #[test]
    fn test_derived_durations() {
        let plan = plan_retirement(&inputs(), &RetirementPolicy::default()).unwrap();
        assert_eq!(plan.years_to_retirement, 30);
        assert_eq!(plan.retirement_years, 25);
        assert!((plan.post_retirement_return - 0.07).abs() < 1e-12);
    }

    #[test]
    fn test_on_track_keeps_contribution() {
        let plan = plan_retirement(&inputs(), &RetirementPolicy::default()).unwrap();
        // 500k + 15k/month for 30 years at 10% is far beyond 50k/month for 25 years
        assert!(plan.projected_savings > plan.required_capital);
        assert_eq!(plan.shortfall, 0.0);
        assert_eq!(plan.required_monthly_contribution, 15_000.0);
        assert!(plan.on_track());
    }

    #[test]
    fn test_shortfall_solves_contribution() {
        let mut short = inputs();
        short.monthly_contribution = 1_000.0;
        short.desired_monthly_income = 200_000.0;

        let plan = plan_retirement(&short, &RetirementPolicy::default()).unwrap();
        assert!(plan.shortfall > 0.0);
        assert!((plan.shortfall - (plan.required_capital - plan.projected_savings)).abs() < 1e-6);
        assert!(plan.required_monthly_contribution > short.monthly_contribution);

        // Contributing the solved amount lands exactly on the required capital
        let r = period_rate(short.expected_return, 12);
        let reached = compound_growth(short.current_savings, r, 360)
            + annuity_future_value(plan.required_monthly_contribution, r, 360);
        assert!((reached / plan.required_capital - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_retirement_at_life_expectancy_needs_no_capital() {
        let mut late = inputs();
        late.retirement_age = 85;
        let plan = plan_retirement(&late, &RetirementPolicy::default()).unwrap();
        assert_eq!(plan.retirement_years, 0);
        assert_eq!(plan.required_capital, 0.0);
        assert_eq!(plan.shortfall, 0.0);
    }

    #[test]
    fn test_rejects_bad_ages() {
        let policy = RetirementPolicy::default();

        let mut same = inputs();
        same.retirement_age = same.current_age;
        assert!(matches!(
            plan_retirement(&same, &policy),
            Err(ProjectionError::InvalidInput { field: "retirement_age", .. })
        ));

        let mut past = inputs();
        past.retirement_age = 90;
        assert!(plan_retirement(&past, &policy).is_err());
    }

    #[test]
    fn test_rejects_negative_amounts() {
        let policy = RetirementPolicy::default();

        let mut savings = inputs();
        savings.current_savings = -1.0;
        assert!(matches!(
            plan_retirement(&savings, &policy),
            Err(ProjectionError::InvalidInput { field: "current_savings", .. })
        ));

        let mut contribution = inputs();
        contribution.monthly_contribution = -100.0;
        assert!(matches!(
            plan_retirement(&contribution, &policy),
            Err(ProjectionError::InvalidInput { field: "monthly_contribution", .. })
        ));

        let mut income = inputs();
        income.desired_monthly_income = -5_000.0;
        assert!(matches!(
            plan_retirement(&income, &policy),
            Err(ProjectionError::InvalidInput { field: "desired_monthly_income", .. })
        ));
    }

    #[test]
    fn test_rejects_nan_amounts() {
        let policy = RetirementPolicy::default();

        let mut savings = inputs();
        savings.current_savings = f64::NAN;
        assert!(matches!(
            plan_retirement(&savings, &policy),
            Err(ProjectionError::InvalidInput { field: "current_savings", .. })
        ));

        let mut income = inputs();
        income.desired_monthly_income = f64::NAN;
        assert!(matches!(
            plan_retirement(&income, &policy),
            Err(ProjectionError::InvalidInput { field: "desired_monthly_income", .. })
        ));
    }

    #[test]
    fn test_policy_life_expectancy_is_honored() {
        let policy = RetirementPolicy {
            life_expectancy: 95,
            ..RetirementPolicy::default()
        };
        let plan = plan_retirement(&inputs(), &policy).unwrap();
        assert_eq!(plan.retirement_years, 35);
    }
}
