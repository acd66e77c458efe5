//! Growth Projections CLI
//!
//! Command-line front end for the projection engine. Prints a plain-text
//! report by default or the raw result as JSON with `--json`.

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use log::info;
use serde::Serialize;
use std::path::{Path, PathBuf};

use growth_projections::price_path::load_price_changes;
use growth_projections::{
    DcaParameters, DividendParameters, EngineConfig, LoanParameters, ProjectionEngine,
    ProjectionParameters, RetirementInputs, RetirementPolicy, ScenarioRunner,
};

#[derive(Parser)]
#[command(name = "growth-projections", version, about = "Deterministic investment projections")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON instead of a text report
    #[arg(long, global = true)]
    json: bool,

    /// Annual inflation rate used for real values (decimal)
    #[arg(long, global = true, default_value_t = growth_projections::config::DEFAULT_INFLATION_RATE)]
    inflation: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Compound growth with monthly contributions
    Project(ProjectArgs),
    /// Level payment for a fixed-rate loan
    Loan(LoanArgs),
    /// Retirement savings adequacy
    Retire(RetireArgs),
    /// Dividend reinvestment simulation
    Dividends(DividendArgs),
    /// Dollar-cost averaging simulation
    Dca(DcaArgs),
    /// Future value across a range of annual rates
    Sweep(SweepArgs),
}

#[derive(Args)]
struct ProjectArgs {
    #[arg(long)]
    principal: f64,
    /// Annual rate (decimal, 0.12 = 12%)
    #[arg(long)]
    rate: f64,
    #[arg(long)]
    years: u32,
    #[arg(long, default_value_t = 0.0)]
    contribution: f64,
    #[arg(long, default_value_t = 12)]
    compounds_per_year: u32,
}

#[derive(Args)]
struct LoanArgs {
    #[arg(long)]
    amount: f64,
    #[arg(long)]
    rate: f64,
    #[arg(long)]
    years: u32,
    #[arg(long, default_value_t = 12)]
    payments_per_year: u32,
    /// Write the full amortization schedule to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Args)]
struct RetireArgs {
    #[arg(long)]
    current_age: u32,
    #[arg(long)]
    retirement_age: u32,
    #[arg(long)]
    savings: f64,
    #[arg(long)]
    contribution: f64,
    /// Expected annual return before retirement (decimal)
    #[arg(long)]
    expected_return: f64,
    #[arg(long)]
    monthly_income: f64,
    #[arg(long, default_value_t = growth_projections::config::DEFAULT_LIFE_EXPECTANCY)]
    life_expectancy: u32,
    /// Fraction of the expected return earned after retirement
    #[arg(long, default_value_t = growth_projections::config::DEFAULT_POST_RETIREMENT_RETURN_FACTOR)]
    post_retirement_factor: f64,
}

#[derive(Args)]
struct DividendArgs {
    #[arg(long)]
    initial: f64,
    /// Annual dividend yield (decimal)
    #[arg(long)]
    dividend_yield: f64,
    #[arg(long)]
    years: u32,
    #[arg(long, default_value_t = growth_projections::simulation::DEFAULT_PRICE_APPRECIATION)]
    appreciation: f64,
    /// Write the yearly breakdown to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Args)]
struct DcaArgs {
    #[arg(long)]
    monthly: f64,
    #[arg(long)]
    years: u32,
    /// Monthly price changes in percent, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, conflicts_with = "price_path")]
    changes: Vec<f64>,
    /// CSV file with a change_pct column
    #[arg(long)]
    price_path: Option<PathBuf>,
    /// Write the monthly breakdown to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Args)]
struct SweepArgs {
    #[arg(long)]
    principal: f64,
    #[arg(long)]
    years: u32,
    #[arg(long, default_value_t = 0.0)]
    contribution: f64,
    /// Annual rates to evaluate (decimal), comma separated
    #[arg(long, value_delimiter = ',', required = true)]
    rates: Vec<f64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = EngineConfig::with_inflation(cli.inflation);

    match cli.command {
        Commands::Project(args) => {
            let engine = ProjectionEngine::new(config, RetirementPolicy::default());
            let params = ProjectionParameters::new(args.principal, args.rate, args.years)
                .with_contribution(args.contribution)
                .with_compounds_per_year(args.compounds_per_year);
            let summary = engine.investment_summary(&params)?;

            if cli.json {
                return print_json(&summary);
            }

            let r = &summary.result;
            print_rule();
            println!("INVESTMENT PROJECTION");
            print_rule();
            println!("Initial amount:        {:>16.2}", params.principal);
            println!("Contribution/period:   {:>16.2}", params.periodic_contribution);
            println!("Annual return:         {:>15.2}%", r.annual_rate_pct);
            println!("Horizon:               {:>10} years", r.years);
            println!();
            println!("Future value:          {:>16.2}", r.future_value);
            println!("Total invested:        {:>16.2}", r.total_invested);
            println!("Interest earned:       {:>16.2}", r.total_interest);
            println!("Return:                {:>15.2}%", r.return_percentage);
            println!();
            println!(
                "Real value ({:.1}% inflation): {:>9.2}",
                summary.inflation_rate * 100.0,
                r.real_value
            );
            if summary.doubling_time_years.is_finite() {
                println!("Doubling time (rule of 72): {:.1} years", summary.doubling_time_years);
            } else {
                println!("Doubling time (rule of 72): never");
            }
            print_rule();
        }

        Commands::Loan(args) => {
            let engine = ProjectionEngine::new(config, RetirementPolicy::default());
            let loan = LoanParameters::new(args.amount, args.rate, args.years)
                .with_payments_per_year(args.payments_per_year);
            let result = engine.amortize(&loan)?;

            if let Some(path) = &args.csv {
                write_csv(path, &engine.amortization_schedule(&loan)?)?;
            }
            if cli.json {
                return print_json(&result);
            }

            println!("Loan amount:     {:>14.2}", result.loan_amount);
            println!("Payment:         {:>14.2}", result.periodic_payment);
            println!("Total paid:      {:>14.2}", result.total_paid);
            println!("Total interest:  {:>14.2}", result.total_interest);
            println!("Interest share:  {:>13.2}%", result.interest_percentage);
        }

        Commands::Retire(args) => {
            let policy = RetirementPolicy {
                life_expectancy: args.life_expectancy,
                post_retirement_return_factor: args.post_retirement_factor,
            };
            let engine = ProjectionEngine::new(config, policy);
            let plan = engine.plan_retirement(&RetirementInputs {
                current_age: args.current_age,
                retirement_age: args.retirement_age,
                current_savings: args.savings,
                monthly_contribution: args.contribution,
                expected_return: args.expected_return,
                desired_monthly_income: args.monthly_income,
            })?;

            if cli.json {
                return print_json(&plan);
            }

            println!(
                "Years to retirement: {} (funding {} years of income)",
                plan.years_to_retirement, plan.retirement_years
            );
            println!("Projected savings:   {:>16.2}", plan.projected_savings);
            println!("Required capital:    {:>16.2}", plan.required_capital);
            println!("Shortfall:           {:>16.2}", plan.shortfall);
            println!("Monthly needed:      {:>16.2}", plan.required_monthly_contribution);
        }

        Commands::Dividends(args) => {
            let engine = ProjectionEngine::new(config, RetirementPolicy::default());
            let params = DividendParameters::new(args.initial, args.dividend_yield, args.years)
                .with_price_appreciation(args.appreciation);
            let result = engine.dividend_reinvestment(&params)?;

            if let Some(path) = &args.csv {
                write_csv(path, &result.yearly_breakdown)?;
            }
            if cli.json {
                return print_json(&result);
            }

            println!("{:>5} {:>16} {:>14} {:>16}", "Year", "Value", "Dividends", "Cum. dividends");
            for step in &result.yearly_breakdown {
                println!(
                    "{:>5} {:>16.2} {:>14.2} {:>16.2}",
                    step.year, step.value, step.dividends, step.total_dividends
                );
            }
            println!();
            println!("Final value:   {:>16.2}", result.final_value);
            println!("Total return:  {:>16.2} ({:.2}%)", result.total_return, result.return_percentage);
            println!("CAGR:          {:>15.2}%", result.cagr);
        }

        Commands::Dca(args) => {
            let engine = ProjectionEngine::new(config, RetirementPolicy::default());
            let changes = match &args.price_path {
                Some(path) => load_price_changes(path)
                    .with_context(|| format!("loading price path {}", path.display()))?,
                None => args.changes.clone(),
            };
            let result =
                engine.dollar_cost_averaging(&DcaParameters::new(args.monthly, args.years, changes))?;

            if let Some(path) = &args.csv {
                write_csv(path, &result.monthly_breakdown)?;
            }
            if cli.json {
                return print_json(&result);
            }

            println!("Total invested:  {:>14.2}", result.total_invested);
            println!("Final value:     {:>14.2}", result.final_value);
            println!("Shares held:     {:>14.4}", result.total_shares);
            println!("Average price:   {:>14.4}", result.average_price);
            println!("Total return:    {:>14.2} ({:.2}%)", result.total_return, result.return_percentage);
        }

        Commands::Sweep(args) => {
            if args.rates.is_empty() {
                bail!("at least one rate is required");
            }
            let runner = ScenarioRunner::with_config(config, RetirementPolicy::default());
            let base = ProjectionParameters::new(args.principal, 0.0, args.years)
                .with_contribution(args.contribution);
            let sweep = runner.rate_sweep(&base, &args.rates)?;

            if cli.json {
                return print_json(&sweep);
            }

            println!("{:>8} {:>16} {:>16} {:>10}", "Rate", "Future value", "Real value", "Return");
            for point in &sweep {
                println!(
                    "{:>7.2}% {:>16.2} {:>16.2} {:>9.2}%",
                    point.annual_rate * 100.0,
                    point.result.future_value,
                    point.result.real_value,
                    point.result.return_percentage
                );
            }
        }
    }

    Ok(())
}

fn print_rule() {
    println!("{}", "=".repeat(60));
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
