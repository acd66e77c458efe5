//! Level-payment loan amortization

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};
use crate::formulas::annuity_payment;
use crate::rates::{breakdown_rows, period_rate, total_periods};

/// Fixed-rate loan repaid in equal installments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    pub loan_amount: f64,

    /// Nominal annual rate (decimal)
    pub annual_rate: f64,

    pub years: u32,
    pub payments_per_year: u32,
}

impl LoanParameters {
    /// Monthly payments
    pub fn new(loan_amount: f64, annual_rate: f64, years: u32) -> Self {
        Self {
            loan_amount,
            annual_rate,
            years,
            payments_per_year: 12,
        }
    }

    pub fn with_payments_per_year(mut self, payments_per_year: u32) -> Self {
        self.payments_per_year = payments_per_year;
        self
    }

    pub fn period_rate(&self) -> f64 {
        period_rate(self.annual_rate, self.payments_per_year)
    }

    pub fn total_periods(&self) -> u64 {
        total_periods(self.years, self.payments_per_year)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !(self.loan_amount > 0.0) {
            return Err(ProjectionError::invalid(
                "loan_amount",
                format!("must be positive, got {}", self.loan_amount),
            ));
        }
        if !(self.annual_rate >= 0.0) {
            return Err(ProjectionError::invalid(
                "annual_rate",
                format!("must be non-negative, got {}", self.annual_rate),
            ));
        }
        if self.years == 0 {
            return Err(ProjectionError::invalid("years", "must be at least 1"));
        }
        if self.payments_per_year == 0 {
            return Err(ProjectionError::invalid("payments_per_year", "must be at least 1"));
        }
        Ok(())
    }
}

/// Totals for a level-payment loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationResult {
    pub periodic_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,

    /// total_interest as a percentage of the amount borrowed
    pub interest_percentage: f64,

    pub loan_amount: f64,
    pub years: u32,
}

/// One installment of an amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-indexed payment number
    pub period: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,

    /// Outstanding balance after this payment
    pub balance: f64,
}

/// Payment and totals for `loan`; the caller has validated it
pub(crate) fn amortize(loan: &LoanParameters) -> AmortizationResult {
    let n = loan.total_periods();
    let payment = annuity_payment(loan.loan_amount, loan.period_rate(), n);

    let total_paid = payment * n as f64;
    let total_interest = total_paid - loan.loan_amount;

    AmortizationResult {
        periodic_payment: payment,
        total_paid,
        total_interest,
        interest_percentage: total_interest / loan.loan_amount * 100.0,
        loan_amount: loan.loan_amount,
        years: loan.years,
    }
}

/// Payment-by-payment split of interest and principal
///
/// Fails when the loan has more payments than a breakdown may hold.
pub(crate) fn schedule(loan: &LoanParameters) -> Result<Vec<AmortizationRow>> {
    let n = breakdown_rows("years", loan.total_periods())?;
    let rate = loan.period_rate();
    let payment = annuity_payment(loan.loan_amount, rate, u64::from(n));

    let mut balance = loan.loan_amount;
    let mut rows = Vec::with_capacity(n as usize);

    for period in 1..=n {
        let interest = balance * rate;
        let principal = payment - interest;
        balance -= principal;

        // Clear rounding residue on the final payment
        if period == n {
            balance = 0.0;
        }

        rows.push(AmortizationRow {
            period,
            payment,
            interest,
            principal,
            balance,
        });
    }

    Ok(rows)
}
