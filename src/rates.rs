//! Per-period rate conversion
//!
//! `periods_per_year` must be non-zero; callers validate it before getting here.
//! Period counts are `u64`: the product of two `u32`s always fits, so no
//! combination of years and frequency can overflow.

use crate::error::{ProjectionError, Result};

/// Most rows a single call may produce in a per-period breakdown
pub const MAX_BREAKDOWN_ROWS: u64 = 12_000_000;

/// Nominal annual rate split evenly across periods
pub fn period_rate(annual_rate: f64, periods_per_year: u32) -> f64 {
    annual_rate / periods_per_year as f64
}

/// Number of compounding periods over a whole number of years
pub fn total_periods(years: u32, periods_per_year: u32) -> u64 {
    u64::from(years) * u64::from(periods_per_year)
}

/// Months in `years` (all retirement and DCA math is monthly)
pub fn months(years: u32) -> u64 {
    total_periods(years, 12)
}

/// Checked row count for a step-by-step breakdown of `periods` periods
pub(crate) fn breakdown_rows(field: &'static str, periods: u64) -> Result<u32> {
    if periods > MAX_BREAKDOWN_ROWS {
        return Err(ProjectionError::invalid(
            field,
            format!(
                "{} periods exceeds the {} row breakdown limit",
                periods, MAX_BREAKDOWN_ROWS
            ),
        ));
    }
    u32::try_from(periods).map_err(|_| ProjectionError::invalid(field, "period count out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_rate() {
        assert!((period_rate(0.12, 12) - 0.01).abs() < 1e-15);
        assert_eq!(period_rate(0.0, 4), 0.0);
    }

    #[test]
    fn test_total_periods() {
        assert_eq!(total_periods(10, 12), 120);
        assert_eq!(total_periods(0, 12), 0);
        assert_eq!(months(30), 360);
    }

    #[test]
    fn test_total_periods_beyond_u32() {
        // Per-second compounding for 140 years
        assert_eq!(total_periods(140, 31_536_000), 4_415_040_000);
        assert_eq!(
            total_periods(u32::MAX, u32::MAX),
            u64::from(u32::MAX) * u64::from(u32::MAX)
        );
        assert_eq!(months(u32::MAX), u64::from(u32::MAX) * 12);
    }

    #[test]
    fn test_breakdown_rows_bound() {
        assert_eq!(breakdown_rows("years", 360).unwrap(), 360);
        assert!(matches!(
            breakdown_rows("years", MAX_BREAKDOWN_ROWS + 1),
            Err(ProjectionError::InvalidInput { field: "years", .. })
        ));
    }
}
