//! Closed-form future value of a single account
//!
//! The account always compounds monthly. Contributions follow an ordinary
//! annuity (paid at the end of each period):
//!
//! - Monthly contributions use the account's monthly rate over `years * 12`
//!   periods, so they share the principal's compounding basis.
//! - Annual contributions use the nominal annual rate over `years` periods.
//!   This is NOT reconciled with the monthly-compounding principal: an annual
//!   contribution grows at `r` per year while the principal grows at
//!   `(1 + r/12)^12 - 1`. The asymmetry is kept as-is.
//!
//! A periodic rate of zero or below takes the linear branch (contributions are
//! simply summed), which also keeps the annuity formula away from a zero
//! divisor. The principal still compounds at whatever monthly rate results.

use super::input::{CalculationInput, CalculationResult, ContributionFrequency};
use serde::{Deserialize, Serialize};

/// Compounding periods per year for the account balance
const MONTHS_PER_YEAR: f64 = 12.0;

/// Principal and contribution components of a calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccumulationBreakdown {
    pub future_value_of_principal: f64,
    pub future_value_of_contributions: f64,
    /// Principal plus every contribution, before interest
    pub total_contributed: f64,
    pub interest_earned: f64,
    pub total_future_value: f64,
}

/// Stateless accumulation engine
#[derive(Debug, Clone, Copy, Default)]
pub struct AccumulationEngine;

impl AccumulationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Total future value for one set of inputs
    pub fn compute(&self, input: &CalculationInput) -> CalculationResult {
        let (principal_fv, contributions_fv) = grow(input);
        CalculationResult {
            total_future_value: principal_fv + contributions_fv,
        }
    }

    /// Same calculation as [`compute`](Self::compute), keeping the components
    pub fn breakdown(&self, input: &CalculationInput) -> AccumulationBreakdown {
        let (principal_fv, contributions_fv) = grow(input);
        let total_future_value = principal_fv + contributions_fv;
        let total_contributed = input.principal
            + input.contribution_amount * input.contribution_frequency.contributions_over(input.years);

        AccumulationBreakdown {
            future_value_of_principal: principal_fv,
            future_value_of_contributions: contributions_fv,
            total_contributed,
            interest_earned: total_future_value - total_contributed,
            total_future_value,
        }
    }
}

/// Convenience wrapper around [`AccumulationEngine::compute`]
pub fn compute(input: &CalculationInput) -> CalculationResult {
    AccumulationEngine.compute(input)
}

/// Returns (future value of principal, future value of contributions)
fn grow(input: &CalculationInput) -> (f64, f64) {
    let annual_rate = input.annual_rate_percent / 100.0;
    let account_monthly_rate = annual_rate / MONTHS_PER_YEAR;
    let total_months = f64::from(input.years) * MONTHS_PER_YEAR;

    let principal_fv = input.principal * (1.0 + account_monthly_rate).powf(total_months);

    let contributions_fv = match input.contribution_frequency {
        ContributionFrequency::Monthly => {
            annuity_future_value(input.contribution_amount, account_monthly_rate, total_months)
        }
        ContributionFrequency::Annually => {
            annuity_future_value(input.contribution_amount, annual_rate, f64::from(input.years))
        }
    };

    (principal_fv, contributions_fv)
}

/// Future value of an ordinary annuity of `payment` over `periods`
fn annuity_future_value(payment: f64, periodic_rate: f64, periods: f64) -> f64 {
    if periodic_rate > 0.0 {
        payment * (((1.0 + periodic_rate).powf(periods) - 1.0) / periodic_rate)
    } else {
        payment * periods
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn input(principal: f64, rate: f64, years: u32, contribution: f64, freq: ContributionFrequency) -> CalculationInput {
        CalculationInput::new(principal, rate, years, contribution, freq)
    }

    #[test]
    fn test_monthly_scenario() {
        // r_m = 0.01, n = 12
        // principal: 1000 * 1.01^12 = 1126.825
        // contributions: 100 * (1.01^12 - 1) / 0.01 = 1268.250
        let engine = AccumulationEngine::new();
        let b = engine.breakdown(&input(1000.0, 12.0, 1, 100.0, ContributionFrequency::Monthly));

        assert_abs_diff_eq!(b.future_value_of_principal, 1126.825, epsilon = 0.001);
        assert_abs_diff_eq!(b.future_value_of_contributions, 1268.250, epsilon = 0.001);
        assert_abs_diff_eq!(b.total_future_value, 2395.08, epsilon = 0.01);
    }

    #[test]
    fn test_annual_zero_rate_scenario() {
        let result = compute(&input(500.0, 0.0, 5, 200.0, ContributionFrequency::Annually));
        assert_eq!(result.total_future_value, 1500.0);
    }

    #[test]
    fn test_annual_scenario() {
        // 1000 * (1.05^3 - 1) / 0.05 = 3152.50
        let result = compute(&input(0.0, 5.0, 3, 1000.0, ContributionFrequency::Annually));
        assert_abs_diff_eq!(result.total_future_value, 3152.50, epsilon = 0.005);
    }

    #[test]
    fn test_zero_years_returns_principal() {
        for freq in [ContributionFrequency::Monthly, ContributionFrequency::Annually] {
            for rate in [0.0, 3.5, 12.0, -4.0] {
                let result = compute(&input(2500.0, rate, 0, 300.0, freq));
                assert_eq!(result.total_future_value, 2500.0);
            }
        }
    }

    #[test]
    fn test_zero_contribution_is_pure_principal_growth() {
        for freq in [ContributionFrequency::Monthly, ContributionFrequency::Annually] {
            let result = compute(&input(10_000.0, 6.0, 20, 0.0, freq));
            let expected = 10_000.0 * (1.0_f64 + 0.06 / 12.0).powf(240.0);
            assert_eq!(result.total_future_value, expected);
        }
    }

    #[test]
    fn test_zero_rate_monthly_is_linear() {
        let result = compute(&input(1000.0, 0.0, 7, 150.0, ContributionFrequency::Monthly));
        assert_eq!(result.total_future_value, 1000.0 + 150.0 * 7.0 * 12.0);
    }

    #[test]
    fn test_negative_rate_takes_linear_contribution_branch() {
        // Contributions are summed; the principal still shrinks monthly
        let result = compute(&input(1000.0, -12.0, 1, 100.0, ContributionFrequency::Monthly));
        let expected = 1000.0 * 0.99_f64.powf(12.0) + 1200.0;
        assert_relative_eq!(result.total_future_value, expected, max_relative = 1e-12);

        let result = compute(&input(0.0, -5.0, 4, 100.0, ContributionFrequency::Annually));
        assert_eq!(result.total_future_value, 400.0);
    }

    #[test]
    fn test_deterministic() {
        let i = input(1234.56, 4.25, 17, 89.1, ContributionFrequency::Monthly);
        let a = compute(&i).total_future_value;
        let b = compute(&i).total_future_value;
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_breakdown_matches_compute_exactly() {
        let engine = AccumulationEngine::new();
        for freq in [ContributionFrequency::Monthly, ContributionFrequency::Annually] {
            let i = input(5000.0, 7.3, 12, 250.0, freq);
            let total = engine.compute(&i).total_future_value;
            let b = engine.breakdown(&i);
            assert_eq!(total.to_bits(), b.total_future_value.to_bits());
            assert_relative_eq!(b.interest_earned, b.total_future_value - b.total_contributed);
        }
    }

    #[test]
    fn test_total_contributed_by_frequency() {
        let engine = AccumulationEngine::new();
        let monthly = engine.breakdown(&input(1000.0, 5.0, 2, 100.0, ContributionFrequency::Monthly));
        let annual = engine.breakdown(&input(1000.0, 5.0, 2, 100.0, ContributionFrequency::Annually));

        assert_eq!(monthly.total_contributed, 1000.0 + 2400.0);
        assert_eq!(annual.total_contributed, 1000.0 + 200.0);
    }

    #[test]
    fn test_monotonic_in_each_input() {
        let base = input(1000.0, 5.0, 10, 100.0, ContributionFrequency::Monthly);
        let base_value = compute(&base).total_future_value;

        let mut more_principal = base;
        more_principal.principal += 1.0;
        assert!(compute(&more_principal).total_future_value > base_value);

        let mut more_contribution = base;
        more_contribution.contribution_amount += 1.0;
        assert!(compute(&more_contribution).total_future_value > base_value);

        assert!(compute(&base.with_rate(5.1)).total_future_value > base_value);

        // Rate rising from exactly zero
        let zero = base.with_rate(0.0);
        assert!(compute(&zero.with_rate(0.01)).total_future_value > compute(&zero).total_future_value);
    }

    #[test]
    fn test_annual_contributions_use_annual_basis() {
        // One annual contribution paid at year end earns nothing, even though
        // the principal has compounded for twelve months
        let b = AccumulationEngine::new()
            .breakdown(&input(1000.0, 6.0, 1, 500.0, ContributionFrequency::Annually));

        assert_relative_eq!(b.future_value_of_contributions, 500.0, max_relative = 1e-12);
        assert_relative_eq!(b.future_value_of_principal, 1000.0 * 1.005_f64.powf(12.0), max_relative = 1e-12);
    }
}
