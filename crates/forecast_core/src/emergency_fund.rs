//! EmergencyFund (L2): bootstrap estimate of average monthly expense and
//! the resulting cash-runway recommendation (§4.6).
//!
//! The bootstrap sampler is a deliberate design choice, not a statistical
//! necessity — a plain median of nonzero monthly costs would also be
//! defensible. The RNG is seeded explicitly so the estimate is
//! reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use crate::currency;
use crate::model::Forecast;

/// Result of running the bootstrap estimator once over a scenario's costs.
#[derive(Debug, Clone, PartialEq)]
pub struct EmergencyFundEstimate {
    pub median_monthly_expense: Decimal,
    /// `None` when the median estimate is zero or negative (no runway to
    /// compute against).
    pub coverage_months: Option<Decimal>,
    pub recommendation: String,
}

const SAMPLE_COUNT: usize = 2_000;

/// Estimate average monthly expense for `forecast` by resampling its cost
/// series, then compare cash runway against `target_months`.
///
/// A sample with `k == 0` (drawn with nonzero probability whenever the
/// cost series is nonempty) is recorded as `Decimal::ZERO` rather than
/// skipped — the resolved reading of §9's open question, chosen so that a
/// fixed `SAMPLE_COUNT` always yields exactly `SAMPLE_COUNT` data points
/// regardless of what the RNG draws.
pub fn estimate(
    forecast: &Forecast,
    starting_value: Decimal,
    target_months: i32,
    seed: u64,
) -> EmergencyFundEstimate {
    let monthly_costs: Vec<Decimal> = forecast.costs.values().copied().collect();
    let median_monthly_expense = bootstrap_median(&monthly_costs, seed);

    let coverage_months = if currency::is_positive(median_monthly_expense) {
        Some(currency::round(starting_value / median_monthly_expense))
    } else {
        None
    };

    let recommendation = describe_coverage(coverage_months, target_months);

    EmergencyFundEstimate {
        median_monthly_expense,
        coverage_months,
        recommendation,
    }
}

fn bootstrap_median(monthly_costs: &[Decimal], seed: u64) -> Decimal {
    let month_count = monthly_costs.len();
    if month_count == 0 {
        return Decimal::ZERO;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut samples = Vec::with_capacity(SAMPLE_COUNT);
    for _ in 0..SAMPLE_COUNT {
        let k = rng.random_range(0..month_count);
        samples.push(mean_of_first_k(monthly_costs, k));
    }
    median(&mut samples)
}

fn mean_of_first_k(monthly_costs: &[Decimal], k: usize) -> Decimal {
    if k == 0 {
        return Decimal::ZERO;
    }
    let sum: Decimal = monthly_costs[..k].iter().copied().sum();
    sum / Decimal::from(k as u64)
}

fn median(samples: &mut [Decimal]) -> Decimal {
    samples.sort();
    let n = samples.len();
    if n % 2 == 1 {
        samples[n / 2]
    } else {
        (samples[n / 2 - 1] + samples[n / 2]) / Decimal::from(2)
    }
}

fn describe_coverage(coverage_months: Option<Decimal>, target_months: i32) -> String {
    match coverage_months {
        None => "no estimated monthly expense; emergency fund coverage cannot be computed".to_string(),
        Some(months) if target_months <= 0 => {
            format!("estimated {months} months of coverage; no target configured")
        }
        Some(months) if months >= Decimal::from(target_months) => {
            format!("estimated {months} months of coverage meets the {target_months}-month target")
        }
        Some(months) => {
            format!("estimated {months} months of coverage falls short of the {target_months}-month target")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Month;
    use rust_decimal_macros::dec;

    fn m(label: &str) -> Month {
        Month::parse(label).unwrap()
    }

    fn forecast_with_costs(values: &[(&str, Decimal)]) -> Forecast {
        let mut forecast = Forecast::new("test");
        for (label, value) in values {
            forecast.costs.insert(m(label), *value);
        }
        forecast
    }

    #[test]
    fn empty_cost_series_yields_zero_median_and_no_coverage() {
        let forecast = Forecast::new("empty");
        let result = estimate(&forecast, dec!(10000), 6, 42);
        assert_eq!(result.median_monthly_expense, Decimal::ZERO);
        assert_eq!(result.coverage_months, None);
    }

    #[test]
    fn uniform_cost_series_converges_to_the_constant() {
        let forecast = forecast_with_costs(&[
            ("2025-01", dec!(1000)),
            ("2025-02", dec!(1000)),
            ("2025-03", dec!(1000)),
            ("2025-04", dec!(1000)),
        ]);
        let result = estimate(&forecast, dec!(10000), 6, 7);
        // Every nonzero-k sample's mean is exactly 1000; only k==0 samples
        // (recorded as 0) can pull the median down, and the median of 2000
        // samples over a 4-outcome uniform draw is overwhelmingly the
        // modal nonzero value.
        assert_eq!(result.median_monthly_expense, dec!(1000));
        assert_eq!(result.coverage_months, Some(dec!(10)));
    }

    #[test]
    fn same_seed_is_deterministic() {
        let forecast = forecast_with_costs(&[
            ("2025-01", dec!(500)),
            ("2025-02", dec!(1500)),
            ("2025-03", dec!(300)),
        ]);
        let a = estimate(&forecast, dec!(5000), 6, 123);
        let b = estimate(&forecast, dec!(5000), 6, 123);
        assert_eq!(a, b);
    }

    #[test]
    fn coverage_recommendation_reflects_target_comparison() {
        let forecast = forecast_with_costs(&[("2025-01", dec!(1000))]);
        let short = estimate(&forecast, dec!(2000), 6, 9);
        assert!(short.recommendation.contains("falls short"));

        let ample = estimate(&forecast, dec!(20000), 6, 9);
        assert!(ample.recommendation.contains("meets"));
    }
}
