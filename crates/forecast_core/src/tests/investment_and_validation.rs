use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calendar::Month;
use crate::emergency_fund;
use crate::forecast_engine;
use crate::model::{CommonBlock, Configuration, Event, Investment, Recommendations, Scenario};
use crate::validator;

fn m(label: &str) -> Month {
    Month::parse(label).unwrap()
}

fn monthly_event(name: &str, amount: Decimal, start: &str, end: &str) -> Event {
    let mut event = Event::new(name, amount);
    event.start_date = Some(m(start));
    event.end_date = Some(m(end));
    event.frequency = Some(1);
    event
}

/// A cash-funded monthly 401k contribution debits the scenario balance
/// every tick, the validator flags an out-of-range event, and the
/// emergency fund estimator produces a usable recommendation — all from
/// one prepared configuration.
#[test]
fn investment_contribution_validator_and_emergency_fund_agree() {
    let rent = monthly_event("rent", dec!(-800), "2025-02", "2025-12");
    let overrunning = monthly_event("bonus", dec!(500), "2025-11", "2026-06");
    let contribution = monthly_event("401k", dec!(100), "2025-02", "2025-12");

    let mut config = Configuration {
        common: CommonBlock {
            starting_value: dec!(10000),
            death_date: m("2026-01"),
            events: vec![rent],
            loans: vec![],
            investments: vec![Investment {
                name: "401k".into(),
                starting_value: dec!(10000),
                annual_return_rate: dec!(6),
                tax_rate: Decimal::ZERO,
                withdrawal_tax_rate: Decimal::ZERO,
                contributions_from_cash: true,
                contributions: vec![contribution],
                withdrawals: vec![],
            }],
        },
        scenarios: vec![Scenario {
            name: "primary".into(),
            active: true,
            events: vec![overrunning],
            loans: vec![],
            investments: vec![],
        }],
        recommendations: Recommendations {
            emergency_fund_months: 6,
        },
    };
    config.prepare(m("2025-01")).unwrap();

    let warnings = validator::validate(&config);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("bonus"));
    assert!(warnings[0].contains("primary"));

    let forecasts = forecast_engine::run_with_default_logger(&config, m("2025-01")).unwrap();
    assert_eq!(forecasts.len(), 1);
    let forecast = &forecasts[0];

    // Rent (800) plus the cash-funded contribution (100) land in costs
    // every ticked month through December.
    assert_eq!(forecast.costs[&m("2025-03")], dec!(900.00));

    let estimate = emergency_fund::estimate(forecast, config.common_starting_value(), 6, 99);
    assert!(estimate.median_monthly_expense > Decimal::ZERO);
    assert!(estimate.coverage_months.is_some());
}

/// Inactive scenarios never reach the validator or the forecast engine.
#[test]
fn inactive_scenario_is_invisible_to_validator_and_engine() {
    let stray = monthly_event("stray", dec!(1), "2030-01", "2030-01");
    let mut config = Configuration {
        common: CommonBlock {
            starting_value: dec!(1000),
            death_date: m("2025-06"),
            events: vec![],
            loans: vec![],
            investments: vec![],
        },
        scenarios: vec![Scenario {
            name: "dormant".into(),
            active: false,
            events: vec![stray],
            loans: vec![],
            investments: vec![],
        }],
        recommendations: Recommendations::default(),
    };
    config.prepare(m("2025-01")).unwrap();

    assert!(validator::validate(&config).is_empty());
    let forecasts = forecast_engine::run_with_default_logger(&config, m("2025-01")).unwrap();
    assert!(forecasts.is_empty());
}
