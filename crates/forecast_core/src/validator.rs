//! Validator (L2): non-fatal configuration warnings (§4.7).
//!
//! Warnings never prevent a forecast from running; they are advisory
//! diagnostics surfaced to the caller alongside (not instead of) the
//! simulation output.

use crate::model::{Configuration, Event};

/// Collect warnings for every event (common, plus each active scenario's
/// own) whose window extends past the terminal month. Inactive scenarios
/// and loans maturing after the terminal month are not warned about —
/// the latter is an ordinary, expected shape, not a misconfiguration.
pub fn validate(config: &Configuration) -> Vec<String> {
    let terminal = config.terminal_month();
    let mut warnings = Vec::new();

    check_events(&config.common.events, "common", terminal, &mut warnings);
    for scenario in &config.scenarios {
        if !scenario.active {
            continue;
        }
        check_events(&scenario.events, &scenario.name, terminal, &mut warnings);
    }

    warnings
}

fn check_events(
    events: &[Event],
    context: &str,
    terminal: crate::calendar::Month,
    warnings: &mut Vec<String>,
) {
    for event in events {
        if let Some(start) = event.start_date {
            if start >= terminal {
                warnings.push(format!(
                    "{context}: event {:?} starts at {start} on or after the terminal month {terminal}",
                    event.name
                ));
            }
        }
        if let Some(end) = event.end_date {
            if end > terminal {
                warnings.push(format!(
                    "{context}: event {:?} ends at {end} after the terminal month {terminal}",
                    event.name
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Month;
    use crate::model::{CommonBlock, Event, Recommendations, Scenario};
    use rust_decimal::Decimal;

    fn m(label: &str) -> Month {
        Month::parse(label).unwrap()
    }

    fn empty_config(terminal: Month) -> Configuration {
        Configuration {
            common: CommonBlock {
                starting_value: Decimal::ZERO,
                death_date: terminal,
                events: vec![],
                loans: vec![],
                investments: vec![],
            },
            scenarios: vec![],
            recommendations: Recommendations::default(),
        }
    }

    #[test]
    fn no_warnings_for_well_formed_events() {
        let mut config = empty_config(m("2030-12"));
        let mut event = Event::new("paycheck", Decimal::ZERO);
        event.start_date = Some(m("2025-01"));
        event.end_date = Some(m("2029-12"));
        config.common.events.push(event);
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn warns_when_start_on_or_after_terminal() {
        let mut config = empty_config(m("2025-06"));
        let mut event = Event::new("late starter", Decimal::ZERO);
        event.start_date = Some(m("2025-06"));
        config.common.events.push(event);
        let warnings = validate(&config);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("late starter"));
    }

    #[test]
    fn warns_when_end_exceeds_terminal() {
        let mut config = empty_config(m("2025-06"));
        let mut event = Event::new("overrun", Decimal::ZERO);
        event.start_date = Some(m("2025-01"));
        event.end_date = Some(m("2025-07"));
        config.common.events.push(event);
        let warnings = validate(&config);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("overrun"));
    }

    #[test]
    fn inactive_scenario_events_are_not_checked() {
        let mut config = empty_config(m("2025-06"));
        let mut event = Event::new("late starter", Decimal::ZERO);
        event.start_date = Some(m("2025-06"));
        config.scenarios.push(Scenario {
            name: "dormant".into(),
            active: false,
            events: vec![event],
            loans: vec![],
            investments: vec![],
        });
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn loans_maturing_after_terminal_are_not_warned() {
        let mut config = empty_config(m("2025-06"));
        config.common.loans.push(crate::model::Loan {
            name: "mortgage".into(),
            start_month: m("2025-01"),
            principal: Decimal::from(1000),
            annual_interest_rate_percent: Decimal::ZERO,
            term_months: 360,
            down_payment: Decimal::ZERO,
            escrow_monthly: Decimal::ZERO,
            mortgage_insurance_monthly: Decimal::ZERO,
            mortgage_insurance_cutoff_percent: Decimal::ZERO,
            early_payoff_threshold: Decimal::ZERO,
            early_payoff_month: None,
            sell_property: false,
            sell_price: Decimal::ZERO,
            sell_costs_net: Decimal::ZERO,
            extra_principal: vec![],
            schedule: Default::default(),
        });
        assert!(validate(&config).is_empty());
    }
}
