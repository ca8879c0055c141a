//! ForecastEngine (L2): the month-by-month simulation loop of §4.5.
//!
//! Each active scenario is walked independently from the simulation start
//! month through the terminal month, composing events, loan payments, and
//! investment activity into a single balance trajectory plus side-channel
//! cost/income/note streams.

use rust_decimal::Decimal;

use crate::amortization;
use crate::calendar::Month;
use crate::currency;
use crate::error::{ForecastError, InternalError};
use crate::investment_engine;
use crate::logging::{ForecastLogger, NoopLogger};
use crate::model::{initial_investment_states, Configuration, Forecast, Loan, Scenario};

/// Run every active scenario and return one `Forecast` per scenario, in
/// configuration order. `config` must already have had `prepare` called on
/// it (event occurrence lists and loan schedules materialized).
pub fn run(
    config: &Configuration,
    simulation_start: Month,
    logger: &dyn ForecastLogger,
) -> Result<Vec<Forecast>, ForecastError> {
    let mut forecasts = Vec::new();
    for scenario in &config.scenarios {
        if !scenario.active {
            continue;
        }
        forecasts.push(run_scenario(config, scenario, simulation_start, logger)?);
    }
    Ok(forecasts)
}

/// Convenience entry point for callers that don't need custom logging.
pub fn run_with_default_logger(
    config: &Configuration,
    simulation_start: Month,
) -> Result<Vec<Forecast>, ForecastError> {
    run(config, simulation_start, &NoopLogger)
}

/// Run a single scenario. Common loans are cloned into this scenario's own
/// private vector before the loop starts, so a threshold payoff here never
/// mutates another scenario's (or the shared common's) view of the loan —
/// see `DESIGN.md`'s note on the "mutable shared loans" design constraint.
fn run_scenario(
    config: &Configuration,
    scenario: &Scenario,
    simulation_start: Month,
    logger: &dyn ForecastLogger,
) -> Result<Forecast, ForecastError> {
    let terminal = config.terminal_month();
    let mut forecast = Forecast::new(scenario.name.clone());

    let mut loans: Vec<Loan> = scenario
        .loans
        .iter()
        .cloned()
        .chain(config.common.loans.iter().cloned())
        .collect();

    let mut scenario_inv_states = initial_investment_states(&scenario.investments);
    let mut common_inv_states = initial_investment_states(&config.common.investments);

    let mut balance = config.common_starting_value();
    forecast.balance.insert(simulation_start, currency::round(balance));

    let mut previous_month = simulation_start;
    while previous_month != terminal {
        let current_month = previous_month.checked_offset(1).ok_or_else(|| {
            ForecastError::from(InternalError::CalendarOverflow {
                month: previous_month.format(),
                offset: 1,
            })
        })?;
        let mut delta = Decimal::ZERO;

        // 1. Events: scenario-specific, then common.
        for event in scenario.events.iter().chain(config.common.events.iter()) {
            let amount = event.amount_at(current_month);
            if amount.is_zero() {
                continue;
            }
            delta += amount;
            if currency::is_positive(amount) {
                *forecast.income.entry(current_month).or_default() += amount;
            } else {
                *forecast.costs.entry(current_month).or_default() += -amount;
            }
        }

        // 2. Early-payoff-by-threshold check, scenario loans then common
        // loans, all seeing the same provisional balance (§4.5: triggers
        // do not chain within one month).
        let provisional_balance = balance + delta;
        for loan in loans.iter_mut() {
            if !fires_threshold_payoff(loan, previous_month, current_month, provisional_balance) {
                continue;
            }
            let payment = amortization::fire_threshold_payoff(loan, current_month, terminal);
            let note = describe_threshold_payoff(loan, &payment);
            logger.event(&scenario.name, current_month, &note);
            forecast.note(current_month, note);
        }

        // 3. Loans: scenario then common (same combined vector/order as
        // step 2; a payoff fired above is read back here like any other
        // scheduled payment, so its cash effect is applied exactly once).
        for loan in &loans {
            if let Some(payment) = loan.schedule.get(&current_month) {
                delta -= payment.total;
                *forecast.costs.entry(current_month).or_default() += payment.total;
            }
        }

        // 4. Investments: scenario then common.
        let investment_pairs = scenario
            .investments
            .iter()
            .zip(scenario_inv_states.iter_mut())
            .chain(config.common.investments.iter().zip(common_inv_states.iter_mut()));
        for (investment, state) in investment_pairs {
            let effect = investment_engine::apply_month(investment, state, current_month);
            delta += effect.cash_delta;
            if currency::is_positive(effect.income) {
                *forecast.income.entry(current_month).or_default() += effect.income;
            }
            if currency::is_positive(effect.costs) {
                *forecast.costs.entry(current_month).or_default() += effect.costs;
            }
        }

        balance += delta;
        forecast.balance.insert(current_month, currency::round(balance));
        previous_month = current_month;
    }

    Ok(forecast)
}

fn fires_threshold_payoff(
    loan: &Loan,
    previous_month: Month,
    current_month: Month,
    provisional_balance: Decimal,
) -> bool {
    if loan.early_payoff_threshold <= Decimal::ZERO {
        return false;
    }
    if !loan.start_month.before(current_month) {
        return false;
    }
    let Some(_) = loan.schedule.get(&current_month) else {
        return false;
    };
    let previous_remaining = loan
        .schedule
        .get(&previous_month)
        .map(|p| p.remaining_principal)
        .unwrap_or(Decimal::ZERO);
    currency::round(provisional_balance - previous_remaining) >= loan.early_payoff_threshold
}

fn describe_threshold_payoff(loan: &Loan, payment: &crate::model::Payment) -> String {
    if loan.sell_property {
        format!(
            "{}: early payoff threshold reached, property sold for {} (net {})",
            loan.name, loan.sell_price, payment.total
        )
    } else {
        format!(
            "{}: early payoff threshold reached, paid off with cash effect {}",
            loan.name, payment.total
        )
    }
}
