use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amortization;
use crate::calendar::Month;
use crate::error::ConfigError;
use crate::model::investment::{Investment, InvestmentState};
use crate::model::scenario::Scenario;
use crate::scheduler;

fn default_emergency_fund_months() -> i32 {
    6
}

/// `recommendations.emergencyFundMonths` (§6): 0 disables the
/// recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    #[serde(default = "default_emergency_fund_months")]
    pub emergency_fund_months: i32,
}

impl Default for Recommendations {
    fn default() -> Self {
        Recommendations {
            emergency_fund_months: default_emergency_fund_months(),
        }
    }
}

/// Configuration entities shared by every scenario (§3 "Common block").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonBlock {
    pub starting_value: Decimal,
    #[serde(rename = "deathDate")]
    pub death_date: Month,
    #[serde(default)]
    pub events: Vec<crate::model::Event>,
    #[serde(default)]
    pub loans: Vec<crate::model::Loan>,
    #[serde(default)]
    pub investments: Vec<Investment>,
}

/// Root configuration entity (§3, §6). `commonStartingValue` and
/// `terminalMonth` from §3's conceptual model live inside the wire format's
/// `common` block per §6; `common_starting_value()`/`terminal_month()`
/// below bridge the two.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub common: CommonBlock,
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
    #[serde(default)]
    pub recommendations: Recommendations,
}

impl Configuration {
    pub fn common_starting_value(&self) -> Decimal {
        self.common.starting_value
    }

    pub fn terminal_month(&self) -> Month {
        self.common.death_date
    }

    pub fn emergency_fund_months_target(&self) -> i32 {
        self.recommendations.emergency_fund_months
    }

    /// Materialize event occurrence lists and loan schedules once, per §2's
    /// "date lists and loan schedules are materialized once" control flow.
    /// Must be called before any scenario is forecast.
    pub fn prepare(&mut self, simulation_start: Month) -> Result<(), ConfigError> {
        let terminal = self.terminal_month();

        schedule_events(&mut self.common.events, simulation_start, terminal)?;
        for loan in &mut self.common.loans {
            prepare_loan(loan, simulation_start, terminal)?;
        }
        prepare_investments(&mut self.common.investments, simulation_start, terminal)?;

        for scenario in &mut self.scenarios {
            schedule_events(&mut scenario.events, simulation_start, terminal)?;
            for loan in &mut scenario.loans {
                prepare_loan(loan, simulation_start, terminal)?;
            }
            prepare_investments(&mut scenario.investments, simulation_start, terminal)?;
        }
        Ok(())
    }
}

fn schedule_events(
    events: &mut [crate::model::Event],
    simulation_start: Month,
    terminal: Month,
) -> Result<(), ConfigError> {
    for event in events {
        scheduler::schedule_event_in_place(event, simulation_start, terminal, false)?;
    }
    Ok(())
}

/// Schedule a loan's `extraPrincipal` events, then generate its
/// amortization schedule. The schedule generator reads each
/// `extraPrincipal` event's materialized `occurrences` (via
/// `Loan::extra_principal_at`), so scheduling must happen first or every
/// extra-principal payment silently evaluates to zero.
fn prepare_loan(
    loan: &mut crate::model::Loan,
    simulation_start: Month,
    terminal: Month,
) -> Result<(), ConfigError> {
    schedule_events(&mut loan.extra_principal, simulation_start, terminal)?;
    loan.schedule = amortization::generate_schedule(loan, terminal)?;
    Ok(())
}

fn prepare_investments(
    investments: &mut [Investment],
    simulation_start: Month,
    terminal: Month,
) -> Result<(), ConfigError> {
    for investment in investments {
        for contribution in &mut investment.contributions {
            if contribution.is_percentage() {
                return Err(ConfigError::PercentageContribution {
                    investment: investment.name.clone(),
                });
            }
            scheduler::schedule_event_in_place(contribution, simulation_start, terminal, true)?;
        }

        let all_percentage = investment.withdrawals.iter().all(|e| e.is_percentage());
        let all_amount = investment.withdrawals.iter().all(|e| !e.is_percentage());
        if !investment.withdrawals.is_empty() && !all_percentage && !all_amount {
            return Err(ConfigError::MixedWithdrawalStyle {
                investment: investment.name.clone(),
            });
        }
        for withdrawal in &mut investment.withdrawals {
            scheduler::schedule_event_in_place(withdrawal, simulation_start, terminal, true)?;
        }
    }
    Ok(())
}

/// The per-scenario starting state for every investment, keyed positionally
/// (parallel to `Scenario::investments`/`CommonBlock::investments`).
pub fn initial_investment_states(investments: &[Investment]) -> Vec<InvestmentState> {
    investments
        .iter()
        .map(|inv| InvestmentState::new(inv.starting_value))
        .collect()
}
