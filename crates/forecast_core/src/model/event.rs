use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::Month;

/// A recurring cash-flow impulse, or (when reused for an investment's
/// withdrawal list) a percentage-of-balance drawdown.
///
/// `percentage` is only meaningful for investment withdrawals; a plain
/// income/expense event or an investment contribution must leave it unset
/// (enforced as `ConfigError::PercentageContribution` for contributions and
/// `ConfigError::MixedWithdrawalStyle` for a withdrawal list that mixes the
/// two styles — see `config::prepare`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub name: String,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub start_date: Option<Month>,
    #[serde(default)]
    pub end_date: Option<Month>,
    #[serde(default)]
    pub frequency: Option<i32>,
    #[serde(default)]
    pub percentage: Option<Decimal>,

    /// Materialized occurrence months, frozen after scheduling. Empty until
    /// `EventScheduler` runs over this event.
    #[serde(skip)]
    pub occurrences: Vec<Month>,
}

impl Event {
    pub fn new(name: impl Into<String>, amount: Decimal) -> Self {
        Event {
            name: name.into(),
            amount,
            start_date: None,
            end_date: None,
            frequency: None,
            percentage: None,
            occurrences: Vec::new(),
        }
    }

    pub fn is_percentage(&self) -> bool {
        self.percentage.is_some()
    }

    /// Sum of amounts for occurrences that fall exactly on `month`. For a
    /// percentage-style event the caller applies `percentage` separately
    /// (it has no fixed dollar amount).
    pub fn amount_at(&self, month: Month) -> Decimal {
        if self.occurrences.contains(&month) {
            self.amount
        } else {
            Decimal::ZERO
        }
    }

    /// Sum of `percentage` across events occurring at `month`, used by the
    /// withdrawal side of `InvestmentEngine`.
    pub fn percentage_at(&self, month: Month) -> Decimal {
        if self.occurrences.contains(&month) {
            self.percentage.unwrap_or(Decimal::ZERO)
        } else {
            Decimal::ZERO
        }
    }
}
