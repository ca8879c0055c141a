use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::event::Event;

/// An account that grows monthly and participates in cash flow (§3, §4.4).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub name: String,
    pub starting_value: Decimal,
    /// Percent, e.g. `12` means 12%/year.
    pub annual_return_rate: Decimal,
    #[serde(default)]
    pub tax_rate: Decimal,
    #[serde(default)]
    pub withdrawal_tax_rate: Decimal,
    #[serde(default)]
    pub contributions_from_cash: bool,
    #[serde(default)]
    pub contributions: Vec<Event>,
    #[serde(default)]
    pub withdrawals: Vec<Event>,
}

/// Mutable monthly state of an investment account, evolved in place by
/// `InvestmentEngine` as the forecast loop advances. Kept separate from the
/// immutable `Investment` configuration so that a scenario run can own a
/// private copy without cloning the (static) event lists every month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InvestmentState {
    pub current_balance: Decimal,
    pub principal_basis: Decimal,
}

impl InvestmentState {
    pub fn new(starting_value: Decimal) -> Self {
        InvestmentState {
            current_balance: starting_value,
            principal_basis: starting_value,
        }
    }

    pub fn accrued_growth(&self) -> Decimal {
        self.current_balance - self.principal_basis
    }
}
