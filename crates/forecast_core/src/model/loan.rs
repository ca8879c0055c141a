use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::Month;
use crate::model::event::Event;

/// Per-month breakdown of a loan payment, as generated by
/// `amortization::generate_schedule`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Payment {
    pub total: Decimal,
    pub principal_portion: Decimal,
    pub interest_portion: Decimal,
    pub remaining_principal: Decimal,
    pub refundable_escrow: Decimal,
}

/// Sparse month-keyed amortization schedule. A `BTreeMap` keeps iteration in
/// chronological order for free, which the forecast loop and CSV formatter
/// both rely on.
pub type Schedule = BTreeMap<Month, Payment>;

/// A fixed-term amortizing liability with escrow, mortgage-insurance, and
/// early-payoff extensions (§4.3 of the forecast specification).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub name: String,
    pub start_month: Month,
    pub principal: Decimal,
    pub annual_interest_rate_percent: Decimal,
    pub term_months: i32,
    #[serde(default)]
    pub down_payment: Decimal,
    #[serde(default)]
    pub escrow_monthly: Decimal,
    #[serde(default)]
    pub mortgage_insurance_monthly: Decimal,
    #[serde(default)]
    pub mortgage_insurance_cutoff_percent: Decimal,
    #[serde(default)]
    pub early_payoff_threshold: Decimal,
    #[serde(default)]
    pub early_payoff_month: Option<Month>,
    #[serde(default)]
    pub sell_property: bool,
    #[serde(default)]
    pub sell_price: Decimal,
    #[serde(default)]
    pub sell_costs_net: Decimal,
    #[serde(default)]
    pub extra_principal: Vec<Event>,

    /// Materialized once by `amortization::generate_schedule`, then
    /// optionally truncated/rewritten in place when a threshold payoff
    /// fires during the forecast loop (§4.5 step 2).
    #[serde(skip)]
    pub schedule: Schedule,
}

impl Loan {
    /// financedPrincipal = principal - downPayment.
    pub fn financed_principal(&self) -> Decimal {
        self.principal - self.down_payment
    }

    pub fn extra_principal_at(&self, month: Month) -> Decimal {
        self.extra_principal
            .iter()
            .map(|e| e.amount_at(month))
            .sum()
    }
}
