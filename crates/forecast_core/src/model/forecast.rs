use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::calendar::Month;

/// Per-scenario simulation output: a month-by-month ledger of the
/// projected liquid balance plus per-month income, expense, and annotation
/// streams from the first month through the terminal month.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Forecast {
    pub name: String,
    pub balance: BTreeMap<Month, Decimal>,
    pub costs: BTreeMap<Month, Decimal>,
    pub income: BTreeMap<Month, Decimal>,
    pub notes: BTreeMap<Month, Vec<String>>,
}

impl Forecast {
    pub fn new(name: impl Into<String>) -> Self {
        Forecast {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn note(&mut self, month: Month, message: impl Into<String>) {
        self.notes.entry(month).or_default().push(message.into());
    }
}
