use serde::{Deserialize, Serialize};

use crate::model::event::Event;
use crate::model::investment::Investment;
use crate::model::loan::Loan;

/// A named branch of the configuration: its own events/loans/investments,
/// plus (at forecast time) the shared `common` block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub name: String,
    /// Inactive scenarios are skipped by `ForecastEngine` and `Validator`.
    /// Defaults to `false` (opt-in) when omitted, so an unfinished scenario
    /// draft never runs by accident.
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub loans: Vec<Loan>,
    #[serde(default)]
    pub investments: Vec<Investment>,
}
