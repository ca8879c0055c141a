//! Plain value types shared across the engine layers: `Event`, `Loan`,
//! `Investment`, `Scenario`, `Configuration`, `Payment`.
//!
//! One file per entity, with a flat `pub use` re-export surface from
//! `mod.rs`.

mod config;
mod event;
mod forecast;
mod investment;
mod loan;
mod scenario;

pub use config::{initial_investment_states, CommonBlock, Configuration, Recommendations};
pub use event::Event;
pub use forecast::Forecast;
pub use investment::{Investment, InvestmentState};
pub use loan::{Loan, Payment, Schedule};
pub use scenario::Scenario;
