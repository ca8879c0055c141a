//! Integration tests for the forecast engine, each exercising
//! `Configuration::prepare` through `forecast_engine::run` end to end.
//!
//! Tests are organized by topic:
//! - `mortgage_scenarios` - a loan with escrow, MI, and early payoff
//!   interacting with common and scenario-specific events
//! - `investment_and_validation` - investment accounts plus `Validator`
//!   and `EmergencyFund` run against the same configuration

mod investment_and_validation;
