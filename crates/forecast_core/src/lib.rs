//! Deterministic long-horizon personal-finance forecast simulation engine.
//!
//! Given a `Configuration` (a common block shared by every scenario plus a
//! list of scenario-specific overlays) and a simulation start month, this
//! crate produces a month-by-month liquid-balance projection for each
//! active scenario, a cost-based emergency-fund recommendation, and a list
//! of non-fatal configuration warnings.
//!
//! # Layering
//!
//! - L0: [`calendar`], [`currency`] — month arithmetic and two-decimal
//!   money rounding, with no knowledge of the domain above them.
//! - L1: [`scheduler`], [`amortization`], [`investment_engine`] — expand a
//!   single event/loan/investment in isolation, independent of any
//!   scenario or forecast loop.
//! - L2: [`forecast_engine`], [`emergency_fund`], [`validator`] — compose
//!   the L1 engines across a whole scenario or configuration.
//!
//! # Example
//!
//! ```ignore
//! use forecast_core::calendar::Month;
//! use forecast_core::model::Configuration;
//! use forecast_core::{emergency_fund, forecast_engine, validator};
//!
//! let mut config: Configuration = serde_saphyr::from_str(yaml)?;
//! let start = Month::parse("2025-01")?;
//! config.prepare(start)?;
//!
//! let warnings = validator::validate(&config);
//! let forecasts = forecast_engine::run_with_default_logger(&config, start)?;
//! for forecast in &forecasts {
//!     let estimate = emergency_fund::estimate(
//!         forecast,
//!         config.common_starting_value(),
//!         config.emergency_fund_months_target(),
//!         42,
//!     );
//! }
//! ```

#![warn(clippy::all)]

// ============================================================================
// L0: foundational types
// ============================================================================

pub mod calendar;
pub mod currency;
pub mod error;

// ============================================================================
// L1: single-entity engines
// ============================================================================

pub mod amortization;
pub mod investment_engine;
pub mod scheduler;

// ============================================================================
// L2: whole-configuration engines
// ============================================================================

pub mod emergency_fund;
pub mod forecast_engine;
pub mod validator;

// ============================================================================
// Supporting infrastructure
// ============================================================================

pub mod logging;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use calendar::Month;
pub use emergency_fund::EmergencyFundEstimate;
pub use error::{ConfigError, ForecastError, InternalError};
pub use logging::{ForecastLogger, NoopLogger, TracingLogger};
pub use model::{Configuration, Forecast};
