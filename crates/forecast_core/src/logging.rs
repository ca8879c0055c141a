//! Injectable logging (§5: "the logger is the only process-wide
//! collaborator; the core accepts one as a parameter, a no-op logger must
//! be acceptable"). Logging calls are fire-and-forget and never influence
//! simulation output.

use crate::calendar::Month;

/// A sink for fire-and-forget diagnostic events emitted while a scenario
/// runs. Implementations must not be able to affect simulation output —
/// the trait has no return value for exactly that reason.
pub trait ForecastLogger {
    fn event(&self, scenario: &str, month: Month, message: &str);
}

/// Default logger: does nothing. Satisfies §5's "no-op logger must be
/// acceptable" requirement and is the logger `ForecastEngine::run` uses
/// when none is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl ForecastLogger for NoopLogger {
    fn event(&self, _scenario: &str, _month: Month, _message: &str) {}
}

/// Forwards to the `tracing` crate, the structured logger the outer CLI
/// application wires a subscriber for. `forecast_core` itself installs no
/// subscriber — with none installed, `tracing` macros are themselves
/// no-ops, which is what makes this safe to use as a library-level
/// default.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl ForecastLogger for TracingLogger {
    fn event(&self, scenario: &str, month: Month, message: &str) {
        tracing::info!(scenario, %month, message);
    }
}
