//! Error types for the forecast engine.
//!
//! Hand-rolled enums with manual `Display` impls rather than a derive-macro
//! error crate: each layer reports through its own variant set and converts
//! upward with `From`.

use std::fmt;

pub type Result<T> = std::result::Result<T, ForecastError>;

/// Failures that originate from malformed configuration: invalid month
/// labels, non-positive frequencies, contradictory investment withdrawal
/// styles, and the like. Fatal to the affected scenario; surfaced before
/// any forecast output is produced for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidMonthLabel(String),
    NonPositiveFrequency { context: String, frequency: i32 },
    NonPositiveTerm { loan: String, term: i32 },
    NegativeTerm { loan: String, term: i32 },
    InvalidFinancialParameter { context: String, detail: String },
    MixedWithdrawalStyle { investment: String },
    PercentageContribution { investment: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMonthLabel(label) => {
                write!(f, "invalid month label: {label:?} (expected YYYY-MM)")
            }
            ConfigError::NonPositiveFrequency { context, frequency } => {
                write!(f, "{context}: frequencyMonths must be >= 1, got {frequency}")
            }
            ConfigError::NonPositiveTerm { loan, term } => {
                write!(f, "loan {loan:?}: termMonths must be >= 1, got {term}")
            }
            ConfigError::NegativeTerm { loan, term } => {
                write!(f, "loan {loan:?}: termMonths may not be negative, got {term}")
            }
            ConfigError::InvalidFinancialParameter { context, detail } => {
                write!(f, "{context}: {detail}")
            }
            ConfigError::MixedWithdrawalStyle { investment } => write!(
                f,
                "investment {investment:?}: withdrawals must be entirely amount-based or entirely percentage-based"
            ),
            ConfigError::PercentageContribution { investment } => write!(
                f,
                "investment {investment:?}: contributions may not be percentage-based"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Arithmetic or control-flow states that should be unreachable under a
/// valid configuration. Useful as a tripwire rather than a silent panic.
/// The forecast loop's only calendar arithmetic is stepping one month at a
/// time toward `terminalMonth`, so `CalendarOverflow` is the one tripwire
/// that loop can actually hit (an absurdly distant `terminalMonth`
/// overflowing the month ordinal); it is not expected to ever fire in
/// practice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalError {
    CalendarOverflow { month: String, offset: i32 },
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InternalError::CalendarOverflow { month, offset } => {
                write!(f, "internal: offsetting {month} by {offset} months overflowed")
            }
        }
    }
}

impl std::error::Error for InternalError {}

/// Top-level error returned by the public engine entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForecastError {
    Config(ConfigError),
    Internal(InternalError),
}

impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForecastError::Config(e) => write!(f, "configuration error: {e}"),
            ForecastError::Internal(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ForecastError {}

impl From<ConfigError> for ForecastError {
    fn from(err: ConfigError) -> Self {
        ForecastError::Config(err)
    }
}

impl From<InternalError> for ForecastError {
    fn from(err: InternalError) -> Self {
        ForecastError::Internal(err)
    }
}
