//! Error types for exchange arithmetic.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for exchange operations.
pub type ExchangeResult<T> = Result<T, ExchangeError>;

/// Errors that can occur during exchange calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExchangeError {
    /// Division, modulo or floor-division by zero.
    #[error("Division by zero in {operation}")]
    DivisionByZero {
        /// The operation whose divisor was zero.
        operation: String,
    },

    /// Result does not fit in a `Decimal` or an `i64` count.
    #[error("Numerical overflow in {operation}")]
    Overflow {
        /// The operation that overflowed.
        operation: String,
    },

    /// Invalid exchange rate.
    #[error("Invalid exchange rate: {value} - {reason}")]
    InvalidRate {
        /// The rejected rate.
        value: Decimal,
        /// Reason for invalidity.
        reason: String,
    },

    /// Invalid spread percentage.
    #[error("Invalid spread: {value}% - {reason}")]
    InvalidSpread {
        /// The rejected spread, in percent.
        value: Decimal,
        /// Reason for invalidity.
        reason: String,
    },

    /// Invalid bill denomination.
    #[error("Invalid bill denomination: {value} - {reason}")]
    InvalidDenomination {
        /// The rejected denomination.
        value: Decimal,
        /// Reason for invalidity.
        reason: String,
    },

    /// Settings could not be parsed.
    #[error("Configuration error: {reason}")]
    ConfigError {
        /// Description of the configuration error.
        reason: String,
    },
}

impl ExchangeError {
    /// Creates a division by zero error.
    #[must_use]
    pub fn division_by_zero(operation: impl Into<String>) -> Self {
        Self::DivisionByZero {
            operation: operation.into(),
        }
    }

    /// Creates an overflow error.
    #[must_use]
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::Overflow {
            operation: operation.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::ConfigError {
            reason: reason.into(),
        }
    }

    /// Returns true for arithmetic domain errors (zero divisor or overflow).
    #[must_use]
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. } | Self::Overflow { .. })
    }
}

impl From<toml::de::Error> for ExchangeError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(err.message())
    }
}
