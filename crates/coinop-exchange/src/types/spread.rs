//! Spread markup on an exchange rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ExchangeError, ExchangeResult};

/// A spread expressed in percent (10 means 10%).
///
/// The desk charges the spread by marking the rate up:
/// `effective_rate = rate * markup_factor()`.
///
/// # Example
///
/// ```rust
/// use coinop_exchange::SpreadPercent;
/// use rust_decimal::Decimal;
///
/// let spread = SpreadPercent::new(Decimal::from(10));
/// assert_eq!(spread.as_decimal(), Decimal::new(1, 1));
/// assert_eq!(spread.markup_factor(), Decimal::new(11, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpreadPercent(Decimal);

impl SpreadPercent {
    /// No markup.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a spread from a percentage.
    #[must_use]
    pub const fn new(percent: Decimal) -> Self {
        Self(percent)
    }

    /// Returns the spread in percent.
    #[must_use]
    pub fn as_percent(&self) -> Decimal {
        self.0
    }

    /// Returns the spread as a fraction (10% = 0.1).
    #[must_use]
    pub fn as_decimal(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }

    /// Returns the factor applied to the rate: `1 + as_decimal()`.
    #[must_use]
    pub fn markup_factor(&self) -> Decimal {
        self.as_decimal() + Decimal::ONE
    }

    /// Returns true if the spread is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Validates that the markup factor stays positive (spread above -100%).
    pub fn validate(&self) -> ExchangeResult<()> {
        if self.0 <= -Decimal::ONE_HUNDRED {
            return Err(ExchangeError::InvalidSpread {
                value: self.0,
                reason: "Spread must be greater than -100%".into(),
            });
        }
        Ok(())
    }
}

impl From<Decimal> for SpreadPercent {
    fn from(percent: Decimal) -> Self {
        Self(percent)
    }
}

impl fmt::Display for SpreadPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
