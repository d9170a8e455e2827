//! Priced currency pair.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Currency, SpreadPercent};
use crate::error::{ExchangeError, ExchangeResult};
use crate::exchange;

/// A rate for buying `quote` currency with `base` currency, plus the spread
/// the desk charges on top.
///
/// `rate` is the price of one unit of `quote` expressed in `base`.
///
/// # Example
///
/// ```rust
/// use coinop_exchange::{Currency, ExchangeQuote, SpreadPercent};
/// use rust_decimal::Decimal;
///
/// let quote = ExchangeQuote::new(Currency::USD, Currency::EUR, Decimal::new(12, 1))
///     .with_spread(SpreadPercent::new(Decimal::from(10)));
///
/// assert_eq!(quote.effective_rate().unwrap(), Decimal::new(132, 2));
/// assert_eq!(quote.exchangeable_value(Decimal::new(1275, 1), Decimal::from(5)).unwrap(), 95);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeQuote {
    /// Currency being sold.
    pub base: Currency,
    /// Currency being bought.
    pub quote: Currency,
    /// Units of `base` per unit of `quote`.
    pub rate: Decimal,
    /// Markup charged on the rate.
    #[serde(default)]
    pub spread: SpreadPercent,
}

impl ExchangeQuote {
    /// Creates a quote with no spread.
    #[must_use]
    pub fn new(base: Currency, quote: Currency, rate: Decimal) -> Self {
        Self {
            base,
            quote,
            rate,
            spread: SpreadPercent::ZERO,
        }
    }

    /// Sets the spread.
    #[must_use]
    pub fn with_spread(mut self, spread: SpreadPercent) -> Self {
        self.spread = spread;
        self
    }

    /// Validates that the rate is positive and the spread leaves it positive.
    pub fn validate(&self) -> ExchangeResult<()> {
        if self.rate <= Decimal::ZERO {
            return Err(ExchangeError::InvalidRate {
                value: self.rate,
                reason: "Rate must be positive".into(),
            });
        }
        self.spread.validate()
    }

    /// Returns the rate after applying the spread.
    pub fn effective_rate(&self) -> ExchangeResult<Decimal> {
        self.rate
            .checked_mul(self.spread.markup_factor())
            .ok_or_else(|| ExchangeError::overflow("effective_rate"))
    }

    /// Converts `budget` units of `base` into `quote` at the effective rate.
    pub fn convert(&self, budget: Decimal) -> ExchangeResult<Decimal> {
        exchange::exchange_money(budget, self.effective_rate()?)
    }

    /// Returns the largest whole-bill amount of `quote` that `budget` buys.
    ///
    /// Same result as [`exchange::exchangeable_value`] with this quote's rate
    /// and spread.
    pub fn exchangeable_value(
        &self,
        budget: Decimal,
        bill_denomination: Decimal,
    ) -> ExchangeResult<i64> {
        exchange::exchangeable_value(
            budget,
            self.rate,
            self.spread.as_percent(),
            bill_denomination,
        )
    }
}

impl fmt::Display for ExchangeQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} @ {}", self.base, self.quote, self.rate)?;
        if !self.spread.is_zero() {
            write!(f, " (+{})", self.spread)?;
        }
        Ok(())
    }
}
