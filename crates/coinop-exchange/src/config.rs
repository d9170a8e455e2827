//! Exchange desk settings.
//!
//! A plain value type holding the defaults a desk quotes with. It can be
//! built in code or parsed from TOML:
//!
//! ```toml
//! base = "USD"
//! quote = "EUR"
//! spread = 10
//! bill_denomination = 5
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ExchangeError, ExchangeResult};
use crate::types::{Currency, ExchangeQuote, SpreadPercent};

// =============================================================================
// EXCHANGE SETTINGS
// =============================================================================

/// Defaults for quoting and paying out foreign currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeSettings {
    /// Currency the customer pays with.
    #[serde(default = "default_base")]
    pub base: Currency,

    /// Currency the customer receives.
    #[serde(default = "default_quote")]
    pub quote: Currency,

    /// Spread charged on every quote, in percent.
    #[serde(default)]
    pub spread: SpreadPercent,

    /// Smallest bill the desk pays out.
    #[serde(default = "default_bill_denomination")]
    pub bill_denomination: Decimal,
}

fn default_base() -> Currency {
    Currency::USD
}

fn default_quote() -> Currency {
    Currency::EUR
}

fn default_bill_denomination() -> Decimal {
    Decimal::ONE
}

impl Default for ExchangeSettings {
    fn default() -> Self {
        Self {
            base: default_base(),
            quote: default_quote(),
            spread: SpreadPercent::ZERO,
            bill_denomination: default_bill_denomination(),
        }
    }
}

impl ExchangeSettings {
    /// Creates settings for a currency pair with default spread and bills.
    #[must_use]
    pub fn new(base: Currency, quote: Currency) -> Self {
        Self {
            base,
            quote,
            ..Self::default()
        }
    }

    /// Parses and validates settings from a TOML document.
    pub fn from_toml_str(input: &str) -> ExchangeResult<Self> {
        let settings: Self = toml::from_str(input)?;
        settings.validate()?;
        log::debug!(
            "loaded exchange settings {}/{} spread={} bill={}",
            settings.base,
            settings.quote,
            settings.spread,
            settings.bill_denomination
        );
        Ok(settings)
    }

    /// Sets the spread.
    #[must_use]
    pub fn with_spread(mut self, spread: SpreadPercent) -> Self {
        self.spread = spread;
        self
    }

    /// Sets the bill denomination.
    #[must_use]
    pub fn with_bill_denomination(mut self, denomination: Decimal) -> Self {
        self.bill_denomination = denomination;
        self
    }

    /// Validates the denomination and spread.
    pub fn validate(&self) -> ExchangeResult<()> {
        if self.bill_denomination <= Decimal::ZERO {
            return Err(ExchangeError::InvalidDenomination {
                value: self.bill_denomination,
                reason: "Bill denomination must be positive".into(),
            });
        }
        self.spread.validate()
    }

    /// Builds a validated quote at `rate` using these settings' pair and spread.
    pub fn quote(&self, rate: Decimal) -> ExchangeResult<ExchangeQuote> {
        let quote = ExchangeQuote::new(self.base, self.quote, rate).with_spread(self.spread);
        quote.validate()?;
        Ok(quote)
    }

    /// Returns the whole-bill value `budget` buys at `rate`, in this desk's
    /// bill denomination.
    pub fn exchangeable_value(&self, budget: Decimal, rate: Decimal) -> ExchangeResult<i64> {
        self.quote(rate)?
            .exchangeable_value(budget, self.bill_denomination)
    }
}
