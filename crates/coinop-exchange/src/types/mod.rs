//! Domain types for currency exchange.
//!
//! - [`Currency`]: ISO currency codes
//! - [`SpreadPercent`]: Percentage markup applied to a rate
//! - [`ExchangeQuote`]: A priced currency pair with its spread
//! - [`BillBreakdown`]: An amount split into whole bills and a leftover

mod breakdown;
mod currency;
mod quote;
mod spread;

pub use breakdown::BillBreakdown;
pub use currency::Currency;
pub use quote::ExchangeQuote;
pub use spread::SpreadPercent;
