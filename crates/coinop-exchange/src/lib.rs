//! # Coinop Exchange
//!
//! Currency exchange and bill-denomination arithmetic.
//!
//! This crate provides:
//!
//! - **Exchange**: Free functions converting a budget at a rate, computing
//!   change, and splitting amounts into whole bills
//! - **Types**: `Currency`, `SpreadPercent`, `ExchangeQuote` and `BillBreakdown`
//! - **Settings**: Desk defaults loadable from TOML
//!
//! ## Design Philosophy
//!
//! - **Decimal Money**: Amounts are `rust_decimal::Decimal`, never `f64`
//! - **Explicit Failure**: A zero rate or denomination is an error, not a panic
//! - **Floored Division**: Bill counts and leftovers floor toward negative
//!   infinity, so the leftover always takes the sign of the denomination
//!
//! ## Example
//!
//! ```rust
//! use coinop_exchange::prelude::*;
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! let budget = Decimal::from_str("127.5").unwrap();
//! let rate = Decimal::from_str("1.2").unwrap();
//!
//! let value = exchangeable_value(budget, rate, Decimal::from(10), Decimal::from(5)).unwrap();
//! assert_eq!(value, 95);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::needless_pass_by_value)]

pub mod config;
pub mod error;
pub mod exchange;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::ExchangeSettings;
    pub use crate::error::{ExchangeError, ExchangeResult};
    pub use crate::exchange::{
        exchange_money, exchangeable_value, get_change, get_leftover_of_bills,
        get_number_of_bills, get_value_of_bills,
    };
    pub use crate::types::{BillBreakdown, Currency, ExchangeQuote, SpreadPercent};
}

// Re-export commonly used types at crate root
pub use config::ExchangeSettings;
pub use error::{ExchangeError, ExchangeResult};
pub use types::{BillBreakdown, Currency, ExchangeQuote, SpreadPercent};
