//! # Coinop
//!
//! Facade over the Coinop crates:
//!
//! - [`arcade`]: eat/score/lose/win predicates for a Pac-Man style game
//! - [`exchange`]: currency exchange and bill-denomination arithmetic
//!
//! The two halves share nothing; depend on `coinop-arcade` or
//! `coinop-exchange` directly to pull in only one of them.
//!
//! ## Example
//!
//! ```rust
//! use coinop::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! assert!(win(true, true, true));
//!
//! let value = exchangeable_value(dec!(127.5), dec!(1.2), dec!(10), dec!(5)).unwrap();
//! assert_eq!(value, 95);
//! ```

#![warn(missing_docs)]

pub use coinop_arcade as arcade;
pub use coinop_exchange as exchange;

/// Prelude re-exporting both crates' preludes.
pub mod prelude {
    pub use coinop_arcade::prelude::*;
    pub use coinop_exchange::prelude::*;
}
