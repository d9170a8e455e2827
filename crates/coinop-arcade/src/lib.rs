//! # Coinop Arcade
//!
//! Rule predicates for a simplified Pac-Man style arcade game.
//!
//! This crate provides:
//!
//! - **Rules**: Free functions deciding whether Pac-Man eats a ghost, scores,
//!   loses or wins, given the flags of the current frame
//! - **Frame**: A typed snapshot of those flags that evaluates every rule at once
//!
//! Everything here is pure boolean algebra: no state, no errors.
//!
//! ## Example
//!
//! ```rust
//! use coinop_arcade::prelude::*;
//!
//! assert!(eat_ghost(true, true));
//! assert!(lose(false, true));
//!
//! let frame = Frame::new().with_all_dots_eaten(true);
//! assert_eq!(frame.outcome(), Outcome::Won);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::fn_params_excessive_bools)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::nonminimal_bool)]

pub mod frame;
pub mod rules;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::frame::{Frame, Outcome};
    pub use crate::rules::{eat_ghost, lose, score, win};
}

pub use frame::{Frame, Outcome};
pub use rules::{eat_ghost, lose, score, win};
