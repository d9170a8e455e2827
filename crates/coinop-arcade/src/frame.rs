//! Frame snapshot for evaluating every rule at once.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rules;

/// Result of evaluating a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// All dots eaten under a winning ghost/pellet combination.
    Won,
    /// Touched a ghost without a power pellet.
    Lost,
    /// The game continues.
    Playing,
}

impl Outcome {
    /// Returns true if the game is over.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Playing)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Outcome::Won => "Won",
            Outcome::Lost => "Lost",
            Outcome::Playing => "Playing",
        };
        write!(f, "{name}")
    }
}

/// The flags observed on a single game frame.
///
/// # Example
///
/// ```rust
/// use coinop_arcade::{Frame, Outcome};
///
/// let frame = Frame::new().with_touching_ghost(true);
/// assert!(frame.loses());
/// assert_eq!(frame.outcome(), Outcome::Lost);
///
/// let powered = frame.with_power_pellet_active(true);
/// assert!(powered.eats_ghost());
/// assert_eq!(powered.outcome(), Outcome::Playing);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Frame {
    /// A power pellet is currently in effect.
    pub power_pellet_active: bool,
    /// Pac-Man is on a power pellet this frame.
    pub touching_power_pellet: bool,
    /// Pac-Man is touching a ghost.
    pub touching_ghost: bool,
    /// Pac-Man is on a dot this frame.
    pub touching_dot: bool,
    /// No dots remain on the board.
    pub has_eaten_all_dots: bool,
}

impl Frame {
    /// Number of distinct frames (one per flag combination).
    pub const COMBINATIONS: u8 = 32;

    /// Creates a frame with every flag cleared.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            power_pellet_active: false,
            touching_power_pellet: false,
            touching_ghost: false,
            touching_dot: false,
            has_eaten_all_dots: false,
        }
    }

    /// Builds a frame from the low five bits of `bits`.
    ///
    /// Bit 0 is `power_pellet_active`, then `touching_power_pellet`,
    /// `touching_ghost`, `touching_dot` and `has_eaten_all_dots`.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            power_pellet_active: bits & 0b00001 != 0,
            touching_power_pellet: bits & 0b00010 != 0,
            touching_ghost: bits & 0b00100 != 0,
            touching_dot: bits & 0b01000 != 0,
            has_eaten_all_dots: bits & 0b10000 != 0,
        }
    }

    /// Iterates every possible frame.
    pub fn all() -> impl Iterator<Item = Frame> {
        (0..Self::COMBINATIONS).map(Self::from_bits)
    }

    /// Sets whether a power pellet is active.
    #[must_use]
    pub fn with_power_pellet_active(mut self, active: bool) -> Self {
        self.power_pellet_active = active;
        self
    }

    /// Sets whether Pac-Man touches a power pellet.
    #[must_use]
    pub fn with_touching_power_pellet(mut self, touching: bool) -> Self {
        self.touching_power_pellet = touching;
        self
    }

    /// Sets whether Pac-Man touches a ghost.
    #[must_use]
    pub fn with_touching_ghost(mut self, touching: bool) -> Self {
        self.touching_ghost = touching;
        self
    }

    /// Sets whether Pac-Man touches a dot.
    #[must_use]
    pub fn with_touching_dot(mut self, touching: bool) -> Self {
        self.touching_dot = touching;
        self
    }

    /// Sets whether the board has been cleared of dots.
    #[must_use]
    pub fn with_all_dots_eaten(mut self, eaten: bool) -> Self {
        self.has_eaten_all_dots = eaten;
        self
    }

    /// See [`rules::eat_ghost`].
    #[must_use]
    pub fn eats_ghost(&self) -> bool {
        rules::eat_ghost(self.power_pellet_active, self.touching_ghost)
    }

    /// See [`rules::score`].
    #[must_use]
    pub fn scores(&self) -> bool {
        rules::score(self.touching_power_pellet, self.touching_dot)
    }

    /// See [`rules::lose`].
    #[must_use]
    pub fn loses(&self) -> bool {
        rules::lose(self.power_pellet_active, self.touching_ghost)
    }

    /// See [`rules::win`].
    #[must_use]
    pub fn wins(&self) -> bool {
        rules::win(
            self.has_eaten_all_dots,
            self.power_pellet_active,
            self.touching_ghost,
        )
    }

    /// Classifies the frame.
    ///
    /// `wins` and `loses` are never both true: losing needs a ghost without
    /// a pellet, which rules out both winning branches.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.wins() {
            Outcome::Won
        } else if self.loses() {
            Outcome::Lost
        } else {
            Outcome::Playing
        }
    }
}
