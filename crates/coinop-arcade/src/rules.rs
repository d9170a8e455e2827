//! Arcade game rules.
//!
//! Each rule is a pure predicate over the flags describing a single frame.
//! The engine driving the game decides when to sample the flags; these
//! functions only answer "what happens now".

/// Returns true if Pac-Man can eat the ghost it is touching.
///
/// A ghost is eaten only while a power pellet is active.
///
/// # Example
///
/// ```rust
/// use coinop_arcade::rules::eat_ghost;
///
/// assert!(eat_ghost(true, true));
/// assert!(!eat_ghost(false, true));
/// ```
#[must_use]
pub fn eat_ghost(power_pellet_active: bool, touching_ghost: bool) -> bool {
    power_pellet_active && touching_ghost
}

/// Returns true if Pac-Man scores on this frame.
///
/// Touching either a power pellet or a dot scores.
#[must_use]
pub fn score(touching_power_pellet: bool, touching_dot: bool) -> bool {
    touching_power_pellet || touching_dot
}

/// Returns true if Pac-Man loses: touching a ghost with no power pellet active.
#[must_use]
pub fn lose(power_pellet_active: bool, touching_ghost: bool) -> bool {
    !power_pellet_active && touching_ghost
}

/// Returns true if Pac-Man wins.
///
/// Winning requires every dot to be eaten, and then either a quiet board
/// (no pellet active, no ghost touched) or a pellet-powered ghost capture
/// on the same frame.
///
/// # Example
///
/// ```rust
/// use coinop_arcade::rules::win;
///
/// assert!(win(true, false, false));
/// assert!(!win(true, false, true));
/// assert!(win(true, true, true));
/// ```
#[must_use]
pub fn win(has_eaten_all_dots: bool, power_pellet_active: bool, touching_ghost: bool) -> bool {
    has_eaten_all_dots
        && ((!power_pellet_active && !touching_ghost) || (power_pellet_active && touching_ghost))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOLS: [bool; 2] = [false, true];

    #[test]
    fn test_eat_ghost() {
        assert!(eat_ghost(true, true));
        assert!(!eat_ghost(false, true));
        assert!(!eat_ghost(true, false));
        assert!(!eat_ghost(false, false));
    }

    #[test]
    fn test_score() {
        assert!(score(true, false));
        assert!(score(false, true));
        assert!(score(true, true));
        assert!(!score(false, false));
    }

    #[test]
    fn test_lose() {
        assert!(lose(false, true));
        assert!(!lose(true, true));
        assert!(!lose(false, false));
        assert!(!lose(true, false));
    }

    #[test]
    fn test_win() {
        assert!(win(true, false, false));
        assert!(!win(true, false, true));
        assert!(win(true, true, true));
        assert!(!win(true, true, false));
    }

    #[test]
    fn test_no_win_with_dots_left() {
        for pellet in BOOLS {
            for ghost in BOOLS {
                assert!(!win(false, pellet, ghost));
            }
        }
    }

    #[test]
    fn test_win_is_pellet_ghost_equivalence() {
        // With every dot gone, winning means the pellet and ghost flags agree.
        for pellet in BOOLS {
            for ghost in BOOLS {
                assert_eq!(win(true, pellet, ghost), pellet == ghost);
            }
        }
    }

    #[test]
    fn test_eat_and_lose_partition_ghost_contact() {
        for pellet in BOOLS {
            assert!(eat_ghost(pellet, true) ^ lose(pellet, true));
            assert!(!eat_ghost(pellet, false) && !lose(pellet, false));
        }
    }
}
