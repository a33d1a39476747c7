#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Single-step steering policy shared by the player and the opponent.
//!
//! Each tick an agent first honours a pending user request when the requested
//! cell is free. Otherwise it keeps its heading with probability
//! `1 - 1 / randomness_divisor` while the cell ahead is free. Otherwise it
//! picks uniformly among the directions that do not crash, leaving out the
//! current heading when the agent chose to deviate from a clear path. The
//! policy draws from a caller-supplied random source so that replays with a
//! seeded generator are reproducible.

use light_cycle_core::{Cell, Direction, DEFAULT_RANDOMNESS_DIVISOR};
use rand::Rng;

/// Heading adopted when every direction leads into a collision.
pub const FALLBACK_HEADING: Direction = Direction::North;

/// Outcome of a steering decision for a single agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    /// Heading the agent should move along this tick.
    pub heading: Direction,
    /// Whether the pending desired direction proved impossible and must be dropped.
    pub clear_desired: bool,
}

/// Pure steering policy parameterised by the randomness divisor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Steering {
    randomness_divisor: u32,
}

impl Default for Steering {
    fn default() -> Self {
        Self::new(DEFAULT_RANDOMNESS_DIVISOR)
    }
}

impl Steering {
    /// Creates a policy that deviates from a clear path once every
    /// `randomness_divisor` draws on average. Zero is treated as one.
    #[must_use]
    pub const fn new(randomness_divisor: u32) -> Self {
        let randomness_divisor = if randomness_divisor == 0 {
            1
        } else {
            randomness_divisor
        };
        Self { randomness_divisor }
    }

    /// Divisor controlling how often a clear path is abandoned.
    #[must_use]
    pub const fn randomness_divisor(&self) -> u32 {
        self.randomness_divisor
    }

    /// Chooses the heading for an agent whose head sits at `head`.
    ///
    /// `is_blocked` reports whether entering a cell would crash. `desired` is
    /// only ever provided for the player.
    pub fn resolve<R, F>(
        &self,
        head: Cell,
        heading: Direction,
        desired: Option<Direction>,
        rng: &mut R,
        is_blocked: F,
    ) -> Decision
    where
        R: Rng + ?Sized,
        F: Fn(Cell) -> bool,
    {
        if let Some(wanted) = desired {
            if !is_blocked(head.step(wanted)) {
                return Decision {
                    heading: wanted,
                    clear_desired: false,
                };
            }
        }

        let resolved = self.choose_heading(head, heading, rng, &is_blocked);

        Decision {
            heading: resolved,
            clear_desired: desired.is_some() && resolved != heading,
        }
    }

    fn choose_heading<R, F>(
        &self,
        head: Cell,
        heading: Direction,
        rng: &mut R,
        is_blocked: &F,
    ) -> Direction
    where
        R: Rng + ?Sized,
        F: Fn(Cell) -> bool,
    {
        let straight_free = !is_blocked(head.step(heading));
        if straight_free && rng.gen_range(0..self.randomness_divisor) != 0 {
            return heading;
        }

        let mut candidates = [FALLBACK_HEADING; 4];
        let mut count = 0;
        for direction in Direction::ALL {
            // A deviation never continues straight ahead.
            if straight_free && direction == heading {
                continue;
            }
            if !is_blocked(head.step(direction)) {
                candidates[count] = direction;
                count += 1;
            }
        }

        match count {
            0 if straight_free => heading,
            0 => FALLBACK_HEADING,
            _ => candidates[rng.gen_range(0..count)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_divisor_is_clamped() {
        assert_eq!(Steering::new(0).randomness_divisor(), 1);
        assert_eq!(Steering::default().randomness_divisor(), 250);
    }
}
