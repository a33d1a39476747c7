//! Touch gesture interpretation.

use std::time::Duration;

use glam::Vec2;
use light_cycle_core::Direction;
use tracing::debug;

/// Two taps closer together than this start a new board.
pub const DOUBLE_TAP_THRESHOLD: Duration = Duration::from_millis(100);

/// Maps a tap to the direction it points at relative to the surface center.
///
/// The dominant axis of the offset wins; ties go to the vertical axis.
#[must_use]
pub fn direction_from_touch(center: Vec2, touch: Vec2) -> Direction {
    let delta = center - touch;
    if delta.x.abs() > delta.y.abs() {
        if delta.x > 0.0 {
            Direction::West
        } else {
            Direction::East
        }
    } else if delta.y > 0.0 {
        Direction::North
    } else {
        Direction::South
    }
}

/// Outcome of a single tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    /// The tap completed a double tap.
    NewBoard,
    /// The tap steers the player.
    Steer(Direction),
    /// The tap is ignored.
    None,
}

/// Classifies taps into steering requests and double taps.
#[derive(Clone, Debug)]
pub struct TapTracker {
    user_control: bool,
    last_tap: Option<Duration>,
}

impl TapTracker {
    /// Creates a tracker. Taps are only interpreted with `user_control` set.
    #[must_use]
    pub const fn new(user_control: bool) -> Self {
        Self {
            user_control,
            last_tap: None,
        }
    }

    /// Whether taps may steer the player.
    #[must_use]
    pub const fn user_control(&self) -> bool {
        self.user_control
    }

    /// Enables or disables tap handling. Disabling forgets the pending tap.
    pub fn set_user_control(&mut self, user_control: bool) {
        self.user_control = user_control;
        if !user_control {
            self.last_tap = None;
        }
    }

    /// Classifies a tap at `touch` observed at time `at`, measured from any fixed origin.
    ///
    /// Without user control every tap is ignored, double taps included.
    pub fn tap(&mut self, at: Duration, center: Vec2, touch: Vec2) -> Gesture {
        if !self.user_control {
            return Gesture::None;
        }
        if let Some(previous) = self.last_tap.take() {
            if at.saturating_sub(previous) < DOUBLE_TAP_THRESHOLD {
                debug!("double tap");
                return Gesture::NewBoard;
            }
        }
        self.last_tap = Some(at);
        Gesture::Steer(direction_from_touch(center, touch))
    }
}
