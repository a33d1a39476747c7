use light_cycle_core::{Cell, Direction, Trail};

/// Mutable state of a single light cycle.
#[derive(Clone, Debug)]
pub(crate) struct Agent {
    pub(crate) trail: Trail,
    pub(crate) heading: Direction,
    /// Only the player ever receives a desired direction.
    pub(crate) desired: Option<Direction>,
    initial_heading: Direction,
}

impl Agent {
    pub(crate) fn new(initial_heading: Direction) -> Self {
        Self {
            trail: Trail::default(),
            heading: initial_heading,
            desired: None,
            initial_heading,
        }
    }

    pub(crate) fn head(&self) -> Option<Cell> {
        self.trail.head()
    }

    /// Restores the starting heading and reseeds the trail at `start`.
    /// Without a start cell the trail stays empty.
    pub(crate) fn reset(&mut self, start: Option<Cell>) {
        match start {
            Some(cell) => self.trail.reseed(cell),
            None => self.trail.clear(),
        }
        self.heading = self.initial_heading;
        self.desired = None;
    }
}
