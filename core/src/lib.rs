#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the light cycle engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values describing what
//! happened. Systems operate on the immutable values defined here: the
//! [`Board`], the [`Trail`] of each agent and the [`LayoutConfig`] snapshot the
//! board was derived from.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Width, in cells, of the open corridor that separates neighbouring icons.
pub const CORRIDOR_WIDTH: u32 = 2;

/// Default divisor controlling how often an agent turns while the road ahead is clear.
pub const DEFAULT_RANDOMNESS_DIVISOR: u32 = 250;

/// Largest number of cells a board may hold.
pub const MAX_BOARD_CELLS: u64 = 1 << 24;

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Replaces the active layout configuration wholesale.
    Reconfigure {
        /// Configuration snapshot produced by the adapter's settings store.
        config: LayoutConfig,
    },
    /// Reports that the drawable surface changed size.
    Resize {
        /// Surface width in pixels.
        width: u32,
        /// Surface height in pixels.
        height: u32,
    },
    /// Records the direction the user would like the player to travel in.
    SetDesiredDirection {
        /// Requested heading.
        direction: Direction,
    },
    /// Clears both trails and reseeds the agents without regenerating the board.
    RequestNewBoard,
    /// Advances the simulation by a single step.
    Tick,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Announces that a new board was derived from the active layout.
    BoardRegenerated {
        /// Number of cell columns on the new board.
        width: u32,
        /// Number of cell rows on the new board.
        height: u32,
        /// Number of wall rectangles prepared for rendering.
        walls: usize,
    },
    /// Reports that a configuration was rejected and the previous board retained.
    ReconfigureRejected {
        /// Reason the configuration failed validation.
        error: LayoutError,
    },
    /// Announces that the grid-to-surface transform was recomputed.
    ViewportChanged {
        /// Transform now in effect.
        viewport: Viewport,
    },
    /// Confirms that the player recorded a desired direction.
    DesiredDirectionSet {
        /// Direction that will be attempted on the next tick.
        direction: Direction,
    },
    /// Reports that the pending desired direction proved impossible and was dropped.
    DesiredDirectionCleared,
    /// Confirms that an agent moved into a new cell.
    AgentAdvanced {
        /// Agent that moved.
        agent: AgentKind,
        /// Head cell before the move.
        from: Cell,
        /// Head cell after the move.
        to: Cell,
        /// Heading used for the move.
        heading: Direction,
    },
    /// Announces that an agent crashed and the round ended.
    RoundOver {
        /// Agent whose move collided.
        cause: AgentKind,
        /// Cell the agent attempted to enter.
        cell: Cell,
    },
    /// Confirms that both agents were cleared and reseeded.
    AgentsReset {
        /// Trigger for the reset.
        reason: ResetReason,
    },
}

/// Identifies one of the two agents on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgentKind {
    /// Agent that honours user steering requests.
    Player,
    /// Purely AI-controlled agent.
    Opponent,
}

/// Reasons both agents may be reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResetReason {
    /// One of the agents collided.
    RoundOver,
    /// The user explicitly asked for a fresh start.
    NewBoard,
    /// The board was rebuilt from a new layout.
    Reconfigured,
}

/// Cardinal directions of travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    North,
    /// Movement toward increasing row indices.
    South,
    /// Movement toward increasing column indices.
    East,
    /// Movement toward decreasing column indices.
    West,
}

impl Direction {
    /// Every direction in the order used when enumerating alternatives.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Returns the direction pointing the opposite way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }
}

/// Location of a single grid cell. Coordinates may leave the board while
/// candidate moves are evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    x: i32,
    y: i32,
}

impl Cell {
    /// Creates a new cell coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Column of the cell.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Row of the cell.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Translates the cell by one unit along the provided direction.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::North => Self::new(self.x, self.y - 1),
            Direction::South => Self::new(self.x, self.y + 1),
            Direction::East => Self::new(self.x + 1, self.y),
            Direction::West => Self::new(self.x - 1, self.y),
        }
    }

    /// Reports whether `other` shares an edge with this cell.
    #[must_use]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

/// Moves `cell` one unit along `direction`, leaving it untouched when no
/// direction is provided.
#[must_use]
pub fn step(cell: Cell, direction: Option<Direction>) -> Cell {
    direction.map_or(cell, |direction| cell.step(direction))
}

/// State of a single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Traversable corridor cell.
    Open,
    /// Blocked cell.
    Wall,
}

/// Dense grid of tiles that agents move across.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl Board {
    /// Creates a board of the provided dimensions with every tile set to `tile`.
    #[must_use]
    pub fn filled(width: u32, height: u32, tile: Tile) -> Self {
        let capacity = usize::try_from(u64::from(width) * u64::from(height)).unwrap_or(0);
        Self {
            width,
            height,
            tiles: vec![tile; capacity],
        }
    }

    /// Number of cell columns.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of cell rows.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Tile stored at `cell`, or `None` when the cell lies outside the board.
    #[must_use]
    pub fn tile(&self, cell: Cell) -> Option<Tile> {
        self.index(cell)
            .and_then(|index| self.tiles.get(index).copied())
    }

    /// Overwrites the tile at `cell`. Cells outside the board are ignored.
    pub fn set(&mut self, cell: Cell, tile: Tile) {
        if let Some(index) = self.index(cell) {
            if let Some(slot) = self.tiles.get_mut(index) {
                *slot = tile;
            }
        }
    }

    /// Reports whether `cell` lies within the board and is open.
    #[must_use]
    pub fn is_open(&self, cell: Cell) -> bool {
        self.tile(cell) == Some(Tile::Open)
    }

    /// Iterator over every open cell in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let width = self.width.max(1);
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| **tile == Tile::Open)
            .filter_map(move |(index, _)| {
                let index = u32::try_from(index).ok()?;
                let x = i32::try_from(index % width).ok()?;
                let y = i32::try_from(index / width).ok()?;
                Some(Cell::new(x, y))
            })
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        let x = u32::try_from(cell.x()).ok()?;
        let y = u32::try_from(cell.y()).ok()?;
        if x < self.width && y < self.height {
            let row = usize::try_from(y).ok()?;
            let column = usize::try_from(x).ok()?;
            let width = usize::try_from(self.width).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}

/// Launcher widget footprint expressed in icon-grid units. Both bounds are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExcludedRegion {
    /// Leftmost icon column covered by the region.
    pub left: u32,
    /// Topmost icon row covered by the region.
    pub top: u32,
    /// Rightmost icon column covered by the region.
    pub right: u32,
    /// Bottommost icon row covered by the region.
    pub bottom: u32,
}

impl ExcludedRegion {
    /// Creates a region, normalising swapped bounds.
    #[must_use]
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left: left.min(right),
            top: top.min(bottom),
            right: left.max(right),
            bottom: top.max(bottom),
        }
    }

    /// Reports whether the icon slot at `column`, `row` lies under the region.
    #[must_use]
    pub fn covers(&self, column: u32, row: u32) -> bool {
        let region = Self::new(self.left, self.top, self.right, self.bottom);
        (region.left..=region.right).contains(&column)
            && (region.top..=region.bottom).contains(&row)
    }
}

/// Distance in pixels between the surface edges and the drawn grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    /// Space kept above the grid.
    pub top: f32,
    /// Space kept below the grid.
    pub bottom: f32,
    /// Space kept left of the grid.
    pub left: f32,
    /// Space kept right of the grid.
    pub right: f32,
}

/// Immutable snapshot of every parameter that shapes the simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Number of icon rows on the launcher.
    pub icon_rows: u32,
    /// Number of icon columns on the launcher.
    pub icon_cols: u32,
    /// Cells between consecutive icon rows, excluding the corridor.
    pub row_spacing: u32,
    /// Cells between consecutive icon columns, excluding the corridor.
    pub col_spacing: u32,
    /// Pixel padding around the drawn grid.
    pub padding: Padding,
    /// Widget footprints under which no corridor may exist.
    pub excluded_regions: Vec<ExcludedRegion>,
    /// An agent keeps going straight with probability `1 - 1 / randomness_divisor`.
    pub randomness_divisor: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            icon_rows: 4,
            icon_cols: 4,
            row_spacing: 1,
            col_spacing: 1,
            padding: Padding::default(),
            excluded_regions: Vec::new(),
            randomness_divisor: DEFAULT_RANDOMNESS_DIVISOR,
        }
    }
}

impl LayoutConfig {
    /// Validates the configuration, reporting the first violated constraint.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.icon_rows == 0 || self.icon_cols == 0 {
            return Err(LayoutError::InvalidLayout {
                icon_rows: self.icon_rows,
                icon_cols: self.icon_cols,
            });
        }
        if self.randomness_divisor == 0 {
            return Err(LayoutError::InvalidRandomnessDivisor);
        }
        self.check_board_size()
    }

    /// Rejects layouts whose board would exceed [`MAX_BOARD_CELLS`].
    pub fn check_board_size(&self) -> Result<(), LayoutError> {
        let corridor = u64::from(CORRIDOR_WIDTH);
        let extent = |count: u32, spacing: u32| {
            u64::from(count)
                .saturating_mul(u64::from(spacing) + corridor)
                .saturating_add(corridor)
        };
        let width = extent(self.icon_cols, self.col_spacing);
        let height = extent(self.icon_rows, self.row_spacing);
        if width.saturating_mul(height) > MAX_BOARD_CELLS {
            return Err(LayoutError::BoardTooLarge { width, height });
        }
        Ok(())
    }

    /// Horizontal distance in cells between the starts of neighbouring icon columns.
    #[must_use]
    pub const fn column_period(&self) -> u32 {
        self.col_spacing + CORRIDOR_WIDTH
    }

    /// Vertical distance in cells between the starts of neighbouring icon rows.
    #[must_use]
    pub const fn row_period(&self) -> u32 {
        self.row_spacing + CORRIDOR_WIDTH
    }

    /// Board dimensions as `(width, height)` in cells.
    #[must_use]
    pub fn board_dimensions(&self) -> (u32, u32) {
        let width = self
            .icon_cols
            .saturating_mul(self.column_period())
            .saturating_add(CORRIDOR_WIDTH);
        let height = self
            .icon_rows
            .saturating_mul(self.row_period())
            .saturating_add(CORRIDOR_WIDTH);
        (width, height)
    }

    /// Reports whether `other` would produce a different board.
    #[must_use]
    pub fn shape_differs(&self, other: &LayoutConfig) -> bool {
        self.icon_rows != other.icon_rows
            || self.icon_cols != other.icon_cols
            || self.row_spacing != other.row_spacing
            || self.col_spacing != other.col_spacing
            || self.excluded_regions != other.excluded_regions
    }
}

/// Errors raised while validating a [`LayoutConfig`].
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum LayoutError {
    /// Icon row and column counts must be positive.
    #[error("icon grid must be at least 1x1 (received {icon_cols}x{icon_rows})")]
    InvalidLayout {
        /// Provided icon row count.
        icon_rows: u32,
        /// Provided icon column count.
        icon_cols: u32,
    },
    /// The randomness divisor must be positive.
    #[error("randomness divisor must be positive")]
    InvalidRandomnessDivisor,
    /// The derived board holds more than [`MAX_BOARD_CELLS`] cells.
    #[error("board of {width}x{height} cells exceeds the supported size")]
    BoardTooLarge {
        /// Requested board width in cells.
        width: u64,
        /// Requested board height in cells.
        height: u64,
    },
}

/// Rectangle in grid units drawn to visualise blocked areas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WallRect {
    origin: Cell,
    width: u32,
    height: u32,
}

impl WallRect {
    /// Constructs a rectangle from its upper-left cell and size.
    #[must_use]
    pub const fn new(origin: Cell, width: u32, height: u32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Upper-left cell of the rectangle.
    #[must_use]
    pub const fn origin(&self) -> Cell {
        self.origin
    }

    /// Width of the rectangle in cells.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height of the rectangle in cells.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Reports whether the rectangle covers `cell`.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        let dx = i64::from(cell.x()) - i64::from(self.origin.x());
        let dy = i64::from(cell.y()) - i64::from(self.origin.y());
        dx >= 0 && dy >= 0 && dx < i64::from(self.width) && dy < i64::from(self.height)
    }
}

/// Chronological history of the cells an agent has occupied.
///
/// The ordered history is authoritative; a hash index mirrors it so that
/// collision checks stay constant time as the trail grows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trail {
    cells: Vec<Cell>,
    index: HashSet<Cell>,
}

impl Trail {
    /// Creates a trail containing a single cell.
    #[must_use]
    pub fn seeded(cell: Cell) -> Self {
        let mut trail = Self::default();
        trail.push(cell);
        trail
    }

    /// Most recently occupied cell.
    #[must_use]
    pub fn head(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// Oldest surviving cell.
    #[must_use]
    pub fn tail(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    /// Appends `cell` as the new head.
    pub fn push(&mut self, cell: Cell) {
        if self.index.insert(cell) {
            self.cells.push(cell);
        }
    }

    /// Clears the trail and seeds it with `cell`.
    pub fn reseed(&mut self, cell: Cell) {
        self.clear();
        self.push(cell);
    }

    /// Removes every cell.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.index.clear();
    }

    /// Reports whether the trail passes through `cell`.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.index.contains(&cell)
    }

    /// Cells in the order they were occupied.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells in the trail.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Reports whether the trail holds no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Reports whether entering `cell` would crash: the cell is closed or lies
/// outside `board`, or any of `trails` already passes through it.
#[must_use]
pub fn collides(cell: Cell, board: &Board, trails: &[&Trail]) -> bool {
    !board.is_open(cell) || trails.iter().any(|trail| trail.contains(cell))
}

/// Grid-to-surface transform derived from the board and the drawable surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Pixels per cell along the board's horizontal axis.
    pub scale_x: f32,
    /// Pixels per cell along the board's vertical axis.
    pub scale_y: f32,
    /// Whether the surface is wider than tall, which rotates the board a quarter turn.
    pub landscape: bool,
    /// Surface width after the landscape swap.
    pub surface_width: f32,
    /// Surface height after the landscape swap.
    pub surface_height: f32,
    /// Padding the transform was computed with.
    pub padding: Padding,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn step_then_opposite_returns_to_origin() {
        let cells = [Cell::new(0, 0), Cell::new(-3, 7), Cell::new(12, -1)];
        for cell in cells {
            for direction in Direction::ALL {
                let moved = cell.step(direction);
                assert!(cell.is_adjacent(moved));
                assert_eq!(moved.step(direction.opposite()), cell);
            }
        }
    }

    #[test]
    fn missing_direction_leaves_cell_in_place() {
        let cell = Cell::new(4, 4);
        assert_eq!(step(cell, None), cell);
        assert_eq!(step(cell, Some(Direction::North)), Cell::new(4, 3));
    }

    #[test]
    fn is_open_rejects_cells_outside_board() {
        let board = Board::filled(3, 2, Tile::Open);
        assert!(board.is_open(Cell::new(2, 1)));
        assert!(!board.is_open(Cell::new(-1, 0)));
        assert!(!board.is_open(Cell::new(0, -1)));
        assert!(!board.is_open(Cell::new(3, 0)));
        assert!(!board.is_open(Cell::new(0, 2)));
    }

    #[test]
    fn open_cells_enumerate_in_row_major_order() {
        let mut board = Board::filled(2, 2, Tile::Wall);
        board.set(Cell::new(1, 0), Tile::Open);
        board.set(Cell::new(0, 1), Tile::Open);
        board.set(Cell::new(5, 5), Tile::Open);

        let open: Vec<Cell> = board.open_cells().collect();
        assert_eq!(open, vec![Cell::new(1, 0), Cell::new(0, 1)]);
    }

    #[test]
    fn trail_tracks_head_tail_and_membership() {
        let mut trail = Trail::seeded(Cell::new(1, 1));
        trail.push(Cell::new(2, 1));
        trail.push(Cell::new(2, 1));

        assert_eq!(trail.len(), 2);
        assert_eq!(trail.head(), Some(Cell::new(2, 1)));
        assert_eq!(trail.tail(), Some(Cell::new(1, 1)));
        assert!(trail.contains(Cell::new(1, 1)));

        trail.reseed(Cell::new(7, 7));
        assert_eq!(trail.cells(), &[Cell::new(7, 7)]);
        assert!(!trail.contains(Cell::new(1, 1)));
    }

    #[test]
    fn collides_checks_board_and_every_trail() {
        let board = Board::filled(4, 4, Tile::Open);
        let mine = Trail::seeded(Cell::new(0, 0));
        let theirs = Trail::seeded(Cell::new(3, 3));

        assert!(collides(Cell::new(0, 0), &board, &[&theirs, &mine]));
        assert!(collides(Cell::new(3, 3), &board, &[&theirs, &mine]));
        assert!(collides(Cell::new(4, 0), &board, &[&theirs, &mine]));
        assert!(!collides(Cell::new(1, 1), &board, &[&theirs, &mine]));
        assert_eq!(
            collides(Cell::new(3, 3), &board, &[&mine, &theirs]),
            collides(Cell::new(3, 3), &board, &[&theirs, &mine])
        );
    }

    #[test]
    fn layout_validation_rejects_empty_icon_grid() {
        let config = LayoutConfig {
            icon_rows: 0,
            ..LayoutConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(LayoutError::InvalidLayout {
                icon_rows: 0,
                icon_cols: 4
            })
        );

        let config = LayoutConfig {
            randomness_divisor: 0,
            ..LayoutConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(LayoutError::InvalidRandomnessDivisor)
        );
    }

    #[test]
    fn layout_validation_rejects_oversized_boards() {
        let config = LayoutConfig {
            icon_rows: 200_000,
            icon_cols: 200_000,
            ..LayoutConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(LayoutError::BoardTooLarge {
                width: 600_002,
                height: 600_002,
            })
        );

        let config = LayoutConfig {
            icon_rows: 1,
            icon_cols: 1,
            col_spacing: u32::MAX,
            ..LayoutConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LayoutError::BoardTooLarge { .. })
        ));

        let config = LayoutConfig {
            icon_rows: 100,
            icon_cols: 100,
            ..LayoutConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn board_dimensions_follow_icon_period() {
        let config = LayoutConfig {
            icon_rows: 5,
            icon_cols: 4,
            row_spacing: 3,
            col_spacing: 1,
            ..LayoutConfig::default()
        };
        assert_eq!(
            config.board_dimensions(),
            (
                4 * (1 + CORRIDOR_WIDTH) + CORRIDOR_WIDTH,
                5 * (3 + CORRIDOR_WIDTH) + CORRIDOR_WIDTH
            )
        );
    }

    #[test]
    fn shape_difference_ignores_padding_and_divisor() {
        let base = LayoutConfig::default();
        let cosmetic = LayoutConfig {
            padding: Padding {
                top: 10.0,
                ..Padding::default()
            },
            randomness_divisor: 3,
            ..base.clone()
        };
        let reshaped = LayoutConfig {
            excluded_regions: vec![ExcludedRegion::new(0, 0, 1, 1)],
            ..base.clone()
        };

        assert!(!base.shape_differs(&cosmetic));
        assert!(base.shape_differs(&reshaped));
    }

    #[test]
    fn excluded_region_normalises_swapped_bounds() {
        let region = ExcludedRegion::new(3, 2, 1, 0);
        assert_eq!(region, ExcludedRegion::new(1, 0, 3, 2));
        assert!(region.covers(2, 1));
        assert!(!region.covers(0, 1));
    }

    #[test]
    fn wall_rect_contains_only_its_footprint() {
        let rect = WallRect::new(Cell::new(2, 3), 2, 1);
        assert!(rect.contains(Cell::new(3, 3)));
        assert!(!rect.contains(Cell::new(4, 3)));
        assert!(!rect.contains(Cell::new(2, 4)));
    }

    #[test]
    fn layout_config_round_trips_through_bincode() {
        let config = LayoutConfig {
            excluded_regions: vec![ExcludedRegion::new(0, 0, 1, 0)],
            padding: Padding {
                top: 24.0,
                bottom: 50.0,
                left: 0.0,
                right: 0.0,
            },
            ..LayoutConfig::default()
        };
        let bytes = bincode::serialize(&config).expect("serialize");
        let restored: LayoutConfig = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(restored, config);
    }
}
