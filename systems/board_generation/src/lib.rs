#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure board generation system that derives the corridor lattice from a launcher layout.
//!
//! Icons occupy closed blocks of `spacing` cells; the [`CORRIDOR_WIDTH`]-wide
//! bands between them are open. Launcher widgets are described by
//! [`ExcludedRegion`] values and close every corridor that runs beneath them.

use light_cycle_core::{
    Board, Cell, ExcludedRegion, LayoutConfig, LayoutError, Tile, WallRect, CORRIDOR_WIDTH,
};

/// Board and render geometry produced from a single layout.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GeneratedBoard {
    board: Board,
    walls: Vec<WallRect>,
}

impl GeneratedBoard {
    /// Open/wall grid agents move across.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Wall rectangles: excluded regions first, then uncovered icon slots in row-major order.
    #[must_use]
    pub fn walls(&self) -> &[WallRect] {
        &self.walls
    }

    /// Consumes the generated data, yielding the board and wall rectangles.
    #[must_use]
    pub fn into_parts(self) -> (Board, Vec<WallRect>) {
        (self.board, self.walls)
    }
}

/// Derives the board and its wall rectangles from `config`.
///
/// Only the icon counts and the resulting board size are validated; every
/// other field is accepted as is.
pub fn generate(config: &LayoutConfig) -> Result<GeneratedBoard, LayoutError> {
    if config.icon_rows == 0 || config.icon_cols == 0 {
        return Err(LayoutError::InvalidLayout {
            icon_rows: config.icon_rows,
            icon_cols: config.icon_cols,
        });
    }
    config.check_board_size()?;

    let (width, height) = config.board_dimensions();
    let column_period = config.column_period();
    let row_period = config.row_period();

    let mut board = Board::filled(width, height, Tile::Wall);
    for y in 0..height {
        for x in 0..width {
            if x % column_period < CORRIDOR_WIDTH || y % row_period < CORRIDOR_WIDTH {
                board.set(cell_at(x, y), Tile::Open);
            }
        }
    }

    let mut walls = Vec::with_capacity(config.excluded_regions.len());
    for region in &config.excluded_regions {
        let Some(footprint) = region_footprint(config, region) else {
            continue;
        };
        close_footprint(&mut board, &footprint);
        walls.push(footprint.to_wall_rect());
    }

    for row in 0..config.icon_rows {
        for column in 0..config.icon_cols {
            let covered = config
                .excluded_regions
                .iter()
                .any(|region| region.covers(column, row));
            if covered {
                continue;
            }
            let origin = cell_at(
                column * column_period + CORRIDOR_WIDTH,
                row * row_period + CORRIDOR_WIDTH,
            );
            walls.push(WallRect::new(origin, config.col_spacing, config.row_spacing));
        }
    }

    Ok(GeneratedBoard { board, walls })
}

/// Inclusive cell bounds of an excluded region after clamping to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Footprint {
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
}

impl Footprint {
    fn to_wall_rect(self) -> WallRect {
        WallRect::new(
            cell_at(self.left, self.top),
            self.right - self.left + 1,
            self.bottom - self.top + 1,
        )
    }
}

/// The region spans the icons it covers plus one full corridor on every edge.
fn region_footprint(config: &LayoutConfig, region: &ExcludedRegion) -> Option<Footprint> {
    let region = ExcludedRegion::new(region.left, region.top, region.right, region.bottom);
    let (width, height) = config.board_dimensions();
    let (left, right) = axis_span(region.left, region.right, config.column_period(), width)?;
    let (top, bottom) = axis_span(region.top, region.bottom, config.row_period(), height)?;
    Some(Footprint {
        left,
        top,
        right,
        bottom,
    })
}

fn axis_span(first: u32, last: u32, period: u32, extent: u32) -> Option<(u32, u32)> {
    let start = u64::from(first) * u64::from(period);
    let end = (u64::from(last) + 1) * u64::from(period) + u64::from(CORRIDOR_WIDTH) - 1;
    let limit = u64::from(extent.checked_sub(1)?);
    if start > limit {
        return None;
    }
    let start = u32::try_from(start).ok()?;
    let end = u32::try_from(end.min(limit)).ok()?;
    Some((start, end))
}

fn close_footprint(board: &mut Board, footprint: &Footprint) {
    for y in footprint.top..=footprint.bottom {
        for x in footprint.left..=footprint.right {
            board.set(cell_at(x, y), Tile::Wall);
        }
    }
}

fn cell_at(x: u32, y: u32) -> Cell {
    Cell::new(
        i32::try_from(x).unwrap_or(i32::MAX),
        i32::try_from(y).unwrap_or(i32::MAX),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_span_includes_trailing_corridor() {
        assert_eq!(axis_span(0, 0, 3, 14), Some((0, 4)));
        assert_eq!(axis_span(1, 2, 3, 14), Some((3, 10)));
    }

    #[test]
    fn axis_span_clamps_to_extent() {
        assert_eq!(axis_span(3, 9, 3, 14), Some((9, 13)));
        assert_eq!(axis_span(5, 6, 3, 14), None);
    }
}
