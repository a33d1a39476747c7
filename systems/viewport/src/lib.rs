#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Grid-to-surface transform used by rendering adapters.
//!
//! Surfaces wider than tall are treated as a rotated portrait layout: the
//! dimensions are swapped and the board is turned a quarter turn counter
//! clockwise. In that orientation the top padding is the only one absorbed by
//! the board's horizontal axis while bottom, left and right all shrink the
//! vertical axis.

use glam::Vec2;
use light_cycle_core::{Padding, Viewport};

/// Computes the transform mapping a `board_width` x `board_height` grid onto
/// a `surface_width` x `surface_height` pixel surface.
#[must_use]
pub fn fit(
    board_width: u32,
    board_height: u32,
    surface_width: u32,
    surface_height: u32,
    padding: Padding,
) -> Viewport {
    let landscape = surface_width > surface_height;
    let (width, height) = if landscape {
        (surface_height as f32, surface_width as f32)
    } else {
        (surface_width as f32, surface_height as f32)
    };

    let (horizontal_padding, vertical_padding) = if landscape {
        (padding.top, padding.bottom + padding.left + padding.right)
    } else {
        (padding.left + padding.right, padding.top + padding.bottom)
    };

    Viewport {
        scale_x: axis_scale(width - horizontal_padding, board_width),
        scale_y: axis_scale(height - vertical_padding, board_height),
        landscape,
        surface_width: width,
        surface_height: height,
        padding,
    }
}

/// Maps a point in grid units to surface pixels.
#[must_use]
pub fn project(viewport: &Viewport, point: Vec2) -> Vec2 {
    let scaled = Vec2::new(point.x * viewport.scale_x, point.y * viewport.scale_y);
    if viewport.landscape {
        Vec2::new(
            viewport.padding.left + scaled.y,
            viewport.surface_width - scaled.x,
        )
    } else {
        Vec2::new(
            viewport.padding.left + scaled.x,
            viewport.padding.top + scaled.y,
        )
    }
}

/// Maps an axis-aligned grid rectangle to its surface bounds as `(min, max)`.
#[must_use]
pub fn project_rect(viewport: &Viewport, origin: Vec2, size: Vec2) -> (Vec2, Vec2) {
    let first = project(viewport, origin);
    let second = project(viewport, origin + size);
    (first.min(second), first.max(second))
}

fn axis_scale(available: f32, cells: u32) -> f32 {
    if cells == 0 || available <= 0.0 {
        return 0.0;
    }
    available / cells as f32
}
