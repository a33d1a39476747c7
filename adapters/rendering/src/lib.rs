#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for light cycle adapters.
//!
//! Adapters capture a [`Scene`] from the world after every tick and turn it
//! into surface-space [`Quad`]s. No drawing happens here; backends only need
//! to fill or outline the rectangles they are handed.

pub mod input;

use glam::Vec2;
use light_cycle_core::{AgentKind, Cell, Viewport, WallRect};
use light_cycle_system_viewport::project_rect;
use light_cycle_world::{query, World};

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Creates a color from a packed `0xAARRGGBB` value.
    #[must_use]
    pub const fn from_argb(packed: u32) -> Self {
        Self {
            red: ((packed >> 16) & 0xff) as f32 / 255.0,
            green: ((packed >> 8) & 0xff) as f32 / 255.0,
            blue: (packed & 0xff) as f32 / 255.0,
            alpha: ((packed >> 24) & 0xff) as f32 / 255.0,
        }
    }
}

/// Colors used to present a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Fill applied to the whole surface before anything else.
    pub background: Color,
    /// Outline color of the wall rectangles.
    pub walls: Color,
    /// Fill of the player's trail.
    pub player: Color,
    /// Fill of the opponent's trail.
    pub opponent: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::from_argb(0xff00_0000),
            walls: Color::from_argb(0xff1e_2a3c),
            player: Color::from_argb(0xff6f_c3df),
            opponent: Color::from_argb(0xffdf_740c),
        }
    }
}

/// Snapshot of one agent's trail together with the color it is drawn in.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailPresentation {
    /// Cells occupied by the trail, oldest first.
    pub cells: Vec<Cell>,
    /// Fill applied to every cell.
    pub color: Color,
}

/// Wall rectangle paired with the color used to outline it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallPresentation {
    /// Rectangle in grid units.
    pub rect: WallRect,
    /// Outline color.
    pub color: Color,
}

/// How a [`Quad`] should be painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuadStyle {
    /// The rectangle is filled.
    Filled,
    /// Only the rectangle's border is stroked.
    Outlined,
}

/// Axis-aligned rectangle in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    /// Top-left corner.
    pub min: Vec2,
    /// Bottom-right corner.
    pub max: Vec2,
    /// Paint color.
    pub color: Color,
    /// Fill or outline.
    pub style: QuadStyle,
}

/// Everything a backend needs to present one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Grid-to-surface transform, absent until the surface size is known.
    pub viewport: Option<Viewport>,
    /// Surface fill color.
    pub background: Color,
    /// Player trail.
    pub player: TrailPresentation,
    /// Opponent trail.
    pub opponent: TrailPresentation,
    /// Wall rectangles derived from the icon grid.
    pub walls: Vec<WallPresentation>,
    /// Whether wall outlines are drawn at all.
    pub show_walls: bool,
}

impl Scene {
    /// Captures the current world state using `palette`. Walls start hidden.
    #[must_use]
    pub fn capture(world: &World, palette: &Palette) -> Self {
        let trail = |agent, color| TrailPresentation {
            cells: query::trail(world, agent).cells().to_vec(),
            color,
        };

        Self {
            viewport: query::viewport(world),
            background: palette.background,
            player: trail(AgentKind::Player, palette.player),
            opponent: trail(AgentKind::Opponent, palette.opponent),
            walls: query::walls(world)
                .iter()
                .map(|rect| WallPresentation {
                    rect: *rect,
                    color: palette.walls,
                })
                .collect(),
            show_walls: false,
        }
    }

    /// Toggles wall outlines.
    #[must_use]
    pub fn with_walls(mut self, show_walls: bool) -> Self {
        self.show_walls = show_walls;
        self
    }

    /// Filled unit squares for every trail cell, player first.
    #[must_use]
    pub fn trail_quads(&self) -> Vec<Quad> {
        let Some(viewport) = self.viewport else {
            return Vec::new();
        };

        [&self.player, &self.opponent]
            .into_iter()
            .flat_map(|trail| {
                trail.cells.iter().map(move |cell| {
                    let origin = Vec2::new(cell.x() as f32, cell.y() as f32);
                    let (min, max) = project_rect(&viewport, origin, Vec2::ONE);
                    Quad {
                        min,
                        max,
                        color: trail.color,
                        style: QuadStyle::Filled,
                    }
                })
            })
            .collect()
    }

    /// Outlined wall rectangles, or nothing while walls are hidden.
    #[must_use]
    pub fn wall_quads(&self) -> Vec<Quad> {
        let Some(viewport) = self.viewport else {
            return Vec::new();
        };
        if !self.show_walls {
            return Vec::new();
        }

        self.walls
            .iter()
            .map(|wall| {
                let origin = Vec2::new(wall.rect.origin().x() as f32, wall.rect.origin().y() as f32);
                let size = Vec2::new(wall.rect.width() as f32, wall.rect.height() as f32);
                let (min, max) = project_rect(&viewport, origin, size);
                Quad {
                    min,
                    max,
                    color: wall.color,
                    style: QuadStyle::Outlined,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use light_cycle_core::{Command, LayoutConfig};
    use light_cycle_world::apply;

    use super::*;

    fn sized_world() -> World {
        let mut world = World::with_seed(LayoutConfig::default(), 3).expect("valid layout");
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::Resize {
                width: 480,
                height: 800,
            },
            &mut events,
        );
        world
    }

    #[test]
    fn packed_colors_unpack_channels() {
        let color = Color::from_argb(0x80ff_0000);
        assert_eq!(color.red, 1.0);
        assert_eq!(color.green, 0.0);
        assert!((color.alpha - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(Color::from_argb(0xff00_ff00), Color::from_rgb_u8(0, 255, 0));
    }

    #[test]
    fn scene_without_surface_has_no_quads() {
        let world = World::with_seed(LayoutConfig::default(), 3).expect("valid layout");
        let scene = Scene::capture(&world, &Palette::default()).with_walls(true);

        assert!(scene.viewport.is_none());
        assert!(scene.trail_quads().is_empty());
        assert!(scene.wall_quads().is_empty());
    }

    #[test]
    fn trail_quads_cover_each_cell_in_agent_order() {
        let world = sized_world();
        let palette = Palette::default();
        let scene = Scene::capture(&world, &palette);
        let quads = scene.trail_quads();

        assert_eq!(quads.len(), 2);
        assert_eq!(quads[0].color, palette.player);
        assert_eq!(quads[1].color, palette.opponent);
        for quad in quads {
            assert_eq!(quad.style, QuadStyle::Filled);
            assert!(quad.min.x < quad.max.x);
            assert!(quad.min.y < quad.max.y);
        }
    }

    #[test]
    fn walls_are_only_outlined_when_enabled() {
        let world = sized_world();
        let scene = Scene::capture(&world, &Palette::default());

        assert!(!scene.walls.is_empty());
        assert!(scene.wall_quads().is_empty());

        let scene = scene.with_walls(true);
        let quads = scene.wall_quads();
        assert_eq!(quads.len(), scene.walls.len());
        assert!(quads
            .iter()
            .all(|quad| quad.style == QuadStyle::Outlined));
    }
}
