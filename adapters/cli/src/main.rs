#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that drives the light cycle simulation headlessly.

mod settings;
mod widget_locations;

use std::{path::PathBuf, thread, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;
use light_cycle_core::{AgentKind, Cell, Command, Event, Tile};
use light_cycle_rendering::{
    input::{Gesture, TapTracker},
    Scene,
};
use light_cycle_world::{self as world, query, World, DEFAULT_SEED};
use tracing::{debug, info, warn};

use crate::settings::Settings;

/// Runs the light cycle chase simulation without a display.
#[derive(Debug, Parser)]
#[command(name = "light-cycle", version, about)]
struct CliArgs {
    /// TOML settings file; launcher defaults apply when omitted.
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 200)]
    ticks: u64,

    /// Seed for every random decision.
    #[arg(long)]
    seed: Option<u64>,

    /// Ticks per second; 0 runs unpaced. Overrides the settings file.
    #[arg(long)]
    fps: Option<u32>,

    /// Surface size in pixels, formatted as WIDTHxHEIGHT.
    #[arg(long, value_parser = parse_surface, default_value = "480x800")]
    surface: SurfaceSize,

    /// Display density used to scale the default padding.
    #[arg(long, default_value_t = 1.0)]
    density: f32,

    /// Scripted taps formatted as TICK:X,Y in surface pixels.
    #[arg(long = "tap", value_parser = parse_tap)]
    taps: Vec<ScriptedTap>,

    /// Prints the board with both trails once the run finishes.
    #[arg(long)]
    snapshot: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SurfaceSize {
    width: u32,
    height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ScriptedTap {
    tick: u64,
    x: f32,
    y: f32,
}

/// Entry point for the light cycle command-line interface.
fn main() -> Result<()> {
    init_tracing();
    let args = CliArgs::parse();

    let settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let config = settings
        .layout_config(args.density)
        .context("failed to build layout configuration")?;
    let mut world = World::with_seed(config, args.seed.unwrap_or(DEFAULT_SEED))
        .context("layout configuration was rejected")?;

    let summary = run(&mut world, &args, &settings);
    info!(
        ticks = query::tick_index(&world),
        rounds = summary.rounds,
        longest_round = summary.longest_round,
        "simulation finished"
    );

    if args.snapshot {
        println!("{}", render_ascii(&world));
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Debug, Default)]
struct RunSummary {
    rounds: u64,
    longest_round: u64,
}

fn run(world: &mut World, args: &CliArgs, settings: &Settings) -> RunSummary {
    let fps = args.fps.unwrap_or_else(|| settings.fps());
    let frame = frame_duration(fps);
    let palette = settings.palette();
    let center = surface_center(args.surface);
    let mut taps = TapTracker::new(settings.user_control());
    let mut summary = RunSummary::default();
    let mut round_length = 0_u64;
    let mut events = Vec::new();

    world::apply(
        world,
        Command::Resize {
            width: args.surface.width,
            height: args.surface.height,
        },
        &mut events,
    );

    for tick in 0..args.ticks {
        let elapsed = Duration::from_millis(tick.saturating_mul(frame_millis(fps)));
        for tap in args.taps.iter().filter(|tap| tap.tick == tick) {
            match taps.tap(elapsed, center, tap_position(tap)) {
                Gesture::NewBoard => world::apply(world, Command::RequestNewBoard, &mut events),
                Gesture::Steer(direction) => world::apply(
                    world,
                    Command::SetDesiredDirection { direction },
                    &mut events,
                ),
                Gesture::None => {}
            }
        }

        world::apply(world, Command::Tick, &mut events);
        round_length += 1;

        for event in events.drain(..) {
            match event {
                Event::RoundOver { cause, cell } => {
                    summary.rounds += 1;
                    summary.longest_round = summary.longest_round.max(round_length);
                    info!(
                        ?cause,
                        x = cell.x(),
                        y = cell.y(),
                        ticks = round_length,
                        "round over"
                    );
                    round_length = 0;
                }
                Event::AgentsReset { reason } => debug!(?reason, "agents reset"),
                Event::ReconfigureRejected { error } => warn!(%error, "configuration rejected"),
                _ => {}
            }
        }

        let scene = Scene::capture(world, &palette).with_walls(settings.show_walls());
        debug!(
            trail_quads = scene.trail_quads().len(),
            wall_quads = scene.wall_quads().len(),
            "frame prepared"
        );

        if let Some(frame) = frame {
            thread::sleep(frame);
        }
    }

    summary.longest_round = summary.longest_round.max(round_length);
    summary
}

fn frame_millis(fps: u32) -> u64 {
    if fps == 0 {
        0
    } else {
        1000 / u64::from(fps)
    }
}

fn frame_duration(fps: u32) -> Option<Duration> {
    match frame_millis(fps) {
        0 => None,
        millis => Some(Duration::from_millis(millis)),
    }
}

fn surface_center(surface: SurfaceSize) -> Vec2 {
    Vec2::new(surface.width as f32 / 2.0, surface.height as f32 / 2.0)
}

fn tap_position(tap: &ScriptedTap) -> Vec2 {
    Vec2::new(tap.x, tap.y)
}

fn parse_surface(value: &str) -> Result<SurfaceSize, String> {
    let invalid = || format!("expected WIDTHxHEIGHT, got '{value}'");
    let (width, height) = value.split_once(['x', 'X']).ok_or_else(invalid)?;
    let width = width.trim().parse::<u32>().map_err(|_| invalid())?;
    let height = height.trim().parse::<u32>().map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }
    Ok(SurfaceSize { width, height })
}

fn parse_tap(value: &str) -> Result<ScriptedTap, String> {
    let invalid = || format!("expected TICK:X,Y, got '{value}'");
    let (tick, position) = value.split_once(':').ok_or_else(invalid)?;
    let (x, y) = position.split_once(',').ok_or_else(invalid)?;
    Ok(ScriptedTap {
        tick: tick.trim().parse().map_err(|_| invalid())?,
        x: x.trim().parse().map_err(|_| invalid())?,
        y: y.trim().parse().map_err(|_| invalid())?,
    })
}

/// Renders the board as text: `#` walls, `.` corridors, `p`/`o` trails with
/// capitalised heads.
fn render_ascii(world: &World) -> String {
    let board = query::board(world);
    let player = query::trail(world, AgentKind::Player);
    let opponent = query::trail(world, AgentKind::Opponent);
    let mut output = String::new();

    for y in 0..board.height() as i32 {
        for x in 0..board.width() as i32 {
            let cell = Cell::new(x, y);
            let glyph = if player.head() == Some(cell) {
                'P'
            } else if opponent.head() == Some(cell) {
                'O'
            } else if player.contains(cell) {
                'p'
            } else if opponent.contains(cell) {
                'o'
            } else {
                match board.tile(cell) {
                    Some(Tile::Open) => '.',
                    _ => '#',
                }
            };
            output.push(glyph);
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use light_cycle_core::LayoutConfig;

    use super::*;

    #[test]
    fn surface_sizes_parse() {
        assert_eq!(
            parse_surface("480x800"),
            Ok(SurfaceSize {
                width: 480,
                height: 800
            })
        );
        assert!(parse_surface("480").is_err());
        assert!(parse_surface("0x800").is_err());
    }

    #[test]
    fn taps_parse() {
        assert_eq!(
            parse_tap("12:40.5,300"),
            Ok(ScriptedTap {
                tick: 12,
                x: 40.5,
                y: 300.0
            })
        );
        assert!(parse_tap("12:40").is_err());
    }

    #[test]
    fn frame_pacing_follows_fps() {
        assert_eq!(frame_duration(20), Some(Duration::from_millis(50)));
        assert_eq!(frame_duration(0), None);
        assert_eq!(frame_duration(5000), None);
    }

    #[test]
    fn ascii_snapshot_marks_heads_and_walls() {
        let world = World::with_seed(LayoutConfig::default(), 1).expect("valid layout");
        let snapshot = render_ascii(&world);
        let rows: Vec<&str> = snapshot.lines().collect();

        assert_eq!(rows.len(), query::board(&world).height() as usize);
        assert_eq!(snapshot.matches('P').count(), 1);
        assert_eq!(snapshot.matches('O').count(), 1);
        assert_eq!(&rows[2][2..3], "#");
        assert_eq!(rows[0][0..1].replace(['P', 'O'], "."), ".");
    }
}
