#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for the light cycle simulation.
//!
//! The world owns the board derived from the active [`LayoutConfig`], both
//! agents and the random source that drives their steering. All mutation
//! flows through [`apply`]; read access goes through the [`query`] module.

mod agent;

use light_cycle_core::{
    collides, AgentKind, Board, Cell, Command, Direction, Event, LayoutConfig, LayoutError,
    ResetReason, Trail, Viewport, WallRect,
};
use light_cycle_system_board_generation::generate;
use light_cycle_system_steering::Steering;
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::agent::Agent;

/// Seed used by [`World::new`] when the caller has no preference.
pub const DEFAULT_SEED: u64 = 0x5eed_c7c1_e7a1_1000;

/// Heading restored on the player after every reset.
pub const PLAYER_INITIAL_HEADING: Direction = Direction::East;

/// Heading restored on the opponent after every reset.
pub const OPPONENT_INITIAL_HEADING: Direction = Direction::West;

/// Represents the authoritative light cycle world state.
#[derive(Debug)]
pub struct World {
    layout: LayoutConfig,
    board: Board,
    walls: Vec<WallRect>,
    steering: Steering,
    player: Agent,
    opponent: Agent,
    surface: Option<(u32, u32)>,
    viewport: Option<Viewport>,
    rng: ChaCha8Rng,
    tick_index: u64,
    rounds_completed: u64,
}

impl World {
    /// Creates a world from `config` using [`DEFAULT_SEED`].
    pub fn new(config: LayoutConfig) -> Result<Self, LayoutError> {
        Self::with_seed(config, DEFAULT_SEED)
    }

    /// Creates a world from `config` whose random decisions derive from `seed`.
    pub fn with_seed(config: LayoutConfig, seed: u64) -> Result<Self, LayoutError> {
        config.validate()?;
        let (board, walls) = generate(&config)?.into_parts();
        let mut world = Self {
            steering: Steering::new(config.randomness_divisor),
            layout: config,
            board,
            walls,
            player: Agent::new(PLAYER_INITIAL_HEADING),
            opponent: Agent::new(OPPONENT_INITIAL_HEADING),
            surface: None,
            viewport: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
            tick_index: 0,
            rounds_completed: 0,
        };
        world.reseed_agents();
        Ok(world)
    }

    fn reconfigure(&mut self, config: LayoutConfig, out_events: &mut Vec<Event>) {
        if let Err(error) = config.validate() {
            warn!(%error, "rejected layout configuration");
            out_events.push(Event::ReconfigureRejected { error });
            return;
        }
        if config == self.layout {
            return;
        }

        let reshaped = self.layout.shape_differs(&config);
        let repadded = self.layout.padding != config.padding;

        if reshaped {
            let generated = match generate(&config) {
                Ok(generated) => generated,
                Err(error) => {
                    warn!(%error, "rejected layout configuration");
                    out_events.push(Event::ReconfigureRejected { error });
                    return;
                }
            };
            let (board, walls) = generated.into_parts();
            debug!(
                width = board.width(),
                height = board.height(),
                walls = walls.len(),
                "regenerated board"
            );
            out_events.push(Event::BoardRegenerated {
                width: board.width(),
                height: board.height(),
                walls: walls.len(),
            });
            self.board = board;
            self.walls = walls;
        }

        if self.layout.randomness_divisor != config.randomness_divisor {
            self.steering = Steering::new(config.randomness_divisor);
        }
        self.layout = config;

        if reshaped {
            self.reset_agents(ResetReason::Reconfigured, out_events);
        }
        if reshaped || repadded {
            self.refit_viewport(out_events);
        }
    }

    fn resize(&mut self, width: u32, height: u32, out_events: &mut Vec<Event>) {
        self.surface = Some((width, height));
        self.refit_viewport(out_events);
    }

    fn refit_viewport(&mut self, out_events: &mut Vec<Event>) {
        let Some((width, height)) = self.surface else {
            return;
        };
        let viewport = light_cycle_system_viewport::fit(
            self.board.width(),
            self.board.height(),
            width,
            height,
            self.layout.padding,
        );
        debug!(
            scale_x = viewport.scale_x,
            scale_y = viewport.scale_y,
            landscape = viewport.landscape,
            "fitted viewport"
        );
        self.viewport = Some(viewport);
        out_events.push(Event::ViewportChanged { viewport });
    }

    fn tick(&mut self, out_events: &mut Vec<Event>) {
        let (Some(player_head), Some(opponent_head)) = (self.player.head(), self.opponent.head())
        else {
            warn!("board has no room for both agents; skipping tick");
            return;
        };
        self.tick_index = self.tick_index.saturating_add(1);

        let decision = self.steering.resolve(
            player_head,
            self.player.heading,
            self.player.desired,
            &mut self.rng,
            |cell| collides(cell, &self.board, &[&self.opponent.trail, &self.player.trail]),
        );
        if decision.clear_desired {
            self.player.desired = None;
            out_events.push(Event::DesiredDirectionCleared);
        }
        self.player.heading = decision.heading;

        let candidate = player_head.step(decision.heading);
        if collides(
            candidate,
            &self.board,
            &[&self.opponent.trail, &self.player.trail],
        ) {
            self.finish_round(AgentKind::Player, candidate, out_events);
            return;
        }
        self.player.trail.push(candidate);
        out_events.push(Event::AgentAdvanced {
            agent: AgentKind::Player,
            from: player_head,
            to: candidate,
            heading: decision.heading,
        });

        let decision = self.steering.resolve(
            opponent_head,
            self.opponent.heading,
            None,
            &mut self.rng,
            |cell| collides(cell, &self.board, &[&self.player.trail, &self.opponent.trail]),
        );
        self.opponent.heading = decision.heading;

        let candidate = opponent_head.step(decision.heading);
        if collides(
            candidate,
            &self.board,
            &[&self.player.trail, &self.opponent.trail],
        ) {
            self.finish_round(AgentKind::Opponent, candidate, out_events);
            return;
        }
        self.opponent.trail.push(candidate);
        out_events.push(Event::AgentAdvanced {
            agent: AgentKind::Opponent,
            from: opponent_head,
            to: candidate,
            heading: decision.heading,
        });
    }

    fn finish_round(&mut self, cause: AgentKind, cell: Cell, out_events: &mut Vec<Event>) {
        self.rounds_completed = self.rounds_completed.saturating_add(1);
        debug!(?cause, x = cell.x(), y = cell.y(), "round over");
        out_events.push(Event::RoundOver { cause, cell });
        self.reset_agents(ResetReason::RoundOver, out_events);
    }

    fn reset_agents(&mut self, reason: ResetReason, out_events: &mut Vec<Event>) {
        self.reseed_agents();
        debug!(?reason, "reset agents");
        out_events.push(Event::AgentsReset { reason });
    }

    fn reseed_agents(&mut self) {
        self.player.reset(None);
        self.opponent.reset(None);

        let player_start = random_open_cell(&self.board, &self.opponent.trail, &mut self.rng);
        self.player.reset(player_start);
        let opponent_start = random_open_cell(&self.board, &self.player.trail, &mut self.rng);
        self.opponent.reset(opponent_start);

        if player_start.is_none() || opponent_start.is_none() {
            warn!("board has no room for both agents");
        }
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Reconfigure { config } => world.reconfigure(config, out_events),
        Command::Resize { width, height } => world.resize(width, height, out_events),
        Command::SetDesiredDirection { direction } => {
            world.player.desired = Some(direction);
            debug!(?direction, "desired direction set");
            out_events.push(Event::DesiredDirectionSet { direction });
        }
        Command::RequestNewBoard => world.reset_agents(ResetReason::NewBoard, out_events),
        Command::Tick => world.tick(out_events),
    }
}

fn random_open_cell<R>(board: &Board, avoid: &Trail, rng: &mut R) -> Option<Cell>
where
    R: Rng + ?Sized,
{
    let candidates: Vec<Cell> = board
        .open_cells()
        .filter(|cell| !avoid.contains(*cell))
        .collect();
    candidates.choose(rng).copied()
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use light_cycle_core::{AgentKind, Board, Direction, LayoutConfig, Trail, Viewport, WallRect};

    use super::World;

    /// Provides read-only access to the board agents move across.
    #[must_use]
    pub fn board(world: &World) -> &Board {
        &world.board
    }

    /// Wall rectangles prepared for rendering, in grid units.
    #[must_use]
    pub fn walls(world: &World) -> &[WallRect] {
        &world.walls
    }

    /// Layout configuration currently in effect.
    #[must_use]
    pub fn layout(world: &World) -> &LayoutConfig {
        &world.layout
    }

    /// Trail of the requested agent, oldest cell first.
    #[must_use]
    pub fn trail(world: &World, agent: AgentKind) -> &Trail {
        match agent {
            AgentKind::Player => &world.player.trail,
            AgentKind::Opponent => &world.opponent.trail,
        }
    }

    /// Current heading of the requested agent.
    #[must_use]
    pub fn heading(world: &World, agent: AgentKind) -> Direction {
        match agent {
            AgentKind::Player => world.player.heading,
            AgentKind::Opponent => world.opponent.heading,
        }
    }

    /// Direction the user asked the player to take, if still pending.
    #[must_use]
    pub fn desired_direction(world: &World) -> Option<Direction> {
        world.player.desired
    }

    /// Latest grid-to-surface transform, available once a surface size is known.
    #[must_use]
    pub fn viewport(world: &World) -> Option<Viewport> {
        world.viewport
    }

    /// Number of ticks that advanced the simulation.
    #[must_use]
    pub fn tick_index(world: &World) -> u64 {
        world.tick_index
    }

    /// Number of rounds that ended in a collision.
    #[must_use]
    pub fn rounds_completed(world: &World) -> u64 {
        world.rounds_completed
    }
}
