use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use light_cycle_core::{AgentKind, Command, Direction, Event, LayoutConfig};
use light_cycle_world::{self as world, query, World};

#[test]
fn seeded_replays_produce_identical_histories() {
    let script = steering_script();
    let first = replay(7, script.clone());
    let second = replay(7, script);

    assert_eq!(first, second, "replay diverged");
    assert_eq!(first.fingerprint(), second.fingerprint());
    assert!(
        first
            .events
            .iter()
            .any(|event| matches!(event, Event::AgentAdvanced { .. })),
        "expected the agents to move",
    );
}

#[test]
fn different_seeds_produce_different_histories() {
    let script = steering_script();
    let first = replay(1, script.clone());
    let second = replay(2, script);

    assert_ne!(first.fingerprint(), second.fingerprint());
}

fn steering_script() -> Vec<Command> {
    let mut commands = vec![Command::Resize {
        width: 480,
        height: 800,
    }];
    let turns = [
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
    ];
    for round in 0..200 {
        if round % 13 == 0 {
            commands.push(Command::SetDesiredDirection {
                direction: turns[(round / 13) % turns.len()],
            });
        }
        if round == 150 {
            commands.push(Command::RequestNewBoard);
        }
        commands.push(Command::Tick);
    }
    commands
}

fn replay(seed: u64, commands: Vec<Command>) -> ReplayOutcome {
    let config = LayoutConfig {
        randomness_divisor: 8,
        ..LayoutConfig::default()
    };
    let mut world = World::with_seed(config, seed).expect("default layout is valid");
    let mut events = Vec::new();
    let mut heads = Vec::new();

    for command in commands {
        world::apply(&mut world, command, &mut events);
        heads.push((
            query::trail(&world, AgentKind::Player).head(),
            query::trail(&world, AgentKind::Opponent).head(),
        ));
    }

    ReplayOutcome {
        events,
        heads,
        rounds: query::rounds_completed(&world),
    }
}

#[derive(Debug, PartialEq)]
struct ReplayOutcome {
    events: Vec<Event>,
    heads: Vec<(
        Option<light_cycle_core::Cell>,
        Option<light_cycle_core::Cell>,
    )>,
    rounds: u64,
}

impl ReplayOutcome {
    fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.heads.hash(&mut hasher);
        self.rounds.hash(&mut hasher);
        hasher.finish()
    }
}
