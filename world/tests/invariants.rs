use std::collections::HashSet;

use light_cycle_core::{AgentKind, Command, Event, ExcludedRegion, LayoutConfig, LayoutError};
use light_cycle_world::{self as world, query, World};

fn run_ticks(world: &mut World, ticks: usize, mut inspect: impl FnMut(&World, &[Event])) {
    for _ in 0..ticks {
        let mut events = Vec::new();
        world::apply(world, Command::Tick, &mut events);
        inspect(world, &events);
    }
}

#[test]
fn uneventful_ticks_grow_each_trail_by_one_adjacent_cell() {
    let config = LayoutConfig {
        randomness_divisor: 5,
        ..LayoutConfig::default()
    };
    let mut world = World::with_seed(config, 99).expect("valid layout");
    let mut previous = (
        query::trail(&world, AgentKind::Player).clone(),
        query::trail(&world, AgentKind::Opponent).clone(),
    );

    run_ticks(&mut world, 500, |world, events| {
        let player = query::trail(world, AgentKind::Player);
        let opponent = query::trail(world, AgentKind::Opponent);
        let round_over = events
            .iter()
            .any(|event| matches!(event, Event::RoundOver { .. }));

        if round_over {
            assert_eq!(player.len(), 1);
            assert_eq!(opponent.len(), 1);
        } else {
            assert_eq!(player.len(), previous.0.len() + 1);
            assert_eq!(opponent.len(), previous.1.len() + 1);
            let (Some(old), Some(new)) = (previous.0.head(), player.head()) else {
                panic!("player lost its head");
            };
            assert!(old.is_adjacent(new));
            let (Some(old), Some(new)) = (previous.1.head(), opponent.head()) else {
                panic!("opponent lost its head");
            };
            assert!(old.is_adjacent(new));
        }
        previous = (player.clone(), opponent.clone());
    });
}

#[test]
fn trails_stay_on_open_cells_and_never_overlap() {
    let config = LayoutConfig {
        icon_rows: 3,
        icon_cols: 5,
        row_spacing: 2,
        col_spacing: 1,
        excluded_regions: vec![ExcludedRegion::new(1, 1, 2, 1)],
        randomness_divisor: 3,
        ..LayoutConfig::default()
    };
    let mut world = World::with_seed(config, 2024).expect("valid layout");

    run_ticks(&mut world, 800, |world, _| {
        let board = query::board(world);
        let player = query::trail(world, AgentKind::Player);
        let opponent = query::trail(world, AgentKind::Opponent);
        let mut seen = HashSet::new();

        for cell in player.cells().iter().chain(opponent.cells()) {
            assert!(board.is_open(*cell), "trail left the corridors at {cell:?}");
            assert!(seen.insert(*cell), "cell {cell:?} occupied twice");
        }
    });
    assert!(query::rounds_completed(&world) > 0, "expected at least one crash");
}

#[test]
fn rejected_reconfigure_keeps_the_previous_board() {
    let mut world = World::with_seed(LayoutConfig::default(), 5).expect("valid layout");
    let board = query::board(&world).clone();
    let mut events = Vec::new();

    world::apply(
        &mut world,
        Command::Reconfigure {
            config: LayoutConfig {
                icon_rows: 0,
                ..LayoutConfig::default()
            },
        },
        &mut events,
    );

    assert_eq!(
        events,
        vec![Event::ReconfigureRejected {
            error: LayoutError::InvalidLayout {
                icon_rows: 0,
                icon_cols: 4,
            },
        }]
    );
    assert_eq!(query::board(&world), &board);
    assert_eq!(query::layout(&world), &LayoutConfig::default());
}

#[test]
fn reshaping_regenerates_the_board_and_resets_agents() {
    let mut world = World::with_seed(LayoutConfig::default(), 5).expect("valid layout");
    let mut events = Vec::new();
    world::apply(
        &mut world,
        Command::Resize {
            width: 600,
            height: 1000,
        },
        &mut events,
    );
    run_ticks(&mut world, 3, |_, _| {});
    events.clear();

    world::apply(
        &mut world,
        Command::Reconfigure {
            config: LayoutConfig {
                icon_rows: 6,
                ..LayoutConfig::default()
            },
        },
        &mut events,
    );

    assert_eq!(query::board(&world).height(), 6 * 3 + 2);
    assert!(matches!(events[0], Event::BoardRegenerated { .. }));
    assert!(events
        .iter()
        .any(|event| matches!(event, Event::AgentsReset { .. })));
    assert!(events
        .iter()
        .any(|event| matches!(event, Event::ViewportChanged { .. })));
    assert_eq!(query::trail(&world, AgentKind::Player).len(), 1);
    assert_eq!(query::trail(&world, AgentKind::Opponent).len(), 1);
}

#[test]
fn identical_reconfigure_is_a_no_op() {
    let mut world = World::with_seed(LayoutConfig::default(), 5).expect("valid layout");
    let mut events = Vec::new();

    world::apply(
        &mut world,
        Command::Reconfigure {
            config: LayoutConfig::default(),
        },
        &mut events,
    );

    assert!(events.is_empty());
}
