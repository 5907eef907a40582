use std::time::Duration;

use dont_press_core::{ButtonPosition, Command, Event, Viewport};
use dont_press_system_mover::{Config, Mover};
use dont_press_world::{self as world, query, World};

const SEED: u64 = 0x5eed_0f_b077_0a;

/// Applies `command`, lets the mover react, and feeds its commands back into the world.
fn step(world: &mut World, mover: &mut Mover, command: Command) -> Vec<ButtonPosition> {
    let mut events = Vec::new();
    world::apply(world, command, &mut events);

    let mut moves = Vec::new();
    loop {
        if events.is_empty() {
            break;
        }

        let mut commands = Vec::new();
        mover.handle(&events, query::viewport(world), &mut commands);
        events.clear();

        for command in commands {
            let mut generated = Vec::new();
            world::apply(world, command, &mut generated);
            for event in &generated {
                if let Event::ButtonRepositioned { position } = event {
                    moves.push(*position);
                }
            }
            events.extend(generated);
        }
    }
    moves
}

fn tick(world: &mut World, mover: &mut Mover, millis: u64) -> Vec<ButtonPosition> {
    step(
        world,
        mover,
        Command::Tick {
            dt: Duration::from_millis(millis),
        },
    )
}

fn press_to(world: &mut World, mover: &mut Mover, count: u8) {
    while query::press_count(world).get() < count {
        let _ = step(world, mover, Command::Press);
    }
}

#[test]
fn timer_starts_entering_moving_stage() {
    let mut world = World::new();
    let mut mover = Mover::new(Config::with_seed(SEED));

    press_to(&mut world, &mut mover, 9);
    assert!(!mover.is_active());
    assert!(tick(&mut world, &mut mover, 5_000).is_empty());

    press_to(&mut world, &mut mover, 10);
    assert!(mover.is_active());
    assert!(tick(&mut world, &mut mover, 799).is_empty());
    assert_eq!(tick(&mut world, &mut mover, 1).len(), 1);
}

#[test]
fn timer_stops_leaving_moving_stage() {
    let mut world = World::new();
    let mut mover = Mover::new(Config::with_seed(SEED));

    press_to(&mut world, &mut mover, 24);
    assert!(mover.is_active());
    let moves = tick(&mut world, &mut mover, 800);
    assert_eq!(moves.len(), 1);
    let frozen = query::button_position(&world);

    press_to(&mut world, &mut mover, 25);
    assert!(!mover.is_active());

    for _ in 0..20 {
        assert!(tick(&mut world, &mut mover, 800).is_empty());
    }
    assert!(step(&mut world, &mut mover, Command::Hover).is_empty());
    assert_eq!(query::button_position(&world), frozen);
}

#[test]
fn hover_resamples_only_while_moving() {
    let mut world = World::new();
    let mut mover = Mover::new(Config::with_seed(SEED));

    assert!(step(&mut world, &mut mover, Command::Hover).is_empty());

    press_to(&mut world, &mut mover, 12);
    let moves = step(&mut world, &mut mover, Command::Hover);
    assert_eq!(moves.len(), 1);
    assert_eq!(query::button_position(&world), moves[0]);
}

#[test]
fn positions_respect_configured_viewport() {
    let mut world = World::new();
    let mut mover = Mover::new(Config::with_seed(SEED));
    let _ = step(
        &mut world,
        &mut mover,
        Command::ConfigureViewport {
            viewport: Viewport::new(500, 260),
        },
    );
    press_to(&mut world, &mut mover, 10);

    for _ in 0..200 {
        for position in step(&mut world, &mut mover, Command::Hover) {
            assert!((0..350).contains(&position.x()));
            assert!((0..110).contains(&position.y()));
        }
    }
}

#[test]
fn identical_seeds_replay_identical_positions() {
    let run = || {
        let mut world = World::new();
        let mut mover = Mover::new(Config::new(Duration::from_millis(800), SEED));
        press_to(&mut world, &mut mover, 10);
        let mut moves = Vec::new();
        for _ in 0..10 {
            moves.extend(tick(&mut world, &mut mover, 400));
            moves.extend(step(&mut world, &mut mover, Command::Hover));
        }
        moves
    };

    let first = run();
    assert_eq!(first.len(), 15);
    assert_eq!(first, run());
}

#[test]
fn stop_cancels_running_timer() {
    let mut world = World::new();
    let mut mover = Mover::new(Config::with_seed(SEED));
    press_to(&mut world, &mut mover, 15);

    assert!(mover.stop());
    assert!(!mover.stop());
    assert!(tick(&mut world, &mut mover, 1_600).is_empty());
}
