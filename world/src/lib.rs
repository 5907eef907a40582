#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative session state management for Don't Press.

use dont_press_core::{
    AudioCue, ButtonPosition, Command, Event, PressCount, Stage, StageFlags, Viewport,
    AMBIENT_SOUND_PRESS,
};

/// Represents the authoritative state of a single session.
#[derive(Debug)]
pub struct World {
    press_count: PressCount,
    button_position: ButtonPosition,
    viewport: Viewport,
    ambient_sound_requested: bool,
}

impl World {
    /// Creates a fresh session with the counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            press_count: PressCount::ZERO,
            button_position: ButtonPosition::ORIGIN,
            viewport: Viewport::default(),
            ambient_sound_requested: false,
        }
    }

    fn flags(&self) -> StageFlags {
        StageFlags::from_count(self.press_count)
    }

    fn register_press(&mut self, out_events: &mut Vec<Event>) {
        if self.press_count.is_saturated() {
            return;
        }

        let previous = self.press_count;
        let current = previous.saturating_increment();
        self.press_count = current;
        out_events.push(Event::PressRegistered { count: current });

        let previous_flags = StageFlags::from_count(previous);
        let current_flags = StageFlags::from_count(current);
        if previous_flags != current_flags {
            out_events.push(Event::FlagsChanged {
                previous: previous_flags,
                current: current_flags,
            });
        }

        let stage = Stage::from_count(current);
        if stage != Stage::from_count(previous) {
            out_events.push(Event::StageEntered { stage });
        }

        if current.get() == AMBIENT_SOUND_PRESS && !self.ambient_sound_requested {
            self.ambient_sound_requested = true;
            out_events.push(Event::AmbientSoundRequested {
                cue: AudioCue::AMBIENT,
            });
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ConfigureViewport { viewport } => {
            if world.viewport != viewport {
                world.viewport = viewport;
                out_events.push(Event::ViewportConfigured { viewport });
            }
        }
        Command::Press => world.register_press(out_events),
        Command::Hover => {
            if world.flags().moving() {
                out_events.push(Event::HoverWhileMoving);
            }
        }
        Command::Tick { dt } => {
            out_events.push(Event::TimeAdvanced { dt });
        }
        Command::RepositionButton { position } => {
            // Outside the moving range the last position stays frozen.
            if world.flags().moving() {
                world.button_position = position;
                out_events.push(Event::ButtonRepositioned { position });
            }
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::World;
    use dont_press_core::{ButtonPosition, PressCount, Stage, StageFlags, Viewport};

    /// Current value of the press counter.
    #[must_use]
    pub fn press_count(world: &World) -> PressCount {
        world.press_count
    }

    /// Flags derived from the current press counter.
    #[must_use]
    pub fn stage_flags(world: &World) -> StageFlags {
        world.flags()
    }

    /// Named stage containing the current press counter.
    #[must_use]
    pub fn stage(world: &World) -> Stage {
        Stage::from_count(world.press_count)
    }

    /// Last position the button was moved to.
    #[must_use]
    pub fn button_position(world: &World) -> ButtonPosition {
        world.button_position
    }

    /// Viewport the button is confined to.
    #[must_use]
    pub fn viewport(world: &World) -> Viewport {
        world.viewport
    }

    /// Reports whether the ambient sound has already been requested this session.
    #[must_use]
    pub fn ambient_sound_requested(world: &World) -> bool {
        world.ambient_sound_requested
    }

    /// Captures every value presentation needs in a single copy.
    #[must_use]
    pub fn snapshot(world: &World) -> SessionSnapshot {
        SessionSnapshot {
            count: world.press_count,
            flags: world.flags(),
            stage: stage(world),
            position: world.button_position,
            viewport: world.viewport,
        }
    }

    /// Immutable copy of the session state used by presentation and adapters.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct SessionSnapshot {
        /// Current press counter.
        pub count: PressCount,
        /// Flags derived from the counter.
        pub flags: StageFlags,
        /// Stage containing the counter.
        pub stage: Stage,
        /// Last button position.
        pub position: ButtonPosition,
        /// Viewport the button is confined to.
        pub viewport: Viewport,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(world: &mut World, times: usize) -> Vec<Event> {
        let mut events = Vec::new();
        for _ in 0..times {
            apply(world, Command::Press, &mut events);
        }
        events
    }

    #[test]
    fn new_world_starts_at_zero() {
        let world = World::new();
        assert_eq!(query::press_count(&world), PressCount::ZERO);
        assert_eq!(query::stage(&world), Stage::Dormant);
        assert!(!query::ambient_sound_requested(&world));
    }

    #[test]
    fn press_at_maximum_emits_nothing() {
        let mut world = World::new();
        let _ = press(&mut world, 31);
        let events = press(&mut world, 1);
        assert!(events.is_empty());
        assert_eq!(query::press_count(&world), PressCount::MAX);
    }

    #[test]
    fn crossing_into_moving_reports_flag_change() {
        let mut world = World::new();
        let _ = press(&mut world, 9);
        let events = press(&mut world, 1);

        assert_eq!(
            events,
            vec![
                Event::PressRegistered {
                    count: PressCount::new(10)
                },
                Event::FlagsChanged {
                    previous: StageFlags::from_count(PressCount::new(9)),
                    current: StageFlags::from_count(PressCount::new(10)),
                },
                Event::StageEntered {
                    stage: Stage::Restless
                },
            ]
        );
    }

    #[test]
    fn hover_is_ignored_while_stationary() {
        let mut world = World::new();
        let mut events = Vec::new();
        apply(&mut world, Command::Hover, &mut events);
        assert!(events.is_empty());

        let _ = press(&mut world, 10);
        apply(&mut world, Command::Hover, &mut events);
        assert_eq!(events, vec![Event::HoverWhileMoving]);
    }

    #[test]
    fn reposition_is_frozen_outside_moving_range() {
        let mut world = World::new();
        let mut events = Vec::new();
        let target = ButtonPosition::new(40, 90);

        apply(
            &mut world,
            Command::RepositionButton { position: target },
            &mut events,
        );
        assert!(events.is_empty());
        assert_eq!(query::button_position(&world), ButtonPosition::ORIGIN);

        let _ = press(&mut world, 12);
        apply(
            &mut world,
            Command::RepositionButton { position: target },
            &mut events,
        );
        assert_eq!(events, vec![Event::ButtonRepositioned { position: target }]);

        let _ = press(&mut world, 13);
        events.clear();
        apply(
            &mut world,
            Command::RepositionButton {
                position: ButtonPosition::new(1, 1),
            },
            &mut events,
        );
        assert!(events.is_empty());
        assert_eq!(query::button_position(&world), target);
    }

    #[test]
    fn viewport_changes_are_reported_once() {
        let mut world = World::new();
        let mut events = Vec::new();
        let viewport = Viewport::new(640, 480);

        apply(&mut world, Command::ConfigureViewport { viewport }, &mut events);
        apply(&mut world, Command::ConfigureViewport { viewport }, &mut events);

        assert_eq!(events, vec![Event::ViewportConfigured { viewport }]);
        assert_eq!(query::viewport(&world), viewport);
    }
}
