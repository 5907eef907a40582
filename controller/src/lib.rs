#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Stage controller that owns a single Don't Press session.
//!
//! The controller is the only mutable entry point adapters need. It forwards
//! input as [`Command`] values to the authoritative world, lets the mover
//! system react to the resulting [`Event`] batch, and feeds the mover's
//! commands back until the session settles. Audio requests are handed to the
//! [`AudioSink`] collaborator as they are observed.

use std::time::Duration;

use dont_press_core::{
    AudioSink, ButtonPosition, Command, Event, PresentationBundle, PressCount, Stage, StageFlags,
    Viewport, REPOSITION_INTERVAL,
};
use dont_press_system_mover::{self as mover, Mover};
use dont_press_system_presentation as presentation;
use dont_press_world::{self as world, query, World};
use rand::Rng;
use tracing::{debug, info, trace};

/// Parameters used to start a session.
#[derive(Clone, Copy, Debug)]
pub struct ControllerConfig {
    reposition_interval: Duration,
    rng_seed: u64,
    viewport: Viewport,
}

impl ControllerConfig {
    /// Creates a configuration with the default cadence and viewport.
    #[must_use]
    pub fn new(rng_seed: u64) -> Self {
        Self {
            reposition_interval: REPOSITION_INTERVAL,
            rng_seed,
            viewport: Viewport::default(),
        }
    }

    /// Creates a configuration seeded from the operating system's entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Overrides the cadence of the reposition timer.
    #[must_use]
    pub fn with_reposition_interval(mut self, interval: Duration) -> Self {
        self.reposition_interval = interval;
        self
    }

    /// Overrides the viewport the session starts with.
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Seed driving button placement.
    #[must_use]
    pub const fn rng_seed(&self) -> u64 {
        self.rng_seed
    }
}

/// Owns the press counter, the reposition timer, and the audio collaborator.
#[derive(Debug)]
pub struct StageController<A: AudioSink> {
    world: World,
    mover: Mover,
    audio: A,
}

impl<A: AudioSink> StageController<A> {
    /// Starts a new session with the counter at zero.
    #[must_use]
    pub fn new(config: ControllerConfig, audio: A) -> Self {
        let mut controller = Self {
            world: World::new(),
            mover: Mover::new(mover::Config::new(
                config.reposition_interval,
                config.rng_seed,
            )),
            audio,
        };
        controller.submit(Command::ConfigureViewport {
            viewport: config.viewport,
        });
        controller
    }

    /// Registers a press of the button; saturated counters ignore the press.
    pub fn register_press(&mut self) {
        self.submit(Command::Press);
    }

    /// Registers that the pointer entered the button.
    pub fn register_hover(&mut self) {
        self.submit(Command::Hover);
    }

    /// Advances the session clock, letting the reposition timer fire.
    pub fn advance(&mut self, dt: Duration) {
        self.submit(Command::Tick { dt });
    }

    /// Updates the viewport that bounds button placement.
    pub fn configure_viewport(&mut self, viewport: Viewport) {
        self.submit(Command::ConfigureViewport { viewport });
    }

    /// Derives the presentation bundle, sampling the font from the thread-local generator.
    #[must_use]
    pub fn presentation(&self) -> PresentationBundle {
        self.presentation_with(&mut rand::thread_rng())
    }

    /// Derives the presentation bundle using the provided generator for the font.
    pub fn presentation_with<R: Rng + ?Sized>(&self, rng: &mut R) -> PresentationBundle {
        presentation::present(
            query::press_count(&self.world),
            query::button_position(&self.world),
            rng,
        )
    }

    /// Current value of the press counter.
    #[must_use]
    pub fn press_count(&self) -> PressCount {
        query::press_count(&self.world)
    }

    /// Flags derived from the current counter.
    #[must_use]
    pub fn stage_flags(&self) -> StageFlags {
        query::stage_flags(&self.world)
    }

    /// Stage containing the current counter.
    #[must_use]
    pub fn stage(&self) -> Stage {
        query::stage(&self.world)
    }

    /// Last position the button moved to.
    #[must_use]
    pub fn button_position(&self) -> ButtonPosition {
        query::button_position(&self.world)
    }

    /// Viewport the button is confined to.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        query::viewport(&self.world)
    }

    /// Reports whether the reposition timer is running.
    #[must_use]
    pub fn is_repositioning(&self) -> bool {
        self.mover.is_active()
    }

    /// Audio collaborator receiving cues.
    #[must_use]
    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Mutable access to the audio collaborator, used by adapters to drain queued cues.
    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    /// Tears the session down, cancelling the reposition timer if it is running.
    pub fn shutdown(&mut self) {
        if self.mover.stop() {
            debug!("reposition timer cancelled on shutdown");
        }
    }

    fn submit(&mut self, command: Command) {
        let mut commands = vec![command];
        while !commands.is_empty() {
            let mut events = Vec::new();
            for command in commands.drain(..) {
                world::apply(&mut self.world, command, &mut events);
            }
            self.observe(&events);
            self.mover
                .handle(&events, query::viewport(&self.world), &mut commands);
        }
    }

    fn observe(&mut self, events: &[Event]) {
        for event in events {
            match *event {
                Event::StageEntered { stage } => {
                    info!(stage = stage.label(), "stage entered");
                }
                Event::FlagsChanged { previous, current } => {
                    if !previous.moving() && current.moving() {
                        debug!("reposition timer started");
                    } else if previous.moving() && !current.moving() {
                        debug!("reposition timer stopped");
                    }
                }
                Event::AmbientSoundRequested { cue } => {
                    info!(clip = ?cue.clip(), volume = cue.volume(), "ambient sound requested");
                    self.audio.play(cue);
                }
                Event::ButtonRepositioned { position } => {
                    trace!(x = position.x(), y = position.y(), "button repositioned");
                }
                Event::PressRegistered { count } => {
                    trace!(count = count.get(), "press registered");
                }
                Event::ViewportConfigured { viewport } => {
                    debug!(
                        width = viewport.width(),
                        height = viewport.height(),
                        "viewport configured"
                    );
                }
                Event::TimeAdvanced { .. } | Event::HoverWhileMoving => {}
            }
        }
    }
}

impl<A: AudioSink> Drop for StageController<A> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
