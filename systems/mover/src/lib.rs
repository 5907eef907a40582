#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Reposition system that keeps the button running away while it is on the move.
//!
//! The system owns at most one reposition timer. The timer is acquired when
//! the world reports that the `moving` flag turned on and is dropped on the
//! same batch that reports the flag turning off, so no firing can happen once
//! the button is frozen.

use std::time::Duration;

use dont_press_core::{ButtonPosition, Command, Event, Viewport, REPOSITION_INTERVAL};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Configuration parameters required to construct the mover system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    interval: Duration,
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration using the provided cadence and seed.
    #[must_use]
    pub const fn new(interval: Duration, rng_seed: u64) -> Self {
        Self { interval, rng_seed }
    }

    /// Creates a configuration with the default cadence and the provided seed.
    #[must_use]
    pub const fn with_seed(rng_seed: u64) -> Self {
        Self::new(REPOSITION_INTERVAL, rng_seed)
    }

    /// Cadence at which the timer fires.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}

/// Periodic timer that is alive only while the button is moving.
#[derive(Debug)]
struct RepositionTimer {
    interval: Duration,
    elapsed: Duration,
}

impl RepositionTimer {
    fn start(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
        }
    }

    /// Accumulates `dt` and reports whether at least one interval elapsed.
    ///
    /// Several intervals elapsing within one tick collapse into one firing.
    fn advance(&mut self, dt: Duration) -> bool {
        if self.interval.is_zero() {
            return false;
        }

        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed < self.interval {
            return false;
        }

        let interval_nanos = self.interval.as_nanos();
        let remainder = self.elapsed.as_nanos() % interval_nanos;
        self.elapsed = Duration::from_nanos(u64::try_from(remainder).unwrap_or(0));
        true
    }
}

/// Pure system that emits reposition commands while the button is moving.
#[derive(Debug)]
pub struct Mover {
    interval: Duration,
    timer: Option<RepositionTimer>,
    rng: ChaCha8Rng,
}

impl Mover {
    /// Creates a new mover system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            interval: config.interval,
            timer: None,
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
        }
    }

    /// Consumes events and the current viewport to emit reposition commands.
    pub fn handle(&mut self, events: &[Event], viewport: Viewport, out: &mut Vec<Command>) {
        for event in events {
            match event {
                Event::FlagsChanged { previous, current } => {
                    if !previous.moving() && current.moving() {
                        self.timer = Some(RepositionTimer::start(self.interval));
                    } else if previous.moving() && !current.moving() {
                        self.timer = None;
                    }
                }
                Event::TimeAdvanced { dt } => {
                    let fired = self
                        .timer
                        .as_mut()
                        .map_or(false, |timer| timer.advance(*dt));
                    if fired {
                        out.push(Command::RepositionButton {
                            position: sample_position(&mut self.rng, viewport),
                        });
                    }
                }
                Event::HoverWhileMoving => {
                    out.push(Command::RepositionButton {
                        position: sample_position(&mut self.rng, viewport),
                    });
                }
                _ => {}
            }
        }
    }

    /// Reports whether the reposition timer is currently running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.timer.is_some()
    }

    /// Cancels the timer, returning whether one was running.
    pub fn stop(&mut self) -> bool {
        self.timer.take().is_some()
    }
}

/// Samples a uniformly random top-left corner that keeps the button inside the viewport.
///
/// Axes narrower than the button collapse to zero.
pub fn sample_position<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> ButtonPosition {
    let (max_x, max_y) = viewport.reposition_bounds();
    ButtonPosition::new(sample_axis(rng, max_x), sample_axis(rng, max_y))
}

fn sample_axis<R: Rng + ?Sized>(rng: &mut R, upper: u32) -> i32 {
    if upper == 0 {
        return 0;
    }
    let value = rng.gen_range(0..upper);
    i32::try_from(value).unwrap_or(i32::MAX)
}
