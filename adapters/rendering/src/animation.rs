//! Keyframe curves and glitch parameters shared by rendering backends.
//!
//! Every curve takes the time elapsed since the scene started and loops over
//! the animation's period.

use std::time::Duration;

use dont_press_core::Animation;
use glam::Vec2;

/// Base frequency of the turbulence driving glitch displacement.
pub const GLITCH_BASE_FREQUENCY: f32 = 0.02;

/// Number of noise octaves summed by the turbulence.
pub const GLITCH_OCTAVES: u32 = 3;

/// Maximum displacement applied by the glitch filter, in logical pixels.
pub const GLITCH_SCALE: f32 = 10.0;

/// Affine adjustment applied to an animated element for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    /// Uniform scale around the element's centre.
    pub scale: f32,
    /// Translation in logical pixels.
    pub offset: Vec2,
    /// Rotation in degrees.
    pub rotation_degrees: f32,
    /// Extra glow blur added on top of the element's shadow.
    pub glow_boost: f32,
    /// Opacity multiplier.
    pub opacity: f32,
}

impl Keyframe {
    /// Keyframe that leaves the element untouched.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset: Vec2::ZERO,
        rotation_degrees: 0.0,
        glow_boost: 0.0,
        opacity: 1.0,
    };
}

/// Samples `animation` at `elapsed`.
#[must_use]
pub fn sample(animation: Option<Animation>, elapsed: Duration) -> Keyframe {
    let Some(animation) = animation else {
        return Keyframe::IDENTITY;
    };

    let phase = phase(elapsed, animation.period());
    match animation {
        Animation::Pulse => pulse(phase),
        Animation::Shake => shake(phase),
        Animation::Flicker => Keyframe {
            opacity: flicker_opacity(phase),
            ..Keyframe::IDENTITY
        },
    }
}

/// Position within the current loop as a fraction in 0.0..1.0.
#[must_use]
pub fn phase(elapsed: Duration, period: Duration) -> f32 {
    if period.is_zero() {
        return 0.0;
    }
    let remainder = elapsed.as_nanos() % period.as_nanos();
    remainder as f32 / period.as_nanos() as f32
}

fn pulse(phase: f32) -> Keyframe {
    // 0% and 100% rest, 50% peaks.
    let swell = 1.0 - (phase * 2.0 - 1.0).abs();
    Keyframe {
        scale: 1.0 + 0.1 * swell,
        glow_boost: 10.0 * swell,
        ..Keyframe::IDENTITY
    }
}

const SHAKE_KEYFRAMES: [(f32, f32, f32, f32); 6] = [
    (0.0, 0.0, 0.0, 0.0),
    (0.2, -2.0, 2.0, -5.0),
    (0.4, 2.0, -2.0, 5.0),
    (0.6, -2.0, 2.0, -5.0),
    (0.8, 2.0, -2.0, 5.0),
    (1.0, 0.0, 0.0, 0.0),
];

fn shake(phase: f32) -> Keyframe {
    for pair in SHAKE_KEYFRAMES.windows(2) {
        let (start, x0, y0, r0) = pair[0];
        let (end, x1, y1, r1) = pair[1];
        if phase <= end {
            let t = (phase - start) / (end - start);
            return Keyframe {
                offset: Vec2::new(x0 + (x1 - x0) * t, y0 + (y1 - y0) * t),
                rotation_degrees: r0 + (r1 - r0) * t,
                ..Keyframe::IDENTITY
            };
        }
    }
    Keyframe::IDENTITY
}

/// Opacity of the terminal flicker; dims to 0.3 on the 20/22/24/55 percent marks.
#[must_use]
pub fn flicker_opacity(phase: f32) -> f32 {
    let percent = (phase * 100.0).floor() as u32;
    if matches!(percent, 20 | 22 | 24 | 55) {
        0.3
    } else {
        1.0
    }
}

/// Displacement applied to a glitching element at `point` for the current frame.
///
/// Sums sine octaves as a cheap stand-in for turbulence noise and bounds the
/// result by [`GLITCH_SCALE`].
#[must_use]
pub fn glitch_displacement(point: Vec2, elapsed: Duration) -> Vec2 {
    let time = elapsed.as_secs_f32() * 60.0;
    let mut x = 0.0;
    let mut y = 0.0;
    let mut frequency = GLITCH_BASE_FREQUENCY;
    let mut amplitude = 1.0;
    let mut total = 0.0;
    for _ in 0..GLITCH_OCTAVES {
        x += amplitude * (point.y * frequency + time * 1.7).sin();
        y += amplitude * (point.x * frequency - time * 1.3).cos();
        total += amplitude;
        frequency *= 2.0;
        amplitude *= 0.5;
    }
    Vec2::new(x, y) / total * (GLITCH_SCALE * 0.5)
}
