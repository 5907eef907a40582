#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Don't Press adapters.

pub mod animation;

use anyhow::Result as AnyResult;
use dont_press_core::{
    AudioCue, Placement, PresentationBundle, Rgb, View, Viewport, BUTTON_SIZE,
};
use glam::Vec2;
use std::time::Duration;

/// Height reserved for the message heading above the button.
pub const HEADING_HEIGHT: f32 = 32.0;

/// Font size of the message heading.
pub const HEADING_FONT_SIZE: f32 = 24.0;

/// Gap between the message heading and an in-flow button.
pub const HEADING_GAP: f32 = 40.0;

/// Font size of the label printed on the button.
pub const BUTTON_FONT_SIZE: f32 = 18.0;

/// Duration over which button colors ease towards a new value.
pub const BUTTON_TRANSITION: Duration = Duration::from_millis(300);

/// Duration over which container colors ease towards a new value.
pub const CONTAINER_TRANSITION: Duration = Duration::from_millis(500);

/// Blur radius applied to the container while the interface is broken.
pub const BROKEN_BLUR_RADIUS: f32 = 4.0;

/// Saturation multiplier applied to the container while the interface is broken.
pub const BROKEN_SATURATION: f32 = 3.0;

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

    /// Returns the same color with a replaced alpha channel.
    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self {
            red: self.red,
            green: self.green,
            blue: self.blue,
            alpha,
        }
    }

    /// Linearly interpolates towards `target`; `t` is clamped to 0.0..=1.0.
    #[must_use]
    pub fn lerp(self, target: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            red: self.red + (target.red - self.red) * t,
            green: self.green + (target.green - self.green) * t,
            blue: self.blue + (target.blue - self.blue) * t,
            alpha: self.alpha + (target.alpha - self.alpha) * t,
        }
    }

    /// Scales the distance of every channel from its luminance by `factor`.
    #[must_use]
    pub fn saturate(self, factor: f32) -> Self {
        let luminance = 0.2126 * self.red + 0.7152 * self.green + 0.0722 * self.blue;
        let channel = |value: f32| (luminance + (value - luminance) * factor).clamp(0.0, 1.0);
        Self {
            red: channel(self.red),
            green: channel(self.green),
            blue: channel(self.blue),
            alpha: self.alpha,
        }
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Self::from_rgb_u8(value.red(), value.green(), value.blue())
    }
}

/// Eases a color towards its most recent target over a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorTransition {
    from: Color,
    to: Color,
    elapsed: Duration,
    duration: Duration,
}

impl ColorTransition {
    /// Creates a transition that rests on `color`.
    #[must_use]
    pub const fn settled(color: Color, duration: Duration) -> Self {
        Self {
            from: color,
            to: color,
            elapsed: duration,
            duration,
        }
    }

    /// Starts easing from the current color towards `target` unless it is already the target.
    pub fn retarget(&mut self, target: Color) {
        if target == self.to {
            return;
        }
        self.from = self.current();
        self.to = target;
        self.elapsed = Duration::ZERO;
    }

    /// Advances the transition clock.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    /// Color at the current point of the transition.
    #[must_use]
    pub fn current(&self) -> Color {
        if self.duration.is_zero() {
            return self.to;
        }
        let progress = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from.lerp(self.to, ease(progress))
    }
}

/// Cubic ease-in-out curve mapping 0.0..=1.0 onto itself.
#[must_use]
pub fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Input snapshot gathered by adapters before updating the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    /// Whether the button was clicked during this frame.
    pub press: bool,
    /// Whether the pointer entered the button during this frame.
    pub hover_entered: bool,
    /// Size of the drawable surface.
    pub viewport: Viewport,
}

impl FrameInput {
    /// Input for a frame without interaction.
    #[must_use]
    pub const fn idle(viewport: Viewport) -> Self {
        Self {
            press: false,
            hover_entered: false,
            viewport,
        }
    }
}

/// Screen-space square that hosts the circular button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonRect {
    /// Top-left corner in logical pixels.
    pub origin: Vec2,
    /// Side length in logical pixels.
    pub size: f32,
}

impl ButtonRect {
    /// Centre of the button.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.origin + Vec2::splat(self.size * 0.5)
    }

    /// Radius of the circular button.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.size * 0.5
    }

    /// Reports whether `point` lies inside the circular button.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        self.center().distance_squared(point) <= self.radius() * self.radius()
    }
}

/// Resolved positions of the message heading and the button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneLayout {
    /// Vertical centre of the message heading.
    pub heading_center_y: f32,
    /// Button footprint, absent on the terminal screen.
    pub button: Option<ButtonRect>,
}

impl SceneLayout {
    /// Lays out the bundle inside the viewport.
    ///
    /// In-flow buttons are stacked under the heading and the pair is centred.
    /// Fixed buttons leave the flow, so the heading alone is centred.
    #[must_use]
    pub fn resolve(bundle: &PresentationBundle, viewport: Viewport) -> Self {
        let width = viewport.width() as f32;
        let height = viewport.height() as f32;
        let size = BUTTON_SIZE as f32;

        let View::Button(view) = &bundle.view else {
            return Self {
                heading_center_y: height * 0.5,
                button: None,
            };
        };

        match view.button.placement {
            Placement::InFlow => {
                let column_height = HEADING_HEIGHT + HEADING_GAP + size;
                let top = (height - column_height) * 0.5;
                Self {
                    heading_center_y: top + HEADING_HEIGHT * 0.5,
                    button: Some(ButtonRect {
                        origin: Vec2::new((width - size) * 0.5, top + HEADING_HEIGHT + HEADING_GAP),
                        size,
                    }),
                }
            }
            Placement::Fixed(position) => Self {
                heading_center_y: height * 0.5,
                button: Some(ButtonRect {
                    origin: Vec2::new(position.x() as f32, position.y() as f32),
                    size,
                }),
            },
        }
    }
}

/// Scene description handed to the backend every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Presentation bundle derived for the current frame.
    pub bundle: PresentationBundle,
    /// Size of the drawable surface the bundle was derived for.
    pub viewport: Viewport,
    /// Time since the scene was created, driving keyframe animations.
    pub elapsed: Duration,
    /// Audio cues that should start playing this frame.
    pub audio_cues: Vec<AudioCue>,
}

impl Scene {
    /// Creates a new scene descriptor.
    #[must_use]
    pub fn new(bundle: PresentationBundle, viewport: Viewport) -> Self {
        Self {
            bundle,
            viewport,
            elapsed: Duration::ZERO,
            audio_cues: Vec::new(),
        }
    }

    /// Resolves the layout of the scene's current bundle.
    #[must_use]
    pub fn layout(&self) -> SceneLayout {
        SceneLayout::resolve(&self.bundle, self.viewport)
    }
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title used by the created window.
    pub window_title: String,
    /// Initial window size.
    pub window_size: Viewport,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(window_title: T, window_size: Viewport, scene: Scene) -> Self
    where
        T: Into<String>,
    {
        Self {
            window_title: window_title.into(),
            window_size,
            scene,
        }
    }
}

/// Rendering backend capable of presenting Don't Press scenes.
pub trait RenderingBackend {
    /// Runs the rendering backend until it is requested to exit.
    ///
    /// The provided `update_scene` closure receives the frame delta and the
    /// per-frame input captured by the adapter, and replaces the scene's
    /// bundle before it is rendered.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) + 'static;
}
