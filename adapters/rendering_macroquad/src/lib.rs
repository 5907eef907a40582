#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Macroquad-backed rendering adapter for Don't Press.
//!
//! Macroquad's optional audio stack depends on native ALSA development
//! libraries, which are unavailable in the containerised CI environment.
//! To keep `cargo test` usable everywhere we depend on macroquad without its
//! default `audio` feature. Enable this crate's `audio` feature to play the
//! ambient clip; without it audio cues are logged and dropped.
//!
//! Typefaces come from an optional TOML manifest; families it does not list
//! are typeset in macroquad's built-in font.

mod audio;
mod fonts;

use self::{audio::AudioBank, fonts::FontAtlas};
use anyhow::{Context, Result};
use dont_press_core::{ButtonView, Cursor, ShadowLayer, TerminalView, View, Viewport};
use dont_press_rendering::{
    animation::{self, Keyframe},
    Color, ColorTransition, FrameInput, Presentation, RenderingBackend, Scene, SceneLayout,
    BROKEN_BLUR_RADIUS, BROKEN_SATURATION, BUTTON_FONT_SIZE, BUTTON_TRANSITION,
    CONTAINER_TRANSITION, HEADING_FONT_SIZE,
};
use glam::Vec2;
use macroquad::{
    input::{
        is_key_pressed, is_mouse_button_pressed, mouse_position, show_mouse, KeyCode, MouseButton,
    },
    shapes::{draw_circle, draw_circle_lines, draw_line},
    text::{draw_text_ex, measure_text, Font, TextParams},
};
use std::{
    collections::VecDeque,
    path::{Path, PathBuf},
    sync::mpsc,
    time::{Duration, Instant},
};
use tracing::{debug, info};

/// Default location of the font manifest, relative to the repository root.
pub const DEFAULT_FONT_MANIFEST: &str = "assets/fonts.toml";

/// Default location of the ambient clip, relative to the repository root.
pub const DEFAULT_AMBIENT_CLIP: &str = "assets/audio/scream_female_short.ogg";

/// Number of translucent rings used to approximate a glow layer.
const GLOW_STEPS: u32 = 12;

/// Opacity contributed by each glow ring.
const GLOW_STEP_ALPHA: f32 = 0.06;

/// Opacity of the chromatic copies drawn by the glitch filter.
const GLITCH_GHOST_ALPHA: f32 = 0.55;

/// Offsets, in units of the blur radius, at which broken scenes are redrawn.
const BLUR_TAPS: [Vec2; 4] = [
    Vec2::new(1.0, 0.0),
    Vec2::new(-1.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(0.0, -1.0),
];

/// Opacity of each blur tap.
const BLUR_TAP_ALPHA: f32 = 0.3;

/// Maximum share of the window width the terminal headline may occupy.
const TERMINAL_MAX_WIDTH: f32 = 0.8;

/// Radius of the custom cursor glyph.
const CUSTOM_CURSOR_RADIUS: f32 = 9.0;

/// Tracks pointer and click interactions with the button between frames.
#[doc(hidden)]
#[derive(Clone, Copy, Debug, Default)]
pub struct ButtonInputState {
    pointer_inside: bool,
    press_latched: bool,
}

impl ButtonInputState {
    /// Records whether the pointer is over the button this frame and reports
    /// whether it just entered it.
    pub fn track_pointer(&mut self, inside: bool) -> bool {
        let entered = inside && !self.pointer_inside;
        self.pointer_inside = inside;
        entered
    }

    /// Returns whether a press was requested and clears the latch so the
    /// press registers only once.
    pub fn take_press(&mut self) -> bool {
        let latched = self.press_latched;
        self.press_latched = false;
        latched
    }

    /// Records that the button was clicked or activated from the keyboard.
    pub fn register_press(&mut self) {
        self.press_latched = true;
    }

    /// Consumes the latched press and the pointer edge into the input for one frame.
    pub fn frame_input(&mut self, inside: bool, viewport: Viewport) -> FrameInput {
        FrameInput {
            press: self.take_press(),
            hover_entered: self.track_pointer(inside),
            ..FrameInput::idle(viewport)
        }
    }
}

/// Snapshot of edge-triggered keyboard shortcuts observed during a single frame.
#[derive(Clone, Copy, Debug, Default)]
struct KeyboardShortcuts {
    /// `Q` or `Escape` to quit the render loop.
    quit_requested: bool,
    /// `Space` or `Enter` activates the button.
    press_requested: bool,
}

impl KeyboardShortcuts {
    fn poll() -> Self {
        Self {
            quit_requested: is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q),
            press_requested: is_key_pressed(KeyCode::Space) || is_key_pressed(KeyCode::Enter),
        }
    }
}

/// Rendering backend implemented on top of macroquad.
#[derive(Debug)]
pub struct MacroquadBackend {
    swap_interval: Option<i32>,
    show_fps: bool,
    font_manifest: Option<PathBuf>,
    ambient_clip: Option<PathBuf>,
}

impl Default for MacroquadBackend {
    fn default() -> Self {
        Self {
            swap_interval: None,
            show_fps: false,
            font_manifest: Some(PathBuf::from(DEFAULT_FONT_MANIFEST)),
            ambient_clip: Some(PathBuf::from(DEFAULT_AMBIENT_CLIP)),
        }
    }
}

impl MacroquadBackend {
    /// Returns a backend that requests the platform's default swap interval.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the backend to request a specific swap interval from the platform.
    #[must_use]
    pub fn with_swap_interval(mut self, swap_interval: Option<i32>) -> Self {
        self.swap_interval = swap_interval;
        self
    }

    /// Configures the backend to either synchronise presentation with the display refresh rate
    /// or render as fast as possible.
    #[must_use]
    pub fn with_vsync(self, enabled: bool) -> Self {
        let swap_interval = if enabled { Some(1) } else { Some(0) };
        self.with_swap_interval(swap_interval)
    }

    /// Configures whether the backend prints frame timing metrics once per second.
    #[must_use]
    pub fn with_show_fps(mut self, show: bool) -> Self {
        self.show_fps = show;
        self
    }

    /// Overrides the font manifest; `None` typesets everything in the built-in font.
    #[must_use]
    pub fn with_font_manifest(mut self, path: Option<PathBuf>) -> Self {
        self.font_manifest = path;
        self
    }

    /// Overrides the ambient clip; `None` drops every audio cue.
    #[must_use]
    pub fn with_ambient_clip(mut self, path: Option<PathBuf>) -> Self {
        self.ambient_clip = path;
        self
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct FrameBreakdown {
    frame: Duration,
    update: Duration,
    render: Duration,
}

/// Tracks the average frames-per-second produced by the render loop.
#[derive(Debug, Default)]
struct FpsCounter {
    elapsed: Duration,
    frames: u32,
    frame_times: VecDeque<Duration>,
    window_duration: Duration,
    update_accum: Duration,
    render_accum: Duration,
}

#[derive(Clone, Copy, Debug)]
struct FpsMetrics {
    per_second: f32,
    trailing_ten_seconds: f32,
    avg_update: Duration,
    avg_render: Duration,
}

impl FpsCounter {
    /// Records a rendered frame and returns the per-second and trailing ten-second averages once
    /// one second has elapsed.
    fn record_frame(&mut self, breakdown: FrameBreakdown) -> Option<FpsMetrics> {
        self.elapsed += breakdown.frame;
        self.frames = self.frames.saturating_add(1);
        self.update_accum += breakdown.update;
        self.render_accum += breakdown.render;

        self.frame_times.push_back(breakdown.frame);
        self.window_duration += breakdown.frame;

        let trailing_window = Duration::from_secs(10);
        while self.window_duration > trailing_window {
            if let Some(removed) = self.frame_times.pop_front() {
                self.window_duration = self.window_duration.saturating_sub(removed);
            } else {
                break;
            }
        }

        if self.elapsed < Duration::from_secs(1) {
            return None;
        }

        let seconds = self.elapsed.as_secs_f32();
        let frames = self.frames;
        let per_second = frames as f32 / seconds;
        let window_seconds = self.window_duration.as_secs_f32();
        let trailing_ten_seconds = if window_seconds <= f32::EPSILON {
            per_second
        } else {
            self.frame_times.len() as f32 / window_seconds
        };
        let metrics = FpsMetrics {
            per_second,
            trailing_ten_seconds,
            avg_update: self.update_accum / frames,
            avg_render: self.render_accum / frames,
        };

        self.elapsed = Duration::ZERO;
        self.frames = 0;
        self.update_accum = Duration::ZERO;
        self.render_accum = Duration::ZERO;
        Some(metrics)
    }
}

/// Colors the frame is drawn with after transitions are applied.
#[derive(Clone, Copy, Debug, PartialEq)]
struct FrameStyle {
    container_background: Color,
    container_text: Color,
    button_background: Color,
}

impl FrameStyle {
    fn target(scene: &Scene) -> Self {
        let container = scene.bundle.container;
        let container_background = Color::from(container.background);
        let button_background = scene
            .bundle
            .button_view()
            .map_or(container_background, |view| {
                Color::from(view.button.background)
            });
        Self {
            container_background,
            container_text: Color::from(container.text),
            button_background,
        }
    }

    fn saturated(self, factor: f32) -> Self {
        Self {
            container_background: self.container_background.saturate(factor),
            container_text: self.container_text.saturate(factor),
            button_background: self.button_background.saturate(factor),
        }
    }
}

/// Eases every styled color towards the current bundle.
#[derive(Clone, Copy, Debug)]
struct StyleTransitions {
    container_background: ColorTransition,
    container_text: ColorTransition,
    button_background: ColorTransition,
}

impl StyleTransitions {
    fn new(scene: &Scene) -> Self {
        let target = FrameStyle::target(scene);
        Self {
            container_background: ColorTransition::settled(
                target.container_background,
                CONTAINER_TRANSITION,
            ),
            container_text: ColorTransition::settled(target.container_text, CONTAINER_TRANSITION),
            button_background: ColorTransition::settled(
                target.button_background,
                BUTTON_TRANSITION,
            ),
        }
    }

    fn update(&mut self, scene: &Scene, dt: Duration) -> FrameStyle {
        let target = FrameStyle::target(scene);
        let channels = [
            (&mut self.container_background, target.container_background),
            (&mut self.container_text, target.container_text),
            (&mut self.button_background, target.button_background),
        ];
        for (transition, color) in channels {
            transition.retarget(color);
            transition.advance(dt);
        }
        FrameStyle {
            container_background: self.container_background.current(),
            container_text: self.container_text.current(),
            button_background: self.button_background.current(),
        }
    }
}

/// Remembers whether the operating system cursor is hidden.
#[derive(Clone, Copy, Debug, Default)]
struct CursorState {
    hidden: bool,
}

impl CursorState {
    fn apply(&mut self, cursor: Cursor, pointer: Vec2) {
        let hide = cursor == Cursor::Custom;
        if hide != self.hidden {
            show_mouse(!hide);
            self.hidden = hide;
        }
        if hide {
            draw_custom_cursor(pointer);
        }
    }
}

async fn load_assets(
    font_manifest: Option<&Path>,
    ambient_clip: Option<&Path>,
) -> Result<(FontAtlas, AudioBank)> {
    let fonts = FontAtlas::load_optional(font_manifest).context("failed to initialise font atlas")?;
    let audio = AudioBank::load(ambient_clip)
        .await
        .context("failed to initialise audio bank")?;
    Ok((fonts, audio))
}

impl RenderingBackend for MacroquadBackend {
    fn run<F>(self, presentation: Presentation, mut update_scene: F) -> Result<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) + 'static,
    {
        let Self {
            swap_interval,
            show_fps,
            font_manifest,
            ambient_clip,
        } = self;

        let Presentation {
            window_title,
            window_size,
            scene,
        } = presentation;

        let mut config = macroquad::window::Conf {
            window_title,
            window_width: i32::try_from(window_size.width()).unwrap_or(i32::MAX),
            window_height: i32::try_from(window_size.height()).unwrap_or(i32::MAX),
            ..macroquad::window::Conf::default()
        };
        if let Some(swap_interval) = swap_interval {
            config.platform.swap_interval = Some(swap_interval);
        }

        let (init_sender, init_receiver) = mpsc::channel::<Result<()>>();

        macroquad::Window::from_config(config, async move {
            let (fonts, mut audio) =
                match load_assets(font_manifest.as_deref(), ambient_clip.as_deref()).await {
                    Ok(assets) => {
                        let _ = init_sender.send(Ok(()));
                        assets
                    }
                    Err(error) => {
                        let _ = init_sender.send(Err(error));
                        return;
                    }
                };

            let mut scene = scene;
            let mut styles = StyleTransitions::new(&scene);
            let mut input = ButtonInputState::default();
            let mut cursor = CursorState::default();
            let mut fps_counter = FpsCounter::default();

            loop {
                let keyboard = KeyboardShortcuts::poll();
                if keyboard.quit_requested {
                    info!("quit requested");
                    break;
                }

                let viewport = current_viewport();
                let dt_seconds = macroquad::time::get_frame_time();
                let frame_dt = Duration::from_secs_f32(dt_seconds.max(0.0));
                let (pointer_x, pointer_y) = mouse_position();
                let pointer = Vec2::new(pointer_x, pointer_y);

                let layout_before = SceneLayout::resolve(&scene.bundle, viewport);
                let over_button = layout_before
                    .button
                    .map_or(false, |button| button.contains(pointer));
                if keyboard.press_requested
                    || (over_button && is_mouse_button_pressed(MouseButton::Left))
                {
                    input.register_press();
                }
                let frame_input = input.frame_input(over_button, viewport);

                let update_start = Instant::now();
                update_scene(frame_dt, frame_input, &mut scene);
                scene.elapsed += frame_dt;
                let update_duration = update_start.elapsed();

                for cue in scene.audio_cues.drain(..) {
                    audio.play(cue);
                }

                let render_start = Instant::now();
                let style = styles.update(&scene, frame_dt);
                let layout = scene.layout();
                draw_scene(&scene, &layout, &fonts, style);

                let hovered_cursor = match (scene.bundle.button_view(), layout.button) {
                    (Some(view), Some(button)) if button.contains(pointer) => view.button.cursor,
                    _ => Cursor::Pointer,
                };
                cursor.apply(hovered_cursor, pointer);
                let render_duration = render_start.elapsed();

                let fps_metrics = fps_counter.record_frame(FrameBreakdown {
                    frame: frame_dt,
                    update: update_duration,
                    render: render_duration,
                });
                if show_fps {
                    if let Some(FpsMetrics {
                        per_second,
                        trailing_ten_seconds,
                        avg_update,
                        avg_render,
                    }) = fps_metrics
                    {
                        println!(
                            "FPS: {:.2} (10s avg: {:.2}) | update: {:>6.2}ms render: {:>6.2}ms",
                            per_second,
                            trailing_ten_seconds,
                            avg_update.as_secs_f64() * 1_000.0,
                            avg_render.as_secs_f64() * 1_000.0,
                        );
                    }
                }

                macroquad::window::next_frame().await;
            }
        });

        init_receiver.recv().unwrap_or_else(|_| Ok(()))?;
        debug!("render loop finished");

        Ok(())
    }
}

fn current_viewport() -> Viewport {
    let width = macroquad::window::screen_width().max(0.0).round() as u32;
    let height = macroquad::window::screen_height().max(0.0).round() as u32;
    Viewport::new(width, height)
}

fn draw_scene(scene: &Scene, layout: &SceneLayout, fonts: &FontAtlas, style: FrameStyle) {
    let broken = scene.bundle.container.broken;
    let style = if broken {
        style.saturated(BROKEN_SATURATION)
    } else {
        style
    };
    macroquad::window::clear_background(to_macroquad_color(style.container_background));

    let font = fonts.font(scene.bundle.container.font);
    match &scene.bundle.view {
        View::Button(view) => {
            if broken {
                for tap in BLUR_TAPS {
                    draw_button_view(
                        view,
                        scene,
                        layout,
                        font,
                        style,
                        tap * BROKEN_BLUR_RADIUS,
                        BLUR_TAP_ALPHA,
                    );
                }
                draw_button_view(view, scene, layout, font, style, Vec2::ZERO, 0.6);
            } else {
                draw_button_view(view, scene, layout, font, style, Vec2::ZERO, 1.0);
            }
        }
        View::Terminal(terminal) => draw_terminal(terminal, scene, font),
    }
}

fn draw_button_view(
    view: &ButtonView,
    scene: &Scene,
    layout: &SceneLayout,
    font: Option<Font>,
    style: FrameStyle,
    offset: Vec2,
    alpha: f32,
) {
    let center_x = scene.viewport.width() as f32 * 0.5;
    draw_centered_text(
        view.message,
        Vec2::new(center_x, layout.heading_center_y) + offset,
        font,
        HEADING_FONT_SIZE,
        0.0,
        style.container_text.with_alpha(alpha),
    );

    let Some(rect) = layout.button else {
        return;
    };
    let keyframe = animation::sample(view.button.animation, scene.elapsed);
    let center = rect.center() + keyframe.offset + offset;
    let radius = rect.radius() * keyframe.scale;
    let opacity = alpha * keyframe.opacity;

    for layer in view.button.shadow.layers() {
        draw_glow(center, radius, *layer, keyframe, opacity);
    }

    if view.button.glitch_filter {
        let displacement = animation::glitch_displacement(center, scene.elapsed);
        let red = Color::new(1.0, 0.0, 0.2, opacity * GLITCH_GHOST_ALPHA);
        let cyan = Color::new(0.0, 0.9, 1.0, opacity * GLITCH_GHOST_ALPHA);
        draw_disc(center + displacement, radius, red);
        draw_disc(center - displacement, radius, cyan);
    }

    draw_disc(center, radius, style.button_background.with_alpha(opacity));
    draw_circle_lines(
        center.x,
        center.y,
        radius,
        2.0,
        to_macroquad_color(Color::new(1.0, 1.0, 1.0, 0.15 * opacity)),
    );
    draw_centered_text(
        view.button.label,
        center,
        font,
        BUTTON_FONT_SIZE,
        keyframe.rotation_degrees.to_radians(),
        Color::new(1.0, 1.0, 1.0, opacity),
    );
}

fn draw_glow(center: Vec2, radius: f32, layer: ShadowLayer, keyframe: Keyframe, alpha: f32) {
    let color = Color::from(layer.color);
    let spread = layer.spread as f32 + keyframe.glow_boost * 0.5;
    let blur = layer.blur as f32 + keyframe.glow_boost;
    for step in 0..GLOW_STEPS {
        let inset = step as f32 / GLOW_STEPS as f32;
        let ring = radius + spread + blur * (1.0 - inset);
        draw_disc(center, ring, color.with_alpha(alpha * GLOW_STEP_ALPHA));
    }
}

fn draw_terminal(view: &TerminalView, scene: &Scene, font: Option<Font>) {
    let opacity = animation::sample(Some(view.animation), scene.elapsed).opacity;
    let width = scene.viewport.width() as f32;
    let height = scene.viewport.height() as f32;

    let headline = view.headline_text();
    let mut font_size = view.font_size as f32;
    let natural_width = text_width(&headline, font, font_size);
    let max_width = width * TERMINAL_MAX_WIDTH;
    if natural_width > max_width && natural_width > 0.0 {
        font_size *= max_width / natural_width;
    }

    let line_height = font_size * 1.2;
    let base_color = Color::from(view.color).with_alpha(opacity);

    let mut cursor_x = (width - text_width(&headline, font, font_size)) * 0.5;
    let headline_y = height * 0.5 - line_height * 0.5;
    for span in &view.headline {
        let color = span
            .color
            .map_or(base_color, |rgb| Color::from(rgb).with_alpha(opacity));
        let span_width = text_width(span.text, font, font_size);
        draw_centered_text(
            span.text,
            Vec2::new(cursor_x + span_width * 0.5, headline_y),
            font,
            font_size,
            0.0,
            color,
        );
        cursor_x += span_width;
    }

    draw_centered_text(
        view.footer,
        Vec2::new(width * 0.5, headline_y + line_height),
        font,
        font_size,
        0.0,
        base_color,
    );
}

fn draw_custom_cursor(pointer: Vec2) {
    let red = to_macroquad_color(Color::from_rgb_u8(0xff, 0x1a, 0x1a));
    let white = to_macroquad_color(Color::new(1.0, 1.0, 1.0, 0.9));
    draw_circle(pointer.x, pointer.y, CUSTOM_CURSOR_RADIUS, red);
    draw_circle_lines(pointer.x, pointer.y, CUSTOM_CURSOR_RADIUS, 1.5, white);
    let arm = CUSTOM_CURSOR_RADIUS * 0.5;
    draw_line(
        pointer.x - arm,
        pointer.y - arm,
        pointer.x + arm,
        pointer.y + arm,
        2.0,
        white,
    );
    draw_line(
        pointer.x - arm,
        pointer.y + arm,
        pointer.x + arm,
        pointer.y - arm,
        2.0,
        white,
    );
}

fn draw_disc(center: Vec2, radius: f32, color: Color) {
    draw_circle(center.x, center.y, radius, to_macroquad_color(color));
}

fn text_width(text: &str, font: Option<Font>, font_size: f32) -> f32 {
    measure_text(text, font, font_size.round() as u16, 1.0).width
}

fn draw_centered_text(
    text: &str,
    center: Vec2,
    font: Option<Font>,
    font_size: f32,
    rotation: f32,
    color: Color,
) {
    let size = font_size.round() as u16;
    let dimensions = measure_text(text, font, size, 1.0);
    let mut params = TextParams {
        font_size: size,
        rotation,
        color: to_macroquad_color(color),
        ..TextParams::default()
    };
    if let Some(font) = font {
        params.font = font;
    }
    draw_text_ex(
        text,
        center.x - dimensions.width * 0.5,
        center.y + dimensions.offset_y - dimensions.height * 0.5,
        params,
    );
}

fn to_macroquad_color(color: Color) -> macroquad::color::Color {
    macroquad::color::Color::new(color.red, color.green, color.blue, color.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dont_press_core::{
        ButtonPosition, ButtonStyle, ContainerStyle, FontFamily, Placement, PresentationBundle,
        PressCount, Rgb, ShadowIntensity, Stage, StageFlags,
    };

    fn scene(count: u8) -> Scene {
        let count = PressCount::new(count);
        let bundle = PresentationBundle {
            count,
            stage: Stage::from_count(count),
            flags: StageFlags::from_count(count),
            container: ContainerStyle {
                font: FontFamily::DEFAULT,
                background: Rgb::from_hex(0x0d0d0d),
                text: Rgb::from_hex(0xff4d4d),
                broken: false,
            },
            view: View::Button(ButtonView {
                message: "Stop. Seriously.",
                button: ButtonStyle {
                    label: "DO NOT PRESS",
                    background: Rgb::from_hex(0xff3333),
                    shadow: ShadowIntensity::Low,
                    cursor: Cursor::Pointer,
                    animation: None,
                    glitch_filter: false,
                    placement: Placement::Fixed(ButtonPosition::new(10, 10)),
                },
            }),
        };
        Scene::new(bundle, Viewport::new(1000, 800))
    }

    #[test]
    fn fps_counter_reports_once_per_second() {
        let mut counter = FpsCounter::default();
        let frame = FrameBreakdown {
            frame: Duration::from_millis(20),
            update: Duration::from_millis(2),
            render: Duration::from_millis(4),
        };
        for _ in 0..49 {
            assert!(counter.record_frame(frame).is_none());
        }
        let metrics = counter.record_frame(frame).expect("one second elapsed");
        assert!((metrics.per_second - 50.0).abs() < 0.01);
        assert_eq!(metrics.avg_update, Duration::from_millis(2));
        assert_eq!(metrics.avg_render, Duration::from_millis(4));
        assert!(counter.record_frame(frame).is_none());
    }

    #[test]
    fn style_transitions_ease_towards_new_bundle() {
        let mut scene = scene(3);
        let mut styles = StyleTransitions::new(&scene);
        let settled = styles.update(&scene, Duration::from_millis(16));
        assert_eq!(
            settled.button_background,
            Color::from(Rgb::from_hex(0xff3333))
        );

        if let View::Button(view) = &mut scene.bundle.view {
            view.button.background = Rgb::BLACK;
        }
        let midway = styles.update(&scene, BUTTON_TRANSITION / 2);
        assert!((midway.button_background.red - 0.5).abs() < 1e-4);

        let done = styles.update(&scene, BUTTON_TRANSITION);
        assert_eq!(done.button_background, Color::from(Rgb::BLACK));
    }

    #[test]
    fn terminal_scene_styles_button_like_container() {
        let mut terminal = scene(30);
        terminal.bundle.view = View::Terminal(TerminalView::FINAL);
        let target = FrameStyle::target(&terminal);
        assert_eq!(target.button_background, target.container_background);
    }

    #[test]
    fn broken_style_saturates_every_channel() {
        let style = FrameStyle::target(&scene(26)).saturated(BROKEN_SATURATION);
        assert_eq!(style.container_text.red, 1.0);
        assert!(style.container_text.green < Color::from(Rgb::from_hex(0xff4d4d)).green);
    }
}
