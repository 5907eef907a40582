#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the Don't Press experience.

mod settings;

use std::{
    fmt,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dont_press_controller::StageController;
use dont_press_core::{
    AudioCue, ButtonPosition, Cursor, PresentationBundle, View, CUSTOM_CURSOR_URL,
};
use dont_press_rendering::{Presentation, RenderingBackend, Scene};
use dont_press_rendering_macroquad::MacroquadBackend;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use self::settings::{Settings, SettingsOverrides};

const WINDOW_TITLE: &str = "Don't Press";

#[derive(Parser, Debug)]
#[command(name = "dont-press", version, about = "A button that asks not to be pressed.")]
struct Cli {
    /// TOML settings file layered under the command-line flags.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(flatten)]
    overrides: SettingsOverrides,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Opens the window (the default).
    Play,
    /// Presses the button without a window and prints the outcome of every press.
    Simulate {
        /// Number of presses to perform.
        #[arg(long, default_value_t = 31)]
        presses: u32,
        /// Print one JSON object per line instead of text.
        #[arg(long)]
        json: bool,
    },
}

/// Entry point for the Don't Press command-line interface.
fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref(), &cli.overrides)
        .context("failed to resolve settings")?;
    info!(?settings, "settings resolved");

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => play(&settings),
        Command::Simulate { presses, json } => simulate(&settings, presses, json),
    }
}

fn play(settings: &Settings) -> Result<()> {
    let viewport = settings.viewport();
    let mut controller = StageController::new(settings.controller_config(), Vec::<AudioCue>::new());
    let scene = Scene::new(controller.presentation(), viewport);
    let presentation = Presentation::new(WINDOW_TITLE, viewport, scene);

    let backend = MacroquadBackend::new()
        .with_vsync(settings.vsync)
        .with_show_fps(settings.show_fps)
        .with_font_manifest(settings.font_manifest.clone())
        .with_ambient_clip(settings.ambient_clip.clone());

    let mut presented = (controller.press_count(), controller.button_position());
    backend
        .run(presentation, move |dt, input, scene| {
            controller.configure_viewport(input.viewport);
            controller.advance(dt);
            if input.hover_entered {
                controller.register_hover();
            }
            if input.press {
                controller.register_press();
            }

            // Re-derive only when the session changed so the chaotic font is
            // resampled per state change rather than per frame.
            let state = (controller.press_count(), controller.button_position());
            if state != presented {
                scene.bundle = controller.presentation();
                presented = state;
            }
            scene.viewport = input.viewport;
            scene.audio_cues.append(controller.audio_mut());
        })
        .context("render loop failed")
}

/// Outcome of a single simulated press.
#[derive(Clone, Debug, PartialEq, Serialize)]
struct PressReport {
    count: u8,
    stage: &'static str,
    moving: bool,
    ui_broken: bool,
    final_stage: bool,
    glitch: bool,
    chaotic_font: bool,
    message: Option<&'static str>,
    background: String,
    font: &'static str,
    font_stack: &'static str,
    animation: Option<&'static str>,
    cursor_image: Option<&'static str>,
    position: (i32, i32),
    sound: bool,
}

impl PressReport {
    fn new(bundle: &PresentationBundle, position: ButtonPosition, sound: bool) -> Self {
        let (background, animation, cursor_image) = match &bundle.view {
            View::Button(view) => (
                view.button.background,
                view.button.animation,
                (view.button.cursor == Cursor::Custom).then_some(CUSTOM_CURSOR_URL),
            ),
            View::Terminal(view) => (bundle.container.background, Some(view.animation), None),
        };
        Self {
            count: bundle.count.get(),
            stage: bundle.stage.label(),
            moving: bundle.flags.moving(),
            ui_broken: bundle.flags.ui_broken(),
            final_stage: bundle.flags.final_stage(),
            glitch: bundle.flags.glitch(),
            chaotic_font: bundle.flags.chaotic_font(),
            message: bundle.message(),
            background: background.to_string(),
            font: bundle.container.font.key(),
            font_stack: bundle.container.font.css_stack(),
            animation: animation.map(|animation| animation.name()),
            cursor_image,
            position: (position.x(), position.y()),
            sound,
        }
    }
}

impl fmt::Display for PressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:>2} {:<9} moving={:<5} broken={:<5} final={:<5} bg={} font={:<13} pos=({}, {})",
            self.count,
            self.stage,
            self.moving,
            self.ui_broken,
            self.final_stage,
            self.background,
            self.font,
            self.position.0,
            self.position.1,
        )?;
        if let Some(animation) = self.animation {
            write!(f, " anim={animation}")?;
        }
        if self.cursor_image.is_some() {
            write!(f, " cursor=custom")?;
        }
        if self.sound {
            write!(f, " sound")?;
        }
        match self.message {
            Some(message) => write!(f, " \"{message}\""),
            None => write!(f, " <terminal>"),
        }
    }
}

/// Presses the button `presses` times, letting one reposition interval pass after each press.
fn simulate_reports(settings: &Settings, presses: u32) -> Vec<PressReport> {
    let config = settings.controller_config();
    let mut font_rng = ChaCha8Rng::seed_from_u64(config.rng_seed());
    let mut controller = StageController::new(config, Vec::<AudioCue>::new());

    let mut reports = Vec::new();
    for _ in 0..presses {
        controller.register_press();
        controller.advance(settings.reposition_interval());
        let sound = !controller.audio().is_empty();
        controller.audio_mut().clear();
        let bundle = controller.presentation_with(&mut font_rng);
        reports.push(PressReport::new(
            &bundle,
            controller.button_position(),
            sound,
        ));
    }
    controller.shutdown();
    reports
}

fn simulate(settings: &Settings, presses: u32, json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for report in simulate_reports(settings, presses) {
        if json {
            serde_json::to_writer(&mut out, &report).context("failed to encode press report")?;
            writeln!(out).context("failed to write press report")?;
        } else {
            writeln!(out, "{report}").context("failed to write press report")?;
        }
    }
    out.flush().context("failed to flush press reports")
}
