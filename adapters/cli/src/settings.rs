//! Layered settings: built-in defaults, an optional TOML file, then flags.

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use clap::Args;
use dont_press_controller::ControllerConfig;
use dont_press_core::{Viewport, REPOSITION_INTERVAL};
use dont_press_rendering_macroquad::{DEFAULT_AMBIENT_CLIP, DEFAULT_FONT_MANIFEST};
use serde::Deserialize;
use thiserror::Error;

/// Failures while resolving settings.
#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    #[error("failed to read settings file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("window size {width}x{height} must be non-zero in both dimensions")]
    InvalidViewport { width: u32, height: u32 },
    #[error("reposition interval must be at least one millisecond")]
    InvalidInterval,
}

/// Fully resolved settings for a session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Settings {
    pub(crate) window_width: u32,
    pub(crate) window_height: u32,
    pub(crate) vsync: bool,
    pub(crate) show_fps: bool,
    pub(crate) reposition_interval_ms: u64,
    pub(crate) seed: Option<u64>,
    pub(crate) ambient_clip: Option<PathBuf>,
    pub(crate) font_manifest: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        let viewport = Viewport::default();
        Self {
            window_width: viewport.width(),
            window_height: viewport.height(),
            vsync: true,
            show_fps: false,
            reposition_interval_ms: REPOSITION_INTERVAL.as_millis() as u64,
            seed: None,
            ambient_clip: Some(PathBuf::from(DEFAULT_AMBIENT_CLIP)),
            font_manifest: Some(PathBuf::from(DEFAULT_FONT_MANIFEST)),
        }
    }
}

/// Command-line overrides applied on top of the settings file.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct SettingsOverrides {
    /// Window width in logical pixels.
    #[arg(long, global = true)]
    width: Option<u32>,
    /// Window height in logical pixels.
    #[arg(long, global = true)]
    height: Option<u32>,
    /// Synchronise presentation with the display refresh rate.
    #[arg(long, global = true, value_name = "BOOL")]
    vsync: Option<bool>,
    /// Print frame timing metrics once per second.
    #[arg(long, global = true)]
    show_fps: bool,
    /// Milliseconds between button relocations while it is fleeing.
    #[arg(long = "interval-ms", global = true)]
    reposition_interval_ms: Option<u64>,
    /// Seed for button placement and font selection.
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Path to the ambient clip.
    #[arg(long, global = true)]
    ambient_clip: Option<PathBuf>,
    /// Path to the font manifest.
    #[arg(long, global = true)]
    font_manifest: Option<PathBuf>,
}

impl Settings {
    /// Resolves settings from `config` (when given) and `overrides`.
    pub(crate) fn load(
        config: Option<&Path>,
        overrides: &SettingsOverrides,
    ) -> Result<Self, SettingsError> {
        let mut settings = match config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        settings.apply(overrides);
        settings.validate()?;
        Ok(settings)
    }

    fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let raw = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn parse(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    fn apply(&mut self, overrides: &SettingsOverrides) {
        if let Some(width) = overrides.width {
            self.window_width = width;
        }
        if let Some(height) = overrides.height {
            self.window_height = height;
        }
        if let Some(vsync) = overrides.vsync {
            self.vsync = vsync;
        }
        if overrides.show_fps {
            self.show_fps = true;
        }
        if let Some(interval) = overrides.reposition_interval_ms {
            self.reposition_interval_ms = interval;
        }
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(path) = &overrides.ambient_clip {
            self.ambient_clip = Some(path.clone());
        }
        if let Some(path) = &overrides.font_manifest {
            self.font_manifest = Some(path.clone());
        }
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(SettingsError::InvalidViewport {
                width: self.window_width,
                height: self.window_height,
            });
        }
        if self.reposition_interval_ms == 0 {
            return Err(SettingsError::InvalidInterval);
        }
        Ok(())
    }

    pub(crate) fn viewport(&self) -> Viewport {
        Viewport::new(self.window_width, self.window_height)
    }

    pub(crate) fn reposition_interval(&self) -> Duration {
        Duration::from_millis(self.reposition_interval_ms)
    }

    /// Controller configuration; sessions without a seed draw one from entropy.
    pub(crate) fn controller_config(&self) -> ControllerConfig {
        let config = match self.seed {
            Some(seed) => ControllerConfig::new(seed),
            None => ControllerConfig::from_entropy(),
        };
        config
            .with_reposition_interval(self.reposition_interval())
            .with_viewport(self.viewport())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_session_constants() {
        let settings = Settings::load(None, &SettingsOverrides::default()).expect("defaults");
        assert_eq!(settings.viewport(), Viewport::default());
        assert_eq!(settings.reposition_interval(), REPOSITION_INTERVAL);
        assert!(settings.vsync);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn file_values_fill_unspecified_fields_with_defaults() {
        let settings = Settings::parse(
            r#"
                window_width = 640
                seed = 7
                font_manifest = "fonts/manifest.toml"
            "#,
        )
        .expect("settings should parse");

        assert_eq!(settings.window_width, 640);
        assert_eq!(settings.window_height, Settings::default().window_height);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(
            settings.font_manifest,
            Some(PathBuf::from("fonts/manifest.toml"))
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Settings::parse("window_depth = 3").is_err());
    }

    #[test]
    fn overrides_win_over_file_values() {
        let mut settings = Settings::parse("window_width = 640\nvsync = true").expect("parse");
        settings.apply(&SettingsOverrides {
            width: Some(320),
            vsync: Some(false),
            reposition_interval_ms: Some(250),
            ..SettingsOverrides::default()
        });

        assert_eq!(settings.window_width, 320);
        assert!(!settings.vsync);
        assert_eq!(settings.reposition_interval(), Duration::from_millis(250));
    }

    #[test]
    fn zero_sized_window_is_rejected() {
        let overrides = SettingsOverrides {
            height: Some(0),
            ..SettingsOverrides::default()
        };
        let error = Settings::load(None, &overrides).expect_err("zero height must fail");
        assert!(matches!(
            error,
            SettingsError::InvalidViewport { height: 0, .. }
        ));
    }

    #[test]
    fn zero_interval_is_rejected() {
        let overrides = SettingsOverrides {
            reposition_interval_ms: Some(0),
            ..SettingsOverrides::default()
        };
        assert!(matches!(
            Settings::load(None, &overrides),
            Err(SettingsError::InvalidInterval)
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let error = Settings::load(
            Some(Path::new("does/not/exist.toml")),
            &SettingsOverrides::default(),
        )
        .expect_err("missing file must fail");
        assert!(matches!(error, SettingsError::Read { .. }));
        assert!(error.to_string().contains("does/not/exist.toml"));
    }

    #[test]
    fn seeded_settings_yield_seeded_controller() {
        let overrides = SettingsOverrides {
            seed: Some(42),
            ..SettingsOverrides::default()
        };
        let settings = Settings::load(None, &overrides).expect("settings");
        assert_eq!(settings.controller_config().rng_seed(), 42);
    }
}
