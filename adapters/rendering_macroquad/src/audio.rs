//! Playback of audio cues requested by the scene.
//!
//! Without the `audio` feature cues are logged and dropped.

use std::path::Path;

use anyhow::Result;
use dont_press_core::AudioCue;
#[cfg(feature = "audio")]
use macroquad::audio::{load_sound_from_bytes, play_sound, PlaySoundParams, Sound};
use tracing::{info, warn};

/// Decoded clips ready for playback.
pub(crate) struct AudioBank {
    #[cfg(feature = "audio")]
    scream: Option<Sound>,
}

impl AudioBank {
    /// Loads the ambient clip at `path`; a missing file leaves the bank silent.
    #[cfg(feature = "audio")]
    pub(crate) async fn load(path: Option<&Path>) -> Result<Self> {
        use anyhow::{anyhow, Context};

        let Some(path) = path else {
            return Ok(Self { scream: None });
        };
        if !path.exists() {
            warn!(path = %path.display(), "ambient clip not found, cues will be dropped");
            return Ok(Self { scream: None });
        }
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read ambient clip at {}", path.display()))?;
        let sound = load_sound_from_bytes(&bytes)
            .await
            .map_err(|error| anyhow!("failed to decode ambient clip: {error:?}"))?;
        info!(path = %path.display(), "ambient clip loaded");
        Ok(Self { scream: Some(sound) })
    }

    /// Playback is compiled out; the bank only reports dropped cues.
    #[cfg(not(feature = "audio"))]
    pub(crate) async fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            info!(
                path = %path.display(),
                "built without the `audio` feature, ambient clip ignored"
            );
        }
        Ok(Self {})
    }

    /// Starts playing `cue` once.
    #[cfg(feature = "audio")]
    pub(crate) fn play(&mut self, cue: AudioCue) {
        match self.scream {
            Some(sound) => {
                info!(clip = ?cue.clip(), volume = cue.volume(), "playing audio cue");
                play_sound(
                    sound,
                    PlaySoundParams {
                        looped: false,
                        volume: cue.volume(),
                    },
                );
            }
            None => warn!(clip = ?cue.clip(), "no clip loaded, audio cue dropped"),
        }
    }

    /// Starts playing `cue` once.
    #[cfg(not(feature = "audio"))]
    pub(crate) fn play(&mut self, cue: AudioCue) {
        warn!(
            clip = ?cue.clip(),
            url = cue.clip().source_url(),
            "audio playback disabled, cue dropped"
        );
    }
}
