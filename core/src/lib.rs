#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Don't Press experience.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Systems consume event streams, query immutable
//! snapshots, and respond exclusively with new command batches.

mod presentation;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use presentation::{
    Animation, ButtonStyle, ButtonView, ContainerStyle, Cursor, FontFamily, Placement,
    PresentationBundle, Rgb, ShadowIntensity, ShadowLayer, TerminalSpan, TerminalView, View,
    CHAOTIC_FONTS, CUSTOM_CURSOR_URL,
};

/// Highest value the press counter is allowed to reach.
pub const MAX_PRESS_COUNT: u8 = 31;

/// Side length of the square button footprint measured in logical pixels.
pub const BUTTON_SIZE: u32 = 150;

/// Cadence at which the reposition timer resamples the button position.
pub const REPOSITION_INTERVAL: Duration = Duration::from_millis(800);

/// Press count at which the ambient sound is requested.
pub const AMBIENT_SOUND_PRESS: u8 = 15;

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Records the dimensions of the surface the button is drawn onto.
    ConfigureViewport {
        /// Viewport reported by the rendering adapter.
        viewport: Viewport,
    },
    /// Registers a single press of the button.
    Press,
    /// Registers that the pointer entered the button.
    Hover,
    /// Advances the session clock by the provided delta time.
    Tick {
        /// Duration that elapsed since the previous tick.
        dt: Duration,
    },
    /// Requests that the button jump to the provided position.
    RepositionButton {
        /// Top-left corner the button should occupy.
        position: ButtonPosition,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that the viewport dimensions changed.
    ViewportConfigured {
        /// Viewport that is now authoritative.
        viewport: Viewport,
    },
    /// Indicates that the session clock advanced.
    TimeAdvanced {
        /// Duration of time that elapsed in the tick.
        dt: Duration,
    },
    /// Confirms that a press incremented the counter.
    PressRegistered {
        /// Counter value after the press was applied.
        count: PressCount,
    },
    /// Reports that at least one derived stage flag flipped.
    FlagsChanged {
        /// Flags derived from the counter before the press.
        previous: StageFlags,
        /// Flags derived from the counter after the press.
        current: StageFlags,
    },
    /// Announces that the counter crossed into a new named stage.
    StageEntered {
        /// Stage that became active.
        stage: Stage,
    },
    /// Reports that the pointer entered the button while it is on the move.
    HoverWhileMoving,
    /// Requests a one-shot playback of the ambient clip.
    AmbientSoundRequested {
        /// Clip and volume that should be played.
        cue: AudioCue,
    },
    /// Confirms that the button moved to a new position.
    ButtonRepositioned {
        /// Position the button occupies after the move.
        position: ButtonPosition,
    },
}

/// Number of times the button has been pressed, saturating at [`MAX_PRESS_COUNT`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PressCount(u8);

impl PressCount {
    /// Counter value at the start of every session.
    pub const ZERO: Self = Self(0);

    /// Saturated counter value.
    pub const MAX: Self = Self(MAX_PRESS_COUNT);

    /// Creates a counter, clamping the provided value to [`MAX_PRESS_COUNT`].
    #[must_use]
    pub const fn new(value: u8) -> Self {
        if value > MAX_PRESS_COUNT {
            Self(MAX_PRESS_COUNT)
        } else {
            Self(value)
        }
    }

    /// Retrieves the numeric counter value.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns the counter after one more press, saturating at the maximum.
    #[must_use]
    pub const fn saturating_increment(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    /// Reports whether further presses leave the counter unchanged.
    #[must_use]
    pub const fn is_saturated(&self) -> bool {
        self.0 >= MAX_PRESS_COUNT
    }
}

/// Flags derived from the press counter that gate presentation rules.
///
/// Flags cannot be constructed directly; [`StageFlags::from_count`] is the only
/// way to obtain them, which keeps every flag a function of the counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StageFlags {
    moving: bool,
    ui_broken: bool,
    final_stage: bool,
    glitch: bool,
}

impl StageFlags {
    /// Derives the flags for the provided counter value.
    #[must_use]
    pub const fn from_count(count: PressCount) -> Self {
        let value = count.get();
        let final_stage = value >= 30;
        Self {
            moving: value >= 10 && value < 25,
            ui_broken: value >= 25 && !final_stage,
            final_stage,
            glitch: value >= 12 && value < 20,
        }
    }

    /// Whether the button roams the viewport.
    #[must_use]
    pub const fn moving(&self) -> bool {
        self.moving
    }

    /// Whether the interface is rendered in its broken state.
    #[must_use]
    pub const fn ui_broken(&self) -> bool {
        self.ui_broken
    }

    /// Whether the terminal view replaces the button.
    #[must_use]
    pub const fn final_stage(&self) -> bool {
        self.final_stage
    }

    /// Whether the glitch filter is applied to the button.
    #[must_use]
    pub const fn glitch(&self) -> bool {
        self.glitch
    }

    /// Whether the chaotic font pool replaces the default font.
    #[must_use]
    pub const fn chaotic_font(&self) -> bool {
        self.glitch || self.ui_broken
    }
}

/// Named ranges of the press counter that share presentation rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    /// Counts 0 through 9: the button sits still and warns the player.
    Dormant,
    /// Counts 10 and 11: the button starts running away.
    Restless,
    /// Counts 12 through 17: glitch filter and chaotic fonts kick in.
    Glitching,
    /// Counts 18 and 19: the button darkens and keeps glitching.
    Watching,
    /// Counts 20 through 24: the custom cursor takes over.
    Takeover,
    /// Counts 25 through 29: the interface freezes and breaks apart.
    Broken,
    /// Counts 30 and above: the terminal screen replaces the button.
    Terminal,
}

impl Stage {
    /// Every stage in progression order.
    pub const ALL: [Stage; 7] = [
        Stage::Dormant,
        Stage::Restless,
        Stage::Glitching,
        Stage::Watching,
        Stage::Takeover,
        Stage::Broken,
        Stage::Terminal,
    ];

    /// Resolves the stage that contains the provided counter value.
    #[must_use]
    pub const fn from_count(count: PressCount) -> Self {
        match count.get() {
            0..=9 => Self::Dormant,
            10..=11 => Self::Restless,
            12..=17 => Self::Glitching,
            18..=19 => Self::Watching,
            20..=24 => Self::Takeover,
            25..=29 => Self::Broken,
            _ => Self::Terminal,
        }
    }

    /// Lowest counter value that belongs to the stage.
    #[must_use]
    pub const fn first_count(self) -> PressCount {
        let value = match self {
            Self::Dormant => 0,
            Self::Restless => 10,
            Self::Glitching => 12,
            Self::Watching => 18,
            Self::Takeover => 20,
            Self::Broken => 25,
            Self::Terminal => 30,
        };
        PressCount::new(value)
    }

    /// Human readable label used by logs and the command-line adapter.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dormant => "dormant",
            Self::Restless => "restless",
            Self::Glitching => "glitching",
            Self::Watching => "watching",
            Self::Takeover => "takeover",
            Self::Broken => "broken",
            Self::Terminal => "terminal",
        }
    }
}

/// Top-left corner of the button while it is positioned in fixed mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ButtonPosition {
    x: i32,
    y: i32,
}

impl ButtonPosition {
    /// Position anchored at the viewport origin.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a new button position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal offset from the left edge of the viewport.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical offset from the top edge of the viewport.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }
}

/// Dimensions of the surface the experience is drawn onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Creates a new viewport description.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width of the viewport in logical pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height of the viewport in logical pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Exclusive upper bounds for a randomly placed button's top-left corner.
    ///
    /// Viewports narrower or shorter than the button yield zero along that
    /// axis, which pins the button to the origin.
    #[must_use]
    pub const fn reposition_bounds(&self) -> (u32, u32) {
        (
            self.width.saturating_sub(BUTTON_SIZE),
            self.height.saturating_sub(BUTTON_SIZE),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 800)
    }
}

/// Clips the audio collaborator knows how to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioClip {
    /// Short scream played once the counter reaches [`AMBIENT_SOUND_PRESS`].
    Scream,
}

impl AudioClip {
    /// Canonical location of the clip's source recording.
    #[must_use]
    pub const fn source_url(self) -> &'static str {
        match self {
            Self::Scream => {
                "https://actions.google.com/sounds/v1/human_voices/scream_female_short.ogg"
            }
        }
    }
}

/// Fire-and-forget playback request handed to the audio collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AudioCue {
    clip: AudioClip,
    volume_percent: u8,
}

impl AudioCue {
    /// Ambient scream requested at [`AMBIENT_SOUND_PRESS`].
    pub const AMBIENT: Self = Self::new(AudioClip::Scream, 40);

    /// Creates a new cue; the volume is clamped to 100 percent.
    #[must_use]
    pub const fn new(clip: AudioClip, volume_percent: u8) -> Self {
        let volume_percent = if volume_percent > 100 {
            100
        } else {
            volume_percent
        };
        Self {
            clip,
            volume_percent,
        }
    }

    /// Clip that should be played.
    #[must_use]
    pub const fn clip(&self) -> AudioClip {
        self.clip
    }

    /// Playback volume in the range 0.0..=1.0.
    #[must_use]
    pub fn volume(&self) -> f32 {
        f32::from(self.volume_percent) / 100.0
    }
}

/// Collaborator that plays audio cues requested by the experience.
pub trait AudioSink {
    /// Starts playback of the provided cue without waiting for it to finish.
    fn play(&mut self, cue: AudioCue);
}

impl AudioSink for Vec<AudioCue> {
    fn play(&mut self, cue: AudioCue) {
        self.push(cue);
    }
}
