//! Presentation bundle handed from the simulation to rendering adapters.

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{ButtonPosition, PressCount, Stage, StageFlags};

/// Image shown in place of the pointer once the takeover begins.
pub const CUSTOM_CURSOR_URL: &str = "https://cdn-icons-png.flaticon.com/512/888/888879.png";

/// Fonts sampled while the interface is glitching or broken.
pub const CHAOTIC_FONTS: [FontFamily; 5] = [
    FontFamily::ComicSans,
    FontFamily::Papyrus,
    FontFamily::CourierNew,
    FontFamily::Wingdings,
    FontFamily::Impact,
];

/// Opaque color expressed as byte RGB components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::from_rgb(0x00, 0x00, 0x00);
    /// Pure white.
    pub const WHITE: Self = Self::from_rgb(0xff, 0xff, 0xff);

    /// Creates a new color from byte RGB components.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Creates a new color from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_hex(packed: u32) -> Self {
        Self {
            red: ((packed >> 16) & 0xff) as u8,
            green: ((packed >> 8) & 0xff) as u8,
            blue: (packed & 0xff) as u8,
        }
    }

    /// Red component of the color.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green component of the color.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue component of the color.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// Single glow layer drawn around the button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShadowLayer {
    /// Blur radius in logical pixels.
    pub blur: u32,
    /// Spread radius in logical pixels.
    pub spread: u32,
    /// Color of the glow.
    pub color: Rgb,
}

impl ShadowLayer {
    /// Creates a new glow layer.
    #[must_use]
    pub const fn new(blur: u32, spread: u32, color: Rgb) -> Self {
        Self {
            blur,
            spread,
            color,
        }
    }
}

const LOW_SHADOW: [ShadowLayer; 1] = [ShadowLayer::new(15, 5, Rgb::from_hex(0xff4d4d))];
const HIGH_SHADOW: [ShadowLayer; 2] = [
    ShadowLayer::new(30, 10, Rgb::from_hex(0xff1a1a)),
    ShadowLayer::new(60, 20, Rgb::from_hex(0xff6666)),
];

/// Strength of the glow surrounding the button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShadowIntensity {
    /// Single soft glow.
    Low,
    /// Double glow used once the button starts glitching.
    High,
}

impl ShadowIntensity {
    /// Glow layers drawn from the innermost outwards.
    #[must_use]
    pub const fn layers(self) -> &'static [ShadowLayer] {
        match self {
            Self::Low => &LOW_SHADOW,
            Self::High => &HIGH_SHADOW,
        }
    }
}

/// Font families the interface can be typeset in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    /// Calm default font.
    IbmPlexMono,
    /// Comic Sans MS.
    ComicSans,
    /// Papyrus.
    Papyrus,
    /// Courier New.
    CourierNew,
    /// Wingdings.
    Wingdings,
    /// Impact.
    Impact,
}

impl FontFamily {
    /// Font used whenever the interface is not glitching.
    pub const DEFAULT: Self = Self::IbmPlexMono;

    /// Every family, the default first.
    pub const ALL: [Self; 6] = [
        Self::IbmPlexMono,
        Self::ComicSans,
        Self::Papyrus,
        Self::CourierNew,
        Self::Wingdings,
        Self::Impact,
    ];

    /// CSS-style font stack describing the family and its fallbacks.
    #[must_use]
    pub const fn css_stack(self) -> &'static str {
        match self {
            Self::IbmPlexMono => "'IBM Plex Mono', monospace",
            Self::ComicSans => "'Comic Sans MS', cursive, sans-serif",
            Self::Papyrus => "'Papyrus', fantasy",
            Self::CourierNew => "'Courier New', monospace",
            Self::Wingdings => "'Wingdings'",
            Self::Impact => "'Impact', Charcoal, sans-serif",
        }
    }

    /// Short identifier used to look the family up in font manifests.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::IbmPlexMono => "ibm_plex_mono",
            Self::ComicSans => "comic_sans",
            Self::Papyrus => "papyrus",
            Self::CourierNew => "courier_new",
            Self::Wingdings => "wingdings",
            Self::Impact => "impact",
        }
    }

    /// Looks a family up by its manifest key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|family| family.key() == key)
    }
}

/// Pointer appearance while hovering the experience.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cursor {
    /// Regular pointing hand.
    Pointer,
    /// Custom image located at [`CUSTOM_CURSOR_URL`].
    Custom,
}

/// Looping keyframe animations applied to presented elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Animation {
    /// Button breathes in and out while its glow swells.
    Pulse,
    /// Button jitters and rotates in place.
    Shake,
    /// Terminal text blinks irregularly.
    Flicker,
}

impl Animation {
    /// Keyframe name of the animation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pulse => "pulse",
            Self::Shake => "shake",
            Self::Flicker => "flicker",
        }
    }

    /// Duration of a single loop of the animation.
    #[must_use]
    pub const fn period(self) -> Duration {
        match self {
            Self::Pulse => Duration::from_millis(1_500),
            Self::Shake => Duration::from_millis(500),
            Self::Flicker => Duration::from_secs(2),
        }
    }
}

/// Layout mode of the button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// Button flows beneath the message in the centre of the container.
    InFlow,
    /// Button is pinned to an absolute viewport position.
    Fixed(ButtonPosition),
}

/// Styling applied to the full-screen container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContainerStyle {
    /// Font every text element inherits.
    pub font: FontFamily,
    /// Background fill of the container.
    pub background: Rgb,
    /// Default text color.
    pub text: Rgb,
    /// Whether the blur and oversaturation filter is applied.
    pub broken: bool,
}

/// Styling of the button itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ButtonStyle {
    /// Text printed on the button.
    pub label: &'static str,
    /// Fill color of the button.
    pub background: Rgb,
    /// Glow surrounding the button.
    pub shadow: ShadowIntensity,
    /// Pointer appearance while hovering the button.
    pub cursor: Cursor,
    /// Looping animation, if any.
    pub animation: Option<Animation>,
    /// Whether the glitch displacement filter is applied.
    pub glitch_filter: bool,
    /// Layout mode of the button.
    pub placement: Placement,
}

/// Message and button shown before the terminal stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ButtonView {
    /// Heading displayed above the button.
    pub message: &'static str,
    /// Styling of the button.
    pub button: ButtonStyle,
}

/// Fragment of terminal text drawn in a single color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TerminalSpan {
    /// Text of the fragment.
    pub text: &'static str,
    /// Color override, if the fragment does not inherit the heading color.
    pub color: Option<Rgb>,
}

impl TerminalSpan {
    const fn plain(text: &'static str) -> Self {
        Self { text, color: None }
    }

    const fn colored(text: &'static str, color: Rgb) -> Self {
        Self {
            text,
            color: Some(color),
        }
    }
}

/// Full-screen message that replaces the button once the final stage begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TerminalView {
    /// Spans composing the first line.
    pub headline: [TerminalSpan; 3],
    /// Second line of the message.
    pub footer: &'static str,
    /// Color of uncolored spans.
    pub color: Rgb,
    /// Font size in logical pixels.
    pub font_size: u32,
    /// Animation applied to the whole message.
    pub animation: Animation,
}

impl TerminalView {
    /// The one and only terminal message.
    pub const FINAL: Self = Self {
        headline: [
            TerminalSpan::plain("Now "),
            TerminalSpan::colored("YOU", Rgb::from_hex(0xff1a1a)),
            TerminalSpan::plain(" are the button."),
        ],
        footer: "Click anywhere… forever.",
        color: Rgb::BLACK,
        font_size: 48,
        animation: Animation::Flicker,
    };

    /// Concatenated text of the headline.
    #[must_use]
    pub fn headline_text(&self) -> String {
        self.headline.iter().map(|span| span.text).collect()
    }
}

/// Content shown inside the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum View {
    /// Message and button.
    Button(ButtonView),
    /// Terminal screen.
    Terminal(TerminalView),
}

/// Every display parameter derived from the press counter and button position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PresentationBundle {
    /// Counter value the bundle was derived from.
    pub count: PressCount,
    /// Stage that contains the counter.
    pub stage: Stage,
    /// Flags derived from the counter.
    pub flags: StageFlags,
    /// Styling applied to the container.
    pub container: ContainerStyle,
    /// Content inside the container.
    pub view: View,
}

impl PresentationBundle {
    /// Button view, unless the terminal screen is shown.
    #[must_use]
    pub const fn button_view(&self) -> Option<&ButtonView> {
        match &self.view {
            View::Button(view) => Some(view),
            View::Terminal(_) => None,
        }
    }

    /// Message heading, unless the terminal screen is shown.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        self.button_view().map(|view| view.message)
    }
}
