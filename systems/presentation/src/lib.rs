#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that derives every display parameter from the press counter.
//!
//! Apart from the font, each field of the [`PresentationBundle`] is a function
//! of the counter and the button position. While the interface is glitching
//! or broken the font is resampled from [`CHAOTIC_FONTS`] on every derivation,
//! so consecutive frames may flicker between families.

use dont_press_core::{
    Animation, ButtonPosition, ButtonStyle, ButtonView, ContainerStyle, Cursor, FontFamily,
    Placement, PresentationBundle, PressCount, Rgb, ShadowIntensity, Stage, StageFlags,
    TerminalView, View, CHAOTIC_FONTS,
};
use rand::{seq::SliceRandom, Rng};

/// Message shown for counts absent from [`MESSAGES`].
pub const FALLBACK_MESSAGE: &str = "...";

/// Messages keyed by the exact counter value that reveals them.
pub const MESSAGES: [(u8, &str); 12] = [
    (0, "Whatever you do… don't press it."),
    (1, "You were warned."),
    (3, "Stop. Seriously."),
    (5, "The button’s watching you."),
    (7, "It's alive."),
    (10, "Try to catch me."),
    (12, "System glitch detected."),
    (15, "Aaaaaahhhhh!!!"),
    (18, "I see you."),
    (20, "Wingdings takeover."),
    (25, "The UI is breaking."),
    (30, "You became the button."),
];

const CALM_RED: Rgb = Rgb::from_hex(0xff3333);
const ANGRY_RED: Rgb = Rgb::from_hex(0xff1a1a);
const DARK_RED: Rgb = Rgb::from_hex(0x8b0000);
const CONTAINER_BACKGROUND: Rgb = Rgb::from_hex(0x0d0d0d);
const CONTAINER_TEXT: Rgb = Rgb::from_hex(0xff4d4d);

/// Looks up the message for the provided counter value.
#[must_use]
pub fn message_for(count: PressCount) -> &'static str {
    MESSAGES
        .iter()
        .find(|(value, _)| *value == count.get())
        .map_or(FALLBACK_MESSAGE, |(_, message)| *message)
}

/// Fill color of the button for the provided counter value.
#[must_use]
pub const fn button_background(count: PressCount) -> Rgb {
    match count.get() {
        0..=9 => CALM_RED,
        10..=17 => ANGRY_RED,
        18..=24 => DARK_RED,
        _ => Rgb::BLACK,
    }
}

/// Glow strength for the provided counter value.
#[must_use]
pub const fn shadow(count: PressCount) -> ShadowIntensity {
    if count.get() >= 12 {
        ShadowIntensity::High
    } else {
        ShadowIntensity::Low
    }
}

/// Pointer appearance for the provided counter value.
#[must_use]
pub const fn cursor(count: PressCount) -> Cursor {
    if count.get() >= 20 {
        Cursor::Custom
    } else {
        Cursor::Pointer
    }
}

/// Animation that plays on exactly one counter value each.
#[must_use]
pub const fn animation(count: PressCount) -> Option<Animation> {
    match count.get() {
        5 => Some(Animation::Pulse),
        18 => Some(Animation::Shake),
        _ => None,
    }
}

/// Text printed on the button.
#[must_use]
pub const fn button_label(count: PressCount) -> &'static str {
    if count.get() < 25 {
        "DO NOT PRESS"
    } else {
        "THE BUTTON"
    }
}

/// Layout mode of the button; once it starts moving it stays pinned to `position`.
#[must_use]
pub const fn placement(count: PressCount, position: ButtonPosition) -> Placement {
    if count.get() >= 10 {
        Placement::Fixed(position)
    } else {
        Placement::InFlow
    }
}

/// Picks the font for one derivation.
pub fn font<R: Rng + ?Sized>(flags: StageFlags, rng: &mut R) -> FontFamily {
    if flags.chaotic_font() {
        CHAOTIC_FONTS
            .choose(rng)
            .copied()
            .unwrap_or(FontFamily::DEFAULT)
    } else {
        FontFamily::DEFAULT
    }
}

/// Derives the complete presentation bundle.
pub fn present<R: Rng + ?Sized>(
    count: PressCount,
    position: ButtonPosition,
    rng: &mut R,
) -> PresentationBundle {
    let flags = StageFlags::from_count(count);
    let stage = Stage::from_count(count);

    let typeface = font(flags, rng);
    let container = if flags.final_stage() {
        ContainerStyle {
            font: typeface,
            background: Rgb::WHITE,
            text: Rgb::BLACK,
            broken: false,
        }
    } else {
        ContainerStyle {
            font: typeface,
            background: CONTAINER_BACKGROUND,
            text: CONTAINER_TEXT,
            broken: flags.ui_broken(),
        }
    };

    let view = if flags.final_stage() {
        View::Terminal(TerminalView::FINAL)
    } else {
        View::Button(ButtonView {
            message: message_for(count),
            button: ButtonStyle {
                label: button_label(count),
                background: button_background(count),
                shadow: shadow(count),
                cursor: cursor(count),
                animation: animation(count),
                glitch_filter: flags.glitch(),
                placement: placement(count, position),
            },
        })
    };

    PresentationBundle {
        count,
        stage,
        flags,
        container,
        view,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_counts_fall_back_to_ellipsis() {
        assert_eq!(message_for(PressCount::new(2)), FALLBACK_MESSAGE);
        assert_eq!(message_for(PressCount::new(31)), FALLBACK_MESSAGE);
        assert_eq!(message_for(PressCount::new(7)), "It's alive.");
    }

    #[test]
    fn background_follows_threshold_table() {
        let expected = [
            (0, CALM_RED),
            (9, CALM_RED),
            (10, ANGRY_RED),
            (17, ANGRY_RED),
            (18, DARK_RED),
            (24, DARK_RED),
            (25, Rgb::BLACK),
            (29, Rgb::BLACK),
        ];
        for (value, color) in expected {
            assert_eq!(button_background(PressCount::new(value)), color, "count {value}");
        }
    }

    #[test]
    fn shadow_intensifies_at_twelve() {
        for value in [0, 9, 10, 11] {
            assert_eq!(
                shadow(PressCount::new(value)),
                ShadowIntensity::Low,
                "count {value}"
            );
        }
        for value in [12, 24, 25, 30] {
            assert_eq!(
                shadow(PressCount::new(value)),
                ShadowIntensity::High,
                "count {value}"
            );
        }
    }

    #[test]
    fn animations_match_exact_counts_only() {
        let animated: Vec<(u8, Animation)> = (0..=31)
            .filter_map(|value| animation(PressCount::new(value)).map(|anim| (value, anim)))
            .collect();
        assert_eq!(animated, vec![(5, Animation::Pulse), (18, Animation::Shake)]);
    }

    #[test]
    fn cursor_switches_at_twenty() {
        assert_eq!(cursor(PressCount::new(19)), Cursor::Pointer);
        assert_eq!(cursor(PressCount::new(20)), Cursor::Custom);
        assert_eq!(cursor(PressCount::new(27)), Cursor::Custom);
    }

    #[test]
    fn label_changes_once_broken() {
        assert_eq!(button_label(PressCount::new(24)), "DO NOT PRESS");
        assert_eq!(button_label(PressCount::new(25)), "THE BUTTON");
    }
}
