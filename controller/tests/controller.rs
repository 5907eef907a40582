use std::time::Duration;

use dont_press_controller::{ControllerConfig, StageController};
use dont_press_core::{
    Animation, AudioCue, AudioSink, Cursor, FontFamily, Placement, PressCount, Rgb,
    ShadowIntensity, View, Viewport,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Records the press count at which each cue arrived.
#[derive(Debug, Default)]
struct RecordingSink {
    cues: Vec<AudioCue>,
}

impl AudioSink for RecordingSink {
    fn play(&mut self, cue: AudioCue) {
        self.cues.push(cue);
    }
}

fn controller() -> StageController<RecordingSink> {
    StageController::new(
        ControllerConfig::new(0x00c0_ffee).with_viewport(Viewport::new(1024, 768)),
        RecordingSink::default(),
    )
}

fn press_to(controller: &mut StageController<RecordingSink>, count: u8) {
    while controller.press_count().get() < count {
        controller.register_press();
    }
}

#[test]
fn forty_presses_saturate_counter() {
    let mut controller = controller();
    for _ in 0..40 {
        controller.register_press();
    }
    assert_eq!(controller.press_count(), PressCount::MAX);
}

#[test]
fn ambient_sound_plays_once_at_fifteen() {
    let mut controller = controller();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for press in 1..=31u8 {
        controller.register_press();
        // Repeated renders at the same count must not replay the clip.
        for _ in 0..3 {
            let _ = controller.presentation_with(&mut rng);
        }
        let expected = usize::from(press >= 15);
        assert_eq!(controller.audio().cues.len(), expected, "press {press}");
    }

    assert_eq!(controller.audio().cues, vec![AudioCue::AMBIENT]);
}

#[test]
fn moving_flag_tracks_counter_through_full_run() {
    let mut controller = controller();
    for _ in 0..=31 {
        let value = controller.press_count().get();
        assert_eq!(
            controller.stage_flags().moving(),
            (10..25).contains(&value),
            "count {value}"
        );
        assert_eq!(controller.is_repositioning(), (10..25).contains(&value));
        controller.register_press();
    }
}

#[test]
fn final_stage_is_monotonic() {
    let mut controller = controller();
    press_to(&mut controller, 30);
    for _ in 0..5 {
        assert!(controller.stage_flags().final_stage());
        controller.register_press();
        controller.register_hover();
        controller.advance(Duration::from_secs(1));
    }
    assert!(controller.stage_flags().final_stage());
}

#[test]
fn timer_lifecycle_spans_moving_stage() {
    let mut controller = controller();
    press_to(&mut controller, 9);
    controller.advance(Duration::from_secs(3));
    assert_eq!(controller.button_position().x(), 0);
    assert!(!controller.is_repositioning());

    controller.register_press();
    assert!(controller.is_repositioning());

    let mut positions = Vec::new();
    for _ in 0..6 {
        controller.advance(Duration::from_millis(800));
        positions.push(controller.button_position());
    }
    assert!(
        positions.windows(2).any(|pair| pair[0] != pair[1]),
        "button never moved while timer was running"
    );

    press_to(&mut controller, 25);
    assert!(!controller.is_repositioning());
    let frozen = controller.button_position();
    for _ in 0..10 {
        controller.advance(Duration::from_millis(800));
        controller.register_hover();
    }
    assert_eq!(controller.button_position(), frozen);

    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let bundle = controller.presentation_with(&mut rng);
    let view = bundle.button_view().expect("button still shown while broken");
    assert_eq!(view.button.placement, Placement::Fixed(frozen));
}

#[test]
fn hover_moves_button_within_viewport() {
    let mut controller = controller();
    controller.configure_viewport(Viewport::new(600, 400));
    press_to(&mut controller, 11);

    for _ in 0..50 {
        controller.register_hover();
        let position = controller.button_position();
        assert!((0..450).contains(&position.x()));
        assert!((0..250).contains(&position.y()));
    }
}

#[test]
fn initial_presentation_is_calm() {
    let controller = controller();
    let bundle = controller.presentation();
    let view = bundle.button_view().expect("button visible");

    assert_eq!(view.message, "Whatever you do… don't press it.");
    assert_eq!(view.button.placement, Placement::InFlow);
    assert_eq!(view.button.shadow, ShadowIntensity::Low);
    assert_eq!(bundle.container.font, FontFamily::DEFAULT);
}

#[test]
fn eighteenth_press_presents_shaking_button() {
    let mut controller = controller();
    press_to(&mut controller, 18);
    let bundle = controller.presentation();
    let view = bundle.button_view().expect("button visible");

    assert_eq!(view.message, "I see you.");
    assert_eq!(view.button.animation, Some(Animation::Shake));
    assert_eq!(view.button.background, Rgb::from_hex(0x8b0000));
    assert_eq!(view.button.shadow, ShadowIntensity::High);
    assert_eq!(view.button.cursor, Cursor::Pointer);

    press_to(&mut controller, 20);
    let takeover = controller.presentation();
    let view = takeover.button_view().expect("button visible");
    assert_eq!(view.button.cursor, Cursor::Custom);
}

#[test]
fn thirtieth_press_presents_terminal_view() {
    let mut controller = controller();
    press_to(&mut controller, 30);
    let bundle = controller.presentation();

    assert!(matches!(bundle.view, View::Terminal(_)));
    assert!(bundle.message().is_none());
}
