use dont_press_core::Viewport;
use dont_press_rendering::FrameInput;
use dont_press_rendering_macroquad::ButtonInputState;

fn run_press_sequence(sequence: &[bool]) -> Vec<bool> {
    let mut state = ButtonInputState::default();
    let mut presses = Vec::new();
    for &clicked in sequence {
        let press = state.take_press();
        presses.push(press);
        if clicked {
            state.register_press();
        }
    }

    // Flush any trailing latched press so the harness observes the final click.
    presses.push(state.take_press());
    presses
}

fn run_pointer_sequence(sequence: &[bool]) -> Vec<bool> {
    let mut state = ButtonInputState::default();
    sequence
        .iter()
        .map(|&inside| state.track_pointer(inside))
        .collect()
}

#[test]
fn press_sequence_is_deterministic() {
    let click_sequence = [false, true, false, true, true, false];
    let expected = vec![false, false, true, false, true, true, false];

    let first_run = run_press_sequence(&click_sequence);
    let second_run = run_press_sequence(&click_sequence);

    assert_eq!(first_run, expected);
    assert_eq!(first_run, second_run);
}

#[test]
fn simultaneous_click_and_key_register_one_press() {
    let mut state = ButtonInputState::default();
    state.register_press();
    state.register_press();

    assert!(state.take_press());
    assert!(!state.take_press());
}

#[test]
fn hover_fires_only_when_pointer_enters() {
    let pointer_inside = [false, true, true, true, false, false, true, false, true];
    let expected = vec![false, true, false, false, false, false, true, false, true];

    assert_eq!(run_pointer_sequence(&pointer_inside), expected);
}

#[test]
fn pointer_starting_inside_counts_as_entering() {
    assert_eq!(run_pointer_sequence(&[true, true]), vec![true, false]);
}

#[test]
fn frame_input_consumes_latch_and_edge() {
    let viewport = Viewport::new(640, 480);
    let mut state = ButtonInputState::default();

    assert_eq!(state.frame_input(false, viewport), FrameInput::idle(viewport));

    state.register_press();
    let entering = state.frame_input(true, viewport);
    assert!(entering.press);
    assert!(entering.hover_entered);
    assert_eq!(entering.viewport, viewport);

    assert_eq!(state.frame_input(true, viewport), FrameInput::idle(viewport));
}
