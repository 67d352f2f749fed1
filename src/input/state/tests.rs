use super::*;
use crate::draw::{BACKGROUND, Color, FontDescriptor, Shape};
use crate::input::{Cursor, PointerEvent, Tool};

fn create_test_input_state() -> InputState {
    InputState::with_defaults(
        Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        }, // Black
        5.0,  // brush width
        20.0, // font_size
        FontDescriptor::default(),
    )
}

fn segment_style(shape: Option<Shape>) -> (Color, f64) {
    match shape {
        Some(Shape::Segment { color, thick, .. }) => (color, thick),
        other => panic!("expected segment, got {other:?}"),
    }
}

#[test]
fn test_defaults_select_pen() {
    let state = create_test_input_state();
    assert_eq!(state.tool(), Tool::Pen);
    assert_eq!(state.cursor(), Cursor::Crosshair);
    assert!(!state.is_drawing());
}

#[test]
fn test_select_tool_is_mutually_exclusive() {
    let mut state = create_test_input_state();

    for tool in Tool::ALL {
        state.select_tool(tool);
        let active: Vec<Tool> = Tool::ALL
            .into_iter()
            .filter(|t| state.is_tool_active(*t))
            .collect();
        assert_eq!(active, vec![tool]);
        assert_eq!(state.cursor(), tool.cursor());
    }

    // Redundant selection is fine
    state.select_tool(Tool::Text);
    state.select_tool(Tool::Text);
    assert_eq!(state.tool(), Tool::Text);
}

#[test]
fn test_press_without_move_draws_nothing() {
    let mut state = create_test_input_state();
    assert!(state.on_pointer_down(10, 10).is_none());
    assert_eq!(
        state.state,
        DrawingState::Drawing {
            last_x: 10,
            last_y: 10
        }
    );
}

#[test]
fn test_drag_emits_connected_segments() {
    let mut state = create_test_input_state();
    state.on_pointer_down(10, 10);

    let first = state.on_pointer_move(20, 15).unwrap();
    let second = state.on_pointer_move(30, 40).unwrap();

    match (first, second) {
        (
            Shape::Segment {
                x1: 10,
                y1: 10,
                x2: 20,
                y2: 15,
                ..
            },
            Shape::Segment {
                x1: 20,
                y1: 15,
                x2: 30,
                y2: 40,
                ..
            },
        ) => {}
        other => panic!("unexpected segments: {other:?}"),
    }
}

#[test]
fn test_move_without_drag_is_noop() {
    let mut state = create_test_input_state();
    assert!(state.on_pointer_move(50, 50).is_none());
    assert_eq!(state.state, DrawingState::Idle);
}

#[test]
fn test_pointer_up_and_leave_end_drag_idempotently() {
    let mut state = create_test_input_state();

    state.on_pointer_up();
    state.on_pointer_leave();
    assert!(!state.is_drawing());

    state.on_pointer_down(1, 1);
    state.on_pointer_leave();
    assert!(!state.is_drawing());
    assert!(state.on_pointer_move(5, 5).is_none());

    state.on_pointer_down(1, 1);
    state.on_pointer_up();
    state.on_pointer_up();
    assert!(state.on_pointer_move(5, 5).is_none());
}

#[test]
fn test_pen_uses_current_color_and_width() {
    let mut state = create_test_input_state();
    let red = Color::new(1.0, 0.0, 0.0, 1.0);
    state.set_color(red);
    state.set_thickness(9.0);

    state.on_pointer_down(0, 0);
    assert_eq!(segment_style(state.on_pointer_move(5, 5)), (red, 9.0));
}

#[test]
fn test_eraser_paints_background_with_current_width() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Eraser);
    state.set_color(Color::new(0.0, 0.0, 1.0, 1.0));
    state.set_thickness(12.0);

    state.on_pointer_down(0, 0);
    assert_eq!(
        segment_style(state.on_pointer_move(5, 5)),
        (BACKGROUND, 12.0)
    );
}

#[test]
fn test_style_resolved_per_segment_when_switching_mid_drag() {
    let mut state = create_test_input_state();
    state.on_pointer_down(0, 0);
    let (pen_color, _) = segment_style(state.on_pointer_move(10, 0));
    assert_eq!(pen_color, state.current_color);

    // Switching tools does not abort the drag
    state.select_tool(Tool::Eraser);
    assert!(state.is_drawing());
    let (eraser_color, _) = segment_style(state.on_pointer_move(20, 0));
    assert_eq!(eraser_color, BACKGROUND);

    state.set_thickness(2.0);
    state.select_tool(Tool::Pen);
    assert_eq!(
        segment_style(state.on_pointer_move(30, 0)),
        (state.current_color, 2.0)
    );
}

#[test]
fn test_selecting_text_ends_drag() {
    let mut state = create_test_input_state();
    state.on_pointer_down(0, 0);
    state.select_tool(Tool::Text);
    assert!(!state.is_drawing());

    state.select_tool(Tool::Pen);
    assert!(state.on_pointer_move(10, 10).is_none());
}

#[test]
fn test_text_press_stamps_without_dragging() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Text);
    state.set_text_input("  Hi ");
    state.set_font_size(32.0);

    match state.on_pointer_down(50, 50) {
        Some(Shape::Text {
            x: 50,
            y: 50,
            text,
            size,
            color,
            ..
        }) => {
            assert_eq!(text, "  Hi ");
            assert_eq!(size, 32.0);
            assert_eq!(color, state.current_color);
        }
        other => panic!("expected text stamp, got {other:?}"),
    }
    assert!(!state.is_drawing());
    assert!(state.on_pointer_move(60, 60).is_none());
}

#[test]
fn test_whitespace_text_is_silent_noop() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Text);

    state.set_text_input("   ");
    assert!(state.on_pointer_down(50, 50).is_none());

    state.set_text_input("");
    assert!(state.on_pointer_down(50, 50).is_none());
}

#[test]
fn test_stamp_text_requires_text_tool() {
    let mut state = create_test_input_state();
    state.set_text_input("Hello");
    assert!(state.stamp_text(10, 10).is_none());
}

#[test]
fn test_pointer_event_routing() {
    let mut state = create_test_input_state();
    assert!(
        state
            .on_pointer_event(PointerEvent::Down { x: 1, y: 2 })
            .is_none()
    );
    assert!(
        state
            .on_pointer_event(PointerEvent::Move { x: 3, y: 4 })
            .is_some()
    );
    assert!(state.on_pointer_event(PointerEvent::Leave).is_none());
    assert!(!state.is_drawing());
}
