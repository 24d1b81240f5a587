use easel::{BACKGROUND, CanvasController, EditOutcome, PointerEvent, Tool};
use egui::{Color32, Pos2};

fn down(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Down { pos: Pos2::new(x, y) }
}

fn moved(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Move { pos: Pos2::new(x, y) }
}

fn up(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Up { pos: Pos2::new(x, y) }
}

fn small_controller() -> CanvasController {
    CanvasController::with_size(100, 80)
}

#[test]
fn freehand_stroke_commits_one_snapshot_for_many_segments() {
    let mut c = small_controller();
    c.set_tool(Tool::Pen);

    c.handle_event(down(10.0, 10.0));
    for i in 1..=20 {
        let outcome = c.handle_event(moved(10.0 + i as f32, 10.0));
        assert_eq!(outcome, EditOutcome::BufferEdited);
    }
    assert_eq!(c.handle_event(up(30.0, 10.0)), EditOutcome::Committed);

    assert_eq!(c.buffer().get(20, 10).unwrap(), Color32::BLACK);

    // the whole stroke is one undo step
    assert!(c.undo());
    assert_eq!(c.buffer().get(20, 10).unwrap(), BACKGROUND);
    assert!(!c.can_undo());
}

#[test]
fn move_without_a_pointer_down_draws_nothing() {
    let mut c = small_controller();
    c.set_tool(Tool::Pen);

    assert_eq!(c.handle_event(moved(40.0, 40.0)), EditOutcome::Idle);
    assert!(c.buffer().pixels().iter().all(|&p| p == BACKGROUND));
}

#[test]
fn eraser_paints_background_over_ink() {
    let mut c = small_controller();
    c.set_tool(Tool::Pen);
    c.set_pen_width(6);
    c.handle_event(down(20.0, 20.0));
    c.handle_event(moved(60.0, 20.0));
    c.handle_event(up(60.0, 20.0));
    assert_eq!(c.buffer().get(40, 20).unwrap(), Color32::BLACK);

    c.set_tool(Tool::Eraser);
    c.set_pen_width(10);
    c.handle_event(down(20.0, 20.0));
    c.handle_event(moved(60.0, 20.0));
    c.handle_event(up(60.0, 20.0));
    assert_eq!(c.buffer().get(40, 20).unwrap(), BACKGROUND);
}

#[test]
fn shape_drag_direction_does_not_change_the_result() {
    let mut a = small_controller();
    a.set_tool(Tool::Square);
    a.handle_event(down(50.0, 50.0));
    a.handle_event(moved(10.0, 10.0));
    a.handle_event(up(10.0, 10.0));

    let mut b = small_controller();
    b.set_tool(Tool::Square);
    b.handle_event(down(10.0, 10.0));
    b.handle_event(moved(50.0, 50.0));
    b.handle_event(up(50.0, 50.0));

    assert_eq!(a.buffer().pixels(), b.buffer().pixels());
}

#[test]
fn circle_drag_direction_does_not_change_the_result() {
    let mut a = small_controller();
    a.set_tool(Tool::Circle);
    a.handle_event(down(60.0, 70.0));
    a.handle_event(up(20.0, 30.0));

    let mut b = small_controller();
    b.set_tool(Tool::Circle);
    b.handle_event(down(20.0, 30.0));
    b.handle_event(up(60.0, 70.0));

    assert_eq!(a.buffer().pixels(), b.buffer().pixels());
}

#[test]
fn shape_preview_never_mutates_the_buffer() {
    let mut c = small_controller();
    c.set_tool(Tool::Line);

    c.handle_event(down(10.0, 10.0));
    assert_eq!(c.handle_event(moved(80.0, 60.0)), EditOutcome::PreviewUpdated);

    // the rendered surface shows the pending line...
    let preview = c.render();
    let idx = 35 * 100 + 45; // a point on the line from (10,10) to (80,60)
    assert_eq!(preview.pixels[idx], Color32::BLACK);

    // ...but the committed buffer is still blank
    assert!(c.buffer().pixels().iter().all(|&p| p == BACKGROUND));
    assert!(!c.can_undo());
}

#[test]
fn shape_commit_lands_on_pointer_up() {
    let mut c = small_controller();
    c.set_tool(Tool::Line);
    c.handle_event(down(10.0, 40.0));
    c.handle_event(moved(50.0, 40.0));
    assert_eq!(c.handle_event(up(90.0, 40.0)), EditOutcome::Committed);

    // final geometry uses the release point, not the last preview point
    assert_eq!(c.buffer().get(70, 40).unwrap(), Color32::BLACK);
    assert!(c.can_undo());
}

#[test]
fn arrow_commit_draws_a_head_at_the_end_point() {
    let mut c = small_controller();
    c.set_tool(Tool::Arrow);
    c.handle_event(down(10.0, 40.0));
    c.handle_event(up(80.0, 40.0));

    // shaft
    assert_eq!(c.buffer().get(40, 40).unwrap(), Color32::BLACK);
    // head strokes slope back from (80,40) at +-30 degrees; 8 units back
    // along x they sit ~4.6 units off-axis
    let dy = (8.0 * (std::f32::consts::FRAC_PI_6).tan()).round() as i32;
    assert_eq!(c.buffer().get(72, 40 + dy).unwrap(), Color32::BLACK);
    assert_eq!(c.buffer().get(72, 40 - dy).unwrap(), Color32::BLACK);
}

#[test]
fn fill_tool_commits_on_release() {
    let mut c = small_controller();
    c.set_pen_color(Color32::RED);
    c.set_tool(Tool::Fill);

    assert_eq!(c.handle_event(up(50.0, 40.0)), EditOutcome::Committed);
    assert!(c.buffer().pixels().iter().all(|&p| p == Color32::RED));

    assert!(c.undo());
    assert!(c.buffer().pixels().iter().all(|&p| p == BACKGROUND));
}

#[test]
fn fill_released_outside_the_canvas_is_ignored() {
    let mut c = small_controller();
    c.set_pen_color(Color32::RED);
    c.set_tool(Tool::Fill);

    assert_eq!(c.handle_event(up(500.0, 40.0)), EditOutcome::Idle);
    assert!(c.buffer().pixels().iter().all(|&p| p == BACKGROUND));
    assert!(!c.can_undo());
}

#[test]
fn picker_adopts_the_sampled_color_and_returns_to_the_pen() {
    let mut c = small_controller();
    c.set_pen_color(Color32::BLUE);
    c.set_tool(Tool::Fill);
    c.handle_event(up(10.0, 10.0)); // canvas is now blue

    c.set_pen_color(Color32::BLACK);
    c.set_tool(Tool::Picker);
    let outcome = c.handle_event(up(30.0, 30.0));

    assert_eq!(outcome, EditOutcome::ColorPicked { color: Color32::BLUE });
    assert_eq!(c.pen_color(), Color32::BLUE);
    assert_eq!(c.tool(), Tool::Pen);
}

#[test]
fn picker_outside_the_canvas_is_a_silent_noop() {
    let mut c = small_controller();
    c.set_tool(Tool::Picker);
    let before = c.pen_color();

    assert_eq!(c.handle_event(up(-5.0, 10.0)), EditOutcome::Idle);
    assert_eq!(c.pen_color(), before);
    assert_eq!(c.tool(), Tool::Picker);
}

#[test]
fn picker_does_not_commit_history() {
    let mut c = small_controller();
    c.set_tool(Tool::Picker);
    c.handle_event(up(10.0, 10.0));
    assert!(!c.can_undo());
}

#[test]
fn text_tool_requests_input_without_mutating_the_buffer() {
    let mut c = small_controller();
    c.set_tool(Tool::Text);

    let outcome = c.handle_event(up(25.0, 25.0));
    assert_eq!(
        outcome,
        EditOutcome::TextRequested { pos: Pos2::new(25.0, 25.0) }
    );

    // nothing is drawn or committed until the chrome supplies a string
    assert!(c.buffer().pixels().iter().all(|&p| p == BACKGROUND));
    assert!(!c.can_undo());
}

#[test]
fn selecting_a_tool_cancels_a_pending_gesture() {
    let mut c = small_controller();
    c.set_tool(Tool::Square);
    c.handle_event(down(10.0, 10.0));
    c.handle_event(moved(40.0, 40.0));

    // switching tools mid-drag drops the anchor and preview
    c.set_tool(Tool::Pen);
    assert_eq!(c.handle_event(up(40.0, 40.0)), EditOutcome::Committed);
    // the square was never drawn
    assert_eq!(c.buffer().get(10, 25).unwrap(), BACKGROUND);
}

#[test]
fn clear_resets_the_canvas_and_is_undoable() {
    let mut c = small_controller();
    c.set_pen_color(Color32::RED);
    c.set_tool(Tool::Fill);
    c.handle_event(up(10.0, 10.0));

    c.clear();
    assert!(c.buffer().pixels().iter().all(|&p| p == BACKGROUND));

    assert!(c.undo());
    assert!(c.buffer().pixels().iter().all(|&p| p == Color32::RED));
}

#[test]
fn redo_is_invalidated_by_a_new_edit_through_the_controller() {
    let mut c = small_controller();
    c.set_tool(Tool::Pen);

    c.handle_event(down(10.0, 10.0));
    c.handle_event(moved(20.0, 10.0));
    c.handle_event(up(20.0, 10.0));

    assert!(c.undo());
    assert!(c.can_redo());

    c.handle_event(down(10.0, 50.0));
    c.handle_event(moved(20.0, 50.0));
    c.handle_event(up(20.0, 50.0));

    assert!(!c.can_redo());
    assert!(!c.redo());
}
