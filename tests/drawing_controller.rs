use egui::{Color32, Pos2};
use ink_canvas::{
    BrushState, CanvasConfig, Canvas, Command, DrawingController, PointerEvent, RenderSurface,
};

fn create_controller() -> DrawingController {
    DrawingController::new(Canvas::new(), BrushState::new(Color32::RED, 3.0))
}

// Press at the first point, move through the rest, release
fn draw(controller: &mut DrawingController, points: &[(f32, f32)]) {
    let (first, rest) = points.split_first().expect("at least one point");
    controller.on_press(Pos2::new(first.0, first.1));
    for (x, y) in rest {
        controller.on_move(Pos2::new(*x, *y));
    }
    controller.on_release();
}

#[test]
fn test_stroke_atomicity() {
    let mut controller = create_controller();
    let points = [(0.0, 0.0), (5.0, 0.0), (5.0, 5.0), (10.0, 5.0), (10.0, 10.0)];

    draw(&mut controller, &points);

    let history = controller.history();
    assert_eq!(history.len(), 1);
    let Command::Stroke { segments } = &history.entries()[0] else {
        panic!("expected a stroke command");
    };
    assert_eq!(segments.len(), 4);
    for (segment, pair) in segments.iter().zip(points.windows(2)) {
        assert_eq!(segment.start(), Pos2::new(pair[0].0, pair[0].1));
        assert_eq!(segment.end(), Pos2::new(pair[1].0, pair[1].1));
    }
    assert_eq!(controller.surface().len(), 4);
}

#[test]
fn test_segments_appear_live_before_release() {
    let mut controller = create_controller();

    controller.on_press(Pos2::new(0.0, 0.0));
    controller.on_move(Pos2::new(1.0, 0.0));
    assert_eq!(controller.surface().len(), 1);
    controller.on_move(Pos2::new(2.0, 0.0));
    assert_eq!(controller.surface().len(), 2);
    assert!(controller.history().is_empty());

    controller.on_release();
    assert_eq!(controller.history().len(), 1);
    assert_eq!(controller.surface().len(), 2);
}

#[test]
fn test_tap_commits_nothing() {
    let mut controller = create_controller();

    controller.on_press(Pos2::new(3.0, 3.0));
    controller.on_release();

    assert!(controller.history().is_empty());
    assert!(controller.surface().is_empty());
    assert!(!controller.can_undo());
}

#[test]
fn test_move_and_release_without_press_are_noops() {
    let mut controller = create_controller();

    controller.on_move(Pos2::new(1.0, 1.0));
    controller.on_release();

    assert!(controller.surface().is_empty());
    assert!(controller.history().is_empty());
    assert!(!controller.is_drawing());
}

#[test]
fn test_undo_redo_round_trip() {
    let mut controller = create_controller();
    draw(&mut controller, &[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);

    let after_commit: Vec<_> = controller.surface().segments().iter().map(|s| s.id()).collect();

    assert!(controller.undo());
    assert!(controller.surface().is_empty());
    assert!(controller.redo());

    let mut restored: Vec<_> = controller.surface().segments().iter().map(|s| s.id()).collect();
    restored.sort();
    let mut expected = after_commit;
    expected.sort();
    assert_eq!(restored, expected);
}

#[test]
fn test_clear_on_empty_is_noop() {
    let mut controller = create_controller();

    assert!(!controller.clear());
    assert!(controller.history().is_empty());
}

#[test]
fn test_clear_is_undoable() {
    let mut controller = create_controller();
    draw(&mut controller, &[(0.0, 0.0), (1.0, 1.0)]);
    draw(&mut controller, &[(5.0, 5.0), (6.0, 6.0), (7.0, 7.0)]);
    let before: Vec<_> = controller.surface().segments().iter().map(|s| s.id()).collect();

    assert!(controller.clear());
    assert!(controller.surface().is_empty());
    assert_eq!(controller.history().len(), 3);

    assert!(controller.undo());
    let restored: Vec<_> = controller.surface().segments().iter().map(|s| s.id()).collect();
    assert_eq!(restored, before);
}

#[test]
fn test_undo_exhaustion() {
    let mut controller = create_controller();
    draw(&mut controller, &[(0.0, 0.0), (1.0, 1.0)]);
    draw(&mut controller, &[(2.0, 2.0), (3.0, 3.0)]);
    controller.clear();
    draw(&mut controller, &[(4.0, 4.0), (5.0, 5.0)]);

    for _ in 0..10 {
        controller.undo();
    }

    assert!(controller.surface().is_empty());
    assert!(!controller.can_undo());
    assert!(controller.can_redo());
}

#[test]
fn test_new_stroke_after_undo_prunes_redo() {
    let mut controller = create_controller();
    draw(&mut controller, &[(0.0, 0.0), (1.0, 1.0)]);
    draw(&mut controller, &[(2.0, 2.0), (3.0, 3.0)]);

    controller.undo();
    draw(&mut controller, &[(8.0, 8.0), (9.0, 9.0)]);

    assert!(!controller.redo());
    assert_eq!(controller.history().len(), 2);
    assert_eq!(controller.surface().len(), 2);
}

#[test]
fn test_press_while_drawing_discards_partial_stroke() {
    let mut controller = create_controller();

    controller.on_press(Pos2::new(0.0, 0.0));
    controller.on_move(Pos2::new(1.0, 0.0));
    controller.on_move(Pos2::new(2.0, 0.0));

    // Second press without a release: the partial stroke goes away
    controller.on_press(Pos2::new(50.0, 50.0));
    assert!(controller.surface().is_empty());
    assert!(controller.history().is_empty());

    controller.on_move(Pos2::new(60.0, 50.0));
    controller.on_release();

    assert_eq!(controller.history().len(), 1);
    assert_eq!(controller.surface().len(), 1);
    assert_eq!(controller.surface().segments()[0].start(), Pos2::new(50.0, 50.0));
}

#[test]
fn test_cancel_leaves_no_orphans() {
    let mut controller = create_controller();
    draw(&mut controller, &[(0.0, 0.0), (1.0, 1.0)]);

    controller.on_press(Pos2::new(10.0, 10.0));
    controller.on_move(Pos2::new(20.0, 20.0));
    controller.on_cancel();

    assert!(!controller.is_drawing());
    assert_eq!(controller.surface().len(), 1);
    assert_eq!(controller.history().len(), 1);

    controller.undo();
    assert!(controller.surface().is_empty());
}

#[test]
fn test_undo_mid_gesture_abandons_it() {
    let mut controller = create_controller();
    draw(&mut controller, &[(0.0, 0.0), (1.0, 1.0)]);

    controller.on_press(Pos2::new(10.0, 10.0));
    controller.on_move(Pos2::new(20.0, 20.0));
    assert!(controller.undo());

    assert!(controller.surface().is_empty());
    assert!(!controller.is_drawing());

    // Moves after the abandoned gesture are ignored
    controller.on_move(Pos2::new(30.0, 30.0));
    assert!(controller.surface().is_empty());
}

#[test]
fn test_clear_mid_gesture_only_snapshots_committed() {
    let mut controller = create_controller();
    draw(&mut controller, &[(0.0, 0.0), (1.0, 1.0)]);

    controller.on_press(Pos2::new(10.0, 10.0));
    controller.on_move(Pos2::new(20.0, 20.0));
    assert!(controller.clear());

    let Command::Clear { removed_segments } = &controller.history().entries()[1] else {
        panic!("expected a clear command");
    };
    assert_eq!(removed_segments.len(), 1);
}

#[test]
fn test_brush_change_mid_stroke() {
    let mut controller = create_controller();

    controller.on_press(Pos2::new(0.0, 0.0));
    controller.on_move(Pos2::new(1.0, 0.0));
    controller.brush_mut().set_color(Color32::GREEN);
    controller.brush_mut().set_thickness(8.0);
    controller.on_move(Pos2::new(2.0, 0.0));
    controller.on_release();

    let segments = controller.history().entries()[0].segments();
    assert_eq!(segments[0].color(), Color32::RED);
    assert_eq!(segments[0].thickness(), 3.0);
    assert_eq!(segments[1].color(), Color32::GREEN);
    assert_eq!(segments[1].thickness(), 8.0);
}

#[test]
fn test_zero_length_moves_follow_config() {
    let mut skipping = create_controller();
    draw(&mut skipping, &[(1.0, 1.0), (1.0, 1.0), (2.0, 2.0)]);
    assert_eq!(skipping.history().entries()[0].segments().len(), 1);

    let config = CanvasConfig {
        skip_zero_length: false,
        ..CanvasConfig::default()
    };
    let mut keeping = DrawingController::with_config(Canvas::new(), &config);
    draw(&mut keeping, &[(1.0, 1.0), (1.0, 1.0), (2.0, 2.0)]);
    assert_eq!(keeping.history().entries()[0].segments().len(), 2);
}

#[test]
fn test_history_limit_from_config() {
    let config = CanvasConfig::from_json(r#"{ "history_limit": 2 }"#).unwrap();
    let mut controller = DrawingController::with_config(Canvas::new(), &config);

    for i in 0..4 {
        let x = i as f32 * 10.0;
        draw(&mut controller, &[(x, 0.0), (x + 1.0, 1.0)]);
    }

    assert_eq!(controller.history().len(), 2);
    while controller.undo() {}
    assert_eq!(controller.surface().len(), 2);
}

#[test]
fn test_pointer_events_drive_controller() {
    let mut controller = create_controller();

    for event in [
        PointerEvent::Press(Pos2::new(0.0, 0.0)),
        PointerEvent::Move(Pos2::new(4.0, 0.0)),
        PointerEvent::Move(Pos2::new(4.0, 4.0)),
        PointerEvent::Release,
    ] {
        controller.handle_pointer(event);
    }

    assert_eq!(controller.history().len(), 1);
    assert_eq!(controller.surface().len(), 2);

    controller.handle_pointer(PointerEvent::Press(Pos2::new(9.0, 9.0)));
    controller.handle_pointer(PointerEvent::Move(Pos2::new(12.0, 9.0)));
    assert!(controller.pointer().is_some());
    controller.handle_pointer(PointerEvent::Cancel);
    assert_eq!(controller.surface().len(), 2);
    assert!(controller.pointer().is_none());
}
