use spinboard_canvas::{Canvas, PointerEvent, Polygon, Rgba};
use spinboard_core::Point;

const TOL: f64 = 1e-9;

fn canvas_with_square() -> (Canvas, u64) {
    let mut canvas = Canvas::with_size(400.0, 400.0);
    let id = canvas.add_polygon(Polygon::square(Point::new(200.0, 200.0), 60.0), Rgba::GREEN);
    (canvas, id)
}

fn shape_angle(canvas: &Canvas, id: u64) -> f64 {
    canvas.get_shape(id).expect("shape exists").polygon.angle()
}

#[test]
fn test_press_inside_starts_drag() {
    let (mut canvas, id) = canvas_with_square();

    assert!(canvas.pointer_pressed(Point::new(250.0, 200.0)));
    assert_eq!(canvas.active_shape_id(), Some(id));

    let drag = canvas.drag().expect("drag in progress");
    assert!(drag.grab_angle.abs() < TOL);
    assert!(canvas.get_shape(id).unwrap().selected);
}

#[test]
fn test_press_outside_stays_idle() {
    let (mut canvas, id) = canvas_with_square();

    assert!(!canvas.pointer_pressed(Point::new(10.0, 10.0)));
    assert_eq!(canvas.active_shape_id(), None);

    // A move while idle is a no-op and asks for no redraw
    assert!(!canvas.pointer_moved(Point::new(200.0, 260.0)));
    assert_eq!(shape_angle(&canvas, id), 0.0);
}

#[test]
fn test_quarter_turn_drag() {
    let (mut canvas, id) = canvas_with_square();

    // Press east of the center (pointer angle 0), sweep to south (-90)
    assert!(canvas.pointer_pressed(Point::new(250.0, 200.0)));
    assert!(canvas.pointer_moved(Point::new(200.0, 260.0)));
    assert!((shape_angle(&canvas, id) + 90.0).abs() < TOL);
}

#[test]
fn test_drag_is_relative_to_resting_angle() {
    let (mut canvas, id) = canvas_with_square();
    canvas
        .get_shape_mut(id)
        .unwrap()
        .polygon
        .set_angle(30.0);

    // Pointer delta is -90; the shape lands at 30 + (-90), not at -90
    canvas.pointer_pressed(Point::new(250.0, 200.0));
    canvas.pointer_moved(Point::new(200.0, 260.0));
    assert!((shape_angle(&canvas, id) + 60.0).abs() < TOL);
}

#[test]
fn test_rotation_tracks_angle_delta_anywhere_on_the_spoke() {
    let (mut canvas, id) = canvas_with_square();

    // Same pointer angles at a different radius produce the same rotation
    canvas.pointer_pressed(Point::new(210.0, 200.0));
    canvas.pointer_moved(Point::new(200.0, 210.0));
    assert!((shape_angle(&canvas, id) + 90.0).abs() < TOL);
}

#[test]
fn test_release_retains_resting_angle() {
    let (mut canvas, id) = canvas_with_square();

    canvas.pointer_pressed(Point::new(250.0, 200.0));
    canvas.pointer_moved(Point::new(200.0, 260.0));

    // Release may land anywhere, not just over the shape
    assert!(canvas.pointer_released(Point::new(5.0, 5.0)));
    assert_eq!(canvas.active_shape_id(), None);
    assert!(!canvas.get_shape(id).unwrap().selected);
    assert!((shape_angle(&canvas, id) + 90.0).abs() < TOL);

    // The next move is idle again
    assert!(!canvas.pointer_moved(Point::new(250.0, 200.0)));
    assert!((shape_angle(&canvas, id) + 90.0).abs() < TOL);
}

#[test]
fn test_cancel_acts_as_release() {
    let (mut canvas, id) = canvas_with_square();

    canvas.pointer_pressed(Point::new(250.0, 200.0));
    canvas.pointer_moved(Point::new(200.0, 260.0));
    assert!(canvas.pointer_cancelled());

    assert_eq!(canvas.active_shape_id(), None);
    assert!((shape_angle(&canvas, id) + 90.0).abs() < TOL);
    assert!(!canvas.pointer_cancelled());
}

#[test]
fn test_overlap_drags_first_shape_only() {
    let mut canvas = Canvas::with_size(400.0, 400.0);
    let first = canvas.add_polygon(Polygon::square(Point::new(200.0, 200.0), 60.0), Rgba::RED);
    let second = canvas.add_polygon(Polygon::square(Point::new(260.0, 260.0), 60.0), Rgba::BLUE);

    canvas.pointer_pressed(Point::new(210.0, 210.0));
    assert_eq!(canvas.active_shape_id(), Some(first));

    canvas.pointer_moved(Point::new(200.0, 260.0));
    assert!(shape_angle(&canvas, first).abs() > 1.0);
    assert_eq!(shape_angle(&canvas, second), 0.0);
    assert!(!canvas.get_shape(second).unwrap().selected);
}

#[test]
fn test_handle_pointer_dispatch() {
    let (mut canvas, id) = canvas_with_square();

    assert!(canvas.handle_pointer(PointerEvent::Pressed(Point::new(250.0, 200.0))));
    assert!(canvas.handle_pointer(PointerEvent::Moved(Point::new(200.0, 260.0))));
    assert!(canvas.handle_pointer(PointerEvent::Released(Point::new(200.0, 260.0))));
    assert!(!canvas.handle_pointer(PointerEvent::Cancelled));

    assert!((shape_angle(&canvas, id) + 90.0).abs() < TOL);
}
