use spinboard_canvas::model::{Point, Polygon};
use spinboard_core::Error;

fn first_path_point(polygon: &Polygon) -> (f32, f32) {
    for event in polygon.path().iter() {
        if let lyon::path::Event::Begin { at } = event {
            return (at.x, at.y);
        }
    }
    panic!("path has no begin event");
}

#[test]
fn test_square_layout() {
    let square = Polygon::square(Point::new(0.0, 0.0), 60.0);
    assert_eq!(square.vertices().len(), 4);
    assert_eq!(square.angle(), 0.0);
    assert_eq!(square.vertices()[0], Point::new(-60.0, -60.0));
}

#[test]
fn test_polygon_needs_three_vertices() {
    let result = Polygon::new(
        Point::new(0.0, 0.0),
        vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
    );
    assert_eq!(result.unwrap_err(), Error::DegeneratePolygon { vertices: 2 });
}

#[test]
fn test_regular_clamps_to_triangle() {
    let polygon = Polygon::regular(Point::new(0.0, 0.0), 50.0, 0);
    assert_eq!(polygon.vertices().len(), 3);
}

#[test]
fn test_square_contains_point() {
    let square = Polygon::square(Point::new(200.0, 200.0), 60.0);
    assert!(square.contains_point(Point::new(200.0, 200.0)));
    assert!(square.contains_point(Point::new(255.0, 255.0)));
    assert!(!square.contains_point(Point::new(265.0, 200.0)));
}

#[test]
fn test_rotation_moves_the_filled_region() {
    let mut square = Polygon::square(Point::new(200.0, 200.0), 60.0);
    assert!(square.contains_point(Point::new(255.0, 255.0)));

    square.set_angle(45.0);

    // The rotated boundary is |dx| + |dy| = 60*sqrt(2), so the old corner
    // region is now outside while the edge midpoints moved further out.
    assert!(!square.contains_point(Point::new(255.0, 255.0)));
    assert!(square.contains_point(Point::new(200.0, 280.0)));
}

#[test]
fn test_set_angle_rebuilds_path() {
    let mut square = Polygon::square(Point::new(200.0, 200.0), 60.0);
    square.set_angle(-90.0);
    assert_eq!(square.angle(), -90.0);

    // Local (-60,-60) under -90 degrees lands at world (260, 140)
    let (x, y) = first_path_point(&square);
    assert!((x - 260.0).abs() < 1e-3);
    assert!((y - 140.0).abs() < 1e-3);
}

#[test]
fn test_polygon_serde_round_trip() {
    let mut square = Polygon::square(Point::new(10.0, 20.0), 5.0);
    square.set_angle(30.0);

    let json = serde_json::to_string(&square).expect("serialize");
    let back: Polygon = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(back.angle(), 30.0);
    assert_eq!(back.center(), Point::new(10.0, 20.0));
    assert_eq!(back.vertices(), square.vertices());
    assert!(back.contains_point(Point::new(10.0, 20.0)));
}
