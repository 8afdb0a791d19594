//! Pure 2D geometry for pointer-driven rotation.
//!
//! All angles are in degrees. The rotation convention is clockwise-positive
//! in a screen coordinate system (y grows downward); `pointer_angle` negates
//! `atan2` so that both functions agree and a drag tracks the pointer instead
//! of mirroring it.

use serde::{Deserialize, Serialize};

/// A 2D coordinate, either in a shape's local (unrotated) space or in
/// world/screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Rotates a local-space point around the origin by `angle_deg` degrees.
///
/// Clockwise-positive under y-down screen coordinates:
/// `x' = x*cos + y*sin`, `y' = -x*sin + y*cos`.
pub fn rotate_local(p: Point, angle_deg: f64) -> Point {
    let rads = angle_deg.to_radians();
    let (sin, cos) = rads.sin_cos();
    Point {
        x: p.x * cos + p.y * sin,
        y: -p.x * sin + p.y * cos,
    }
}

/// Angle in degrees of the vector from `center` to `pointer`, sign-flipped to
/// match [`rotate_local`]. Range is [-180, 180].
///
/// `pointer == center` resolves to `0.0` (IEEE `atan2(0, 0)`), so a pointer
/// parked exactly on the rotation center is defined, if arbitrary.
pub fn pointer_angle(pointer: Point, center: Point) -> f64 {
    -(pointer.y - center.y)
        .atan2(pointer.x - center.x)
        .to_degrees()
}
