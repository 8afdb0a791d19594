//! Canvas type definitions: DrawingObject, DragState, PointerEvent.

use crate::color::Rgba;
use crate::model::Polygon;
use spinboard_core::geometry::Point;

/// Drawing object on the canvas that can be picked and rotated.
#[derive(Debug, Clone)]
pub struct DrawingObject {
    pub id: u64,
    pub name: String,
    pub fill: Rgba,
    /// Optional outline stroked over the fill.
    pub outline: Option<Rgba>,
    pub polygon: Polygon,
    pub selected: bool,
}

impl DrawingObject {
    /// Creates a new drawing object.
    pub fn new(id: u64, polygon: Polygon, fill: Rgba) -> Self {
        Self {
            id,
            name: format!("Polygon {}", id),
            fill,
            outline: None,
            polygon,
            selected: false,
        }
    }

    pub fn contains_point(&self, p: Point) -> bool {
        self.polygon.contains_point(p)
    }
}

/// In-progress drag gesture. Exists only between a pointer press that hit a
/// shape and the matching release; the shape is referenced by id because the
/// canvas, not the drag, owns shape lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Id of the shape being rotated.
    pub shape_id: u64,
    /// Pointer angle at press minus the shape's angle at press. Subtracting
    /// this from the live pointer angle makes the drag relative, so the
    /// shape does not snap to the absolute pointer direction.
    pub grab_angle: f64,
}

/// A pointer event in surface coordinates.
///
/// `Cancelled` models losing the pointer mid-drag (capture loss, pointer
/// leaving the window); it is handled as an implicit release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed(Point),
    Moved(Point),
    Released(Point),
    Cancelled,
}
