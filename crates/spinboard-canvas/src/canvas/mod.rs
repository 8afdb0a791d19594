//! Canvas for drawing and rotating shapes.

mod interaction;
mod types;

pub use types::{DragState, DrawingObject, PointerEvent};

use crate::color::Rgba;
use crate::model::Polygon;
use spinboard_core::constants::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};

/// Canvas state managing shapes and the drag-to-rotate interaction.
///
/// Shapes are kept in insertion order, which is both paint order and pick
/// priority: a pointer press picks the first shape under it, with no z-index
/// model beyond that.
#[derive(Debug, Clone)]
pub struct Canvas {
    shapes: Vec<DrawingObject>,
    next_id: u64,
    drag: Option<DragState>,
    width: f64,
    height: f64,
}

impl Canvas {
    /// Creates a new canvas with the default surface size.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }

    /// Creates a canvas with specified dimensions.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            shapes: Vec::new(),
            next_id: 1,
            drag: None,
            width,
            height,
        }
    }

    /// Surface width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the number of shapes on the canvas.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Generates a new unique ID.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Adds a polygon to the canvas. Returns its id.
    pub fn add_polygon(&mut self, polygon: Polygon, fill: Rgba) -> u64 {
        let id = self.generate_id();
        self.shapes.push(DrawingObject::new(id, polygon, fill));
        id
    }

    /// Gets a reference to a shape by ID.
    pub fn get_shape(&self, id: u64) -> Option<&DrawingObject> {
        self.shapes.iter().find(|obj| obj.id == id)
    }

    /// Gets a mutable reference to a shape by ID.
    pub fn get_shape_mut(&mut self, id: u64) -> Option<&mut DrawingObject> {
        self.shapes.iter_mut().find(|obj| obj.id == id)
    }

    /// Iterates shapes in insertion (paint) order.
    pub fn shapes(&self) -> impl Iterator<Item = &DrawingObject> {
        self.shapes.iter()
    }

    /// Removes all shapes and any in-progress drag.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.drag = None;
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
