//! # Spinboard Canvas
//!
//! This crate provides the shape model and the drag-to-rotate interaction
//! for Spinboard. It combines polygon shapes, pick selection, and raster
//! rendering into one canvas component.
//!
//! ## Core Components
//!
//! - **Model**: polygon shapes built from fixed local-space vertices, with a
//!   cached world-space path that always matches the current rotation
//! - **Canvas**: the interaction controller. Owns the shapes, hit-tests
//!   pointer presses, and tracks an in-progress drag as explicit state
//! - **Renderer**: fills shape paths into a pixel buffer, with a highlight
//!   color for the shape being dragged
//!
//! ## Architecture
//!
//! ```text
//! Canvas (shape store + drag state machine)
//!   ├── Polygon (local vertices -> rotated world path)
//!   └── Renderer (tiny-skia raster pass -> RgbImage)
//! ```
//!
//! Pointer events flow in as [`PointerEvent`] values; each handler reports
//! whether visual state changed so the host re-renders exactly when needed.

pub mod canvas;
pub mod color;
pub mod model;
pub mod renderer;

pub use canvas::{Canvas, DragState, DrawingObject, PointerEvent};
pub use color::Rgba;
pub use model::Polygon;
pub use renderer::render_canvas;
