//! # Spinboard
//!
//! An interactive 2D canvas where polygon shapes are picked with a pointer
//! and rotated by dragging, with the pointer's angle delta around the
//! shape's center mapped onto the shape's rotation.
//!
//! ## Architecture
//!
//! Spinboard is organized as a workspace with multiple crates:
//!
//! 1. **spinboard-core** - Pure 2D geometry, shared errors and constants
//! 2. **spinboard-canvas** - Shape model, drag state machine, raster renderer
//! 3. **spinboard** - Main binary that wires logging and runs the demo scene
//!
//! ## Interaction model
//!
//! - **Press** inside a shape starts a drag and remembers the grab angle
//! - **Move** retargets the shape's rotation from the live pointer angle
//! - **Release** (or capture loss) ends the drag; the rotation rests

pub use spinboard_canvas::{
    render_canvas, Canvas, DragState, DrawingObject, PointerEvent, Polygon, Rgba,
};
pub use spinboard_core::{pointer_angle, rotate_local, Error, Point, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output, pretty formatting, and
/// `RUST_LOG` environment variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
