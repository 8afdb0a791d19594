//! Shared constants for canvas setup and hit testing.

/// Default drawing surface width in pixels.
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;

/// Default drawing surface height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

/// Curve flattening tolerance used by path hit tests. Polygon paths are all
/// line segments, so this only bounds the hit tester's internal subdivision.
pub const HIT_TOLERANCE: f32 = 0.1;
