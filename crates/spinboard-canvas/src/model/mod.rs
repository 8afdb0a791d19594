//! Shape model: polygons defined by fixed local-space vertices.

mod polygon;

pub use polygon::Polygon;

pub use spinboard_core::geometry::Point;
