//! Canvas renderer for Spinboard shapes.
//! Renders shapes to an image buffer using tiny-skia for high-quality 2D
//! rasterization.
//!
//! The render pass clears the whole surface, then fills every shape's cached
//! world-space path in paint order. The shape currently being dragged is
//! filled with the highlight color instead of its own, and shapes with an
//! outline get it stroked over the fill.

use image::{Rgb, RgbImage};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::canvas::Canvas;
use spinboard_core::{Error, Result};

const OUTLINE_WIDTH: f32 = 2.0;

fn bg_color() -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(52, 73, 94, 255)
}
fn highlight_color() -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(255, 235, 59, 255)
}

/// Render canvas shapes to an image buffer.
pub fn render_canvas(canvas: &Canvas, width: u32, height: u32) -> Result<RgbImage> {
    let mut pixmap = Pixmap::new(width, height).ok_or(Error::InvalidSurface { width, height })?;
    pixmap.fill(bg_color());

    let active_id = canvas.active_shape_id();

    for obj in canvas.shapes() {
        let Some(path) = to_skia_path(obj.polygon.path()) else {
            continue;
        };

        let mut paint = Paint::default();
        paint.anti_alias = true;
        if active_id == Some(obj.id) {
            paint.set_color(highlight_color());
        } else {
            paint.set_color(obj.fill.to_skia());
        }
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);

        if let Some(outline) = obj.outline {
            let mut outline_paint = Paint::default();
            outline_paint.anti_alias = true;
            outline_paint.set_color(outline.to_skia());
            let stroke = Stroke {
                width: OUTLINE_WIDTH,
                ..Default::default()
            };
            pixmap.stroke_path(&path, &outline_paint, &stroke, Transform::identity(), None);
        }
    }

    // Convert Pixmap to RgbImage
    let data = pixmap.data();
    Ok(RgbImage::from_fn(width, height, |x, y| {
        let idx = ((y * width + x) * 4) as usize;
        // Ignore alpha, everything drawn is opaque
        Rgb([data[idx], data[idx + 1], data[idx + 2]])
    }))
}

/// Replays a lyon path into a tiny-skia path. Polygon paths only contain
/// line segments, so curve events are not expected here.
fn to_skia_path(path: &lyon::path::Path) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for event in path.iter() {
        match event {
            lyon::path::Event::Begin { at } => pb.move_to(at.x, at.y),
            lyon::path::Event::Line { to, .. } => pb.line_to(to.x, to.y),
            lyon::path::Event::End { close, .. } => {
                if close {
                    pb.close();
                }
            }
            _ => {}
        }
    }
    pb.finish()
}
