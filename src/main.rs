use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use spinboard::{
    init_logging, render_canvas, Canvas, Point, PointerEvent, Polygon, Rgba, BUILD_DATE, VERSION,
};

const FRAME_DIR: &str = "frames";

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;
    tracing::info!("spinboard {} (built {})", VERSION, BUILD_DATE);

    let mut canvas = Canvas::new();

    // Demo scene: a green square plus two regular polygons, using the
    // classic palette.
    let square_center = Point::new(200.0, 200.0);
    let square = canvas.add_polygon(Polygon::square(square_center, 60.0), Rgba::from_css("green")?);
    if let Some(obj) = canvas.get_shape_mut(square) {
        obj.name = "Square".to_string();
        obj.outline = Some(Rgba::from_css("#ffd500")?);
    }

    let triangle = canvas.add_polygon(
        Polygon::regular(Point::new(560.0, 160.0), 70.0, 3),
        Rgba::from_css("#f00")?,
    );
    if let Some(obj) = canvas.get_shape_mut(triangle) {
        obj.name = "Triangle".to_string();
    }

    let hexagon_center = Point::new(580.0, 430.0);
    let hexagon = canvas.add_polygon(
        Polygon::regular(hexagon_center, 55.0, 6),
        Rgba::from_css("#00ffb7")?,
    );
    if let Some(obj) = canvas.get_shape_mut(hexagon) {
        obj.name = "Hexagon".to_string();
        obj.outline = Some(Rgba::from_css("#b300ff")?);
    }

    let out_dir = PathBuf::from(FRAME_DIR);
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating frame directory {}", out_dir.display()))?;

    let mut frame = 0u32;
    write_frame(&canvas, &out_dir, frame)?;

    // Quarter-turn drag on the square: grab it just inside the east edge
    // and sweep the pointer down to south.
    let mut events = vec![PointerEvent::Pressed(Point::new(250.0, 200.0))];
    events.extend(
        arc_sweep(square_center, 50.0, 0.0, 90.0, 6)
            .into_iter()
            .skip(1)
            .map(PointerEvent::Moved),
    );
    events.push(PointerEvent::Released(Point::new(200.0, 250.0)));

    // Short counter-turn on the hexagon.
    events.push(PointerEvent::Pressed(Point::new(625.0, 430.0)));
    events.extend(
        arc_sweep(hexagon_center, 45.0, 0.0, -45.0, 3)
            .into_iter()
            .skip(1)
            .map(PointerEvent::Moved),
    );
    events.push(PointerEvent::Cancelled);

    // A press on empty space: picks nothing, changes nothing.
    events.push(PointerEvent::Pressed(Point::new(20.0, 580.0)));
    events.push(PointerEvent::Released(Point::new(20.0, 580.0)));

    for event in events {
        if canvas.handle_pointer(event) {
            frame += 1;
            write_frame(&canvas, &out_dir, frame)?;
        }
    }

    for obj in canvas.shapes() {
        tracing::info!("{} resting at {:.1} deg", obj.name, obj.polygon.angle());
    }
    tracing::info!("wrote {} frames to {}/", frame + 1, FRAME_DIR);

    Ok(())
}

/// Pointer positions along a circular arc around `center`, angles in screen
/// degrees (y grows downward).
fn arc_sweep(center: Point, radius: f64, from_deg: f64, to_deg: f64, steps: u32) -> Vec<Point> {
    (0..=steps)
        .map(|i| {
            let t = from_deg + (to_deg - from_deg) * f64::from(i) / f64::from(steps);
            let t = t.to_radians();
            Point::new(center.x + radius * t.cos(), center.y + radius * t.sin())
        })
        .collect()
}

fn write_frame(canvas: &Canvas, dir: &Path, frame: u32) -> anyhow::Result<()> {
    let image = render_canvas(canvas, canvas.width() as u32, canvas.height() as u32)?;
    let path = dir.join(format!("frame_{:03}.png", frame));
    image
        .save(&path)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
