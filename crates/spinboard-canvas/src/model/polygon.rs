use lyon::algorithms::hit_test::hit_test_path;
use lyon::math::point;
use lyon::path::{FillRule, Path};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use spinboard_core::constants::HIT_TOLERANCE;
use spinboard_core::geometry::{rotate_local, Point};
use spinboard_core::{Error, Result};

/// A closed polygon with a fixed local-space outline, rotated as a rigid
/// body about its world-space center.
///
/// Vertex order is preserved for the shape's lifetime; it defines the edge
/// connectivity and winding of the rendered outline. The world-space `path`
/// is a cache that is rebuilt on every rotation change, so callers never
/// observe a path that disagrees with `(vertices, center, rotation)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polygon {
    vertices: SmallVec<[Point; 8]>,
    center: Point,
    rotation: f64,
    path: Path,
}

impl Polygon {
    /// Creates a polygon from local-space vertices centered at `center`,
    /// with rotation 0.
    pub fn new(center: Point, vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(Error::DegeneratePolygon {
                vertices: vertices.len(),
            });
        }
        let vertices = SmallVec::from_vec(vertices);
        let path = Self::world_path(&vertices, center, 0.0);
        Ok(Self {
            vertices,
            center,
            rotation: 0.0,
            path,
        })
    }

    /// An axis-aligned square with the given half-extent.
    pub fn square(center: Point, half: f64) -> Self {
        let vertices: SmallVec<[Point; 8]> = SmallVec::from_slice(&[
            Point::new(-half, -half),
            Point::new(half, -half),
            Point::new(half, half),
            Point::new(-half, half),
        ]);
        let path = Self::world_path(&vertices, center, 0.0);
        Self {
            vertices,
            center,
            rotation: 0.0,
            path,
        }
    }

    /// A regular polygon inscribed in a circle of `radius`. Fewer than 3
    /// sides is clamped to 3.
    pub fn regular(center: Point, radius: f64, sides: u32) -> Self {
        let sides = sides.max(3);
        let mut vertices: SmallVec<[Point; 8]> = SmallVec::with_capacity(sides as usize);
        for i in 0..sides {
            let theta = 2.0 * std::f64::consts::PI * (i as f64) / (sides as f64);
            vertices.push(Point::new(radius * theta.cos(), radius * theta.sin()));
        }
        let path = Self::world_path(&vertices, center, 0.0);
        Self {
            vertices,
            center,
            rotation: 0.0,
            path,
        }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Current rotation in degrees.
    pub fn angle(&self) -> f64 {
        self.rotation
    }

    /// The cached world-space outline, closed.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sets the rotation and rebuilds the world-space path. This is the only
    /// way to rotate the polygon; the rotation field is private so a stale
    /// path cannot be observed.
    pub fn set_angle(&mut self, angle_deg: f64) {
        self.rotation = angle_deg;
        self.path = Self::world_path(&self.vertices, self.center, self.rotation);
    }

    /// Point-in-polygon test against the current world-space path, using the
    /// same nonzero fill rule the renderer fills with. Behavior exactly on
    /// an edge is approximate, not bit-exact.
    pub fn contains_point(&self, p: Point) -> bool {
        hit_test_path(
            &point(p.x as f32, p.y as f32),
            self.path.iter(),
            FillRule::NonZero,
            HIT_TOLERANCE,
        )
    }

    fn world_path(vertices: &[Point], center: Point, rotation: f64) -> Path {
        let mut builder = Path::builder();
        for (i, v) in vertices.iter().enumerate() {
            let r = rotate_local(*v, rotation);
            let p = point((center.x + r.x) as f32, (center.y + r.y) as f32);
            if i == 0 {
                builder.begin(p);
            } else {
                builder.line_to(p);
            }
        }
        builder.close();
        builder.build()
    }
}
