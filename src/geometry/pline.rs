use crate::math::arc_2d::{arc_from_bulge, arc_subdivision_count};
use crate::math::Point2;

/// Bulge-encoded polyline vertex for mixed line/arc segments.
///
/// `bulge = tan(sweep_angle / 4)`:
/// - `0` = straight line to next vertex
/// - `> 0` = counter-clockwise arc to next vertex
/// - `< 0` = clockwise arc to next vertex
/// - `|bulge| = 1` = semicircle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlineVertex {
    pub x: f64,
    pub y: f64,
    pub bulge: f64,
}

impl PlineVertex {
    /// Creates a new vertex with the given coordinates and bulge.
    #[must_use]
    pub fn new(x: f64, y: f64, bulge: f64) -> Self {
        Self { x, y, bulge }
    }

    /// Creates a line vertex (bulge = 0).
    #[must_use]
    pub fn line(x: f64, y: f64) -> Self {
        Self { x, y, bulge: 0.0 }
    }

    /// Position of the vertex.
    #[must_use]
    pub fn point(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

/// A polyline with mixed straight-line and circular-arc segments.
///
/// This is the form most 2D drawing back ends accept directly (DXF
/// `LWPOLYLINE`, canvas `arcTo` after conversion). For closed polylines the
/// last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Pline {
    pub vertices: Vec<PlineVertex>,
    pub closed: bool,
}

impl Pline {
    /// Returns the number of segments in this polyline.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.vertices.len();
        if n < 2 {
            return 0;
        }
        if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Converts this polyline to points by flattening arcs into chords.
    ///
    /// `tolerance` bounds the sagitta of every chord; each arc gets between
    /// `min_segments` and `max_segments` chords. Closed polylines do not
    /// repeat the first point at the end.
    #[must_use]
    pub fn to_points(&self, tolerance: f64, min_segments: u32, max_segments: u32) -> Vec<Point2> {
        let n = self.vertices.len();
        if n == 0 {
            return Vec::new();
        }

        let hi = max_segments.max(1);
        let lo = min_segments.clamp(1, hi);

        let mut points = Vec::with_capacity(n * 2);
        points.push(self.vertices[0].point());

        for i in 0..self.segment_count() {
            let v0 = &self.vertices[i];
            let v1 = &self.vertices[(i + 1) % n];
            let closing = self.closed && i == n - 1;

            if let Some(arc) = arc_from_bulge(&v0.point(), &v1.point(), v0.bulge) {
                let n_sub = arc_subdivision_count(arc.radius, arc.sweep.abs(), tolerance)
                    .clamp(lo, hi);
                for j in 1..n_sub {
                    points.push(arc.point_at(f64::from(j) / f64::from(n_sub)));
                }
            }

            // Land exactly on the vertex rather than on the evaluated arc end.
            if !closing {
                points.push(v1.point());
            }
        }

        points
    }
}
