use std::f64::consts::{FRAC_PI_2, TAU};

use crate::geometry::{Pline, PlineVertex};
use crate::math::arc_2d::bulge_from_arc;
use crate::math::polygon_2d::{bounding_box_2d, signed_area_2d, Aabb2};
use crate::math::Point2;

use super::params::Side;

/// Number of named vertices (and edges) of a plate outline.
pub const OUTLINE_POINTS: usize = 8;

/// A named outline vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlinePoint {
    pub label: char,
    pub position: Point2,
}

/// Shape of the edge between two consecutive outline points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Straight,
    /// Circular arc around `center`; `sweep` is signed, positive for
    /// counter-clockwise, in radians.
    Arc {
        center: Point2,
        radius: f64,
        sweep: f64,
    },
}

impl Segment {
    #[must_use]
    pub fn is_arc(&self) -> bool {
        matches!(self, Self::Arc { .. })
    }
}

/// Edge between two consecutive outline points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineEdge {
    pub from: char,
    pub to: char,
    pub segment: Segment,
}

/// Closed outline of one plate: eight named points traversed
/// counter-clockwise, and the eight edges joining them (the last edge closes
/// the loop).
///
/// The left plate runs `A..H` with the root face at `D`/`E`; the right plate
/// runs `d e f g h a b c` with the root face at `d`/`e`. Each root-face point
/// is adjacent to one groove-face edge.
#[derive(Debug, Clone, PartialEq)]
pub struct PlateOutline {
    side: Side,
    points: [OutlinePoint; OUTLINE_POINTS],
    edges: [OutlineEdge; OUTLINE_POINTS],
}

impl PlateOutline {
    /// Assembles an outline from labelled positions and per-edge segments.
    pub(crate) fn new(
        side: Side,
        labels: [char; OUTLINE_POINTS],
        positions: [Point2; OUTLINE_POINTS],
        segments: [Segment; OUTLINE_POINTS],
    ) -> Self {
        let points =
            std::array::from_fn(|i| OutlinePoint { label: labels[i], position: positions[i] });
        let edges = std::array::from_fn(|i| OutlineEdge {
            from: labels[i],
            to: labels[(i + 1) % OUTLINE_POINTS],
            segment: segments[i],
        });
        Self {
            side,
            points,
            edges,
        }
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Points in traversal order.
    #[must_use]
    pub fn points(&self) -> &[OutlinePoint; OUTLINE_POINTS] {
        &self.points
    }

    /// Edges in traversal order.
    #[must_use]
    pub fn edges(&self) -> &[OutlineEdge; OUTLINE_POINTS] {
        &self.edges
    }

    /// Looks up a point by label.
    #[must_use]
    pub fn point(&self, label: char) -> Option<Point2> {
        self.points
            .iter()
            .find(|p| p.label == label)
            .map(|p| p.position)
    }

    /// Looks up the edge leaving the point `from`.
    #[must_use]
    pub fn edge_from(&self, from: char) -> Option<&OutlineEdge> {
        self.edges.iter().find(|e| e.from == from)
    }

    /// Index of the first root-face point in traversal order.
    fn root_slot(&self) -> usize {
        match self.side {
            Side::Left => 3,
            Side::Right => 0,
        }
    }

    /// The two root-face points, in traversal order.
    #[must_use]
    pub fn root_face(&self) -> (Point2, Point2) {
        let i = self.root_slot();
        (self.points[i].position, self.points[i + 1].position)
    }

    /// The edge entering the root face and the edge leaving it.
    #[must_use]
    pub fn groove_faces(&self) -> [&OutlineEdge; 2] {
        let i = self.root_slot();
        [
            &self.edges[(i + OUTLINE_POINTS - 1) % OUTLINE_POINTS],
            &self.edges[i + 1],
        ]
    }

    /// Vertex positions in traversal order.
    #[must_use]
    pub fn positions(&self) -> Vec<Point2> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Signed area enclosed by the outline, arcs included.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let chords = signed_area_2d(&self.positions());
        let caps: f64 = self
            .edges
            .iter()
            .filter_map(|e| match e.segment {
                // Circular segment between chord and arc, signed by sweep.
                Segment::Arc { radius, sweep, .. } => {
                    Some(0.5 * radius * radius * (sweep - sweep.sin()))
                }
                Segment::Straight => None,
            })
            .sum();
        chords + caps
    }

    /// Axis-aligned bounds of the outline, arcs included.
    #[must_use]
    pub fn bounding_box(&self) -> Aabb2 {
        let mut extremes = self.positions();
        for (i, edge) in self.edges.iter().enumerate() {
            if let Segment::Arc {
                center,
                radius,
                sweep,
            } = edge.segment
            {
                let start = self.points[i].position;
                extremes.extend(arc_extremes(&start, &center, radius, sweep));
            }
        }
        // Eight points are always present.
        bounding_box_2d(&extremes).unwrap_or(Aabb2 {
            min: Point2::origin(),
            max: Point2::origin(),
        })
    }

    /// Converts the outline to a closed bulge polyline.
    #[must_use]
    pub fn to_pline(&self) -> Pline {
        let vertices = self
            .edges
            .iter()
            .enumerate()
            .map(|(i, edge)| {
                let p0 = self.points[i].position;
                let bulge = match edge.segment {
                    Segment::Straight => 0.0,
                    Segment::Arc { center, sweep, .. } => {
                        let p1 = self.points[(i + 1) % OUTLINE_POINTS].position;
                        bulge_from_arc(&p0, &p1, &center, sweep > 0.0)
                    }
                };
                PlineVertex::new(p0.x, p0.y, bulge)
            })
            .collect();
        Pline {
            vertices,
            closed: true,
        }
    }
}

/// Points where an arc reaches an axis-aligned extreme (angles that are
/// multiples of 90° strictly inside the sweep).
fn arc_extremes(start: &Point2, center: &Point2, radius: f64, sweep: f64) -> Vec<Point2> {
    let a0 = (start.y - center.y).atan2(start.x - center.x);
    let (lo, hi) = if sweep >= 0.0 {
        (a0, a0 + sweep)
    } else {
        (a0 + sweep, a0)
    };
    let mut out = Vec::new();
    let mut k = (lo / FRAC_PI_2).floor() + 1.0;
    while k * FRAC_PI_2 < hi {
        let angle = (k * FRAC_PI_2).rem_euclid(TAU);
        out.push(Point2::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ));
        k += 1.0;
    }
    out
}
