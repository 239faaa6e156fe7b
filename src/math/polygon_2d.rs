use super::intersect_2d::segment_segment_intersect_2d;
use super::{Point2, TOLERANCE};

/// An axis-aligned bounding box in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb2 {
    /// Returns the smallest box containing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Width and height of the box.
    #[must_use]
    pub fn extent(&self) -> (f64, f64) {
        (self.max.x - self.min.x, self.max.y - self.min.y)
    }
}

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns the bounding box of a point set, or `None` if it is empty.
#[must_use]
pub fn bounding_box_2d(points: &[Point2]) -> Option<Aabb2> {
    let first = points.first()?;
    let mut bbox = Aabb2 {
        min: *first,
        max: *first,
    };
    for p in &points[1..] {
        bbox.min.x = bbox.min.x.min(p.x);
        bbox.min.y = bbox.min.y.min(p.y);
        bbox.max.x = bbox.max.x.max(p.x);
        bbox.max.y = bbox.max.y.max(p.y);
    }
    Some(bbox)
}

/// Removes consecutive duplicate vertices of a closed polygon, including a
/// duplicate of the first vertex at the end.
#[must_use]
pub fn dedup_closed_2d(points: &[Point2]) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for p in points {
        if out.last().is_none_or(|q| (p - q).norm() >= TOLERANCE) {
            out.push(*p);
        }
    }
    while out.len() > 1 && (out[0] - out[out.len() - 1]).norm() < TOLERANCE {
        out.pop();
    }
    out
}

/// Checks that a closed polygon has no crossing edges.
///
/// Zero-length edges are ignored. Only proper crossings and vertex contacts
/// between non-adjacent edges are detected; collinear overlaps are not.
#[must_use]
pub fn is_simple_2d(points: &[Point2]) -> bool {
    let pts = dedup_closed_2d(points);
    let n = pts.len();
    if n < 3 {
        return false;
    }
    for i in 0..n {
        let a0 = &pts[i];
        let a1 = &pts[(i + 1) % n];
        for j in (i + 2)..n {
            // The last edge is adjacent to the first.
            if i == 0 && j == n - 1 {
                continue;
            }
            let b0 = &pts[j];
            let b1 = &pts[(j + 1) % n];
            if segment_segment_intersect_2d(a0, a1, b0, b1).is_some() {
                return false;
            }
        }
    }
    true
}
