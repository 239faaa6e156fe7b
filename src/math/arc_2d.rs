/// 2D arc/bulge math utilities.
///
/// Bulge convention: `bulge = tan(sweep_angle / 4)`.
/// - `bulge = 0`: straight line
/// - `bulge > 0`: counter-clockwise arc
/// - `bulge < 0`: clockwise arc
/// - `|bulge| = 1`: semicircle
use std::f64::consts::TAU;

use super::{Point2, TOLERANCE};

/// A circular arc in center-radius-angle form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcParams {
    pub center: Point2,
    pub radius: f64,
    pub start_angle: f64,
    /// Signed sweep in radians, positive for counter-clockwise.
    pub sweep: f64,
}

impl ArcParams {
    /// Evaluates a point on the arc at parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let angle = self.start_angle + self.sweep * t;
        Point2::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }
}

/// Converts a bulge-defined arc segment to center-radius-angle form.
///
/// Returns `None` for zero-length chords and zero bulge.
#[must_use]
pub fn arc_from_bulge(p0: &Point2, p1: &Point2, bulge: f64) -> Option<ArcParams> {
    let chord = p1 - p0;
    let chord_len = chord.norm();
    if chord_len < TOLERANCE || bulge.abs() < TOLERANCE {
        return None;
    }

    // Distance from chord midpoint to center, as a multiple of half the chord.
    let sagitta_ratio = (1.0 - bulge * bulge) / (2.0 * bulge);
    let mid = nalgebra::center(p0, p1);

    // Left normal of the chord: the center side for positive bulge.
    let nx = -chord.y / chord_len;
    let ny = chord.x / chord_len;

    let half = chord_len * 0.5;
    let center = Point2::new(
        mid.x + sagitta_ratio * half * nx,
        mid.y + sagitta_ratio * half * ny,
    );

    // r = d*(1+b²)/(4*|b|) derived from r = d/(2*sin(θ/2)) with θ=4*atan(b)
    let radius = half * (1.0 + bulge * bulge) / (2.0 * bulge.abs());

    Some(ArcParams {
        center,
        radius,
        start_angle: (p0.y - center.y).atan2(p0.x - center.x),
        sweep: 4.0 * bulge.atan(),
    })
}

/// Converts arc endpoints + center back to a bulge value.
///
/// `is_ccw`: true for counter-clockwise arc, false for clockwise.
#[must_use]
pub fn bulge_from_arc(p0: &Point2, p1: &Point2, center: &Point2, is_ccw: bool) -> f64 {
    let start_angle = (p0.y - center.y).atan2(p0.x - center.x);
    let end_angle = (p1.y - center.y).atan2(p1.x - center.x);

    let mut sweep = end_angle - start_angle;
    if is_ccw {
        if sweep < 0.0 {
            sweep += TAU;
        }
    } else if sweep > 0.0 {
        sweep -= TAU;
    }

    (sweep / 4.0).tan()
}

/// Computes the number of chords needed to approximate an arc within
/// `tolerance` (maximum sagitta).
#[must_use]
pub fn arc_subdivision_count(radius: f64, abs_sweep: f64, tolerance: f64) -> u32 {
    if radius < TOLERANCE || abs_sweep < TOLERANCE || tolerance <= 0.0 {
        return 1;
    }
    // sagitta = r * (1 - cos(θ/2)), solved for θ.
    let max_angle = if tolerance >= radius {
        std::f64::consts::PI
    } else {
        2.0 * (1.0 - tolerance / radius).acos()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (abs_sweep / max_angle).ceil() as u32;
    n.max(1)
}
