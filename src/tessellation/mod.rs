mod tessellate_outline;
mod triangulate_outline;

pub use tessellate_outline::TessellateOutline;
pub use triangulate_outline::TriangulateOutline;

use crate::error::{Result, TessellationError};
use crate::math::Point2;

/// Parameters controlling tessellation quality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TessellationParams {
    /// Maximum allowed deviation from the true geometry.
    pub tolerance: f64,
    /// Minimum number of chords per arc.
    pub min_segments: u32,
    /// Maximum number of chords per arc.
    pub max_segments: u32,
}

impl TessellationParams {
    /// Checks that the parameters describe a usable tessellation.
    ///
    /// # Errors
    ///
    /// Returns `TessellationError::InvalidParameters` for a non-positive
    /// tolerance or an empty or inverted segment range.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(TessellationError::InvalidParameters(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            ))
            .into());
        }
        if self.min_segments == 0 || self.min_segments > self.max_segments {
            return Err(TessellationError::InvalidParameters(format!(
                "segment range {}..={} is empty",
                self.min_segments, self.max_segments
            ))
            .into());
        }
        Ok(())
    }
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            tolerance: 0.01,
            min_segments: 4,
            max_segments: 256,
        }
    }
}

/// A closed polygon approximation of an outline. The first point is not
/// repeated at the end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}

/// A triangle mesh filling an outline.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point2>,
    /// Counter-clockwise triangle indices.
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Total area covered by the triangles.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.indices
            .iter()
            .map(|&[i, j, k]| {
                let a = self.vertices[i as usize];
                let b = self.vertices[j as usize];
                let c = self.vertices[k as usize];
                0.5 * (b - a).perp(&(c - a))
            })
            .sum()
    }
}
