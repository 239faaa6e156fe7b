use crate::error::Result;
use crate::joint::PlateOutline;

use super::{Polyline, TessellationParams};

/// Flattens a plate outline into a closed polygon, for renderers that only
/// draw straight lines.
///
/// Every named outline point appears in the result, in traversal order;
/// arcs contribute extra chord points between their end points.
pub struct TessellateOutline<'a> {
    outline: &'a PlateOutline,
    params: TessellationParams,
}

impl<'a> TessellateOutline<'a> {
    /// Creates a new `TessellateOutline` operation.
    #[must_use]
    pub fn new(outline: &'a PlateOutline, params: TessellationParams) -> Self {
        Self { outline, params }
    }

    /// Executes the tessellation.
    ///
    /// # Errors
    ///
    /// Returns `TessellationError::InvalidParameters` if the parameters are
    /// unusable.
    pub fn execute(&self) -> Result<Polyline> {
        self.params.validate()?;
        let points = self.outline.to_pline().to_points(
            self.params.tolerance,
            self.params.min_segments,
            self.params.max_segments,
        );
        Ok(Polyline { points })
    }
}
