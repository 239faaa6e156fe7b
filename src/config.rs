use crate::error::{DomainError, Result};

/// Nominal plate width used when none is configured.
pub const DEFAULT_PLATE_WIDTH: f64 = 20.0;

/// Layout constants for the generated cross-section.
///
/// The plate width is a drawing convention, not an engineering input: it is
/// the horizontal distance from a plate's far edge to the corner where its
/// lower groove face starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    plate_width: f64,
}

impl LayoutConfig {
    /// Creates a layout with the given nominal plate width.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLayout` if `plate_width` is not a
    /// positive finite number.
    pub fn new(plate_width: f64) -> Result<Self> {
        if !plate_width.is_finite() || plate_width <= 0.0 {
            return Err(DomainError::InvalidLayout {
                parameter: "plate width",
                value: plate_width,
            }
            .into());
        }
        Ok(Self { plate_width })
    }

    /// Returns the nominal plate width.
    #[must_use]
    pub fn plate_width(&self) -> f64 {
        self.plate_width
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            plate_width: DEFAULT_PLATE_WIDTH,
        }
    }
}
