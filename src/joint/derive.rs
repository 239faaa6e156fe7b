use crate::error::{DomainError, Result};

use super::params::{PlateParams, Side};

/// Groove quantities derived for one plate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrooveDimensions {
    /// Height of each groove face, `(thickness - blunt_edge) / 2`.
    pub depth: f64,
    /// Horizontal run of a slanted groove face, `depth * tan(angle / 2)`.
    pub slope_width: f64,
}

/// Computes groove depth and slope width for one side.
///
/// Full penetration is assumed: the groove faces above and below the root
/// face share the remaining thickness equally.
///
/// # Errors
///
/// - `DomainError::NotFinite` / `DomainError::NonPositive` for a bad thickness
/// - `DomainError::Negative` for a negative blunt edge
/// - `DomainError::BluntEdgeExceedsThickness` if the depth would be negative
/// - `DomainError::AngleOutOfRange` if `groove_angle` is outside `[0°, 180°)`
pub fn derive_groove(
    side: Side,
    thickness: f64,
    blunt_edge: f64,
    groove_angle: f64,
) -> Result<GrooveDimensions> {
    if !thickness.is_finite() {
        return Err(DomainError::NotFinite {
            parameter: format!("{side} thickness"),
        }
        .into());
    }
    if thickness <= 0.0 {
        return Err(DomainError::NonPositive {
            side,
            parameter: "thickness",
            value: thickness,
        }
        .into());
    }
    if blunt_edge < 0.0 {
        return Err(DomainError::Negative {
            parameter: "blunt edge".to_owned(),
            value: blunt_edge,
        }
        .into());
    }
    if blunt_edge > thickness {
        return Err(DomainError::BluntEdgeExceedsThickness {
            side,
            blunt_edge,
            thickness,
        }
        .into());
    }
    if !(0.0..180.0).contains(&groove_angle) {
        return Err(DomainError::AngleOutOfRange {
            side,
            value: groove_angle,
        }
        .into());
    }

    let depth = (thickness - blunt_edge) / 2.0;
    let slope_width = depth * (groove_angle / 2.0).to_radians().tan();
    Ok(GrooveDimensions { depth, slope_width })
}

/// Derives the groove of a plate from its full thickness.
///
/// A bevel only shortens the plate faces, so it does not enter the groove.
///
/// # Errors
///
/// Returns the errors of [`derive_groove`].
pub fn derive_plate_groove(
    side: Side,
    plate: &PlateParams,
    blunt_edge: f64,
) -> Result<GrooveDimensions> {
    let dims = derive_groove(side, plate.thickness, blunt_edge, plate.groove_angle)?;
    tracing::debug!(
        %side,
        depth = dims.depth,
        slope_width = dims.slope_width,
        "derived groove"
    );
    Ok(dims)
}
