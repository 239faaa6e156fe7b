use std::fmt;
use std::str::FromStr;

use crate::error::{DomainError, Result};

/// Cross-sectional shape of the prepared groove faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrooveType {
    V,
    U,
    J,
    X,
}

impl GrooveType {
    /// Whether the groove faces are circular arcs rather than straight runs.
    #[must_use]
    pub fn is_curved(self) -> bool {
        matches!(self, Self::U | Self::J)
    }
}

impl fmt::Display for GrooveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::V => "V",
            Self::U => "U",
            Self::J => "J",
            Self::X => "X",
        };
        f.write_str(s)
    }
}

impl FromStr for GrooveType {
    type Err = DomainError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "V" => Ok(Self::V),
            "U" => Ok(Self::U),
            "J" => Ok(Self::J),
            "X" => Ok(Self::X),
            _ => Err(DomainError::UnknownVariant {
                kind: "groove type",
                value: s.to_owned(),
            }),
        }
    }
}

/// Plate face a feature is cut from.
///
/// `Outer` is the upper face of the cross-section, `Inner` the lower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Outer,
    Inner,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Outer => "outer",
            Self::Inner => "inner",
        })
    }
}

impl FromStr for Position {
    type Err = DomainError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "outer" => Ok(Self::Outer),
            "inner" => Ok(Self::Inner),
            _ => Err(DomainError::UnknownVariant {
                kind: "position",
                value: s.to_owned(),
            }),
        }
    }
}

/// Which plate of the joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// Bevel along one plate face, ending the face short of the plate's outer
/// edge by its length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bevel {
    /// Face the bevel is cut along.
    pub position: Position,
    /// Horizontal offset of the bevel point from the outer edge.
    pub length: f64,
    /// Bevel height; must not exceed the plate thickness.
    pub height: f64,
}

impl Bevel {
    #[must_use]
    pub fn new(position: Position, length: f64, height: f64) -> Self {
        Self {
            position,
            length,
            height,
        }
    }
}

/// Per-plate parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateParams {
    pub thickness: f64,
    /// Included groove angle in degrees, in `[0, 180)`.
    pub groove_angle: f64,
    pub bevel: Option<Bevel>,
}

impl PlateParams {
    /// Creates plate parameters without a bevel.
    #[must_use]
    pub fn new(thickness: f64, groove_angle: f64) -> Self {
        Self {
            thickness,
            groove_angle,
            bevel: None,
        }
    }

    /// Adds a bevel to the plate.
    #[must_use]
    pub fn with_bevel(mut self, bevel: Bevel) -> Self {
        self.bevel = Some(bevel);
        self
    }

    /// The bevel cut from `face`, if any.
    #[must_use]
    pub fn bevel_on(&self, face: Position) -> Option<Bevel> {
        self.bevel.filter(|b| b.position == face)
    }

    fn validate(&self, side: Side) -> Result<()> {
        finite(side, "thickness", self.thickness)?;
        if self.thickness <= 0.0 {
            return Err(DomainError::NonPositive {
                side,
                parameter: "thickness",
                value: self.thickness,
            }
            .into());
        }
        finite(side, "groove angle", self.groove_angle)?;
        if let Some(bevel) = &self.bevel {
            non_negative(&format!("{side} bevel length"), bevel.length)?;
            non_negative(&format!("{side} bevel height"), bevel.height)?;
            if bevel.height > self.thickness {
                return Err(DomainError::BevelTooHigh {
                    side,
                    height: bevel.height,
                    thickness: self.thickness,
                }
                .into());
            }
        }
        Ok(())
    }
}

/// Complete input of the cross-section generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointParameters {
    pub groove_type: GrooveType,
    pub groove_position: Position,
    pub left: PlateParams,
    pub right: PlateParams,
    /// Root face height shared by both plates.
    pub blunt_edge: f64,
    pub root_gap: f64,
}

impl JointParameters {
    /// Creates joint parameters with no blunt edge and no root gap.
    #[must_use]
    pub fn new(
        groove_type: GrooveType,
        groove_position: Position,
        left: PlateParams,
        right: PlateParams,
    ) -> Self {
        Self {
            groove_type,
            groove_position,
            left,
            right,
            blunt_edge: 0.0,
            root_gap: 0.0,
        }
    }

    #[must_use]
    pub fn with_blunt_edge(mut self, blunt_edge: f64) -> Self {
        self.blunt_edge = blunt_edge;
        self
    }

    #[must_use]
    pub fn with_root_gap(mut self, root_gap: f64) -> Self {
        self.root_gap = root_gap;
        self
    }

    /// Parameters of one plate.
    #[must_use]
    pub fn plate(&self, side: Side) -> &PlateParams {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Checks every magnitude that does not depend on derived quantities.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint as a `DomainError`.
    pub fn validate(&self) -> Result<()> {
        self.left.validate(Side::Left)?;
        self.right.validate(Side::Right)?;
        non_negative("blunt edge", self.blunt_edge)?;
        non_negative("root gap", self.root_gap)?;
        Ok(())
    }
}

fn finite(side: Side, parameter: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DomainError::NotFinite {
            parameter: format!("{side} {parameter}"),
        }
        .into())
    }
}

fn non_negative(parameter: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(DomainError::NotFinite {
            parameter: parameter.to_owned(),
        }
        .into());
    }
    if value < 0.0 {
        return Err(DomainError::Negative {
            parameter: parameter.to_owned(),
            value,
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::WeldError;

    fn params() -> JointParameters {
        JointParameters::new(
            GrooveType::V,
            Position::Outer,
            PlateParams::new(8.0, 60.0),
            PlateParams::new(8.0, 60.0),
        )
        .with_blunt_edge(2.0)
        .with_root_gap(2.0)
    }

    #[test]
    fn parses_form_tokens() {
        assert_eq!("u".parse::<GrooveType>().unwrap(), GrooveType::U);
        assert_eq!(" X ".parse::<GrooveType>().unwrap(), GrooveType::X);
        assert_eq!("Inner".parse::<Position>().unwrap(), Position::Inner);
        assert_eq!(
            "Y".parse::<GrooveType>().unwrap_err(),
            DomainError::UnknownVariant {
                kind: "groove type",
                value: "Y".to_owned()
            }
        );
        assert!("middle".parse::<Position>().is_err());
    }

    #[test]
    fn display_round_trips_tokens() {
        for t in [GrooveType::V, GrooveType::U, GrooveType::J, GrooveType::X] {
            assert_eq!(t.to_string().parse::<GrooveType>().unwrap(), t);
        }
        assert_eq!(Position::Outer.to_string(), "outer");
        assert_eq!(Side::Right.to_string(), "right");
    }

    #[test]
    fn curved_groove_types() {
        assert!(GrooveType::U.is_curved());
        assert!(GrooveType::J.is_curved());
        assert!(!GrooveType::V.is_curved());
        assert!(!GrooveType::X.is_curved());
    }

    #[test]
    fn bevel_lookup_by_face() {
        let plate = PlateParams::new(10.0, 60.0).with_bevel(Bevel::new(Position::Outer, 6.0, 2.0));
        assert_eq!(plate.bevel_on(Position::Outer).map(|b| b.length), Some(6.0));
        assert_eq!(plate.bevel_on(Position::Inner), None);
    }

    #[test]
    fn valid_parameters_pass() {
        params().validate().unwrap();
    }

    #[test]
    fn rejects_non_positive_thickness() {
        let mut p = params();
        p.right.thickness = 0.0;
        let err = p.validate().unwrap_err();
        assert!(matches!(
            err,
            WeldError::Domain(DomainError::NonPositive {
                side: Side::Right,
                parameter: "thickness",
                ..
            })
        ));
    }

    #[test]
    fn rejects_negative_shared_dimensions() {
        let err = params().with_root_gap(-1.0).validate().unwrap_err();
        assert_eq!(err.to_string(), "root gap = -1 must not be negative");
        let err = params().with_blunt_edge(f64::NAN).validate().unwrap_err();
        assert_eq!(err.to_string(), "blunt edge is not a finite number");
    }

    #[test]
    fn rejects_negative_bevel() {
        let mut p = params();
        p.left = p.left.with_bevel(Bevel::new(Position::Inner, -1.0, 1.0));
        let err = p.validate().unwrap_err();
        assert_eq!(err.to_string(), "left bevel length = -1 must not be negative");
    }

    #[test]
    fn rejects_bevel_higher_than_plate() {
        let mut p = params();
        p.right = p.right.with_bevel(Bevel::new(Position::Outer, 4.0, 9.0));
        let err = p.validate().unwrap_err();
        assert!(matches!(
            err,
            WeldError::Domain(DomainError::BevelTooHigh { side: Side::Right, .. })
        ));
    }
}
