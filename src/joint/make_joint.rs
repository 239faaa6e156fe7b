use crate::config::LayoutConfig;
use crate::error::Result;
use crate::math::polygon_2d::Aabb2;

use super::derive::derive_plate_groove;
use super::outline::PlateOutline;
use super::params::{JointParameters, Side};
use super::plate::{build_left, build_right};

/// Cross-section of a complete joint: both plate outlines and the joint axis.
#[derive(Debug, Clone, PartialEq)]
pub struct JointOutline {
    left: PlateOutline,
    right: PlateOutline,
    axis_x: f64,
}

impl JointOutline {
    #[must_use]
    pub fn left(&self) -> &PlateOutline {
        &self.left
    }

    #[must_use]
    pub fn right(&self) -> &PlateOutline {
        &self.right
    }

    /// x-coordinate of the right plate's root face.
    #[must_use]
    pub fn axis_x(&self) -> f64 {
        self.axis_x
    }

    /// Bounds of both outlines, for fitting the drawing surface.
    #[must_use]
    pub fn bounding_box(&self) -> Aabb2 {
        self.left.bounding_box().union(&self.right.bounding_box())
    }
}

/// Generates the cross-section of a weld joint from its parameters.
///
/// Derives the groove of each plate, builds the left outline at the origin
/// and then the right outline against the left root face. The first failure
/// is returned as is; there is no partial result.
#[derive(Debug)]
pub struct MakeJoint {
    params: JointParameters,
    layout: LayoutConfig,
}

impl MakeJoint {
    /// Creates a new `MakeJoint` operation with the default layout.
    #[must_use]
    pub fn new(params: JointParameters) -> Self {
        Self {
            params,
            layout: LayoutConfig::default(),
        }
    }

    /// Replaces the layout configuration.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` naming the first parameter that violates a
    /// constraint.
    pub fn execute(&self) -> Result<JointOutline> {
        let params = &self.params;
        params.validate()?;

        let left_dims = derive_plate_groove(Side::Left, &params.left, params.blunt_edge)?;
        let right_dims = derive_plate_groove(Side::Right, &params.right, params.blunt_edge)?;

        let left = build_left(params, &left_dims, &self.layout)?;
        let (left_root, _) = left.root_face();
        let right = build_right(params, &right_dims, &self.layout, left_root)?;
        let (axis, _) = right.root_face();

        tracing::debug!(
            groove_type = %params.groove_type,
            groove_position = %params.groove_position,
            axis_x = axis.x,
            left_area = left.signed_area(),
            right_area = right.signed_area(),
            "assembled joint"
        );

        Ok(JointOutline {
            left,
            right,
            axis_x: axis.x,
        })
    }
}
