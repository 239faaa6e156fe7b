use std::f64::consts::FRAC_PI_2;

use crate::config::LayoutConfig;
use crate::error::{DomainError, Result};
use crate::math::Point2;

use super::derive::GrooveDimensions;
use super::outline::{PlateOutline, Segment};
use super::params::{GrooveType, JointParameters, Position, Side};

const LEFT_LABELS: [char; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];
const RIGHT_LABELS: [char; 8] = ['d', 'e', 'f', 'g', 'h', 'a', 'b', 'c'];

/// How one groove face is cut between the plate face and the root face.
#[derive(Debug, Clone, Copy, PartialEq)]
enum FaceCut {
    /// Square to the plate faces.
    Vertical,
    /// Straight and leaning back by the slope width.
    Slanted(f64),
    /// Quarter circle of radius `depth`, tangent to the plate face and to
    /// the root face.
    QuarterArc,
}

impl FaceCut {
    /// Selects the cut of the groove face on `face`.
    ///
    /// Straight grooves slant only the face the groove opens from; curved
    /// grooves round both faces.
    fn select(groove_type: GrooveType, opening: Position, face: Position, slope_width: f64) -> Self {
        match (groove_type, face == opening) {
            (GrooveType::U | GrooveType::J, _) => Self::QuarterArc,
            (GrooveType::V | GrooveType::X, true) => Self::Slanted(slope_width),
            (GrooveType::V | GrooveType::X, false) => Self::Vertical,
        }
    }

    /// Horizontal extent of the face.
    fn run(self, depth: f64) -> f64 {
        match self {
            Self::Vertical => 0.0,
            Self::Slanted(width) => width,
            Self::QuarterArc => depth,
        }
    }

    /// Segment joining the two ends of the face, given the arc centre.
    fn segment(self, depth: f64, center: Point2) -> Segment {
        match self {
            Self::Vertical | Self::Slanted(_) => Segment::Straight,
            Self::QuarterArc => Segment::Arc {
                center,
                radius: depth,
                sweep: FRAC_PI_2,
            },
        }
    }
}

/// Side-independent measurements of one plate profile.
///
/// Both builders read the same profile; they differ only in the direction
/// the plate extends from its root face and in the traversal labels.
#[derive(Debug, Clone, Copy)]
struct Profile {
    thickness: f64,
    depth: f64,
    blunt_edge: f64,
    width: f64,
    lower: FaceCut,
    upper: FaceCut,
    /// Bevel lengths along the lower and upper plate faces.
    lower_bevel: Option<f64>,
    upper_bevel: Option<f64>,
}

impl Profile {
    fn new(
        side: Side,
        params: &JointParameters,
        dims: &GrooveDimensions,
        layout: &LayoutConfig,
    ) -> Result<Self> {
        let plate = params.plate(side);
        let width = layout.plate_width();
        let lower = FaceCut::select(
            params.groove_type,
            params.groove_position,
            Position::Inner,
            dims.slope_width,
        );
        let upper = FaceCut::select(
            params.groove_type,
            params.groove_position,
            Position::Outer,
            dims.slope_width,
        );
        let profile = Self {
            thickness: plate.thickness,
            depth: dims.depth,
            blunt_edge: params.blunt_edge,
            width,
            lower,
            upper,
            lower_bevel: plate.bevel_on(Position::Inner).map(|b| b.length),
            upper_bevel: plate.bevel_on(Position::Outer).map(|b| b.length),
        };
        profile.check_layout(side)?;
        Ok(profile)
    }

    fn run_lower(&self) -> f64 {
        self.lower.run(self.depth)
    }

    fn run_upper(&self) -> f64 {
        self.upper.run(self.depth)
    }

    /// Horizontal distance from the outer edge of the plate to the upper
    /// groove corner.
    fn upper_reach(&self) -> f64 {
        self.width + self.run_lower() - self.run_upper()
    }

    /// Rejects bevels and groove runs that leave the nominal plate layout.
    fn check_layout(&self, side: Side) -> Result<()> {
        if let Some(length) = self.lower_bevel {
            if length > self.width {
                return Err(DomainError::BevelTooLong {
                    side,
                    length,
                    available: self.width,
                }
                .into());
            }
        }
        let reach = self.upper_reach();
        if reach < 0.0 {
            return Err(DomainError::GrooveExceedsLayout {
                side,
                run: self.run_upper(),
                width: self.width,
            }
            .into());
        }
        if let Some(length) = self.upper_bevel {
            if length > reach {
                return Err(DomainError::BevelTooLong {
                    side,
                    length,
                    available: reach,
                }
                .into());
            }
        }
        Ok(())
    }
}

/// Builds the left plate outline, anchored at the origin.
///
/// Points run `A` (origin) along the lower face to the groove at `C`, up
/// the lower groove face to the root face `D`-`E`, up the upper groove face
/// to `F`, back along the upper face to `H` above the origin.
///
/// # Errors
///
/// Returns a `DomainError` if a bevel or groove run leaves the plate layout.
pub fn build_left(
    params: &JointParameters,
    dims: &GrooveDimensions,
    layout: &LayoutConfig,
) -> Result<PlateOutline> {
    let p = Profile::new(Side::Left, params, dims, layout)?;

    let a = Point2::origin();
    let h = Point2::new(a.x, p.thickness);
    let b = match p.lower_bevel {
        Some(length) => Point2::new(a.x + length, a.y),
        None => a,
    };
    let c = Point2::new(a.x + p.width, a.y);
    let d = Point2::new(c.x + p.run_lower(), c.y + p.depth);
    let e = Point2::new(d.x, d.y + p.blunt_edge);
    let f = Point2::new(e.x - p.run_upper(), p.thickness);
    let g = match p.upper_bevel {
        Some(length) => Point2::new(h.x + length, h.y),
        None => f,
    };

    let lower = p.lower.segment(p.depth, Point2::new(c.x, c.y + p.depth));
    let upper = p.upper.segment(p.depth, Point2::new(e.x - p.depth, e.y));

    let outline = PlateOutline::new(
        Side::Left,
        LEFT_LABELS,
        [a, b, c, d, e, f, g, h],
        [
            Segment::Straight,
            Segment::Straight,
            lower,
            Segment::Straight,
            upper,
            Segment::Straight,
            Segment::Straight,
            Segment::Straight,
        ],
    );
    trace_points(&outline);
    Ok(outline)
}

/// Builds the right plate outline, mirrored about the joint.
///
/// The root face sits on the axis `left_root.x + root_gap / 2`; the plate
/// extends to the right. Traversal starts at the top of the root face, so
/// the groove face entering the root face is the upper one and the face
/// leaving it is the lower one, opposite to the left plate.
///
/// # Errors
///
/// Returns a `DomainError` if a bevel or groove run leaves the plate layout.
pub fn build_right(
    params: &JointParameters,
    dims: &GrooveDimensions,
    layout: &LayoutConfig,
    left_root: Point2,
) -> Result<PlateOutline> {
    let p = Profile::new(Side::Right, params, dims, layout)?;
    let axis = left_root.x + params.root_gap / 2.0;

    let e = Point2::new(axis, p.depth);
    let d = Point2::new(axis, e.y + p.blunt_edge);
    let f = Point2::new(axis + p.run_lower(), 0.0);
    let h = Point2::new(f.x + p.width, 0.0);
    let a = Point2::new(h.x, p.thickness);
    let g = match p.lower_bevel {
        Some(length) => Point2::new(h.x - length, h.y),
        None => h,
    };
    let c = Point2::new(axis + p.run_upper(), p.thickness);
    let b = match p.upper_bevel {
        Some(length) => Point2::new(a.x - length, a.y),
        None => c,
    };

    let lower = p.lower.segment(p.depth, Point2::new(f.x, f.y + p.depth));
    let upper = p.upper.segment(p.depth, Point2::new(d.x + p.depth, d.y));

    let outline = PlateOutline::new(
        Side::Right,
        RIGHT_LABELS,
        [d, e, f, g, h, a, b, c],
        [
            Segment::Straight,
            lower,
            Segment::Straight,
            Segment::Straight,
            Segment::Straight,
            Segment::Straight,
            Segment::Straight,
            upper,
        ],
    );
    trace_points(&outline);
    Ok(outline)
}

fn trace_points(outline: &PlateOutline) {
    for p in outline.points() {
        tracing::trace!(
            side = %outline.side(),
            label = %p.label,
            x = p.position.x,
            y = p.position.y,
            "outline point"
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::error::WeldError;
    use crate::joint::derive::derive_plate_groove;
    use crate::joint::params::{Bevel, PlateParams};

    fn params(groove_type: GrooveType, position: Position) -> JointParameters {
        JointParameters::new(
            groove_type,
            position,
            PlateParams::new(8.0, 60.0),
            PlateParams::new(8.0, 60.0),
        )
        .with_blunt_edge(2.0)
        .with_root_gap(2.0)
    }

    fn left(params: &JointParameters) -> Result<PlateOutline> {
        let dims = derive_plate_groove(Side::Left, &params.left, params.blunt_edge)?;
        build_left(params, &dims, &LayoutConfig::default())
    }

    fn right(params: &JointParameters, left_root: Point2) -> Result<PlateOutline> {
        let dims = derive_plate_groove(Side::Right, &params.right, params.blunt_edge)?;
        build_right(params, &dims, &LayoutConfig::default(), left_root)
    }

    fn pt(outline: &PlateOutline, label: char) -> Point2 {
        outline.point(label).unwrap()
    }

    #[test]
    fn face_cut_selection() {
        let s = 1.5;
        assert_eq!(
            FaceCut::select(GrooveType::V, Position::Outer, Position::Outer, s),
            FaceCut::Slanted(s)
        );
        assert_eq!(
            FaceCut::select(GrooveType::X, Position::Outer, Position::Inner, s),
            FaceCut::Vertical
        );
        for face in [Position::Inner, Position::Outer] {
            assert_eq!(
                FaceCut::select(GrooveType::J, Position::Inner, face, s),
                FaceCut::QuarterArc
            );
        }
        assert_eq!(FaceCut::QuarterArc.run(3.0), 3.0);
        assert_eq!(FaceCut::Vertical.run(3.0), 0.0);
    }

    #[test]
    fn outer_v_left_points() {
        let outline = left(&params(GrooveType::V, Position::Outer)).unwrap();
        let s = 3.0 * 30.0_f64.to_radians().tan();

        assert_eq!(pt(&outline, 'A'), Point2::origin());
        assert_eq!(pt(&outline, 'B'), Point2::origin());
        assert_eq!(pt(&outline, 'C'), Point2::new(20.0, 0.0));
        // Outer position: the lower face is a vertical run of the depth.
        assert_eq!(pt(&outline, 'D'), Point2::new(20.0, 3.0));
        assert_eq!(pt(&outline, 'E'), Point2::new(20.0, 5.0));
        assert_relative_eq!(pt(&outline, 'F').x, 20.0 - s, max_relative = 1e-12);
        assert_eq!(pt(&outline, 'F').y, 8.0);
        assert_eq!(pt(&outline, 'G'), pt(&outline, 'F'));
        assert_eq!(pt(&outline, 'H'), Point2::new(0.0, 8.0));
        assert!(outline.edges().iter().all(|e| !e.segment.is_arc()));
    }

    #[test]
    fn inner_v_slants_lower_face() {
        let outline = left(&params(GrooveType::V, Position::Inner)).unwrap();
        let c = pt(&outline, 'C');
        let d = pt(&outline, 'D');
        assert_relative_eq!(d.x - c.x, 3.0 * 30.0_f64.to_radians().tan(), max_relative = 1e-12);
        assert_eq!(d.y - c.y, 3.0);
        assert_eq!(pt(&outline, 'F').x, pt(&outline, 'E').x);
    }

    #[test]
    fn u_groove_uses_tangent_quarter_arcs() {
        let outline = left(&params(GrooveType::U, Position::Outer)).unwrap();
        let c = pt(&outline, 'C');
        let d = pt(&outline, 'D');
        let e = pt(&outline, 'E');
        let f = pt(&outline, 'F');

        let Segment::Arc { center, radius, sweep } = outline.edge_from('C').unwrap().segment else {
            panic!("C-D should be an arc");
        };
        assert_eq!(radius, 3.0);
        assert_abs_diff_eq!(sweep, FRAC_PI_2);
        // Centre straight above C: tangent to the lower face at C.
        assert_eq!(center, Point2::new(c.x, c.y + 3.0));
        // Centre level with D: tangent to the vertical root face at D.
        assert_eq!(center.y, d.y);
        assert_abs_diff_eq!((d - center).norm(), 3.0, epsilon = 1e-12);

        let Segment::Arc { center, radius, .. } = outline.edge_from('E').unwrap().segment else {
            panic!("E-F should be an arc");
        };
        assert_eq!(radius, 3.0);
        assert_eq!(center.y, e.y);
        assert_abs_diff_eq!(center.x, f.x, epsilon = 1e-12);
        assert_abs_diff_eq!((f - center).norm(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn right_root_face_sits_on_axis() {
        let p = params(GrooveType::V, Position::Outer);
        let l = left(&p).unwrap();
        let r = right(&p, pt(&l, 'D')).unwrap();
        assert_eq!(pt(&r, 'd').x, pt(&l, 'D').x + 1.0);
        assert_eq!(pt(&r, 'e').x, pt(&r, 'd').x);
        assert_eq!(pt(&r, 'e').y, 3.0);
        assert_eq!(pt(&r, 'd').y, 5.0);
    }

    #[test]
    fn right_plate_mirrors_left() {
        for groove_type in [GrooveType::V, GrooveType::U] {
            for position in [Position::Outer, Position::Inner] {
                let p = params(groove_type, position);
                let l = left(&p).unwrap();
                let root = pt(&l, 'D');
                let r = right(&p, root).unwrap();
                let axis = root.x + 1.0;
                // Mirror image about the midpoint of the two root faces.
                let mirror = |q: Point2| Point2::new(root.x + axis - q.x, q.y);
                let pairs = [('A', 'h'), ('C', 'f'), ('D', 'e'), ('E', 'd'), ('F', 'c'), ('H', 'a')];
                for (left_label, right_label) in pairs {
                    let m = mirror(pt(&l, left_label));
                    let q = pt(&r, right_label);
                    assert_abs_diff_eq!(m.x, q.x, epsilon = 1e-9);
                    assert_abs_diff_eq!(m.y, q.y, epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn outlines_wind_counter_clockwise() {
        for groove_type in [GrooveType::V, GrooveType::U, GrooveType::J, GrooveType::X] {
            let p = params(groove_type, Position::Inner);
            let l = left(&p).unwrap();
            let r = right(&p, pt(&l, 'D')).unwrap();
            assert!(l.signed_area() > 0.0, "{groove_type} left");
            assert!(r.signed_area() > 0.0, "{groove_type} right");
            assert_relative_eq!(l.signed_area(), r.signed_area(), max_relative = 1e-9);
        }
    }

    #[test]
    fn bevel_leaves_groove_depth_unchanged() {
        let mut p = params(GrooveType::V, Position::Outer);
        p.left = p.left.with_bevel(Bevel::new(Position::Inner, 1.0, 2.0));
        let outline = left(&p).unwrap();
        assert_eq!(pt(&outline, 'C'), Point2::new(20.0, 0.0));
        assert_eq!(pt(&outline, 'D').y - pt(&outline, 'C').y, 3.0);
        assert_eq!(pt(&outline, 'E').y, 5.0);
        assert_eq!(pt(&outline, 'F').y, 8.0);
    }

    #[test]
    fn bevel_length_is_measured_from_the_outer_edge() {
        let mut p = params(GrooveType::V, Position::Inner);
        p.left = p.left.with_bevel(Bevel::new(Position::Inner, 6.0, 2.0));
        let outline = left(&p).unwrap();
        assert_eq!(pt(&outline, 'B'), Point2::new(6.0, 0.0));
        assert_eq!(pt(&outline, 'G'), pt(&outline, 'F'));

        p.left = PlateParams::new(8.0, 60.0).with_bevel(Bevel::new(Position::Outer, 6.0, 2.0));
        let outline = left(&p).unwrap();
        assert_eq!(pt(&outline, 'B'), Point2::origin());
        assert_eq!(pt(&outline, 'G'), Point2::new(6.0, 8.0));
    }

    #[test]
    fn right_bevels_mirror_left() {
        let mut p = params(GrooveType::V, Position::Inner);
        p.right = p.right.with_bevel(Bevel::new(Position::Outer, 6.0, 2.0));
        let r = right(&p, Point2::new(20.0, 3.0)).unwrap();
        assert_eq!(pt(&r, 'c'), Point2::new(21.0, 8.0));
        assert_eq!(pt(&r, 'a').x - pt(&r, 'b').x, 6.0);
        assert_eq!(pt(&r, 'b').y, 8.0);

        p.right = PlateParams::new(8.0, 60.0).with_bevel(Bevel::new(Position::Inner, 4.0, 1.0));
        let r = right(&p, Point2::new(20.0, 3.0)).unwrap();
        assert_eq!(pt(&r, 'h').x - pt(&r, 'g').x, 4.0);
        assert_eq!(pt(&r, 'g').y, 0.0);
        assert_eq!(pt(&r, 'b'), pt(&r, 'c'));
    }

    #[test]
    fn lower_bevel_longer_than_plate_is_rejected() {
        let mut p = params(GrooveType::V, Position::Outer);
        p.left = p.left.with_bevel(Bevel::new(Position::Inner, 25.0, 1.0));
        let err = left(&p).unwrap_err();
        assert!(matches!(
            err,
            WeldError::Domain(DomainError::BevelTooLong { side: Side::Left, .. })
        ));
    }

    #[test]
    fn upper_bevel_past_far_edge_is_rejected() {
        let mut p = params(GrooveType::V, Position::Outer);
        p.right = p.right.with_bevel(Bevel::new(Position::Outer, 19.5, 1.0));
        let err = right(&p, Point2::new(20.0, 3.0)).unwrap_err();
        assert!(matches!(
            err,
            WeldError::Domain(DomainError::BevelTooLong { side: Side::Right, .. })
        ));
    }

    #[test]
    fn steep_groove_outside_layout_is_rejected() {
        let mut p = params(GrooveType::V, Position::Outer);
        p.left.groove_angle = 179.9;
        let err = left(&p).unwrap_err();
        assert!(matches!(
            err,
            WeldError::Domain(DomainError::GrooveExceedsLayout { side: Side::Left, .. })
        ));
    }
}
