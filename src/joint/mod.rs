//! Weld-joint cross-section generation.
//!
//! ```text
//! JointParameters ─► derive (per side) ─► build_left ─► build_right ─► JointOutline
//! ```
//!
//! [`MakeJoint`] runs the whole pipeline; the stages are public for callers
//! that need a single plate.

pub mod derive;
mod make_joint;
pub mod outline;
pub mod params;
pub mod plate;

pub use derive::{derive_groove, derive_plate_groove, GrooveDimensions};
pub use make_joint::{JointOutline, MakeJoint};
pub use outline::{OutlineEdge, OutlinePoint, PlateOutline, Segment};
pub use params::{Bevel, GrooveType, JointParameters, PlateParams, Position, Side};
