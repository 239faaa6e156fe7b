pub mod config;
pub mod error;
pub mod geometry;
pub mod joint;
pub mod math;
pub mod tessellation;

pub use config::LayoutConfig;
pub use error::{DomainError, Result, WeldError};
pub use joint::{JointOutline, JointParameters, MakeJoint};
