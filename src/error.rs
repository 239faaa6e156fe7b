use thiserror::Error;

use crate::joint::Side;

/// Top-level error type for the weld-joint generator.
#[derive(Debug, Error)]
pub enum WeldError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Invalid joint parameters.
///
/// Every variant names the offending parameter, so the caller can point the
/// user at the field that needs correcting.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("{side} {parameter} = {value} must be positive")]
    NonPositive {
        side: Side,
        parameter: &'static str,
        value: f64,
    },

    #[error("{parameter} = {value} must not be negative")]
    Negative { parameter: String, value: f64 },

    #[error("{parameter} is not a finite number")]
    NotFinite { parameter: String },

    #[error("{side} groove angle = {value}° is out of range [0°, 180°)")]
    AngleOutOfRange { side: Side, value: f64 },

    #[error("blunt edge = {blunt_edge} exceeds the {side} joint thickness {thickness}")]
    BluntEdgeExceedsThickness {
        side: Side,
        blunt_edge: f64,
        thickness: f64,
    },

    #[error("{side} bevel length = {length} exceeds the available run {available}")]
    BevelTooLong {
        side: Side,
        length: f64,
        available: f64,
    },

    #[error("{side} bevel height = {height} exceeds the plate thickness {thickness}")]
    BevelTooHigh {
        side: Side,
        height: f64,
        thickness: f64,
    },

    #[error("{side} groove run = {run} exceeds the nominal plate width {width}")]
    GrooveExceedsLayout { side: Side, run: f64, width: f64 },

    #[error("layout {parameter} = {value} must be positive and finite")]
    InvalidLayout { parameter: &'static str, value: f64 },

    #[error("unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),

    #[error("tessellation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`WeldError`].
pub type Result<T> = std::result::Result<T, WeldError>;
