//! Error types for camera configuration and the physics sandbox.

use core::fmt;

/// Errors returned by fallible constructors and lookups.
///
/// Per-frame operations (`fling`, `on_update`, touch handling) never fail.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Deceleration factor must be in (0, 1].
    InvalidDeceleration,
    /// Minimum movement velocity must be non-negative and finite.
    InvalidMinVelocity,
    /// Zoom factor must be positive and finite.
    InvalidZoomFactor,
    /// Camera viewport must have a positive width and height.
    InvalidViewport,
    /// Body width and height must be positive.
    InvalidBodySize,
    /// Fixture density must be non-negative and finite.
    InvalidDensity,
    /// Grid spacing must be positive and finite.
    InvalidGridStep,
    /// FPS averaging interval must be positive and finite.
    InvalidFpsInterval,
    /// Body handle does not refer to a body in this world.
    BodyOutOfBounds { index: usize, count: usize },
    /// Shape handle does not refer to a shape in this scene.
    ShapeOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidDeceleration => write!(f, "deceleration factor must be in (0, 1]"),
            EngineError::InvalidMinVelocity => {
                write!(f, "minimum movement velocity must be non-negative")
            }
            EngineError::InvalidZoomFactor => write!(f, "zoom factor must be positive"),
            EngineError::InvalidViewport => write!(f, "viewport must have a positive size"),
            EngineError::InvalidBodySize => write!(f, "body width and height must be positive"),
            EngineError::InvalidDensity => write!(f, "density must be non-negative"),
            EngineError::InvalidGridStep => write!(f, "grid step must be positive"),
            EngineError::InvalidFpsInterval => write!(f, "fps averaging interval must be positive"),
            EngineError::BodyOutOfBounds { index, count } => {
                write!(f, "body index {} out of bounds (count: {})", index, count)
            }
            EngineError::ShapeOutOfBounds { index, count } => {
                write!(f, "shape index {} out of bounds (count: {})", index, count)
            }
        }
    }
}
