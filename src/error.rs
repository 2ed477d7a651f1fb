//! Crate-level error types.

use std::fmt;

/// Errors produced by the kinecam crate.
///
/// Configuration preconditions are checked immediately and synchronously
/// by the setter or constructor they guard; nothing in the per-frame
/// integration path can fail.
#[derive(Debug)]
pub enum KinecamError {
    /// Drag factor outside the closed interval [0, 1].
    DragOutOfRange(f64),
    /// Acceleration is zero or negative.
    AccelerationOutOfRange(f64),
    /// Maximum speed is negative.
    MaxSpeedOutOfRange(f64),
    /// Clamp bounds with `min` greater than `max`.
    BoundsInverted {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
    /// Screen region narrower or shorter than two pixels.
    RegionTooSmall {
        /// Requested region width in pixels.
        width: u32,
        /// Requested region height in pixels.
        height: u32,
    },
    /// Rig construction with integrators bound to different cameras.
    CameraMismatch,
    /// Rig construction with integrators draining different inputs.
    InputMismatch,
    /// Tuning preset parsing/serialization failure.
    PresetParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for KinecamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DragOutOfRange(v) => {
                write!(f, "drag must lie in [0, 1], got {v}")
            }
            Self::AccelerationOutOfRange(v) => {
                write!(f, "acceleration must be positive, got {v}")
            }
            Self::MaxSpeedOutOfRange(v) => {
                write!(f, "maximum speed must be non-negative, got {v}")
            }
            Self::BoundsInverted { min, max } => {
                write!(f, "clamp bounds inverted: min {min} > max {max}")
            }
            Self::RegionTooSmall { width, height } => {
                write!(
                    f,
                    "screen region must be at least 2x2 pixels, got \
                     {width}x{height}"
                )
            }
            Self::CameraMismatch => {
                write!(f, "integrators are bound to different cameras")
            }
            Self::InputMismatch => {
                write!(f, "integrators drain different input states")
            }
            Self::PresetParse(msg) => {
                write!(f, "preset parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for KinecamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for KinecamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
