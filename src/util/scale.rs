//! Zoom-dependent scaling curves for the orbit pan axes.
//!
//! The orbit linear integrator multiplies its pan acceleration and speed
//! bound (and optionally its drag base) by a curve evaluated at the
//! current orbit radius, so panning slows down as the camera zooms in.

use serde::{Deserialize, Serialize};

/// Scaling curve mapping the current orbit radius to a multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusScale {
    /// No scaling: every radius maps to a unit multiplier.
    Unit,
    /// Square-root scaling: pan response grows with √radius.
    Sqrt,
    /// Proportional scaling: pan response grows linearly with radius.
    Linear,
}

impl RadiusScale {
    /// Default pan scaling for the zoom-scaled orbit integrator.
    pub const DEFAULT_PAN: RadiusScale = RadiusScale::Sqrt;
    /// Default drag scaling (no radius coupling).
    pub const DEFAULT_DRAG: RadiusScale = RadiusScale::Unit;

    /// Evaluate the curve at `radius`.
    #[inline]
    #[must_use]
    pub fn evaluate(self, radius: f64) -> f64 {
        match self {
            Self::Unit => 1.0,
            Self::Sqrt => radius.sqrt(),
            Self::Linear => radius,
        }
    }
}

impl Default for RadiusScale {
    #[inline]
    fn default() -> Self {
        Self::Unit
    }
}
