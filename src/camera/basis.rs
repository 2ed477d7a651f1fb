//! Orientation basis derivation and view-matrix construction.
//!
//! Pure functions of the camera angles: no camera state, no caching.
//! All math is `f64`; non-finite inputs propagate (the derivations are
//! total over finite doubles and make no attempt to repair NaN).

use std::f64::consts::FRAC_PI_2;

use glam::{DMat4, DVec3, DVec4};

/// Right-handed orthonormal orientation triple.
///
/// `horizontal` tilts the view up/down (rotation about the lateral
/// axis); `vertical` turns it left/right (rotation about the world up
/// axis). At `horizontal = 0`, `vertical = π/2` the basis is canonical:
/// forward −Z, right +X, up +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    /// Unit vector the camera looks along.
    pub forward: DVec3,
    /// Unit vector out of the camera's right side, parallel to the
    /// ground plane.
    pub right: DVec3,
    /// Unit vector out of the top of the camera.
    pub up: DVec3,
}

impl Basis {
    /// Derive the basis from a horizontal and a vertical angle (radians).
    #[must_use]
    pub fn from_angles(horizontal: f64, vertical: f64) -> Self {
        let (sin_h, cos_h) = horizontal.sin_cos();
        let (sin_v, cos_v) = vertical.sin_cos();
        let forward =
            DVec3::new(cos_h * cos_v, sin_h, -cos_h * sin_v).normalize();

        // The right axis is the forward axis a quarter turn earlier in
        // the horizontal plane, with no vertical component.
        let lagged = vertical - FRAC_PI_2;
        let right = DVec3::new(
            cos_h * lagged.cos(),
            0.0,
            -cos_h * lagged.sin(),
        )
        .normalize();

        let up = right.cross(forward);
        Self { forward, right, up }
    }

    /// Forward projected onto the ground plane and renormalized.
    ///
    /// Used for target-relative movement that must not drift vertically
    /// as the view tilts.
    #[must_use]
    pub fn planar_forward(&self) -> DVec3 {
        DVec3::new(self.forward.x, 0.0, self.forward.z).normalize()
    }

    /// Build the view matrix `R · T` for an eye at `position`.
    ///
    /// The rows of `R` are right, up, and negated forward; `T`
    /// translates by the negated eye position (standard right-handed
    /// look-at form).
    #[must_use]
    pub fn view_matrix(&self, position: DVec3) -> DMat4 {
        let r = self.right;
        let u = self.up;
        let f = self.forward;
        let rotation = DMat4::from_cols(
            DVec4::new(r.x, u.x, -f.x, 0.0),
            DVec4::new(r.y, u.y, -f.y, 0.0),
            DVec4::new(r.z, u.z, -f.z, 0.0),
            DVec4::new(0.0, 0.0, 0.0, 1.0),
        );
        rotation * DMat4::from_translation(-position)
    }
}
