//! Free-look camera: pitch/yaw angles plus a translating position.

use std::cell::Cell;
use std::f64::consts::FRAC_PI_2;

use glam::{DMat4, DVec3};

use super::basis::Basis;
use super::{CameraId, ANGLE_LIMIT};
use crate::error::KinecamError;
use crate::util::clamp::RangeClamp;

/// First-person camera.
///
/// The horizontal angle tilts the view up and down and is clamped by
/// default to ±(31/32)·π/2 so the view never quite reaches straight up
/// or down. The vertical angle turns the view left and right and is
/// unbounded; it wraps naturally through the trigonometry.
///
/// Movement is expressed in the camera's current axes: forward and
/// right are camera-relative, up is world-Y.
///
/// Not `Clone`: the opaque id is the camera's identity.
#[derive(Debug)]
pub struct FpsCamera {
    id: CameraId,
    horizontal: f64,
    vertical: f64,
    position: DVec3,
    horizontal_clamp: RangeClamp,
    cached_basis: Cell<Option<Basis>>,
}

impl Default for FpsCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCamera {
    /// Camera at the origin looking down −Z.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: CameraId::next(),
            horizontal: 0.0,
            vertical: FRAC_PI_2,
            position: DVec3::ZERO,
            horizontal_clamp: RangeClamp::symmetric(ANGLE_LIMIT),
            cached_basis: Cell::new(None),
        }
    }

    /// This camera's opaque identity.
    #[must_use]
    pub fn id(&self) -> CameraId {
        self.id
    }

    // ── Angles ──────────────────────────────────────────────────────────

    /// Horizontal (tilt) angle in radians.
    #[must_use]
    pub fn horizontal(&self) -> f64 {
        self.horizontal
    }

    /// Vertical (turn) angle in radians.
    #[must_use]
    pub fn vertical(&self) -> f64 {
        self.vertical
    }

    /// Rotate the view up/down by `delta` radians.
    ///
    /// Returns whether the angle clamp altered the result. A clamped
    /// step is the signal for the angular integrator to zero its speed.
    pub fn rotate_horizontal(&mut self, delta: f64) -> bool {
        let (angle, clamped) =
            self.horizontal_clamp.apply(self.horizontal + delta);
        self.horizontal = angle;
        self.invalidate();
        clamped
    }

    /// Rotate the view left/right by `delta` radians. Never clamped.
    pub fn rotate_vertical(&mut self, delta: f64) {
        self.vertical += delta;
        self.invalidate();
    }

    /// Set the horizontal angle directly, subject to the clamp.
    pub fn set_horizontal(&mut self, angle: f64) {
        let (angle, _) = self.horizontal_clamp.apply(angle);
        self.horizontal = angle;
        self.invalidate();
    }

    /// Set the vertical angle directly.
    pub fn set_vertical(&mut self, angle: f64) {
        self.vertical = angle;
        self.invalidate();
    }

    // ── Horizontal clamp configuration ──────────────────────────────────

    /// The horizontal angle clamp.
    #[must_use]
    pub fn horizontal_clamp(&self) -> &RangeClamp {
        &self.horizontal_clamp
    }

    /// Replace the horizontal clamp bounds and re-clamp the current
    /// angle so the invariant holds immediately.
    ///
    /// # Errors
    ///
    /// Returns [`KinecamError::BoundsInverted`] if `min > max`.
    pub fn set_horizontal_limits(
        &mut self,
        min: f64,
        max: f64,
    ) -> Result<(), KinecamError> {
        self.horizontal_clamp.set_bounds(min, max)?;
        let (angle, _) = self.horizontal_clamp.apply(self.horizontal);
        self.horizontal = angle;
        self.invalidate();
        Ok(())
    }

    /// Enable or disable horizontal clamping. Enabling re-clamps the
    /// current angle.
    pub fn set_horizontal_clamp_enabled(&mut self, enabled: bool) {
        self.horizontal_clamp.set_enabled(enabled);
        if enabled {
            let (angle, _) = self.horizontal_clamp.apply(self.horizontal);
            self.horizontal = angle;
            self.invalidate();
        }
    }

    // ── Position and movement ───────────────────────────────────────────

    /// World-space position.
    #[must_use]
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Set the world-space position.
    pub fn set_position(&mut self, position: DVec3) {
        self.position = position;
    }

    /// Move along the current forward axis.
    pub fn move_forward(&mut self, distance: f64) {
        self.position += self.basis().forward * distance;
    }

    /// Move along the current right axis.
    pub fn move_right(&mut self, distance: f64) {
        self.position += self.basis().right * distance;
    }

    /// Move along world up (+Y), independent of view tilt.
    pub fn move_up(&mut self, distance: f64) {
        self.position.y += distance;
    }

    // ── Derived state ───────────────────────────────────────────────────

    /// The current orientation basis, recomputing it if an angle changed
    /// since the last read.
    #[must_use]
    pub fn basis(&self) -> Basis {
        match self.cached_basis.get() {
            Some(basis) => basis,
            None => {
                let basis =
                    Basis::from_angles(self.horizontal, self.vertical);
                self.cached_basis.set(Some(basis));
                basis
            }
        }
    }

    /// Unit forward vector.
    #[must_use]
    pub fn forward(&self) -> DVec3 {
        self.basis().forward
    }

    /// Unit right vector.
    #[must_use]
    pub fn right(&self) -> DVec3 {
        self.basis().right
    }

    /// Unit up vector.
    #[must_use]
    pub fn up(&self) -> DVec3 {
        self.basis().up
    }

    /// View matrix for the current position and orientation.
    #[must_use]
    pub fn view_matrix(&self) -> DMat4 {
        self.basis().view_matrix(self.position)
    }

    fn invalidate(&mut self) {
        self.cached_basis.set(None);
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn default_looks_down_negative_z() {
        let camera = FpsCamera::new();
        assert!((camera.forward() - DVec3::new(0.0, 0.0, -1.0)).length()
            < EPSILON);
        assert_eq!(camera.position(), DVec3::ZERO);
    }

    #[test]
    fn rotation_invalidates_cached_basis() {
        let mut camera = FpsCamera::new();
        let before = camera.forward();
        camera.rotate_vertical(FRAC_PI_2);
        let after = camera.forward();
        assert!((before - after).length() > 1.0);
        assert!((after - DVec3::new(-1.0, 0.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn horizontal_rotation_clamps_and_reports() {
        let mut camera = FpsCamera::new();
        assert!(!camera.rotate_horizontal(0.5));
        assert!(camera.rotate_horizontal(PI));
        assert!((camera.horizontal() - ANGLE_LIMIT).abs() < EPSILON);
        // Re-driving into the bound keeps reporting the clamp.
        assert!(camera.rotate_horizontal(0.1));
        assert!((camera.horizontal() - ANGLE_LIMIT).abs() < EPSILON);
    }

    #[test]
    fn disabled_clamp_frees_the_horizontal_axis() {
        let mut camera = FpsCamera::new();
        camera.set_horizontal_clamp_enabled(false);
        assert!(!camera.rotate_horizontal(PI));
        assert!((camera.horizontal() - PI).abs() < EPSILON);
    }

    #[test]
    fn enabling_clamp_reclamps_current_angle() {
        let mut camera = FpsCamera::new();
        camera.set_horizontal_clamp_enabled(false);
        let _ = camera.rotate_horizontal(PI);
        camera.set_horizontal_clamp_enabled(true);
        assert!((camera.horizontal() - ANGLE_LIMIT).abs() < EPSILON);
    }

    #[test]
    fn tightened_limits_reclamp_current_angle() {
        let mut camera = FpsCamera::new();
        let _ = camera.rotate_horizontal(1.0);
        camera.set_horizontal_limits(-0.5, 0.5).unwrap();
        assert!((camera.horizontal() - 0.5).abs() < EPSILON);
        assert!(camera.set_horizontal_limits(1.0, -1.0).is_err());
    }

    #[test]
    fn movement_follows_current_axes() {
        let mut camera = FpsCamera::new();
        camera.move_forward(2.0);
        assert!((camera.position() - DVec3::new(0.0, 0.0, -2.0)).length()
            < EPSILON);
        camera.move_right(3.0);
        assert!((camera.position() - DVec3::new(3.0, 0.0, -2.0)).length()
            < EPSILON);
    }

    #[test]
    fn move_up_ignores_view_tilt() {
        let mut camera = FpsCamera::new();
        let _ = camera.rotate_horizontal(1.0);
        camera.move_up(5.0);
        assert!((camera.position() - DVec3::new(0.0, 5.0, 0.0)).length()
            < EPSILON);
    }

    #[test]
    fn view_matrix_centers_on_position() {
        let mut camera = FpsCamera::new();
        camera.set_position(DVec3::new(1.0, 2.0, 3.0));
        let _ = camera.rotate_horizontal(0.3);
        camera.rotate_vertical(0.7);
        let view = camera.view_matrix();
        let p = camera.position();
        let mapped = view * glam::DVec4::new(p.x, p.y, p.z, 1.0);
        assert!(mapped.truncate().length() < 1e-6);
    }
}
