//! Orbiting camera: heading/incline/radius around a movable target.

use std::cell::Cell;
use std::f64::consts::FRAC_PI_2;

use glam::{DMat4, DVec3};

use super::basis::Basis;
use super::{CameraId, ANGLE_LIMIT};
use crate::error::KinecamError;
use crate::util::clamp::RangeClamp;

/// Distance from target to camera at construction.
pub const DEFAULT_RADIUS: f64 = 8.0;

/// Bounds remembered by the (initially disabled) radius clamp.
const RADIUS_MIN_DEFAULT: f64 = 0.5;
const RADIUS_MAX_DEFAULT: f64 = 128.0;

/// Orbit camera.
///
/// Heading turns the camera around the target about world up and is
/// unbounded; incline tilts the orbit and is clamped by default to
/// ±(31/32)·π/2. The zoom radius carries a clamp that starts disabled;
/// in practice the radius must stay positive.
///
/// The camera's position is derived, never stored:
/// `position = target − radius · forward`, so the default camera sits
/// eight units behind the target looking at it.
///
/// Not `Clone`: the opaque id is the camera's identity.
#[derive(Debug)]
pub struct OrbitCamera {
    id: CameraId,
    heading: f64,
    incline: f64,
    radius: f64,
    target: DVec3,
    incline_clamp: RangeClamp,
    radius_clamp: RangeClamp,
    cached_basis: Cell<Option<Basis>>,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitCamera {
    /// Camera orbiting the origin, looking down −Z from (0, 0, 8).
    #[must_use]
    pub fn new() -> Self {
        let radius_clamp =
            RangeClamp::disabled(RADIUS_MIN_DEFAULT, RADIUS_MAX_DEFAULT)
                .unwrap_or_else(|_| {
                    RangeClamp::symmetric(RADIUS_MAX_DEFAULT)
                });
        Self {
            id: CameraId::next(),
            heading: FRAC_PI_2,
            incline: 0.0,
            radius: DEFAULT_RADIUS,
            target: DVec3::ZERO,
            incline_clamp: RangeClamp::symmetric(ANGLE_LIMIT),
            radius_clamp,
            cached_basis: Cell::new(None),
        }
    }

    /// This camera's opaque identity.
    #[must_use]
    pub fn id(&self) -> CameraId {
        self.id
    }

    // ── Angles and radius ───────────────────────────────────────────────

    /// Heading (turn around the target) in radians.
    #[must_use]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Incline (tilt of the orbit) in radians.
    #[must_use]
    pub fn incline(&self) -> f64 {
        self.incline
    }

    /// Distance from target to camera.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Orbit around the target by `delta` radians of heading. Never
    /// clamped.
    pub fn orbit_heading(&mut self, delta: f64) {
        self.heading += delta;
        self.invalidate();
    }

    /// Tilt the orbit by `delta` radians of incline.
    ///
    /// Returns whether the incline clamp altered the result; a clamped
    /// step tells the angular integrator to zero its incline speed.
    pub fn orbit_incline(&mut self, delta: f64) -> bool {
        let (angle, clamped) =
            self.incline_clamp.apply(self.incline + delta);
        self.incline = angle;
        self.invalidate();
        clamped
    }

    /// Change the orbit radius by `delta` (positive zooms out).
    ///
    /// Returns whether the radius clamp altered the result. The clamp
    /// is disabled by default, in which case this always reports false.
    pub fn zoom(&mut self, delta: f64) -> bool {
        let (radius, clamped) = self.radius_clamp.apply(self.radius + delta);
        self.radius = radius;
        clamped
    }

    /// Set the heading directly.
    pub fn set_heading(&mut self, angle: f64) {
        self.heading = angle;
        self.invalidate();
    }

    /// Set the incline directly, subject to the clamp.
    pub fn set_incline(&mut self, angle: f64) {
        let (angle, _) = self.incline_clamp.apply(angle);
        self.incline = angle;
        self.invalidate();
    }

    /// Set the radius directly, subject to the clamp.
    pub fn set_radius(&mut self, radius: f64) {
        let (radius, _) = self.radius_clamp.apply(radius);
        self.radius = radius;
    }

    // ── Clamp configuration ─────────────────────────────────────────────

    /// The incline clamp.
    #[must_use]
    pub fn incline_clamp(&self) -> &RangeClamp {
        &self.incline_clamp
    }

    /// The radius clamp.
    #[must_use]
    pub fn radius_clamp(&self) -> &RangeClamp {
        &self.radius_clamp
    }

    /// Replace the incline clamp bounds and re-clamp the current angle.
    ///
    /// # Errors
    ///
    /// Returns [`KinecamError::BoundsInverted`] if `min > max`.
    pub fn set_incline_limits(
        &mut self,
        min: f64,
        max: f64,
    ) -> Result<(), KinecamError> {
        self.incline_clamp.set_bounds(min, max)?;
        let (angle, _) = self.incline_clamp.apply(self.incline);
        self.incline = angle;
        self.invalidate();
        Ok(())
    }

    /// Enable or disable incline clamping. Enabling re-clamps the
    /// current angle.
    pub fn set_incline_clamp_enabled(&mut self, enabled: bool) {
        self.incline_clamp.set_enabled(enabled);
        if enabled {
            let (angle, _) = self.incline_clamp.apply(self.incline);
            self.incline = angle;
            self.invalidate();
        }
    }

    /// Replace the radius clamp bounds and re-clamp the current radius.
    ///
    /// # Errors
    ///
    /// Returns [`KinecamError::BoundsInverted`] if `min > max`.
    pub fn set_radius_limits(
        &mut self,
        min: f64,
        max: f64,
    ) -> Result<(), KinecamError> {
        self.radius_clamp.set_bounds(min, max)?;
        let (radius, _) = self.radius_clamp.apply(self.radius);
        self.radius = radius;
        Ok(())
    }

    /// Enable or disable radius clamping. Enabling re-clamps the
    /// current radius.
    pub fn set_radius_clamp_enabled(&mut self, enabled: bool) {
        self.radius_clamp.set_enabled(enabled);
        if enabled {
            let (radius, _) = self.radius_clamp.apply(self.radius);
            self.radius = radius;
        }
    }

    // ── Target movement ─────────────────────────────────────────────────

    /// The point the camera orbits.
    #[must_use]
    pub fn target(&self) -> DVec3 {
        self.target
    }

    /// Move the target directly.
    pub fn set_target(&mut self, target: DVec3) {
        self.target = target;
    }

    /// Move the target along the orbit-plane projection of forward, so
    /// panning "ahead" never drifts vertically as the orbit tilts.
    pub fn move_target_forward(&mut self, distance: f64) {
        self.target += self.basis().planar_forward() * distance;
    }

    /// Move the target along the current right axis.
    pub fn move_target_right(&mut self, distance: f64) {
        self.target += self.basis().right * distance;
    }

    /// Move the target along world up (+Y).
    pub fn move_target_up(&mut self, distance: f64) {
        self.target.y += distance;
    }

    // ── Derived state ───────────────────────────────────────────────────

    /// The current orientation basis, recomputing it if an angle changed
    /// since the last read.
    #[must_use]
    pub fn basis(&self) -> Basis {
        match self.cached_basis.get() {
            Some(basis) => basis,
            None => {
                let basis = Basis::from_angles(self.incline, self.heading);
                self.cached_basis.set(Some(basis));
                basis
            }
        }
    }

    /// Unit forward vector (camera toward target).
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

    /// Derived world-space camera position:
    /// `target − radius · forward`.
    #[must_use]
    pub fn position(&self) -> DVec3 {
        self.target - self.basis().forward * self.radius
    }

    /// View matrix for the derived position and current orientation.
    #[must_use]
    pub fn view_matrix(&self) -> DMat4 {
        self.basis().view_matrix(self.position())
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
    fn default_sits_behind_target_looking_at_it() {
        let camera = OrbitCamera::new();
        assert!((camera.position() - DVec3::new(0.0, 0.0, 8.0)).length()
            < EPSILON);
        assert!((camera.forward() - DVec3::new(0.0, 0.0, -1.0)).length()
            < EPSILON);
    }

    #[test]
    fn position_tracks_target() {
        let mut camera = OrbitCamera::new();
        camera.set_target(DVec3::new(10.0, 0.0, 0.0));
        assert!((camera.position() - DVec3::new(10.0, 0.0, 8.0)).length()
            < EPSILON);
    }

    #[test]
    fn heading_orbit_keeps_distance() {
        let mut camera = OrbitCamera::new();
        camera.orbit_heading(1.2);
        let offset = camera.position() - camera.target();
        assert!((offset.length() - DEFAULT_RADIUS).abs() < EPSILON);
    }

    #[test]
    fn incline_orbit_clamps_and_reports() {
        let mut camera = OrbitCamera::new();
        assert!(!camera.orbit_incline(0.5));
        assert!(camera.orbit_incline(PI));
        assert!((camera.incline() - ANGLE_LIMIT).abs() < EPSILON);
    }

    #[test]
    fn zoom_is_unclamped_by_default() {
        let mut camera = OrbitCamera::new();
        assert!(!camera.zoom(1000.0));
        assert!((camera.radius() - 1008.0).abs() < EPSILON);
    }

    #[test]
    fn enabled_radius_clamp_bounds_zoom() {
        let mut camera = OrbitCamera::new();
        camera.set_radius_clamp_enabled(true);
        assert!(camera.zoom(1000.0));
        assert_eq!(camera.radius(), 128.0);
        assert!(camera.zoom(-1000.0));
        assert_eq!(camera.radius(), 0.5);
    }

    #[test]
    fn pan_forward_stays_in_orbit_plane() {
        let mut camera = OrbitCamera::new();
        let _ = camera.orbit_incline(1.0);
        camera.move_target_forward(3.0);
        assert!(camera.target().y.abs() < EPSILON);
        assert!((camera.target().length() - 3.0).abs() < EPSILON);
    }

    #[test]
    fn pan_up_moves_along_world_y() {
        let mut camera = OrbitCamera::new();
        let _ = camera.orbit_incline(1.0);
        camera.move_target_up(2.0);
        assert!((camera.target() - DVec3::new(0.0, 2.0, 0.0)).length()
            < EPSILON);
    }

    #[test]
    fn basis_is_shared_with_the_free_look_derivation() {
        // Same angles, same basis: the orbit camera simply feeds
        // (incline, heading) into the common derivation.
        let mut camera = OrbitCamera::new();
        camera.set_heading(2.0);
        camera.set_incline(0.5);
        let expected = Basis::from_angles(0.5, 2.0);
        assert_eq!(camera.basis(), expected);
    }
}
