//! Integrator aggregates: one camera, one angular integrator, one
//! linear integrator, advanced together once per simulation tick.

use std::sync::Arc;

use super::angular::{FpsAngularIntegrator, OrbitAngularIntegrator};
use super::linear::{FpsLinearIntegrator, OrbitLinearIntegrator};
use crate::camera::fps::FpsCamera;
use crate::camera::orbit::OrbitCamera;
use crate::error::KinecamError;
use crate::input::InputState;
use crate::snapshot::{FpsSnapshot, OrbitSnapshot};

/// Free-look camera rig.
///
/// Owns the camera and both integrators. Construction validates that
/// the integrators were built against the owned camera (by id) and
/// drain the same input (by `Arc` identity), so a rig can never mix
/// state from two camera/input pairs.
#[derive(Debug)]
pub struct FpsRig {
    camera: FpsCamera,
    angular: FpsAngularIntegrator,
    linear: FpsLinearIntegrator,
}

impl FpsRig {
    /// Bind `camera` to pre-built integrators.
    ///
    /// # Errors
    ///
    /// [`KinecamError::CameraMismatch`] if either integrator was built
    /// against a different camera; [`KinecamError::InputMismatch`] if
    /// the integrators drain different [`InputState`]s.
    pub fn new(
        camera: FpsCamera,
        angular: FpsAngularIntegrator,
        linear: FpsLinearIntegrator,
    ) -> Result<Self, KinecamError> {
        if angular.camera_id() != camera.id()
            || linear.camera_id() != camera.id()
        {
            return Err(KinecamError::CameraMismatch);
        }
        if !Arc::ptr_eq(angular.input(), linear.input()) {
            return Err(KinecamError::InputMismatch);
        }
        Ok(Self {
            camera,
            angular,
            linear,
        })
    }

    /// Build a rig with default-tuned integrators around `camera`.
    #[must_use]
    pub fn with_defaults(camera: FpsCamera, input: Arc<InputState>) -> Self {
        let angular =
            FpsAngularIntegrator::new(&camera, Arc::clone(&input));
        let linear = FpsLinearIntegrator::new(&camera, input);
        // The integrators were just built against this camera and share
        // one input, so the checked constructor cannot fail.
        Self {
            camera,
            angular,
            linear,
        }
    }

    /// Advance one simulation tick.
    ///
    /// Linear first, then angular: translation uses the basis as it
    /// stood *before* this frame's rotation.
    pub fn integrate(&mut self, dt: f64) {
        self.linear.integrate(&mut self.camera, dt);
        self.angular.integrate(&mut self.camera, dt);
    }

    /// Capture a snapshot of the camera's readable state.
    #[must_use]
    pub fn snapshot(&self) -> FpsSnapshot {
        FpsSnapshot::capture(&self.camera)
    }

    /// The owned camera.
    #[must_use]
    pub fn camera(&self) -> &FpsCamera {
        &self.camera
    }

    /// Mutable camera access (repositioning, clamp configuration).
    pub fn camera_mut(&mut self) -> &mut FpsCamera {
        &mut self.camera
    }

    /// The angular integrator.
    #[must_use]
    pub fn angular(&self) -> &FpsAngularIntegrator {
        &self.angular
    }

    /// Mutable angular integrator, for per-axis tuning.
    pub fn angular_mut(&mut self) -> &mut FpsAngularIntegrator {
        &mut self.angular
    }

    /// The linear integrator.
    #[must_use]
    pub fn linear(&self) -> &FpsLinearIntegrator {
        &self.linear
    }

    /// Mutable linear integrator, for per-axis tuning.
    pub fn linear_mut(&mut self) -> &mut FpsLinearIntegrator {
        &mut self.linear
    }
}

/// Orbit camera rig.
///
/// Same contract as [`FpsRig`] for the orbit camera family.
#[derive(Debug)]
pub struct OrbitRig {
    camera: OrbitCamera,
    angular: OrbitAngularIntegrator,
    linear: OrbitLinearIntegrator,
}

impl OrbitRig {
    /// Bind `camera` to pre-built integrators.
    ///
    /// # Errors
    ///
    /// [`KinecamError::CameraMismatch`] if either integrator was built
    /// against a different camera; [`KinecamError::InputMismatch`] if
    /// the integrators drain different [`InputState`]s.
    pub fn new(
        camera: OrbitCamera,
        angular: OrbitAngularIntegrator,
        linear: OrbitLinearIntegrator,
    ) -> Result<Self, KinecamError> {
        if angular.camera_id() != camera.id()
            || linear.camera_id() != camera.id()
        {
            return Err(KinecamError::CameraMismatch);
        }
        if !Arc::ptr_eq(angular.input(), linear.input()) {
            return Err(KinecamError::InputMismatch);
        }
        Ok(Self {
            camera,
            angular,
            linear,
        })
    }

    /// Build a rig with default-tuned integrators around `camera`,
    /// using the zoom-coupled linear variant.
    #[must_use]
    pub fn with_defaults(camera: OrbitCamera, input: Arc<InputState>) -> Self {
        let angular =
            OrbitAngularIntegrator::new(&camera, Arc::clone(&input));
        let linear = OrbitLinearIntegrator::zoom_scaled(&camera, input);
        Self {
            camera,
            angular,
            linear,
        }
    }

    /// Advance one simulation tick: linear (pan/zoom) first, then
    /// angular (orbit).
    pub fn integrate(&mut self, dt: f64) {
        self.linear.integrate(&mut self.camera, dt);
        self.angular.integrate(&mut self.camera, dt);
    }

    /// Capture a snapshot of the camera's readable state.
    #[must_use]
    pub fn snapshot(&self) -> OrbitSnapshot {
        OrbitSnapshot::capture(&self.camera)
    }

    /// The owned camera.
    #[must_use]
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// Mutable camera access (retargeting, clamp configuration).
    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    /// The angular integrator.
    #[must_use]
    pub fn angular(&self) -> &OrbitAngularIntegrator {
        &self.angular
    }

    /// Mutable angular integrator, for per-axis tuning.
    pub fn angular_mut(&mut self) -> &mut OrbitAngularIntegrator {
        &mut self.angular
    }

    /// The linear integrator.
    #[must_use]
    pub fn linear(&self) -> &OrbitLinearIntegrator {
        &self.linear
    }

    /// Mutable linear integrator, for per-axis tuning and scale curves.
    pub fn linear_mut(&mut self) -> &mut OrbitLinearIntegrator {
        &mut self.linear
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;

    #[test]
    fn mismatched_camera_is_rejected() {
        let camera = FpsCamera::new();
        let other = FpsCamera::new();
        let input = Arc::new(InputState::new());
        let angular =
            FpsAngularIntegrator::new(&other, Arc::clone(&input));
        let linear = FpsLinearIntegrator::new(&camera, input);
        assert!(matches!(
            FpsRig::new(camera, angular, linear),
            Err(KinecamError::CameraMismatch)
        ));
    }

    #[test]
    fn mismatched_input_is_rejected() {
        let camera = FpsCamera::new();
        let input_a = Arc::new(InputState::new());
        let input_b = Arc::new(InputState::new());
        let angular = FpsAngularIntegrator::new(&camera, input_a);
        let linear = FpsLinearIntegrator::new(&camera, input_b);
        assert!(matches!(
            FpsRig::new(camera, angular, linear),
            Err(KinecamError::InputMismatch)
        ));
    }

    #[test]
    fn matching_parts_construct() {
        let camera = OrbitCamera::new();
        let input = Arc::new(InputState::new());
        let angular =
            OrbitAngularIntegrator::new(&camera, Arc::clone(&input));
        let linear = OrbitLinearIntegrator::new(&camera, input);
        assert!(OrbitRig::new(camera, angular, linear).is_ok());
    }

    #[test]
    fn translation_uses_pre_rotation_basis() {
        // Hold forward and feed a quarter-turn's worth of rotation in
        // one tick: the translation must follow the basis from before
        // the rotation (straight down −Z), not the rotated one.
        let input = Arc::new(InputState::new());
        let mut rig =
            FpsRig::with_defaults(FpsCamera::new(), Arc::clone(&input));
        rig.linear_mut().forward_mut().set_drag(1.0).unwrap();

        input.set_move_forward(true);
        input.add_rotate_vertical(1.0);
        rig.integrate(1.0);

        let position = rig.camera().position();
        assert!(position.z < 0.0);
        assert!(position.x.abs() < 1e-9);
        // And the rotation did land this same tick (a half turn:
        // impulse 1 at default acceleration π over dt = 1).
        assert!(
            (rig.camera().forward() - DVec3::new(0.0, 0.0, -1.0)).length()
                > 0.5
        );
    }

    #[test]
    fn snapshot_reflects_current_state() {
        let input = Arc::new(InputState::new());
        let mut rig =
            OrbitRig::with_defaults(OrbitCamera::new(), Arc::clone(&input));
        input.set_orbit_heading_positive(true);
        rig.integrate(0.25);
        let snap = rig.snapshot();
        assert_eq!(snap.heading, rig.camera().heading());
        assert_eq!(snap.position, rig.camera().position());
    }
}
