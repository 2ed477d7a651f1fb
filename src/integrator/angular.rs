//! Angular integrators: accumulated-delta driven (free-look) and
//! held-flag driven (orbit).

use std::f64::consts::{PI, TAU};
use std::sync::Arc;

use super::{drive_direction, AxisDrive};
use crate::camera::fps::FpsCamera;
use crate::camera::orbit::OrbitCamera;
use crate::camera::CameraId;
use crate::input::InputState;

/// Default rotation speed bound (radians per second): one full turn.
pub const DEFAULT_ANGULAR_MAX_SPEED: f64 = TAU;
/// Default rotation acceleration: half the speed bound.
pub const DEFAULT_ANGULAR_ACCELERATION: f64 = PI;
/// Default rotation drag: aggressive decay for a crisp stop.
pub const DEFAULT_ANGULAR_DRAG: f64 = 0.05;

fn default_axis() -> AxisDrive {
    AxisDrive::new(
        DEFAULT_ANGULAR_MAX_SPEED,
        DEFAULT_ANGULAR_ACCELERATION,
        DEFAULT_ANGULAR_DRAG,
    )
}

/// Rotates a free-look camera from accumulated input deltas.
///
/// Each step drains the input's horizontal and vertical rotation
/// accumulators. The horizontal axis may be clamped *by the camera*
/// (head tilt limits); a clamped step zeroes the horizontal speed so
/// reversing direction responds immediately instead of having to burn
/// off speed pressed into the limit. The vertical axis is never
/// clamped and always decays through drag. That asymmetry models tilt
/// limits without turn limits and is deliberate.
#[derive(Debug)]
pub struct FpsAngularIntegrator {
    camera_id: CameraId,
    input: Arc<InputState>,
    horizontal: AxisDrive,
    vertical: AxisDrive,
}

impl FpsAngularIntegrator {
    /// Build against `camera`, draining `input`.
    #[must_use]
    pub fn new(camera: &FpsCamera, input: Arc<InputState>) -> Self {
        Self {
            camera_id: camera.id(),
            input,
            horizontal: default_axis(),
            vertical: default_axis(),
        }
    }

    /// Id of the camera this integrator was built against.
    #[must_use]
    pub fn camera_id(&self) -> CameraId {
        self.camera_id
    }

    /// The input this integrator drains.
    #[must_use]
    pub fn input(&self) -> &Arc<InputState> {
        &self.input
    }

    /// Horizontal (tilt) axis drive.
    #[must_use]
    pub fn horizontal(&self) -> &AxisDrive {
        &self.horizontal
    }

    /// Mutable horizontal axis drive, for tuning.
    pub fn horizontal_mut(&mut self) -> &mut AxisDrive {
        &mut self.horizontal
    }

    /// Vertical (turn) axis drive.
    #[must_use]
    pub fn vertical(&self) -> &AxisDrive {
        &self.vertical
    }

    /// Mutable vertical axis drive, for tuning.
    pub fn vertical_mut(&mut self) -> &mut AxisDrive {
        &mut self.vertical
    }

    /// Advance both rotation axes by `dt` seconds.
    pub fn integrate(&mut self, camera: &mut FpsCamera, dt: f64) {
        debug_assert_eq!(camera.id(), self.camera_id);

        let impulse = self.input.take_rotate_horizontal();
        let speed = self.horizontal.advance(impulse, dt);
        if camera.rotate_horizontal(speed * dt) {
            self.horizontal.halt();
        } else {
            self.horizontal.decay(dt);
        }

        let impulse = self.input.take_rotate_vertical();
        let speed = self.vertical.advance(impulse, dt);
        camera.rotate_vertical(speed * dt);
        self.vertical.decay(dt);
    }
}

/// Orbits a camera around its target from held flags.
///
/// Speed accumulates while an orbit flag is held and decays through
/// drag once released. Heading is never clamped by the camera; incline
/// may be, and a clamped incline step zeroes the incline speed exactly
/// as the free-look horizontal axis does.
#[derive(Debug)]
pub struct OrbitAngularIntegrator {
    camera_id: CameraId,
    input: Arc<InputState>,
    heading: AxisDrive,
    incline: AxisDrive,
}

impl OrbitAngularIntegrator {
    /// Build against `camera`, draining `input`.
    #[must_use]
    pub fn new(camera: &OrbitCamera, input: Arc<InputState>) -> Self {
        Self {
            camera_id: camera.id(),
            input,
            heading: default_axis(),
            incline: default_axis(),
        }
    }

    /// Id of the camera this integrator was built against.
    #[must_use]
    pub fn camera_id(&self) -> CameraId {
        self.camera_id
    }

    /// The input this integrator drains.
    #[must_use]
    pub fn input(&self) -> &Arc<InputState> {
        &self.input
    }

    /// Heading axis drive.
    #[must_use]
    pub fn heading(&self) -> &AxisDrive {
        &self.heading
    }

    /// Mutable heading axis drive, for tuning.
    pub fn heading_mut(&mut self) -> &mut AxisDrive {
        &mut self.heading
    }

    /// Incline axis drive.
    #[must_use]
    pub fn incline(&self) -> &AxisDrive {
        &self.incline
    }

    /// Mutable incline axis drive, for tuning.
    pub fn incline_mut(&mut self) -> &mut AxisDrive {
        &mut self.incline
    }

    /// Advance both orbit axes by `dt` seconds.
    pub fn integrate(&mut self, camera: &mut OrbitCamera, dt: f64) {
        debug_assert_eq!(camera.id(), self.camera_id);

        let held = drive_direction(
            self.input.orbit_heading_positive(),
            self.input.orbit_heading_negative(),
        );
        let speed = self.heading.advance(held, dt);
        camera.orbit_heading(speed * dt);
        self.heading.decay(dt);

        let held = drive_direction(
            self.input.orbit_incline_positive(),
            self.input.orbit_incline_negative(),
        );
        let speed = self.incline.advance(held, dt);
        if camera.orbit_incline(speed * dt) {
            self.incline.halt();
        } else {
            self.incline.decay(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use glam::DVec3;

    use super::*;
    use crate::camera::ANGLE_LIMIT;

    const EPSILON: f64 = 1e-9;

    fn fps_pair() -> (FpsCamera, FpsAngularIntegrator, Arc<InputState>) {
        let camera = FpsCamera::new();
        let input = Arc::new(InputState::new());
        let integrator =
            FpsAngularIntegrator::new(&camera, Arc::clone(&input));
        (camera, integrator, input)
    }

    #[test]
    fn impulse_with_zero_drag_rotates_exactly_once() {
        // acceleration = max_speed = π/2, drag = 0, unit impulse,
        // dt = 1: the step reaches the bound, rotates a quarter turn,
        // and drag brings the axis to rest.
        let (mut camera, mut integrator, input) = fps_pair();
        integrator.vertical_mut().set_max_speed(FRAC_PI_2).unwrap();
        integrator.vertical_mut().set_acceleration(FRAC_PI_2).unwrap();
        integrator.vertical_mut().set_drag(0.0).unwrap();

        input.add_rotate_vertical(1.0);
        integrator.integrate(&mut camera, 1.0);

        assert!((camera.forward() - DVec3::new(-1.0, 0.0, 0.0)).length()
            < EPSILON);
        assert_eq!(integrator.vertical().speed(), 0.0);

        // No further input, no residual speed: the camera stays put.
        integrator.integrate(&mut camera, 1.0);
        assert!((camera.forward() - DVec3::new(-1.0, 0.0, 0.0)).length()
            < EPSILON);
    }

    #[test]
    fn clamped_horizontal_step_zeroes_speed_without_overshoot() {
        let (mut camera, mut integrator, input) = fps_pair();

        // Drive hard into the tilt limit twice; the forward vector must
        // sit at the boundary both times.
        input.add_rotate_horizontal(100.0);
        integrator.integrate(&mut camera, 1.0);
        assert!((camera.horizontal() - ANGLE_LIMIT).abs() < EPSILON);
        assert_eq!(integrator.horizontal().speed(), 0.0);
        let at_limit = camera.forward();

        input.add_rotate_horizontal(100.0);
        integrator.integrate(&mut camera, 1.0);
        assert!((camera.forward() - at_limit).length() < EPSILON);
        assert_eq!(integrator.horizontal().speed(), 0.0);

        // Because the speed was zeroed, reversing acts immediately.
        input.add_rotate_horizontal(-0.1);
        integrator.integrate(&mut camera, 1.0);
        assert!(camera.horizontal() < ANGLE_LIMIT);
    }

    #[test]
    fn vertical_axis_never_clamps() {
        let (mut camera, mut integrator, input) = fps_pair();
        for _ in 0..10 {
            input.add_rotate_vertical(10.0);
            integrator.integrate(&mut camera, 1.0);
        }
        // Many turns accumulated; the angle is unbounded.
        assert!(camera.vertical() > TAU);
    }

    #[test]
    fn drained_input_does_not_reapply() {
        let (mut camera, mut integrator, input) = fps_pair();
        input.add_rotate_vertical(1.0);
        integrator.integrate(&mut camera, 0.1);
        let after_first = camera.vertical();
        // Second step: accumulator empty, only residual speed remains,
        // which drag shrinks, so the step must be smaller.
        let first_step = after_first - FRAC_PI_2;
        integrator.integrate(&mut camera, 0.1);
        let second_step = camera.vertical() - after_first;
        assert!(second_step < first_step);
    }

    #[test]
    fn held_heading_flag_accelerates_then_drag_settles() {
        let mut camera = OrbitCamera::new();
        let input = Arc::new(InputState::new());
        let mut integrator =
            OrbitAngularIntegrator::new(&camera, Arc::clone(&input));

        input.set_orbit_heading_positive(true);
        integrator.integrate(&mut camera, 0.1);
        let speed_held = integrator.heading().speed();
        assert!(speed_held > 0.0);
        assert!(camera.heading() > FRAC_PI_2);

        input.set_orbit_heading_positive(false);
        integrator.integrate(&mut camera, 0.1);
        assert!(integrator.heading().speed() < speed_held);
    }

    #[test]
    fn incline_clamp_zeroes_incline_speed() {
        let mut camera = OrbitCamera::new();
        let input = Arc::new(InputState::new());
        let mut integrator =
            OrbitAngularIntegrator::new(&camera, Arc::clone(&input));

        input.set_orbit_incline_positive(true);
        for _ in 0..200 {
            integrator.integrate(&mut camera, 0.1);
        }
        assert!((camera.incline() - ANGLE_LIMIT).abs() < EPSILON);
        assert_eq!(integrator.incline().speed(), 0.0);
    }

    #[test]
    fn opposing_flags_cancel() {
        let mut camera = OrbitCamera::new();
        let input = Arc::new(InputState::new());
        let mut integrator =
            OrbitAngularIntegrator::new(&camera, Arc::clone(&input));

        input.set_orbit_heading_positive(true);
        input.set_orbit_heading_negative(true);
        integrator.integrate(&mut camera, 1.0);
        assert_eq!(integrator.heading().speed(), 0.0);
        assert!((camera.heading() - FRAC_PI_2).abs() < EPSILON);
    }
}
