//! Linear integrators: free-look translation and orbit target pan/zoom.

use std::sync::Arc;

use super::{drive_direction, AxisDrive};
use crate::camera::fps::FpsCamera;
use crate::camera::orbit::OrbitCamera;
use crate::camera::CameraId;
use crate::input::InputState;
use crate::util::scale::RadiusScale;

/// Default translation speed bound (units per second).
pub const DEFAULT_LINEAR_MAX_SPEED: f64 = 3.0;
/// Default translation acceleration.
pub const DEFAULT_LINEAR_ACCELERATION: f64 = 30.0;
/// Default translation drag.
pub const DEFAULT_LINEAR_DRAG: f64 = 0.25;

fn default_axis() -> AxisDrive {
    AxisDrive::new(
        DEFAULT_LINEAR_MAX_SPEED,
        DEFAULT_LINEAR_ACCELERATION,
        DEFAULT_LINEAR_DRAG,
    )
}

/// Translates a free-look camera from held movement flags.
///
/// Forward/right move along the camera's current axes; up moves along
/// world-Y. The three axes integrate independently; the tuning setters
/// on the axis drives keep them independently configurable even though
/// they start from one shared default.
#[derive(Debug)]
pub struct FpsLinearIntegrator {
    camera_id: CameraId,
    input: Arc<InputState>,
    forward: AxisDrive,
    right: AxisDrive,
    up: AxisDrive,
}

impl FpsLinearIntegrator {
    /// Build against `camera`, draining `input`.
    #[must_use]
    pub fn new(camera: &FpsCamera, input: Arc<InputState>) -> Self {
        Self {
            camera_id: camera.id(),
            input,
            forward: default_axis(),
            right: default_axis(),
            up: default_axis(),
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

    /// Forward axis drive.
    #[must_use]
    pub fn forward(&self) -> &AxisDrive {
        &self.forward
    }

    /// Mutable forward axis drive, for tuning.
    pub fn forward_mut(&mut self) -> &mut AxisDrive {
        &mut self.forward
    }

    /// Right axis drive.
    #[must_use]
    pub fn right(&self) -> &AxisDrive {
        &self.right
    }

    /// Mutable right axis drive, for tuning.
    pub fn right_mut(&mut self) -> &mut AxisDrive {
        &mut self.right
    }

    /// Up axis drive.
    #[must_use]
    pub fn up(&self) -> &AxisDrive {
        &self.up
    }

    /// Mutable up axis drive, for tuning.
    pub fn up_mut(&mut self) -> &mut AxisDrive {
        &mut self.up
    }

    /// Advance all three translation axes by `dt` seconds.
    pub fn integrate(&mut self, camera: &mut FpsCamera, dt: f64) {
        debug_assert_eq!(camera.id(), self.camera_id);

        let held = drive_direction(
            self.input.move_forward(),
            self.input.move_backward(),
        );
        let speed = self.forward.advance(held, dt);
        camera.move_forward(speed * dt);
        self.forward.decay(dt);

        let held = drive_direction(
            self.input.move_right(),
            self.input.move_left(),
        );
        let speed = self.right.advance(held, dt);
        camera.move_right(speed * dt);
        self.right.decay(dt);

        let held =
            drive_direction(self.input.move_up(), self.input.move_down());
        let speed = self.up.advance(held, dt);
        camera.move_up(speed * dt);
        self.up.decay(dt);
    }
}

/// Pans an orbit camera's target and integrates its zoom radius.
///
/// The pan axes move the *target point*, not the camera: forward along
/// the orbit-plane projection of the view direction, right along the
/// current right axis, up along world-Y. A fourth axis drives the zoom
/// radius (positive = zoom out).
///
/// Pan response may be coupled to the zoom radius through two
/// [`RadiusScale`] curves: `pan_scale` multiplies pan acceleration and
/// speed bound, `drag_scale` multiplies the drag base. This is the one
/// cross-axis interaction in the integrator family: panning slows as
/// the camera zooms in. [`new`](Self::new) builds the uncoupled
/// integrator (both curves [`RadiusScale::Unit`]);
/// [`zoom_scaled`](Self::zoom_scaled) applies the default coupling
/// (√radius on pan, no drag coupling). The zoom axis itself is never
/// scaled.
#[derive(Debug)]
pub struct OrbitLinearIntegrator {
    camera_id: CameraId,
    input: Arc<InputState>,
    forward: AxisDrive,
    right: AxisDrive,
    up: AxisDrive,
    zoom: AxisDrive,
    pan_scale: RadiusScale,
    drag_scale: RadiusScale,
}

impl OrbitLinearIntegrator {
    /// Uncoupled integrator: pan response independent of zoom.
    #[must_use]
    pub fn new(camera: &OrbitCamera, input: Arc<InputState>) -> Self {
        Self {
            camera_id: camera.id(),
            input,
            forward: default_axis(),
            right: default_axis(),
            up: default_axis(),
            zoom: default_axis(),
            pan_scale: RadiusScale::Unit,
            drag_scale: RadiusScale::Unit,
        }
    }

    /// Zoom-coupled integrator: pan acceleration and bound grow with
    /// √radius, so panning slows as the camera closes in.
    #[must_use]
    pub fn zoom_scaled(camera: &OrbitCamera, input: Arc<InputState>) -> Self {
        Self {
            pan_scale: RadiusScale::DEFAULT_PAN,
            drag_scale: RadiusScale::DEFAULT_DRAG,
            ..Self::new(camera, input)
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

    /// Pan-forward axis drive.
    #[must_use]
    pub fn forward(&self) -> &AxisDrive {
        &self.forward
    }

    /// Mutable pan-forward axis drive, for tuning.
    pub fn forward_mut(&mut self) -> &mut AxisDrive {
        &mut self.forward
    }

    /// Pan-right axis drive.
    #[must_use]
    pub fn right(&self) -> &AxisDrive {
        &self.right
    }

    /// Mutable pan-right axis drive, for tuning.
    pub fn right_mut(&mut self) -> &mut AxisDrive {
        &mut self.right
    }

    /// Pan-up axis drive.
    #[must_use]
    pub fn up(&self) -> &AxisDrive {
        &self.up
    }

    /// Mutable pan-up axis drive, for tuning.
    pub fn up_mut(&mut self) -> &mut AxisDrive {
        &mut self.up
    }

    /// Zoom axis drive.
    #[must_use]
    pub fn zoom(&self) -> &AxisDrive {
        &self.zoom
    }

    /// Mutable zoom axis drive, for tuning.
    pub fn zoom_mut(&mut self) -> &mut AxisDrive {
        &mut self.zoom
    }

    /// Curve scaling pan acceleration and bound by radius.
    #[must_use]
    pub fn pan_scale(&self) -> RadiusScale {
        self.pan_scale
    }

    /// Replace the pan scaling curve.
    pub fn set_pan_scale(&mut self, scale: RadiusScale) {
        self.pan_scale = scale;
    }

    /// Curve scaling the pan drag base by radius.
    #[must_use]
    pub fn drag_scale(&self) -> RadiusScale {
        self.drag_scale
    }

    /// Replace the drag scaling curve.
    pub fn set_drag_scale(&mut self, scale: RadiusScale) {
        self.drag_scale = scale;
    }

    /// Advance the three pan axes and the zoom axis by `dt` seconds.
    ///
    /// Pan scaling samples the radius entering the step; the zoom axis
    /// runs last.
    pub fn integrate(&mut self, camera: &mut OrbitCamera, dt: f64) {
        debug_assert_eq!(camera.id(), self.camera_id);

        let radius = camera.radius();
        let pan = self.pan_scale.evaluate(radius);
        let drag = self.drag_scale.evaluate(radius);

        let held = drive_direction(
            self.input.move_forward(),
            self.input.move_backward(),
        );
        let speed = self.forward.advance_scaled(held, dt, pan);
        camera.move_target_forward(speed * dt);
        self.forward.decay_scaled(dt, drag);

        let held = drive_direction(
            self.input.move_right(),
            self.input.move_left(),
        );
        let speed = self.right.advance_scaled(held, dt, pan);
        camera.move_target_right(speed * dt);
        self.right.decay_scaled(dt, drag);

        let held =
            drive_direction(self.input.move_up(), self.input.move_down());
        let speed = self.up.advance_scaled(held, dt, pan);
        camera.move_target_up(speed * dt);
        self.up.decay_scaled(dt, drag);

        let held =
            drive_direction(self.input.zoom_out(), self.input.zoom_in());
        let speed = self.zoom.advance(held, dt);
        if camera.zoom(speed * dt) {
            self.zoom.halt();
        } else {
            self.zoom.decay(dt);
        }
    }
}
