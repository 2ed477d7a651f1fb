//! Immutable per-tick captures of camera state, and their
//! interpolation for sub-frame rendering.
//!
//! The simulation thread takes a snapshot after each tick; the renderer
//! blends the two most recent ones by the leftover tick fraction (see
//! [`crate::util::timestep`]). Interpolation is a component-wise lerp,
//! deliberately not a slerp: over the small angular step between two
//! consecutive ticks the orthonormality error is negligible, and the
//! blended basis is only ever used for display.

/// Triple-buffered snapshot hand-off to the render thread.
pub mod channel;

use glam::{DMat4, DVec3};

use crate::camera::basis::Basis;
use crate::camera::fps::FpsCamera;
use crate::camera::orbit::OrbitCamera;

/// Component-wise linear interpolation between two values.
pub trait Interpolate {
    /// Blend from `self` (t = 0) toward `other` (t = 1).
    #[must_use]
    fn lerp(&self, other: &Self, t: f64) -> Self;
}

#[inline]
fn lerp_f64(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Frozen copy of everything a renderer can read from a free-look
/// camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FpsSnapshot {
    /// Horizontal (tilt) angle in radians.
    pub horizontal: f64,
    /// Vertical (turn) angle in radians.
    pub vertical: f64,
    /// World-space position.
    pub position: DVec3,
    /// Unit forward vector.
    pub forward: DVec3,
    /// Unit right vector.
    pub right: DVec3,
    /// Unit up vector.
    pub up: DVec3,
}

impl FpsSnapshot {
    /// Capture the camera's readable state by value.
    #[must_use]
    pub fn capture(camera: &FpsCamera) -> Self {
        let basis = camera.basis();
        Self {
            horizontal: camera.horizontal(),
            vertical: camera.vertical(),
            position: camera.position(),
            forward: basis.forward,
            right: basis.right,
            up: basis.up,
        }
    }

    /// View matrix built from the captured basis and position.
    #[must_use]
    pub fn view_matrix(&self) -> DMat4 {
        Basis {
            forward: self.forward,
            right: self.right,
            up: self.up,
        }
        .view_matrix(self.position)
    }
}

impl Interpolate for FpsSnapshot {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            horizontal: lerp_f64(self.horizontal, other.horizontal, t),
            vertical: lerp_f64(self.vertical, other.vertical, t),
            position: self.position.lerp(other.position, t),
            forward: self.forward.lerp(other.forward, t),
            right: self.right.lerp(other.right, t),
            up: self.up.lerp(other.up, t),
        }
    }
}

/// Frozen copy of everything a renderer can read from an orbit camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSnapshot {
    /// Heading angle in radians.
    pub heading: f64,
    /// Incline angle in radians.
    pub incline: f64,
    /// Orbit radius.
    pub radius: f64,
    /// The orbited target point.
    pub target: DVec3,
    /// Derived world-space camera position.
    pub position: DVec3,
    /// Unit forward vector.
    pub forward: DVec3,
    /// Unit right vector.
    pub right: DVec3,
    /// Unit up vector.
    pub up: DVec3,
}

impl OrbitSnapshot {
    /// Capture the camera's readable state by value.
    #[must_use]
    pub fn capture(camera: &OrbitCamera) -> Self {
        let basis = camera.basis();
        Self {
            heading: camera.heading(),
            incline: camera.incline(),
            radius: camera.radius(),
            target: camera.target(),
            position: camera.position(),
            forward: basis.forward,
            right: basis.right,
            up: basis.up,
        }
    }

    /// View matrix built from the captured basis and position.
    #[must_use]
    pub fn view_matrix(&self) -> DMat4 {
        Basis {
            forward: self.forward,
            right: self.right,
            up: self.up,
        }
        .view_matrix(self.position)
    }
}

impl Interpolate for OrbitSnapshot {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            heading: lerp_f64(self.heading, other.heading, t),
            incline: lerp_f64(self.incline, other.incline, t),
            radius: lerp_f64(self.radius, other.radius, t),
            target: self.target.lerp(other.target, t),
            position: self.position.lerp(other.position, t),
            forward: self.forward.lerp(other.forward, t),
            right: self.right.lerp(other.right, t),
            up: self.up.lerp(other.up, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_fps_snapshots() -> (FpsSnapshot, FpsSnapshot) {
        let mut camera = FpsCamera::new();
        let a = FpsSnapshot::capture(&camera);
        let _ = camera.rotate_horizontal(0.2);
        camera.rotate_vertical(-0.3);
        camera.move_forward(1.5);
        let b = FpsSnapshot::capture(&camera);
        (a, b)
    }

    #[test]
    fn captures_of_identical_state_are_equal() {
        let camera = FpsCamera::new();
        assert_eq!(
            FpsSnapshot::capture(&camera),
            FpsSnapshot::capture(&camera)
        );
    }

    #[test]
    fn capture_is_independent_of_later_mutation() {
        let mut camera = FpsCamera::new();
        let snap = FpsSnapshot::capture(&camera);
        camera.move_forward(10.0);
        assert_eq!(snap.position, DVec3::ZERO);
    }

    fn assert_fps_close(a: &FpsSnapshot, b: &FpsSnapshot) {
        assert!((a.horizontal - b.horizontal).abs() < 1e-12);
        assert!((a.vertical - b.vertical).abs() < 1e-12);
        assert!((a.position - b.position).length() < 1e-12);
        assert!((a.forward - b.forward).length() < 1e-12);
        assert!((a.right - b.right).length() < 1e-12);
        assert!((a.up - b.up).length() < 1e-12);
    }

    #[test]
    fn lerp_endpoints_reproduce_inputs() {
        let (a, b) = two_fps_snapshots();
        assert_fps_close(&a.lerp(&b, 0.0), &a);
        assert_fps_close(&a.lerp(&b, 1.0), &b);
    }

    #[test]
    fn lerp_midpoint_averages_every_field() {
        let (a, b) = two_fps_snapshots();
        let mid = a.lerp(&b, 0.5);
        assert!(
            (mid.horizontal - (a.horizontal + b.horizontal) / 2.0).abs()
                < 1e-12
        );
        assert!(
            (mid.position - (a.position + b.position) / 2.0).length()
                < 1e-12
        );
        assert!(
            (mid.forward - (a.forward + b.forward) / 2.0).length() < 1e-12
        );
    }

    #[test]
    fn orbit_lerp_covers_radius_and_target() {
        let mut camera = OrbitCamera::new();
        let a = OrbitSnapshot::capture(&camera);
        let _ = camera.zoom(4.0);
        camera.move_target_right(2.0);
        camera.orbit_heading(0.4);
        let b = OrbitSnapshot::capture(&camera);

        assert_eq!(a.lerp(&b, 0.0), a);
        let end = a.lerp(&b, 1.0);
        assert!((end.radius - b.radius).abs() < 1e-12);
        assert!((end.target - b.target).length() < 1e-12);
        assert!((end.position - b.position).length() < 1e-12);
        assert!((end.forward - b.forward).length() < 1e-12);
        let mid = a.lerp(&b, 0.5);
        assert!((mid.radius - 10.0).abs() < 1e-12);
        assert!((mid.target.x - 1.0).abs() < 1e-12);
    }

    #[test]
    fn snapshot_view_matrix_matches_camera() {
        let mut camera = OrbitCamera::new();
        camera.orbit_heading(0.7);
        let _ = camera.orbit_incline(0.2);
        let snap = OrbitSnapshot::capture(&camera);
        let from_snapshot = snap.view_matrix().to_cols_array();
        let from_camera = camera.view_matrix().to_cols_array();
        for (a, b) in from_snapshot.iter().zip(from_camera.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }
}
