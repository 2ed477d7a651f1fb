//! Camera state for the two supported styles.
//!
//! [`fps::FpsCamera`] is a free-look camera: two rotation angles plus a
//! world-space position, translated along its own axes. The orbit camera
//! [`orbit::OrbitCamera`] circles a movable target point at a zoomable
//! radius; its position is derived, never stored.
//!
//! Both cameras keep their derived [`basis::Basis`] behind a dirty flag:
//! angle mutators invalidate it and the next reader recomputes. Readers
//! never observe a stale basis.

/// Pure angle-to-basis derivation and view matrices.
pub mod basis;
/// Free-look camera state.
pub mod fps;
/// Orbiting camera state.
pub mod orbit;

use std::f64::consts::FRAC_PI_2;
use std::sync::atomic::{AtomicU64, Ordering};

/// Default limit for clampable rotation axes: just shy of straight up
/// and straight down, so the derived basis never degenerates.
pub const ANGLE_LIMIT: f64 = 31.0 / 32.0 * FRAC_PI_2;

/// Opaque identity of a camera instance.
///
/// Integrators record the id of the camera they were built against and
/// the rig validates at construction that all of its parts agree.
/// Identity, not equality: two cameras with identical state still have
/// distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CameraId(u64);

impl CameraId {
    /// Draw the next id from a process-wide counter.
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}
