//! Shared control-signal accumulator.
//!
//! [`InputState`] sits between the platform's event thread (writer) and
//! the simulation thread (reader). Every field is an independent
//! word-size atomic: there are no compound invariants across fields, so
//! relaxed ordering and torn reads *across* fields are acceptable;
//! each integrator step reads or drains one field at a time.
//!
//! Discrete controls are plain booleans ("held" flags). Continuous
//! rotation input accumulates into a delta that the angular integrator
//! drains once per step: `add_*` is a lock-free fetch-add, `take_*` is
//! an exchange-with-zero returning the accumulated value scaled by the
//! configurable rotation scale. Non-finite deltas are not validated and
//! propagate into the accumulated value.

/// Screen-region to rotation-coefficient mapping.
pub mod region;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// `f64` bit-cast into an atomic word.
///
/// Accumulate-then-drain cell for continuous input. All operations are
/// relaxed; the value is self-contained.
#[derive(Debug)]
struct AtomicF64 {
    bits: AtomicU64,
}

impl AtomicF64 {
    fn new(value: f64) -> Self {
        Self {
            bits: AtomicU64::new(value.to_bits()),
        }
    }

    fn load(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }

    fn store(&self, value: f64) {
        self.bits.store(value.to_bits(), Ordering::Relaxed);
    }

    /// Lock-free fetch-add.
    fn add(&self, delta: f64) {
        let mut current = self.bits.load(Ordering::Relaxed);
        loop {
            let next = (f64::from_bits(current) + delta).to_bits();
            match self.bits.compare_exchange_weak(
                current,
                next,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(actual) => current = actual,
            }
        }
    }

    /// Exchange-with-zero drain.
    fn take(&self) -> f64 {
        f64::from_bits(self.bits.swap(0, Ordering::Relaxed))
    }
}

/// Accumulated control signals for one camera.
///
/// Share it as `Arc<InputState>` between the event listeners and the
/// integrators; each camera/input pair is fully independent.
#[derive(Debug)]
pub struct InputState {
    // Free-look / target translation
    move_forward: AtomicBool,
    move_backward: AtomicBool,
    move_left: AtomicBool,
    move_right: AtomicBool,
    move_up: AtomicBool,
    move_down: AtomicBool,

    // Orbit and zoom
    orbit_heading_positive: AtomicBool,
    orbit_heading_negative: AtomicBool,
    orbit_incline_positive: AtomicBool,
    orbit_incline_negative: AtomicBool,
    zoom_in: AtomicBool,
    zoom_out: AtomicBool,

    // Continuous rotation
    rotate_horizontal: AtomicF64,
    rotate_vertical: AtomicF64,
    rotation_scale: AtomicF64,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    /// All controls released, rotation scale 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            move_forward: AtomicBool::new(false),
            move_backward: AtomicBool::new(false),
            move_left: AtomicBool::new(false),
            move_right: AtomicBool::new(false),
            move_up: AtomicBool::new(false),
            move_down: AtomicBool::new(false),
            orbit_heading_positive: AtomicBool::new(false),
            orbit_heading_negative: AtomicBool::new(false),
            orbit_incline_positive: AtomicBool::new(false),
            orbit_incline_negative: AtomicBool::new(false),
            zoom_in: AtomicBool::new(false),
            zoom_out: AtomicBool::new(false),
            rotate_horizontal: AtomicF64::new(0.0),
            rotate_vertical: AtomicF64::new(0.0),
            rotation_scale: AtomicF64::new(1.0),
        }
    }

    // ── Movement flags ──────────────────────────────────────────────────

    /// Whether the forward control is held.
    #[must_use]
    pub fn move_forward(&self) -> bool {
        self.move_forward.load(Ordering::Relaxed)
    }

    /// Press or release the forward control.
    pub fn set_move_forward(&self, held: bool) {
        self.move_forward.store(held, Ordering::Relaxed);
    }

    /// Whether the backward control is held.
    #[must_use]
    pub fn move_backward(&self) -> bool {
        self.move_backward.load(Ordering::Relaxed)
    }

    /// Press or release the backward control.
    pub fn set_move_backward(&self, held: bool) {
        self.move_backward.store(held, Ordering::Relaxed);
    }

    /// Whether the strafe-left control is held.
    #[must_use]
    pub fn move_left(&self) -> bool {
        self.move_left.load(Ordering::Relaxed)
    }

    /// Press or release the strafe-left control.
    pub fn set_move_left(&self, held: bool) {
        self.move_left.store(held, Ordering::Relaxed);
    }

    /// Whether the strafe-right control is held.
    #[must_use]
    pub fn move_right(&self) -> bool {
        self.move_right.load(Ordering::Relaxed)
    }

    /// Press or release the strafe-right control.
    pub fn set_move_right(&self, held: bool) {
        self.move_right.store(held, Ordering::Relaxed);
    }

    /// Whether the rise control is held.
    #[must_use]
    pub fn move_up(&self) -> bool {
        self.move_up.load(Ordering::Relaxed)
    }

    /// Press or release the rise control.
    pub fn set_move_up(&self, held: bool) {
        self.move_up.store(held, Ordering::Relaxed);
    }

    /// Whether the sink control is held.
    #[must_use]
    pub fn move_down(&self) -> bool {
        self.move_down.load(Ordering::Relaxed)
    }

    /// Press or release the sink control.
    pub fn set_move_down(&self, held: bool) {
        self.move_down.store(held, Ordering::Relaxed);
    }

    // ── Orbit and zoom flags ────────────────────────────────────────────

    /// Whether positive heading orbit is held.
    #[must_use]
    pub fn orbit_heading_positive(&self) -> bool {
        self.orbit_heading_positive.load(Ordering::Relaxed)
    }

    /// Press or release positive heading orbit.
    pub fn set_orbit_heading_positive(&self, held: bool) {
        self.orbit_heading_positive.store(held, Ordering::Relaxed);
    }

    /// Whether negative heading orbit is held.
    #[must_use]
    pub fn orbit_heading_negative(&self) -> bool {
        self.orbit_heading_negative.load(Ordering::Relaxed)
    }

    /// Press or release negative heading orbit.
    pub fn set_orbit_heading_negative(&self, held: bool) {
        self.orbit_heading_negative.store(held, Ordering::Relaxed);
    }

    /// Whether positive incline orbit is held.
    #[must_use]
    pub fn orbit_incline_positive(&self) -> bool {
        self.orbit_incline_positive.load(Ordering::Relaxed)
    }

    /// Press or release positive incline orbit.
    pub fn set_orbit_incline_positive(&self, held: bool) {
        self.orbit_incline_positive.store(held, Ordering::Relaxed);
    }

    /// Whether negative incline orbit is held.
    #[must_use]
    pub fn orbit_incline_negative(&self) -> bool {
        self.orbit_incline_negative.load(Ordering::Relaxed)
    }

    /// Press or release negative incline orbit.
    pub fn set_orbit_incline_negative(&self, held: bool) {
        self.orbit_incline_negative.store(held, Ordering::Relaxed);
    }

    /// Whether the zoom-in control is held.
    #[must_use]
    pub fn zoom_in(&self) -> bool {
        self.zoom_in.load(Ordering::Relaxed)
    }

    /// Press or release the zoom-in control.
    pub fn set_zoom_in(&self, held: bool) {
        self.zoom_in.store(held, Ordering::Relaxed);
    }

    /// Whether the zoom-out control is held.
    #[must_use]
    pub fn zoom_out(&self) -> bool {
        self.zoom_out.load(Ordering::Relaxed)
    }

    /// Press or release the zoom-out control.
    pub fn set_zoom_out(&self, held: bool) {
        self.zoom_out.store(held, Ordering::Relaxed);
    }

    // ── Continuous rotation ─────────────────────────────────────────────

    /// Accumulate a horizontal rotation delta (mouse Y, typically).
    pub fn add_rotate_horizontal(&self, delta: f64) {
        self.rotate_horizontal.add(delta);
    }

    /// Drain the accumulated horizontal rotation, scaled by the
    /// rotation scale. Resets the accumulator to zero.
    #[must_use]
    pub fn take_rotate_horizontal(&self) -> f64 {
        self.rotate_horizontal.take() * self.rotation_scale.load()
    }

    /// Accumulate a vertical rotation delta (mouse X, typically).
    pub fn add_rotate_vertical(&self, delta: f64) {
        self.rotate_vertical.add(delta);
    }

    /// Drain the accumulated vertical rotation, scaled by the rotation
    /// scale. Resets the accumulator to zero.
    #[must_use]
    pub fn take_rotate_vertical(&self) -> f64 {
        self.rotate_vertical.take() * self.rotation_scale.load()
    }

    /// Multiplier applied when draining rotation deltas.
    #[must_use]
    pub fn rotation_scale(&self) -> f64 {
        self.rotation_scale.load()
    }

    /// Set the multiplier applied when draining rotation deltas.
    pub fn set_rotation_scale(&self, scale: f64) {
        self.rotation_scale.store(scale);
    }
}
