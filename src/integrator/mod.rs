//! Velocity integrators: the machinery that turns held keys and mouse
//! deltas into smooth camera motion.
//!
//! Every integrator follows the same per-axis step, once per simulation
//! tick: fold the input into the axis speed through a configured
//! acceleration, clamp the speed to its bound, apply `speed · dt` to
//! the camera, then either zero the speed (if the *camera* clamped the
//! resulting angle, a separate clamp from the speed bound) or decay it
//! by `drag^dt`.
//!
//! Angular integrators come in two flavors: the free-look one drains
//! accumulated rotation deltas, the orbit one accelerates while a
//! discrete flag is held. Linear integrators translate the free-look
//! camera or the orbit camera's target point; the orbit variant also
//! integrates a zoom axis and can couple pan response to the current
//! zoom radius.

/// Angular (rotation) integrators for both camera styles.
pub mod angular;
/// Linear (translation/zoom) integrators for both camera styles.
pub mod linear;
/// Aggregates binding one angular and one linear integrator to a camera.
pub mod rig;

pub use angular::{FpsAngularIntegrator, OrbitAngularIntegrator};
pub use linear::{FpsLinearIntegrator, OrbitLinearIntegrator};
pub use rig::{FpsRig, OrbitRig};

use crate::error::KinecamError;
use crate::util::clamp::clamp;

/// Velocity state and tuning for one drive axis.
///
/// Speed is bounded by `max_speed`, driven by `acceleration`, and
/// decays by `drag^dt` each step. Tuning setters validate their
/// preconditions and reject out-of-range values instead of clamping
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisDrive {
    speed: f64,
    max_speed: f64,
    acceleration: f64,
    drag: f64,
}

impl AxisDrive {
    /// Axis at rest with the given tuning. Crate-internal: the
    /// integrator constructors only pass known-good defaults.
    pub(crate) fn new(max_speed: f64, acceleration: f64, drag: f64) -> Self {
        Self {
            speed: 0.0,
            max_speed,
            acceleration,
            drag,
        }
    }

    /// Current speed (units per second).
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Speed bound (absolute value).
    #[must_use]
    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    /// Acceleration applied per unit of input.
    #[must_use]
    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }

    /// Per-second speed retention factor (1 = no decay, 0 = full stop).
    #[must_use]
    pub fn drag(&self) -> f64 {
        self.drag
    }

    /// Set the speed bound.
    ///
    /// # Errors
    ///
    /// Returns [`KinecamError::MaxSpeedOutOfRange`] if `max_speed < 0`.
    pub fn set_max_speed(&mut self, max_speed: f64) -> Result<(), KinecamError> {
        if max_speed < 0.0 || max_speed.is_nan() {
            return Err(KinecamError::MaxSpeedOutOfRange(max_speed));
        }
        self.max_speed = max_speed;
        Ok(())
    }

    /// Set the acceleration.
    ///
    /// # Errors
    ///
    /// Returns [`KinecamError::AccelerationOutOfRange`] unless
    /// `acceleration > 0`.
    pub fn set_acceleration(
        &mut self,
        acceleration: f64,
    ) -> Result<(), KinecamError> {
        if acceleration <= 0.0 || acceleration.is_nan() {
            return Err(KinecamError::AccelerationOutOfRange(acceleration));
        }
        self.acceleration = acceleration;
        Ok(())
    }

    /// Set the drag factor.
    ///
    /// # Errors
    ///
    /// Returns [`KinecamError::DragOutOfRange`] unless `drag` lies in
    /// [0, 1].
    pub fn set_drag(&mut self, drag: f64) -> Result<(), KinecamError> {
        if !(0.0..=1.0).contains(&drag) {
            return Err(KinecamError::DragOutOfRange(drag));
        }
        self.drag = drag;
        Ok(())
    }

    /// Fold `input · acceleration · dt` into the speed, clamp to the
    /// bound, and return the speed to apply this step.
    pub(crate) fn advance(&mut self, input: f64, dt: f64) -> f64 {
        self.advance_scaled(input, dt, 1.0)
    }

    /// [`advance`](Self::advance) with acceleration and bound both
    /// multiplied by `scale` (zoom-coupled pan axes).
    pub(crate) fn advance_scaled(
        &mut self,
        input: f64,
        dt: f64,
        scale: f64,
    ) -> f64 {
        let accelerated =
            self.speed + input * self.acceleration * scale * dt;
        let bound = self.max_speed * scale;
        let (speed, _) = clamp(accelerated, -bound, bound);
        self.speed = speed;
        speed
    }

    /// Decay the speed by `drag^dt`.
    pub(crate) fn decay(&mut self, dt: f64) {
        self.decay_scaled(dt, 1.0);
    }

    /// [`decay`](Self::decay) with the drag base multiplied by `scale`
    /// before exponentiation.
    pub(crate) fn decay_scaled(&mut self, dt: f64, scale: f64) {
        self.speed *= (self.drag * scale).powf(dt);
    }

    /// Force the axis to rest. Called when the camera clamped a step.
    pub(crate) fn halt(&mut self) {
        self.speed = 0.0;
    }
}

/// Signed drive for a pair of held flags: +1, −1, or 0.
pub(crate) fn drive_direction(positive: bool, negative: bool) -> f64 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_accumulates_and_clamps() {
        let mut axis = AxisDrive::new(1.0, 10.0, 1.0);
        assert_eq!(axis.advance(1.0, 0.05), 0.5);
        // 0.5 + 10·0.1 = 1.5, clamped to the bound.
        assert_eq!(axis.advance(1.0, 0.1), 1.0);
        assert_eq!(axis.advance(-1.0, 0.05), 0.5);
    }

    #[test]
    fn decay_retains_drag_fraction_per_second() {
        let mut axis = AxisDrive::new(10.0, 1.0, 0.25);
        let _ = axis.advance(1.0, 1.0);
        axis.decay(1.0);
        assert!((axis.speed() - 0.25).abs() < 1e-12);
        axis.decay(1.0);
        assert!((axis.speed() - 0.0625).abs() < 1e-12);
    }

    #[test]
    fn zero_drag_stops_after_one_step() {
        let mut axis = AxisDrive::new(10.0, 1.0, 0.0);
        let _ = axis.advance(1.0, 1.0);
        axis.decay(1.0);
        assert_eq!(axis.speed(), 0.0);
    }

    #[test]
    fn unit_drag_never_decays() {
        let mut axis = AxisDrive::new(10.0, 1.0, 1.0);
        let _ = axis.advance(1.0, 1.0);
        axis.decay(100.0);
        assert_eq!(axis.speed(), 1.0);
    }

    #[test]
    fn halt_zeroes_speed() {
        let mut axis = AxisDrive::new(10.0, 1.0, 1.0);
        let _ = axis.advance(1.0, 1.0);
        axis.halt();
        assert_eq!(axis.speed(), 0.0);
    }

    #[test]
    fn scaled_advance_widens_the_bound() {
        let mut plain = AxisDrive::new(1.0, 10.0, 1.0);
        let mut scaled = plain.clone();
        let _ = plain.advance(1.0, 10.0);
        let _ = scaled.advance_scaled(1.0, 10.0, 4.0);
        assert_eq!(plain.speed(), 1.0);
        assert_eq!(scaled.speed(), 4.0);
    }

    #[test]
    fn setters_validate_preconditions() {
        let mut axis = AxisDrive::new(1.0, 1.0, 0.5);
        assert!(axis.set_drag(1.5).is_err());
        assert!(axis.set_drag(-0.1).is_err());
        assert!(axis.set_drag(f64::NAN).is_err());
        assert!(axis.set_acceleration(0.0).is_err());
        assert!(axis.set_acceleration(-3.0).is_err());
        assert!(axis.set_max_speed(-1.0).is_err());
        assert!(axis.set_max_speed(f64::NAN).is_err());
        // Rejected values leave the tuning untouched.
        assert_eq!(axis.drag(), 0.5);
        assert_eq!(axis.acceleration(), 1.0);
        assert_eq!(axis.max_speed(), 1.0);
        assert!(axis.set_drag(0.0).is_ok());
        assert!(axis.set_max_speed(0.0).is_ok());
    }

    #[test]
    fn drive_direction_resolves_flag_pairs() {
        assert_eq!(drive_direction(true, false), 1.0);
        assert_eq!(drive_direction(false, true), -1.0);
        assert_eq!(drive_direction(false, false), 0.0);
        assert_eq!(drive_direction(true, true), 0.0);
    }
}
