//! Fixed-timestep accumulator decoupling simulation rate from render rate.
//!
//! The simulation thread runs integration at a fixed tick (typically
//! 60 Hz) while frames render at whatever rate the display manages.
//! [`FixedTimestep`] accumulates real elapsed time and converts it into
//! whole simulation steps plus a leftover blend fraction used to
//! interpolate between the two most recent snapshots.

use std::num::NonZeroU32;

use web_time::{Duration, Instant};

/// Upper bound on catch-up steps per frame. A long stall (debugger,
/// suspend) would otherwise demand thousands of steps at once.
const MAX_CATCHUP_STEPS: u32 = 8;

/// Result of advancing the accumulator: how many whole simulation steps
/// to run and the sub-step blend fraction left over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ticks {
    /// Whole simulation steps to integrate this frame.
    pub steps: u32,
    /// Fraction of a step accumulated beyond `steps`, in [0, 1).
    /// Feed this to snapshot interpolation.
    pub alpha: f64,
}

/// Fixed-tick time accumulator.
#[derive(Debug)]
pub struct FixedTimestep {
    tick: Duration,
    accumulator: Duration,
    last: Instant,
}

impl FixedTimestep {
    /// Create an accumulator with the given tick duration.
    ///
    /// A zero tick never yields steps.
    #[must_use]
    pub fn new(tick: Duration) -> Self {
        Self {
            tick,
            accumulator: Duration::ZERO,
            last: Instant::now(),
        }
    }

    /// Create an accumulator running at `hz` simulation steps per second.
    #[must_use]
    pub fn from_hz(hz: NonZeroU32) -> Self {
        Self::new(Duration::from_secs_f64(1.0 / f64::from(hz.get())))
    }

    /// Tick duration in seconds: the `dt` to pass to `integrate`.
    #[must_use]
    pub fn tick_seconds(&self) -> f64 {
        self.tick.as_secs_f64()
    }

    /// Sample the wall clock and convert the elapsed time into steps.
    pub fn advance(&mut self) -> Ticks {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        self.advance_by(elapsed)
    }

    /// Advance by an explicit elapsed duration.
    ///
    /// Deterministic entry point for tests and for callers that sample
    /// time themselves.
    pub fn advance_by(&mut self, elapsed: Duration) -> Ticks {
        if self.tick.is_zero() {
            return Ticks {
                steps: 0,
                alpha: 0.0,
            };
        }

        self.accumulator += elapsed;
        let mut steps =
            (self.accumulator.as_nanos() / self.tick.as_nanos()) as u32;
        self.accumulator -= self.tick * steps;

        if steps > MAX_CATCHUP_STEPS {
            log::warn!(
                "simulation fell behind: dropping {} of {steps} steps",
                steps - MAX_CATCHUP_STEPS
            );
            steps = MAX_CATCHUP_STEPS;
        }

        Ticks {
            steps,
            alpha: self.accumulator.as_secs_f64() / self.tick.as_secs_f64(),
        }
    }
}
