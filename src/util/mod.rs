//! Shared utilities: reporting clamps, radius scaling curves, and the
//! fixed-timestep accumulator.

/// Range clamping with a was-clamped signal.
pub mod clamp;
/// Zoom-dependent scaling curves for orbit panning.
pub mod scale;
/// Fixed-tick simulation time accumulator.
pub mod timestep;
