//! Real-time camera kinematics core for interactive 3D applications.
//!
//! Kinecam maintains camera orientation/position state and advances it
//! smoothly under continuous player input using a drag-damped,
//! acceleration-limited velocity model, producing immutable per-tick
//! snapshots for a renderer to consume. Two camera styles are
//! supported: a free-look first-person camera and an orbit camera that
//! circles a movable target point.
//!
//! # Key entry points
//!
//! - [`integrator::FpsRig`] / [`integrator::OrbitRig`] - a camera plus
//!   its angular and linear integrators, advanced once per tick
//! - [`input::InputState`] - thread-safe control-signal accumulator fed
//!   by the platform's event listeners
//! - [`snapshot`] - immutable captures with sub-frame interpolation and
//!   a lock-free channel to the render thread
//! - [`options::Options`] - TOML tuning presets for all integrator
//!   parameters
//!
//! # Architecture
//!
//! Event listeners write into an `Arc<InputState>` (independent atomic
//! fields, no locks). A simulation thread owns the rig and calls
//! `integrate(dt)` at a fixed tick driven by
//! [`util::timestep::FixedTimestep`]; each tick drains the input,
//! advances per-axis velocities through acceleration, speed clamps and
//! drag, and mutates the camera. After each tick the rig's snapshot is
//! pushed into a [`snapshot::channel`], where the render thread blends
//! the two most recent snapshots by the leftover tick fraction.
//!
//! Windowing, rendering, and projection math live outside this crate;
//! the camera's read contract is position, the forward/right/up basis,
//! and a view matrix.

/// Camera state: free-look and orbit styles plus basis derivation.
pub mod camera;
/// Crate-wide error type.
pub mod error;
/// Thread-safe input accumulation and screen-region mapping.
pub mod input;
/// Velocity integrators and camera rigs.
pub mod integrator;
/// TOML tuning presets.
pub mod options;
/// Immutable camera snapshots, interpolation, and render hand-off.
pub mod snapshot;
/// Clamping, scaling curves, and fixed-timestep utilities.
pub mod util;
