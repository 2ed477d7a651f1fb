//! Lock-free snapshot hand-off from the simulation thread to the
//! render thread.
//!
//! The simulation thread keeps a [`FramePair`] of the two most recent
//! snapshots and publishes it after every tick; the render thread reads
//! the latest pair whenever it draws and blends by the leftover tick
//! fraction. Triple buffering means neither side ever blocks and the
//! reader always sees a complete pair.

use triple_buffer::{triple_buffer, Input, Output};

use super::Interpolate;

/// The two most recent snapshots of one camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePair<S> {
    /// Snapshot from the previous simulation tick.
    pub previous: S,
    /// Snapshot from the most recent simulation tick.
    pub current: S,
}

impl<S: Clone> FramePair<S> {
    /// A pair holding the same snapshot twice, as things stand before
    /// the first tick has run.
    #[must_use]
    pub fn repeated(snapshot: S) -> Self {
        Self {
            previous: snapshot.clone(),
            current: snapshot,
        }
    }

    /// Shift in the snapshot from a fresh tick: current becomes
    /// previous.
    pub fn push(&mut self, next: S) {
        self.previous = std::mem::replace(&mut self.current, next);
    }
}

impl<S: Interpolate> FramePair<S> {
    /// Blend between the pair by the leftover tick fraction
    /// (0 = previous tick, 1 = current tick).
    #[must_use]
    pub fn blend(&self, alpha: f64) -> S {
        self.previous.lerp(&self.current, alpha)
    }
}

/// Simulation-side handle: publishes the latest pair.
pub struct SnapshotPublisher<S: Clone + Send> {
    input: Input<FramePair<S>>,
}

impl<S: Clone + Send> SnapshotPublisher<S> {
    /// Publish a pair, replacing whatever the consumer has not yet
    /// read. Never blocks.
    pub fn publish(&mut self, pair: FramePair<S>) {
        self.input.write(pair);
    }
}

/// Render-side handle: reads the most recently published pair.
pub struct SnapshotConsumer<S: Clone + Send> {
    output: Output<FramePair<S>>,
}

impl<S: Clone + Send> SnapshotConsumer<S> {
    /// The most recently published pair. Never blocks; returns the
    /// last seen pair if nothing new was published.
    pub fn latest(&mut self) -> &FramePair<S> {
        self.output.read()
    }
}

/// Create a connected publisher/consumer pair seeded with `initial`.
#[must_use]
pub fn channel<S: Clone + Send>(
    initial: FramePair<S>,
) -> (SnapshotPublisher<S>, SnapshotConsumer<S>) {
    let (input, output) = triple_buffer(&initial);
    (SnapshotPublisher { input }, SnapshotConsumer { output })
}
