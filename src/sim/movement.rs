//! Avatar movement handoff
//!
//! The input side (any thread) writes the latest delta; the simulation tick
//! copies it out. One slot, last write wins, no queueing.

use std::sync::{Mutex, PoisonError};

use glam::Vec2;

/// Shared single-slot cell holding the pending avatar delta.
///
/// Reading does not clear the slot: a delta keeps being applied every tick
/// until the producer submits a new one.
#[derive(Debug, Default)]
pub struct MovementChannel {
    pending: Mutex<Vec2>,
}

impl MovementChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the pending delta
    pub fn submit(&self, dx: f32, dy: f32) {
        self.submit_vec(Vec2::new(dx, dy));
    }

    pub fn submit_vec(&self, delta: Vec2) {
        // A poisoned slot still holds a whole Vec2, so keep using it.
        *self.pending.lock().unwrap_or_else(PoisonError::into_inner) = delta;
    }

    /// Copy out the pending delta
    pub fn drain(&self) -> Vec2 {
        *self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
