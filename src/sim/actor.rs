//! Actor entities
//!
//! Fireflies, wasps, the avatar's net and the hole all share one record.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{ACTOR_RADIUS, ACTOR_SPEED, AVATAR_RADIUS};

/// What kind of thing an actor is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Species {
    /// Collectible target
    Firefly,
    /// Hazard: touching the net scatters the catch
    Wasp,
    /// The player's net
    Avatar,
    /// Deposit point for caught fireflies
    Hole,
}

impl Species {
    /// Fireflies go into the net on contact
    pub fn is_catchable(&self) -> bool {
        matches!(self, Species::Firefly)
    }

    /// Wasps trigger an explode on contact
    pub fn is_hazard(&self) -> bool {
        matches!(self, Species::Wasp)
    }
}

/// Capture state of an actor.
///
/// Only fireflies ever leave `Free`. `Scored` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CatchState {
    /// Moving under its own velocity
    #[default]
    Free,
    /// In the net, dragged along with the avatar
    Caught,
    /// Deposited through the hole, counted toward the score
    Scored,
}

/// A simulated entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Multiplier on velocity during integration
    pub speed: f32,
    pub species: Species,
    pub state: CatchState,
}

impl Actor {
    /// A free actor at rest
    pub fn new(species: Species, pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            speed: ACTOR_SPEED,
            species,
            state: CatchState::Free,
        }
    }

    pub fn firefly(pos: Vec2) -> Self {
        Self::new(Species::Firefly, pos, ACTOR_RADIUS)
    }

    pub fn wasp(pos: Vec2) -> Self {
        Self::new(Species::Wasp, pos, ACTOR_RADIUS)
    }

    /// The player's net, centered in an arena of side `size`
    pub fn avatar(size: f32) -> Self {
        Self::new(Species::Avatar, Vec2::splat(size / 2.0), AVATAR_RADIUS)
    }

    /// The deposit hole, centered in an arena of side `size`
    pub fn hole(size: f32) -> Self {
        Self::new(Species::Hole, Vec2::splat(size / 2.0), AVATAR_RADIUS)
    }

    /// True while free-moving and uncaptured
    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == CatchState::Free
    }

    /// True once counted toward the score (permanent)
    #[inline]
    pub fn is_scored(&self) -> bool {
        self.state == CatchState::Scored
    }

    #[inline]
    pub fn is_caught(&self) -> bool {
        self.state == CatchState::Caught
    }

    /// Advance position by one step of velocity
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel * self.speed;
    }
}
