//! Fireflies - catch-the-target arcade simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actors, physics, collisions, scoring)
//! - `settings`: Data-driven run configuration
//! - `error`: Construction-time error taxonomy
//!
//! Rendering, input capture, audio and persistence live outside this crate.
//! Collaborators feed avatar deltas through [`sim::MovementChannel`] and read
//! state back through [`sim::GameModel::snapshot`].

pub mod error;
pub mod settings;
pub mod sim;

pub use error::FirefliesError;
pub use settings::Settings;
pub use sim::{GameModel, GameSnapshot};

/// Game configuration constants
pub mod consts {
    /// Radius of every generated firefly/wasp
    pub const ACTOR_RADIUS: f32 = 1.0;
    /// Speed scalar applied to generated actors
    pub const ACTOR_SPEED: f32 = 1.0;
    /// Radius of the avatar's net and of the hole
    pub const AVATAR_RADIUS: f32 = 6.0;
    /// Number of wasps at the tail of a generated population
    pub const WASP_COUNT: u32 = 5;
    /// Outward velocity multiplier applied to released fireflies
    pub const EXPLODE_SCALE: f32 = 3.0;
}
