//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (generation order)
//! - No rendering or platform dependencies
//!
//! The movement channel is the only state shared across threads.

pub mod actor;
pub mod collision;
pub mod movement;
pub mod population;
pub mod state;
pub mod tick;

pub use actor::{Actor, CatchState, Species};
pub use collision::{intersects, keep_on_board};
pub use movement::MovementChannel;
pub use population::{generate_population, species_for_index};
pub use state::{ActorView, GameModel, GameSnapshot};
pub use tick::{explode, tick};
