//! Game state and lifecycle
//!
//! `GameModel` owns the population, the avatar and the hole. Only the tick
//! (see `tick.rs`) mutates it while running; renderers read it through
//! [`GameModel::snapshot`] or the individual observers.

use std::sync::Arc;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, CatchState, Species};
use super::movement::MovementChannel;
use super::population::generate_population;
use crate::error::FirefliesError;
use crate::settings::{Settings, validate_dimensions};

/// Complete simulation state for one session
#[derive(Debug)]
pub struct GameModel {
    /// Side length of the square arena (fixed)
    pub(crate) size: f32,
    /// Population in generation order; iteration order is stable per tick
    pub(crate) actors: Vec<Actor>,
    pub(crate) avatar: Actor,
    pub(crate) hole: Actor,
    pub(crate) num_actors: u32,
    /// Actors currently free
    pub(crate) num_active: u32,
    /// Fireflies deposited through the hole
    pub(crate) score: u32,
    pub(crate) game_over: bool,
    pub(crate) paused: bool,
    pub(crate) movement: Arc<MovementChannel>,
}

impl GameModel {
    /// Create a model with a seeded population
    pub fn new(size: f32, num_actors: u32, seed: u64) -> Result<Self, FirefliesError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        Self::with_rng(size, num_actors, &mut rng)
    }

    /// Create a model drawing its population from an injected generator
    pub fn with_rng<R: Rng + ?Sized>(
        size: f32,
        num_actors: u32,
        rng: &mut R,
    ) -> Result<Self, FirefliesError> {
        validate_dimensions(size, num_actors)?;
        let actors = generate_population(rng, size, num_actors);
        Ok(Self::assemble(size, actors))
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, FirefliesError> {
        settings.validate()?;
        let seed = settings.resolve_seed();
        log::info!(
            "New game: arena={}, actors={}, seed={}",
            settings.arena_size,
            settings.num_actors,
            seed
        );
        Self::new(settings.arena_size, settings.num_actors, seed)
    }

    /// Create a model around an explicit population (scripted scenarios).
    ///
    /// Unlike the generated constructors, there is no minimum population.
    pub fn from_actors(size: f32, actors: Vec<Actor>) -> Result<Self, FirefliesError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(FirefliesError::InvalidConfiguration(
                "arena size must be positive and finite",
            ));
        }
        if actors
            .iter()
            .any(|a| matches!(a.species, Species::Avatar | Species::Hole))
        {
            return Err(FirefliesError::InvalidConfiguration(
                "population may only hold fireflies and wasps",
            ));
        }
        if actors
            .iter()
            .any(|a| a.species.is_hazard() && a.state != CatchState::Free)
        {
            return Err(FirefliesError::InvalidConfiguration("wasps are always free"));
        }
        Ok(Self::assemble(size, actors))
    }

    fn assemble(size: f32, actors: Vec<Actor>) -> Self {
        let num_actors = actors.len() as u32;
        let num_active = actors.iter().filter(|a| a.is_active()).count() as u32;
        let score = actors.iter().filter(|a| a.is_scored()).count() as u32;
        Self {
            size,
            actors,
            avatar: Actor::avatar(size),
            hole: Actor::hole(size),
            num_actors,
            num_active,
            score,
            game_over: false,
            paused: true,
            movement: Arc::new(MovementChannel::new()),
        }
    }

    // === Lifecycle ===

    /// Unpause. A finished game stays finished.
    pub fn start(&mut self) {
        if self.game_over {
            log::warn!("start() on a finished game; build a new model to play again");
            return;
        }
        self.paused = false;
        log::info!("Game started");
    }

    /// End the session
    pub fn stop(&mut self) {
        if !self.game_over {
            log::info!("Game stopped (score {}/{})", self.score, self.num_actors);
        }
        self.game_over = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.game_over
    }

    /// Suspend ticking without ending the game
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    // === Input ===

    /// Submit an avatar delta. Callers on other threads should hold a
    /// [`GameModel::movement_channel`] handle instead.
    pub fn submit_avatar_movement(&self, dx: f32, dy: f32) {
        self.movement.submit(dx, dy);
    }

    /// Handle for the input thread
    pub fn movement_channel(&self) -> Arc<MovementChannel> {
        Arc::clone(&self.movement)
    }

    // === Observers ===

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn avatar_pos(&self) -> Vec2 {
        self.avatar.pos
    }

    pub fn hole_pos(&self) -> Vec2 {
        self.hole.pos
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn num_actors(&self) -> u32 {
        self.num_actors
    }

    pub fn num_active(&self) -> u32 {
        self.num_active
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Copy of everything a renderer needs for one frame
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            size: self.size,
            actors: self.actors.iter().map(ActorView::from).collect(),
            avatar: self.avatar.pos,
            hole: self.hole.pos,
            avatar_radius: self.avatar.radius,
            hole_radius: self.hole.radius,
            score: self.score,
            num_actors: self.num_actors,
            num_active: self.num_active,
            game_over: self.game_over,
        }
    }
}

/// Read-only view of one actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorView {
    pub pos: Vec2,
    pub radius: f32,
    pub species: Species,
    pub active: bool,
    pub scored: bool,
}

impl From<&Actor> for ActorView {
    fn from(a: &Actor) -> Self {
        Self {
            pos: a.pos,
            radius: a.radius,
            species: a.species,
            active: a.state == CatchState::Free,
            scored: a.state == CatchState::Scored,
        }
    }
}

/// Frame snapshot for rendering/UI collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub size: f32,
    pub actors: Vec<ActorView>,
    pub avatar: Vec2,
    pub hole: Vec2,
    pub avatar_radius: f32,
    pub hole_radius: f32,
    pub score: u32,
    pub num_actors: u32,
    pub num_active: u32,
    pub game_over: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_model() {
        let model = GameModel::new(80.0, 20, 12345).unwrap();
        assert_eq!(model.num_actors(), 20);
        assert_eq!(model.num_active(), 20);
        assert_eq!(model.score(), 0);
        assert!(!model.is_game_over());
        assert!(model.is_paused());
        assert_eq!(model.avatar_pos(), Vec2::new(40.0, 40.0));
        assert_eq!(model.hole_pos(), Vec2::new(40.0, 40.0));
    }

    #[test]
    fn test_rejects_invalid_configuration() {
        for (size, n) in [(0.0, 10), (-1.0, 10), (f32::NAN, 10), (10.0, 4), (10.0, 0)] {
            let err = GameModel::new(size, n, 1).unwrap_err();
            assert!(err.is_invalid_configuration(), "size={size} n={n}");
        }
        assert!(GameModel::new(10.0, 5, 1).is_ok());
    }

    #[test]
    fn test_from_actors_rejects_avatar_species() {
        let actors = vec![Actor::avatar(10.0)];
        assert!(GameModel::from_actors(10.0, actors).is_err());
    }

    #[test]
    fn test_from_actors_rejects_captured_wasp() {
        for state in [CatchState::Caught, CatchState::Scored] {
            let mut wasp = Actor::wasp(Vec2::ONE);
            wasp.state = state;
            let err = GameModel::from_actors(100.0, vec![wasp]).unwrap_err();
            assert!(err.is_invalid_configuration(), "{state:?}");
        }
        assert!(GameModel::from_actors(100.0, vec![Actor::wasp(Vec2::ONE)]).is_ok());
    }

    #[test]
    fn test_from_actors_counts() {
        let mut caught = Actor::firefly(Vec2::ZERO);
        caught.state = CatchState::Caught;
        let mut scored = Actor::firefly(Vec2::ZERO);
        scored.state = CatchState::Scored;
        let model =
            GameModel::from_actors(10.0, vec![Actor::firefly(Vec2::ONE), caught, scored]).unwrap();
        assert_eq!(model.num_actors(), 3);
        assert_eq!(model.num_active(), 1);
        assert_eq!(model.score(), 1);
    }

    #[test]
    fn test_start_stop() {
        let mut model = GameModel::new(50.0, 10, 7).unwrap();
        model.start();
        assert!(!model.is_paused());
        assert!(!model.is_stopped());

        model.pause();
        assert!(model.is_paused());

        model.stop();
        assert!(model.is_stopped());
        assert!(model.is_game_over());

        // Finished games do not come back
        model.start();
        assert!(model.is_stopped());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let model = GameModel::new(30.0, 8, 99).unwrap();
        let snap = model.snapshot();
        assert_eq!(snap.actors.len(), 8);
        assert_eq!(snap.num_active, 8);
        assert_eq!(snap.avatar_radius, 6.0);
        assert!(snap.actors.iter().all(|a| a.active && !a.scored));
        assert_eq!(snap.actors[7].species, Species::Wasp);

        let json = serde_json::to_string(&snap).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }

    #[test]
    fn test_movement_handle_shares_slot() {
        let model = GameModel::new(30.0, 8, 1).unwrap();
        let handle = model.movement_channel();
        handle.submit(2.0, 3.0);
        assert_eq!(model.movement.drain(), Vec2::new(2.0, 3.0));
        model.submit_avatar_movement(-1.0, 0.0);
        assert_eq!(handle.drain(), Vec2::new(-1.0, 0.0));
    }
}
