//! Per-tick simulation update
//!
//! Advances the avatar, every free and caught actor, and the endgame check.
//! Called from the simulation thread only; never re-entrant.

use glam::Vec2;

use super::actor::CatchState;
use super::collision::{intersects, keep_on_board};
use super::state::GameModel;
use crate::consts::EXPLODE_SCALE;

/// Advance the model by one step
pub fn tick(model: &mut GameModel) {
    // Don't tick if paused or game over
    if model.paused || model.game_over {
        return;
    }

    // The copy happens under the channel lock; everything below runs without it.
    let dp = model.movement.drain();
    model.avatar.pos += dp;

    // Neither the hole nor the avatar moves again this tick
    let deposit_open = intersects(&model.hole, &model.avatar);

    // Index loop: an explode mid-pass can free actors later in the list, and
    // those then take the free path this same tick.
    for i in 0..model.actors.len() {
        if model.actors[i].is_active() {
            update_free_actor(model, i);
        } else {
            update_caught_actor(model, i, dp, deposit_open);
        }
    }

    if model.score == model.num_actors && !model.game_over {
        model.game_over = true;
        log::info!("Game over: all {} actors scored", model.num_actors);
    }
}

fn update_free_actor(model: &mut GameModel, i: usize) {
    let size = model.size;
    let actor = &mut model.actors[i];
    actor.integrate();
    keep_on_board(actor, size);

    if intersects(actor, &model.avatar) {
        if actor.species.is_catchable() {
            actor.state = CatchState::Caught;
            model.num_active -= 1;
            log::debug!("Caught firefly {} ({} still free)", i, model.num_active);
        } else if actor.species.is_hazard() {
            log::debug!("Wasp {} hit the net", i);
            explode(model);
        }
    }

    // Runs whatever happened above, including a capture this tick
    let actor = &mut model.actors[i];
    if intersects(actor, &model.hole) {
        actor.vel = actor.pos - model.avatar.pos;
    }
}

fn update_caught_actor(model: &mut GameModel, i: usize, dp: Vec2, deposit_open: bool) {
    let actor = &mut model.actors[i];
    // Scored actors stay in the net too
    actor.pos += dp;

    if deposit_open && actor.species.is_catchable() && actor.is_caught() {
        actor.state = CatchState::Scored;
        model.score += 1;
        log::debug!("Scored firefly {} (score {})", i, model.score);
    }
}

/// Release every caught, unscored firefly with an outward kick from the avatar.
///
/// Returns how many were released.
pub fn explode(model: &mut GameModel) -> u32 {
    let origin = model.avatar.pos;
    let mut released = 0;
    for actor in model
        .actors
        .iter_mut()
        .filter(|a| a.species.is_catchable() && a.is_caught())
    {
        actor.state = CatchState::Free;
        actor.vel = (actor.pos - origin) * EXPLODE_SCALE;
        released += 1;
    }
    model.num_active += released;
    if released > 0 {
        log::debug!("Explode released {} fireflies", released);
    }
    released
}

impl GameModel {
    /// Advance the simulation by one tick
    pub fn update(&mut self) {
        tick(self);
    }

    /// Scatter the net's catch, as a wasp sting does
    pub fn explode(&mut self) -> u32 {
        explode(self)
    }
}
