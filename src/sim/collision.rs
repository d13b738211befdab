//! Collision detection and arena boundary response
//!
//! Both functions are stateless; the tick applies them to every free actor.

use super::actor::Actor;

/// Check whether two actors' circles overlap.
///
/// Touching exactly at the sum of radii does not count.
#[inline]
pub fn intersects(a: &Actor, b: &Actor) -> bool {
    a.pos.distance(b.pos) < a.radius + b.radius
}

/// Reflect a coordinate that left `[0, size]`, flipping its velocity.
///
/// Returns the corrected `(pos, vel)`.
#[inline]
fn reflect_axis(pos: f32, vel: f32, size: f32) -> (f32, f32) {
    if pos < 0.0 {
        (-pos, -vel)
    } else if pos > size {
        (size - (pos - size), -vel)
    } else {
        (pos, vel)
    }
}

/// Bounce an actor back into the square arena.
///
/// Each axis is mirrored about the wall it crossed, independently, so a
/// corner overshoot resolves both coordinates in one call.
pub fn keep_on_board(actor: &mut Actor, size: f32) {
    let (x, vx) = reflect_axis(actor.pos.x, actor.vel.x, size);
    let (y, vy) = reflect_axis(actor.pos.y, actor.vel.y, size);
    actor.pos.x = x;
    actor.pos.y = y;
    actor.vel.x = vx;
    actor.vel.y = vy;
}
