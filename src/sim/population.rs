//! Initial population generation

use glam::Vec2;
use rand::Rng;

use super::actor::{Actor, Species};
use crate::consts::WASP_COUNT;

/// Species for the `index`-th actor (0-based) of a population of `count`.
///
/// The tail of the population is wasps, everything before it fireflies.
#[inline]
pub fn species_for_index(index: u32, count: u32) -> Species {
    if index >= count.saturating_sub(WASP_COUNT) {
        Species::Wasp
    } else {
        Species::Firefly
    }
}

/// Generate `count` free actors at uniform random positions in `[0, size)²`.
///
/// Positions are drawn x then y per actor, in generation order, so a seeded
/// generator reproduces the same arena.
///
/// # Panics
///
/// Panics if `size` is not positive and finite; [`crate::GameModel::with_rng`]
/// validates it before calling.
pub fn generate_population<R: Rng + ?Sized>(rng: &mut R, size: f32, count: u32) -> Vec<Actor> {
    let mut actors = Vec::with_capacity(count as usize);
    for i in 0..count {
        let x = rng.random_range(0.0..size);
        let y = rng.random_range(0.0..size);
        let pos = Vec2::new(x, y);
        let actor = match species_for_index(i, count) {
            Species::Wasp => Actor::wasp(pos),
            _ => Actor::firefly(pos),
        };
        actors.push(actor);
    }
    log::debug!(
        "Generated {} actors ({} wasps) in arena of size {}",
        count,
        count.min(WASP_COUNT),
        size
    );
    actors
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_last_five_are_wasps() {
        let mut rng = Pcg32::seed_from_u64(1);
        let actors = generate_population(&mut rng, 100.0, 12);
        assert_eq!(actors.len(), 12);
        for (i, a) in actors.iter().enumerate() {
            let expected = if i >= 7 { Species::Wasp } else { Species::Firefly };
            assert_eq!(a.species, expected, "actor {i}");
        }
    }

    #[test]
    fn test_exactly_five_is_all_wasps() {
        let mut rng = Pcg32::seed_from_u64(2);
        let actors = generate_population(&mut rng, 10.0, 5);
        assert!(actors.iter().all(|a| a.species == Species::Wasp));
    }

    #[test]
    fn test_species_for_index_at_extremes() {
        assert_eq!(species_for_index(u32::MAX, u32::MAX), Species::Wasp);
        assert_eq!(species_for_index(u32::MAX - 6, u32::MAX), Species::Firefly);
        assert_eq!(species_for_index(u32::MAX - 5, u32::MAX), Species::Wasp);
        assert_eq!(species_for_index(0, 3), Species::Wasp);
    }

    #[test]
    #[should_panic]
    fn test_zero_size_arena_panics() {
        let mut rng = Pcg32::seed_from_u64(4);
        generate_population(&mut rng, 0.0, 5);
    }

    #[test]
    fn test_all_start_free_and_at_rest() {
        let mut rng = Pcg32::seed_from_u64(3);
        for a in generate_population(&mut rng, 30.0, 20) {
            assert!(a.is_active());
            assert!(!a.is_scored());
            assert_eq!(a.vel, Vec2::ZERO);
            assert_eq!(a.radius, 1.0);
            assert_eq!(a.speed, 1.0);
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate_population(&mut Pcg32::seed_from_u64(42), 64.0, 30);
        let b = generate_population(&mut Pcg32::seed_from_u64(42), 64.0, 30);
        let c = generate_population(&mut Pcg32::seed_from_u64(43), 64.0, 30);
        let positions = |v: &[Actor]| v.iter().map(|a| a.pos).collect::<Vec<_>>();
        assert_eq!(positions(&a), positions(&b));
        assert_ne!(positions(&a), positions(&c));
    }

    proptest! {
        #[test]
        fn proptest_layout_and_bounds(seed in any::<u64>(), count in 5u32..200, size in 1.0f32..500.0) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let actors = generate_population(&mut rng, size, count);
            prop_assert_eq!(actors.len(), count as usize);
            let wasps = actors.iter().filter(|a| a.species == Species::Wasp).count();
            prop_assert_eq!(wasps, 5);
            for (i, a) in actors.iter().enumerate() {
                prop_assert_eq!(a.species == Species::Wasp, i as u32 >= count - 5);
                prop_assert!(a.pos.x >= 0.0 && a.pos.x < size);
                prop_assert!(a.pos.y >= 0.0 && a.pos.y < size);
            }
        }
    }
}
