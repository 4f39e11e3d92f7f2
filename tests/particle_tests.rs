use glam::Vec3;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use snowfall::error::InitError;
use snowfall::particles::{ParticleBounds, ParticlePool, DEFAULT_PARTICLE_COUNT};

fn pool(positions: Vec<Vec3>) -> ParticlePool {
    ParticlePool::from_positions(positions, ParticleBounds::default()).unwrap()
}

#[cfg(test)]
mod recycling_tests {
    use super::*;

    #[test]
    fn test_below_floor_with_zero_delta_is_recycled() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut particles = pool(vec![Vec3::new(-7.5, -200.1, 33.0)]);

        let recycled = particles.advance(0.0, &mut rng);

        let p = particles.positions()[0];
        assert_eq!(recycled, 1);
        assert!(ParticleBounds::default().contains(p.y));
        assert_eq!(p.x, -7.5);
        assert_eq!(p.z, 33.0);
    }

    #[test]
    fn test_one_second_falls_ten_units() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut particles = pool(vec![Vec3::new(1.0, 100.0, 2.0)]);

        let recycled = particles.advance(1.0, &mut rng);

        assert_eq!(recycled, 0);
        assert_eq!(particles.positions()[0], Vec3::new(1.0, 90.0, 2.0));
    }

    #[test]
    fn test_landing_exactly_on_floor_is_kept() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut particles = pool(vec![Vec3::new(0.0, -190.0, 0.0)]);

        let recycled = particles.advance(1.0, &mut rng);

        assert_eq!(recycled, 0);
        assert_eq!(particles.positions()[0].y, -200.0);
    }

    #[test]
    fn test_default_spawn_fills_cube() {
        let mut rng = StdRng::seed_from_u64(3);
        let particles =
            ParticlePool::spawn(DEFAULT_PARTICLE_COUNT, ParticleBounds::default(), &mut rng).unwrap();

        assert_eq!(particles.len(), 20_000);
        for p in particles.positions() {
            for c in p.to_array() {
                assert!((-200.0..200.0).contains(&c));
            }
        }
    }

    #[test]
    fn test_same_seed_same_snow() {
        let spawn = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut particles = ParticlePool::spawn(100, ParticleBounds::default(), &mut rng).unwrap();
            for _ in 0..50 {
                particles.advance(2.0, &mut rng);
            }
            particles.positions().to_vec()
        };

        assert_eq!(spawn(42), spawn(42));
        assert_ne!(spawn(42), spawn(43));
    }

    #[test]
    fn test_spawn_rejects_bad_input() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            ParticlePool::spawn(0, ParticleBounds::default(), &mut rng),
            Err(InitError::EmptyParticlePool)
        ));

        let inverted = ParticleBounds {
            floor: 10.0,
            ceiling: -10.0,
            fall_rate: 10.0,
        };
        assert!(matches!(
            ParticlePool::spawn(10, inverted, &mut rng),
            Err(InitError::InvalidConfig(_))
        ));
    }
}

proptest! {
    #[test]
    fn prop_heights_stay_in_bounds(
        start in prop::collection::vec((-200.0f32..200.0, -200.0f32..200.0, -200.0f32..200.0), 1..64),
        deltas in prop::collection::vec(0.0f32..5.0, 1..40),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let positions: Vec<Vec3> = start.iter().map(|&(x, y, z)| Vec3::new(x, y, z)).collect();
        let mut particles = pool(positions.clone());
        let bounds = particles.bounds();

        for delta in deltas {
            particles.advance(delta, &mut rng);
            for (p, original) in particles.positions().iter().zip(&positions) {
                prop_assert!(bounds.contains(p.y), "y = {} escaped bounds", p.y);
                prop_assert_eq!(p.x, original.x);
                prop_assert_eq!(p.z, original.z);
            }
        }
    }

    #[test]
    fn prop_stray_heights_come_back_after_one_step(
        y in -1000.0f32..-200.0001,
        delta in 0.0f32..1.0,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut particles = pool(vec![Vec3::new(0.0, y, 0.0)]);

        prop_assert_eq!(particles.advance(delta, &mut rng), 1);
        prop_assert!(particles.bounds().contains(particles.positions()[0].y));
    }
}
