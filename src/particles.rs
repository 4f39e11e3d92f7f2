//! Snow particle pool and its recycling policy.
//!
//! Particles have no velocity of their own: every update moves each one down
//! by `fall_rate * delta` and any particle that ends up below the floor is
//! respawned at a random height between floor and ceiling. Horizontal
//! coordinates are fixed for the lifetime of the pool.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::InitError;

pub const DEFAULT_PARTICLE_COUNT: usize = 20_000;
pub const DEFAULT_FLOOR: f32 = -200.0;
pub const DEFAULT_CEILING: f32 = 200.0;
/// Units per second
pub const DEFAULT_FALL_RATE: f32 = 10.0;

/// Vertical extent and fall speed of the snow volume
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleBounds {
    pub floor: f32,
    pub ceiling: f32,
    pub fall_rate: f32,
}

impl ParticleBounds {
    pub fn validate(&self) -> Result<(), InitError> {
        if !(self.floor < self.ceiling) {
            return Err(InitError::InvalidConfig(format!(
                "particle floor {} must be below ceiling {}",
                self.floor, self.ceiling
            )));
        }
        if !(self.fall_rate >= 0.0) {
            return Err(InitError::InvalidConfig(format!(
                "particle fall rate {} must not be negative",
                self.fall_rate
            )));
        }
        Ok(())
    }

    pub fn contains(&self, y: f32) -> bool {
        y >= self.floor && y < self.ceiling
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.gen_range(self.floor..self.ceiling)
    }
}

impl Default for ParticleBounds {
    fn default() -> Self {
        Self {
            floor: DEFAULT_FLOOR,
            ceiling: DEFAULT_CEILING,
            fall_rate: DEFAULT_FALL_RATE,
        }
    }
}

/// Fixed-size pool of particle positions
#[derive(Debug, Clone)]
pub struct ParticlePool {
    positions: Vec<Vec3>,
    bounds: ParticleBounds,
}

impl ParticlePool {
    /// Spawn `count` particles with every coordinate uniform in [floor, ceiling)
    pub fn spawn<R: Rng + ?Sized>(
        count: usize,
        bounds: ParticleBounds,
        rng: &mut R,
    ) -> Result<Self, InitError> {
        bounds.validate()?;
        if count == 0 {
            return Err(InitError::EmptyParticlePool);
        }

        let positions = (0..count)
            .map(|_| Vec3::new(bounds.sample(rng), bounds.sample(rng), bounds.sample(rng)))
            .collect();

        Ok(Self { positions, bounds })
    }

    /// Wrap existing positions. Positions are taken as-is, even out of bounds;
    /// the next `advance` brings any stray y back into range.
    pub fn from_positions(positions: Vec<Vec3>, bounds: ParticleBounds) -> Result<Self, InitError> {
        bounds.validate()?;
        if positions.is_empty() {
            return Err(InitError::EmptyParticlePool);
        }
        Ok(Self { positions, bounds })
    }

    /// Move every particle down and recycle the ones that fell through the
    /// floor. Returns how many were recycled.
    pub fn advance<R: Rng + ?Sized>(&mut self, delta: f32, rng: &mut R) -> usize {
        let drop = self.bounds.fall_rate * delta;
        let mut recycled = 0;

        for p in &mut self.positions {
            p.y -= drop;
            if p.y < self.bounds.floor {
                p.y = self.bounds.sample(rng);
                recycled += 1;
            }
        }

        recycled
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn bounds(&self) -> ParticleBounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
