//! Pooled visual-feedback particles
//!
//! Particles never affect gameplay. They live in a [`Pool`] and the live list
//! only holds slot handles; pruning releases and removes in the same pass.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::pool::{Pool, SlotId};
use crate::consts::{PARTICLE_DECAY, PARTICLE_GRAVITY, PARTICLE_SPREAD};

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1.0 at spawn, released at or below 0
    pub life: f32,
    /// Packed 0xRRGGBB
    pub color: u32,
}

impl Particle {
    fn blank() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            life: 0.0,
            color: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Particles {
    pool: Pool<Particle>,
    live: Vec<SlotId>,
    /// When false, `emit` is a no-op (settings toggle)
    pub enabled: bool,
}

impl Particles {
    pub fn new(capacity: usize) -> Self {
        Self {
            pool: Pool::new(capacity, Particle::blank),
            live: Vec::with_capacity(capacity),
            enabled: true,
        }
    }

    /// Burst of `count` particles at `pos` with random velocity in ±spread/2
    pub fn emit(&mut self, pos: Vec2, color: u32, count: usize, rng: &mut impl Rng) {
        if !self.enabled {
            return;
        }
        for _ in 0..count {
            let vel = Vec2::new(
                (rng.random::<f32>() - 0.5) * PARTICLE_SPREAD,
                (rng.random::<f32>() - 0.5) * PARTICLE_SPREAD,
            );
            let id = self.pool.acquire(|p| {
                p.pos = pos;
                p.vel = vel;
                p.life = 1.0;
                p.color = color;
            });
            self.live.push(id);
        }
    }

    /// Integrate (fixed-step, like player gravity), decay, and recycle dead particles
    pub fn update(&mut self, dt: f32) {
        let Self { pool, live, .. } = self;
        live.retain(|&id| {
            let Some(p) = pool.get_mut(id) else {
                return false;
            };
            p.pos += p.vel;
            p.vel.y += PARTICLE_GRAVITY;
            p.life -= dt * PARTICLE_DECAY;
            if p.life <= 0.0 {
                pool.release(id);
                return false;
            }
            true
        });
    }

    /// Release every live particle back to the pool (session restart)
    pub fn clear(&mut self) {
        for id in self.live.drain(..) {
            self.pool.release(id);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.live.iter().filter_map(|&id| self.pool.get(id))
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Objects owned by the pool, live or idle
    pub fn pool_total(&self) -> usize {
        self.pool.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_emit_initial_state() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut particles = Particles::new(4);
        particles.emit(Vec2::new(10.0, 20.0), 0xFFD700, 8, &mut rng);
        assert_eq!(particles.len(), 8);
        assert_eq!(particles.pool_total(), 8);
        for p in particles.iter() {
            assert_eq!(p.life, 1.0);
            assert_eq!(p.pos, Vec2::new(10.0, 20.0));
            assert!(p.vel.x.abs() <= 2.5 && p.vel.y.abs() <= 2.5);
            assert_eq!(p.color, 0xFFD700);
        }
    }

    #[test]
    fn test_particles_expire_after_half_a_second() {
        let mut rng = Pcg32::seed_from_u64(6);
        let mut particles = Particles::new(20);
        particles.emit(Vec2::ZERO, 0, 5, &mut rng);

        for _ in 0..20 {
            particles.update(0.02);
        }
        // life = 1 - 20 * 0.04 = 0.2
        assert_eq!(particles.len(), 5);
        for _ in 0..6 {
            particles.update(0.02);
        }
        assert!(particles.is_empty());
        assert_eq!(particles.pool_total(), 20);
    }

    #[test]
    fn test_particle_gravity_is_per_update() {
        let mut rng = Pcg32::seed_from_u64(8);
        let mut particles = Particles::new(1);
        particles.emit(Vec2::ZERO, 0, 1, &mut rng);
        let vy0 = particles.iter().next().unwrap().vel.y;
        particles.update(0.001);
        particles.update(0.1);
        let vy = particles.iter().next().unwrap().vel.y;
        assert!((vy - vy0 - 2.0 * PARTICLE_GRAVITY).abs() < 1e-5);
    }

    #[test]
    fn test_no_growth_across_restarts() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut particles = Particles::new(20);
        for _ in 0..10 {
            particles.emit(Vec2::ZERO, 0, 30, &mut rng);
            particles.update(0.01);
            particles.clear();
            assert!(particles.is_empty());
        }
        assert_eq!(particles.pool_total(), 30);
    }

    #[test]
    fn test_disabled_emits_nothing() {
        let mut rng = Pcg32::seed_from_u64(10);
        let mut particles = Particles::new(4);
        particles.enabled = false;
        particles.emit(Vec2::ZERO, 0, 3, &mut rng);
        assert!(particles.is_empty());
    }
}
