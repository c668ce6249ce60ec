//! Collectible coins

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Bounds, Rect};
use crate::consts::{COIN_SIZE, MAGNET_PULL, SCROLL_VELOCITY};

const BOB_RATE: f32 = 5.0;
const BOB_STEP: f32 = 0.5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub pos: Vec2,
    pub size: Vec2,
    pub velocity_x: f32,
    /// Once set the coin is inert until it is removed
    pub collected: bool,
    /// Per-coin offset so neighbours do not bob in lockstep
    pub bob_offset: f32,
}

impl Coin {
    pub fn new(x: f32, y: f32, bob_offset: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::splat(COIN_SIZE),
            velocity_x: SCROLL_VELOCITY,
            collected: false,
            bob_offset,
        }
    }

    /// Coin at the spawn edge with a random height in [200, 350) and bob phase
    pub fn spawn(x: f32, rng: &mut impl Rng) -> Self {
        let y = 200.0 + rng.random::<f32>() * 150.0;
        let bob = rng.random::<f32>() * std::f32::consts::TAU;
        Self::new(x, y, bob)
    }

    /// Scroll one update and bob around the current height, `clock` is session time
    pub fn update(&mut self, game_speed: f32, clock: f32) {
        self.pos.x += self.velocity_x * game_speed;
        self.pos.y += (clock * BOB_RATE + self.bob_offset).sin() * BOB_STEP;
    }

    /// Move a fraction of the way toward `target` (magnet effect)
    pub fn attract(&mut self, target: Vec2, dt: f32) {
        if self.collected {
            return;
        }
        let delta = target - self.pos;
        self.pos += delta * dt * MAGNET_PULL;
    }

    pub fn is_off_screen(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }
}

impl Bounds for Coin {
    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_height_range() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..100 {
            let coin = Coin::spawn(1200.0, &mut rng);
            assert!((200.0..350.0).contains(&coin.pos.y));
            assert!(!coin.collected);
        }
    }

    #[test]
    fn test_bob_stays_small() {
        let mut coin = Coin::new(1000.0, 300.0, 0.0);
        for i in 0..60 {
            coin.update(1.0, i as f32 / 60.0);
        }
        assert!((coin.pos.y - 300.0).abs() < 30.0);
        assert_eq!(coin.pos.x, 700.0);
    }

    #[test]
    fn test_attract_pulls_proportionally() {
        let mut near = Coin::new(110.0, 400.0, 0.0);
        let mut far = Coin::new(300.0, 400.0, 0.0);
        let target = Vec2::new(100.0, 400.0);
        near.attract(target, 0.1);
        far.attract(target, 0.1);
        // Half the gap closes at dt 0.1 with pull 5
        assert!((near.pos.x - 105.0).abs() < 1e-3);
        assert!((far.pos.x - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_collected_coin_ignores_magnet() {
        let mut coin = Coin::new(300.0, 300.0, 0.0);
        coin.collected = true;
        coin.attract(Vec2::ZERO, 0.1);
        assert_eq!(coin.pos, Vec2::new(300.0, 300.0));
    }
}
