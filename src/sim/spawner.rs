//! Spawn timers and difficulty pacing

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::booster::{Booster, BoosterKind};
use super::coin::Coin;
use super::obstacle::{Obstacle, ObstacleKind};
use crate::consts::*;

/// Seconds between obstacles: tightens with difficulty, floored at 0.8
pub fn obstacle_interval(difficulty: f32) -> f32 {
    (2.0 - difficulty * 0.1).max(0.8)
}

/// Seconds between coins, uniform in [1, 3)
pub fn coin_interval(rng: &mut impl Rng) -> f32 {
    1.0 + rng.random::<f32>() * 2.0
}

/// Seconds between boosters, uniform in [10, 25)
pub fn booster_interval(rng: &mut impl Rng) -> f32 {
    10.0 + rng.random::<f32>() * 15.0
}

/// Three independent countdowns. All start expired, so the first frame of a
/// run spawns one of each.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Spawner {
    pub obstacle_timer: f32,
    pub coin_timer: f32,
    pub booster_timer: f32,
}

impl Spawner {
    /// Count down and append any due entities at `spawn_x`
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        dt: f32,
        difficulty: f32,
        spawn_x: f32,
        rng: &mut impl Rng,
        obstacles: &mut Vec<Obstacle>,
        coins: &mut Vec<Coin>,
        boosters: &mut Vec<Booster>,
    ) {
        self.obstacle_timer -= dt;
        if self.obstacle_timer <= 0.0 {
            let kind = ObstacleKind::random(rng);
            obstacles.push(Obstacle::new(kind, spawn_x, None));
            self.obstacle_timer = obstacle_interval(difficulty);
            log::trace!("Spawned {:?} obstacle", kind);
        }

        self.coin_timer -= dt;
        if self.coin_timer <= 0.0 {
            coins.push(Coin::spawn(spawn_x, rng));
            self.coin_timer = coin_interval(rng);
            log::trace!("Spawned coin");
        }

        self.booster_timer -= dt;
        if self.booster_timer <= 0.0 {
            let kind = BoosterKind::random(rng);
            boosters.push(Booster::new(kind, spawn_x));
            self.booster_timer = booster_interval(rng);
            log::trace!("Spawned {} booster", kind.as_str());
        }
    }
}

/// Difficulty ramps by a fixed step every [`DIFFICULTY_INTERVAL`] seconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pacing {
    pub difficulty: f32,
    timer: f32,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            difficulty: START_DIFFICULTY,
            timer: 0.0,
        }
    }
}

impl Pacing {
    /// Returns true when the difficulty stepped this frame
    pub fn update(&mut self, dt: f32) -> bool {
        self.timer += dt;
        if self.timer > DIFFICULTY_INTERVAL {
            self.difficulty += DIFFICULTY_STEP;
            self.timer = 0.0;
            log::debug!("Difficulty -> {:.1}", self.difficulty);
            return true;
        }
        false
    }

    /// Difficulty-derived scroll multiplier, saturating at [`MAX_GAME_SPEED`]
    pub fn game_speed(&self) -> f32 {
        (1.0 + self.difficulty * 0.1).min(MAX_GAME_SPEED)
    }
}
