//! Booster pickups on the field

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Bounds, Rect};
use crate::consts::{BOOSTER_SIZE, BOOSTER_Y, SCROLL_VELOCITY};

/// Spin rate of the pickup icon (radians per second)
const SPIN_RATE: f32 = 3.0;

/// Booster effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoosterKind {
    /// Multiplies scroll speed
    Speed,
    /// Lifts the player into the flight band, gravity off
    Fly,
    /// Absorbs one fatal obstacle hit
    Shield,
    /// Pulls uncollected coins toward the player
    Magnet,
}

impl BoosterKind {
    pub const ALL: [BoosterKind; 4] = [
        BoosterKind::Speed,
        BoosterKind::Fly,
        BoosterKind::Shield,
        BoosterKind::Magnet,
    ];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// HUD label
    pub fn as_str(&self) -> &'static str {
        match self {
            BoosterKind::Speed => "SPEED",
            BoosterKind::Fly => "FLY",
            BoosterKind::Shield => "SHIELD",
            BoosterKind::Magnet => "MAGNET",
        }
    }
}

/// A booster pickup entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booster {
    pub kind: BoosterKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub velocity_x: f32,
    pub collected: bool,
    /// Icon rotation (radians)
    pub rotation: f32,
}

impl Booster {
    pub fn new(kind: BoosterKind, x: f32) -> Self {
        Self {
            kind,
            pos: Vec2::new(x, BOOSTER_Y),
            size: Vec2::splat(BOOSTER_SIZE),
            velocity_x: SCROLL_VELOCITY,
            collected: false,
            rotation: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32, game_speed: f32) {
        self.pos.x += self.velocity_x * game_speed;
        self.rotation += dt * SPIN_RATE;
    }

    pub fn is_off_screen(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }
}

impl Bounds for Booster {
    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}
