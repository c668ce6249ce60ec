//! Camera shake
//!
//! The offset is a render-only translation; nothing in the simulation reads it.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Camera {
    pub offset: Vec2,
    pub shake_intensity: f32,
    pub shake_duration: f32,
    /// Disabled by settings (screen shake off / reduced motion)
    pub shake_enabled: bool,
}

impl Camera {
    pub fn new(shake_enabled: bool) -> Self {
        Self {
            shake_enabled,
            ..Default::default()
        }
    }

    pub fn shake(&mut self, intensity: f32, duration: f32) {
        if !self.shake_enabled {
            return;
        }
        self.shake_intensity = intensity;
        self.shake_duration = duration;
    }

    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) {
        if self.shake_duration > 0.0 {
            self.shake_duration -= dt;
            self.offset = Vec2::new(
                (rng.random::<f32>() - 0.5) * self.shake_intensity,
                (rng.random::<f32>() - 0.5) * self.shake_intensity,
            );
            if self.shake_duration <= 0.0 {
                self.offset = Vec2::ZERO;
            }
        }
    }

    pub fn is_shaking(&self) -> bool {
        self.shake_duration > 0.0
    }
}
