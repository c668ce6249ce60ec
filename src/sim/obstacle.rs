//! Obstacle variants
//!
//! The kind fixes size and baseline height at construction and never changes.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Bounds, Rect};
use crate::consts::SCROLL_VELOCITY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Crate sitting on the ground
    Ground,
    /// Tall spike on the ground
    Spike,
    /// Hovering block at jump height
    Floating,
    /// Block bobbing up and down
    Moving,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 4] = [
        ObstacleKind::Ground,
        ObstacleKind::Spike,
        ObstacleKind::Floating,
        ObstacleKind::Moving,
    ];

    /// Uniformly random kind
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// (width, height)
    pub fn size(self) -> Vec2 {
        match self {
            ObstacleKind::Ground => Vec2::new(40.0, 40.0),
            ObstacleKind::Spike => Vec2::new(30.0, 50.0),
            ObstacleKind::Floating => Vec2::new(35.0, 35.0),
            ObstacleKind::Moving => Vec2::new(40.0, 40.0),
        }
    }

    /// Top edge at spawn. Ground-bound kinds ignore the requested height.
    fn spawn_y(self, requested: Option<f32>) -> f32 {
        match self {
            ObstacleKind::Ground => 420.0,
            ObstacleKind::Spike => 410.0,
            ObstacleKind::Floating => requested.unwrap_or(300.0),
            ObstacleKind::Moving => requested.unwrap_or(350.0),
        }
    }
}

/// Vertical oscillation of a moving obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oscillation {
    pub base_y: f32,
    pub amplitude: f32,
    /// Radians per second
    pub frequency: f32,
    pub phase: f32,
}

const MOVING_AMPLITUDE: f32 = 50.0;
const MOVING_FREQUENCY: f32 = 3.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub velocity_x: f32,
    /// Only `Moving` obstacles oscillate
    pub oscillation: Option<Oscillation>,
    /// Set once a shield has absorbed this obstacle; it no longer collides
    #[serde(default)]
    pub absorbed: bool,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, x: f32, y: Option<f32>) -> Self {
        let y = kind.spawn_y(y);
        let oscillation = match kind {
            ObstacleKind::Moving => Some(Oscillation {
                base_y: y,
                amplitude: MOVING_AMPLITUDE,
                frequency: MOVING_FREQUENCY,
                phase: 0.0,
            }),
            ObstacleKind::Ground | ObstacleKind::Spike | ObstacleKind::Floating => None,
        };
        Self {
            kind,
            pos: Vec2::new(x, y),
            size: kind.size(),
            velocity_x: SCROLL_VELOCITY,
            oscillation,
            absorbed: false,
        }
    }

    /// Scroll left one update (not dt-scaled) and advance any oscillation by `dt`
    pub fn update(&mut self, dt: f32, game_speed: f32) {
        self.pos.x += self.velocity_x * game_speed;

        if let Some(osc) = &mut self.oscillation {
            osc.phase += dt * osc.frequency;
            self.pos.y = osc.base_y + osc.phase.sin() * osc.amplitude;
        }
    }

    /// Trailing edge has passed the left side of the viewport
    pub fn is_off_screen(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }
}

impl Bounds for Obstacle {
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
    fn test_spike_scrolls_linearly() {
        let mut spike = Obstacle::new(ObstacleKind::Spike, 1000.0, None);
        assert_eq!(spike.velocity_x, -5.0);
        for _ in 0..100 {
            spike.update(1.0, 1.0);
        }
        assert!((spike.pos.x - 500.0).abs() < 1e-3);
        assert!(!spike.is_off_screen());
    }

    #[test]
    fn test_off_screen_uses_trailing_edge() {
        let mut ground = Obstacle::new(ObstacleKind::Ground, -40.0, None);
        assert!(!ground.is_off_screen());
        ground.pos.x = -40.5;
        assert!(ground.is_off_screen());
    }

    #[test]
    fn test_kind_fixes_geometry() {
        let spike = Obstacle::new(ObstacleKind::Spike, 0.0, Some(10.0));
        assert_eq!(spike.pos.y, 410.0);
        assert_eq!(spike.size, Vec2::new(30.0, 50.0));

        let floating = Obstacle::new(ObstacleKind::Floating, 0.0, Some(280.0));
        assert_eq!(floating.pos.y, 280.0);
        assert!(floating.oscillation.is_none());
    }

    #[test]
    fn test_moving_oscillates_around_base() {
        let mut moving = Obstacle::new(ObstacleKind::Moving, 800.0, None);
        let mut min_y = f32::MAX;
        let mut max_y = f32::MIN;
        for _ in 0..240 {
            moving.update(1.0 / 60.0, 1.0);
            min_y = min_y.min(moving.pos.y);
            max_y = max_y.max(moving.pos.y);
        }
        assert!(min_y >= 300.0 - 1e-3 && max_y <= 400.0 + 1e-3);
        assert!(max_y - min_y > 90.0);
        assert_eq!(moving.kind, ObstacleKind::Moving);
    }

    #[test]
    fn test_game_speed_scales_scroll() {
        let mut a = Obstacle::new(ObstacleKind::Ground, 1000.0, None);
        a.update(1.0 / 60.0, 2.0);
        assert_eq!(a.pos.x, 990.0);
    }

    #[test]
    fn test_random_covers_all_kinds() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let kind = ObstacleKind::random(&mut rng);
            let idx = ObstacleKind::ALL.iter().position(|k| *k == kind).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
