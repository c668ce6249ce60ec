//! Player locomotion state machine

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Bounds, Rect};
use super::physics;
use crate::consts::*;

/// Exactly one of these is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locomotion {
    Run,
    Jump,
    Slide,
    /// Forced while the fly effect is active
    Fly,
    /// Terminal until the session restarts
    Dead,
}

/// Trail point for speed-line rendering
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub alpha: f32,
}

/// Number of trail points kept (newest first)
pub const TRAIL_LENGTH: usize = 5;
const TRAIL_ALPHA: f32 = 0.3;
const TRAIL_FADE: f32 = 0.9;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub velocity_y: f32,
    pub grounded: bool,
    pub state: Locomotion,
    pub slide_timer: f32,
    /// Run-cycle frame in `0..ANIM_FRAME_COUNT`
    pub anim_frame: u32,
    anim_timer: f32,
    dust_timer: f32,
    #[serde(skip)]
    pub trail: Vec<TrailPoint>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PLAYER_X, GROUND_Y)
    }
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            velocity_y: 0.0,
            grounded: true,
            state: Locomotion::Run,
            slide_timer: 0.0,
            anim_frame: 0,
            anim_timer: 0.0,
            dust_timer: 0.0,
            trail: Vec::with_capacity(TRAIL_LENGTH + 1),
        }
    }

    /// Start a jump. Only possible from the ground and not mid-slide.
    ///
    /// Leaving the ground clears `grounded` right away so the per-frame
    /// update does not fold the jump back into a run before gravity runs.
    pub fn jump(&mut self) -> bool {
        if !self.grounded || self.state == Locomotion::Slide || self.state == Locomotion::Dead {
            return false;
        }
        self.velocity_y = JUMP_FORCE;
        self.grounded = false;
        self.state = Locomotion::Jump;
        true
    }

    /// Duck under obstacles for [`SLIDE_DURATION`]
    pub fn slide(&mut self) -> bool {
        if !self.grounded || self.state == Locomotion::Slide || self.state == Locomotion::Dead {
            return false;
        }
        self.state = Locomotion::Slide;
        self.size.y = PLAYER_SLIDE_HEIGHT;
        self.pos.y += PLAYER_HEIGHT - PLAYER_SLIDE_HEIGHT;
        self.slide_timer = SLIDE_DURATION;
        true
    }

    /// Restore standing height after a slide
    fn end_slide(&mut self) {
        self.size.y = PLAYER_HEIGHT;
        self.pos.y -= PLAYER_HEIGHT - PLAYER_SLIDE_HEIGHT;
        self.slide_timer = 0.0;
        self.state = Locomotion::Run;
    }

    /// Per-frame update: animation, trail, dust gate, then automatic transitions
    pub fn update(&mut self, dt: f32, flying: bool, game_speed: f32) {
        if self.state == Locomotion::Dead {
            return;
        }

        self.anim_timer += dt;
        let frame_time = ANIM_FRAME_TIME / game_speed.max(f32::EPSILON);
        if self.anim_timer > frame_time {
            self.anim_frame = (self.anim_frame + 1) % ANIM_FRAME_COUNT;
            self.anim_timer = 0.0;
        }

        self.dust_timer += dt;
        self.record_trail();

        if self.state == Locomotion::Slide {
            self.slide_timer -= dt;
            // Flight cancels a slide so the raised body is full height
            if self.slide_timer <= 0.0 || flying {
                self.end_slide();
            }
        }

        if !flying && self.grounded && self.state != Locomotion::Slide {
            self.state = Locomotion::Run;
        }

        if flying {
            self.state = Locomotion::Fly;
            self.velocity_y = 0.0;
            self.pos.y = self.pos.y.clamp(FLY_MIN_Y, FLY_MAX_Y);
        }
    }

    /// Ground line for the current height: a sliding body keeps its feet on the floor
    pub fn floor_y(&self) -> f32 {
        GROUND_Y + (PLAYER_HEIGHT - self.size.y)
    }

    /// One fixed gravity step; the caller skips this while flying
    pub fn apply_gravity(&mut self) {
        let step = physics::apply_gravity(self.pos.y, self.velocity_y, self.floor_y());
        self.pos.y = step.y;
        self.velocity_y = step.velocity_y;
        self.grounded = step.grounded;
    }

    /// True at most once per [`DUST_INTERVAL`] while grounded
    pub fn should_emit_dust(&mut self) -> bool {
        if self.grounded && self.dust_timer > DUST_INTERVAL {
            self.dust_timer = 0.0;
            return true;
        }
        false
    }

    pub fn kill(&mut self) {
        self.state = Locomotion::Dead;
    }

    pub fn is_dead(&self) -> bool {
        self.state == Locomotion::Dead
    }

    /// Bottom-center, where dust is kicked up
    pub fn feet(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.y + self.size.y)
    }

    fn record_trail(&mut self) {
        for point in &mut self.trail {
            point.alpha *= TRAIL_FADE;
        }
        self.trail.insert(
            0,
            TrailPoint {
                pos: self.pos,
                alpha: TRAIL_ALPHA,
            },
        );
        self.trail.truncate(TRAIL_LENGTH);
    }
}

impl Bounds for Player {
    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}
