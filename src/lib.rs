//! Dash Runner - An endless-runner arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic per-frame simulation (player, spawning, collisions, effects)
//! - `persistence`: High score and mute flag storage
//! - `audio`: Fire-and-forget sound cues for simulation events
//! - `settings`: Run configuration

pub mod audio;
pub mod persistence;
pub mod settings;
pub mod sim;

pub use persistence::{HighScoreKeeper, Persistence};
pub use settings::{QualityPreset, Settings};

/// Game configuration constants
pub mod consts {
    /// Largest frame delta the simulation will integrate (stall guard)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Viewport dimensions (entities spawn at the right edge)
    pub const VIEWPORT_WIDTH: f32 = 1200.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    /// Gravity added to vertical velocity once per update (not dt-scaled)
    pub const GRAVITY: f32 = 0.8;
    /// Ground line the player's y is clamped to
    pub const GROUND_Y: f32 = 400.0;
    /// Horizontal motion is normalized against this update rate
    pub const BASELINE_UPDATES_PER_SEC: f32 = 60.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    pub const PLAYER_SLIDE_HEIGHT: f32 = 30.0;
    pub const JUMP_FORCE: f32 = -15.0;
    pub const SLIDE_DURATION: f32 = 0.5;
    /// Flight band while the fly effect is active
    pub const FLY_MIN_Y: f32 = 50.0;
    pub const FLY_MAX_Y: f32 = 400.0;
    /// Minimum gap between dust puffs while grounded
    pub const DUST_INTERVAL: f32 = 0.1;
    /// Base seconds per run-cycle frame at game speed 1
    pub const ANIM_FRAME_TIME: f32 = 0.1;
    pub const ANIM_FRAME_COUNT: u32 = 4;

    /// Leftward scroll applied to every field entity (per update, times game speed)
    pub const SCROLL_VELOCITY: f32 = -5.0;

    /// Coin defaults
    pub const COIN_SIZE: f32 = 25.0;
    pub const COIN_BONUS: u64 = 10;
    /// Coins are attracted at this fraction of the gap per second
    pub const MAGNET_PULL: f32 = 5.0;

    /// Booster pickup defaults
    pub const BOOSTER_SIZE: f32 = 30.0;
    pub const BOOSTER_Y: f32 = 250.0;
    /// Every effect lasts this long on (re)activation
    pub const EFFECT_DURATION: f32 = 5.0;
    pub const SPEED_BOOST: f32 = 1.5;

    /// Difficulty pacing
    pub const START_DIFFICULTY: f32 = 1.0;
    pub const DIFFICULTY_STEP: f32 = 0.1;
    pub const DIFFICULTY_INTERVAL: f32 = 10.0;
    pub const MAX_GAME_SPEED: f32 = 2.0;

    /// Distance points per second at game speed 1
    pub const DISTANCE_POINTS_PER_SEC: f32 = 10.0;

    /// Particle defaults
    pub const PARTICLE_POOL_SIZE: usize = 20;
    pub const PARTICLE_SPREAD: f32 = 5.0;
    pub const PARTICLE_GRAVITY: f32 = 0.2;
    pub const PARTICLE_DECAY: f32 = 2.0;
}

/// Packed 0xRRGGBB colors used for particle bursts
pub mod palette {
    pub const DUST: u32 = 0x8B4513;
    pub const COIN: u32 = 0xFFD700;
    pub const SHIELD: u32 = 0x00FF00;
}
