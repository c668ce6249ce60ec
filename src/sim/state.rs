//! Session aggregate and control surface
//!
//! The session is the sole owner of every entity list. Hosts talk to it
//! through the control methods here, feed intents into
//! [`Session::update`](super::tick), and read [`RenderSnapshot`]s back out.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::booster::{Booster, BoosterKind};
use super::camera::Camera;
use super::coin::Coin;
use super::effects::{ActiveEffect, Effects};
use super::obstacle::Obstacle;
use super::particles::Particles;
use super::player::Player;
use super::spawner::{Pacing, Spawner};
use crate::persistence::HighScoreKeeper;
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, nothing simulates
    Menu,
    /// Active run
    Playing,
    /// Frozen by the host; `update` is a no-op
    Paused,
    /// Player died; waiting for restart
    GameOver,
}

/// Frequency / duration hint handed to the audio collaborator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneHint {
    /// Hz
    pub frequency: f32,
    /// Seconds
    pub duration: f32,
}

/// Discrete things that happened during a frame (fire-and-forget)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Jump,
    Slide,
    CoinPickup,
    BoosterPickup(BoosterKind),
    ShieldBreak,
    Death { score: u64, new_record: bool },
}

impl GameEvent {
    pub fn tone(&self) -> ToneHint {
        let (frequency, duration) = match self {
            GameEvent::Jump => (440.0, 0.1),
            GameEvent::Slide => (220.0, 0.15),
            GameEvent::CoinPickup => (880.0, 0.1),
            GameEvent::BoosterPickup(_) => (1200.0, 0.15),
            GameEvent::ShieldBreak => (600.0, 0.2),
            GameEvent::Death { .. } => (100.0, 0.5),
        };
        ToneHint {
            frequency,
            duration,
        }
    }
}

/// Number of parallax background layers
pub const PARALLAX_LAYERS: usize = 3;

/// Read-only view of a session for the renderer / HUD
#[derive(Debug, Clone, Copy)]
pub struct RenderSnapshot<'a> {
    pub phase: GamePhase,
    pub player: &'a Player,
    pub obstacles: &'a [Obstacle],
    pub coins: &'a [Coin],
    pub boosters: &'a [Booster],
    pub particles: &'a Particles,
    pub camera_offset: Vec2,
    pub background: [f32; PARALLAX_LAYERS],
    pub active_effect: Option<ActiveEffect>,
    pub shield: bool,
    pub game_speed: f32,
    pub score: u64,
    pub high_score: u64,
}

/// Complete run state
pub struct Session {
    pub phase: GamePhase,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub coins: Vec<Coin>,
    pub boosters: Vec<Booster>,
    pub particles: Particles,
    pub effects: Effects,
    pub spawner: Spawner,
    pub pacing: Pacing,
    pub camera: Camera,
    /// Parallax layer offsets (render only)
    pub background: [f32; PARALLAX_LAYERS],
    /// Scroll multiplier, difficulty-derived and boosted by the speed effect
    pub game_speed: f32,
    pub score: u64,
    /// Fractional distance points not yet credited
    pub(crate) score_carry: f32,
    /// Seconds of play this run
    pub clock: f32,
    pub(crate) high_score: u64,
    pub(crate) new_record: bool,
    pub(crate) events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
    pub(crate) settings: Settings,
    keeper: Box<dyn HighScoreKeeper>,
}

impl Session {
    /// Session with default settings
    pub fn new(seed: u64, keeper: Box<dyn HighScoreKeeper>) -> Self {
        Self::with_settings(Settings::default(), seed, keeper)
    }

    pub fn with_settings(settings: Settings, seed: u64, keeper: Box<dyn HighScoreKeeper>) -> Self {
        let settings = settings.validated();
        let mut particles = Particles::new(settings.particle_pool_size());
        particles.enabled = settings.particles;
        let high_score = keeper.high_score();

        Self {
            phase: GamePhase::Menu,
            player: Player::default(),
            obstacles: Vec::new(),
            coins: Vec::new(),
            boosters: Vec::new(),
            particles,
            effects: Effects::default(),
            spawner: Spawner::default(),
            pacing: Pacing::default(),
            camera: Camera::new(settings.effective_screen_shake()),
            background: [0.0; PARALLAX_LAYERS],
            game_speed: 1.0,
            score: 0,
            score_carry: 0.0,
            clock: 0.0,
            high_score,
            new_record: false,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            settings,
            keeper,
        }
    }

    /// Begin a fresh run (from the menu or after game over)
    pub fn start(&mut self) {
        self.reset_run();
        self.high_score = self.keeper.high_score();
        self.phase = GamePhase::Playing;
        log::info!("Run started (high score {})", self.high_score);
    }

    /// Alias of [`Session::start`] used from the game-over screen
    pub fn restart(&mut self) {
        self.start();
    }

    pub fn pause(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Paused;
            log::info!("Paused");
        }
    }

    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Playing;
            log::info!("Resumed");
        }
    }

    /// Back to the title screen; the run state is left for the next `start`
    pub fn show_menu(&mut self) {
        self.phase = GamePhase::Menu;
    }

    /// Jump command. Returns true (and queues a cue) only if the player jumped.
    pub fn jump(&mut self) -> bool {
        if self.phase == GamePhase::Playing && self.player.jump() {
            self.events.push(GameEvent::Jump);
            return true;
        }
        false
    }

    /// Slide command. Returns true (and queues a cue) only if the player slid.
    pub fn slide(&mut self) -> bool {
        if self.phase == GamePhase::Playing && self.player.slide() {
            self.events.push(GameEvent::Slide);
            return true;
        }
        false
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> RenderSnapshot<'_> {
        RenderSnapshot {
            phase: self.phase,
            player: &self.player,
            obstacles: &self.obstacles,
            coins: &self.coins,
            boosters: &self.boosters,
            particles: &self.particles,
            camera_offset: self.camera.offset,
            background: self.background,
            active_effect: self.effects.active,
            shield: self.effects.shield,
            game_speed: self.game_speed,
            score: self.score,
            high_score: self.high_score,
        }
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    /// Whether the last game over beat the stored high score
    pub fn new_record(&self) -> bool {
        self.new_record
    }

    pub fn difficulty(&self) -> f32 {
        self.pacing.difficulty
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// End the run: freeze, persist the score once, queue the death cue
    pub(crate) fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.player.kill();
        self.camera.shake(20.0, 0.5);

        self.new_record = self.keeper.save_high_score(self.score);
        if self.new_record {
            self.high_score = self.score;
        }
        self.events.push(GameEvent::Death {
            score: self.score,
            new_record: self.new_record,
        });
        log::info!("Game over: score {} (new record: {})", self.score, self.new_record);
    }

    fn reset_run(&mut self) {
        self.player = Player::default();
        self.obstacles.clear();
        self.coins.clear();
        self.boosters.clear();
        self.particles.clear();
        self.effects = Effects::default();
        self.spawner = Spawner::default();
        self.pacing = Pacing::default();
        self.camera = Camera::new(self.settings.effective_screen_shake());
        self.background = [0.0; PARALLAX_LAYERS];
        self.game_speed = 1.0;
        self.score = 0;
        self.score_carry = 0.0;
        self.clock = 0.0;
        self.new_record = false;
        self.events.clear();
    }
}
