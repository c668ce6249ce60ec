//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay free of platform code:
//! - Seeded RNG only (one `Pcg32` per session)
//! - Single-threaded, one `update` call per frame
//! - No rendering or audio; hosts read snapshots and drain events

pub mod booster;
pub mod camera;
pub mod coin;
pub mod collision;
pub mod effects;
pub mod obstacle;
pub mod particles;
pub mod physics;
pub mod player;
pub mod pool;
pub mod spawner;
pub mod state;
pub mod tick;

pub use booster::{Booster, BoosterKind};
pub use coin::Coin;
pub use collision::{Bounds, Rect, boxes_overlap, circles_overlap};
pub use effects::{ActiveEffect, Effects};
pub use obstacle::{Obstacle, ObstacleKind};
pub use particles::{Particle, Particles};
pub use player::{Locomotion, Player};
pub use pool::{Pool, SlotId};
pub use spawner::{Pacing, Spawner};
pub use state::{GameEvent, GamePhase, RenderSnapshot, Session, ToneHint};
pub use tick::TickInput;
