//! Single active timed effect
//!
//! Picking up any booster overwrites the current effect and restarts the
//! timer. The speed multiplier is applied on activation and divided back out
//! only when a speed effect expires. It is not idempotent:
//! - two speed pickups in a row compound, and one division follows expiry
//! - a speed pickup overwritten by any other kind keeps its boost after that
//!   effect expires, since expiry only looks at the last kind
//! - a consumed shield clears the slot without dividing, even when the slot
//!   holds a speed effect
//!
//! The boost stays until the next difficulty step recomputes the speed.

use serde::{Deserialize, Serialize};

use super::booster::BoosterKind;
use crate::consts::{EFFECT_DURATION, SPEED_BOOST};

/// The effect currently running and its remaining time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffect {
    pub kind: BoosterKind,
    pub remaining: f32,
}

/// Active power-up state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Effects {
    pub active: Option<ActiveEffect>,
    pub shield: bool,
    pub magnet: bool,
}

impl Effects {
    /// Start (or restart) an effect. Returns the new game speed.
    pub fn activate(&mut self, kind: BoosterKind, game_speed: f32) -> f32 {
        self.active = Some(ActiveEffect {
            kind,
            remaining: EFFECT_DURATION,
        });
        log::debug!("Booster {} active for {}s", kind.as_str(), EFFECT_DURATION);

        match kind {
            BoosterKind::Shield => {
                self.shield = true;
                game_speed
            }
            BoosterKind::Magnet => {
                self.magnet = true;
                game_speed
            }
            BoosterKind::Speed => game_speed * SPEED_BOOST,
            BoosterKind::Fly => game_speed,
        }
    }

    /// Count the active effect down. Returns the (possibly restored) game speed.
    ///
    /// On expiry all flags clear; speed is divided back out but never below
    /// `floor`, the difficulty-derived speed.
    pub fn update(&mut self, dt: f32, game_speed: f32, floor: f32) -> f32 {
        let Some(effect) = &mut self.active else {
            return game_speed;
        };

        effect.remaining -= dt;
        if effect.remaining > 0.0 {
            return game_speed;
        }

        let kind = effect.kind;
        self.clear();
        log::debug!("Booster {} expired", kind.as_str());

        if kind == BoosterKind::Speed {
            (game_speed / SPEED_BOOST).max(floor)
        } else {
            game_speed
        }
    }

    /// Spend the shield on a fatal hit. Ends the whole active effect.
    pub fn consume_shield(&mut self) -> bool {
        if !self.shield {
            return false;
        }
        self.clear();
        true
    }

    /// Orchestrator gate for the player's flight state
    pub fn flying(&self) -> bool {
        self.is_active(BoosterKind::Fly)
    }

    pub fn is_active(&self, kind: BoosterKind) -> bool {
        self.active.is_some_and(|e| e.kind == kind)
    }

    fn clear(&mut self) {
        self.active = None;
        self.shield = false;
        self.magnet = false;
    }
}
