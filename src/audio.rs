//! Audio collaborator
//!
//! Every simulation event maps to a single procedural tone (see
//! [`GameEvent::tone`]). On the web it is played through the Web Audio API;
//! elsewhere the cue is only traced. Playback failures are swallowed.

use crate::sim::{GameEvent, ToneHint};

#[cfg(target_arch = "wasm32")]
use web_sys::{AudioContext, OscillatorType};

/// Gain at the start of every tone
const TONE_GAIN: f32 = 0.3;
/// Gain the envelope ramps down to
const TONE_FLOOR: f32 = 0.01;

/// Audio manager for the game
pub struct AudioManager {
    #[cfg(target_arch = "wasm32")]
    ctx: Option<AudioContext>,
    master_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            #[cfg(target_arch = "wasm32")]
            ctx: None,
            master_volume: 1.0,
            muted: false,
        }
    }

    /// Create the audio context (browsers require a user gesture first)
    #[cfg(target_arch = "wasm32")]
    pub fn init(&mut self) {
        if self.ctx.is_none() {
            self.ctx = AudioContext::new().ok();
            if self.ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
        }
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn init(&mut self) {}

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }

    /// Play the cue for an event
    pub fn play(&self, event: &GameEvent) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.play_tone(event.tone(), vol);
    }

    /// Sine tone with an exponential fade-out
    #[cfg(target_arch = "wasm32")]
    fn play_tone(&self, tone: ToneHint, vol: f32) {
        let Some(ctx) = &self.ctx else { return };
        let Ok(osc) = ctx.create_oscillator() else {
            return;
        };
        let Ok(gain) = ctx.create_gain() else {
            return;
        };
        if osc.connect_with_audio_node(&gain).is_err()
            || gain.connect_with_audio_node(&ctx.destination()).is_err()
        {
            return;
        }

        let t = ctx.current_time();
        let end = t + tone.duration as f64;
        osc.set_type(OscillatorType::Sine);
        osc.frequency().set_value(tone.frequency);
        gain.gain().set_value_at_time(TONE_GAIN * vol, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(TONE_FLOOR, end)
            .ok();

        osc.start().ok();
        osc.stop_with_when(end).ok();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn play_tone(&self, tone: ToneHint, vol: f32) {
        log::trace!(
            "Tone {}Hz for {}s at {:.2} (fade to {})",
            tone.frequency,
            tone.duration,
            TONE_GAIN * vol,
            TONE_FLOOR
        );
    }
}
