//! Run configuration
//!
//! Loaded from JSON; any missing field falls back to its default.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_FRAME_DT, PARTICLE_POOL_SIZE};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    /// Particles pre-allocated by the pool for this preset
    pub fn particle_pool_size(&self) -> usize {
        match self {
            QualityPreset::Low => PARTICLE_POOL_SIZE / 2,
            QualityPreset::Medium => PARTICLE_POOL_SIZE,
            QualityPreset::High => PARTICLE_POOL_SIZE * 4,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed run seed (None = pick one at startup)
    pub seed: Option<u64>,
    /// Particle pool preset
    pub quality: QualityPreset,
    /// Particle effects (dust, pickups, shield break)
    pub particles: bool,
    /// Camera shake on hits
    pub screen_shake: bool,
    /// Reduced motion (suppresses shake)
    pub reduced_motion: bool,
    /// Largest frame delta integrated in one update
    pub max_frame_dt: f32,
    /// Audio master volume (0.0 - 1.0)
    pub master_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            quality: QualityPreset::Medium,
            particles: true,
            screen_shake: true,
            reduced_motion: false,
            max_frame_dt: MAX_FRAME_DT,
            master_volume: 1.0,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    pub fn particle_pool_size(&self) -> usize {
        if self.particles {
            self.quality.particle_pool_size()
        } else {
            0
        }
    }

    /// Replace a non-positive or NaN frame cap with the default
    pub fn validated(mut self) -> Self {
        if self.max_frame_dt.is_nan() || self.max_frame_dt <= 0.0 {
            log::warn!("Ignoring max_frame_dt {}", self.max_frame_dt);
            self.max_frame_dt = MAX_FRAME_DT;
        }
        self
    }

    /// Parse settings JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.validated())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "quality": "High" }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.quality, QualityPreset::High);
        assert!(settings.particles);
        assert_eq!(settings.max_frame_dt, MAX_FRAME_DT);
    }

    #[test]
    fn test_bad_frame_cap_replaced() {
        let settings = Settings::from_json(r#"{ "max_frame_dt": -1.0 }"#).unwrap();
        assert_eq!(settings.max_frame_dt, MAX_FRAME_DT);
    }

    #[test]
    fn test_validated_frame_cap() {
        let nan = Settings {
            max_frame_dt: f32::NAN,
            ..Settings::default()
        };
        assert_eq!(nan.validated().max_frame_dt, MAX_FRAME_DT);
        let custom = Settings {
            max_frame_dt: 0.05,
            ..Settings::default()
        };
        assert_eq!(custom.validated().max_frame_dt, 0.05);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_reduced_motion_disables_shake() {
        let settings = Settings {
            reduced_motion: true,
            ..Settings::default()
        };
        assert!(!settings.effective_screen_shake());
    }

    #[test]
    fn test_particle_pool_size() {
        assert_eq!(Settings::from_preset(QualityPreset::High).particle_pool_size(), 80);
        let off = Settings {
            particles: false,
            ..Settings::default()
        };
        assert_eq!(off.particle_pool_size(), 0);
    }

    #[test]
    fn test_json_round_trip_keeps_seed() {
        let settings = Settings {
            seed: Some(7),
            ..Settings::default()
        };
        let parsed = Settings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(parsed.seed, Some(7));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_load_missing_file_defaults() {
        let settings = Settings::load(std::path::Path::new("/nonexistent/settings.json"));
        assert_eq!(settings.quality, QualityPreset::Medium);
    }
}
