//! High score and mute persistence
//!
//! Two scalar keys (`highScore`, `muted`), JSON encoded, behind a small
//! key-value [`Storage`] trait:
//! - `MemoryStorage` for tests and as a last-resort fallback
//! - `FileStorage` on native (single JSON file, written via tmp + rename)
//! - `LocalStorage` on the web
//!
//! Storage failures never reach the simulation. [`Persistence`] logs them and
//! hands back defaults (zero high score, sound on).

use std::collections::HashMap;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

const HIGH_SCORE_KEY: &str = "highScore";
const MUTED_KEY: &str = "muted";

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Raw key-value backend
pub trait Storage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).save(key, value)
    }
}

/// What the session needs from persistence at game over
pub trait HighScoreKeeper {
    /// Stored best score (0 when unknown)
    fn high_score(&self) -> u64;
    /// Store `score` only if it beats the current best. Returns whether it did.
    fn save_high_score(&mut self, score: u64) -> bool;
}

/// Typed facade over a [`Storage`] backend that never fails
#[derive(Debug, Clone, Default)]
pub struct Persistence<S> {
    storage: S,
}

impl<S: Storage> Persistence<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn read<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.storage.load(key)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn write<T: serde::Serialize>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        self.storage.save(key, &json)
    }

    pub fn muted(&self) -> bool {
        self.read(MUTED_KEY)
            .unwrap_or_else(|e| {
                log::warn!("Could not read mute flag: {}", e);
                None
            })
            .unwrap_or(false)
    }

    pub fn set_muted(&mut self, muted: bool) {
        if let Err(e) = self.write(MUTED_KEY, &muted) {
            log::warn!("Could not save mute flag: {}", e);
        }
    }
}

impl<S: Storage> HighScoreKeeper for Persistence<S> {
    fn high_score(&self) -> u64 {
        self.read(HIGH_SCORE_KEY)
            .unwrap_or_else(|e| {
                log::warn!("Could not read high score: {}", e);
                None
            })
            .unwrap_or(0)
    }

    /// A record still counts as beaten if the write itself fails
    fn save_high_score(&mut self, score: u64) -> bool {
        if score <= self.high_score() {
            return false;
        }
        match self.write(HIGH_SCORE_KEY, &score) {
            Ok(()) => log::info!("New high score saved: {}", score),
            Err(e) => log::warn!("Could not save high score: {}", e),
        }
        true
    }
}
