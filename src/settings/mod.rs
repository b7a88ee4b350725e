//! Number processing settings.
//!
//! This module provides:
//! - `NumberProcessingSettings`: the two persisted values
//! - `SettingsSource`: the seam the host configuration store sits behind
//! - `SettingsStore`: JSON file backed store with per-profile overrides
//! - `SettingsPanel` / `QuickSettingsPrompt`: edit models validated at the UI boundary

mod panel;
mod store;

pub use panel::{QuickSettingsPrompt, SettingsPanel};
pub use store::{default_settings_path, SettingsStore};

use serde::{Deserialize, Serialize};

use crate::digits::patterns::{MinimumRunLength, DEFAULT_MIN_RUN_LENGTH};
use crate::processing::state::ProfileId;

/// Persisted configuration for one profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberProcessingSettings {
    /// Enable processing automatically when the profile loads
    #[serde(default)]
    pub auto_enable: bool,
    /// Minimum number of digits read individually
    #[serde(default = "default_min_run_length", alias = "userMinLen")]
    pub min_run_length: i64,
}

impl Default for NumberProcessingSettings {
    fn default() -> Self {
        Self {
            auto_enable: false,
            min_run_length: default_min_run_length(),
        }
    }
}

impl NumberProcessingSettings {
    /// Minimum run length with the core's clamping applied
    pub fn run_length(&self) -> MinimumRunLength {
        MinimumRunLength::new(self.min_run_length)
    }
}

fn default_min_run_length() -> i64 {
    DEFAULT_MIN_RUN_LENGTH as i64
}

/// Error types for settings operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    /// Minimum run length below the allowed floor
    #[error("Minimum digit run length must be at least 2, got {0}")]
    InvalidMinRunLength(i64),
    /// Failed to persist settings
    #[error("Failed to persist settings: {0}")]
    PersistenceError(String),
    /// Failed to load settings
    #[error("Failed to load settings: {0}")]
    LoadError(String),
}

/// Read/write access to per-profile settings
///
/// Implemented by `SettingsStore`; tests substitute in-memory sources.
pub trait SettingsSource {
    /// Effective settings for a profile (profile override or normal configuration)
    fn settings_for(&self, profile: &ProfileId) -> NumberProcessingSettings;

    /// Store settings for a profile
    fn save_settings(
        &mut self,
        profile: &ProfileId,
        settings: NumberProcessingSettings,
    ) -> Result<(), SettingsError>;
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
