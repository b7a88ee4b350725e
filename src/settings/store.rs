// Settings store - persists the normal configuration and per-profile overrides
// Follows the same file-based persistence pattern as the other JSON stores:
// load on demand, atomic temp file + rename on every write

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{NumberProcessingSettings, SettingsError, SettingsSource};
use crate::processing::state::ProfileId;

/// Directory name under the platform config dir
const CONFIG_DIR_NAME: &str = "number-processing";

/// Settings file name
const SETTINGS_FILE_NAME: &str = "settings.json";

/// On-disk layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsDocument {
    #[serde(default)]
    normal: NumberProcessingSettings,
    #[serde(default)]
    profiles: BTreeMap<String, NumberProcessingSettings>,
}

/// Default settings file location, e.g. `~/.config/number-processing/settings.json`
pub fn default_settings_path() -> Result<PathBuf, SettingsError> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(SETTINGS_FILE_NAME))
        .ok_or_else(|| {
            SettingsError::LoadError("Could not determine config directory".to_string())
        })
}

/// Store for number processing settings with file-based persistence
#[derive(Debug)]
pub struct SettingsStore {
    document: SettingsDocument,
    /// Path to persistence file
    config_path: PathBuf,
}

impl SettingsStore {
    /// Create a new store with the given config path
    pub fn new(config_path: PathBuf) -> Self {
        Self {
            document: SettingsDocument::default(),
            config_path,
        }
    }

    /// Create a store using the default config path
    pub fn with_default_path() -> Result<Self, SettingsError> {
        Ok(Self::new(default_settings_path()?))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load settings from the persistence file
    ///
    /// A missing file leaves the defaults in place.
    pub fn load(&mut self) -> Result<(), SettingsError> {
        crate::debug!("Loading settings from {:?}", self.config_path);

        if !self.config_path.exists() {
            crate::debug!("No settings file found, using defaults");
            self.document = SettingsDocument::default();
            return Ok(());
        }

        let content = fs::read_to_string(&self.config_path)
            .map_err(|e| SettingsError::LoadError(e.to_string()))?;

        self.document = serde_json::from_str(&content)
            .map_err(|e| SettingsError::LoadError(e.to_string()))?;

        crate::info!(
            "Loaded settings with {} profile override(s)",
            self.document.profiles.len()
        );
        Ok(())
    }

    /// Persist settings using atomic write (temp file + rename)
    fn save(&self) -> Result<(), SettingsError> {
        crate::debug!("Persisting settings to {:?}", self.config_path);

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| SettingsError::PersistenceError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(&self.document)
            .map_err(|e| SettingsError::PersistenceError(e.to_string()))?;

        let temp_path = self.config_path.with_extension("tmp");

        {
            let mut file = File::create(&temp_path).map_err(|e| {
                SettingsError::PersistenceError(format!("Failed to create temp file: {}", e))
            })?;
            file.write_all(content.as_bytes()).map_err(|e| {
                SettingsError::PersistenceError(format!("Failed to write: {}", e))
            })?;
            file.sync_all().map_err(|e| {
                SettingsError::PersistenceError(format!("Failed to sync: {}", e))
            })?;
        }

        fs::rename(&temp_path, &self.config_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SettingsError::PersistenceError(format!("Failed to rename: {}", e))
        })?;

        crate::debug!("Settings persisted successfully");
        Ok(())
    }

    /// Names of profiles that carry their own settings
    pub fn profile_names(&self) -> Vec<&str> {
        self.document.profiles.keys().map(String::as_str).collect()
    }
}

impl SettingsSource for SettingsStore {
    fn settings_for(&self, profile: &ProfileId) -> NumberProcessingSettings {
        profile
            .name()
            .and_then(|name| self.document.profiles.get(name))
            .copied()
            .unwrap_or(self.document.normal)
    }

    fn save_settings(
        &mut self,
        profile: &ProfileId,
        settings: NumberProcessingSettings,
    ) -> Result<(), SettingsError> {
        match profile.name() {
            Some(name) => {
                self.document.profiles.insert(name.to_string(), settings);
            }
            None => self.document.normal = settings,
        }
        self.save()
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
