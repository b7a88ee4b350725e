// Edit models backing the settings panel and the quick settings prompt
// Input is validated here; the filter core clamps independently

use super::{NumberProcessingSettings, SettingsError};
use crate::digits::patterns::MIN_ALLOWED_RUN_LENGTH;
use crate::processing::state::ProfileId;

/// Title shared by both settings surfaces
pub const SETTINGS_TITLE: &str = "Number Processing Settings";

fn validate_min_run_length(value: i64) -> Result<(), SettingsError> {
    if value < MIN_ALLOWED_RUN_LENGTH as i64 {
        return Err(SettingsError::InvalidMinRunLength(value));
    }
    Ok(())
}

/// Full settings panel exposing both values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsPanel {
    /// "Processing automatically enabled"
    pub auto_enable: bool,
    /// "Minimum number of digits to process individually"
    pub min_run_length: i64,
}

impl SettingsPanel {
    pub fn from_settings(settings: &NumberProcessingSettings) -> Self {
        Self {
            auto_enable: settings.auto_enable,
            min_run_length: settings.min_run_length,
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_min_run_length(self.min_run_length)
    }

    /// Validated settings ready to store
    pub fn into_settings(self) -> Result<NumberProcessingSettings, SettingsError> {
        self.validate()?;
        Ok(NumberProcessingSettings {
            auto_enable: self.auto_enable,
            min_run_length: self.min_run_length,
        })
    }
}

/// Transient prompt editing only the minimum run length of one profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickSettingsPrompt {
    pub title: String,
    pub profile: ProfileId,
    pub min_run_length: i64,
}

impl QuickSettingsPrompt {
    pub fn new(profile: ProfileId, settings: &NumberProcessingSettings) -> Self {
        Self {
            title: format!("{} - {}", SETTINGS_TITLE, profile),
            profile,
            min_run_length: settings.min_run_length,
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_min_run_length(self.min_run_length)
    }

    /// Apply the edited length on top of existing settings
    pub fn apply_to(
        &self,
        settings: NumberProcessingSettings,
    ) -> Result<NumberProcessingSettings, SettingsError> {
        self.validate()?;
        Ok(NumberProcessingSettings {
            min_run_length: self.min_run_length,
            ..settings
        })
    }
}

#[cfg(test)]
#[path = "panel_test.rs"]
mod tests;
