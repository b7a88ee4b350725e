// Per-profile processing status tracking

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Display name used for the base (non-profile) configuration
pub const NORMAL_CONFIGURATION_NAME: &str = "normal configuration";

/// Identifier of a host configuration profile
///
/// `None` inside stands for the normal configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId(Option<String>);

impl ProfileId {
    pub fn normal() -> Self {
        Self(None)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self(Some(name.into()))
    }

    /// Empty names map to the normal configuration
    pub fn from_optional(name: Option<&str>) -> Self {
        match name {
            Some(name) if !name.trim().is_empty() => Self::named(name.trim()),
            _ => Self::normal(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or(NORMAL_CONFIGURATION_NAME))
    }
}

/// Whether digit processing is active for a profile, and why
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ProcessingStatus {
    /// Filter passes text through untouched
    #[default]
    Disabled,
    /// Enabled because the profile's auto-enable option is set
    AutoEnabled,
    /// Enabled by the user's toggle command
    ManualEnabled,
}

impl ProcessingStatus {
    pub fn is_enabled(self) -> bool {
        self != ProcessingStatus::Disabled
    }

    /// Transition applied when a profile's configuration is (re)loaded
    ///
    /// Auto-enable forces `AutoEnabled`; revoking it turns an auto-enabled
    /// profile off. Manual choices otherwise survive.
    pub fn after_config_load(self, auto_enable: bool) -> Self {
        match (auto_enable, self) {
            (true, _) => ProcessingStatus::AutoEnabled,
            (false, ProcessingStatus::AutoEnabled) => ProcessingStatus::Disabled,
            (false, status) => status,
        }
    }

    /// Transition applied by the user's toggle command
    pub fn toggled(self) -> Self {
        match self {
            ProcessingStatus::Disabled | ProcessingStatus::AutoEnabled => {
                ProcessingStatus::ManualEnabled
            }
            ProcessingStatus::ManualEnabled => ProcessingStatus::Disabled,
        }
    }
}

/// Explicit record of which profile is active
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileContext {
    active: ProfileId,
}

impl ProfileContext {
    pub fn new(active: ProfileId) -> Self {
        Self { active }
    }

    pub fn active(&self) -> &ProfileId {
        &self.active
    }

    /// Make `profile` active, returning the previously active one
    pub fn switch_to(&mut self, profile: ProfileId) -> ProfileId {
        std::mem::replace(&mut self.active, profile)
    }
}

/// Processing status per profile
///
/// Entries are created on first reference and only removed in bulk.
#[derive(Debug, Default)]
pub struct StatusMap {
    statuses: HashMap<ProfileId, ProcessingStatus>,
}

impl StatusMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status for a profile; unseen profiles are `Disabled`
    pub fn get(&self, profile: &ProfileId) -> ProcessingStatus {
        self.statuses.get(profile).copied().unwrap_or_default()
    }

    /// Whether the profile has been referenced since the last clear
    pub fn has_seen(&self, profile: &ProfileId) -> bool {
        self.statuses.contains_key(profile)
    }

    pub fn set(&mut self, profile: &ProfileId, status: ProcessingStatus) {
        let previous = self.statuses.insert(profile.clone(), status);
        if previous != Some(status) {
            crate::debug!(
                "Processing status for {} changed: {:?} -> {:?}",
                profile,
                previous.unwrap_or_default(),
                status
            );
        }
    }

    pub fn on_config_load(&mut self, profile: &ProfileId, auto_enable: bool) -> ProcessingStatus {
        let status = self.get(profile).after_config_load(auto_enable);
        self.set(profile, status);
        status
    }

    /// Derive status when a profile becomes active
    ///
    /// The first visit applies the configuration-load rule. Later visits keep
    /// the remembered status, except that revoked auto-enable still turns an
    /// auto-enabled profile off.
    pub fn on_profile_enter(&mut self, profile: &ProfileId, auto_enable: bool) -> ProcessingStatus {
        if !self.has_seen(profile) {
            return self.on_config_load(profile, auto_enable);
        }

        let status = match self.get(profile) {
            ProcessingStatus::AutoEnabled if !auto_enable => ProcessingStatus::Disabled,
            status => status,
        };
        self.set(profile, status);
        status
    }

    pub fn toggle(&mut self, profile: &ProfileId) -> ProcessingStatus {
        let status = self.get(profile).toggled();
        self.set(profile, status);
        status
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn clear(&mut self) {
        self.statuses.clear();
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
