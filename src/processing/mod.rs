// Filter lifecycle - owns the pattern snapshot, per-profile status and active profile
//
// Hosts call initialize once, then feed utterances through filter_sequence and
// forward profile switches, settings changes and toggle presses.

pub mod state;

pub use state::{ProcessingStatus, ProfileContext, ProfileId, StatusMap};

use std::sync::Arc;

use crate::digits::{self, CompiledPatterns, MinimumRunLength};
use crate::settings::NumberProcessingSettings;
use crate::speech::SpeechSequence;

/// Everything the filter needs between calls
#[derive(Debug)]
pub struct FilterState {
    /// Current snapshot; replaced whole on reconfiguration
    patterns: Arc<CompiledPatterns>,
    /// Auto-enable option of the active profile
    auto_enable: bool,
    statuses: StatusMap,
    profile: ProfileContext,
}

impl FilterState {
    /// Build the state for the profile active at startup
    pub fn initialize(settings: &NumberProcessingSettings, profile: ProfileId) -> Self {
        let patterns = compile_or_default(settings.run_length());
        let mut statuses = StatusMap::new();
        let status = statuses.on_config_load(&profile, settings.auto_enable);

        crate::info!(
            "Number processing initialized for {} ({:?}, minimum run length {})",
            profile,
            status,
            patterns.min_run_length().get()
        );

        Self {
            patterns,
            auto_enable: settings.auto_enable,
            statuses,
            profile: ProfileContext::new(profile),
        }
    }

    pub fn active_profile(&self) -> &ProfileId {
        self.profile.active()
    }

    pub fn status(&self) -> ProcessingStatus {
        self.statuses.get(self.profile.active())
    }

    /// True unless the active profile is `Disabled`
    pub fn is_active(&self) -> bool {
        self.status().is_enabled()
    }

    pub fn auto_enable(&self) -> bool {
        self.auto_enable
    }

    pub fn patterns(&self) -> Arc<CompiledPatterns> {
        Arc::clone(&self.patterns)
    }

    /// Apply freshly saved settings to the active profile
    ///
    /// Recompiles when the minimum run length changed and re-runs the
    /// configuration-load transition.
    pub fn apply_settings(&mut self, settings: &NumberProcessingSettings) -> ProcessingStatus {
        self.reconfigure(settings.run_length());
        self.auto_enable = settings.auto_enable;
        self.statuses
            .on_config_load(self.profile.active(), settings.auto_enable)
    }

    /// Change only the minimum run length, leaving every status alone
    pub fn set_min_run_length(&mut self, min_run_length: MinimumRunLength) {
        self.reconfigure(min_run_length);
    }

    /// Switch to another profile using that profile's settings
    pub fn on_profile_switch(
        &mut self,
        profile: ProfileId,
        settings: &NumberProcessingSettings,
    ) -> ProcessingStatus {
        let previous = self.profile.switch_to(profile);
        crate::info!("Profile switched from {} to {}", previous, self.profile.active());

        self.reconfigure(settings.run_length());
        self.auto_enable = settings.auto_enable;
        self.statuses
            .on_profile_enter(self.profile.active(), settings.auto_enable)
    }

    /// User toggle for the active profile
    pub fn toggle(&mut self) -> ProcessingStatus {
        self.statuses.toggle(self.profile.active())
    }

    /// Put the active profile back into a previously observed status
    pub fn restore_status(&mut self, status: ProcessingStatus) {
        self.statuses.set(self.profile.active(), status);
    }

    /// Rewrite an utterance when processing is active, otherwise return it as is
    pub fn filter_sequence(&self, sequence: SpeechSequence) -> SpeechSequence {
        if !self.is_active() {
            return sequence;
        }
        digits::filter_sequence(&self.patterns, sequence)
    }

    /// Tear down: forget every profile's status
    pub fn shutdown(mut self) {
        crate::info!(
            "Number processing shutting down, clearing {} profile status(es)",
            self.statuses.len()
        );
        self.statuses.clear();
    }

    /// Swap in patterns for a new minimum length, keeping the old ones on failure
    fn reconfigure(&mut self, min_run_length: MinimumRunLength) {
        if self.patterns.min_run_length() == min_run_length {
            return;
        }

        match CompiledPatterns::compile(min_run_length) {
            Ok(patterns) => {
                crate::info!(
                    "Minimum digit run length changed {} -> {}",
                    self.patterns.min_run_length().get(),
                    min_run_length.get()
                );
                self.patterns = Arc::new(patterns);
            }
            Err(e) => {
                crate::warn!(
                    "Keeping minimum run length {}: {}",
                    self.patterns.min_run_length().get(),
                    e
                );
            }
        }
    }
}

fn compile_or_default(min_run_length: MinimumRunLength) -> Arc<CompiledPatterns> {
    match CompiledPatterns::compile(min_run_length) {
        Ok(patterns) => Arc::new(patterns),
        Err(e) => {
            crate::warn!("Falling back to default minimum run length: {}", e);
            Arc::new(CompiledPatterns::default())
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
