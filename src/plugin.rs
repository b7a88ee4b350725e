// Host integration - wires settings, filter state, toggle gesture and announcements
//
// The host owns one plugin instance, calls filter_sequence for every utterance
// and forwards profile switches, gesture presses and settings dialog results.

use std::time::Instant;

use crate::events::{toggle_message, Announcer};
use crate::hotkey::DoubleTapDetector;
use crate::processing::{FilterState, ProcessingStatus, ProfileId};
use crate::settings::{QuickSettingsPrompt, SettingsError, SettingsPanel, SettingsSource};
use crate::speech::SpeechSequence;

/// What a press of the toggle gesture did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Status flipped and announced
    Toggled(ProcessingStatus),
    /// Second press in the repeat window: previous status restored, prompt requested
    QuickSettingsRequested(QuickSettingsPrompt),
}

/// Number processing as seen by the host application
pub struct NumberProcessingPlugin<S: SettingsSource, A: Announcer> {
    state: FilterState,
    settings: S,
    announcer: A,
    toggle_detector: DoubleTapDetector,
    /// Status before the latest single press, restored if it turns into a double press
    status_before_press: Option<ProcessingStatus>,
}

impl<S: SettingsSource, A: Announcer> NumberProcessingPlugin<S, A> {
    /// Start up for the profile active at launch
    pub fn new(settings: S, announcer: A, profile: ProfileId) -> Self {
        let profile_settings = settings.settings_for(&profile);
        let state = FilterState::initialize(&profile_settings, profile);

        Self {
            state,
            settings,
            announcer,
            toggle_detector: DoubleTapDetector::default(),
            status_before_press: None,
        }
    }

    /// Use a different repeat window for the toggle gesture
    pub fn with_toggle_detector(mut self, detector: DoubleTapDetector) -> Self {
        self.toggle_detector = detector;
        self
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn settings_source(&self) -> &S {
        &self.settings
    }

    pub fn status(&self) -> ProcessingStatus {
        self.state.status()
    }

    pub fn filter_sequence(&self, sequence: SpeechSequence) -> SpeechSequence {
        self.state.filter_sequence(sequence)
    }

    /// Host notification that the active configuration profile changed
    pub fn handle_profile_switch(&mut self, profile: ProfileId) -> ProcessingStatus {
        let profile_settings = self.settings.settings_for(&profile);
        self.toggle_detector.reset();
        self.status_before_press = None;
        self.state.on_profile_switch(profile, &profile_settings)
    }

    /// Toggle gesture pressed now
    pub fn script_toggle(&mut self) -> ToggleOutcome {
        self.script_toggle_at(Instant::now())
    }

    /// Toggle gesture pressed at `now`
    ///
    /// A single press toggles and announces. A second press inside the repeat
    /// window undoes the first one silently and asks for the quick settings prompt.
    pub fn script_toggle_at(&mut self, now: Instant) -> ToggleOutcome {
        if self.toggle_detector.on_tap_at(now) {
            if let Some(previous) = self.status_before_press.take() {
                self.state.restore_status(previous);
            }
            crate::debug!("Toggle repeated, opening quick settings");
            return ToggleOutcome::QuickSettingsRequested(self.quick_settings());
        }

        self.status_before_press = Some(self.state.status());
        let status = self.state.toggle();
        self.announcer.announce(toggle_message(status));
        ToggleOutcome::Toggled(status)
    }

    /// Settings panel populated from the active profile
    pub fn settings_panel(&self) -> SettingsPanel {
        SettingsPanel::from_settings(&self.settings.settings_for(self.state.active_profile()))
    }

    /// Store panel values for the active profile and apply them
    pub fn save_settings_panel(
        &mut self,
        panel: SettingsPanel,
    ) -> Result<ProcessingStatus, SettingsError> {
        let settings = panel.into_settings()?;
        self.settings
            .save_settings(self.state.active_profile(), settings)?;
        Ok(self.state.apply_settings(&settings))
    }

    /// Quick settings prompt for the active profile
    pub fn quick_settings(&self) -> QuickSettingsPrompt {
        let profile = self.state.active_profile().clone();
        let settings = self.settings.settings_for(&profile);
        QuickSettingsPrompt::new(profile, &settings)
    }

    /// Store the prompt's minimum length and recompile if it targets the active profile
    pub fn save_quick_settings(&mut self, prompt: &QuickSettingsPrompt) -> Result<(), SettingsError> {
        let current = self.settings.settings_for(&prompt.profile);
        let updated = prompt.apply_to(current)?;
        self.settings.save_settings(&prompt.profile, updated)?;

        if &prompt.profile == self.state.active_profile() {
            self.state.set_min_run_length(updated.run_length());
        }
        Ok(())
    }

    /// Host is unloading the plugin
    pub fn terminate(self) {
        self.state.shutdown();
    }
}

#[cfg(test)]
#[path = "plugin_test.rs"]
mod tests;
