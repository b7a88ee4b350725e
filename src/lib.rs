// Number processing: rewrites digit runs in outgoing speech so synthesizers
// read them digit by digit ("12345" -> "1  2  3  4  5").

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod digits;
pub mod events;
pub mod hotkey;
pub mod plugin;
pub mod processing;
pub mod settings;
pub mod speech;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use digits::{filter_sequence, process_text, CompiledPatterns, MinimumRunLength};
pub use events::{Announcer, LogAnnouncer};
pub use plugin::{NumberProcessingPlugin, ToggleOutcome};
pub use processing::{FilterState, ProcessingStatus, ProfileId};
pub use settings::{NumberProcessingSettings, SettingsError, SettingsSource, SettingsStore};
pub use speech::{ControlMarker, SpeechSequence, TextFragment};
