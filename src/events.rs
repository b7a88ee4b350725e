// User-facing announcements
// Defines message texts and the announcement trait for testability

use crate::processing::ProcessingStatus;

/// Announcement texts as constants for consistency
pub mod messages {
    pub const PROCESSING_ON: &str = "Digit processing on";
    pub const PROCESSING_OFF: &str = "Digit processing off";
}

/// Message announced after a toggle leaves the profile in `status`
pub fn toggle_message(status: ProcessingStatus) -> &'static str {
    if status.is_enabled() {
        messages::PROCESSING_ON
    } else {
        messages::PROCESSING_OFF
    }
}

/// Trait for speaking short messages to the user
/// Allows mocking in tests while the host's UI reports them in production
pub trait Announcer {
    fn announce(&self, message: &str);
}

/// Announcer that only logs, for hosts without speech output
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAnnouncer;

impl Announcer for LogAnnouncer {
    fn announce(&self, message: &str) {
        crate::info!("{}", message);
    }
}

#[cfg(test)]
#[path = "events_test.rs"]
pub(crate) mod tests;
