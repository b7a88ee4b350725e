// Toggle gesture definition and repeat detection

pub mod double_tap;

pub use double_tap::{DoubleTapDetector, DEFAULT_DOUBLE_TAP_WINDOW_MS};

/// Gesture bound to the toggle command
pub const TOGGLE_GESTURE: &str = "kb:NVDA+shift+l";

/// Help text shown by the host's input help
pub const TOGGLE_DESCRIPTION: &str =
    "Pressed once, enables/disables digit processing; twice, launches quick settings";
