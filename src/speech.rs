// Speech sequence types passed between the host's speech composer and the filter

use serde::{Deserialize, Serialize};

/// Non-text instruction embedded in a speech sequence
///
/// The filter never inspects these; they are carried through in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ControlMarker {
    /// Silence of the given length
    #[serde(rename_all = "camelCase")]
    Break { duration_ms: u32 },
    /// Relative pitch change for the following text
    Pitch { offset: i32 },
    /// Index marker reported back by the synthesizer when reached
    Index { index: u32 },
    /// Spell following text character by character
    CharacterMode { enabled: bool },
}

/// One atomic item of an utterance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextFragment {
    Text(String),
    Control(ControlMarker),
}

impl TextFragment {
    /// Borrow the text if this is a text fragment
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TextFragment::Text(text) => Some(text),
            TextFragment::Control(_) => None,
        }
    }
}

impl From<&str> for TextFragment {
    fn from(text: &str) -> Self {
        TextFragment::Text(text.to_string())
    }
}

impl From<String> for TextFragment {
    fn from(text: String) -> Self {
        TextFragment::Text(text)
    }
}

impl From<ControlMarker> for TextFragment {
    fn from(marker: ControlMarker) -> Self {
        TextFragment::Control(marker)
    }
}

/// Ordered fragments making up one utterance
pub type SpeechSequence = Vec<TextFragment>;

#[cfg(test)]
#[path = "speech_test.rs"]
mod tests;
