// Digit segmentation filter - makes synthesizers read long numbers digit by digit

pub mod matcher;
pub mod patterns;
pub mod rewriter;

pub use patterns::{CompiledPatterns, MinimumRunLength, PatternError, CURRENCY_SYMBOLS};
pub use rewriter::process_text;

use std::borrow::Cow;

use crate::speech::{SpeechSequence, TextFragment};

/// Rewrite every text fragment of an utterance
///
/// Control markers keep their position; sequence length never changes.
pub fn filter_sequence(patterns: &CompiledPatterns, sequence: SpeechSequence) -> SpeechSequence {
    sequence
        .into_iter()
        .map(|fragment| match fragment {
            TextFragment::Text(text) => {
                let rewritten = match process_text(&text, patterns) {
                    Cow::Owned(rewritten) => Some(rewritten),
                    Cow::Borrowed(_) => None,
                };
                match rewritten {
                    Some(rewritten) => {
                        crate::trace!("Rewrote fragment {:?} -> {:?}", text, rewritten);
                        TextFragment::Text(rewritten)
                    }
                    None => TextFragment::Text(text),
                }
            }
            control => control,
        })
        .collect()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
