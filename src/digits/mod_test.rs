use super::*;
use crate::speech::ControlMarker;

#[test]
fn test_filter_sequence_rewrites_only_text() {
    let patterns = CompiledPatterns::default();
    let sequence: SpeechSequence = vec![
        "order 4711".into(),
        ControlMarker::Break { duration_ms: 100 }.into(),
        "costs $ 20".into(),
        ControlMarker::Index { index: 9 }.into(),
        "thanks".into(),
    ];

    let filtered = filter_sequence(&patterns, sequence);

    assert_eq!(
        filtered,
        vec![
            TextFragment::from("order 4  7  1  1"),
            TextFragment::Control(ControlMarker::Break { duration_ms: 100 }),
            TextFragment::from("costs 2  0$"),
            TextFragment::Control(ControlMarker::Index { index: 9 }),
            TextFragment::from("thanks"),
        ]
    );
}

#[test]
fn test_filter_sequence_preserves_empty_sequence() {
    let patterns = CompiledPatterns::default();
    assert!(filter_sequence(&patterns, Vec::new()).is_empty());
}

#[test]
fn test_filter_sequence_without_digits_is_identity() {
    let patterns = CompiledPatterns::default();
    let sequence: SpeechSequence = vec![
        "no numbers here".into(),
        ControlMarker::Pitch { offset: 10 }.into(),
        "".into(),
    ];

    assert_eq!(filter_sequence(&patterns, sequence.clone()), sequence);
}
