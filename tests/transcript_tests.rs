// Unit tests for the transcript aggregator
//
// These tests verify the final/interim fold semantics: append-only finalized
// text, wholesale interim replacement, and the idempotent end-of-session
// flush.

use speech_session::{Hypothesis, RecognitionEvent, TranscriptAggregator};

fn interim(text: &str) -> Hypothesis {
    Hypothesis {
        text: text.to_string(),
        is_final: false,
    }
}

fn finalized(text: &str) -> Hypothesis {
    Hypothesis {
        text: text.to_string(),
        is_final: true,
    }
}

fn event(start_index: usize, segments: Vec<Hypothesis>) -> RecognitionEvent {
    RecognitionEvent {
        start_index,
        segments,
    }
}

#[test]
fn test_final_segments_append_in_arrival_order() {
    let mut aggregator = TranscriptAggregator::new();

    // Two final segments split across two events; the second event resends
    // the full list with start_index marking the new entry
    aggregator.apply_result(&event(0, vec![finalized("hello")]), true);
    aggregator.apply_result(&event(1, vec![finalized("hello"), finalized("world")]), true);

    assert_eq!(aggregator.finalized(), "hello world ");
    assert_eq!(aggregator.transcript(), "hello world ");
}

#[test]
fn test_final_segments_in_single_event_share_one_space() {
    let mut aggregator = TranscriptAggregator::new();

    // Both segments are new in the same event; their texts concatenate and
    // the batch gets a single trailing space
    aggregator.apply_result(&event(0, vec![finalized("hel"), finalized("lo")]), true);

    assert_eq!(aggregator.finalized(), "hello ");
}

#[test]
fn test_interim_replaced_not_accumulated() {
    let mut aggregator = TranscriptAggregator::new();

    aggregator.apply_result(&event(0, vec![interim("wor")]), true);
    assert_eq!(aggregator.interim(), "wor");

    aggregator.apply_result(&event(0, vec![interim("world")]), true);
    assert_eq!(aggregator.interim(), "world");
    assert_eq!(aggregator.transcript(), "world");
}

#[test]
fn test_final_result_confirms_away_pending_interim() {
    let mut aggregator = TranscriptAggregator::new();

    aggregator.apply_result(&event(0, vec![interim("wor")]), true);
    aggregator.apply_result(&event(0, vec![finalized("world")]), true);

    assert_eq!(aggregator.finalized(), "world ");
    assert_eq!(aggregator.interim(), "");
    assert_eq!(aggregator.transcript(), "world ");
}

#[test]
fn test_resent_finalized_segments_are_skipped() {
    let mut aggregator = TranscriptAggregator::new();

    aggregator.apply_result(&event(0, vec![finalized("hello")]), true);

    // The engine resends the finalized segment alongside the new interim
    // one; start_index excludes it from the fold
    aggregator.apply_result(&event(1, vec![finalized("hello"), interim("wor")]), true);

    assert_eq!(aggregator.transcript(), "hello wor");
    assert!(!aggregator.transcript().contains("hello hello"));
}

#[test]
fn test_interim_discarded_when_disabled() {
    let mut aggregator = TranscriptAggregator::new();

    aggregator.apply_result(&event(0, vec![interim("wor")]), false);
    assert_eq!(aggregator.transcript(), "");

    // Nothing pending, so the end-of-session flush has nothing to promote
    aggregator.flush();
    assert_eq!(aggregator.transcript(), "");
}

#[test]
fn test_final_still_recorded_when_interim_disabled() {
    let mut aggregator = TranscriptAggregator::new();

    aggregator.apply_result(&event(0, vec![interim("wor")]), false);
    aggregator.apply_result(&event(0, vec![finalized("world")]), false);

    assert_eq!(aggregator.transcript(), "world ");
}

#[test]
fn test_flush_promotes_interim_once() {
    let mut aggregator = TranscriptAggregator::new();

    aggregator.apply_result(&event(0, vec![interim("wor")]), true);
    aggregator.flush();

    assert_eq!(aggregator.finalized(), "wor ");
    assert_eq!(aggregator.interim(), "");

    // A second flush finds the interim buffer empty and changes nothing
    aggregator.flush();
    assert_eq!(aggregator.finalized(), "wor ");
    assert_eq!(aggregator.transcript(), "wor ");
}

#[test]
fn test_reset_clears_both_buffers() {
    let mut aggregator = TranscriptAggregator::new();

    aggregator.apply_result(&event(0, vec![finalized("hello"), interim("wor")]), true);
    assert_ne!(aggregator.transcript(), "");

    aggregator.reset();
    assert_eq!(aggregator.finalized(), "");
    assert_eq!(aggregator.interim(), "");
    assert_eq!(aggregator.transcript(), "");
}

#[test]
fn test_start_index_beyond_segment_list_is_a_noop() {
    let mut aggregator = TranscriptAggregator::new();

    aggregator.apply_result(&event(3, vec![finalized("hello")]), true);

    assert_eq!(aggregator.transcript(), "");
}

#[test]
fn test_full_utterance_scenario() {
    // The complete session flow: start, partial, finalize, next utterance,
    // end
    let mut aggregator = TranscriptAggregator::new();
    aggregator.reset();

    aggregator.apply_result(&event(0, vec![finalized("hello")]), true);
    assert_eq!(aggregator.transcript(), "hello ");

    aggregator.apply_result(&event(1, vec![finalized("hello"), interim("wor")]), true);
    assert_eq!(aggregator.transcript(), "hello wor");

    aggregator.apply_result(&event(1, vec![finalized("hello"), finalized("world")]), true);
    assert_eq!(aggregator.transcript(), "hello world ");

    aggregator.flush();
    assert_eq!(aggregator.transcript(), "hello world ");
}
