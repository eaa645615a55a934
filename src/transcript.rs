//! Transcript accumulation from partial and final recognition results.

use crate::engine::RecognitionEvent;

/// Pure accumulator turning recognition result batches into displayable text.
///
/// The transcript is held as two buffers: `finalized` text is append-only
/// within a session, while `interim` text is replaced wholesale on every
/// event. The displayed transcript is always recomputed as
/// `finalized + interim`, never cached separately.
#[derive(Debug, Clone, Default)]
pub struct TranscriptAggregator {
    finalized: String,
    interim: String,
}

impl TranscriptAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear both buffers; called on the engine's start acknowledgment
    pub fn reset(&mut self) {
        self.finalized.clear();
        self.interim.clear();
    }

    /// Fold one result batch into the transcript.
    ///
    /// Segments before `event.start_index` were already folded in by an
    /// earlier event and are skipped. Final text is appended to the
    /// finalized transcript (with a trailing space to separate utterances)
    /// and confirms away any pending interim text. Interim text replaces the
    /// interim buffer, or is discarded entirely when `interim_enabled` is
    /// false.
    pub fn apply_result(&mut self, event: &RecognitionEvent, interim_enabled: bool) {
        let mut final_text = String::new();
        let mut interim_text = String::new();

        for segment in event.segments.iter().skip(event.start_index) {
            if segment.is_final {
                final_text.push_str(&segment.text);
            } else {
                interim_text.push_str(&segment.text);
            }
        }

        if !final_text.is_empty() {
            self.finalized.push_str(&final_text);
            self.finalized.push(' ');
            self.interim.clear();
        }

        if !interim_text.is_empty() && interim_enabled {
            self.interim = interim_text;
        }
    }

    /// Move any pending interim text into the finalized transcript.
    ///
    /// Called when the session ends, after any trailing results have been
    /// folded in. Idempotent: a second call finds the interim buffer empty
    /// and changes nothing.
    pub fn flush(&mut self) {
        if !self.interim.is_empty() {
            self.finalized.push_str(&self.interim);
            self.finalized.push(' ');
            self.interim.clear();
        }
    }

    /// Current displayed transcript
    pub fn transcript(&self) -> String {
        format!("{}{}", self.finalized, self.interim)
    }

    /// Finalized (authoritative) portion of the transcript
    pub fn finalized(&self) -> &str {
        &self.finalized
    }

    /// Interim (revisable) portion of the transcript
    pub fn interim(&self) -> &str {
        &self.interim
    }
}
