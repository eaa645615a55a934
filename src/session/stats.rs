use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Statistics about a transcript session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    /// Session identifier (e.g. "speech-3f1c...")
    pub session_id: String,

    /// Whether the session is currently listening
    pub is_listening: bool,

    /// When the controller was created
    pub started_at: DateTime<Utc>,

    /// Seconds since the controller was created
    pub duration_secs: f64,

    /// Result batches folded into the current session's transcript
    pub result_events: usize,

    /// Length of the finalized transcript in characters
    pub finalized_chars: usize,
}
