use anyhow::Result;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::session::SessionConfig;

/// One recognized alternative for one utterance segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hypothesis {
    /// Transcribed text
    pub text: String,
    /// Whether the engine considers this segment authoritative; interim
    /// segments remain revisable until replaced or finalized
    pub is_final: bool,
}

/// A batch of recognition results delivered by the engine.
///
/// Engines resend the full ordered segment list for the current session;
/// `start_index` marks the first segment the consumer has not seen yet, so
/// earlier (already finalized) entries must be skipped when folding the
/// event into a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionEvent {
    /// Index of the first segment not yet seen by the consumer
    pub start_index: usize,
    /// Ordered segment list, best alternative per segment
    pub segments: Vec<Hypothesis>,
}

/// Events emitted by a recognition engine, in session order:
/// `Started`, then any number of `Result`/`Error`, then `Ended`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The engine has actually begun capturing
    Started,
    /// A batch of partial/final recognition results
    Result(RecognitionEvent),
    /// An engine-reported error code (`no-speech`, `not-allowed`, `aborted`,
    /// `network`, or any other code from the engine's open vocabulary)
    Error(String),
    /// The session has terminated; always the last event of a session
    Ended,
}

/// Synchronous failure of a start request
#[derive(Debug, Clone, Error)]
pub enum StartError {
    /// The engine is already capturing
    #[error("recognition is already active")]
    AlreadyActive,

    /// Anything else the engine reports at start time
    #[error("{0}")]
    Failed(String),
}

/// Speech recognition engine trait
///
/// Implementations wrap a concrete recognizer (platform API, native model,
/// scripted replay) behind a uniform lifecycle:
/// - `start` returns a channel receiver carrying the session's events,
///   beginning with [`EngineEvent::Started`] and terminated by
///   [`EngineEvent::Ended`]
/// - `stop` is advisory; the engine may still deliver trailing results or
///   errors before acknowledging with `Ended`
#[async_trait::async_trait]
pub trait RecognitionEngine: Send + Sync {
    /// Apply session options; safe whether or not a session is active
    fn configure(&mut self, config: &SessionConfig);

    /// Begin a recognition session.
    ///
    /// `Ok` carries the session's event feed. Calling `start` while a
    /// session is active fails synchronously with
    /// [`StartError::AlreadyActive`].
    async fn start(&mut self) -> Result<mpsc::Receiver<EngineEvent>, StartError>;

    /// Request graceful termination; completion is signaled by `Ended`
    async fn stop(&mut self) -> Result<()>;

    /// Check if a session is currently active
    fn is_active(&self) -> bool;

    /// Get engine name for logging
    fn name(&self) -> &str;
}
