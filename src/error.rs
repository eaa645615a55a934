//! Classified session errors.

use thiserror::Error;

use crate::engine::StartError;

/// Closed taxonomy of session failures surfaced to the consumer.
///
/// Every engine or environment failure is recovered locally and exposed as
/// one of these values on the session's error field; none propagate as
/// panics or `Err` returns from the consumer-facing calls. The `Display`
/// output is the human-readable message consumers render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The environment offers no usable recognition engine; permanent for
    /// the session's lifetime
    #[error("{0}")]
    UnsupportedEnvironment(String),

    /// A start request arrived while a session was already active
    #[error("Speech recognition is already active. Please stop before starting again.")]
    AlreadyActive,

    #[error("No speech was detected. Please try again.")]
    NoSpeechDetected,

    #[error("Microphone access was denied. Please allow microphone access in your browser settings.")]
    PermissionDenied,

    #[error("Speech recognition was aborted.")]
    Aborted,

    #[error("Network error during speech recognition.")]
    NetworkError,

    /// Any other engine-reported error code
    #[error("Speech recognition error: {0}")]
    Engine(String),

    /// The engine rejected a start request for a reason other than already
    /// being active
    #[error("Error starting speech recognition: {0}")]
    StartFailure(String),
}

/// Map a raw engine error code onto the closed taxonomy.
///
/// The engine's error vocabulary is known but open; codes outside the known
/// set fall through to [`SessionError::Engine`] with the code preserved in
/// the message.
pub fn classify(raw_code: &str) -> SessionError {
    match raw_code {
        "no-speech" => SessionError::NoSpeechDetected,
        "not-allowed" => SessionError::PermissionDenied,
        "aborted" => SessionError::Aborted,
        "network" => SessionError::NetworkError,
        other => SessionError::Engine(other.to_string()),
    }
}

impl From<StartError> for SessionError {
    fn from(err: StartError) -> Self {
        match err {
            StartError::AlreadyActive => SessionError::AlreadyActive,
            StartError::Failed(detail) => SessionError::StartFailure(detail),
        }
    }
}
