pub mod capability;
pub mod engine;
pub mod error;
pub mod session;
pub mod transcript;

pub use capability::{CapabilityDetector, SupportStatus};
pub use engine::{
    EngineAdapter, EngineEvent, Hypothesis, RecognitionEngine, RecognitionEvent, ScriptedEngine,
    StartError,
};
pub use error::SessionError;
pub use session::{SessionConfig, SessionController, SessionState, SessionStats};
pub use transcript::TranscriptAggregator;
