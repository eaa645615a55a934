use super::config::SessionConfig;
use super::stats::SessionStats;
use crate::capability::{CapabilityDetector, SupportStatus};
use crate::engine::{EngineAdapter, EngineEvent, RecognitionEngine};
use crate::error::{classify, SessionError};
use crate::transcript::TranscriptAggregator;
use chrono::Utc;
use tracing::{debug, info, warn};

/// Listening lifecycle state.
///
/// Exactly one value at a time; transitions are driven by engine
/// acknowledgments (`Started`/`Ended`), not by caller requests, so the state
/// is eventually consistent with the most recent start/stop call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Listening,
}

/// A transcript session that orchestrates the engine adapter, transcript
/// aggregation, and error classification behind the consumer-facing contract
pub struct SessionController {
    /// Session identifier
    session_id: String,

    /// Adapter owning the recognition engine and its event feed
    adapter: EngineAdapter,

    /// Current session options
    config: SessionConfig,

    /// Capability check result, computed once at construction
    support: SupportStatus,

    /// Last acknowledged lifecycle state
    state: SessionState,

    /// Accumulated transcript for the current session
    aggregator: TranscriptAggregator,

    /// Most recent classified failure, if any
    error: Option<SessionError>,

    /// When the controller was created
    started_at: chrono::DateTime<chrono::Utc>,

    /// Result batches folded in since the current session started
    result_events: usize,
}

impl SessionController {
    /// Create a controller around `engine`.
    ///
    /// Capability is probed once here and cached for the controller's
    /// lifetime; an unsupported environment turns the listening calls into
    /// no-ops that surface the capability message as the error.
    pub fn new(
        engine: Box<dyn RecognitionEngine>,
        detector: &CapabilityDetector,
        config: SessionConfig,
    ) -> Self {
        let session_id = format!("speech-{}", uuid::Uuid::new_v4());
        let support = detector.detect();

        let mut adapter = EngineAdapter::new(engine);
        if support.is_supported {
            adapter.configure(&config);
        }

        info!(
            session_id = %session_id,
            supported = support.is_supported,
            language = %config.language,
            "created transcript session"
        );

        Self {
            session_id,
            adapter,
            config,
            support,
            state: SessionState::Idle,
            aggregator: TranscriptAggregator::new(),
            error: None,
            started_at: Utc::now(),
            result_events: 0,
        }
    }

    /// Request the engine start listening.
    ///
    /// Returns before the session is actually active; [`SessionState`] moves
    /// to `Listening` only when the engine's `Started` acknowledgment is
    /// folded in. Guard failures surface through [`SessionController::error`]
    /// and make no adapter call.
    pub async fn start_listening(&mut self) {
        if !self.support.is_supported {
            warn!(session_id = %self.session_id, "start requested in unsupported environment");
            self.error = self
                .support
                .error_message
                .clone()
                .map(SessionError::UnsupportedEnvironment);
            return;
        }

        if self.state == SessionState::Listening {
            warn!(session_id = %self.session_id, "start requested while already listening");
            self.error = Some(SessionError::AlreadyActive);
            return;
        }

        if let Err(e) = self.adapter.start().await {
            warn!(session_id = %self.session_id, "failed to start recognition: {e}");
            self.error = Some(e.into());
        }
    }

    /// Request the engine stop listening.
    ///
    /// Advisory: trailing results may still arrive before the `Ended`
    /// acknowledgment moves the state back to `Idle`. A stop while already
    /// idle is a no-op.
    pub async fn stop_listening(&mut self) {
        if self.state == SessionState::Idle {
            debug!(session_id = %self.session_id, "stop requested while idle, ignoring");
            return;
        }

        self.adapter.stop().await;
    }

    /// Start or stop based on the last acknowledged state.
    ///
    /// Two toggles racing the same acknowledgment both observe the stale
    /// state: the second start is rejected as already active and the second
    /// stop is a no-op.
    pub async fn toggle_listening(&mut self) {
        match self.state {
            SessionState::Idle => self.start_listening().await,
            SessionState::Listening => self.stop_listening().await,
        }
    }

    /// Fold one engine event into session state
    pub fn apply(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::Started => {
                info!(session_id = %self.session_id, "recognition started");
                self.state = SessionState::Listening;
                self.error = None;
                self.aggregator.reset();
                self.result_events = 0;
            }
            EngineEvent::Result(result) => {
                debug!(
                    session_id = %self.session_id,
                    start_index = result.start_index,
                    segments = result.segments.len(),
                    "recognition result"
                );
                self.aggregator.apply_result(&result, self.config.interim_results);
                self.result_events += 1;
            }
            EngineEvent::Error(code) => {
                warn!(session_id = %self.session_id, code = %code, "recognition error");
                self.error = Some(classify(&code));
            }
            EngineEvent::Ended => {
                info!(session_id = %self.session_id, "recognition ended");
                self.aggregator.flush();
                self.state = SessionState::Idle;
            }
        }
    }

    /// Drain engine events until the current session ends.
    ///
    /// Channel order is preserved, so trailing results or errors delivered
    /// after a stop request are folded in before the end-of-session flush.
    pub async fn process_events(&mut self) {
        while let Some(event) = self.adapter.next_event().await {
            let ended = matches!(event, EngineEvent::Ended);
            self.apply(event);
            if ended {
                break;
            }
        }
    }

    /// Fold in any events already delivered without waiting for more
    pub fn poll_events(&mut self) {
        while let Some(event) = self.adapter.try_next_event() {
            self.apply(event);
        }
    }

    /// Push new options into the live engine.
    ///
    /// Forwarded regardless of state; never resets the transcript or the
    /// lifecycle state of an in-flight session.
    pub fn configure(&mut self, config: SessionConfig) {
        self.adapter.configure(&config);
        self.config = config;
    }

    /// Detach the engine's event feed; events arriving afterwards are dropped
    pub fn dispose(&mut self) {
        info!(session_id = %self.session_id, "session disposed");
        self.adapter.dispose();
    }

    /// Current displayed transcript (finalized plus interim text)
    pub fn transcript(&self) -> String {
        self.aggregator.transcript()
    }

    pub fn is_listening(&self) -> bool {
        self.state == SessionState::Listening
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Most recent classified failure; cleared by the next successful start
    pub fn error(&self) -> Option<&SessionError> {
        self.error.as_ref()
    }

    /// Capability check result for this controller's environment
    pub fn support(&self) -> &SupportStatus {
        &self.support
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Get current session statistics
    pub fn stats(&self) -> SessionStats {
        let duration = Utc::now().signed_duration_since(self.started_at);

        SessionStats {
            session_id: self.session_id.clone(),
            is_listening: self.is_listening(),
            started_at: self.started_at,
            duration_secs: duration.num_milliseconds() as f64 / 1000.0,
            result_events: self.result_events,
            finalized_chars: self.aggregator.finalized().chars().count(),
        }
    }
}
