use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::backend::{EngineEvent, RecognitionEngine, StartError};
use crate::session::SessionConfig;

/// Thin wrapper isolating the session layer from the engine's shape.
///
/// The adapter exclusively owns the engine instance and the event receiver
/// of the live session. After [`EngineAdapter::dispose`] no further engine
/// events reach the consumer, even if the underlying engine keeps firing
/// them.
pub struct EngineAdapter {
    engine: Box<dyn RecognitionEngine>,
    events: Option<mpsc::Receiver<EngineEvent>>,
    disposed: bool,
}

impl EngineAdapter {
    pub fn new(engine: Box<dyn RecognitionEngine>) -> Self {
        Self {
            engine,
            events: None,
            disposed: false,
        }
    }

    /// Push session options into the engine; safe in any state
    pub fn configure(&mut self, config: &SessionConfig) {
        self.engine.configure(config);
        debug!(engine = self.engine.name(), "recognition options updated");
    }

    /// Request the engine begin capturing.
    ///
    /// `Ok` means the request was accepted; the session is only active once
    /// [`EngineEvent::Started`] is observed on the event feed.
    pub async fn start(&mut self) -> Result<(), StartError> {
        if self.disposed {
            return Err(StartError::Failed("recognizer has been disposed".to_string()));
        }

        let events = self.engine.start().await?;
        self.events = Some(events);
        debug!(engine = self.engine.name(), "recognition start requested");
        Ok(())
    }

    /// Request graceful termination; completion is signaled by `Ended`.
    ///
    /// Stop failures are logged rather than propagated; the engine either
    /// ends the session or was not capturing in the first place.
    pub async fn stop(&mut self) {
        if let Err(e) = self.engine.stop().await {
            warn!(engine = self.engine.name(), "failed to stop recognition: {e}");
        }
    }

    /// Wait for the next event of the live session.
    ///
    /// Returns `None` once the session's feed is exhausted, or immediately
    /// when no session was started or the adapter is disposed.
    pub async fn next_event(&mut self) -> Option<EngineEvent> {
        match self.events.as_mut() {
            Some(events) => events.recv().await,
            None => None,
        }
    }

    /// Non-blocking variant of [`EngineAdapter::next_event`]
    pub fn try_next_event(&mut self) -> Option<EngineEvent> {
        self.events.as_mut().and_then(|events| events.try_recv().ok())
    }

    /// Detach the event feed.
    ///
    /// Events the engine emits afterwards are dropped, so a torn-down
    /// session can never be mutated by late callbacks. Subsequent start
    /// requests fail.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.events = None;
        debug!(engine = self.engine.name(), "adapter disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
