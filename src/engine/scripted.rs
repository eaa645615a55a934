use anyhow::Result;
use tokio::sync::mpsc;
use tracing::debug;

use super::backend::{EngineEvent, RecognitionEngine, StartError};
use crate::session::SessionConfig;

/// Recognition engine that replays a scripted event sequence.
///
/// Each accepted `start` delivers [`EngineEvent::Started`] followed by the
/// scripted events. In continuous mode the session then stays open until
/// `stop`, which delivers any trailing events (results still in flight when
/// the stop request lands) before [`EngineEvent::Ended`]; in
/// single-utterance mode `Ended` follows the script immediately.
pub struct ScriptedEngine {
    script: Vec<EngineEvent>,
    trailing: Vec<EngineEvent>,
    config: SessionConfig,
    session: Option<mpsc::Sender<EngineEvent>>,
}

impl ScriptedEngine {
    pub fn new(script: Vec<EngineEvent>) -> Self {
        Self {
            script,
            trailing: Vec::new(),
            config: SessionConfig::default(),
            session: None,
        }
    }

    /// Events delivered between a stop request and `Ended`
    pub fn with_trailing(mut self, trailing: Vec<EngineEvent>) -> Self {
        self.trailing = trailing;
        self
    }

    /// Options last pushed into the engine
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

#[async_trait::async_trait]
impl RecognitionEngine for ScriptedEngine {
    fn configure(&mut self, config: &SessionConfig) {
        self.config = config.clone();
    }

    async fn start(&mut self) -> Result<mpsc::Receiver<EngineEvent>, StartError> {
        if self.session.is_some() {
            return Err(StartError::AlreadyActive);
        }

        // Capacity covers the whole session, so no send below ever blocks
        let capacity = self.script.len() + self.trailing.len() + 2;
        let (tx, rx) = mpsc::channel(capacity);

        let _ = tx.send(EngineEvent::Started).await;
        for event in self.script.clone() {
            let _ = tx.send(event).await;
        }

        if self.config.continuous {
            self.session = Some(tx);
        } else {
            // Single-utterance mode: the session ends with the script
            let _ = tx.send(EngineEvent::Ended).await;
        }

        debug!(events = self.script.len(), continuous = self.config.continuous, "scripted session started");
        Ok(rx)
    }

    async fn stop(&mut self) -> Result<()> {
        if let Some(tx) = self.session.take() {
            for event in self.trailing.drain(..) {
                let _ = tx.send(event).await;
            }
            let _ = tx.send(EngineEvent::Ended).await;
            debug!("scripted session stopped");
        }
        Ok(())
    }

    fn is_active(&self) -> bool {
        self.session.is_some()
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
