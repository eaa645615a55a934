//! Recognition engine abstraction
//!
//! This module isolates the session layer from the concrete recognition
//! engine's shape:
//! - `RecognitionEngine` trait: configure/start/stop plus a typed event feed
//! - `EngineAdapter`: owns the engine instance and the live event channel
//! - `ScriptedEngine`: replayable engine for tests and demos

pub mod adapter;
pub mod backend;
pub mod scripted;

pub use adapter::EngineAdapter;
pub use backend::{EngineEvent, Hypothesis, RecognitionEngine, RecognitionEvent, StartError};
pub use scripted::ScriptedEngine;
