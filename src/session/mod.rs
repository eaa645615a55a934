//! Transcript session management
//!
//! This module provides the `SessionController` abstraction that manages:
//! - The listening lifecycle (Idle/Listening) and its guard conditions
//! - Folding engine events into the transcript via the aggregator
//! - Error classification and the consumer-facing error surface
//! - Session options and statistics

mod config;
mod controller;
mod stats;

pub use config::SessionConfig;
pub use controller::{SessionController, SessionState};
pub use stats::SessionStats;
