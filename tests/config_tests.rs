// Tests for session options and capability detection
//
// These tests verify the option defaults, partial deserialization, config
// file loading, and the probe-injected capability check.

use anyhow::Result;
use speech_session::{CapabilityDetector, SessionConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_session_config_defaults() {
    let config = SessionConfig::default();

    assert!(!config.continuous, "Sessions default to single-utterance mode");
    assert!(config.interim_results, "Interim results default to on");
    assert_eq!(config.language, "ko-KR");
}

#[test]
fn test_partial_config_falls_back_to_defaults() {
    // Only one field present; the rest take their defaults
    let config: SessionConfig = serde_json::from_str(r#"{"language": "en-US"}"#).unwrap();

    assert_eq!(config.language, "en-US");
    assert!(!config.continuous);
    assert!(config.interim_results);
}

#[test]
fn test_config_loads_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("session.toml");
    fs::write(&path, "continuous = true\nlanguage = \"en-US\"\n")?;

    let config = SessionConfig::load(path.to_str().unwrap())?;

    assert!(config.continuous);
    assert_eq!(config.language, "en-US");
    assert!(config.interim_results, "Missing keys fall back to defaults");

    Ok(())
}

#[test]
fn test_capability_probe_supported() {
    let detector = CapabilityDetector::new("Test host", || true);
    let status = detector.detect();

    assert!(status.is_supported);
    assert!(status.error_message.is_none());
}

#[test]
fn test_capability_probe_unsupported_names_environment() {
    let detector = CapabilityDetector::unsupported("This kiosk");
    let status = detector.detect();

    assert!(!status.is_supported);
    assert_eq!(
        status.error_message.as_deref(),
        Some("This kiosk does not support speech recognition. Please try a supported browser.")
    );
}
