use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Options for a recognition session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Keep capturing across utterances instead of ending the session after
    /// the first final result
    pub continuous: bool,

    /// Surface provisional (revisable) results while the speaker is still
    /// talking; when off, interim text is discarded entirely
    pub interim_results: bool,

    /// BCP 47 language tag for recognition (e.g. "ko-KR", "en-US")
    pub language: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            continuous: false,
            interim_results: true,
            language: "ko-KR".to_string(),
        }
    }
}

impl SessionConfig {
    /// Load session options from a configuration file
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
