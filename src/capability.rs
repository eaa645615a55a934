use tracing::debug;

/// Outcome of the one-time environment check for a usable recognition engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportStatus {
    /// Whether a recognition engine is available
    pub is_supported: bool,

    /// Human-readable explanation when unsupported
    pub error_message: Option<String>,
}

impl SupportStatus {
    /// Message shown to consumers when the environment lacks an engine
    pub fn unsupported_message(environment: &str) -> String {
        format!(
            "{} does not support speech recognition. Please try a supported browser.",
            environment
        )
    }
}

/// Checks whether the current environment offers a usable recognition engine.
///
/// The probe is injected at construction, so the session engine stays
/// testable in environments without any real recognizer. The owning
/// controller runs `detect` once and caches the result for its lifetime.
pub struct CapabilityDetector {
    /// Name of the environment being probed, used in the unsupported message
    environment: String,
    probe: Box<dyn Fn() -> bool + Send + Sync>,
}

impl CapabilityDetector {
    /// Create a detector with a custom probe
    pub fn new(environment: impl Into<String>, probe: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        Self {
            environment: environment.into(),
            probe: Box::new(probe),
        }
    }

    /// Detector whose probe always succeeds (embedded/scripted engines)
    pub fn always_supported() -> Self {
        Self::new("This environment", || true)
    }

    /// Detector whose probe always fails, naming the unsupported environment
    pub fn unsupported(environment: impl Into<String>) -> Self {
        Self::new(environment, || false)
    }

    /// Probe the environment
    pub fn detect(&self) -> SupportStatus {
        let supported = (self.probe)();
        debug!(environment = %self.environment, supported, "capability probe");

        if supported {
            SupportStatus {
                is_supported: true,
                error_message: None,
            }
        } else {
            SupportStatus {
                is_supported: false,
                error_message: Some(SupportStatus::unsupported_message(&self.environment)),
            }
        }
    }
}
