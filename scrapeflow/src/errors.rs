//! Error types for the scrapeflow pipeline.
//!
//! Each failure class gets its own type so that containment policies can be
//! expressed in signatures: acquisition and configuration errors surface
//! synchronously, a step failure is the only error `run()` returns, and hook
//! and delivery errors are contained at their dispatch sites.

use thiserror::Error;

/// The crate-level error type aggregating all failure classes.
#[derive(Debug, Error)]
pub enum ScrapeflowError {
    /// A notifier or hook was constructed with invalid configuration.
    #[error("{0}")]
    Configuration(#[from] ConfigurationError),

    /// The driver session could not be started.
    #[error("{0}")]
    Acquisition(#[from] AcquisitionError),

    /// A step raised during a run.
    #[error("{0}")]
    Step(#[from] StepFailure),

    /// A driver operation failed.
    #[error("{0}")]
    Driver(#[from] DriverError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error raised when a component is constructed with invalid configuration.
#[derive(Debug, Clone, Error)]
#[error("invalid configuration: {message}")]
pub struct ConfigurationError {
    /// The error message.
    pub message: String,
}

impl ConfigurationError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error raised when the driver session cannot be started.
///
/// Surfaced from `PipelineBuilder::build()` before any step executes, so no
/// failure hooks are involved.
#[derive(Debug, Error)]
#[error("failed to start driver session: {message}")]
pub struct AcquisitionError {
    /// The error message.
    pub message: String,
    /// The underlying cause, when the backend supplies one.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AcquisitionError {
    /// Creates a new acquisition error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Attaches the underlying cause.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

/// Error raised by a step action during a run.
///
/// Carries the step's original error untouched; `PipelineRunner::run()`
/// returns this and nothing else on the failure path.
#[derive(Debug, Error)]
#[error("step '{step}' failed: {source}")]
pub struct StepFailure {
    /// The name of the failing step.
    pub step: String,
    /// The position of the failing step in the sequence (0-indexed).
    pub index: usize,
    /// The step's original error.
    pub source: anyhow::Error,
}

impl StepFailure {
    /// Creates a new step failure.
    #[must_use]
    pub fn new(step: impl Into<String>, index: usize, source: anyhow::Error) -> Self {
        Self {
            step: step.into(),
            index,
            source,
        }
    }

    /// Consumes the failure, returning the step's original error.
    #[must_use]
    pub fn into_inner(self) -> anyhow::Error {
        self.source
    }
}

/// Error raised by a failure hook itself.
///
/// Contained at the dispatch site: logged, skipped, never allowed to mask
/// the step error or prevent the remaining hooks from running.
#[derive(Debug, Error)]
pub enum HookError {
    /// Capturing diagnostic state from the driver failed.
    #[error("diagnostic capture failed: {0}")]
    Capture(#[from] DriverError),

    /// Persisting a diagnostic artifact failed.
    #[error("failed to persist diagnostic artifact: {0}")]
    Io(#[from] std::io::Error),

    /// Any other hook failure.
    #[error("{0}")]
    Other(String),
}

impl HookError {
    /// Creates a generic hook error.
    #[must_use]
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

/// Error raised when a notifier fails to deliver a message.
///
/// Contained at the fan-out site: logged, skipped, never surfaced to the
/// caller of the notify operation.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The notification endpoint returned a non-success status.
    #[error("notification endpoint returned status {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },

    /// The outbound call failed at the transport level.
    #[error("notification transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Errors returned by driver operations.
#[derive(Debug, Clone, Error)]
pub enum DriverError {
    /// Navigation to a URL failed.
    #[error("navigation to '{url}' failed: {reason}")]
    Navigation {
        /// The target URL.
        url: String,
        /// The reason for failure.
        reason: String,
    },

    /// An element could not be located on the current page.
    #[error("element not found: {locator}")]
    ElementNotFound {
        /// The locator that matched nothing.
        locator: String,
    },

    /// Waiting for an element exceeded the deadline.
    #[error("timed out after {waited_ms}ms waiting for element: {locator}")]
    WaitTimeout {
        /// The locator that never became visible.
        locator: String,
        /// How long was waited, in milliseconds.
        waited_ms: u64,
    },

    /// Capturing a screenshot failed.
    #[error("screenshot capture failed: {reason}")]
    Screenshot {
        /// The reason for failure.
        reason: String,
    },

    /// The driver session itself failed.
    #[error("driver session error: {reason}")]
    Session {
        /// The reason for failure.
        reason: String,
    },
}

impl DriverError {
    /// Creates a navigation error.
    #[must_use]
    pub fn navigation(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Navigation {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Creates an element-not-found error.
    #[must_use]
    pub fn element_not_found(locator: impl ToString) -> Self {
        Self::ElementNotFound {
            locator: locator.to_string(),
        }
    }

    /// Creates a wait-timeout error.
    #[must_use]
    pub fn wait_timeout(locator: impl ToString, waited: std::time::Duration) -> Self {
        Self::WaitTimeout {
            locator: locator.to_string(),
            waited_ms: waited.as_millis() as u64,
        }
    }

    /// Creates a screenshot error.
    #[must_use]
    pub fn screenshot(reason: impl Into<String>) -> Self {
        Self::Screenshot {
            reason: reason.into(),
        }
    }

    /// Creates a session error.
    #[must_use]
    pub fn session(reason: impl Into<String>) -> Self {
        Self::Session {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = ConfigurationError::new("bot token must not be empty");
        assert_eq!(
            err.to_string(),
            "invalid configuration: bot token must not be empty"
        );
    }

    #[test]
    fn test_acquisition_error_with_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = AcquisitionError::new("geckodriver unreachable").with_source(io);

        assert!(err.to_string().contains("geckodriver unreachable"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_step_failure_preserves_original_error() {
        let failure = StepFailure::new("login", 1, anyhow::anyhow!("element stale"));

        assert_eq!(failure.step, "login");
        assert_eq!(failure.index, 1);
        assert!(failure.to_string().contains("element stale"));

        let original = failure.into_inner();
        assert_eq!(original.to_string(), "element stale");
    }

    #[test]
    fn test_driver_error_wait_timeout() {
        let err = DriverError::wait_timeout("css='#login'", std::time::Duration::from_secs(10));
        assert_eq!(
            err.to_string(),
            "timed out after 10000ms waiting for element: css='#login'"
        );
    }

    #[test]
    fn test_crate_error_from_step_failure() {
        let failure = StepFailure::new("scrape", 2, anyhow::anyhow!("boom"));
        let err: ScrapeflowError = failure.into();
        assert!(matches!(err, ScrapeflowError::Step(_)));
    }
}
