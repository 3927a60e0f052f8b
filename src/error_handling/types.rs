//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error binding or serving the HTTP listener.
    #[error("Server initialization error: {0}")]
    ServerError(#[from] std::io::Error),
}

/// Error types for browser provisioning.
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// The host platform has no known Chrome installation path.
    #[error("No known Chrome executable location for platform '{0}'")]
    UnsupportedPlatform(String),

    /// The launch options could not be assembled into a browser configuration.
    #[error("Browser configuration error: {0}")]
    ConfigError(String),
}

/// Error types for a single scrape attempt.
///
/// These never escape the scrape engine as failures of the HTTP surface; the
/// engine converts every variant into an empty result set after logging it.
/// Keeping them structured lets the engine log and count each failure class
/// separately instead of collapsing everything into a string.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Browser provisioning or launch failed.
    #[error("Browser launch failed: {0}")]
    Launch(String),

    /// Navigation to the search page failed or timed out.
    #[error("Navigation failed: {0}")]
    Navigation(String),

    /// The results container never appeared within the wait deadline.
    /// Covers captcha interstitials and markup changes as well as slow loads.
    #[error("Results container '{selector}' not found within {timeout_secs}s")]
    SelectorTimeout { selector: String, timeout_secs: u64 },

    /// The page content could not be retrieved for extraction.
    #[error("Content extraction failed: {0}")]
    Extraction(String),
}

impl ScrapeError {
    /// Stable short label for logging and stats bucketing.
    pub fn kind(&self) -> &'static str {
        match self {
            ScrapeError::Launch(_) => "launch",
            ScrapeError::Navigation(_) => "navigation",
            ScrapeError::SelectorTimeout { .. } => "selector_timeout",
            ScrapeError::Extraction(_) => "extraction",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrape_error_kind_labels() {
        assert_eq!(ScrapeError::Launch("x".into()).kind(), "launch");
        assert_eq!(ScrapeError::Navigation("x".into()).kind(), "navigation");
        assert_eq!(
            ScrapeError::SelectorTimeout {
                selector: "#decrypted".into(),
                timeout_secs: 15
            }
            .kind(),
            "selector_timeout"
        );
        assert_eq!(ScrapeError::Extraction("x".into()).kind(), "extraction");
    }

    #[test]
    fn test_selector_timeout_display() {
        let err = ScrapeError::SelectorTimeout {
            selector: "#decrypted".into(),
            timeout_secs: 15,
        };
        assert_eq!(
            err.to_string(),
            "Results container '#decrypted' not found within 15s"
        );
    }

    #[test]
    fn test_unsupported_platform_display() {
        let err = ProvisionError::UnsupportedPlatform("freebsd".into());
        assert!(err.to_string().contains("freebsd"));
    }
}
