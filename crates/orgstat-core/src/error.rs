// SPDX-License-Identifier: Apache-2.0

//! Error types for orgstat.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur while building a repository report.
#[derive(Error, Debug)]
pub enum OrgstatError {
    /// Transport failure while fetching the listing page (DNS, TLS, timeout).
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        /// URL that was requested.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The listing page answered with a non-success status.
    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus {
        /// URL that was requested.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// An expected markup element is missing or malformed.
    #[error("Unexpected page structure: {message}")]
    Structure {
        /// What was expected and not found.
        message: String,
    },

    /// Timestamp or count text does not match the expected lexical form.
    #[error("Could not parse {what} from {input:?}")]
    Parse {
        /// Kind of value being parsed (e.g. "timestamp").
        what: &'static str,
        /// The offending input text.
        input: String,
    },

    /// Configuration file error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },
}

impl OrgstatError {
    pub(crate) fn structure(message: impl Into<String>) -> Self {
        OrgstatError::Structure {
            message: message.into(),
        }
    }

    pub(crate) fn parse(what: &'static str, input: &str) -> Self {
        OrgstatError::Parse {
            what,
            input: input.to_string(),
        }
    }

    /// Returns true if the error is a fetch that ran out of time.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, OrgstatError::Fetch { source, .. } if source.is_timeout())
    }
}

impl From<config::ConfigError> for OrgstatError {
    fn from(err: config::ConfigError) -> Self {
        OrgstatError::Config {
            message: err.to_string(),
        }
    }
}
