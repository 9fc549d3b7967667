//! Error types for rs-grader.
//!
//! Usage errors (missing files, missing or conflicting inputs) are detected
//! before any document is loaded. Everything else wraps a failure from the
//! filesystem, the JSON parser, the selector engine or the HTTP client.

use std::path::PathBuf;

/// Error type for grading operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file named on the command line does not exist.
    #[error("The file {} does not exist. Exiting.", .0.display())]
    MissingFile(PathBuf),

    /// Neither an HTML file nor a URL was supplied.
    #[error("At least one of file and url path must be defined. Exiting.")]
    NoSource,

    /// Both an HTML file and a URL were supplied.
    #[error("Only one of file and url paths can be defined. Exiting.")]
    ConflictingSources,

    /// Reading a file failed.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The checks file is not a JSON array of strings.
    #[error("Invalid checks file {}: {source}", path.display())]
    InvalidChecks {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A selector in the checks list could not be parsed.
    #[error("Invalid CSS selector: {0:?}")]
    InvalidSelector(String),

    /// The URL argument is not an absolute http(s) URL.
    #[error("Invalid url {0:?}: expected an absolute http or https URL")]
    InvalidUrl(String),

    /// Fetching the URL failed (connection error or non-success status).
    #[error("The url {url} does not exist. ({source})")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Serializing the report failed.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error comes from validating the command-line inputs.
    #[must_use]
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::MissingFile(_) | Self::NoSource | Self::ConflictingSources | Self::InvalidUrl(_)
        )
    }
}

/// Result type alias for grading operations.
pub type Result<T> = std::result::Result<T, Error>;
