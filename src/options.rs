//! Configuration options for grading.
//!
//! The `Options` struct carries the settings that the command line can
//! override: where the checks live and how remote documents are fetched.

use std::path::PathBuf;
use std::time::Duration;

/// Default path of the checks file when none is given.
pub const CHECKS_FILE_DEFAULT: &str = "checks.json";

/// Configuration options for loading and checking documents.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_grader::Options;
/// use std::time::Duration;
///
/// let options = Options {
///     timeout: Some(Duration::from_secs(10)),
///     ..Options::default()
/// };
/// assert_eq!(options.checks_file.to_str(), Some("checks.json"));
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Path to the JSON array of selectors.
    ///
    /// Default: `checks.json`
    pub checks_file: PathBuf,

    /// Overall timeout for fetching a URL.
    ///
    /// Default: `None` (wait for the server indefinitely)
    pub timeout: Option<Duration>,

    /// `User-Agent` header sent when fetching a URL.
    ///
    /// Default: `rs-grader/<crate version>`
    pub user_agent: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            checks_file: PathBuf::from(CHECKS_FILE_DEFAULT),
            timeout: None,
            user_agent: concat!("rs-grader/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
