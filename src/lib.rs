//! # rs-grader
//!
//! Checks an HTML document for elements matching a list of CSS selectors.
//!
//! The document comes from a local file or a URL; the selectors come from a
//! JSON checks file such as `["h1", "#submit", "a[href]"]`. The result is a
//! [`CheckReport`] mapping each selector to whether at least one element
//! matched.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_grader::check_html;
//!
//! let report = check_html("<html><h1>Hi</h1></html>", &["h1", "h2"])?;
//! assert_eq!(report.get("h1"), Some(true));
//! assert_eq!(report.get("h2"), Some(false));
//! println!("{}", report.to_pretty_json()?);
//! # Ok::<(), rs_grader::Error>(())
//! ```

mod error;
mod evaluate;
mod options;
mod report;
mod source;

/// Loading the JSON checks list.
pub mod checks;

/// Document parsing and selector queries over `dom_query`.
pub mod document;

/// Character encoding detection and transcoding.
pub mod encoding;

/// HTTP fetching of remote documents.
pub mod fetch;

/// Tracing subscriber setup.
pub mod logging;

use std::path::Path;

// Public API - re-exports
pub use error::{Error, Result};
pub use evaluate::evaluate;
pub use options::{Options, CHECKS_FILE_DEFAULT};
pub use report::CheckReport;
pub use source::{assert_file_exists, parse_url, Source};

/// Evaluate `checks` against an HTML string.
pub fn check_html<S: AsRef<str>>(html: &str, checks: &[S]) -> Result<CheckReport> {
    evaluate(&document::parse(html), checks)
}

/// Check a local HTML file against the selectors in `checks_file`.
///
/// # Example
///
/// ```rust,no_run
/// use rs_grader::check_html_file;
/// use std::path::Path;
///
/// let report = check_html_file(Path::new("index.html"), Path::new("checks.json"))?;
/// println!("{}", report.to_pretty_json()?);
/// # Ok::<(), rs_grader::Error>(())
/// ```
pub fn check_html_file(html_file: &Path, checks_file: &Path) -> Result<CheckReport> {
    let doc = document::load_file(html_file)?;
    let checks = checks::load_checks(checks_file)?;
    evaluate(&doc, &checks)
}

/// Fetch `url` and check it against the selectors in `checks_file`.
pub async fn check_url_content(
    url: &str,
    checks_file: &Path,
    options: &Options,
) -> Result<CheckReport> {
    let url = parse_url(url)?;
    let html = fetch::fetch(&url, options).await?;
    let checks = checks::load_checks(checks_file)?;
    check_html(&html, &checks)
}

/// Load `source` and check it against `options.checks_file`.
///
/// This is the single load-then-evaluate path shared by both kinds of
/// source. Only the URL branch suspends.
pub async fn run(source: &Source, options: &Options) -> Result<CheckReport> {
    let html = match source {
        Source::File(path) => document::read_html_file(path)?,
        Source::Url(url) => fetch::fetch(url, options).await?,
    };
    let checks = checks::load_checks(&options.checks_file)?;
    tracing::debug!(%source, checks = checks.len(), "checking document");
    check_html(&html, &checks)
}
