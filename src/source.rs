//! Input resolution.
//!
//! The document to grade comes from exactly one of a local file or a URL.
//! All validation here runs before anything is read or fetched.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use url::Url;

/// Where the HTML document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A local HTML file.
    File(PathBuf),
    /// A remote page fetched over HTTP(S).
    Url(Url),
}

/// Fail with [`Error::MissingFile`] unless `path` exists.
pub fn assert_file_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::MissingFile(path.to_path_buf()))
    }
}

/// Parse a URL argument, accepting only absolute http(s) URLs.
pub fn parse_url(input: &str) -> Result<Url> {
    match Url::parse(input) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host_str().is_some() => {
            Ok(url)
        }
        _ => Err(Error::InvalidUrl(input.to_string())),
    }
}

impl Source {
    /// Pick the source from the optional file and URL arguments.
    ///
    /// A given file must exist; then exactly one of the two must be set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rs_grader::{Error, Source};
    ///
    /// let err = Source::resolve(None, None).unwrap_err();
    /// assert!(matches!(err, Error::NoSource));
    ///
    /// let source = Source::resolve(None, Some("https://example.com/"))?;
    /// assert!(matches!(source, Source::Url(_)));
    /// # Ok::<(), rs_grader::Error>(())
    /// ```
    pub fn resolve(file: Option<&Path>, url: Option<&str>) -> Result<Self> {
        if let Some(path) = file {
            assert_file_exists(path)?;
        }
        match (file, url) {
            (None, None) => Err(Error::NoSource),
            (Some(_), Some(_)) => Err(Error::ConflictingSources),
            (Some(path), None) => Ok(Self::File(path.to_path_buf())),
            (None, Some(url)) => parse_url(url).map(Self::Url),
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}
