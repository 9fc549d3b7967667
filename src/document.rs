//! Document loading and selector queries.
//!
//! Thin layer over the `dom_query` crate. A `Document` is the parsed,
//! read-only handle that every check runs against; selectors are compiled
//! through `Matcher` so that bad syntax comes back as an error instead of
//! a panic inside the selector engine.

use crate::encoding;
use crate::error::{Error, Result};
use dom_query::Matcher;
use std::path::Path;

// Re-export core types for external use
pub use dom_query::Document;

/// Parse HTML into a queryable document.
///
/// HTML parsing never fails: malformed markup is repaired the way a browser
/// would repair it.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Parse raw HTML bytes, detecting the charset first.
#[must_use]
pub fn parse_bytes(html: &[u8]) -> Document {
    parse(&encoding::transcode_to_utf8(html))
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read html file");
    Ok(bytes)
}

/// Read an HTML file from disk and decode it to UTF-8.
pub fn read_html_file(path: &Path) -> Result<String> {
    read_bytes(path).map(|bytes| encoding::transcode_to_utf8(&bytes))
}

/// Read and parse an HTML file.
pub fn load_file(path: &Path) -> Result<Document> {
    read_bytes(path).map(|bytes| parse_bytes(&bytes))
}

/// Compile a CSS selector.
pub fn compile(selector: &str) -> Result<Matcher> {
    Matcher::new(selector).map_err(|_| Error::InvalidSelector(selector.to_string()))
}

/// Count the elements in `doc` matching `selector`.
///
/// A blank selector matches nothing rather than failing to compile.
///
/// Matching starts below the document node, so `:root` never matches; use
/// `html` instead.
///
/// # Example
///
/// ```rust
/// use rs_grader::document;
///
/// let doc = document::parse("<ul><li>a</li><li>b</li></ul>");
/// assert_eq!(document::count_matches(&doc, "li")?, 2);
/// assert_eq!(document::count_matches(&doc, "ol")?, 0);
/// # Ok::<(), rs_grader::Error>(())
/// ```
pub fn count_matches(doc: &Document, selector: &str) -> Result<usize> {
    if selector.trim().is_empty() {
        return Ok(0);
    }
    let matcher = compile(selector)?;
    Ok(doc.select_matcher(&matcher).length())
}
