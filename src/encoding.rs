//! Character encoding detection and transcoding.
//!
//! HTML handed to the grader arrives as raw bytes, either read from disk or
//! received over HTTP. This module picks the charset and decodes to UTF-8
//! before the document is parsed.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Number of leading bytes searched for a `<meta>` charset declaration.
const SNIFF_LEN: usize = 1024;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>;]+)"#).expect("valid regex")
});

/// Match the `charset` parameter of a MIME type such as `text/html; charset=utf-8`
#[allow(clippy::expect_used)]
static MIME_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i);\s*charset\s*=\s*["']?([^"'\s;]+)"#).expect("valid regex")
});

/// Detect character encoding from HTML bytes.
///
/// Looks, in order, for:
/// 1. A byte order mark
/// 2. A `<meta charset>` or `<meta http-equiv="Content-Type">` declaration
///    within the first 1024 bytes
/// 3. Defaults to UTF-8
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    meta_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Extract the charset label from a `<meta>` tag.
///
/// Covers both `<meta charset="...">` and the `content="text/html; charset=..."`
/// form, since the pattern only anchors on `charset=` inside a meta tag.
fn meta_charset(html: &str) -> Option<String> {
    META_CHARSET_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract the charset label from a `Content-Type` header value.
#[must_use]
pub fn content_type_charset(content_type: &str) -> Option<&'static Encoding> {
    MIME_CHARSET_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD rather than errors.
///
/// # Examples
///
/// ```
/// use rs_grader::encoding::transcode_to_utf8;
///
/// let html = b"<html><body><h1>Caf\xE9</h1></body></html>";
/// let latin1 = [&b"<meta charset=\"iso-8859-1\">"[..], &html[..]].concat();
/// assert!(transcode_to_utf8(&latin1).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    decode(html, detect_encoding(html))
}

/// Transcode HTTP response bytes, preferring the header charset.
///
/// A BOM still wins over the header, matching how browsers decode.
#[must_use]
pub fn transcode_with_content_type(html: &[u8], content_type: Option<&str>) -> String {
    if Encoding::for_bom(html).is_none() {
        if let Some(encoding) = content_type.and_then(content_type_charset) {
            return decode(html, encoding);
        }
    }
    transcode_to_utf8(html)
}

fn decode(html: &[u8], encoding: &'static Encoding) -> String {
    // `decode` strips a matching BOM and falls back to replacement characters
    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_to_utf8_when_no_charset() {
        let html = b"<html><body><h1>Test</h1></body></html>";
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn detect_iso88591_from_meta_charset() {
        let html = br#"<html><head><meta charset="ISO-8859-1"></head><body>Test</body></html>"#;
        // encoding_rs maps ISO-8859-1 to windows-1252 per WHATWG
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn detect_charset_from_http_equiv() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=Shift_JIS">"#;
        assert_eq!(detect_encoding(html).name(), "Shift_JIS");
    }

    #[test]
    fn bom_overrides_meta() {
        let mut html = vec![0xFF, 0xFE];
        for unit in "<meta charset=\"iso-8859-1\"><p>hi</p>".encode_utf16() {
            html.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(detect_encoding(&html).name(), "UTF-16LE");
        assert!(transcode_to_utf8(&html).contains("<p>hi</p>"));
    }

    #[test]
    fn meta_charset_case_insensitive() {
        let html = "<HTML><HEAD><META CHARSET=UTF-8></HEAD></HTML>";
        assert_eq!(meta_charset(html), Some("UTF-8".to_string()));
    }

    #[test]
    fn header_charset_takes_precedence() {
        let html = b"<meta charset=\"utf-8\"><p>Caf\xE9</p>";
        let text = transcode_with_content_type(html, Some("text/html; charset=windows-1252"));
        assert!(text.contains("Café"));
    }

    #[test]
    fn header_without_charset_falls_back_to_meta() {
        let html = b"<meta charset=\"windows-1252\"><p>\x93Hi\x94</p>";
        let text = transcode_with_content_type(html, Some("text/html"));
        assert!(text.contains("\u{201C}Hi\u{201D}"));
    }

    #[test]
    fn unknown_header_charset_is_ignored() {
        assert!(content_type_charset("text/html; charset=not-a-charset").is_none());
        assert_eq!(
            content_type_charset("text/html; charset=\"UTF-8\""),
            Some(UTF_8)
        );
    }

    #[test]
    fn handle_invalid_utf8_gracefully() {
        let text = transcode_to_utf8(b"<p>Test \xFF\xFE Invalid</p>");
        assert!(text.contains("Test"));
        assert!(text.contains('\u{FFFD}'));
    }
}
