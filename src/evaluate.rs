//! Check evaluation.
//!
//! Runs every selector of a checks list against one parsed document. There is
//! no short-circuiting: each selector is queried in list order and recorded
//! in the report, with later duplicates overwriting earlier ones.

use crate::document::{self, Document};
use crate::error::Result;
use crate::report::CheckReport;

/// Evaluate `checks` against `doc`.
///
/// Stops at the first selector that fails to parse.
pub fn evaluate<S: AsRef<str>>(doc: &Document, checks: &[S]) -> Result<CheckReport> {
    let mut report = CheckReport::new();
    for selector in checks {
        let selector = selector.as_ref();
        let matches = document::count_matches(doc, selector)?;
        tracing::trace!(selector, matches, "checked selector");
        report.insert(selector, matches > 0);
    }
    tracing::debug!(
        checks = checks.len(),
        passed = report.passed(),
        failed = report.failed(),
        "evaluated checks"
    );
    Ok(report)
}
