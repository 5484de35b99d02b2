//! Data records produced by a scan and consumed by the printers.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single finding for one file.
pub struct Issue {
    pub file: String,
    pub rule: String,
    pub msg: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// Counters gathered while scanning.
pub struct Summary {
    /// Files that matched at least one rule filter and were read.
    ///
    /// Neither printed report shows this; it is kept for library callers
    /// that want to tell an empty scan from a clean one.
    pub files: usize,
    /// Files with at least one finding.
    pub bad_files: usize,
}

#[derive(Debug, Default)]
/// Findings of one run, in traversal order.
pub struct LintResult {
    pub issues: Vec<Issue>,
    pub summary: Summary,
}

impl LintResult {
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}

#[derive(Serialize)]
/// JSON shape of the accessibility report.
pub struct IssueReport<'a> {
    pub issues: &'a [Issue],
}
