//! Lint runner: walks the root and evaluates the rule table per file.
//!
//! Produces a `LintResult` with issues in traversal order and a summary.
//! Each file is read once, fully, and only when some rule's suffix filter
//! accepts its path.

use crate::error::{Result, ScanError};
use crate::models::{Issue, LintResult, Summary};
use crate::rules::Rule;
use crate::walk::walk_files;
use std::fs;
use std::path::Path;

/// Run `rules` against every file under `root`.
///
/// A missing root yields an empty, passing result. Filesystem failures abort
/// the run.
pub fn run_lint(root: &Path, rules: &[Rule]) -> Result<LintResult> {
    let mut issues: Vec<Issue> = Vec::new();
    let mut summary = Summary::default();

    for path in walk_files(root)? {
        let applicable: Vec<&Rule> = rules.iter().filter(|r| r.applies_to(&path)).collect();
        if applicable.is_empty() {
            continue;
        }
        let text = read_text(&path)?;
        summary.files += 1;

        let file = path.to_string_lossy().to_string();
        let before = issues.len();
        for rule in applicable {
            if rule.fires(&text) {
                issues.push(Issue {
                    file: file.clone(),
                    rule: rule.id.to_string(),
                    msg: rule.message.to_string(),
                });
            }
        }
        if issues.len() > before {
            summary.bad_files += 1;
        }
    }

    Ok(LintResult { issues, summary })
}

/// Read a file as text, replacing invalid UTF-8 rather than failing.
fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| ScanError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
