//! Output rendering for both checks.
//!
//! Each check has a pure `compose_*` function used by tests and a `print_*`
//! wrapper that writes to stdout. stdout carries only the report.

use crate::error::Result;
use crate::models::{IssueReport, LintResult};

/// Exit status when a check finds something.
pub const EXIT_FINDINGS: i32 = 1;

/// Compose the accessibility report: `a11y: ok` or a pretty JSON issue list.
pub fn compose_a11y(res: &LintResult) -> Result<String> {
    if res.passed() {
        return Ok("a11y: ok".to_string());
    }
    let report = IssueReport {
        issues: &res.issues,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Compose the console report from the bad-file count.
pub fn compose_console(res: &LintResult) -> String {
    match res.summary.bad_files {
        0 => "console-check: ok".to_string(),
        n => format!("console-check: issues {}", n),
    }
}

/// Print the accessibility report and return the process exit status.
pub fn print_a11y(res: &LintResult) -> Result<i32> {
    println!("{}", compose_a11y(res)?);
    Ok(exit_status(res))
}

/// Print the console report and return the process exit status.
pub fn print_console(res: &LintResult) -> i32 {
    println!("{}", compose_console(res));
    exit_status(res)
}

fn exit_status(res: &LintResult) -> i32 {
    if res.passed() {
        0
    } else {
        EXIT_FINDINGS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Issue, Summary};
    use serde_json::Value as JsonVal;

    fn issue(file: &str) -> Issue {
        Issue {
            file: file.into(),
            rule: "section-aria-label".into(),
            msg: "Consider aria-label for repeated regions.".into(),
        }
    }

    #[test]
    fn test_compose_a11y_ok() {
        let res = LintResult::default();
        assert_eq!(compose_a11y(&res).unwrap(), "a11y: ok");
        assert_eq!(exit_status(&res), 0);
    }

    #[test]
    fn test_compose_a11y_json_shape() {
        let res = LintResult {
            issues: vec![issue("src/render.php"), issue("src/blocks/edit.js")],
            summary: Summary {
                files: 2,
                bad_files: 2,
            },
        };
        let out = compose_a11y(&res).unwrap();
        let v: JsonVal = serde_json::from_str(&out).unwrap();
        assert_eq!(v["issues"].as_array().unwrap().len(), 2);
        assert_eq!(v["issues"][0]["file"], "src/render.php");
        assert_eq!(v["issues"][0]["rule"], "section-aria-label");
        assert_eq!(v["issues"][1]["file"], "src/blocks/edit.js");
        assert_eq!(exit_status(&res), EXIT_FINDINGS);
    }

    #[test]
    fn test_compose_a11y_pretty_layout() {
        let res = LintResult {
            issues: vec![issue("src/render.php")],
            summary: Summary::default(),
        };
        let expected = r#"{
  "issues": [
    {
      "file": "src/render.php",
      "rule": "section-aria-label",
      "msg": "Consider aria-label for repeated regions."
    }
  ]
}"#;
        assert_eq!(compose_a11y(&res).unwrap(), expected);
    }

    #[test]
    fn test_compose_console() {
        let mut res = LintResult::default();
        assert_eq!(compose_console(&res), "console-check: ok");
        res.summary.bad_files = 2;
        res.issues = vec![issue("src/a.js"), issue("src/b.js")];
        assert_eq!(compose_console(&res), "console-check: issues 2");
        assert_eq!(exit_status(&res), EXIT_FINDINGS);
    }
}
