//! Fixed rule tables for both checks.
//!
//! A rule pairs a path-suffix filter with a predicate over the whole file
//! text. Rules are evaluated in table order for every visited file.

use crate::error::Result;
use regex::Regex;
use std::path::Path;

pub const SECTION_ARIA_LABEL: &str = "section-aria-label";
pub const CONSOLE_ERROR_TODO: &str = "console-error-todo";

/// Text predicate applied to a file that passed the suffix filter.
pub enum Matcher {
    /// `<section` present and `aria-label` absent, anywhere in the file.
    SectionWithoutLabel,
    /// Any match of the pattern anywhere in the file.
    Pattern(Regex),
}

impl Matcher {
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Matcher::SectionWithoutLabel => {
                text.contains("<section") && !text.contains("aria-label")
            }
            Matcher::Pattern(re) => re.is_match(text),
        }
    }
}

pub struct Rule {
    pub id: &'static str,
    pub message: &'static str,
    /// Plain suffixes of the full path string, not extensions.
    pub suffixes: &'static [&'static str],
    pub matcher: Matcher,
}

impl Rule {
    pub fn applies_to(&self, path: &Path) -> bool {
        let p = path.to_string_lossy();
        self.suffixes.iter().any(|s| p.ends_with(s))
    }

    pub fn fires(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}

/// Rules run by `a11y-check`.
pub fn a11y_rules() -> Vec<Rule> {
    vec![Rule {
        id: SECTION_ARIA_LABEL,
        message: "Consider aria-label for repeated regions.",
        suffixes: &["render.php", "edit.js"],
        matcher: Matcher::SectionWithoutLabel,
    }]
}

/// Rules run by `console-check`.
pub fn console_rules() -> Result<Vec<Rule>> {
    Ok(vec![Rule {
        id: CONSOLE_ERROR_TODO,
        message: "Remove console.error calls and TODO: markers.",
        suffixes: &[".js"],
        matcher: Matcher::Pattern(Regex::new(r"console\.error|TODO:")?),
    }])
}
