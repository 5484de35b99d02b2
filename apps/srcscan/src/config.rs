//! Effective settings resolution.
//!
//! Both checks read no config file; the only setting is the scan root.
//! Defaults:
//! - `root`: `src`, relative to the current working directory
//!
//! Overrides precedence: CLI > defaults.

use std::path::PathBuf;

pub const DEFAULT_ROOT: &str = "src";

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the checks after applying precedence.
pub struct Effective {
    pub root: PathBuf,
}

/// Resolve `Effective` by merging CLI flags and defaults.
pub fn resolve_effective(cli_root: Option<&str>) -> Effective {
    let root = PathBuf::from(cli_root.unwrap_or(DEFAULT_ROOT));
    Effective { root }
}
