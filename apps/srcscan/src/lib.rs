//! srcscan core library.
//!
//! Two fixed source-tree checks share one pipeline: walk the root, test each
//! file against a small rule table, then print a report and pick an exit code.
//! The `a11y-check` and `console-check` binaries are thin wrappers over it.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binaries use this).
//! - `config`: Effective settings resolution (scan root).
//! - `walk`: Recursive, deterministic file enumeration.
//! - `rules`: Rule tables for both checks.
//! - `lint`: Runs the rules over the walked files.
//! - `models`: Issue and result records.
//! - `output`: Report printers.
//! - `error`: Fatal error type.
//! - `utils`: Stderr prefixes and error formatting.
pub mod cli;
pub mod config;
pub mod error;
pub mod lint;
pub mod models;
pub mod output;
pub mod rules;
pub mod utils;
pub mod walk;
