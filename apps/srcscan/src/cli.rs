//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "a11y-check",
    version,
    about = "Flag block templates with <section> regions but no aria-label",
    long_about = "Scan render.php and edit.js files under the root (default: src) and report those containing <section without any aria-label.\n\nPrints `a11y: ok` or a JSON issue list. Exits 1 when issues are found.",
    after_help = "Examples:\n  a11y-check\n  a11y-check --root theme/src"
)]
/// Options for the accessibility check.
pub struct A11yCli {
    #[arg(long, help = "Directory to scan (default: src)")]
    pub root: Option<String>,
}

#[derive(Parser)]
#[command(
    name = "console-check",
    version,
    about = "Count .js files containing console.error or TODO: markers",
    long_about = "Scan .js files under the root (default: src) for console.error calls or TODO: markers.\n\nPrints `console-check: ok` or `console-check: issues <N>`. Exits 1 when N > 0.",
    after_help = "Examples:\n  console-check\n  console-check --root assets/js"
)]
/// Options for the console/TODO check.
pub struct ConsoleCli {
    #[arg(long, help = "Directory to scan (default: src)")]
    pub root: Option<String>,
}
