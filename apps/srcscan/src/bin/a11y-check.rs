//! `a11y-check` entry point.
//! Scans the root for unlabelled `<section>` regions and prints the report.

use clap::Parser;
use srcscan::cli::A11yCli;
use srcscan::{config, lint, output, rules, utils};

fn run(eff: &config::Effective) -> srcscan::error::Result<i32> {
    let result = lint::run_lint(&eff.root, &rules::a11y_rules())?;
    output::print_a11y(&result)
}

fn main() {
    let cli = A11yCli::parse();
    let eff = config::resolve_effective(cli.root.as_deref());
    if !eff.root.exists() {
        eprintln!(
            "{} {} not found; nothing to scan.",
            utils::note_prefix(),
            eff.root.display()
        );
    }
    match run(&eff) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), utils::error_chain(&e));
            std::process::exit(2);
        }
    }
}
