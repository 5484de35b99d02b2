//! `console-check` entry point.
//! Counts `.js` files with `console.error` or `TODO:` and prints the total.

use clap::Parser;
use srcscan::cli::ConsoleCli;
use srcscan::{config, lint, output, rules, utils};

fn run(eff: &config::Effective) -> srcscan::error::Result<i32> {
    let result = lint::run_lint(&eff.root, &rules::console_rules()?)?;
    Ok(output::print_console(&result))
}

fn main() {
    let cli = ConsoleCli::parse();
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
