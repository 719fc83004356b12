//! directed-reads CLI entry point
//!
//! Parses arguments, dispatches to `cli::run`, prints process errors to
//! stderr and exits non-zero on failure. All logic lives in the CLI module.

use directed_reads::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
