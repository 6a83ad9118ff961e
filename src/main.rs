//! stores-api entry point
//!
//! Parses arguments and hands off to the CLI module. Errors go to stderr
//! and the process exits non-zero.

use stores_api::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
