//! Farasa CLI entrypoint.
//!
//! Parses the arguments, runs the requested operation on a file or a
//! directory and exits non-zero on failure.

use clap::Parser;
use farasa_cli::commands::ProcessArgs;

fn main() {
    let args = ProcessArgs::parse();
    if let Err(e) = args.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
