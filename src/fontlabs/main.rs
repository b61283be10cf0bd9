//! # Fontlabs CLI
//!
//! The binary is thin: argument definitions live in `args.rs`, context wiring and
//! dispatch in `cli/`, and this file only turns an error into an exit code.
//! Everything below `cli/` is the UI-agnostic library.

mod args;
mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
