//! Addrof library crate
//!
//! This crate backs the `addrof` CLI, a tiny walkthrough of address-of and
//! dereference using borrowed references. It is organized into two small
//! modules: `report` (renders the value/address lines) and `arith` (the cube
//! helper). The binary `src/main.rs` calls `addrof_lib::run()`.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.

pub mod arith;
pub mod report;

use std::ffi::OsString;
use std::io;

use clap::Parser;

use crate::report::write_report;

/// Value stored in the demonstrated variable.
pub const AGE: i32 = 30;

/// Top-level CLI types and runner. Keep `main.rs` thin.
///
/// The program takes no input: any arguments are accepted and ignored, and
/// the built-in help/version flags are disabled so they are ignored too.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _rest: Vec<OsString>,
}

/// Run the addrof CLI.
///
/// Prints the five report lines for [`AGE`] to stdout. Command-line
/// arguments have no effect. A failed write to stdout is printed to stderr
/// and exits the process with code 1.
///
/// ```no_run
/// addrof_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    let _cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_report(&mut out, AGE) {
        eprintln!("error: failed to write report: {}", e);
        std::process::exit(1);
    }
}
