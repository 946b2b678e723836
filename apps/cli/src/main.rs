//! # Grocer Command-Line Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          grocer                                 │
//! │                                                                 │
//! │  main.rs ────► thin wrapper, maps run() to the exit code        │
//! │                                                                 │
//! │  lib.rs ─────► argument parsing, logging, data directory        │
//! │                                                                 │
//! │  commands/ ──► list, add, update, delete                        │
//! │                                                                 │
//! │  error.rs ───► CliError, what the user sees on failure          │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use std::process;

fn main() {
    // The actual setup lives in lib.rs for better testability
    process::exit(grocer_cli::run());
}
