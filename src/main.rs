//! Completion helper for the farcasterd command line
//!
//! The shell sources `farcaster-complete script bash` (or `zsh`) once at
//! startup; the installed completion function then invokes
//! `farcaster-complete complete` on every keystroke and renders whatever
//! candidates come back. Each invocation is one independent, stateless
//! completion request.
//!
//! # Usage
//!
//! ```bash
//! # Register completion for farcasterd
//! source <(farcaster-complete script bash)
//! ```

use std::io;

use tracing_subscriber::EnvFilter;

mod cli;
mod completion;
mod error;
mod grammar;
mod shell;

use cli::CliInterface;
use error::Result;

/// Application entry point
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic
///
/// 1. Initialize logging
/// 2. Parse command-line arguments
/// 3. Dispatch the subcommand
fn run() -> Result<()> {
    initialize_logging();

    let cli = CliInterface::new();
    cli.run()
}

/// Initialize tracing from the environment
///
/// Diagnostics go to stderr: stdout belongs to the candidate stream the
/// shell captures, and must carry nothing else.
fn initialize_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}
