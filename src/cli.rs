//! Command-line interface for the completion helper
//!
//! This module handles:
//! - Argument parsing using clap
//! - The per-keystroke `complete` invocation the shell function performs
//! - The `script` subcommand that emits the registration script
//! - Output format selection (plain lines for the shell, JSON for tooling)

use std::io::{self, Write};

use clap::{Parser, Subcommand};

use crate::completion::{CompletionEngine, CompletionResult};
use crate::error::Result;
use crate::grammar::{self, GrammarRegistry};
use crate::shell::{self, ScriptWriter, Shell, ShellHost};

/// Shell tab-completion helper for the farcasterd daemon
#[derive(Parser, Debug)]
#[command(
    name = "farcaster-complete",
    version,
    about = "Shell tab-completion helper for farcasterd",
    long_about = "Resolves tab-completion requests for the farcasterd command line.
The shell sources the output of the `script` subcommand once; the installed
completion function then runs the `complete` subcommand on every keystroke."
)]
pub struct CliArgs {
    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands of the helper
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve one completion request and print the candidates
    Complete {
        /// Index of the word under the cursor
        #[arg(long, value_name = "INDEX")]
        cword: usize,

        /// Output format (plain, json)
        #[arg(long, value_name = "FORMAT", default_value = "plain")]
        format: String,

        /// The command line, as already split into words by the shell
        #[arg(value_name = "WORD")]
        words: Vec<String>,
    },

    /// Print the registration script for a shell
    Script {
        /// Shell type (bash, zsh)
        #[arg(value_name = "SHELL")]
        shell: String,
    },
}

/// Candidate output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One candidate per line, for the shell to split into COMPREPLY
    Plain,

    /// JSON array, for tooling and tests
    Json,
}

/// Parse the output format string
pub fn parse_output_format(format_str: &str) -> OutputFormat {
    match format_str.to_lowercase().as_str() {
        "plain" => OutputFormat::Plain,
        "json" => OutputFormat::Json,
        _ => {
            eprintln!("Warning: Unknown format '{}', using plain", format_str);
            OutputFormat::Plain
        }
    }
}

/// CLI interface handler
pub struct CliInterface {
    args: CliArgs,
}

impl CliInterface {
    /// Parse the process arguments
    pub fn new() -> Self {
        Self {
            args: CliArgs::parse(),
        }
    }

    /// Create an interface over pre-parsed arguments
    pub fn from_args(args: CliArgs) -> Self {
        Self { args }
    }

    /// Dispatch the parsed subcommand
    pub fn run(self) -> Result<()> {
        match self.args.command {
            Commands::Complete {
                cword,
                format,
                words,
            } => {
                // Built once per invocation; each invocation is one request.
                let engine = CompletionEngine::new(GrammarRegistry::farcasterd());
                let result = engine.complete(&words, cword);
                write_result(&mut io::stdout().lock(), &result, parse_output_format(&format))
            }
            Commands::Script { shell } => {
                let shell: Shell = shell.parse()?;
                let script =
                    shell::registration_script(shell, grammar::FARCASTERD, "farcaster-complete");
                let mut host = ScriptWriter::new(io::stdout().lock());
                host.register(grammar::FARCASTERD, &script)?;
                Ok(())
            }
        }
    }
}

impl Default for CliInterface {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a completion result to a sink in the chosen format
fn write_result<W: Write>(out: &mut W, result: &CompletionResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            for candidate in result.candidates() {
                writeln!(out, "{candidate}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, result)
                .map_err(|e| crate::error::CompleteError::Generic(e.to_string()))?;
            writeln!(out)?;
        }
    }
    Ok(())
}
