//! Completion Engine Library
//!
//! This library provides the completion resolution engine behind the
//! `farcaster-complete` helper binary: given the partially typed farcasterd
//! command line and the cursor word index, it decides which strings the
//! shell should offer for the token under the cursor.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `completion`: Tokenizer, resolver state machine, providers, engine
//! - `error`: Error types and handling
//! - `grammar`: Flag grammar registry for the completed command
//! - `shell`: Host-shell registration scripts
//!
//! # Example
//!
//! ```
//! use farcaster_complete::{CompletionEngine, GrammarRegistry};
//!
//! let engine = CompletionEngine::new(GrammarRegistry::farcasterd());
//! let words: Vec<String> = ["farcasterd", "--v"].iter().map(|w| w.to_string()).collect();
//!
//! let result = engine.complete(&words, 1);
//! assert_eq!(result.candidates(), ["--version", "--verbose"]);
//! ```

pub mod cli;
pub mod completion;
pub mod error;
pub mod grammar;
pub mod shell;

// Re-export commonly used types
pub use completion::{CompletionEngine, CompletionResult, FsPathLookup, PathLookup};
pub use error::{CompleteError, Result};
pub use grammar::{CommandGrammar, GrammarRegistry, OptionSpec, ValueDomain};
pub use shell::{Shell, registration_script};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
pub fn version() -> &'static str {
    VERSION
}
