//! Completion resolution engine
//!
//! Given the partially typed command line and the cursor word index, decide
//! which strings the shell should offer for the token under the cursor.
//!
//! # Architecture
//!
//! The engine consists of several components:
//!
//! - **TokenLine**: the shell's word list with cursor awareness
//! - **Resolver**: state machine deciding what kind of token the cursor is on
//! - **Providers**: value-domain candidate sources (enum set, filesystem path)
//! - **Filter**: prefix narrowing and deduplication
//! - **Engine**: orchestrates the entire flow
//!
//! # Examples
//!
//! ```
//! use farcaster_complete::{CompletionEngine, GrammarRegistry};
//!
//! let engine = CompletionEngine::new(GrammarRegistry::farcasterd());
//!
//! // Complete `farcasterd --overlay t`
//! let words: Vec<String> = ["farcasterd", "--overlay", "t"]
//!     .iter()
//!     .map(|w| w.to_string())
//!     .collect();
//! let result = engine.complete(&words, 2);
//! assert_eq!(result.candidates(), ["tcp"]);
//! ```

mod engine;
mod filter;
pub mod provider;
mod resolver;
mod token_line;

pub use engine::{CompletionEngine, CompletionResult};
pub use provider::{FsPathLookup, PathLookup};
pub use resolver::ResolverState;
pub use token_line::TokenLine;
