//! Resolver state machine
//!
//! A single data-driven lookup decides what the token under the cursor can
//! be: the command name itself, one of the command's option names, or a value
//! for the option named by the previous token. The resolver is deliberately
//! error-tolerant: anything it cannot classify falls back to offering the
//! full option list, so a keystroke never surfaces a failure.

use super::token_line::TokenLine;
use crate::grammar::{CommandGrammar, ValueDomain};

/// What kind of token the cursor is on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverState {
    /// Cursor is on the first word: complete the command name
    ExpectCommandName,

    /// Default state: offer the full option-name list
    ///
    /// This also covers unmatched previous tokens and bare positionals; the
    /// grammar does not special-case positional arguments, so they re-offer
    /// the option list.
    ExpectOptionOrPositional,

    /// Previous token named a value-taking option: complete its argument
    ExpectOptionValue(ValueDomain),
}

impl ResolverState {
    /// Classify one request against the command's grammar
    pub fn resolve(line: &TokenLine, grammar: &CommandGrammar) -> Self {
        if line.cursor_index() == 0 {
            return ResolverState::ExpectCommandName;
        }

        match grammar.find(line.previous()) {
            Some(spec) if spec.domain.takes_value() => {
                ResolverState::ExpectOptionValue(spec.domain.clone())
            }
            // Boolean flag or no matching spec at all: both fall back to
            // the option list.
            _ => ResolverState::ExpectOptionOrPositional,
        }
    }
}
