//! Cursor-aware view of the shell's word list
//!
//! The host shell has already split the command line into words; this module
//! only pairs that word list with the cursor index and exposes the two tokens
//! the resolver cares about: the word under the cursor (possibly empty when
//! the cursor sits after a separator) and the completed word before it.

/// The word list of one completion request plus the cursor word index
#[derive(Debug, Clone)]
pub struct TokenLine {
    words: Vec<String>,
    cword: usize,
}

impl TokenLine {
    /// Create a token line from the shell's word array
    ///
    /// Never fails: an empty word list or an out-of-range cursor index
    /// degrades to empty current/previous tokens.
    pub fn new(words: &[String], cword: usize) -> Self {
        Self {
            words: words.to_vec(),
            cword,
        }
    }

    /// The word under the cursor, still being typed; empty if the cursor
    /// sits after a separator or past the end of the line
    pub fn current(&self) -> &str {
        self.words.get(self.cword).map(String::as_str).unwrap_or("")
    }

    /// The completed word immediately before the cursor, or empty if the
    /// cursor is on the first word
    pub fn previous(&self) -> &str {
        if self.cword == 0 {
            return "";
        }
        self.words
            .get(self.cword - 1)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// The first word of the line (the command name), or empty
    pub fn command(&self) -> &str {
        self.words.first().map(String::as_str).unwrap_or("")
    }

    /// The cursor word index
    pub fn cursor_index(&self) -> usize {
        self.cword
    }
}
