//! Completion engine - orchestrates the completion flow
//!
//! One call per keystroke: word list + cursor index in, candidate list out.
//! The pipeline is resolve (against the grammar registry) then provide (from
//! the matching value-domain provider) then filter (by the current token's
//! prefix). There is no error channel anywhere on this path; unknown
//! commands, unmatched previous tokens and provider failures all degrade to
//! the best-available candidate set.

use tracing::debug;

use super::filter::filter_prefix;
use super::provider::{EnumProvider, FsPathLookup, PathLookup, PathProvider, ValueProvider};
use super::resolver::ResolverState;
use super::token_line::TokenLine;
use crate::grammar::{GrammarRegistry, ValueDomain};

/// Ordered, deduplicated candidate strings for one completion request
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
#[serde(transparent)]
pub struct CompletionResult {
    candidates: Vec<String>,
}

impl CompletionResult {
    /// An empty result
    pub fn empty() -> Self {
        Self::default()
    }

    /// The candidates, in emission order
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Whether the result offers nothing
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        self.candidates.len()
    }
}

impl From<Vec<String>> for CompletionResult {
    fn from(candidates: Vec<String>) -> Self {
        Self { candidates }
    }
}

impl IntoIterator for CompletionResult {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.into_iter()
    }
}

/// Main completion engine
///
/// Holds the immutable grammar registry and the filesystem capability; all
/// per-request state lives on the stack of [`CompletionEngine::complete`],
/// so identical requests always yield identical results.
pub struct CompletionEngine {
    registry: GrammarRegistry,
    paths: Box<dyn PathLookup>,
}

impl CompletionEngine {
    /// Create an engine over a registry, using the real filesystem for
    /// path completion
    pub fn new(registry: GrammarRegistry) -> Self {
        Self::with_path_lookup(registry, Box::new(FsPathLookup))
    }

    /// Create an engine with an injected path capability
    pub fn with_path_lookup(registry: GrammarRegistry, paths: Box<dyn PathLookup>) -> Self {
        Self { registry, paths }
    }

    /// Resolve one completion request
    ///
    /// # Arguments
    /// * `words` - The command line as split by the host shell
    /// * `cword` - Index of the word under the cursor
    ///
    /// # Returns
    /// * `CompletionResult` - Possibly empty, never an error
    pub fn complete(&self, words: &[String], cword: usize) -> CompletionResult {
        let line = TokenLine::new(words, cword);
        let raw = self.raw_candidates(&line);
        CompletionResult::from(filter_prefix(raw, line.current()))
    }

    /// Raw candidates for the request, before prefix filtering
    fn raw_candidates(&self, line: &TokenLine) -> Vec<String> {
        if line.cursor_index() == 0 {
            return self.registry.command_names();
        }

        let Some(grammar) = self.registry.lookup(line.command()) else {
            debug!(command = line.command(), "no grammar for command");
            return Vec::new();
        };

        match ResolverState::resolve(line, grammar) {
            ResolverState::ExpectCommandName => self.registry.command_names(),
            ResolverState::ExpectOptionOrPositional => grammar.option_names(),
            ResolverState::ExpectOptionValue(ValueDomain::Enum(choices)) => {
                EnumProvider::new(choices).candidates(line.current())
            }
            ResolverState::ExpectOptionValue(ValueDomain::Path) => {
                PathProvider::new(self.paths.as_ref()).candidates(line.current())
            }
            // The resolver never advances on a boolean flag; kept for
            // exhaustiveness.
            ResolverState::ExpectOptionValue(ValueDomain::None) => grammar.option_names(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::provider::PathLookup;

    fn words(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|w| w.to_string()).collect()
    }

    fn create_test_engine() -> CompletionEngine {
        CompletionEngine::new(GrammarRegistry::farcasterd())
    }

    /// Path capability with a canned candidate set, for tests that must not
    /// touch the real filesystem.
    struct FixedPaths(Vec<String>);

    impl PathLookup for FixedPaths {
        fn list(&self, prefix: &str) -> Vec<String> {
            self.0
                .iter()
                .filter(|p| p.starts_with(prefix))
                .cloned()
                .collect()
        }
    }

    fn engine_with_paths(paths: &[&str]) -> CompletionEngine {
        CompletionEngine::with_path_lookup(
            GrammarRegistry::farcasterd(),
            Box::new(FixedPaths(paths.iter().map(|p| p.to_string()).collect())),
        )
    }

    #[test]
    fn test_cursor_zero_completes_command_name() {
        let engine = create_test_engine();

        let result = engine.complete(&words(&["farc"]), 0);
        assert_eq!(result.candidates(), ["farcasterd"]);

        let result = engine.complete(&words(&[""]), 0);
        assert_eq!(result.candidates(), ["farcasterd"]);

        let result = engine.complete(&words(&["lnpd"]), 0);
        assert!(result.is_empty());
    }

    #[test]
    fn test_cursor_zero_with_empty_line() {
        let engine = create_test_engine();
        let result = engine.complete(&[], 0);

        assert_eq!(result.candidates(), ["farcasterd"]);
    }

    #[test]
    fn test_overlay_empty_current_offers_full_enum_in_declared_order() {
        let engine = create_test_engine();
        let result = engine.complete(&words(&["farcasterd", "--overlay", ""]), 2);

        assert_eq!(
            result.candidates(),
            ["tcp", "zmq", "http", "websocket", "smtp"]
        );
    }

    #[test]
    fn test_overlay_prefix_t_offers_tcp() {
        let engine = create_test_engine();
        let result = engine.complete(&words(&["farcasterd", "--overlay", "t"]), 2);

        assert_eq!(result.candidates(), ["tcp"]);
    }

    #[test]
    fn test_overlay_prefix_z_offers_zmq() {
        let engine = create_test_engine();
        let result = engine.complete(&words(&["farcasterd", "--overlay", "z"]), 2);

        assert_eq!(result.candidates(), ["zmq"]);
    }

    #[test]
    fn test_overlay_short_form_behaves_like_long() {
        let engine = create_test_engine();
        let result = engine.complete(&words(&["farcasterd", "-o", "w"]), 2);

        assert_eq!(result.candidates(), ["websocket"]);
    }

    #[test]
    fn test_unknown_previous_flag_falls_back_to_option_list() {
        let engine = create_test_engine();
        let result = engine.complete(&words(&["farcasterd", "--unknown-flag", ""]), 2);

        let grammar = crate::grammar::farcasterd_grammar();
        assert_eq!(result.candidates(), grammar.option_names());
    }

    #[test]
    fn test_unknown_previous_flag_with_prefix_filters_option_list() {
        let engine = create_test_engine();
        let result = engine.complete(&words(&["farcasterd", "--unknown-flag", "--over"]), 2);

        assert_eq!(result.candidates(), ["--overlay"]);
    }

    #[test]
    fn test_dash_dash_v_offers_verbose_and_version_only() {
        let engine = create_test_engine();
        let result = engine.complete(&words(&["farcasterd", "--v"]), 1);

        assert_eq!(result.candidates(), ["--version", "--verbose"]);
    }

    #[test]
    fn test_boolean_flag_previous_offers_option_list() {
        let engine = create_test_engine();
        let result = engine.complete(&words(&["farcasterd", "--verbose", "--c"]), 2);

        assert_eq!(
            result.candidates(),
            ["--connect", "--config", "--ctl-socket", "--chain"]
        );
    }

    #[test]
    fn test_positional_value_reoffers_option_list() {
        // Deliberate behavior: bare positionals are not special-cased, so
        // completion after one re-offers the option list.
        let engine = create_test_engine();
        let result = engine.complete(&words(&["farcasterd", "wallet.dat", ""]), 2);

        assert!(!result.is_empty());
        assert_eq!(result.candidates()[0], "--help");
    }

    #[test]
    fn test_path_value_comes_from_capability() {
        let engine = engine_with_paths(&["wallet.dat", "wallet.bak", "config.toml"]);
        let result = engine.complete(&words(&["farcasterd", "--wallet-token", "wal"]), 2);

        assert_eq!(result.candidates(), ["wallet.dat", "wallet.bak"]);
    }

    #[test]
    fn test_port_completes_as_path() {
        // Preserved oddity: --port is wired to path completion.
        let engine = engine_with_paths(&["8080-notes.txt"]);
        let result = engine.complete(&words(&["farcasterd", "--port", "80"]), 2);

        assert_eq!(result.candidates(), ["8080-notes.txt"]);
    }

    #[test]
    fn test_path_capability_failure_degrades_to_empty() {
        let engine = engine_with_paths(&[]);
        let result = engine.complete(&words(&["farcasterd", "--config", "/nope/"]), 2);

        assert!(result.is_empty());
    }

    #[test]
    fn test_unknown_command_yields_empty_result() {
        let engine = create_test_engine();
        let result = engine.complete(&words(&["lnpd", "--overlay", ""]), 2);

        assert!(result.is_empty());
    }

    #[test]
    fn test_idempotence() {
        let engine = create_test_engine();
        let request = words(&["farcasterd", "--overlay", "t"]);

        let first = engine.complete(&request, 2);
        let second = engine.complete(&request, 2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_result_has_no_duplicates() {
        let engine = engine_with_paths(&["wallet.dat", "wallet.dat"]);
        let result = engine.complete(&words(&["farcasterd", "--config", "wal"]), 2);

        assert_eq!(result.candidates(), ["wallet.dat"]);
    }

    #[test]
    fn test_result_serializes_as_json_array() {
        let engine = create_test_engine();
        let result = engine.complete(&words(&["farcasterd", "--overlay", "t"]), 2);

        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"["tcp"]"#);
    }
}
