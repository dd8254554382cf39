//! Flag grammar for the completed command
//!
//! The grammar is pure data: every flag the target program recognizes, its
//! short alias if it has one, and the kind of value its argument expects.
//! The registry is built once at process start and never mutated afterwards;
//! the resolver consults it on every completion request.

/// The name of the one command this crate ships a grammar for.
pub const FARCASTERD: &str = "farcasterd";

/// The kind of completion a flag's argument expects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueDomain {
    /// Boolean flag, takes no argument
    None,

    /// Argument drawn from a fixed set of literal strings, in declared order
    Enum(Vec<String>),

    /// Argument is a filesystem path
    Path,
}

impl ValueDomain {
    /// Whether a flag with this domain consumes the following word
    pub fn takes_value(&self) -> bool {
        !matches!(self, ValueDomain::None)
    }
}

/// One recognized flag of the target program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    /// Canonical long form, e.g. `--overlay`
    pub long: String,

    /// Optional short form, e.g. `-o`
    pub short: Option<String>,

    /// What the flag's argument completes to
    pub domain: ValueDomain,
}

impl OptionSpec {
    /// A boolean flag that takes no argument
    pub fn flag(long: &str, short: Option<&str>) -> Self {
        Self {
            long: long.to_string(),
            short: short.map(str::to_string),
            domain: ValueDomain::None,
        }
    }

    /// A flag whose argument is a filesystem path
    pub fn path(long: &str, short: Option<&str>) -> Self {
        Self {
            long: long.to_string(),
            short: short.map(str::to_string),
            domain: ValueDomain::Path,
        }
    }

    /// A flag whose argument is one of a fixed set of literals
    pub fn choices(long: &str, short: Option<&str>, values: &[&str]) -> Self {
        Self {
            long: long.to_string(),
            short: short.map(str::to_string),
            domain: ValueDomain::Enum(values.iter().map(|v| v.to_string()).collect()),
        }
    }

    /// Check whether a token names this flag, by long or short form
    pub fn matches(&self, token: &str) -> bool {
        self.long == token || self.short.as_deref() == Some(token)
    }
}

/// A command name plus its ordered set of option specs
///
/// Declaration order is stable and defines the default candidate ordering
/// whenever the full option list is offered.
#[derive(Debug, Clone)]
pub struct CommandGrammar {
    name: String,
    options: Vec<OptionSpec>,
}

impl CommandGrammar {
    /// Create a new grammar
    pub fn new(name: &str, options: Vec<OptionSpec>) -> Self {
        Self {
            name: name.to_string(),
            options,
        }
    }

    /// The command name this grammar describes
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The option specs, in declaration order
    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    /// Find the spec a token names, matching both long and short forms
    pub fn find(&self, token: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|spec| spec.matches(token))
    }

    /// Every long and short option name, in declaration order
    ///
    /// Each spec contributes its long form followed by its short form, so
    /// related names stay adjacent in the candidate list.
    pub fn option_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.options.len() * 2);
        for spec in &self.options {
            names.push(spec.long.clone());
            if let Some(short) = &spec.short {
                names.push(short.clone());
            }
        }
        names
    }
}

/// Registry mapping command names to their grammars
///
/// Lookup is exact string match only; a miss is a normal outcome that the
/// engine turns into an empty result, never an error.
#[derive(Debug, Clone, Default)]
pub struct GrammarRegistry {
    grammars: Vec<CommandGrammar>,
}

impl GrammarRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the farcasterd grammar
    pub fn farcasterd() -> Self {
        let mut registry = Self::new();
        registry.register(farcasterd_grammar());
        registry
    }

    /// Add a grammar to the registry
    pub fn register(&mut self, grammar: CommandGrammar) {
        self.grammars.push(grammar);
    }

    /// Look up a grammar by exact command name
    pub fn lookup(&self, name: &str) -> Option<&CommandGrammar> {
        self.grammars.iter().find(|g| g.name() == name)
    }

    /// The registered command names, in registration order
    pub fn command_names(&self) -> Vec<String> {
        self.grammars.iter().map(|g| g.name().to_string()).collect()
    }
}

/// The literal flag table of the farcasterd daemon
pub fn farcasterd_grammar() -> CommandGrammar {
    CommandGrammar::new(
        FARCASTERD,
        vec![
            OptionSpec::flag("--help", Some("-h")),
            OptionSpec::flag("--version", Some("-V")),
            OptionSpec::path("--listen", Some("-L")),
            OptionSpec::path("--connect", Some("-C")),
            // --port is numeric but the original table wires it to path
            // completion; kept verbatim rather than silently corrected.
            OptionSpec::path("--port", Some("-p")),
            OptionSpec::choices(
                "--overlay",
                Some("-o"),
                &["tcp", "zmq", "http", "websocket", "smtp"],
            ),
            OptionSpec::path("--peer-secret-key", None),
            OptionSpec::path("--wallet-token", None),
            OptionSpec::path("--data-dir", Some("-d")),
            OptionSpec::path("--config", Some("-c")),
            OptionSpec::flag("--verbose", None),
            OptionSpec::path("--tor-proxy", Some("-T")),
            OptionSpec::path("--msg-socket", Some("-m")),
            OptionSpec::path("--ctl-socket", Some("-x")),
            OptionSpec::path("--chain", Some("-n")),
            OptionSpec::path("--electrum-server", None),
            OptionSpec::path("--monero-daemon", None),
            OptionSpec::path("--monero-rpc-wallet", None),
        ],
    )
}
