//! Host-shell registration
//!
//! The shell never links this crate; it sources a small script that defines
//! a completion function and registers it for the target command. That
//! function shells out to the helper binary on every keystroke, passing the
//! word array and cursor index, and splits the line-oriented reply into the
//! shell's candidate buffer. Registration is explicit: the script is emitted
//! through a [`ShellHost`] the caller injects, never as an ambient side
//! effect.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::error::CompleteError;

/// Shells a registration script can be emitted for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
}

impl FromStr for Shell {
    type Err = CompleteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            other => Err(CompleteError::UnsupportedShell(other.to_string())),
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shell::Bash => write!(f, "bash"),
            Shell::Zsh => write!(f, "zsh"),
        }
    }
}

/// Destination a registration script is installed into
///
/// In production this is the user's shell init path via stdout; tests inject
/// a buffer instead.
pub trait ShellHost {
    /// Install the registration script for a command
    fn register(&mut self, command: &str, script: &str) -> io::Result<()>;
}

/// [`ShellHost`] that writes the script to any `Write` sink
pub struct ScriptWriter<W: Write> {
    out: W,
}

impl<W: Write> ScriptWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ShellHost for ScriptWriter<W> {
    fn register(&mut self, _command: &str, script: &str) -> io::Result<()> {
        self.out.write_all(script.as_bytes())
    }
}

/// Build the registration script for one shell
///
/// # Arguments
/// * `shell` - Target shell dialect
/// * `command` - Command name completion is registered for
/// * `helper` - Name of the helper binary the shell invokes per keystroke
pub fn registration_script(shell: Shell, command: &str, helper: &str) -> String {
    match shell {
        Shell::Bash => bash_script(command, helper),
        Shell::Zsh => zsh_script(command, helper),
    }
}

fn bash_script(command: &str, helper: &str) -> String {
    format!(
        r#"_{command}() {{
    local IFS=$'\n'
    COMPREPLY=( $({helper} complete --cword "${{COMP_CWORD}}" -- "${{COMP_WORDS[@]}}" 2>/dev/null) )
    return 0
}}
complete -F _{command} {command}
"#
    )
}

fn zsh_script(command: &str, helper: &str) -> String {
    format!(
        r#"#compdef {command}
_{command}() {{
    local -a candidates
    candidates=( ${{(f)"$({helper} complete --cword $((CURRENT - 1)) -- "${{words[@]}}" 2>/dev/null)"}} )
    (( ${{#candidates[@]}} )) && compadd -- "${{candidates[@]}}"
}}
compdef _{command} {command}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_parsing() {
        assert_eq!("bash".parse::<Shell>().unwrap(), Shell::Bash);
        assert_eq!("ZSH".parse::<Shell>().unwrap(), Shell::Zsh);
        assert!("fish".parse::<Shell>().is_err());
    }

    #[test]
    fn test_bash_script_registers_function() {
        let script = registration_script(Shell::Bash, "farcasterd", "farcaster-complete");

        assert!(script.contains("_farcasterd()"));
        assert!(script.contains("complete -F _farcasterd farcasterd"));
        assert!(script.contains(r#"--cword "${COMP_CWORD}""#));
        assert!(script.contains(r#""${COMP_WORDS[@]}""#));
    }

    #[test]
    fn test_zsh_script_registers_function() {
        let script = registration_script(Shell::Zsh, "farcasterd", "farcaster-complete");

        assert!(script.starts_with("#compdef farcasterd"));
        assert!(script.contains("compdef _farcasterd farcasterd"));
        assert!(script.contains("CURRENT - 1"));
    }

    #[test]
    fn test_script_writer_installs_script() {
        let mut buf = Vec::new();
        {
            let mut host = ScriptWriter::new(&mut buf);
            host.register("farcasterd", "complete -F _farcasterd farcasterd\n")
                .unwrap();
        }

        let written = String::from_utf8(buf).unwrap();
        assert_eq!(written, "complete -F _farcasterd farcasterd\n");
    }
}
