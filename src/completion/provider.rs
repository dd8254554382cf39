//! Value-domain providers for completion candidates
//!
//! Providers are the sources of raw candidate strings. The engine depends
//! only on the [`ValueProvider`] trait, so the resolver never knows whether
//! candidates come from a declared literal set or from the filesystem.
//! Filesystem enumeration itself stays behind the [`PathLookup`] capability;
//! the default implementation wraps `std::fs` and maps every failure to an
//! empty candidate set, because a completion request must never error.

use std::fs;
use std::path::Path;

use tracing::debug;

/// Source of raw completion candidates for one value domain
pub trait ValueProvider {
    /// Candidates for the token under the cursor
    ///
    /// The returned set is raw: prefix filtering and deduplication happen
    /// downstream in the formatter.
    fn candidates(&self, current: &str) -> Vec<String>;
}

/// Provider over a fixed enumeration of literal strings
pub struct EnumProvider {
    choices: Vec<String>,
}

impl EnumProvider {
    /// Create a provider over the declared literal set
    pub fn new(choices: Vec<String>) -> Self {
        Self { choices }
    }
}

impl ValueProvider for EnumProvider {
    fn candidates(&self, _current: &str) -> Vec<String> {
        // Emitted as-is, in declared order; the filter narrows by prefix.
        self.choices.clone()
    }
}

/// Opaque filesystem enumeration capability
///
/// The engine treats path listing as an external collaborator: given the
/// prefix typed so far, return whatever the filesystem offers. An empty
/// result (nonexistent directory, permission failure) is a normal outcome.
pub trait PathLookup: Send + Sync {
    /// List path candidates sharing the given prefix
    fn list(&self, prefix: &str) -> Vec<String>;
}

/// Default [`PathLookup`] over `std::fs::read_dir`
///
/// Candidates keep the directory part the user already typed, so the prefix
/// filter downstream sees full relative paths. Directories are emitted with
/// a trailing `/` so repeated completion descends into them. Entries are
/// yielded in filesystem order, unsorted.
#[derive(Debug, Default)]
pub struct FsPathLookup;

impl PathLookup for FsPathLookup {
    fn list(&self, prefix: &str) -> Vec<String> {
        // Split the prefix into the directory to enumerate and the file-name
        // stem still being typed.
        let (dir_part, stem) = match prefix.rfind('/') {
            Some(idx) => (&prefix[..=idx], &prefix[idx + 1..]),
            None => ("", prefix),
        };
        let dir = if dir_part.is_empty() {
            Path::new(".")
        } else {
            Path::new(dir_part)
        };

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(dir = %dir.display(), %err, "path enumeration failed");
                return Vec::new();
            }
        };

        let mut candidates = Vec::new();
        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if !name.starts_with(stem) {
                continue;
            }
            let mut candidate = format!("{dir_part}{name}");
            if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                candidate.push('/');
            }
            candidates.push(candidate);
        }
        candidates
    }
}

/// Provider that delegates to a [`PathLookup`] capability
pub struct PathProvider<'a> {
    lookup: &'a dyn PathLookup,
}

impl<'a> PathProvider<'a> {
    /// Create a provider over the given capability
    pub fn new(lookup: &'a dyn PathLookup) -> Self {
        Self { lookup }
    }
}

impl ValueProvider for PathProvider<'_> {
    fn candidates(&self, current: &str) -> Vec<String> {
        self.lookup.list(current)
    }
}
