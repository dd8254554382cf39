//! Prefix filter and formatter
//!
//! Narrows a provider's raw candidate set to the strings sharing the current
//! token as a literal prefix, drops exact duplicates, and keeps the
//! provider's emission order. An empty current token is a universal prefix.

use std::collections::HashSet;

/// Keep candidates sharing `current` as a byte-wise, case-sensitive prefix
///
/// Duplicates are removed; the first occurrence wins and order is otherwise
/// preserved.
pub fn filter_prefix(candidates: Vec<String>, current: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|candidate| candidate.starts_with(current))
        .filter(|candidate| seen.insert(candidate.clone()))
        .collect()
}
