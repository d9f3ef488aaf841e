//! Option matcher — token × option table → handler and value.

use crate::args::registry::{OptionEntry, OptionTable};

/// Value produced by a successful match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchedValue {
    /// Boolean option; the recorded value is `true`.
    Flag,
    /// Value given inline as `--key=value`.
    Inline(String),
    /// Value-taking option given without a value; pull it from the next token.
    Pending,
}

/// A table entry that matched a token.
#[derive(Debug)]
pub struct OptionMatch<'a, S> {
    pub entry: &'a OptionEntry<S>,
    pub value: MatchedValue,
}

/// Find the first entry in `table` matching `token`.
///
/// Returns `None` for empty tokens, tokens not starting with `-`, and
/// tokens no entry accepts.
pub fn find_option<'a, S>(table: &'a OptionTable<S>, token: &str) -> Option<OptionMatch<'a, S>> {
    if token.is_empty() || !token.starts_with('-') {
        return None;
    }

    table.iter().find_map(|entry| {
        check_option(entry, token).map(|value| OptionMatch { entry, value })
    })
}

/// Check a single entry against `token`.
pub fn check_option<S>(entry: &OptionEntry<S>, token: &str) -> Option<MatchedValue> {
    if !entry.is_well_formed() {
        return None;
    }

    let key = entry.bare_key();
    let takes_value = entry.takes_value();

    if !token.starts_with(key) {
        return None;
    }

    if token.len() == key.len() {
        return Some(if takes_value {
            MatchedValue::Pending
        } else {
            MatchedValue::Flag
        });
    }

    // Boolean keys never absorb a suffix (`--debug=1` is not `--debug`).
    if !takes_value {
        return None;
    }

    // Only double-dash options accept the inline `=value` form.
    let bytes = token.as_bytes();
    if bytes.get(1) == Some(&b'-') && bytes[key.len()] == b'=' {
        return Some(MatchedValue::Inline(token[key.len() + 1..].to_string()));
    }

    None
}
