//! Option registry — ordered table of early global options.

use std::fmt;

/// Value handed to an option handler once a table entry has matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Boolean option matched. Always means `true`.
    Flag,
    /// Value supplied inline (`--key=value`) or by the following token.
    Value(String),
    /// Value-taking option was the last token; nothing followed it.
    Missing,
}

impl OptionValue {
    /// String form of the value; `"true"` for a flag, `None` when missing.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Flag => Some("true"),
            OptionValue::Value(v) => Some(v),
            OptionValue::Missing => None,
        }
    }

    /// Owned string form, see [`OptionValue::as_str`].
    pub fn into_string(self) -> Option<String> {
        match self {
            OptionValue::Flag => Some("true".to_string()),
            OptionValue::Value(v) => Some(v),
            OptionValue::Missing => None,
        }
    }
}

/// Operation invoked on the result storage when its option matches.
pub type OptionHandler<S> = fn(&mut S, OptionValue);

/// A single `(key, handler)` pair.
///
/// Keys start with `-` or `--`. A key ending in `=` takes a value;
/// any other key is a boolean flag.
pub struct OptionEntry<S> {
    key: String,
    handler: OptionHandler<S>,
}

impl<S> OptionEntry<S> {
    pub fn new(key: impl Into<String>, handler: OptionHandler<S>) -> Self {
        Self {
            key: key.into(),
            handler,
        }
    }

    /// Key exactly as registered, including any trailing `=`.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Key with a single trailing `=` removed.
    pub fn bare_key(&self) -> &str {
        self.key.strip_suffix('=').unwrap_or(&self.key)
    }

    pub fn takes_value(&self) -> bool {
        self.key.ends_with('=')
    }

    pub fn handler(&self) -> OptionHandler<S> {
        self.handler
    }

    /// Entries whose key does not start with `-` can never match a token.
    pub fn is_well_formed(&self) -> bool {
        self.key.starts_with('-')
    }
}

// Manual impls: fn pointers are Copy regardless of `S`.
impl<S> Clone for OptionEntry<S> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            handler: self.handler,
        }
    }
}

impl<S> fmt::Debug for OptionEntry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionEntry")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// Ordered option table. The first entry matching a token wins.
pub struct OptionTable<S> {
    entries: Vec<OptionEntry<S>>,
}

impl<S> OptionTable<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry (builder form).
    pub fn with(mut self, key: impl Into<String>, handler: OptionHandler<S>) -> Self {
        self.push(OptionEntry::new(key, handler));
        self
    }

    pub fn push(&mut self, entry: OptionEntry<S>) {
        self.entries.push(entry);
    }

    /// Append every entry of `other` after the existing ones.
    pub fn extend(&mut self, other: OptionTable<S>) {
        self.entries.extend(other.entries);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OptionEntry<S>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered keys in table order.
    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(OptionEntry::key).collect()
    }
}

impl<S> Default for OptionTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for OptionTable<S> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<S> fmt::Debug for OptionTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}

impl<S> FromIterator<OptionEntry<S>> for OptionTable<S> {
    fn from_iter<I: IntoIterator<Item = OptionEntry<S>>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a, S> IntoIterator for &'a OptionTable<S> {
    type Item = &'a OptionEntry<S>;
    type IntoIter = std::slice::Iter<'a, OptionEntry<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
