//! Per-character overrides layered over any emoji set.

use std::collections::HashMap;

use crate::error::ConvertError;
use crate::token::trim_emoji;

use super::Resolver;

/// Immutable character → token table. Keys are lowercased, values have their
/// colon delimiters stripped. Entries whose value is empty after stripping
/// are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideTable {
    entries: HashMap<char, String>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `c`, matching keys case-insensitively.
    pub fn get(&self, c: char) -> Option<&str> {
        self.entries.get(&lowercase_key(c)).map(String::as_str)
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.entries.iter().map(|(&c, token)| (c, token.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn lowercase_key(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        // multi-char lowercase forms can never match a single input char
        _ => c,
    }
}

impl<S: AsRef<str>> FromIterator<(char, S)> for OverrideTable {
    fn from_iter<I: IntoIterator<Item = (char, S)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .filter_map(|(key, value)| {
                let token = trim_emoji(value.as_ref());
                (!token.is_empty()).then(|| (lowercase_key(key), token.to_string()))
            })
            .collect();
        Self { entries }
    }
}

/// Decorator that answers from an [`OverrideTable`] before asking `inner`.
///
/// Overridden characters never reach the inner resolver, so alternation
/// counters and reaction colour bookkeeping only see characters the inner
/// resolver produced itself. Capacity is shared: an override token is still
/// checked against, and counted towards, the inner resolver's limit.
#[derive(Debug)]
pub struct Overridden<R> {
    inner: R,
    overrides: OverrideTable,
    last_overridden: bool,
    inner_wrote_in_word: bool,
}

impl<R: Resolver> Overridden<R> {
    pub fn new(inner: R, overrides: OverrideTable) -> Self {
        Self {
            inner,
            overrides,
            last_overridden: false,
            inner_wrote_in_word: false,
        }
    }
}

impl<R: Resolver> Resolver for Overridden<R> {
    fn resolve(&mut self, c: char) -> Result<Option<String>, ConvertError> {
        if let Some(token) = self.overrides.get(c) {
            self.inner.check_capacity()?;
            self.last_overridden = true;
            return Ok(Some(token.to_string()));
        }
        self.last_overridden = false;
        self.inner.resolve(c)
    }

    fn check_capacity(&self) -> Result<(), ConvertError> {
        self.inner.check_capacity()
    }

    fn commit_override(&mut self) {
        self.inner.commit_override();
    }

    fn commit_character(&mut self) {
        if self.last_overridden {
            self.inner.commit_override();
            return;
        }
        self.inner_wrote_in_word = true;
        self.inner.commit_character();
    }

    fn commit_word(&mut self) {
        if std::mem::take(&mut self.inner_wrote_in_word) {
            self.inner.commit_word();
        }
    }

    fn token_separator(&self) -> &'static str {
        self.inner.token_separator()
    }
}
