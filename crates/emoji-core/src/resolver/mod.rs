//! Character-to-emoji resolution.
//!
//! Each emoji set implements [`Resolver`]. The transducer calls `resolve` for
//! every character and, once a token has actually been written, the commit
//! callbacks so stateful sets can advance their alternation counters.

use std::fmt;

use crate::error::ConvertError;

pub mod alphabet;
pub mod overrides;
pub mod reaction;
pub mod strategy;
pub mod tile;

pub use alphabet::{AlphabetResolver, Pattern};
pub use overrides::{OverrideTable, Overridden};
pub use reaction::{ReactionResolver, MAX_REACTIONS};
pub use strategy::EmojiSet;
pub use tile::TileResolver;

pub trait Resolver {
    /// Map a (lowercased) character to a token. `Ok(None)` means the
    /// character has no emoji and is skipped without any state change.
    fn resolve(&mut self, c: char) -> Result<Option<String>, ConvertError>;

    /// Fails once no further token may be written, whoever produced it.
    fn check_capacity(&self) -> Result<(), ConvertError> {
        Ok(())
    }

    /// Called after a token returned by `resolve` was written.
    fn commit_character(&mut self) {}

    /// Called after a token from an override was written in place of one of
    /// ours. Only capacity accounting should change here.
    fn commit_override(&mut self) {}

    /// Called once per word boundary after a word that wrote at least one token.
    fn commit_word(&mut self) {}

    /// Literal appended after every written token.
    fn token_separator(&self) -> &'static str {
        ""
    }
}

/// Symbolic name of a character within the alphabet emoji set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suffix {
    Letter(char),
    Symbol(&'static str),
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(c) => write!(f, "{c}"),
            Self::Symbol(name) => f.write_str(name),
        }
    }
}

/// Lowercase ASCII letters map to themselves, plus a handful of punctuation.
pub fn alphabet_suffix(c: char) -> Option<Suffix> {
    match c {
        '!' => Some(Suffix::Symbol("exclamation")),
        '#' => Some(Suffix::Symbol("hash")),
        '?' => Some(Suffix::Symbol("question")),
        '@' => Some(Suffix::Symbol("at")),
        'a'..='z' => Some(Suffix::Letter(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_for_letters() {
        assert_eq!(alphabet_suffix('a'), Some(Suffix::Letter('a')));
        assert_eq!(alphabet_suffix('z').unwrap().to_string(), "z");
    }

    #[test]
    fn suffix_for_punctuation() {
        let names: Vec<String> = ['!', '#', '?', '@']
            .into_iter()
            .map(|c| alphabet_suffix(c).unwrap().to_string())
            .collect();
        assert_eq!(names, ["exclamation", "hash", "question", "at"]);
    }

    #[test]
    fn suffix_for_unsupported() {
        assert_eq!(alphabet_suffix('A'), None);
        assert_eq!(alphabet_suffix('$'), None);
        assert_eq!(alphabet_suffix('4'), None);
        assert_eq!(alphabet_suffix('é'), None);
    }
}
