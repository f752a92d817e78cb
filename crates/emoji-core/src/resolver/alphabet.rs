use std::fmt;
use std::str::FromStr;

use crate::colour::Colour;
use crate::error::ConvertError;

use super::{alphabet_suffix, Resolver};

/// Token prefix shared by the alphabet and reaction sets.
pub(crate) const ALPHABET_PREFIX: &str = "alphabet";

/// Colour alternation for the alphabet set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pattern {
    /// Alternate on every written character.
    #[default]
    PerLetter,
    /// Alternate on every word that wrote at least one character.
    PerWord,
    Fixed(Colour),
}

impl Pattern {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PerLetter => "letter",
            Self::PerWord => "word",
            Self::Fixed(colour) => colour.as_str(),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pattern: {0} (expected letter, word, yellow or white)")]
pub struct UnknownPattern(pub String);

impl FromStr for Pattern {
    type Err = UnknownPattern;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "letter" => Ok(Self::PerLetter),
            "word" => Ok(Self::PerWord),
            other => other
                .parse::<Colour>()
                .map(Self::Fixed)
                .map_err(|_| UnknownPattern(other.to_string())),
        }
    }
}

/// Slack-style alphabet emoji in white and yellow.
#[derive(Debug, Default)]
pub struct AlphabetResolver {
    pattern: Pattern,
    written_letters: usize,
    written_words: usize,
}

impl AlphabetResolver {
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            written_letters: 0,
            written_words: 0,
        }
    }

    fn colour(&self) -> Colour {
        match self.pattern {
            Pattern::PerLetter => Colour::for_index(self.written_letters),
            Pattern::PerWord => Colour::for_index(self.written_words),
            Pattern::Fixed(colour) => colour,
        }
    }
}

impl Resolver for AlphabetResolver {
    fn resolve(&mut self, c: char) -> Result<Option<String>, ConvertError> {
        Ok(alphabet_suffix(c)
            .map(|suffix| format!("{ALPHABET_PREFIX}-{}-{suffix}", self.colour())))
    }

    fn commit_character(&mut self) {
        self.written_letters += 1;
    }

    fn commit_word(&mut self) {
        self.written_words += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(r: &mut AlphabetResolver, c: char) -> Option<String> {
        let token = r.resolve(c).unwrap();
        if token.is_some() {
            r.commit_character();
        }
        token
    }

    #[test]
    fn pattern_names_round_trip() {
        for name in ["letter", "word", "white", "yellow"] {
            assert_eq!(name.parse::<Pattern>().unwrap().as_str(), name);
        }
        assert_eq!(
            "rainbow".parse::<Pattern>(),
            Err(UnknownPattern("rainbow".into()))
        );
    }

    #[test]
    fn per_letter_alternates_on_commit() {
        let mut r = AlphabetResolver::new(Pattern::PerLetter);
        assert_eq!(emit(&mut r, 'a').as_deref(), Some("alphabet-white-a"));
        assert_eq!(emit(&mut r, 'b').as_deref(), Some("alphabet-yellow-b"));
        assert_eq!(emit(&mut r, '!').as_deref(), Some("alphabet-white-exclamation"));
    }

    #[test]
    fn resolve_alone_does_not_advance() {
        let mut r = AlphabetResolver::new(Pattern::PerLetter);
        assert_eq!(r.resolve('a').unwrap().as_deref(), Some("alphabet-white-a"));
        assert_eq!(r.resolve('a').unwrap().as_deref(), Some("alphabet-white-a"));
    }

    #[test]
    fn unsupported_character_is_skipped() {
        let mut r = AlphabetResolver::new(Pattern::PerLetter);
        assert_eq!(emit(&mut r, '%'), None);
        assert_eq!(emit(&mut r, 'x').as_deref(), Some("alphabet-white-x"));
    }

    #[test]
    fn per_word_follows_word_commits() {
        let mut r = AlphabetResolver::new(Pattern::PerWord);
        assert_eq!(emit(&mut r, 'a').as_deref(), Some("alphabet-white-a"));
        assert_eq!(emit(&mut r, 'b').as_deref(), Some("alphabet-white-b"));
        r.commit_word();
        assert_eq!(emit(&mut r, 'c').as_deref(), Some("alphabet-yellow-c"));
    }

    #[test]
    fn fixed_colour_never_changes() {
        let mut r = AlphabetResolver::new(Pattern::Fixed(Colour::Yellow));
        for c in "abc".chars() {
            let token = emit(&mut r, c).unwrap();
            assert!(token.starts_with("alphabet-yellow-"), "{token}");
            r.commit_word();
        }
    }
}
