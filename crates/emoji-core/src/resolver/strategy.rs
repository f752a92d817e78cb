use std::fmt;
use std::str::FromStr;

use crate::error::ConvertError;

use super::tile::BLANK_TILE;
use super::{
    AlphabetResolver, OverrideTable, Overridden, Pattern, ReactionResolver, Resolver, TileResolver,
};

/// Separator written between words when no space emoji is configured.
pub const DEFAULT_SEPARATOR: &str = "    ";

/// Selectable emoji set.
///
/// `Alphabet` is the only set that honours the alternation [`Pattern`];
/// `Reaction` always alternates per letter under its own constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmojiSet {
    #[default]
    Alphabet,
    Scrabble,
    Reaction,
}

impl EmojiSet {
    pub const ALL: [EmojiSet; 3] = [Self::Alphabet, Self::Scrabble, Self::Reaction];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alphabet => "alphabet",
            Self::Scrabble => "scrabble",
            Self::Reaction => "reaction",
        }
    }

    /// Space token used when the caller did not configure one.
    pub fn default_space_token(self) -> Option<&'static str> {
        match self {
            Self::Scrabble => Some(BLANK_TILE),
            Self::Alphabet | Self::Reaction => None,
        }
    }

    /// Literal written between words when there is no space token.
    pub fn default_separator(self) -> &'static str {
        match self {
            Self::Reaction => "",
            Self::Alphabet | Self::Scrabble => DEFAULT_SEPARATOR,
        }
    }

    /// Build a fresh resolver for one conversion, wrapped in the override layer.
    pub fn build(self, pattern: Pattern, overrides: &OverrideTable) -> Box<dyn Resolver> {
        match self {
            Self::Alphabet => Box::new(Overridden::new(
                AlphabetResolver::new(pattern),
                overrides.clone(),
            )),
            Self::Scrabble => Box::new(Overridden::new(TileResolver, overrides.clone())),
            Self::Reaction => Box::new(Overridden::new(
                ReactionResolver::new(),
                overrides.clone(),
            )),
        }
    }
}

impl fmt::Display for EmojiSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmojiSet {
    type Err = ConvertError;

    /// Accepts the set names plus `tile` for the scrabble tiles.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "tile" {
            return Ok(Self::Scrabble);
        }
        Self::ALL
            .into_iter()
            .find(|set| set.as_str() == s)
            .ok_or_else(|| ConvertError::UnsupportedEmojiSet(s.to_string()))
    }
}
