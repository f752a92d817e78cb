//! Two-colour alternation shared by the alphabet and reaction sets.

use std::fmt;
use std::str::FromStr;

/// Number of colours the alphabet emoji are available in.
pub const COLOUR_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    White,
    Yellow,
}

impl Colour {
    /// Primary colour for even indices, secondary for odd ones.
    pub fn for_index(index: usize) -> Self {
        if index % COLOUR_COUNT == 0 {
            Self::White
        } else {
            Self::Yellow
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Yellow => "yellow",
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown colour: {0} (expected white or yellow)")]
pub struct UnknownColour(pub String);

impl FromStr for Colour {
    type Err = UnknownColour;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(Self::White),
            "yellow" => Ok(Self::Yellow),
            other => Err(UnknownColour(other.to_string())),
        }
    }
}
