use std::collections::HashMap;

use tracing::debug;

use crate::colour::{Colour, COLOUR_COUNT};
use crate::error::ConvertError;

use super::alphabet::ALPHABET_PREFIX;
use super::{alphabet_suffix, Resolver, Suffix};

/// Slack's hard limit on reactions per message.
pub const MAX_REACTIONS: usize = 23;

/// Alphabet emoji posted as individual reactions.
///
/// A reaction can only be added once per message, so a repeated letter must
/// switch colour. The colour search starts at the global emission position,
/// so the first occurrence of a letter keeps the alternating look.
///
/// `written` counts our own letters and drives the colour search; `emitted`
/// also counts override tokens, since every one of them is a reaction.
#[derive(Debug)]
pub struct ReactionResolver {
    written: usize,
    emitted: usize,
    used: HashMap<Suffix, Vec<Colour>>,
    max: usize,
}

impl Default for ReactionResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ReactionResolver {
    pub fn new() -> Self {
        Self {
            written: 0,
            emitted: 0,
            used: HashMap::new(),
            max: MAX_REACTIONS,
        }
    }
}

impl Resolver for ReactionResolver {
    fn resolve(&mut self, c: char) -> Result<Option<String>, ConvertError> {
        self.check_capacity()?;

        let Some(suffix) = alphabet_suffix(c) else {
            return Ok(None);
        };

        let used = self.used.entry(suffix).or_default();
        for i in 0..COLOUR_COUNT {
            let colour = Colour::for_index(self.written + i);
            if used.contains(&colour) {
                continue;
            }
            used.push(colour);
            return Ok(Some(format!("{ALPHABET_PREFIX}-{colour}-{suffix}")));
        }

        Err(ConvertError::ColourExhausted {
            character: c,
            position: self.written + 1,
            limit: COLOUR_COUNT,
        })
    }

    fn check_capacity(&self) -> Result<(), ConvertError> {
        if self.emitted >= self.max {
            debug!(emitted = self.emitted, "reaction cap reached");
            return Err(ConvertError::CapacityExceeded { max: self.max });
        }
        Ok(())
    }

    fn commit_character(&mut self) {
        self.written += 1;
        self.emitted += 1;
    }

    fn commit_override(&mut self) {
        self.emitted += 1;
    }

    // One reaction per line so each can be pasted into the reaction picker.
    fn token_separator(&self) -> &'static str {
        "\n"
    }
}
