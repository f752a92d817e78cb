//! Sentence → emoji string assembly.
//!
//! Splits the sentence into whitespace-separated words and drives a
//! [`Resolver`] over every character. A separator follows each word that
//! produced output, except the last word of the sentence.


use tracing::{debug, debug_span};

use crate::error::ConvertError;
use crate::options::ConvertOptions;
use crate::resolver::Resolver;
use crate::token::write_emoji;

/// Decorations around the resolved tokens. All tokens are already normalized.
#[derive(Debug, Clone, Copy)]
pub struct Transducer<'a> {
    pub head: Option<&'a str>,
    pub tail: Option<&'a str>,
    pub space: Option<&'a str>,
    /// Written between words when `space` is `None`.
    pub default_separator: &'a str,
}

impl Transducer<'_> {
    pub fn run(
        &self,
        resolver: &mut dyn Resolver,
        sentence: &str,
    ) -> Result<String, ConvertError> {
        let words: Vec<&str> = sentence.split_whitespace().collect();
        let Some(last) = words.len().checked_sub(1) else {
            return Err(ConvertError::NoWordsFound);
        };

        let mut out = String::new();
        if let Some(head) = self.head {
            write_emoji(&mut out, head);
        }

        let mut emitted = 0usize;
        for (i, word) in words.iter().enumerate() {
            let mut committed = false;
            for c in word.chars() {
                let Some(token) = resolver.resolve(c.to_ascii_lowercase())? else {
                    continue;
                };
                write_emoji(&mut out, &token);
                out.push_str(resolver.token_separator());
                resolver.commit_character();
                committed = true;
                emitted += 1;
            }

            if !committed || i == last {
                continue;
            }

            match self.space {
                Some(space) => write_emoji(&mut out, space),
                None => out.push_str(self.default_separator),
            }
            resolver.commit_word();
        }

        if let Some(tail) = self.tail {
            write_emoji(&mut out, tail);
        }

        debug!(word_count = words.len(), emitted);
        Ok(out)
    }
}

/// Convert `sentence` with a fresh resolver built from `options`.
pub fn convert(options: &ConvertOptions, sentence: &str) -> Result<String, ConvertError> {
    let _span = debug_span!(
        "convert",
        emoji_set = options.emoji_set.as_str(),
        pattern = options.pattern.as_str(),
        overrides = options.overrides.len()
    )
    .entered();

    let mut resolver = options.emoji_set.build(options.pattern, &options.overrides);
    options
        .transducer()
        .run(resolver.as_mut(), sentence)
        .inspect_err(|e| debug!("conversion failed: {e}"))
}
