/// Failures that abort a conversion. No partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("plz give at least one word")]
    NoWordsFound,

    #[error("emoji-set not supported: {0}")]
    UnsupportedEmojiSet(String),

    #[error("cannot react with more than {max} emojis")]
    CapacityExceeded { max: usize },

    #[error("the character \"{character}\" at position {position} cannot be used more than {limit} times")]
    ColourExhausted {
        character: char,
        /// 1-based position among emitted reactions.
        position: usize,
        limit: usize,
    },
}
