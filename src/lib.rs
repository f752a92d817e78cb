//! Emojify engine: turn a sentence into chat emoji shortcodes.
//!
//! Thin facade over `emoji_core` for front ends that receive the sentence as
//! several fragments (command-line arguments, chat command words).

pub mod trace_init;

pub use emoji_core::{
    colour, convert, resolver, settings, token, transducer, Colour, ConvertError,
    ConvertOptions, EmojiSet, OverrideTable, Pattern,
};

/// Join `fragments` with single spaces and convert the result.
pub fn convert_words<S: AsRef<str>>(
    options: &ConvertOptions,
    fragments: &[S],
) -> Result<String, ConvertError> {
    let sentence = fragments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ");
    convert(options, &sentence)
}
