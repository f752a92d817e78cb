use std::fs;

use clap::Args;

use emoji_engine::resolver::alphabet::UnknownPattern;
use emoji_engine::{
    convert_words, settings, ConvertError, ConvertOptions, EmojiSet, OverrideTable, Pattern,
};

use super::or_exit;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum OverrideArgError {
    #[error("expected KEY=EMOJI, got {0:?}")]
    MissingSeparator(String),
    #[error("override key must be a single character, got {0:?}")]
    KeyNotSingleChar(String),
    #[error("override emoji for {0:?} is empty")]
    EmptyEmoji(char),
}

#[derive(Debug, thiserror::Error)]
pub enum FlagError {
    #[error(transparent)]
    EmojiSet(#[from] ConvertError),
    #[error(transparent)]
    Pattern(#[from] UnknownPattern),
}

/// Parse a `-o KEY=EMOJI` argument, e.g. `4=four` or `$=:money:`.
pub fn parse_override(arg: &str) -> Result<(char, String), OverrideArgError> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| OverrideArgError::MissingSeparator(arg.to_string()))?;
    let mut chars = key.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(OverrideArgError::KeyNotSingleChar(key.to_string()));
    };
    if emoji_engine::token::trim_emoji(value).is_empty() {
        return Err(OverrideArgError::EmptyEmoji(c));
    }
    Ok((c, value.to_string()))
}

// Command-line flags for a conversion. `None` falls back to the settings file.
#[derive(Debug, Default, Args)]
pub struct ConvertArgs {
    /// The sentence to convert. Letters are case-insensitive; words are
    /// separated by 4 spaces unless a space emoji is given
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub sentence: Vec<String>,
    /// Emoji-set to use: alphabet, scrabble (or tile) or reaction
    #[arg(short, long)]
    pub emoji_set: Option<String>,
    /// Alternating colour pattern for the alphabet set: letter, word, yellow or white
    #[arg(short, long)]
    pub pattern: Option<String>,
    /// Override or add emojis for specific characters (e.g. 4=four)
    #[arg(short = 'o', long = "override", value_parser = parse_override)]
    pub overrides: Vec<(char, String)>,
    /// Emoji to separate words with instead of whitespace
    #[arg(long)]
    pub space: Option<String>,
    /// Emoji to start the sentence with
    #[arg(long)]
    pub head: Option<String>,
    /// Emoji to end the sentence with
    #[arg(long)]
    pub tail: Option<String>,
    /// Settings TOML providing defaults for the flags above
    #[arg(long)]
    pub config: Option<String>,
    /// Print the result instead of copying it to the clipboard
    #[arg(long)]
    pub no_copy: bool,
}

/// Layer command-line flags over settings-derived options.
pub fn build_options(
    base: ConvertOptions,
    args: &ConvertArgs,
) -> Result<ConvertOptions, FlagError> {
    let mut opts = base;
    if let Some(name) = &args.emoji_set {
        opts.emoji_set = name.parse::<EmojiSet>()?;
    }
    if let Some(name) = &args.pattern {
        opts.pattern = name.parse::<Pattern>()?;
    }
    if !args.overrides.is_empty() {
        let merged: OverrideTable = opts
            .overrides
            .iter()
            .chain(args.overrides.iter().map(|(c, v)| (*c, v.as_str())))
            .collect();
        opts.overrides = merged;
    }
    if let Some(space) = &args.space {
        opts = opts.with_space(space);
    }
    if let Some(head) = &args.head {
        opts = opts.with_head(head);
    }
    if let Some(tail) = &args.tail {
        opts = opts.with_tail(tail);
    }
    Ok(opts)
}

pub fn convert_cmd(args: &ConvertArgs) {
    if let Some(path) = &args.config {
        let content = or_exit(fs::read_to_string(path), &format!("Error reading {path}"));
        or_exit(settings::init_custom(content), "Error loading settings");
    }
    let base = settings::settings().to_options();
    let opts = or_exit(build_options(base, args), "Error");
    let out = or_exit(
        convert_words(&opts, &args.sentence[..]),
        "Error converting sentence",
    );

    if args.no_copy || !cfg!(feature = "clipboard") {
        println!("{out}");
        return;
    }
    #[cfg(feature = "clipboard")]
    or_exit(copy_to_clipboard(&out), "Error copying to the clipboard");
}

#[cfg(feature = "clipboard")]
fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    arboard::Clipboard::new()?.set_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_override_pairs() {
        assert_eq!(parse_override("4=four"), Ok(('4', "four".to_string())));
        assert_eq!(parse_override("$=:money:"), Ok(('$', ":money:".to_string())));
        // only the first '=' separates key and emoji
        assert_eq!(parse_override("a=b=c"), Ok(('a', "b=c".to_string())));
    }

    #[test]
    fn parse_override_errors() {
        assert_eq!(
            parse_override("four"),
            Err(OverrideArgError::MissingSeparator("four".into()))
        );
        assert_eq!(
            parse_override("ab=x"),
            Err(OverrideArgError::KeyNotSingleChar("ab".into()))
        );
        assert_eq!(
            parse_override("=x"),
            Err(OverrideArgError::KeyNotSingleChar("".into()))
        );
        assert_eq!(parse_override("a=::"), Err(OverrideArgError::EmptyEmoji('a')));
    }

    #[test]
    fn flags_override_settings() {
        let base = ConvertOptions::new(EmojiSet::Alphabet)
            .with_overrides([('a', "apple"), ('b', "bee")].into_iter().collect())
            .with_head("wave");
        let args = ConvertArgs {
            emoji_set: Some("scrabble".into()),
            overrides: vec![('a', "avocado".into())],
            tail: Some(":wave:".into()),
            ..ConvertArgs::default()
        };
        let opts = build_options(base, &args).unwrap();
        assert_eq!(opts.emoji_set, EmojiSet::Scrabble);
        assert_eq!(opts.overrides.get('a'), Some("avocado"));
        assert_eq!(opts.overrides.get('b'), Some("bee"));
        assert_eq!(opts.head(), Some("wave"));
        assert_eq!(opts.tail(), Some("wave"));
    }

    #[test]
    fn unknown_emoji_set_is_reported() {
        let args = ConvertArgs {
            emoji_set: Some("klingon".into()),
            ..ConvertArgs::default()
        };
        let err = build_options(ConvertOptions::default(), &args).unwrap_err();
        assert_eq!(err.to_string(), "emoji-set not supported: klingon");
    }

    #[test]
    fn unknown_pattern_is_reported() {
        let args = ConvertArgs {
            pattern: Some("plaid".into()),
            ..ConvertArgs::default()
        };
        let err = build_options(ConvertOptions::default(), &args).unwrap_err();
        assert!(matches!(err, FlagError::Pattern(_)));
        assert!(err.to_string().contains("plaid"), "{err}");
    }
}
