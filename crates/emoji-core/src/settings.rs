//! Conversion defaults for the command line.
//!
//! The embedded `default_settings.toml` picks the emoji set, pattern and
//! decorations used when no flag is given. A user file passed through
//! [`init_custom`] replaces it wholesale and is validated up front, so
//! [`settings`] only ever sees options that will convert.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::ConvertError;
use crate::options::ConvertOptions;
use crate::resolver::alphabet::UnknownPattern;
use crate::resolver::{EmojiSet, OverrideTable, Pattern};
use crate::token::trim_emoji;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Validate and install a user settings file. Must run before the first
/// [`settings`] call; a second call fails with `AlreadyInitialized`.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Settings in effect for this process: the user file if one was installed,
/// otherwise the embedded defaults.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub convert: ConvertSettings,
    #[serde(default)]
    overrides: BTreeMap<String, String>,
    #[serde(skip)]
    parsed: ConvertOptions,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertSettings {
    pub emoji_set: String,
    pub pattern: String,
    #[serde(default)]
    pub space: Option<String>,
    #[serde(default)]
    pub head: Option<String>,
    #[serde(default)]
    pub tail: Option<String>,
}

impl Settings {
    /// Conversion options described by these settings.
    pub fn to_options(&self) -> ConvertOptions {
        self.parsed.clone()
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    s.parsed = build_options(&s)?;
    Ok(s)
}

fn build_options(s: &Settings) -> Result<ConvertOptions, SettingsError> {
    let emoji_set: EmojiSet = s.convert.emoji_set.parse()?;
    let pattern: Pattern = s.convert.pattern.parse().map_err(|e: UnknownPattern| {
        SettingsError::InvalidValue {
            field: "convert.pattern".to_string(),
            reason: e.to_string(),
        }
    })?;

    let mut options = ConvertOptions::new(emoji_set)
        .with_pattern(pattern)
        .with_overrides(parse_overrides(&s.overrides)?);
    if let Some(space) = &s.convert.space {
        options = options.with_space(space);
    }
    if let Some(head) = &s.convert.head {
        options = options.with_head(head);
    }
    if let Some(tail) = &s.convert.tail {
        options = options.with_tail(tail);
    }
    Ok(options)
}

fn parse_overrides(raw: &BTreeMap<String, String>) -> Result<OverrideTable, SettingsError> {
    let mut pairs = Vec::with_capacity(raw.len());
    for (key, value) in raw {
        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(SettingsError::InvalidValue {
                field: format!("overrides.{key}"),
                reason: "key must be a single character".to_string(),
            });
        };
        if trim_emoji(value).is_empty() {
            return Err(SettingsError::InvalidValue {
                field: format!("overrides.{key}"),
                reason: "emoji must not be empty".to_string(),
            });
        }
        pairs.push((c, value.as_str()));
    }
    Ok(pairs.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Colour;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.convert.emoji_set, "alphabet");
        assert_eq!(s.convert.pattern, "letter");
        let opts = s.to_options();
        assert_eq!(opts.emoji_set, EmojiSet::Alphabet);
        assert_eq!(opts.pattern, Pattern::PerLetter);
        assert!(opts.overrides.is_empty());
        assert_eq!(opts.space(), None);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[convert]
emoji_set = "scrabble"
pattern = "yellow"
space = ":star:"
head = "wave"

[overrides]
"4" = ":four:"
"$" = "money"
"#;
        let s = parse_settings_toml(toml).unwrap();
        let opts = s.to_options();
        assert_eq!(opts.emoji_set, EmojiSet::Scrabble);
        assert_eq!(opts.pattern, Pattern::Fixed(Colour::Yellow));
        assert_eq!(opts.space(), Some("star"));
        assert_eq!(opts.head(), Some("wave"));
        assert_eq!(opts.tail(), None);
        assert_eq!(opts.overrides.get('4'), Some("four"));
        assert_eq!(opts.overrides.get('$'), Some("money"));
    }

    #[test]
    fn settings_drive_conversion() {
        let toml = r#"
[convert]
emoji_set = "alphabet"
pattern = "word"
space = "catjam"
"#;
        let opts = parse_settings_toml(toml).unwrap().to_options();
        assert_eq!(
            crate::convert(&opts, "te st").unwrap(),
            ":alphabet-white-t::alphabet-white-e::catjam::alphabet-yellow-s::alphabet-yellow-t:"
        );
    }

    #[test]
    fn error_unknown_emoji_set() {
        let toml = r#"
[convert]
emoji_set = "runes"
pattern = "letter"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Convert(ConvertError::UnsupportedEmojiSet(ref name)) if name == "runes"
        ));
    }

    #[test]
    fn error_unknown_pattern() {
        let toml = r#"
[convert]
emoji_set = "alphabet"
pattern = "rainbow"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("convert.pattern"));
    }

    #[test]
    fn error_multi_char_override_key() {
        let toml = r#"
[convert]
emoji_set = "alphabet"
pattern = "letter"

[overrides]
ab = "x"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("overrides.ab"));
    }

    #[test]
    fn error_empty_override_value() {
        let toml = r#"
[convert]
emoji_set = "alphabet"
pattern = "letter"

[overrides]
a = "::"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("[overrides]\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
