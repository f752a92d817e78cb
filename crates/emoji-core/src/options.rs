use crate::resolver::{EmojiSet, OverrideTable, Pattern};
use crate::token::normalize_token;
use crate::transducer::Transducer;

/// Everything a conversion needs besides the sentence.
///
/// Decoration tokens are stored normalized: colon delimiters stripped and
/// empty values treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub emoji_set: EmojiSet,
    pub pattern: Pattern,
    pub overrides: OverrideTable,
    space: Option<String>,
    head: Option<String>,
    tail: Option<String>,
}

impl ConvertOptions {
    pub fn new(emoji_set: EmojiSet) -> Self {
        Self {
            emoji_set,
            ..Self::default()
        }
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_overrides(mut self, overrides: OverrideTable) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_space(mut self, token: &str) -> Self {
        self.space = normalize_token(token);
        self
    }

    pub fn with_head(mut self, token: &str) -> Self {
        self.head = normalize_token(token);
        self
    }

    pub fn with_tail(mut self, token: &str) -> Self {
        self.tail = normalize_token(token);
        self
    }

    pub fn space(&self) -> Option<&str> {
        self.space.as_deref()
    }

    pub fn head(&self) -> Option<&str> {
        self.head.as_deref()
    }

    pub fn tail(&self) -> Option<&str> {
        self.tail.as_deref()
    }

    /// Transducer for these options, with the emoji set's defaults filled in.
    pub(crate) fn transducer(&self) -> Transducer<'_> {
        Transducer {
            head: self.head(),
            tail: self.tail(),
            space: self.space().or(self.emoji_set.default_space_token()),
            default_separator: self.emoji_set.default_separator(),
        }
    }
}
