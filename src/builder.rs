//! Conditional accumulation of tokens and final-string assembly.

use crate::case;
use crate::config::{BuilderConfig, ConfigPatch};

/// A single token or an ordered batch of tokens accepted by
/// [`TokenBuilder::add`].
#[derive(Debug, Clone)]
pub enum TokenInput {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for TokenInput {
    fn from(value: &str) -> Self {
        TokenInput::One(value.to_string())
    }
}

impl From<String> for TokenInput {
    fn from(value: String) -> Self {
        TokenInput::One(value)
    }
}

impl From<Vec<String>> for TokenInput {
    fn from(values: Vec<String>) -> Self {
        TokenInput::Many(values)
    }
}

impl From<Vec<&str>> for TokenInput {
    fn from(values: Vec<&str>) -> Self {
        TokenInput::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for TokenInput {
    fn from(values: &[&str]) -> Self {
        TokenInput::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for TokenInput {
    fn from(values: [&str; N]) -> Self {
        TokenInput::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Ordered token accumulator with configurable final assembly.
///
/// Mutators consume and return the builder for chaining; finalizers are
/// reads, so a builder can be finalized more than once.
#[derive(Debug, Clone, Default)]
pub struct TokenBuilder {
    tokens: Vec<String>,
    settings: BuilderConfig,
}

impl TokenBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the builder with a base token. An empty base is ignored.
    pub fn with_base(base: impl Into<String>) -> Self {
        let mut builder = Self::new();
        builder.push(base.into());
        builder
    }

    /// Shallow-merge a configuration patch; unsupplied fields keep their
    /// current values.
    pub fn config(mut self, patch: ConfigPatch) -> Self {
        self.settings.merge(patch);
        self
    }

    pub fn ignore_duplicate(mut self, ignore: bool) -> Self {
        self.settings.ignore_duplicate = ignore;
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.settings.separator = separator.into();
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.settings.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.settings.suffix = suffix.into();
        self
    }

    /// Conditionally add a token or an ordered batch of tokens.
    ///
    /// When `condition` is false this is a no-op for any value. Each batch
    /// element passes through the push rule independently.
    pub fn add(mut self, condition: bool, value: impl Into<TokenInput>) -> Self {
        if condition {
            match value.into() {
                TokenInput::One(token) => self.push(token),
                TokenInput::Many(tokens) => {
                    for token in tokens {
                        self.push(token);
                    }
                }
            }
        }
        self
    }

    /// Add each key whose flag is true, in iteration order.
    pub fn add_flags<K, I>(mut self, flags: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, bool)>,
    {
        for (key, enabled) in flags {
            if enabled {
                self.push(key.into());
            }
        }
        self
    }

    /// Merge whole token strings: each fragment is split on runs of
    /// whitespace and every non-empty piece is pushed in order.
    pub fn merge<I, S>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for fragment in fragments {
            for token in fragment.as_ref().split_whitespace() {
                self.push(token.to_string());
            }
        }
        self
    }

    /// Current token sequence, in insertion order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn settings(&self) -> &BuilderConfig {
        &self.settings
    }

    /// Finalize into the assembled string. A read, not a reset.
    pub fn end(&mut self) -> String {
        self.build()
    }

    /// Push one last token (subject to the push rule), then finalize.
    pub fn end_with(&mut self, value: impl Into<String>) -> String {
        self.push(value.into());
        self.build()
    }

    pub fn to_lowercase(&self) -> String {
        self.build().to_lowercase()
    }

    pub fn to_uppercase(&self) -> String {
        self.build().to_uppercase()
    }

    /// camelCase the built string, splitting on the configured separator
    /// (exact match, not arbitrary whitespace).
    pub fn to_camel_case(&self) -> String {
        case::camel_case(&self.build(), &self.settings.separator)
    }

    pub fn to_sentence_case(&self) -> String {
        case::sentence_case(&self.build())
    }

    /// Push rule shared by all insertion paths: empty values are rejected,
    /// and with `ignore_duplicate` set, values already present are rejected
    /// by exact string match.
    fn push(&mut self, value: String) {
        if value.is_empty() {
            return;
        }
        if self.settings.ignore_duplicate && self.tokens.contains(&value) {
            return;
        }
        self.tokens.push(value);
    }

    /// Assemble the final string: join tokens with the separator, collapse
    /// every whitespace run to a single space, trim, then wrap with prefix
    /// and suffix.
    ///
    /// The collapse targets literal whitespace regardless of the configured
    /// separator, so runs of a non-whitespace separator are preserved.
    /// Prefix and suffix are exempt from both collapse and trim.
    fn build(&self) -> String {
        let joined = self.tokens.join(&self.settings.separator);
        let core = joined.split_whitespace().collect::<Vec<_>>().join(" ");
        format!("{}{}{}", self.settings.prefix, core, self.settings.suffix)
    }
}
