//! Configuration for the corpus pipeline.
//!
//! [`CorpusConfig`] owns every constant the normalizer, segmenter and grouper
//! depend on. Defaults come from [`vocab`](crate::vocab); any subset can be
//! overridden from a JSON file, missing keys keep their default.
//!
//! # Example
//!
//! ```rust
//! use chatcorpus::config::CorpusConfig;
//!
//! let config = CorpusConfig::new()
//!     .with_thread_gap_minutes(45)
//!     .with_extra_tags(["@moderators"]);
//!
//! assert_eq!(config.thread_gap().num_minutes(), 45);
//! assert!(config.validate().is_ok());
//! ```
//!
//! ## Loading overrides
//!
//! ```rust
//! use chatcorpus::config::CorpusConfig;
//!
//! # fn main() -> chatcorpus::Result<()> {
//! let config = CorpusConfig::from_json_str(r#"{"thread_gap_minutes": 10, "marker": "|"}"#)?;
//! assert_eq!(config.thread_gap_minutes, 10);
//! assert_eq!(config.marker, '|');
//! // Everything else is still the default.
//! assert_eq!(config.boundary_token, "newmsg");
//! # Ok(())
//! # }
//! ```

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{CorpusError, Result};
use crate::vocab;

/// Every overridable constant of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// A gap strictly longer than this (in minutes) starts a new thread (default: 30)
    pub thread_gap_minutes: u32,

    /// Messages starting with this are quote-replies and get dropped (default: `"> "`)
    pub quote_marker: String,

    /// Messages starting with any of these are bot commands and get dropped
    pub command_prefixes: Vec<char>,

    /// Custom emoji code (`:kys:`) to token name
    pub custom_emojis: BTreeMap<String, String>,

    /// Literal emoji (`🤔`) to token name
    pub emoji_chars: BTreeMap<String, String>,

    /// Punctuation padded with spaces so it becomes a standalone token
    pub punctuation: Vec<char>,

    /// Additional mention tags stripped from content (group roles etc.)
    pub extra_tags: Vec<String>,

    /// Channel-wide mention tags stripped from content
    pub broadcast_tags: Vec<String>,

    /// Accented letter to plain letter
    pub diacritics: BTreeMap<char, char>,

    /// Characters kept by the final filter; the marker is always kept as well
    pub whitelist: String,

    /// Sentinel wrapping injected tokens
    pub marker: char,

    /// Name of the token separating merged messages inside a group
    pub boundary_token: String,

    /// Stable-sort messages by timestamp before segmentation (default: false)
    pub sort_by_timestamp: bool,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            thread_gap_minutes: vocab::DEFAULT_THREAD_GAP_MINUTES,
            quote_marker: vocab::DEFAULT_QUOTE_MARKER.to_string(),
            command_prefixes: vocab::DEFAULT_COMMAND_PREFIXES.to_vec(),
            custom_emojis: owned_map(vocab::DEFAULT_CUSTOM_EMOJIS),
            emoji_chars: owned_map(vocab::DEFAULT_EMOJI_CHARS),
            punctuation: vocab::DEFAULT_PUNCTUATION.to_vec(),
            extra_tags: vocab::DEFAULT_EXTRA_TAGS
                .iter()
                .map(|t| (*t).to_string())
                .collect(),
            broadcast_tags: vocab::DEFAULT_BROADCAST_TAGS
                .iter()
                .map(|t| (*t).to_string())
                .collect(),
            diacritics: vocab::DEFAULT_DIACRITICS.iter().copied().collect(),
            whitelist: vocab::DEFAULT_WHITELIST.to_string(),
            marker: vocab::DEFAULT_MARKER,
            boundary_token: vocab::DEFAULT_BOUNDARY_TOKEN.to_string(),
            sort_by_timestamp: false,
        }
    }
}

fn owned_map(table: &[(&str, &str)]) -> BTreeMap<String, String> {
    table
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

impl CorpusConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a (possibly partial) JSON configuration and validates it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a (possibly partial) JSON configuration file and validates it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Serializes the effective configuration as pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Sets the inactivity gap, in minutes.
    #[must_use]
    pub fn with_thread_gap_minutes(mut self, minutes: u32) -> Self {
        self.thread_gap_minutes = minutes;
        self
    }

    /// Sets the sentinel marker.
    #[must_use]
    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    /// Sets the name of the inter-message boundary token.
    #[must_use]
    pub fn with_boundary_token(mut self, token: impl Into<String>) -> Self {
        self.boundary_token = token.into();
        self
    }

    /// Appends mention tags stripped in addition to the author roster.
    #[must_use]
    pub fn with_extra_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Adds or replaces one custom emoji code.
    #[must_use]
    pub fn with_custom_emoji(mut self, code: impl Into<String>, token: impl Into<String>) -> Self {
        self.custom_emojis.insert(code.into(), token.into());
        self
    }

    /// Enables or disables the stable timestamp sort before segmentation.
    #[must_use]
    pub fn with_sort_by_timestamp(mut self, enabled: bool) -> Self {
        self.sort_by_timestamp = enabled;
        self
    }

    /// The inactivity threshold as a duration.
    pub fn thread_gap(&self) -> Duration {
        Duration::minutes(i64::from(self.thread_gap_minutes))
    }

    /// Wraps a token name in the sentinel, padded with spaces: `" ¤joy¤ "`.
    pub fn marked(&self, token: &str) -> String {
        format!(" {m}{token}{m} ", m = self.marker)
    }

    /// The separator placed between messages merged into one group.
    pub fn boundary_separator(&self) -> String {
        self.marked(&self.boundary_token)
    }

    /// Characters allowed in normalized content, marker included.
    pub fn allowed_chars(&self) -> HashSet<char> {
        self.whitelist
            .chars()
            .chain(std::iter::once(self.marker))
            .collect()
    }

    /// Checks that the tables cannot break the sentinel or whitelist invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::InvalidConfig`] when:
    /// - the marker is whitespace, ASCII alphanumeric, or changes under lower-casing
    /// - the marker is also a punctuation token
    /// - the diacritic table rewrites the marker or rewrites something into it
    /// - the whitelist contains a line break
    /// - the quote marker is empty
    /// - the boundary token is empty, contains whitespace or the marker, or
    ///   uses characters outside the whitelist
    pub fn validate(&self) -> Result<()> {
        let marker = self.marker;

        if marker.is_whitespace() || marker.is_ascii_alphanumeric() {
            return Err(CorpusError::invalid_config(format!(
                "marker {marker:?} would collide with natural text"
            )));
        }
        if !marker.to_lowercase().eq(std::iter::once(marker)) {
            return Err(CorpusError::invalid_config(format!(
                "marker {marker:?} is altered by lower-casing"
            )));
        }
        if self.punctuation.contains(&marker) {
            return Err(CorpusError::invalid_config(format!(
                "marker {marker:?} is also a punctuation token"
            )));
        }
        if self.diacritics.contains_key(&marker) {
            return Err(CorpusError::invalid_config(format!(
                "diacritic table must not remap the marker {marker:?}"
            )));
        }
        if let Some((from, _)) = self.diacritics.iter().find(|(_, to)| **to == marker) {
            return Err(CorpusError::invalid_config(format!(
                "diacritic table maps {from:?} onto the marker {marker:?}"
            )));
        }
        if let Some(c) = self.whitelist.chars().find(|c| matches!(c, '\n' | '\r')) {
            return Err(CorpusError::invalid_config(format!(
                "whitelist must not contain line break {c:?}"
            )));
        }
        if self.quote_marker.is_empty() {
            return Err(CorpusError::invalid_config("quote marker must not be empty"));
        }

        let allowed = self.allowed_chars();
        if self.boundary_token.is_empty() {
            return Err(CorpusError::invalid_config(
                "boundary token must not be empty",
            ));
        }
        if let Some(c) = self
            .boundary_token
            .chars()
            .find(|c| c.is_whitespace() || *c == marker || !allowed.contains(c))
        {
            return Err(CorpusError::invalid_config(format!(
                "boundary token {:?} contains disallowed character {c:?}",
                self.boundary_token
            )));
        }

        Ok(())
    }
}
