//! Token normalizer.
//!
//! Rewrites raw message text into a canonical, whitelist-constrained token
//! stream, or rejects the message outright. The steps run in a fixed order
//! because each one relies on what the previous one guarantees:
//!
//! 1. reject bot authors, quote-replies and bot commands
//! 2. strip URLs, mention tags (plain substring removal) and raw markers
//! 3. rewrite emoji codes, literal emoji and punctuation into tokens
//! 4. fold diacritics
//! 5. lower-case
//! 6. keep only whitelisted characters
//! 7. trim, and reject what is left empty
//!
//! # Example
//!
//! ```rust
//! use chatcorpus::config::CorpusConfig;
//! use chatcorpus::core::{Normalizer, Roster};
//!
//! # fn main() -> chatcorpus::Result<()> {
//! let roster = Roster::new(["Alice"]);
//! let normalizer = Normalizer::new(&CorpusConfig::default(), &roster)?;
//!
//! assert_eq!(
//!     normalizer.normalize_text("@Alice Čo robíš? 🤔 https://x.io/a"),
//!     "co robis ?   ¤thinking¤"
//! );
//! # Ok(())
//! # }
//! ```

use std::collections::{HashMap, HashSet};

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use regex::{Captures, Regex};
use serde::Serialize;

use super::models::NormalizedMessage;
use super::roster::Roster;
use crate::Message;
use crate::config::CorpusConfig;
use crate::error::{CorpusError, Result};

/// `scheme://…` link up to the next whitespace.
///
/// Schemes are listed explicitly: an open `[a-z]+` scheme would also eat a
/// word glued to the link (`tohlehttps://…`).
const URL_PATTERN: &str = r"(?i)(?:https?|ftps?|steam)://\S*";

/// Why a message was kept out of the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropReason {
    /// Authored by a bot account
    Bot,
    /// Starts with the quote-reply marker
    Quote,
    /// Starts with a bot-command prefix
    Command,
    /// Nothing left after normalization
    Empty,
}

/// Result of normalizing one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    Kept(NormalizedMessage),
    Dropped(DropReason),
}

/// Tally of rejected messages per [`DropReason`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DropCounts {
    pub bot: usize,
    pub quote: usize,
    pub command: usize,
    pub empty: usize,
}

impl DropCounts {
    pub fn record(&mut self, reason: DropReason) {
        match reason {
            DropReason::Bot => self.bot += 1,
            DropReason::Quote => self.quote += 1,
            DropReason::Command => self.command += 1,
            DropReason::Empty => self.empty += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.bot + self.quote + self.command + self.empty
    }
}

/// Per-message text normalizer, built once from a config and an author roster.
#[derive(Debug)]
pub struct Normalizer {
    quote_marker: String,
    command_prefixes: Vec<char>,
    marker: char,
    tags: Vec<String>,
    url_re: Regex,
    token_re: Option<Regex>,
    tokens: HashMap<String, String>,
    diacritics: HashMap<char, char>,
    allowed: HashSet<char>,
}

impl Normalizer {
    /// Builds a normalizer.
    ///
    /// Mention tags are stripped in this order: roster names, then
    /// `extra_tags`, then `broadcast_tags`.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::InvalidConfig`] if the config fails
    /// [`CorpusConfig::validate`].
    pub fn new(config: &CorpusConfig, roster: &Roster) -> Result<Self> {
        config.validate()?;

        let tags: Vec<String> = roster
            .names()
            .iter()
            .chain(&config.extra_tags)
            .chain(&config.broadcast_tags)
            .filter(|tag| !tag.is_empty())
            .cloned()
            .collect();

        // First table wins on identical keys: custom emoji, literal emoji, punctuation.
        let mut tokens: HashMap<String, String> = HashMap::new();
        for (code, name) in &config.custom_emojis {
            tokens
                .entry(code.clone())
                .or_insert_with(|| config.marked(name));
        }
        for (emoji, name) in &config.emoji_chars {
            tokens
                .entry(emoji.clone())
                .or_insert_with(|| config.marked(name));
        }
        for p in &config.punctuation {
            tokens
                .entry(p.to_string())
                .or_insert_with(|| format!(" {p} "));
        }
        tokens.retain(|key, _| !key.is_empty());

        let token_re = build_token_regex(tokens.keys())?;
        let url_re = Regex::new(URL_PATTERN)
            .map_err(|e| CorpusError::invalid_config(format!("url pattern: {e}")))?;

        debug!(
            "normalizer ready: {} tags, {} token rules, {} diacritics",
            tags.len(),
            tokens.len(),
            config.diacritics.len()
        );

        Ok(Self {
            quote_marker: config.quote_marker.clone(),
            command_prefixes: config.command_prefixes.clone(),
            marker: config.marker,
            tags,
            url_re,
            token_re,
            tokens,
            diacritics: config.diacritics.iter().map(|(k, v)| (*k, *v)).collect(),
            allowed: config.allowed_chars(),
        })
    }

    /// Returns the mention tags in stripping order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Checks the rejection predicates of step 1.
    pub fn rejection(&self, message: &Message) -> Option<DropReason> {
        let content = message.content();
        if message.is_bot() {
            Some(DropReason::Bot)
        } else if content.starts_with(self.quote_marker.as_str()) {
            Some(DropReason::Quote)
        } else if content.starts_with(self.command_prefixes.as_slice()) {
            Some(DropReason::Command)
        } else {
            None
        }
    }

    /// Runs steps 2-7 on raw text. May return an empty string.
    pub fn normalize_text(&self, raw: &str) -> String {
        let mut text = self.url_re.replace_all(raw, "").into_owned();

        for tag in &self.tags {
            if text.contains(tag.as_str()) {
                text = text.replace(tag.as_str(), "");
            }
        }

        // Only injected tokens may carry the marker.
        text.retain(|c| c != self.marker);

        if let Some(re) = &self.token_re {
            text = re
                .replace_all(&text, |caps: &Captures| {
                    self.tokens.get(&caps[0]).cloned().unwrap_or_default()
                })
                .into_owned();
        }

        let folded: String = text
            .chars()
            .map(|c| self.diacritics.get(&c).copied().unwrap_or(c))
            .collect();

        let filtered: String = folded
            .to_lowercase()
            .chars()
            .filter(|c| self.allowed.contains(c))
            .collect();

        filtered.trim().to_string()
    }

    /// Normalizes one message; `index` is its position in the source collection.
    pub fn normalize(&self, index: usize, message: &Message) -> Normalized {
        if let Some(reason) = self.rejection(message) {
            return Normalized::Dropped(reason);
        }

        let content = self.normalize_text(message.content());
        if content.is_empty() {
            return Normalized::Dropped(DropReason::Empty);
        }

        Normalized::Kept(NormalizedMessage {
            index,
            id: message.id(),
            timestamp: message.timestamp(),
            author_id: message.author_id().to_string(),
            content,
        })
    }

    /// Normalizes a whole collection, preserving source order.
    pub fn normalize_all(&self, messages: &[Message]) -> (Vec<NormalizedMessage>, DropCounts) {
        #[cfg(feature = "parallel")]
        let outcomes: Vec<Normalized> = messages
            .par_iter()
            .enumerate()
            .map(|(i, m)| self.normalize(i, m))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let outcomes: Vec<Normalized> = messages
            .iter()
            .enumerate()
            .map(|(i, m)| self.normalize(i, m))
            .collect();

        let mut kept = Vec::with_capacity(outcomes.len());
        let mut dropped = DropCounts::default();
        for outcome in outcomes {
            match outcome {
                Normalized::Kept(msg) => kept.push(msg),
                Normalized::Dropped(reason) => dropped.record(reason),
            }
        }

        debug!(
            "normalized {} messages: {} kept, {} dropped",
            messages.len(),
            kept.len(),
            dropped.total()
        );
        (kept, dropped)
    }
}

/// One alternation over every key, longest first, so that at any position
/// the longest matching key wins regardless of map iteration order.
fn build_token_regex<'a, I>(keys: I) -> Result<Option<Regex>>
where
    I: Iterator<Item = &'a String>,
{
    let mut keys: Vec<&String> = keys.collect();
    if keys.is_empty() {
        return Ok(None);
    }
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let pattern = keys
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&pattern)
        .map(Some)
        .map_err(|e| CorpusError::invalid_config(format!("token table: {e}")))
}
