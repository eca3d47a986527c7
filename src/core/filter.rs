//! Restrict the message window before normalization.
//!
//! This module provides [`FilterConfig`] for choosing which part of a chat
//! history feeds the corpus, and [`apply_filters`] to apply it.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Messages on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Messages on or before date |
//! | First quote | [`with_since_first_quote`](FilterConfig::with_since_first_quote) | Messages at or after the earliest quote-reply |
//!
//! # Examples
//!
//! ```
//! use chatcorpus::core::filter::{FilterConfig, apply_filters};
//! use chatcorpus::Message;
//! use chrono::{TimeZone, Utc};
//!
//! # fn main() -> chatcorpus::Result<()> {
//! let messages = vec![
//!     Message::new(1, Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(), "a", "Old"),
//!     Message::new(2, Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(), "a", "New"),
//! ];
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_date_to("2024-12-31")?;
//!
//! let filtered = apply_filters(messages, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].content, "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Filters run on raw messages, before normalization and segmentation
//! - The mention roster should still be built from the unfiltered collection
//! - Multiple filters are combined with AND logic

use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, warn};

use crate::Message;
use crate::error::CorpusError;

/// Configuration for restricting the processed message window.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only messages on or after this timestamp.
    pub after: Option<DateTime<Utc>>,

    /// Include only messages on or before this timestamp.
    pub before: Option<DateTime<Utc>>,

    /// Drop everything older than the earliest message starting with this marker.
    pub since_first_quote: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, CorpusError> {
        self.after = Some(parse_date_at(date_str, (0, 0, 0))?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, CorpusError> {
        // End of the day to include the full day
        self.before = Some(parse_date_at(date_str, (23, 59, 59))?);
        Ok(self)
    }

    /// Keeps only messages sent at or after the first quote-reply.
    ///
    /// Useful for histories that predate the platform's quoting feature:
    /// the conversational style before it tends to differ.
    #[must_use]
    pub fn with_since_first_quote(mut self, quote_marker: impl Into<String>) -> Self {
        self.since_first_quote = Some(quote_marker.into());
        self
    }

    /// Sets the start timestamp directly.
    #[must_use]
    pub fn with_after(mut self, dt: DateTime<Utc>) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end timestamp directly.
    #[must_use]
    pub fn with_before(mut self, dt: DateTime<Utc>) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || self.since_first_quote.is_some()
    }
}

/// Parse a date string in YYYY-MM-DD format at the given time of day.
fn parse_date_at(
    date_str: &str,
    (hour, min, sec): (u32, u32, u32),
) -> Result<DateTime<Utc>, CorpusError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(hour, min, sec))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| CorpusError::invalid_date(date_str))
}

/// Timestamp of the earliest message starting with `quote_marker`.
pub fn first_quote_timestamp(messages: &[Message], quote_marker: &str) -> Option<DateTime<Utc>> {
    messages
        .iter()
        .filter(|m| m.content.starts_with(quote_marker))
        .map(|m| m.timestamp)
        .min()
}

/// Filters a collection of messages based on the provided configuration.
///
/// Returns the messages that match all active filters, in their original order.
/// A first-quote filter over a history without any quote keeps everything.
pub fn apply_filters(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages;
    }

    let quote_cutoff = config.since_first_quote.as_deref().and_then(|marker| {
        let cutoff = first_quote_timestamp(&messages, marker);
        match cutoff {
            Some(ts) => debug!("first quote at {}", ts),
            None => warn!("no message starts with {:?}; first-quote filter skipped", marker),
        }
        cutoff
    });

    let lower = match (config.after, quote_cutoff) {
        (Some(a), Some(q)) => Some(a.max(q)),
        (a, q) => a.or(q),
    };

    messages
        .into_iter()
        .filter(|msg| {
            if lower.is_some_and(|after| msg.timestamp < after) {
                return false;
            }
            if config.before.is_some_and(|before| msg.timestamp > before) {
                return false;
            }
            true
        })
        .collect()
}
