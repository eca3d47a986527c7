//! Author roster used for mention stripping.
//!
//! The roster must be computed once over the *unfiltered* collection: a bot
//! or an author whose every message gets dropped can still be mentioned by
//! someone else.

use std::collections::HashSet;

use crate::Message;

/// Distinct author display names, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Builds a roster from explicit names, skipping empties and duplicates.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let names = names
            .into_iter()
            .map(Into::into)
            .filter(|name: &String| !name.is_empty() && seen.insert(name.clone()))
            .collect();
        Self { names }
    }

    /// Collects every author name present in `messages`.
    pub fn from_messages(messages: &[Message]) -> Self {
        Self::new(messages.iter().map(|m| m.author_name.as_str()))
    }

    /// Returns the names in first-appearance order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
