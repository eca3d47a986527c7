//! Export parsers.
//!
//! # Available Parsers
//!
//! - [`DiscordParser`] - DiscordChatExporter JSON channel exports
//! - [`JsonlParser`] - One serialized [`Message`](crate::Message) per line
//!
//! Both implement [`Parser`](crate::parser::Parser); use
//! [`create_parser`](crate::parser::create_parser) to pick one at runtime.

mod discord;
mod jsonl;

pub use discord::DiscordParser;
pub use jsonl::JsonlParser;
