//! Collapses consecutive same-author messages of one thread into groups.
//!
//! This is run-length encoding over `(thread_id, author_id)`: a group never
//! spans a thread boundary or an author change.

use log::debug;

use super::models::{GroupId, MessageGroup, ThreadedMessage};

/// Builds message groups from thread-annotated messages.
///
/// Group ids start at [`GroupId::FIRST`] and increase by one per group.
/// Member contents are joined with `separator`. Parents are left unset; see
/// [`link_replies`](super::linker::link_replies).
///
/// # Example
///
/// ```text
/// thread 1: A "hi", A "there", B "yo"   thread 2: B "later"
/// groups:   G1(A, "hi ¤newmsg¤ there"), G2(B, "yo"), G3(B, "later")
/// ```
pub fn build_groups(messages: &[ThreadedMessage], separator: &str) -> Vec<MessageGroup> {
    let mut groups: Vec<MessageGroup> = Vec::new();

    for msg in messages {
        match groups.last_mut() {
            Some(last)
                if last.thread_id == msg.thread_id && last.author_id == msg.message.author_id =>
            {
                last.content.push_str(separator);
                last.content.push_str(&msg.message.content);
                last.message_count += 1;
            }
            _ => {
                let group_id = GroupId(GroupId::FIRST.0 + groups.len() as u64);
                groups.push(MessageGroup {
                    group_id,
                    thread_id: msg.thread_id,
                    author_id: msg.message.author_id.clone(),
                    started_new_thread: msg.started_new_thread,
                    content: msg.message.content.clone(),
                    message_count: 1,
                    replying_to: None,
                });
            }
        }
    }

    debug!(
        "grouped {} messages into {} groups",
        messages.len(),
        groups.len()
    );
    groups
}
