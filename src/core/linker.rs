//! Reply linking and pair extraction.
//!
//! Every group that did not open a thread replies to the group right before
//! it. Pairs are then materialized through an explicit `group_id → group`
//! lookup; a parent id that resolves to nothing is excluded and reported.

use std::collections::BTreeMap;

use log::{debug, warn};

use super::models::{GroupId, MessageGroup, ReplyPair};

/// Outcome of [`extract_pairs`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// One pair per group with an existing parent, in group-id order.
    pub pairs: Vec<ReplyPair>,
    /// Groups without a parent because they opened a thread.
    pub orphans: usize,
    /// Groups whose parent id matched no group.
    pub dangling: usize,
}

/// Sets `replying_to` on every group.
pub fn link_replies(mut groups: Vec<MessageGroup>) -> Vec<MessageGroup> {
    for group in &mut groups {
        group.replying_to = if group.started_new_thread {
            None
        } else {
            Some(group.group_id.preceding())
        };
    }
    groups
}

/// Resolves parent references into (reply, parent) pairs.
pub fn extract_pairs(groups: &[MessageGroup]) -> Extraction {
    let by_id: BTreeMap<GroupId, &MessageGroup> =
        groups.iter().map(|g| (g.group_id, g)).collect();

    let mut extraction = Extraction::default();
    for group in groups {
        let Some(parent_id) = group.replying_to else {
            extraction.orphans += 1;
            continue;
        };

        match by_id.get(&parent_id) {
            Some(parent) => extraction.pairs.push(ReplyPair {
                reply_group_id: group.group_id,
                parent_group_id: parent.group_id,
                reply: group.content.clone(),
                parent: parent.content.clone(),
            }),
            None => {
                warn!(
                    "group {} replies to missing group {}; excluded from corpus",
                    group.group_id, parent_id
                );
                extraction.dangling += 1;
            }
        }
    }

    debug!(
        "extracted {} pairs ({} orphan groups, {} dangling)",
        extraction.pairs.len(),
        extraction.orphans,
        extraction.dangling
    );
    extraction
}
