//! Thread segmentation by inactivity gap.
//!
//! A message opens a new thread iff it is the first message of the sequence or
//! the signed gap since the previous surviving message is strictly greater
//! than the threshold. A backwards jump in time therefore never opens a thread
//! on its own; such inversions are counted and logged so they can be spotted.

use chrono::Duration;
use log::{debug, warn};

use super::models::{NormalizedMessage, ThreadId, ThreadedMessage};

/// Outcome of [`segment_threads`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    /// Messages in input order, annotated with their thread.
    pub messages: Vec<ThreadedMessage>,
    /// Number of threads opened.
    pub thread_count: usize,
    /// Number of adjacent pairs whose timestamps go backwards.
    pub out_of_order: usize,
}

/// Stable-sorts messages by timestamp; equal timestamps keep source order.
pub fn sort_by_timestamp(messages: &mut [NormalizedMessage]) {
    messages.sort_by_key(|m| (m.timestamp, m.index));
}

/// Annotates each message with `started_new_thread` and a running `thread_id`.
pub fn segment_threads(messages: Vec<NormalizedMessage>, gap: Duration) -> Segmentation {
    let mut threaded = Vec::with_capacity(messages.len());
    let mut thread_count = 0u64;
    let mut out_of_order = 0usize;
    let mut previous = None;

    for message in messages {
        let started_new_thread = match previous {
            None => true,
            Some(prev) => {
                let delta = message.timestamp - prev;
                if delta < Duration::zero() {
                    out_of_order += 1;
                }
                delta > gap
            }
        };
        previous = Some(message.timestamp);

        if started_new_thread {
            thread_count += 1;
        }
        threaded.push(ThreadedMessage {
            message,
            started_new_thread,
            thread_id: ThreadId(thread_count),
        });
    }

    if out_of_order > 0 {
        warn!(
            "{} message(s) are older than their predecessor; thread boundaries around them follow sequence order",
            out_of_order
        );
    }
    debug!(
        "segmented {} messages into {} threads",
        threaded.len(),
        thread_count
    );

    Segmentation {
        messages: threaded,
        thread_count: usize::try_from(thread_count).unwrap_or(usize::MAX),
        out_of_order,
    }
}
