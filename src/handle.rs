//! Entry points taking optional queue handles.
//!
//! Hosts that keep queues behind nullable slots can call these directly. An
//! absent handle never panics: fallible operations report
//! [`QueueError::InvalidHandle`], and the others fall back to a no-op, `false`
//! or `0`.

use tracing::trace;

use crate::chain::QueueChain;
use crate::error::QueueError;
use crate::queue::{Element, Queue};

/// Create an empty queue.
pub fn create() -> Result<Queue, QueueError> {
    Queue::try_new()
}

/// Release a queue and every element in it. Absent handles are ignored.
pub fn destroy(queue: Option<Queue>) {
    if let Some(queue) = queue {
        trace!(len = queue.size(), "destroying queue");
    }
}

pub fn size(queue: Option<&Queue>) -> usize {
    queue.map_or(0, Queue::size)
}

pub fn insert_head(queue: Option<&mut Queue>, value: &str) -> Result<(), QueueError> {
    queue.ok_or(QueueError::InvalidHandle)?.insert_head(value)
}

pub fn insert_tail(queue: Option<&mut Queue>, value: &str) -> Result<(), QueueError> {
    queue.ok_or(QueueError::InvalidHandle)?.insert_tail(value)
}

pub fn remove_head(queue: Option<&mut Queue>, buf: Option<&mut [u8]>) -> Option<Element> {
    queue?.remove_head(buf)
}

pub fn remove_tail(queue: Option<&mut Queue>, buf: Option<&mut [u8]>) -> Option<Element> {
    queue?.remove_tail(buf)
}

/// Returns `false` if the queue is absent or empty.
pub fn delete_middle(queue: Option<&mut Queue>) -> bool {
    queue.map_or(false, Queue::delete_middle)
}

/// Returns `true` for any present queue.
pub fn delete_duplicates(queue: Option<&mut Queue>) -> bool {
    match queue {
        Some(queue) => {
            queue.delete_duplicates();
            true
        }
        None => false,
    }
}

pub fn swap_pairs(queue: Option<&mut Queue>) {
    if let Some(queue) = queue {
        queue.swap_pairs();
    }
}

pub fn reverse(queue: Option<&mut Queue>) {
    if let Some(queue) = queue {
        queue.reverse();
    }
}

pub fn reverse_k_groups(queue: Option<&mut Queue>, k: usize) {
    if let Some(queue) = queue {
        queue.reverse_k_groups(k);
    }
}

pub fn ascend(queue: Option<&mut Queue>) -> usize {
    queue.map_or(0, Queue::ascend)
}

pub fn descend(queue: Option<&mut Queue>) -> usize {
    queue.map_or(0, Queue::descend)
}

pub fn sort(queue: Option<&mut Queue>, descending: bool) {
    if let Some(queue) = queue {
        queue.sort(descending);
    }
}

/// Merge a chain of sorted queues; 0 for an absent or empty chain.
pub fn merge(chain: Option<&mut QueueChain>, descending: bool) -> usize {
    chain.map_or(0, |chain| chain.merge(descending))
}
