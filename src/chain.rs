//! A chain of queues, merged into one sorted queue.

use tracing::{debug, trace};

use crate::list::iterator::Iter;
use crate::list::{List, NodeId};
use crate::queue::Queue;

/// A queue in a [`QueueChain`], with its cached element count and the id it
/// was given when pushed.
#[derive(Debug)]
pub struct QueueContext {
    queue: Queue,
    size: usize,
    id: usize,
}

impl QueueContext {
    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// The cached element count of the queue.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn into_queue(self) -> Queue {
        self.queue
    }
}

/// A cyclic list of queue contexts.
///
/// [`QueueChain::merge`] treats every queue as a sorted run and merges them all
/// into the first one, in a balanced binary fashion.
///
/// # Examples
///
/// ```
/// use cyclic_queue::{Queue, QueueChain};
/// use std::iter::FromIterator;
///
/// let mut chain = QueueChain::new();
/// chain.push(Queue::from_iter(["1", "4"]));
/// let donor = chain.push(Queue::from_iter(["2", "3", "5"]));
///
/// assert_eq!(chain.merge(false), 5);
/// let merged = chain.first().unwrap();
/// assert_eq!(merged.queue().iter().collect::<Vec<_>>(), vec!["1", "2", "3", "4", "5"]);
/// assert_eq!(chain.get(donor).unwrap().size(), 0);
/// ```
#[derive(Debug, Default)]
pub struct QueueChain {
    contexts: List<QueueContext>,
    next_id: usize,
}

impl QueueChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `queue` to the chain, caching its size, and return its id.
    pub fn push(&mut self, queue: Queue) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        let size = queue.size();
        self.contexts.push_back(QueueContext { queue, size, id });
        id
    }

    /// Detach the first context of the chain.
    pub fn pop_front(&mut self) -> Option<QueueContext> {
        self.contexts.pop_front()
    }

    /// Number of queues in the chain.
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    pub fn first(&self) -> Option<&QueueContext> {
        self.contexts.front()
    }

    pub fn get(&self, id: usize) -> Option<&QueueContext> {
        self.iter().find(|context| context.id == id)
    }

    pub fn iter(&self) -> Iter<'_, QueueContext> {
        self.contexts.iter()
    }

    /// Merge every queue of the chain into the first one and return the total
    /// number of elements, or 0 if the chain is empty.
    ///
    /// Every queue must already be sorted in the `descending` (or ascending)
    /// order; this is not checked. Afterwards all other contexts hold an empty
    /// queue with a size of 0.
    pub fn merge(&mut self, descending: bool) -> usize {
        if self.contexts.is_empty() {
            return 0;
        }
        let (start, end) = (self.contexts.front_node(), self.contexts.ghost_node());
        self.merge_range(start, end, descending);
        let total = self.first().map_or(0, QueueContext::size);
        debug!(queues = self.len(), total, descending, "merged queue chain");
        total
    }

    /// Merge the contexts `start..end` into `start`.
    fn merge_range(&mut self, start: NodeId, end: NodeId, descending: bool) {
        if start == end || self.contexts.next_of(start) == end {
            return;
        }
        let (mut front, mut mid) = (start, self.contexts.prev_of(end));
        while front != mid && self.contexts.next_of(front) != mid {
            front = self.contexts.next_of(front);
            mid = self.contexts.prev_of(mid);
        }
        self.merge_range(start, mid, descending);
        self.merge_range(mid, end, descending);
        self.merge_pair(start, mid, descending);
    }

    fn merge_pair(&mut self, into: NodeId, from: NodeId, descending: bool) {
        if let Some((into, from)) = self.contexts.pair_mut(into, from) {
            trace!(into = into.id, from = from.id, "merging queue pair");
            into.queue.merge_from(&mut from.queue, descending);
            into.size += from.size;
            from.size = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::chain::QueueChain;
    use crate::queue::{values, Queue};
    use std::iter::FromIterator;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn chain_of(queues: &[&[&str]]) -> QueueChain {
        let mut chain = QueueChain::new();
        for words in queues {
            chain.push(Queue::from_iter(words.iter().copied()));
        }
        chain
    }

    #[test]
    fn merge_two_queues() {
        init_tracing();
        let mut chain = chain_of(&[&["1", "3", "5"], &["2", "4", "6"]]);
        assert_eq!(chain.merge(false), 6);

        let first = chain.first().unwrap();
        assert_eq!(first.size(), 6);
        assert_eq!(values(first.queue()), vec!["1", "2", "3", "4", "5", "6"]);

        let donor = chain.get(1).unwrap();
        assert_eq!(donor.size(), 0);
        assert!(donor.queue().is_empty());
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn merge_many_queues() {
        init_tracing();
        let mut chain = chain_of(&[
            &["c", "h", "m"],
            &["a", "n"],
            &[],
            &["b", "d", "e", "z"],
            &["f"],
            &["g", "i"],
            &["c"],
        ]);
        assert_eq!(chain.merge(false), 13);
        let first = chain.first().unwrap();
        assert_eq!(
            values(first.queue()),
            vec!["a", "b", "c", "c", "d", "e", "f", "g", "h", "i", "m", "n", "z"]
        );
        for context in chain.iter().skip(1) {
            assert_eq!(context.size(), 0);
            assert!(context.queue().is_empty());
        }
    }

    #[test]
    fn merge_descending() {
        let mut chain = chain_of(&[&["9", "5", "1"], &["8", "2"], &["7", "6", "0"]]);
        assert_eq!(chain.merge(true), 8);
        assert_eq!(
            values(chain.first().unwrap().queue()),
            vec!["9", "8", "7", "6", "5", "2", "1", "0"]
        );
    }

    #[test]
    fn merge_identical_values() {
        let mut chain = QueueChain::new();
        for _ in 0..3 {
            chain.push(Queue::from_iter(["same"]));
        }
        assert_eq!(chain.merge(false), 3);
        assert_eq!(values(chain.first().unwrap().queue()), vec!["same"; 3]);
    }

    #[test]
    fn merge_empty_and_single_chains() {
        let mut chain = QueueChain::new();
        assert_eq!(chain.merge(false), 0);

        let id = chain.push(Queue::from_iter(["b", "a"]));
        assert_eq!(id, 0);
        // A lone queue is returned as it is, even when unsorted.
        assert_eq!(chain.merge(false), 2);
        assert_eq!(values(chain.first().unwrap().queue()), vec!["b", "a"]);
    }

    #[test]
    fn merge_after_sorting_each_queue() {
        let mut chain = QueueChain::new();
        for words in [["pig", "ant", "eel"], ["yak", "bee", "cat"]] {
            let mut queue = Queue::from_iter(words);
            queue.sort(false);
            chain.push(queue);
        }
        assert_eq!(chain.merge(false), 6);
        let merged = chain.pop_front().unwrap();
        assert_eq!(merged.id(), 0);
        let queue = merged.into_queue();
        assert_eq!(values(&queue), vec!["ant", "bee", "cat", "eel", "pig", "yak"]);
        assert_eq!(chain.len(), 1);
    }
}
