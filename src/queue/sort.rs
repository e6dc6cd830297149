use tracing::trace;

use crate::list::{merge_lists, merge_sort};
use crate::queue::Queue;

impl Queue {
    /// Stable merge sort by string value, ascending unless `descending`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["dog", "bee", "cow", "ant"]);
    /// queue.sort(true);
    /// assert_eq!(queue.iter().collect::<Vec<_>>(), vec!["dog", "cow", "bee", "ant"]);
    /// ```
    pub fn sort(&mut self, descending: bool) {
        trace!(descending, "sorting queue");
        merge_sort(&mut self.list, order(descending));
    }

    /// Merge the sorted queue `other` into this sorted queue, leaving `other`
    /// empty. Both must be sorted with the same `descending` order; this is not
    /// checked. On equal values, elements of `self` come first.
    pub fn merge_from(&mut self, other: &mut Queue, descending: bool) {
        merge_lists(&mut self.list, &mut other.list, order(descending));
    }
}

/// The strict "goes before" relation of a sort order.
fn order(descending: bool) -> impl FnMut(&String, &String) -> bool {
    move |a: &String, b: &String| if descending { a > b } else { a < b }
}

#[cfg(test)]
mod tests {
    use crate::queue::{values, Queue};
    use std::iter::FromIterator;

    #[test]
    fn sort_ascending_is_ordered_permutation() {
        let words = [
            "gnu", "yak", "emu", "ant", "yak", "owl", "bat", "gnu", "elk", "cod", "ape",
        ];
        let mut queue = Queue::from_iter(words);
        queue.sort(false);
        let sorted = values(&queue);
        assert_eq!(sorted.len(), words.len());
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        let mut expected = words.to_vec();
        expected.sort_unstable();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn sort_descending() {
        let mut queue = Queue::from_iter(["b", "c", "a", "c"]);
        queue.sort(true);
        assert_eq!(values(&queue), vec!["c", "c", "b", "a"]);
    }

    #[test]
    fn sort_compares_bytes() {
        let mut queue = Queue::from_iter(["b", "B", "10", "9", "", "a"]);
        queue.sort(false);
        assert_eq!(values(&queue), vec!["", "10", "9", "B", "a", "b"]);
    }

    #[test]
    fn sort_degenerate_queues() {
        let mut queue = Queue::new();
        queue.sort(false);
        assert!(queue.is_empty());
        queue.insert_tail("solo").unwrap();
        queue.sort(true);
        assert_eq!(values(&queue), vec!["solo"]);
    }

    #[test]
    fn merge_from_interleaves() {
        let mut left = Queue::from_iter(["1", "3", "5"]);
        let mut right = Queue::from_iter(["2", "4", "6"]);
        left.merge_from(&mut right, false);
        assert_eq!(values(&left), vec!["1", "2", "3", "4", "5", "6"]);
        assert!(right.is_empty());
        assert_eq!(values(&right), Vec::<&str>::new());
    }

    #[test]
    fn merge_from_descending() {
        let mut left = Queue::from_iter(["z", "m"]);
        let mut right = Queue::from_iter(["y", "m", "a"]);
        left.merge_from(&mut right, true);
        assert_eq!(values(&left), vec!["z", "y", "m", "m", "a"]);
    }
}
