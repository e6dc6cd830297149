//! Reordering the queue by relinking nodes in place. Nothing here allocates.

use crate::queue::Queue;

impl Queue {
    /// Remove the middle element, found by walking inward from both ends.
    ///
    /// For an even number of elements the later of the two middle elements goes,
    /// so `[1, 2, 3, 4]` becomes `[1, 2, 4]`. Returns `false` if the queue is empty.
    pub fn delete_middle(&mut self) -> bool {
        self.list.remove_middle().is_some()
    }

    /// Swap every two adjacent elements; an odd trailing element stays.
    pub fn swap_pairs(&mut self) {
        self.list.swap_pairs();
    }

    /// Reverse the queue in place.
    pub fn reverse(&mut self) {
        self.list.reverse();
    }

    /// Reverse every consecutive run of `k` elements, from head to tail. A trailing
    /// run shorter than `k` keeps its order, and `k < 2` leaves the queue alone.
    pub fn reverse_k_groups(&mut self, k: usize) {
        self.list.reverse_groups(k);
    }
}

#[cfg(test)]
mod tests {
    use crate::queue::{values, Queue};
    use std::iter::FromIterator;

    #[test]
    fn delete_middle_odd_and_even() {
        let mut queue = Queue::from_iter(["1", "2", "3"]);
        assert!(queue.delete_middle());
        assert_eq!(values(&queue), vec!["1", "3"]);

        let mut queue = Queue::from_iter(["1", "2", "3", "4"]);
        assert!(queue.delete_middle());
        assert_eq!(values(&queue), vec!["1", "2", "4"]);

        let mut queue = Queue::from_iter(["1", "2"]);
        assert!(queue.delete_middle());
        assert_eq!(values(&queue), vec!["1"]);
        assert!(queue.delete_middle());
        assert!(!queue.delete_middle());
        assert!(queue.is_empty());
    }

    #[test]
    fn swap_pairs_leaves_odd_tail() {
        let mut queue = Queue::from_iter(["a", "b", "c", "d", "e"]);
        queue.swap_pairs();
        assert_eq!(values(&queue), vec!["b", "a", "d", "c", "e"]);
        queue.swap_pairs();
        assert_eq!(values(&queue), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn reverse_twice_restores_order() {
        let original = ["fox", "cat", "ant", "cat"];
        let mut queue = Queue::from_iter(original);
        queue.reverse();
        assert_eq!(values(&queue), vec!["cat", "ant", "cat", "fox"]);
        queue.reverse();
        assert_eq!(values(&queue), original.to_vec());

        let mut empty = Queue::new();
        empty.reverse();
        assert_eq!(values(&empty), Vec::<&str>::new());
    }

    #[test]
    fn reverse_k_groups_pairs() {
        let mut queue = Queue::from_iter(["1", "2", "3", "4", "5"]);
        queue.reverse_k_groups(2);
        assert_eq!(values(&queue), vec!["2", "1", "4", "3", "5"]);
    }

    #[test]
    fn reverse_k_groups_partial_tail() {
        let mut queue = Queue::from_iter(["1", "2", "3", "4", "5", "6", "7"]);
        queue.reverse_k_groups(3);
        assert_eq!(values(&queue), vec!["3", "2", "1", "6", "5", "4", "7"]);

        queue.reverse_k_groups(8);
        assert_eq!(values(&queue), vec!["3", "2", "1", "6", "5", "4", "7"]);

        queue.reverse_k_groups(7);
        assert_eq!(values(&queue), vec!["7", "4", "5", "6", "1", "2", "3"]);
    }
}
