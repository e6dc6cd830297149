use crate::queue::Queue;

impl Queue {
    /// Remove every element whose value occurs more than once in a row, all
    /// copies included. On a sorted queue this leaves only the unique values.
    ///
    /// Returns the number of removed elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["a", "a", "b", "c", "c"]);
    /// assert_eq!(queue.delete_duplicates(), 4);
    /// assert_eq!(queue.iter().collect::<Vec<_>>(), vec!["b"]);
    /// ```
    pub fn delete_duplicates(&mut self) -> usize {
        let ghost = self.list.ghost_node();
        let mut removed = 0;
        let mut node = self.list.front_node();
        while node != ghost {
            let mut next = self.list.next_of(node);
            let mut duplicated = false;
            while next != ghost && self.list.element(next) == self.list.element(node) {
                let copy = next;
                next = self.list.next_of(copy);
                self.list.detach_node(copy);
                duplicated = true;
                removed += 1;
            }
            if duplicated {
                self.list.detach_node(node);
                removed += 1;
            }
            node = next;
        }
        removed
    }

    /// Remove every element that has a strictly smaller value somewhere to its
    /// right. The remaining values are non-decreasing.
    ///
    /// Returns the number of remaining elements.
    pub fn ascend(&mut self) -> usize {
        self.prune_dominated(|kept, other| other > kept)
    }

    /// Remove every element that has a strictly greater value somewhere to its
    /// right. The remaining values are non-increasing.
    ///
    /// Returns the number of remaining elements.
    pub fn descend(&mut self) -> usize {
        self.prune_dominated(|kept, other| other < kept)
    }

    /// Walk the queue from tail to head and drop every element for which
    /// `dominated(kept, element)` holds against the last kept element.
    fn prune_dominated<F>(&mut self, dominated: F) -> usize
    where
        F: Fn(&str, &str) -> bool,
    {
        self.list.reverse();
        let ghost = self.list.ghost_node();
        let mut node = self.list.front_node();
        while node != ghost {
            let mut next = self.list.next_of(node);
            while next != ghost {
                match (self.list.element(node), self.list.element(next)) {
                    (Some(kept), Some(other)) if dominated(kept.as_str(), other.as_str()) => {}
                    _ => break,
                }
                let victim = next;
                next = self.list.next_of(victim);
                self.list.detach_node(victim);
            }
            node = next;
        }
        self.list.reverse();
        self.size()
    }
}
