use crate::list::{List, NodeId, GHOST};
use std::hash::{Hash, Hasher};

pub(crate) mod merge;
pub(crate) mod sort;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Reverse the list in place by exchanging the links of every node,
    /// the ghost node included.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(Vec::from_iter(list), vec![3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        let mut node = GHOST;
        loop {
            node = self.flip_links(node);
            if node == GHOST {
                break;
            }
        }
    }

    /// Swap every two adjacent elements. A trailing element without a partner
    /// stays where it is.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 4, 5]);
    /// list.swap_pairs();
    /// assert_eq!(Vec::from_iter(list), vec![2, 1, 4, 3, 5]);
    /// ```
    pub fn swap_pairs(&mut self) {
        let mut first = self.front_node();
        while first != GHOST {
            let second = self.next_of(first);
            if second == GHOST {
                break;
            }
            let (prev, next) = (self.prev_of(first), self.next_of(second));
            self.connect(prev, second);
            self.connect(second, first);
            self.connect(first, next);
            first = next;
        }
    }

    /// Reverse every consecutive group of `k` elements, from front to back.
    /// A trailing group shorter than `k` keeps its order; `k < 2` changes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(1..=8);
    /// list.reverse_groups(3);
    /// assert_eq!(Vec::from_iter(list), vec![3, 2, 1, 6, 5, 4, 7, 8]);
    /// ```
    pub fn reverse_groups(&mut self, k: usize) {
        if k < 2 {
            return;
        }
        // `before` and `after` are the untouched neighbours of the group `front..=back`.
        let mut before = GHOST;
        loop {
            let front = self.next_of(before);
            let mut after = front;
            let mut count = 0;
            while count < k && after != GHOST {
                after = self.next_of(after);
                count += 1;
            }
            if count < k {
                break;
            }
            let back = self.prev_of(after);

            let mut node = front;
            while node != after {
                node = self.flip_links(node);
            }
            self.connect(before, back);
            self.connect(front, after);

            before = front;
        }
    }

    /// Find the middle node with two cursors walking inward from both ends.
    ///
    /// They stop when they meet, or when they become adjacent, in which case the
    /// back cursor (the later of the two middle nodes) is the middle.
    pub(crate) fn middle_node(&self) -> Option<NodeId> {
        if self.is_empty() {
            return None;
        }
        let (mut front, mut back) = (self.front_node(), self.back_node());
        while front != back && self.next_of(front) != back {
            front = self.next_of(front);
            back = self.prev_of(back);
        }
        Some(back)
    }

    /// Remove the middle element and return it, or `None` if the list is empty.
    ///
    /// For an even length, the later of the two middle elements is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 4]);
    /// assert_eq!(list.remove_middle(), Some(3));
    /// assert_eq!(list.remove_middle(), Some(2));
    /// assert_eq!(Vec::from_iter(list), vec![1, 4]);
    /// ```
    pub fn remove_middle(&mut self) -> Option<T> {
        let middle = self.middle_node()?;
        self.detach_node(middle)
    }
}
