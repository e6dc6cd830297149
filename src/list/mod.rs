use std::collections::TryReserveError;
use std::fmt::{Debug, Formatter};
use std::iter::FromIterator;

use crate::list::iterator::{IntoIter, Iter};

pub mod iterator;

mod algorithms;

pub(crate) use self::algorithms::merge::merge_lists;
pub(crate) use self::algorithms::sort::merge_sort;

/// The `List` is a doubly-linked list with owned nodes, implemented as a cyclic list
/// over an arena.
///
/// Every node, including the ghost node, lives in a `Vec` owned by the list and
/// links to its neighbours by [`NodeId`] instead of by pointer. Index 0 is always
/// the ghost node, whose `next` and `prev` are the first and the last element (or
/// the ghost node itself, when the list is empty). Slots freed by removals are
/// recycled, so the index of a live element never changes.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list nodes, left inclusive and right
///   exclusive (probably the ghost node);
/// - *run*: a forward-only chain of nodes whose last `next` is the ghost node.
///   The `prev` links inside a run are meaningless until it is relinked.
pub struct List<T> {
    nodes: Vec<Node<T>>,
    vacant: Vec<NodeId>,
}

/// Position of a node in the arena of a [`List`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

/// The ghost node of every list.
pub(crate) const GHOST: NodeId = NodeId(0);

pub(crate) struct Node<T> {
    pub(crate) next: NodeId,
    pub(crate) prev: NodeId,
    /// `None` for the ghost node and for vacant slots.
    pub(crate) element: Option<T>,
}

impl<T> Node<T> {
    fn ghost() -> Self {
        Self {
            next: GHOST,
            prev: GHOST,
            element: None,
        }
    }
}

// private methods
impl<T> List<T> {
    pub(crate) fn ghost_node(&self) -> NodeId {
        GHOST
    }
    pub(crate) fn front_node(&self) -> NodeId {
        self.next_of(GHOST)
    }
    pub(crate) fn back_node(&self) -> NodeId {
        self.prev_of(GHOST)
    }
    pub(crate) fn next_of(&self, node: NodeId) -> NodeId {
        self.nodes[node.0].next
    }
    pub(crate) fn prev_of(&self, node: NodeId) -> NodeId {
        self.nodes[node.0].prev
    }
    pub(crate) fn set_next(&mut self, node: NodeId, next: NodeId) {
        self.nodes[node.0].next = next;
    }
    pub(crate) fn element(&self, node: NodeId) -> Option<&T> {
        self.nodes.get(node.0)?.element.as_ref()
    }

    pub(crate) fn connect(&mut self, prev: NodeId, next: NodeId) {
        self.nodes[prev.0].next = next;
        self.nodes[next.0].prev = prev;
    }

    /// Exchange the `next` and `prev` links of `node`, returning the new `prev`
    /// (i.e. the old `next`).
    pub(crate) fn flip_links(&mut self, node: NodeId) -> NodeId {
        let links = &mut self.nodes[node.0];
        std::mem::swap(&mut links.next, &mut links.prev);
        links.prev
    }

    /// Place `element` in a slot of the arena, returning a self-linked node.
    fn alloc(&mut self, element: T) -> NodeId {
        match self.vacant.pop() {
            Some(node) => {
                self.nodes[node.0] = Node {
                    next: node,
                    prev: node,
                    element: Some(element),
                };
                node
            }
            None => {
                let node = NodeId(self.nodes.len());
                self.nodes.push(Node {
                    next: node,
                    prev: node,
                    element: Some(element),
                });
                node
            }
        }
    }

    /// Like [`List::alloc`], but reports a failed arena growth instead of aborting.
    ///
    /// On failure `element` is dropped and the list is left untouched.
    fn try_alloc(&mut self, element: T) -> Result<NodeId, TryReserveError> {
        if self.vacant.is_empty() {
            self.nodes.try_reserve(1)?;
        }
        Ok(self.alloc(element))
    }

    /// Attach a single node `node` to the list, between `prev` and `next`.
    ///
    /// If the `prev` and `next` are not adjacent, this function call will make
    /// the list ill-formed (checked only in `#[cfg(debug_assertions)]`).
    pub(crate) fn attach_node(&mut self, prev: NodeId, next: NodeId, node: NodeId) {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        self.connect(prev, node);
        self.connect(node, next);
    }

    /// Detach a single node `node` from the list, release its slot and return
    /// its element.
    pub(crate) fn detach_node(&mut self, node: NodeId) -> Option<T> {
        debug_assert_ne!(node, GHOST, "the ghost node cannot be detached");
        let (prev, next) = (self.prev_of(node), self.next_of(node));
        self.connect(prev, next);
        let slot = &mut self.nodes[node.0];
        slot.next = node;
        slot.prev = node;
        let element = slot.element.take();
        self.vacant.push(node);
        element
    }

    /// Rebuild the `prev` links of the run starting at `front` and close it into
    /// a cyclic list around the ghost node.
    pub(crate) fn relink_run(&mut self, front: NodeId) {
        let (mut prev, mut node) = (GHOST, front);
        while node != GHOST {
            self.connect(prev, node);
            prev = node;
            node = self.next_of(node);
        }
        self.connect(prev, GHOST);
    }

    /// Move every element of `other` into this arena as a run, leaving `other`
    /// empty. The run is not attached to this list.
    ///
    /// Returns the front of the run, or the ghost node if `other` was empty.
    pub(crate) fn absorb(&mut self, other: &mut List<T>) -> NodeId {
        let (mut front, mut back) = (GHOST, GHOST);
        while let Some(element) = other.pop_front() {
            let node = self.alloc(element);
            if back == GHOST {
                front = node;
            } else {
                self.set_next(back, node);
            }
            back = node;
        }
        if back != GHOST {
            self.set_next(back, GHOST);
        }
        other.clear();
        front
    }

    /// Mutable access to the elements of two distinct nodes at once.
    pub(crate) fn pair_mut(&mut self, a: NodeId, b: NodeId) -> Option<(&mut T, &mut T)> {
        if a == b {
            return None;
        }
        let (low, high) = (a.0.min(b.0), a.0.max(b.0));
        if high >= self.nodes.len() {
            return None;
        }
        let (head, tail) = self.nodes.split_at_mut(high);
        let low_element = head.get_mut(low)?.element.as_mut()?;
        let high_element = tail.first_mut()?.element.as_mut()?;
        if a.0 < b.0 {
            Some((low_element, high_element))
        } else {
            Some((high_element, low_element))
        }
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: NodeId, next: NodeId) {
        assert_eq!(self.next_of(prev), next);
        assert_eq!(self.prev_of(next), prev);
    }

    /// Check that walking `next` from the ghost node visits every live node once,
    /// that each `next.prev` points back, and that the walk returns to the ghost.
    #[cfg(test)]
    pub(crate) fn assert_well_formed(&self) {
        let live = self.nodes.len() - self.vacant.len() - 1;
        let mut node = GHOST;
        for _ in 0..=live {
            let next = self.next_of(node);
            assert_eq!(self.prev_of(next), node, "broken `prev` link at {:?}", next);
            node = next;
        }
        assert_eq!(node, GHOST, "the list is not cyclic over its live nodes");
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use cyclic_queue::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::ghost()],
            vacant: Vec::new(),
        }
    }

    /// Create an empty `List`, or report the failure to allocate its ghost node.
    pub fn try_new() -> Result<Self, TryReserveError> {
        let mut nodes = Vec::new();
        nodes.try_reserve(1)?;
        nodes.push(Node::ghost());
        Ok(Self {
            nodes,
            vacant: Vec::new(),
        })
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == GHOST
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// There is no cached counter: this operation walks the list in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Removes all elements from the `List` and gives back the arena slots.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.vacant.clear();
        self.connect(GHOST, GHOST);
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.element(self.front_node())
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.element(self.back_node())
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in amortized *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Some(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        let node = self.alloc(elt);
        let front = self.front_node();
        self.attach_node(GHOST, front, node);
    }

    /// Appends an element to the back of a list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in amortized *O*(1) time.
    pub fn push_back(&mut self, elt: T) {
        let node = self.alloc(elt);
        let back = self.back_node();
        self.attach_node(back, GHOST, node);
    }

    /// Like [`List::push_front`], but returns an error instead of aborting when
    /// the arena cannot grow. The list is unchanged on failure.
    pub fn try_push_front(&mut self, elt: T) -> Result<(), TryReserveError> {
        let node = self.try_alloc(elt)?;
        let front = self.front_node();
        self.attach_node(GHOST, front, node);
        Ok(())
    }

    /// Like [`List::push_back`], but returns an error instead of aborting when
    /// the arena cannot grow. The list is unchanged on failure.
    pub fn try_push_back(&mut self, elt: T) -> Result<(), TryReserveError> {
        let node = self.try_alloc(elt)?;
        let back = self.back_node();
        self.attach_node(back, GHOST, node);
        Ok(())
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.detach_node(self.front_node())
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.detach_node(self.back_node())
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([0, 1, 2]);
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next_back(), Some(&2));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|elt| self.push_back(elt));
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::cell::RefCell;
    use std::iter::FromIterator;

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
        list.assert_well_formed();
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        let mut dropped = dropped.into_inner();
        dropped.sort_unstable();
        assert_eq!(dropped, vec![1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_back(1);
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        list.assert_well_formed();
        assert_eq!(list.len(), 3);
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));

        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(list.is_empty());
        list.assert_well_formed();
    }

    #[test]
    fn list_reuses_vacant_slots() {
        let mut list = List::from_iter(0..4);
        assert_eq!(list.pop_front(), Some(0));
        assert_eq!(list.pop_back(), Some(3));
        let arena = list.nodes.len();
        list.push_back(4);
        list.push_front(5);
        assert_eq!(list.nodes.len(), arena);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![5, 1, 2, 4]);
        list.assert_well_formed();
    }

    #[test]
    fn list_try_push() {
        let mut list = List::try_new().unwrap();
        list.try_push_back("b").unwrap();
        list.try_push_front("a").unwrap();
        list.try_push_back("c").unwrap();
        assert_eq!(Vec::from_iter(list), vec!["a", "b", "c"]);
    }

    #[test]
    fn list_absorb_moves_everything() {
        let mut list = List::from_iter(0..2);
        let mut other = List::from_iter(10..13);
        let front = list.absorb(&mut other);
        assert!(other.is_empty());
        other.assert_well_formed();

        // Attach the absorbed run behind the existing elements.
        let back = list.back_node();
        list.set_next(back, front);
        list.relink_run(list.front_node());
        list.assert_well_formed();
        assert_eq!(Vec::from_iter(list), vec![0, 1, 10, 11, 12]);
    }

    #[test]
    fn list_pair_mut() {
        let mut list = List::from_iter([1, 2]);
        let (a, b) = (list.front_node(), list.back_node());
        assert!(list.pair_mut(a, a).is_none());
        let (x, y) = list.pair_mut(b, a).unwrap();
        std::mem::swap(x, y);
        assert_eq!(Vec::from_iter(list), vec![2, 1]);
    }

    #[test]
    fn list_clear() {
        let mut list = List::from_iter(0..5);
        list.clear();
        assert!(list.is_empty());
        list.assert_well_formed();
        list.push_back(7);
        assert_eq!(list.front(), Some(&7));
    }
}
