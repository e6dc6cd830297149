use crate::list::{List, NodeId, GHOST};
use std::cmp::Ordering;

impl<T> List<T> {
    /// Sort the list.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and
    /// *O*(log(*n*)) stack depth.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    /// let mut list = List::from_iter([5, 2, 4, 3, 1]);
    ///
    /// list.sort();
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        merge_sort(self, |a, b| a.lt(b));
    }

    /// Sort the list with a comparator function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// The comparator function must define a total ordering for the
    /// elements in the list. If the ordering is not total, the order
    /// of the elements is unspecified.
    ///
    /// # Current Implementation
    ///
    /// The current algorithm is a top-down merge sort over the forward
    /// links. The `prev` links are rebuilt once at the end. There is no
    /// extra temporary storage during merging.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    /// let mut v = List::from_iter([5, 4, 1, 3, 2]);
    /// v.sort_by(|a, b| a.cmp(b));
    /// assert_eq!(Vec::from_iter(v.iter().copied()), vec![1, 2, 3, 4, 5]);
    ///
    /// // reverse sorting
    /// v.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(Vec::from_iter(v), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        merge_sort(self, |a, b| compare(a, b) == Ordering::Less)
    }
}

/// Stable merge sort with a strict "goes before" predicate `less`.
pub(crate) fn merge_sort<T, F>(list: &mut List<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let front = list.front_node();
    if front == GHOST || list.next_of(front) == GHOST {
        return;
    }
    // The back node already links to the ghost node, so the whole list is a run.
    let front = merge_sort_run(list, front, &mut less);
    list.relink_run(front);
}

/// Cut the run after its middle node and return the front of the second half.
fn split_run<T>(list: &mut List<T>, front: NodeId) -> NodeId {
    let (mut slow, mut fast) = (front, list.next_of(front));
    while fast != GHOST && list.next_of(fast) != GHOST {
        slow = list.next_of(slow);
        fast = list.next_of(list.next_of(fast));
    }
    let second = list.next_of(slow);
    list.set_next(slow, GHOST);
    second
}

fn merge_sort_run<T, F>(list: &mut List<T>, front: NodeId, less: &mut F) -> NodeId
where
    F: FnMut(&T, &T) -> bool,
{
    if front == GHOST || list.next_of(front) == GHOST {
        return front;
    }
    let second = split_run(list, front);
    let first = merge_sort_run(list, front, less);
    let second = merge_sort_run(list, second, less);
    merge_runs(list, first, second, less)
}

/// Merge two sorted runs into one and return its front.
///
/// A node of `second` is taken only when it goes strictly before the current
/// node of `first`, so equal elements keep their relative order.
pub(crate) fn merge_runs<T, F>(
    list: &mut List<T>,
    mut first: NodeId,
    mut second: NodeId,
    less: &mut F,
) -> NodeId
where
    F: FnMut(&T, &T) -> bool,
{
    let mut front = GHOST;
    let mut back: Option<NodeId> = None;
    while first != GHOST && second != GHOST {
        let taken = if goes_before(list, second, first, less) {
            let node = second;
            second = list.next_of(node);
            node
        } else {
            let node = first;
            first = list.next_of(node);
            node
        };
        match back {
            Some(back) => list.set_next(back, taken),
            None => front = taken,
        }
        back = Some(taken);
    }
    let rest = if first != GHOST { first } else { second };
    match back {
        Some(back) => {
            list.set_next(back, rest);
            front
        }
        None => rest,
    }
}

fn goes_before<T, F>(list: &List<T>, a: NodeId, b: NodeId, less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    match (list.element(a), list.element(b)) {
        (Some(a), Some(b)) => less(a, b),
        _ => false,
    }
}
