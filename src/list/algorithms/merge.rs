use crate::list::algorithms::sort::merge_runs;
use crate::list::List;
use std::cmp::Ordering;

impl<T> List<T> {
    /// Merge the sorted list `other` into this sorted list, leaving `other` empty.
    ///
    /// Both lists must already be sorted by `compare`; this is not checked, and
    /// the order of the result is unspecified otherwise. Equal elements of
    /// `self` stay ahead of those of `other`.
    ///
    /// The elements of `other` are moved into this list's arena. Their payloads
    /// are moved, not cloned.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut odd = List::from_iter([1, 3, 5]);
    /// let mut even = List::from_iter([2, 4, 6]);
    /// odd.merge_by(&mut even, |a, b| a.cmp(b));
    /// assert!(even.is_empty());
    /// assert_eq!(Vec::from_iter(odd), vec![1, 2, 3, 4, 5, 6]);
    /// ```
    pub fn merge_by<F>(&mut self, other: &mut List<T>, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        merge_lists(self, other, |a, b| compare(a, b) == Ordering::Less)
    }
}

/// Merge with a strict "goes before" predicate `less`.
pub(crate) fn merge_lists<T, F>(list: &mut List<T>, other: &mut List<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let second = list.absorb(other);
    if second == list.ghost_node() {
        return;
    }
    // Like in sorting, the back node of `list` terminates its run at the ghost node.
    let first = list.front_node();
    let front = merge_runs(list, first, second, &mut less);
    list.relink_run(front);
}
