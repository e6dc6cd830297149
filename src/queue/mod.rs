use std::fmt::{Debug, Formatter};
use std::iter::FromIterator;

use tracing::debug;

use crate::error::QueueError;
use crate::list::List;

mod cleanup;
mod sort;
mod transform;

/// A queue of strings over a cyclic doubly-linked [`List`].
///
/// The queue owns a copy of every inserted string. Dropping the queue
/// releases all of them.
///
/// # Examples
///
/// ```
/// use cyclic_queue::Queue;
///
/// let mut queue = Queue::try_new()?;
/// queue.insert_tail("world")?;
/// queue.insert_head("hello")?;
/// assert_eq!(queue.size(), 2);
///
/// let mut buf = [0xffu8; 4];
/// let element = queue.remove_head(Some(&mut buf[..])).unwrap();
/// assert_eq!(element.value(), "hello");
/// assert_eq!(&buf, b"hel\0");
/// # Ok::<(), cyclic_queue::QueueError>(())
/// ```
#[derive(Default, PartialEq, Eq)]
pub struct Queue {
    list: List<String>,
}

/// An element removed from a [`Queue`]. Dropping it releases its value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element {
    value: String,
}

impl Element {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

impl Queue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self { list: List::new() }
    }

    /// Create an empty queue, or report [`QueueError::AllocationFailure`] if its
    /// ghost node cannot be allocated.
    pub fn try_new() -> Result<Self, QueueError> {
        Ok(Self {
            list: List::try_new()?,
        })
    }

    /// Number of elements, counted by walking the queue.
    pub fn size(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn front(&self) -> Option<&str> {
        self.list.front().map(String::as_str)
    }

    pub fn back(&self) -> Option<&str> {
        self.list.back().map(String::as_str)
    }

    /// Iterate over the values from head to tail.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.list.iter().map(String::as_str)
    }

    /// Insert a copy of `value` at the head of the queue.
    ///
    /// On [`QueueError::AllocationFailure`] the queue is unchanged.
    pub fn insert_head(&mut self, value: &str) -> Result<(), QueueError> {
        let value = duplicate(value)?;
        self.list.try_push_front(value).map_err(|err| {
            debug!(error = %err, "failed to allocate a head element");
            QueueError::from(err)
        })
    }

    /// Insert a copy of `value` at the tail of the queue.
    ///
    /// On [`QueueError::AllocationFailure`] the queue is unchanged.
    pub fn insert_tail(&mut self, value: &str) -> Result<(), QueueError> {
        let value = duplicate(value)?;
        self.list.try_push_back(value).map_err(|err| {
            debug!(error = %err, "failed to allocate a tail element");
            QueueError::from(err)
        })
    }

    /// Detach the head element and hand it to the caller.
    ///
    /// If `buf` is given, the value is also copied into it as a NUL-terminated
    /// byte string, truncated to `buf.len() - 1` bytes. See [`copy_terminated`].
    pub fn remove_head(&mut self, buf: Option<&mut [u8]>) -> Option<Element> {
        let value = self.list.pop_front()?;
        Some(removed(value, buf))
    }

    /// Detach the tail element and hand it to the caller, copying its value into
    /// `buf` like [`Queue::remove_head`].
    pub fn remove_tail(&mut self, buf: Option<&mut [u8]>) -> Option<Element> {
        let value = self.list.pop_back()?;
        Some(removed(value, buf))
    }
}

fn removed(value: String, buf: Option<&mut [u8]>) -> Element {
    if let Some(buf) = buf {
        copy_terminated(&value, buf);
    }
    Element { value }
}

/// Copy `value` into `buf`, truncated to `buf.len() - 1` bytes, and zero the rest
/// of the buffer. The last byte of a non-empty buffer is therefore always `0`.
/// An empty buffer is left alone.
pub fn copy_terminated(value: &str, buf: &mut [u8]) {
    let last = match buf.len().checked_sub(1) {
        Some(last) => last,
        None => return,
    };
    let len = value.len().min(last);
    buf[..len].copy_from_slice(&value.as_bytes()[..len]);
    buf[len..].fill(0);
}

fn duplicate(value: &str) -> Result<String, QueueError> {
    let mut owned = String::new();
    owned.try_reserve_exact(value.len()).map_err(|err| {
        debug!(len = value.len(), error = %err, "failed to copy an element value");
        QueueError::from(err)
    })?;
    owned.push_str(value);
    Ok(owned)
}

impl Debug for Queue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> FromIterator<&'a str> for Queue {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<'a> Extend<&'a str> for Queue {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        self.list.extend(iter.into_iter().map(str::to_owned));
    }
}

#[cfg(test)]
pub(crate) fn values(queue: &Queue) -> Vec<&str> {
    queue.list.assert_well_formed();
    queue.iter().collect()
}
