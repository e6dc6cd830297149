//! This crate provides a queue of strings backed by a cyclic doubly-linked list.
//!
//! The [`Queue`] supports insertion and removal at both ends, in-place
//! reordering (pair swapping, reversal, reversal in groups of *k*), cleanup of
//! sorted or monotonic sequences, a stable merge sort, and the merge of many
//! sorted queues held in a [`QueueChain`].
//!
//! Here is a quick example showing how the queue works.
//!
//! ```
//! use cyclic_queue::Queue;
//! use std::iter::FromIterator;
//!
//! let mut queue = Queue::from_iter(["1", "2", "3", "4", "5"]);
//!
//! queue.reverse_k_groups(2);
//! assert_eq!(queue.iter().collect::<Vec<_>>(), vec!["2", "1", "4", "3", "5"]);
//!
//! queue.sort(false);
//! assert!(queue.delete_middle()); // removes "3"
//! assert_eq!(queue.iter().collect::<Vec<_>>(), vec!["1", "2", "4", "5"]);
//! ```
//!
//! # Memory Layout
//!
//! Every list keeps its nodes in an arena and links them by index:
//! ```text
//!              ┌──────────────────────────────────────────────────────────┐
//!              ↓                                                          │
//!    ╔═══════════╗          ╔═══════════╗                   ╔═══════════╗ │
//!    ║ next = 1  ║ ───────→ ║ next = 2  ║ ───────→ ┄┄ ────→ ║ next = 0  ║ ┘
//!    ╟───────────╢          ╟───────────╢                   ╟───────────╢
//! ┌─ ║ prev = n  ║ ←─────── ║ prev = 0  ║ ←─────── ┄┄ ←──── ║ prev = .. ║
//! │  ╟───────────╢          ╟───────────╢                   ╟───────────╢
//! │  ┊No element ┊          ║ element   ║                   ║ element   ║
//! │  └╌╌╌╌╌╌╌╌╌╌╌┘          ╚═══════════╝                   ╚═══════════╝
//! │  [0] ghost node         [1]                             [n]     ↑
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The ghost node at index 0 holds no element. Its `next` and `prev` are the
//! first and the last element, or the ghost node itself in an empty list.
//! Removed nodes leave vacant slots that later insertions reuse, so the index of
//! a live node never changes.
//!
//! Each queue owns its own arena. Merging two queues moves the elements of one
//! into the arena of the other, so no two queues ever share a node.
//!
//! # Algorithms
//!
//! - [`Queue::sort`] is a top-down merge sort over the forward links; ties keep
//!   their order.
//! - [`QueueChain::merge`] splits the chain at its middle recursively and merges
//!   the halves pairwise, which costs *O*(*N* log *k*) comparisons for *N*
//!   elements in *k* queues.
//! - [`Queue::ascend`] and [`Queue::descend`] reverse the queue, sweep once, and
//!   reverse it back.
//!
//! Functions in [`handle`] accept absent queue handles for hosts that need
//! them.

#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::List;

pub use chain::{QueueChain, QueueContext};
pub use error::QueueError;
pub use queue::{copy_terminated, Element, Queue};

pub mod handle;
pub mod list;

mod chain;
mod error;
mod queue;
