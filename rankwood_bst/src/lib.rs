// Copyright 2025 the Rankwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rankwood BST: an ordered symbol table with rank and select.
//!
//! [`Bst`] is a binary search tree where every node records the size of its subtree.
//! The size augmentation turns two order-statistic queries into a single root-to-leaf walk:
//!
//! - [`Bst::rank`]: how many stored keys sort strictly before a given key (present or not).
//! - [`Bst::nth`]: the key at a given position in sorted order.
//!
//! Alongside these it offers the usual symbol-table surface: insert (overwriting duplicates),
//! search, min/max, remove-min, and Hibbard deletion through [`Bst::remove`].
//!
//! Keys only need [`Comparable`](rankwood_order::Comparable), which every `Ord` type gets for free.
//!
//! # Example
//!
//! ```rust
//! use rankwood_bst::Bst;
//! use rankwood_order::key;
//!
//! let mut table = Bst::new();
//! for k in [8, 4, 15, 1, 5, 11, 28, 7, 12] {
//!     table.insert(key(f64::from(k)), k);
//! }
//!
//! assert_eq!(table.len(), 9);
//! assert_eq!(table.nth(4), Some(&key(8.0)));
//! assert_eq!(table.rank(&key(11.0)), 5);
//! assert_eq!(table.remove(&key(8.0)), Some(8));
//! assert_eq!(table.nth(4), Some(&key(11.0)));
//! ```
//!
//! ## Balance
//!
//! No rebalancing is performed. Inserting keys in sorted order builds a list-shaped tree and
//! every operation becomes linear. All traversals are iterative, so this costs time, not stack.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod iter;
pub mod tree;

#[cfg(test)]
mod proptests;

pub use iter::{Iter, Keys, Values};
pub use tree::Bst;
