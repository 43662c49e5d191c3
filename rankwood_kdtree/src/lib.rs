// Copyright 2025 the Rankwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rankwood k-d tree: a spatial partition tree with orthogonal range search.
//!
//! [`KdTree`] stores points whose keys have a fixed number of components `D`, chosen at
//! construction. Each level of the tree splits on the next axis in turn (`depth % D`), and
//! every node tracks the size of its subtree.
//!
//! - Insert points with [`KdTree::insert`]; a point equal on every axis to a stored one
//!   overwrites its value.
//! - Look up an exact point with [`KdTree::get`].
//! - Collect every point strictly inside an axis-aligned box with
//!   [`KdTree::range_search_2d`]. Bounds are exclusive, and the query is only defined for
//!   trees of at most two dimensions.
//!
//! Keys only need [`Comparable`](rankwood_order::Comparable) components, so integer
//! coordinates work as well as [`NumericKey`](rankwood_order::NumericKey).
//!
//! # Example
//!
//! ```rust
//! use rankwood_kdtree::{KdTree, KdTreeError};
//! use rankwood_order::{NumericKey, point};
//!
//! let mut tree: KdTree<NumericKey, i32> = KdTree::new(2)?;
//! tree.insert(point(0.25, 0.25), 1)?;
//! tree.insert(point(0.5, 0.5), 2)?;
//! tree.insert(point(0.25, 0.75), 4)?;
//!
//! let mut hits: Vec<_> = tree
//!     .range_search_2d(&point(0.1, 0.1), &point(0.6, 0.9))?
//!     .into_iter()
//!     .copied()
//!     .collect();
//! hits.sort();
//! assert_eq!(hits, [1, 2, 4]);
//!
//! // The lower corner must sit strictly below the upper one.
//! assert_eq!(
//!     tree.range_search_2d(&point(0.6, 0.1), &point(0.5, 0.9)),
//!     Err(KdTreeError::InvalidRange { axis: 0 }),
//! );
//! # Ok::<(), KdTreeError>(())
//! ```
//!
//! ## Limits
//!
//! The tree is never rebalanced and has no deletion. Sorted insertion produces a deep tree;
//! all traversals are iterative, so that costs time but not stack.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod error;
pub mod tree;

#[cfg(test)]
mod proptests;

pub use error::KdTreeError;
pub use tree::{Iter, KdTree};
