// Copyright 2025 the Rankwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`KdTree`] container.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Debug};
use core::mem;

use log::{debug, trace};
use rankwood_order::Comparable;

use crate::error::KdTreeError;

type Link<K, V> = Option<Box<Node<K, V>>>;

struct Node<K, V> {
    /// Exactly `dimensions` components.
    key: Box<[K]>,
    value: V,
    size: usize,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn leaf(key: Box<[K]>, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            size: 1,
            left: None,
            right: None,
        })
    }
}

fn link_size<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.size)
}

/// Component-wise equality on every axis.
fn same_point<K: Comparable>(a: &[K], b: &[K]) -> bool {
    a.iter().zip(b).all(|(x, y)| x.compare(y).is_same())
}

/// `low < value < high`, both bounds exclusive.
fn strictly_between<K: Comparable>(low: &K, high: &K, value: &K) -> bool {
    value.compare(low).is_descending() && value.compare(high).is_ascending()
}

/// A binary space-partitioning tree over keys of `D` components.
///
/// The node at depth `n` splits its subtree on axis `n % D`: keys whose component on that axis
/// sorts before the node's go left, all others go right. Each node also records the size of
/// its subtree.
///
/// Keys are boxed slices (arrays and vectors convert via [`Into`]) whose length must equal the
/// dimensionality chosen at construction. Inserting a key equal on every axis to a stored key
/// overwrites its value.
///
/// Range search is defined for trees of one or two dimensions; see
/// [`range_search_2d`](Self::range_search_2d). There is no deletion and no rebalancing.
pub struct KdTree<K, V> {
    dimensions: usize,
    root: Link<K, V>,
}

impl<K, V> KdTree<K, V> {
    /// Create an empty tree whose keys have `dimensions` components.
    ///
    /// Fails with [`KdTreeError::ZeroDimensions`] when `dimensions` is zero.
    pub fn new(dimensions: usize) -> Result<Self, KdTreeError> {
        if dimensions == 0 {
            return Err(KdTreeError::ZeroDimensions);
        }
        Ok(Self {
            dimensions,
            root: None,
        })
    }

    /// Number of components per key.
    pub const fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        link_size(&self.root)
    }

    /// True if no points are stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Remove every point, keeping the dimensionality.
    pub fn clear(&mut self) {
        drop_subtree(self.root.take());
    }

    /// Iterate over every `(key, value)` pair in unspecified order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            stack: self.root.as_deref().into_iter().collect(),
            remaining: self.len(),
        }
    }

    fn check_arity(&self, key: &[K]) -> Result<(), KdTreeError> {
        if key.len() == self.dimensions {
            Ok(())
        } else {
            Err(KdTreeError::KeyArity {
                expected: self.dimensions,
                found: key.len(),
            })
        }
    }
}

impl<K: Comparable, V> KdTree<K, V> {
    /// Insert `value` at `key`.
    ///
    /// Returns the previous value when a stored key is equal on every axis; the tree size is
    /// then unchanged. Fails with [`KdTreeError::KeyArity`] when `key` does not have
    /// [`dimensions`](Self::dimensions) components.
    pub fn insert(
        &mut self,
        key: impl Into<Box<[K]>>,
        value: V,
    ) -> Result<Option<V>, KdTreeError> {
        let key = key.into();
        self.check_arity(&key)?;
        if let Some(slot) = self.get_mut(&key) {
            return Ok(Some(mem::replace(slot, value)));
        }
        let dimensions = self.dimensions;
        let mut link = &mut self.root;
        let mut depth = 0_usize;
        while let Some(node) = link {
            node.size += 1;
            let axis = depth % dimensions;
            link = if key[axis].compare(&node.key[axis]).is_ascending() {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }
        trace!("kdtree: new leaf at depth {depth}");
        *link = Some(Node::leaf(key, value));
        Ok(None)
    }

    /// Value stored at exactly `key`, or `None`.
    pub fn get(&self, key: &[K]) -> Option<&V> {
        if key.len() != self.dimensions {
            return None;
        }
        let mut cur = self.root.as_deref();
        let mut depth = 0_usize;
        while let Some(node) = cur {
            if same_point(&node.key, key) {
                return Some(&node.value);
            }
            let axis = depth % self.dimensions;
            cur = if key[axis].compare(&node.key[axis]).is_ascending() {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
            depth += 1;
        }
        None
    }

    /// Mutable access to the value stored at exactly `key`.
    pub fn get_mut(&mut self, key: &[K]) -> Option<&mut V> {
        if key.len() != self.dimensions {
            return None;
        }
        let dimensions = self.dimensions;
        let mut cur = self.root.as_deref_mut();
        let mut depth = 0_usize;
        while let Some(node) = cur {
            if same_point(&node.key, key) {
                return Some(&mut node.value);
            }
            let axis = depth % dimensions;
            cur = if key[axis].compare(&node.key[axis]).is_ascending() {
                node.left.as_deref_mut()
            } else {
                node.right.as_deref_mut()
            };
            depth += 1;
        }
        None
    }

    /// Values of every point strictly inside the open box `(low, high)`.
    ///
    /// A point matches when, on every axis, its component is strictly greater than `low` and
    /// strictly less than `high`; points on a boundary are excluded. Result order is
    /// unspecified.
    ///
    /// # Errors
    ///
    /// - [`KdTreeError::Dimensionality`] if the tree has more than two dimensions.
    /// - [`KdTreeError::KeyArity`] if `low` or `high` has the wrong number of components.
    /// - [`KdTreeError::InvalidRange`] if `low` is not strictly below `high` on some axis.
    pub fn range_search_2d(&self, low: &[K], high: &[K]) -> Result<Vec<&V>, KdTreeError> {
        if self.dimensions > 2 {
            debug!(
                "kdtree: range search rejected on a {}-dimensional tree",
                self.dimensions
            );
            return Err(KdTreeError::Dimensionality {
                dimensions: self.dimensions,
            });
        }
        self.check_arity(low)?;
        self.check_arity(high)?;
        if let Some(axis) =
            (0..self.dimensions).find(|&axis| !low[axis].compare(&high[axis]).is_ascending())
        {
            debug!("kdtree: range search rejected, bounds on axis {axis} are not increasing");
            return Err(KdTreeError::InvalidRange { axis });
        }

        let mut out = Vec::new();
        let Some(root) = self.root.as_deref() else {
            return Ok(out);
        };
        let mut stack = vec![(root, 0_usize)];
        while let Some((node, depth)) = stack.pop() {
            let inside = (0..self.dimensions)
                .all(|axis| strictly_between(&low[axis], &high[axis], &node.key[axis]));
            if inside {
                out.push(&node.value);
            }

            let axis = depth % self.dimensions;
            let split = &node.key[axis];
            let (visit_left, visit_right) = if strictly_between(&low[axis], &high[axis], split) {
                (true, true)
            } else if split.compare(&low[axis]).is_descending() {
                // The splitter sits at or above `high`; only the left side can still match.
                (true, false)
            } else {
                (false, true)
            };
            if visit_right && let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1));
            }
            if visit_left && let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1));
            }
        }
        Ok(out)
    }
}

/// Free a subtree without recursing.
fn drop_subtree<K, V>(root: Link<K, V>) {
    let mut stack: Vec<Box<Node<K, V>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

impl<K, V> Drop for KdTree<K, V> {
    fn drop(&mut self) {
        drop_subtree(self.root.take());
    }
}

impl<K, V> Debug for KdTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KdTree")
            .field("dimensions", &self.dimensions)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl<'a, K, V> IntoIterator for &'a KdTree<K, V> {
    type Item = (&'a [K], &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator over a [`KdTree`], created by [`KdTree::iter`].
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a [K], &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.remaining -= 1;
        Some((&*node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
impl<K: Comparable, V> KdTree<K, V> {
    /// Check the size and partitioning invariants of every node.
    pub(crate) fn assert_invariants(&self) {
        fn walk<K: Comparable, V>(link: &Link<K, V>, depth: usize, dimensions: usize) -> usize {
            let Some(node) = link.as_deref() else {
                return 0;
            };
            assert_eq!(node.key.len(), dimensions, "stored key arity");
            let axis = depth % dimensions;
            let mut pending: Vec<(&Node<K, V>, bool)> = Vec::new();
            pending.extend(node.left.as_deref().map(|n| (n, true)));
            pending.extend(node.right.as_deref().map(|n| (n, false)));
            while let Some((below, on_left)) = pending.pop() {
                let c = below.key[axis].compare(&node.key[axis]);
                if on_left {
                    assert!(c.is_ascending(), "left subtree must sort below on axis {axis}");
                } else {
                    assert!(!c.is_ascending(), "right subtree must not sort below on axis {axis}");
                }
                pending.extend(below.left.as_deref().map(|n| (n, on_left)));
                pending.extend(below.right.as_deref().map(|n| (n, on_left)));
            }
            let left = walk(&node.left, depth + 1, dimensions);
            let right = walk(&node.right, depth + 1, dimensions);
            assert_eq!(node.size, 1 + left + right, "size must count the subtree");
            node.size
        }
        walk(&self.root, 0, self.dimensions);
    }
}
