// Copyright 2025 the Rankwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Bst`] symbol table and its node links.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::{self, Debug};
use core::mem;

use log::trace;
use rankwood_order::{Comparable, Comparison};

use crate::iter::{Iter, Keys, Values};

pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    /// Number of nodes in the subtree rooted here, this one included.
    pub(crate) size: usize,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn leaf(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            size: 1,
            left: None,
            right: None,
        })
    }

    fn resize(&mut self) {
        self.size = 1 + link_size(&self.left) + link_size(&self.right);
    }
}

#[inline]
pub(crate) fn link_size<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.size)
}

/// Unlink the minimum node of the subtree at `link`, splicing its right child into its place.
///
/// Every ancestor on the left spine loses one from its size. The returned node has no children.
fn take_min<K, V>(mut link: &mut Link<K, V>) -> Option<Box<Node<K, V>>> {
    while link.as_ref().is_some_and(|node| node.left.is_some()) {
        let node = link.as_mut()?;
        node.size -= 1;
        link = &mut node.left;
    }
    let mut min = link.take()?;
    *link = min.right.take();
    min.size = 1;
    Some(min)
}

/// Free a subtree without recursing, so degenerate (list-shaped) trees drop in constant stack.
pub(crate) fn drop_subtree<K, V>(root: Link<K, V>) {
    let mut stack: Vec<Box<Node<K, V>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// An ordered symbol table backed by an unbalanced, size-augmented binary search tree.
///
/// Every node records the size of its subtree, which makes [`rank`](Self::rank) and
/// [`nth`](Self::nth) run in time proportional to the tree height.
///
/// The tree is not rebalanced. Random insertion orders give logarithmic expected height;
/// sorted insertion degrades it to a list. All operations are iterative, so a degenerate
/// tree is slow but never exhausts the stack.
pub struct Bst<K, V> {
    root: Link<K, V>,
}

impl<K, V> Bst<K, V> {
    /// Create an empty table.
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        link_size(&self.root)
    }

    /// True if the table stores no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        drop_subtree(self.root.take());
    }

    /// Smallest key, or `None` when empty.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// Largest key, or `None` when empty.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// Remove the entry with the smallest key and return it.
    pub fn remove_min(&mut self) -> Option<(K, V)> {
        let min = take_min(&mut self.root)?;
        let Node { key, value, .. } = *min;
        Some((key, value))
    }

    /// Key at position `index` in sorted order (select).
    ///
    /// Returns `None` when `index >= self.len()`.
    pub fn nth(&self, index: usize) -> Option<&K> {
        if index >= self.len() {
            return None;
        }
        let mut remaining = index;
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            let left = link_size(&node.left);
            match remaining.cmp(&left) {
                Ordering::Equal => return Some(&node.key),
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => {
                    remaining -= left + 1;
                    cur = node.right.as_deref();
                }
            }
        }
        None
    }

    /// In-order iterator over `(key, value)` pairs.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_deref(), self.len())
    }

    /// In-order iterator over keys.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Iterator over values, in key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

impl<K: Comparable, V> Bst<K, V> {
    /// Insert `value` under `key`.
    ///
    /// If the key is already present its value is replaced and the old value returned;
    /// the table size does not change.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(slot) = self.get_mut(&key) {
            return Some(mem::replace(slot, value));
        }
        let mut link = &mut self.root;
        let mut depth = 0_usize;
        while let Some(node) = link {
            node.size += 1;
            depth += 1;
            link = match key.compare(&node.key) {
                Comparison::Ascending => &mut node.left,
                _ => &mut node.right,
            };
        }
        trace!("bst: new leaf at depth {depth}");
        *link = Some(Node::leaf(key, value));
        None
    }

    /// Value stored under `key`.
    pub fn search(&self, key: &K) -> Option<&V> {
        self.find(key).map(|node| &node.value)
    }

    /// Mutable access to the value stored under `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut cur = self.root.as_deref_mut();
        while let Some(node) = cur {
            cur = match key.compare(&node.key) {
                Comparison::Same => return Some(&mut node.value),
                Comparison::Ascending => node.left.as_deref_mut(),
                Comparison::Descending => node.right.as_deref_mut(),
            };
        }
        None
    }

    /// True if `key` is stored.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Remove `key` and return its value (Hibbard deletion).
    ///
    /// A node with two children is replaced by the minimum of its right subtree.
    /// Removing an absent key leaves the table unchanged.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        if !self.contains_key(key) {
            return None;
        }
        let mut link = &mut self.root;
        loop {
            let step = match link.as_deref() {
                Some(node) => key.compare(&node.key),
                None => return None,
            };
            if step.is_same() {
                break;
            }
            // The key is present below, so this subtree shrinks by one.
            let node = link.as_mut()?;
            node.size -= 1;
            link = if step.is_ascending() {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        let mut target = link.take()?;
        *link = match (target.left.take(), target.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut rest = Some(right);
                take_min(&mut rest).map(|mut successor| {
                    trace!("bst: splicing right-subtree minimum into a two-child slot");
                    successor.left = Some(left);
                    successor.right = rest;
                    successor.resize();
                    successor
                })
            }
        };
        let Node { value, .. } = *target;
        Some(value)
    }

    /// Number of stored keys strictly less than `key`.
    ///
    /// `key` need not be present. A key above every stored key ranks `self.len()`.
    pub fn rank(&self, key: &K) -> usize {
        let mut rank = 0;
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.compare(&node.key) {
                Comparison::Same => return rank + link_size(&node.left),
                Comparison::Ascending => cur = node.left.as_deref(),
                Comparison::Descending => {
                    rank += 1 + link_size(&node.left);
                    cur = node.right.as_deref();
                }
            }
        }
        rank
    }

    fn find(&self, key: &K) -> Option<&Node<K, V>> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match key.compare(&node.key) {
                Comparison::Same => return Some(node),
                Comparison::Ascending => node.left.as_deref(),
                Comparison::Descending => node.right.as_deref(),
            };
        }
        None
    }
}

impl<K, V> Drop for Bst<K, V> {
    fn drop(&mut self) {
        drop_subtree(self.root.take());
    }
}

impl<K, V> Default for Bst<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug, V: Debug> Debug for Bst<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Comparable, V> Extend<(K, V)> for Bst<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Comparable, V> FromIterator<(K, V)> for Bst<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bst = Self::new();
        bst.extend(iter);
        bst
    }
}

impl<'a, K, V> IntoIterator for &'a Bst<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
impl<K: Comparable, V> Bst<K, V> {
    /// Check the size and ordering invariants of every node.
    pub(crate) fn assert_invariants(&self) {
        fn walk<'a, K: Comparable, V>(
            link: &'a Link<K, V>,
            lower: Option<&'a K>,
            upper: Option<&'a K>,
        ) -> usize {
            let Some(node) = link.as_deref() else {
                return 0;
            };
            if let Some(lower) = lower {
                assert!(
                    node.key.compare(lower).is_descending(),
                    "key must sort after its left-turn ancestor"
                );
            }
            if let Some(upper) = upper {
                assert!(
                    node.key.compare(upper).is_ascending(),
                    "key must sort before its right-turn ancestor"
                );
            }
            let left = walk(&node.left, lower, Some(&node.key));
            let right = walk(&node.right, Some(&node.key), upper);
            assert_eq!(node.size, 1 + left + right, "size must count the subtree");
            node.size
        }
        walk(&self.root, None, None);
    }
}
