// Copyright 2025 the Rankwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by [`KdTree`](crate::KdTree).

/// Precondition failures of k-d tree operations.
///
/// None of these are retried internally; each fails the call that raised it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum KdTreeError {
    /// Range search was called on a tree with more than two dimensions.
    #[error("range search supports at most two dimensions, tree has {dimensions}")]
    Dimensionality {
        /// Dimensionality the tree was built with.
        dimensions: usize,
    },
    /// The lower query bound is not strictly below the upper bound on `axis`.
    #[error("range bounds on axis {axis} are not strictly increasing")]
    InvalidRange {
        /// First axis on which `low >= high`.
        axis: usize,
    },
    /// A key or query bound has the wrong number of components.
    #[error("expected a key with {expected} components, got {found}")]
    KeyArity {
        /// Dimensionality of the tree.
        expected: usize,
        /// Components in the offending key.
        found: usize,
    },
    /// A tree was requested with zero dimensions.
    #[error("a k-d tree needs at least one dimension")]
    ZeroDimensions,
}
