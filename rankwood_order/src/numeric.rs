// Copyright 2025 the Rankwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Real-valued keys.

use core::cmp::Ordering;

/// A key ordered by its `f64` value.
///
/// Equal values compare `Same`, including `-0.0` against `0.0`.
/// NaN payloads are placed by [`f64::total_cmp`]: a positive NaN sorts above every
/// number and a negative NaN below, so the order stays total.
///
/// `NumericKey` implements [`Ord`], and therefore [`Comparable`](crate::Comparable)
/// through the blanket implementation.
#[derive(Copy, Clone, Debug, Default)]
pub struct NumericKey(f64);

impl NumericKey {
    /// Wrap `value` as a key.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// The wrapped value.
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Ord for NumericKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .partial_cmp(&other.0)
            .unwrap_or_else(|| self.0.total_cmp(&other.0))
    }
}

impl PartialOrd for NumericKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NumericKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NumericKey {}

impl From<f64> for NumericKey {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<f32> for NumericKey {
    fn from(value: f32) -> Self {
        Self(f64::from(value))
    }
}

impl From<i32> for NumericKey {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl From<u32> for NumericKey {
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl From<NumericKey> for f64 {
    fn from(key: NumericKey) -> Self {
        key.0
    }
}

/// Shorthand for [`NumericKey::new`].
pub const fn key(value: f64) -> NumericKey {
    NumericKey::new(value)
}

/// A two-component key `[x, y]` for the spatial tree.
pub const fn point(x: f64, y: f64) -> [NumericKey; 2] {
    [NumericKey::new(x), NumericKey::new(y)]
}
