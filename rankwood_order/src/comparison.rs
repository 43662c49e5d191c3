// Copyright 2025 the Rankwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Three-way comparison result and the [`Comparable`] trait.

use core::cmp::Ordering;

/// Outcome of comparing `self` against another key.
///
/// `a.compare(&b)` is [`Ascending`](Self::Ascending) when `a` sorts before `b`
/// and [`Descending`](Self::Descending) when it sorts after.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// `self` sorts before the other key.
    Ascending,
    /// Both keys occupy the same position in the order.
    Same,
    /// `self` sorts after the other key.
    Descending,
}

impl Comparison {
    /// Swap `Ascending` and `Descending`; `Same` is unchanged.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Same => Self::Same,
            Self::Descending => Self::Ascending,
        }
    }

    /// True for [`Comparison::Same`].
    pub const fn is_same(self) -> bool {
        matches!(self, Self::Same)
    }

    /// True for [`Comparison::Ascending`].
    pub const fn is_ascending(self) -> bool {
        matches!(self, Self::Ascending)
    }

    /// True for [`Comparison::Descending`].
    pub const fn is_descending(self) -> bool {
        matches!(self, Self::Descending)
    }

    /// The equivalent [`Ordering`].
    pub const fn to_ordering(self) -> Ordering {
        match self {
            Self::Ascending => Ordering::Less,
            Self::Same => Ordering::Equal,
            Self::Descending => Ordering::Greater,
        }
    }
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Ascending,
            Ordering::Equal => Self::Same,
            Ordering::Greater => Self::Descending,
        }
    }
}

impl From<Comparison> for Ordering {
    fn from(comparison: Comparison) -> Self {
        comparison.to_ordering()
    }
}

/// Keys with a three-way comparison.
///
/// Implementations must form a strict total order: for all `a`, `b`, `c`,
///
/// - exactly one of `Ascending`, `Same`, `Descending` holds for `a.compare(&b)`;
/// - `a.compare(&b) == b.compare(&a).reverse()`;
/// - `Ascending` (and `Same`) are transitive.
///
/// Trees built on this trait silently misplace keys when the contract is broken.
pub trait Comparable<Rhs: ?Sized = Self> {
    /// Compare `self` against `other`.
    fn compare(&self, other: &Rhs) -> Comparison;
}

impl<T: Ord + ?Sized> Comparable for T {
    #[inline]
    fn compare(&self, other: &Self) -> Comparison {
        self.cmp(other).into()
    }
}
