// Copyright 2025 the Rankwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rankwood Order: the comparison contract shared by the rankwood trees.
//!
//! Every tree in this workspace is generic over a key type that implements
//! [`Comparable`]: a three-way comparison yielding a [`Comparison`].
//! The contract is a strict total order (antisymmetric, transitive, total); the
//! trees assume it and never check it.
//!
//! - Any `T: Ord` is [`Comparable`] through a blanket implementation, so integers,
//!   strings, and tuples work as keys directly.
//! - [`NumericKey`] wraps an `f64` for callers that key by real numbers.
//!   Use [`key`] and [`point`] as shorthand.
//!
//! # Example
//!
//! ```rust
//! use rankwood_order::{Comparable, Comparison, key};
//!
//! assert_eq!(key(1.0).compare(&key(2.0)), Comparison::Ascending);
//! assert_eq!(key(2.0).compare(&key(2.0)), Comparison::Same);
//! assert_eq!(3_u32.compare(&1), Comparison::Descending);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod comparison;
pub mod numeric;

pub use comparison::{Comparable, Comparison};
pub use numeric::{NumericKey, key, point};
