// Copyright 2025 the Rankwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Symbol table basics.
//!
//! Build a small [`Bst`], walk it in order, and exercise rank, select, and deletion.
//!
//! Run:
//! - `cargo run -p rankwood_demos --example symbol_table_basics`
//! - `RUST_LOG=trace cargo run -p rankwood_demos --example symbol_table_basics`

use log::info;
use rankwood_bst::Bst;
use rankwood_order::{NumericKey, key};

fn print_table(label: &str, table: &Bst<NumericKey, &str>) {
    println!("== {label} ({} keys) ==", table.len());
    for (position, (k, v)) in table.iter().enumerate() {
        println!("  #{position}: {} => {v}", k.value());
    }
}

fn main() {
    env_logger::init();

    let mut table: Bst<NumericKey, &str> = [
        (8.0, "eight"),
        (4.0, "four"),
        (15.0, "fifteen"),
        (1.0, "one"),
        (5.0, "five"),
        (11.0, "eleven"),
        (28.0, "twenty-eight"),
        (7.0, "seven"),
        (12.0, "twelve"),
    ]
    .into_iter()
    .map(|(k, v)| (key(k), v))
    .collect();
    print_table("initial", &table);

    if let Some(previous) = table.insert(key(5.0), "FIVE") {
        info!("overwrote {previous:?} at key 5");
    }

    for probe in [0.0, 7.0, 9.5, 40.0] {
        println!("rank({probe}) = {}", table.rank(&key(probe)));
    }
    for index in [0, 4, 8, 9] {
        match table.nth(index) {
            Some(k) => println!("nth({index}) = {}", k.value()),
            None => println!("nth({index}) is out of range"),
        }
    }
    if let (Some(min), Some(max)) = (table.min(), table.max()) {
        println!("min = {}, max = {}", min.value(), max.value());
    }

    // 8 has two children, so its successor 11 takes its place.
    let removed = table.remove(&key(8.0));
    println!("remove(8) = {removed:?}");
    if let Some((k, v)) = table.remove_min() {
        println!("remove_min() = ({}, {v})", k.value());
    }
    print_table("after deletions", &table);
}
