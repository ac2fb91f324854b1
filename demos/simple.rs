//! Rendering standard containers, tuples and arrays.
//!
//! Run with: cargo run --example simple

use pprint::{classify, pretty, to_string, to_wide};
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let scores = vec![(1, "alice"), (2, "bob")];
    println!("Sequence of pairs: {}", to_string(&scores)?);

    let primes: BTreeSet<u32> = [7, 2, 5, 3].into_iter().collect();
    println!("Set: {}", pretty(&primes));

    let mut inventory = BTreeMap::new();
    inventory.insert("apples", vec![3, 4]);
    inventory.insert("pears", vec![]);
    println!("Map: {}", pretty(&inventory));

    let matrix = [[1, 0], [0, 1]];
    println!("Fixed array: {}", pretty(&matrix));

    let label = ['o', 'k', '\0', '\0'];
    println!("Character buffer: {}", pretty(&label));

    // Wide output uses the UTF-16 delimiter entries
    let wide = to_wide(&(primes, "done"))?;
    println!("Wide: {}", String::from_utf16(&wide)?);

    println!(
        "Categories: {:?} {:?} {:?}",
        classify::<Vec<i32>>(),
        classify::<(u8, u8)>(),
        classify::<[char; 4]>()
    );

    Ok(())
}
