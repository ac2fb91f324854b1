//! Registering delimiters for a user container and overriding them per call.
//!
//! Run with: cargo run --example custom_delimiters

use pprint::{
    custom_delimiters, delimiters, to_string, with_delimiters, DelimiterConfig, DelimiterSet,
    Delimited, Registered, Render,
};
use std::error::Error;

struct Path {
    hops: Vec<&'static str>,
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a &'static str;
    type IntoIter = std::slice::Iter<'a, &'static str>;

    fn into_iter(self) -> Self::IntoIter {
        self.hops.iter()
    }
}

impl Delimited for Path {
    const DELIMITERS: DelimiterSet = delimiters!("/", "/", _);
}

impl Render for Path {
    type Kind = Registered;
}

fn main() -> Result<(), Box<dyn Error>> {
    let path = Path {
        hops: vec!["usr", "local", "bin"],
    };
    println!("Registered: {}", to_string(&path)?);
    println!("Nested: {}", to_string(&vec![(1, path)])?);

    let values = vec![1, 2, 3];

    // Builder style
    let piped = DelimiterSet::new()
        .with_prefix("|")
        .with_separator("|")
        .with_suffix("|");
    println!("Builder: {}", to_string(&with_delimiters(&values, piped))?);

    // Borrow another type's registry entry
    let as_path = custom_delimiters::<Path, _>(&values);
    println!("Borrowed: {}", to_string(&as_path)?);

    // Loaded from configuration
    let config: DelimiterConfig = serde_json::from_str(r#"{"separator": " "}"#)?;
    let spaced = with_delimiters(&values, DelimiterSet::from(config));
    println!("Configured: {}", to_string(&spaced)?);

    println!("Default still applies: {}", to_string(&values)?);

    Ok(())
}
