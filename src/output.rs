//! JSON output for query results.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use syncindex_core::error::AppError;

/// Print one query result as pretty JSON on stdout.
pub fn print_item<T: Serialize>(item: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(item)?;
    println!("{json}");
    Ok(())
}

/// Order a map by key so repeated runs print identically.
pub fn sorted<V>(map: HashMap<String, V>) -> BTreeMap<String, V> {
    map.into_iter().collect()
}
