//! Grouping of consecutive rows that share a key.

/// Split `items` into runs of consecutive items with equal keys.
///
/// Only adjacent items are merged, so callers must feed rows whose order
/// already clusters equal keys together: the query's `ORDER BY` has to start
/// with the grouping key. A key that reappears after a different key opens a
/// new group. Groups are never empty and keep the input order.
pub fn group_consecutive<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Vec<(K, Vec<T>)>
where
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();

    for item in items {
        let item_key = key(&item);
        match groups.last_mut() {
            Some((current, members)) if *current == item_key => members.push(item),
            _ => groups.push((item_key, vec![item])),
        }
    }

    groups
}
