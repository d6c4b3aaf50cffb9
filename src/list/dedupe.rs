use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// One distinct value and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collapsed<T> {
    pub item: T,
    pub count: usize,
}

/// Remove repeated values, keeping the first occurrence of each.
pub fn deduplicate<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// [`deduplicate`] with a custom equality. Works for `f64` and other types
/// that are only `PartialEq`; quadratic in the list length.
///
/// ```
/// use format_utils::list::deduplicate_by;
/// assert_eq!(deduplicate_by(&[1.5, 2.0, 1.5], |a, b| a == b), vec![1.5, 2.0]);
/// ```
pub fn deduplicate_by<T, F>(list: &[T], eq: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut kept: Vec<T> = Vec::new();
    for item in list {
        if !kept.iter().any(|k| eq(k, item)) {
            kept.push(item.clone());
        }
    }
    kept
}

/// Each value that occurs more than once, reported once, in order of first
/// occurrence. `[1, 2, 2, 3, 4, 4, 4]` gives `[2, 4]`.
pub fn find_duplicates<T: PartialEq + Clone>(list: &[T]) -> Vec<T> {
    find_duplicates_by(list, |a, b| a == b)
}

/// [`find_duplicates`] with a custom equality.
pub fn find_duplicates_by<T, F>(list: &[T], eq: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut dupes: Vec<T> = Vec::new();
    for (i, first) in list.iter().enumerate() {
        let repeated = list[i + 1..].iter().any(|later| eq(first, later));
        if repeated && !dupes.iter().any(|d| eq(d, first)) {
            dupes.push(first.clone());
        }
    }
    dupes
}

/// Group equal values, keeping the first occurrence as the representative.
/// `[2, 2, 2, 1, 3, 3]` gives `2 x3, 1 x1, 3 x2`.
pub fn collapse_duplicates<T: PartialEq + Clone>(list: &[T]) -> Vec<Collapsed<T>> {
    collapse_duplicates_by(list, |a, b| a == b)
}

/// [`collapse_duplicates`] with a custom equality.
pub fn collapse_duplicates_by<T, F>(list: &[T], eq: F) -> Vec<Collapsed<T>>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut groups: Vec<Collapsed<T>> = Vec::new();
    for item in list {
        match groups.iter().position(|g| eq(&g.item, item)) {
            Some(i) => groups[i].count += 1,
            None => groups.push(Collapsed { item: item.clone(), count: 1 }),
        }
    }
    groups
}
