use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Build a comparator over the key extracted by `key`, for use with
/// `sort_by`. Keys are compared with `<` and `>` only, so keys that are
/// neither (such as `NaN`) compare as equal.
pub fn sort_comparator<T, K, F>(key: F, direction: SortDirection) -> impl Fn(&T, &T) -> Ordering
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    move |a: &T, b: &T| {
        let (ka, kb) = (key(a), key(b));
        let ascending = if ka < kb {
            Ordering::Less
        } else if ka > kb {
            Ordering::Greater
        } else {
            Ordering::Equal
        };
        match direction {
            SortDirection::Asc => ascending,
            SortDirection::Desc => ascending.reverse(),
        }
    }
}
