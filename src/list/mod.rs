pub mod dedupe;
pub mod sorting;

pub use dedupe::{
    collapse_duplicates, collapse_duplicates_by, deduplicate, deduplicate_by, find_duplicates,
    find_duplicates_by, Collapsed,
};
pub use sorting::{sort_comparator, SortDirection};
