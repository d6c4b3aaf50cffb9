use format_utils::list::{
    collapse_duplicates, collapse_duplicates_by, deduplicate, deduplicate_by, find_duplicates,
    find_duplicates_by, sort_comparator, Collapsed, SortDirection,
};

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: String,
}

fn people(names: &[&str]) -> Vec<Person> {
    names
        .iter()
        .map(|n| Person { name: n.to_string() })
        .collect()
}

fn same_name(a: &Person, b: &Person) -> bool {
    a.name.to_lowercase() == b.name.to_lowercase()
}

#[test]
fn deduplicate_preserves_first_occurrence_order() {
    assert_eq!(deduplicate([1, 2, 2, 3, 3, 3, 4, 4, 4, 4]), vec![1, 2, 3, 4]);
    assert_eq!(deduplicate(["b", "a", "b", "c", "a"]), vec!["b", "a", "c"]);
    assert_eq!(deduplicate(Vec::<u8>::new()), Vec::<u8>::new());
}

#[test]
fn sort_comparator_defaults_to_ascending() {
    let mut list = people(&["Adam", "Charlie", "Brian"]);
    list.sort_by(sort_comparator(|p: &Person| p.name.clone(), SortDirection::default()));
    assert_eq!(list, people(&["Adam", "Brian", "Charlie"]));
}

#[test]
fn sort_comparator_explicit_directions() {
    let mut list = people(&["Adam", "Charlie", "Brian"]);
    list.sort_by(sort_comparator(|p: &Person| p.name.clone(), SortDirection::Asc));
    assert_eq!(list, people(&["Adam", "Brian", "Charlie"]));

    list.sort_by(sort_comparator(|p: &Person| p.name.clone(), SortDirection::Desc));
    assert_eq!(list, people(&["Charlie", "Brian", "Adam"]));
}

#[test]
fn sort_comparator_treats_incomparable_keys_as_equal() {
    let cmp = sort_comparator(|x: &f64| *x, SortDirection::Asc);
    assert_eq!(cmp(&f64::NAN, &1.0), std::cmp::Ordering::Equal);
    assert_eq!(cmp(&0.5, &1.0), std::cmp::Ordering::Less);
}

#[test]
fn find_duplicates_reports_each_once() {
    assert_eq!(find_duplicates(&[1, 2, 2, 3, 4, 4, 4]), vec![2, 4]);
    assert_eq!(
        find_duplicates(&[Some(1), Some(2), Some(2), None, None]),
        vec![Some(2), None]
    );
    assert!(find_duplicates(&[1, 2, 3]).is_empty());
}

#[test]
fn find_duplicates_custom_equality() {
    let list = people(&["Dave", "davE", "Brian"]);
    assert_eq!(find_duplicates_by(&list, same_name), people(&["Dave"]));
}

#[test]
fn collapse_duplicates_counts_in_first_occurrence_order() {
    assert_eq!(
        collapse_duplicates(&[2, 2, 2, 1, 3, 3]),
        vec![
            Collapsed { item: 2, count: 3 },
            Collapsed { item: 1, count: 1 },
            Collapsed { item: 3, count: 2 },
        ]
    );
}

#[test]
fn collapse_duplicates_custom_equality() {
    let list = people(&["Dave", "davE", "Brian"]);
    let collapsed = collapse_duplicates_by(&list, same_name);
    assert_eq!(
        collapsed,
        vec![
            Collapsed { item: Person { name: "Dave".into() }, count: 2 },
            Collapsed { item: Person { name: "Brian".into() }, count: 1 },
        ]
    );
}

#[test]
fn invariant_collapsed_counts_sum_to_length() {
    let list = [5, 1, 5, 5, 2, 1, 9];
    let total: usize = collapse_duplicates(&list).iter().map(|c| c.count).sum();
    assert_eq!(total, list.len());
}

#[test]
fn deduplicate_by_handles_partial_eq_types() {
    let numbers = [1.5, 2.0, 1.5, f64::NAN, 3.25, 2.0];
    let kept = deduplicate_by(&numbers, |a, b| a == b);
    assert_eq!(kept.len(), 4);
    assert_eq!(&kept[..2], &[1.5, 2.0]);
    assert!(kept[2].is_nan());
    assert_eq!(kept[3], 3.25);

    let list = people(&["Adam", "adam", "Brian", "ADAM"]);
    assert_eq!(deduplicate_by(&list, same_name), people(&["Adam", "Brian"]));
    assert!(deduplicate_by(&Vec::<f64>::new(), |a, b| a == b).is_empty());
}

#[test]
fn deduplicate_by_works_for_values() {
    use format_utils::object::{deep_equal, Value};
    use serde_json::json;

    let values = [
        Value::from(json!({ "a": 1 })),
        Value::from(json!([1, 2])),
        Value::from(json!({ "a": 1 })),
        Value::from(json!({ "0": 1, "1": 2 })),
    ];
    let kept = deduplicate_by(&values, |a, b| deep_equal(a, b));
    assert_eq!(kept, values[..2].to_vec());
}
