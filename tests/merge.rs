use sort_basics_rs::stable::merge_sort;
use sort_basics_rs::SortError;
use sort_test_tools::patterns;
use sort_test_tools::tests::{Tagged, TEST_SIZES};

#[test]
fn merges_two_runs() {
    let mut v = [1, 4, 9, 2, 3, 10];
    merge_sort::merge(&mut v, 0..=5, 2).unwrap();
    assert_eq!(v, [1, 2, 3, 4, 9, 10]);
}

#[test]
fn merges_inside_range() {
    let mut v = [50, 3, 7, 1, 8, -50];
    merge_sort::merge(&mut v, 1..=4, 2).unwrap();
    assert_eq!(v, [50, 1, 3, 7, 8, -50]);
}

#[test]
fn empty_right_run() {
    let mut v = [1, 2, 3];
    merge_sort::merge(&mut v, 0..=2, 2).unwrap();
    assert_eq!(v, [1, 2, 3]);

    let mut v = [7];
    merge_sort::merge(&mut v, 0..=0, 0).unwrap();
    assert_eq!(v, [7]);
}

#[test]
fn exhausted_left_run() {
    let mut v = [1, 2, 3, 4, 5, 6];
    merge_sort::merge(&mut v, .., 2).unwrap();
    assert_eq!(v, [1, 2, 3, 4, 5, 6]);

    let mut v = [4, 5, 6, 1, 2, 3];
    merge_sort::merge(&mut v, .., 2).unwrap();
    assert_eq!(v, [1, 2, 3, 4, 5, 6]);
}

#[test]
fn left_wins_ties() {
    let mut v = [1, 2, 1, 2]
        .into_iter()
        .enumerate()
        .map(|(origin, key)| Tagged { key, origin })
        .collect::<Vec<_>>();

    merge_sort::merge(&mut v, .., 1).unwrap();

    let order = v.iter().map(|elem| elem.origin).collect::<Vec<_>>();
    assert_eq!(order, [0, 2, 1, 3]);
}

#[test]
fn merges_sorted_halves_of_patterns() {
    for len in TEST_SIZES.into_iter().filter(|len| *len > 0) {
        let mut v = patterns::random(len);
        let mid = (len - 1) / 2;
        v[..=mid].sort();
        v[mid + 1..].sort();

        let mut expected = v.clone();
        expected.sort();

        merge_sort::merge(&mut v, .., mid).unwrap();
        assert_eq!(v, expected);
    }
}

#[test]
fn merge_owned_values() {
    let mut v = ["b", "d", "f", "a", "c", "e"]
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();

    merge_sort::merge(&mut v, .., 2).unwrap();
    assert_eq!(v, ["a", "b", "c", "d", "e", "f"]);
}

#[test]
fn midpoint_outside_range() {
    let mut v = [1, 3, 2, 4];

    assert_eq!(
        merge_sort::merge(&mut v, 1..=2, 3),
        Err(SortError::InvalidMidpoint {
            mid: 3,
            start: 1,
            end: 3
        })
    );
    assert_eq!(
        merge_sort::merge(&mut v, 1..=2, 0),
        Err(SortError::InvalidMidpoint {
            mid: 0,
            start: 1,
            end: 3
        })
    );
    assert_eq!(v, [1, 3, 2, 4]);
}

#[test]
fn out_of_bounds_merge() {
    let mut v = [1, 2];
    assert_eq!(
        merge_sort::merge(&mut v, 0..=2, 1),
        Err(SortError::InvalidRange {
            start: 0,
            end: 3,
            len: 2
        })
    );
}

#[test]
fn empty_merge_is_a_no_op() {
    let mut v: [i32; 0] = [];
    merge_sort::merge(&mut v, .., 0).unwrap();
    merge_sort::merge(&mut v, 0..0, 5).unwrap();
}

#[test]
fn panicking_merge_leaves_input() {
    use std::panic::{self, AssertUnwindSafe};

    use sort_test_tools::tests::{limit_comparisons, PanicOnCompare};

    let values = [1, 4, 9, 12, 2, 3, 10, 11];
    let mut v = values
        .iter()
        .map(|val| PanicOnCompare(Box::new(*val)))
        .collect::<Vec<_>>();

    limit_comparisons(Some(3));
    let result = panic::catch_unwind(AssertUnwindSafe(|| merge_sort::merge(&mut v, .., 3)));
    limit_comparisons(None);

    assert!(result.is_err());
    let after = v.iter().map(|elem| *elem.0).collect::<Vec<_>>();
    assert_eq!(after, values);
}
