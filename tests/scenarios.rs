//! End-to-end scenarios against the public operation set

use ordset::{OrdSet, TieBreak};
use test_case::test_case;

fn set_of(values: &[u64]) -> OrdSet<u64> {
    let mut set = OrdSet::new();
    for &value in values {
        set.insert(value).expect("insert succeeds");
    }
    set
}

#[test]
fn ascending_inserts_traverse_in_order() {
    let mut set = OrdSet::new();
    for value in 0..10u64 {
        set.insert(value).expect("insert succeeds");
    }
    assert_eq!(set.to_vec(), (0..10).collect::<Vec<_>>());
}

#[test]
fn descending_then_ascending_inserts_traverse_in_order() {
    let mut set = OrdSet::new();
    for value in (11..=20u64).rev() {
        set.insert(value).expect("insert succeeds");
    }
    for value in 0..10u64 {
        set.insert(value).expect("insert succeeds");
    }

    let expected: Vec<u64> = (0..10).chain(11..=20).collect();
    assert_eq!(set.to_vec(), expected);
    assert!(set.is_valid());
}

#[test]
fn empty_set_answers_absent_everywhere() {
    let set = OrdSet::<u64>::new();
    assert_eq!(set.min(), None);
    assert_eq!(set.max(), None);
    assert_eq!(set.successor(None), None);
    assert_eq!(set.predecessor(None), None);
    assert_eq!(set.min_in_range(0, 100), None);
    assert_eq!(set.max_in_range(0, 100), None);
    assert_eq!(set.closest_match(7), None);
}

#[test_case(4, 3 ; "distance one below beats distance two above")]
#[test_case(5, 6 ; "distance one above beats distance two below")]
#[test_case(3, 3 ; "exact hit returns itself")]
#[test_case(0, 1 ; "below the minimum snaps to the minimum")]
#[test_case(9, 6 ; "above the maximum snaps to the maximum")]
fn closest_match_on_1_3_6(probe: u64, expected: u64) {
    let set = set_of(&[1, 3, 6]);
    assert_eq!(set.closest_match(probe), Some(expected));
}

#[test_case(12, 25, Some(20), Some(20) ; "interior window hits its only member")]
#[test_case(31, 40, None, None ; "window above the maximum is empty")]
#[test_case(10, 30, Some(10), Some(30) ; "full window returns the extrema")]
#[test_case(25, 12, None, None ; "inverted bounds are empty")]
#[test_case(20, 20, Some(20), Some(20) ; "degenerate window on a member")]
#[test_case(21, 29, None, None ; "window between members is empty")]
fn range_queries_on_10_20_30(low: u64, high: u64, min: Option<u64>, max: Option<u64>) {
    let set = set_of(&[10, 20, 30]);
    assert_eq!(set.min_in_range(low, high), min);
    assert_eq!(set.max_in_range(low, high), max);
}

#[test]
fn duplicate_inserts_change_nothing_observable() {
    let mut set = set_of(&[4, 8, 15, 16, 23, 42]);
    let before = set.to_vec();

    for &value in &[8u64, 42, 4] {
        assert_eq!(set.insert(value), Ok(false));
    }

    assert_eq!(set.to_vec(), before);
    assert_eq!(set.len(), before.len());
    assert_eq!(set.min(), Some(4));
    assert_eq!(set.max(), Some(42));
    assert!(set.is_valid());
}

#[test]
fn successor_walk_covers_the_whole_set_once() {
    let set = set_of(&[50, 53, 51, 56, 20, 19, 18, 17, 16, 15]);

    let mut forward = Vec::new();
    let mut cursor = None;
    while let Some(value) = set.successor(cursor) {
        forward.push(value);
        cursor = Some(value);
    }

    let mut backward = Vec::new();
    let mut cursor = None;
    while let Some(value) = set.predecessor(cursor) {
        backward.push(value);
        cursor = Some(value);
    }
    backward.reverse();

    assert_eq!(forward, backward);
    assert_eq!(forward, set.to_vec());
    assert_eq!(forward.first().copied(), set.min());
    assert_eq!(forward.last().copied(), set.max());
}

#[test]
fn tie_break_policies_disagree_only_on_exact_midpoints() {
    let set = set_of(&[10, 20]);
    for probe in 11..20u64 {
        let upper = set.closest_match_with(probe, TieBreak::Upper);
        let lower = set.closest_match_with(probe, TieBreak::Lower);
        if probe == 15 {
            assert_eq!(upper, Some(20));
            assert_eq!(lower, Some(10));
        } else {
            assert_eq!(upper, lower);
        }
    }
}

#[test]
fn works_for_narrower_key_types() {
    let mut set = OrdSet::<u8>::new();
    for value in [200u8, 100, 150] {
        set.insert(value).expect("insert succeeds");
    }
    assert_eq!(set.min_in_range(101, 199), Some(150));
    assert_eq!(set.closest_match(130), Some(150));
    assert_eq!(set.successor(Some(150)), Some(200));
}
