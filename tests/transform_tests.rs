//! filter / select / skip / take / distinct / reverse / cast

mod common;

use common::{scrambled, staff};
use enumerable_operators::Sequence;

#[test]
fn test_filter_preserves_order() {
    let seq = Sequence::from(vec![5, 2, 8, 1, 6]);
    let evens = seq.filter(|x| x % 2 == 0);
    assert_eq!(evens.to_vec(), vec![2, 8, 6]);

    // Receiver untouched.
    assert_eq!(seq.to_vec(), vec![5, 2, 8, 1, 6]);
}

#[test]
fn test_filter_result_satisfies_predicate() {
    let seq = Sequence::from(scrambled(200, 7));
    let pred = |x: &i64| *x >= 50;
    assert!(seq.filter(pred).all(pred));
    assert!(Sequence::<i64>::empty().filter(pred).all(pred));
}

#[test]
fn test_select_changes_element_type() {
    let names = staff().select(|e| e.name.clone());
    assert_eq!(names.to_vec(), vec!["carol", "alice", "dave", "bob", "erin"]);
    assert_eq!(names.count(), staff().count());
}

#[test]
fn test_skip_bounds() {
    let seq = Sequence::range(0, 5);
    assert_eq!(seq.skip(0).to_vec(), vec![0, 1, 2, 3, 4]);
    assert_eq!(seq.skip(2).to_vec(), vec![2, 3, 4]);
    assert!(seq.skip(5).is_empty());
    assert!(seq.skip(50).is_empty());

    for n in 0..8 {
        assert_eq!(seq.skip(n).count() + n.min(seq.count()), seq.count());
    }
}

#[test]
fn test_take_bounds() {
    let seq = Sequence::range(0, 5);
    assert!(seq.take(0).is_empty());
    assert_eq!(seq.take(2).to_vec(), vec![0, 1]);
    assert_eq!(seq.take(50).to_vec(), seq.to_vec());

    for n in 0..8 {
        assert_eq!(seq.take(n).count(), n.min(seq.count()));
    }
}

#[test]
fn test_skip_take_paging() {
    let seq = Sequence::range(1, 10);
    let page = seq.skip(3).take(3);
    assert_eq!(page.to_vec(), vec![4, 5, 6]);
}

#[test]
fn test_distinct_keeps_first_seen_order() {
    let seq = Sequence::from(vec!["b", "a", "b", "c", "a"]);
    assert_eq!(seq.distinct().to_vec(), vec!["b", "a", "c"]);
}

#[test]
fn test_distinct_is_idempotent() {
    let seq = Sequence::from(scrambled(300, 42));
    let once = seq.distinct();
    assert_eq!(once.distinct(), once);
    assert!(once.count() <= 100);
}

#[test]
fn test_reverse_round_trip() {
    let seq = Sequence::from(scrambled(20, 3));
    assert_eq!(seq.reverse().reverse().to_vec(), seq.to_vec());
    assert_eq!(Sequence::range(1, 3).reverse().to_vec(), vec![3, 2, 1]);
}

#[test]
fn test_cast_with_function() {
    let seq = Sequence::range(1, 3);
    let labels = seq.cast(|x| format!("#{x}"));
    assert_eq!(labels.to_vec(), vec!["#1", "#2", "#3"]);
}

#[test]
fn test_cast_into_widens() {
    let seq = Sequence::from(vec![1u8, 200, 255]);
    let wide: Sequence<u32> = seq.cast_into();
    assert_eq!(wide.sum(|x| *x), 456);
}

#[test]
fn test_non_sort_operators_drop_chain() {
    let sorted = Sequence::from(vec![3, 1, 2]).order_by(|x| *x);
    assert!(sorted.is_ordered());
    assert!(!sorted.filter(|_| true).is_ordered());
    assert!(!sorted.skip(1).is_ordered());
    assert!(!sorted.reverse().is_ordered());
}
