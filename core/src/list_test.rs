//! Tests for ArrayList

use super::*;
use crate::Error;
use crate::options::GrowthPolicy;
use pretty_assertions::assert_eq;

fn collect<T: Clone>(list: &ArrayList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

// ============================================================================
// Push / Get
// ============================================================================

#[test]
fn test_push_preserves_order() {
    let mut list = ArrayList::new();
    for i in 0..25 {
        list.push(i * 3);
    }
    for i in 0..25 {
        assert_eq!(list.get(i), Ok(&(i * 3)));
    }
    assert_eq!(list.len(), 25);
}

#[test]
fn test_get_out_of_range() {
    let mut list = ArrayList::new();
    assert_eq!(list.get(0), Err(Error::OutOfRange { index: 0, len: 0 }));
    list.push('x');
    assert_eq!(list.get(1), Err(Error::OutOfRange { index: 1, len: 1 }));
    assert_eq!(list.get(usize::MAX), Err(Error::OutOfRange { index: usize::MAX, len: 1 }));
}

#[test]
fn test_get_mut_updates_in_place() {
    let mut list: ArrayList<String> = ["a", "b"].into_iter().map(String::from).collect();
    list.get_mut(1).unwrap().push('!');
    assert_eq!(collect(&list), vec!["a", "b!"]);
}

// ============================================================================
// Remove
// ============================================================================

#[test]
fn test_fruit_scenario() {
    let mut list = ArrayList::new();
    list.push("Apple");
    list.push("Banana");
    list.push("Cherry");

    assert_eq!(list.remove(1), Ok("Banana"));
    assert_eq!(list.get(0), Ok(&"Apple"));
    assert_eq!(list.get(1), Ok(&"Cherry"));
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(2), Err(Error::OutOfRange { index: 2, len: 2 }));
}

#[test]
fn test_remove_shifts_following_elements() {
    let original: Vec<u32> = (0..12).collect();
    for k in 0..original.len() {
        let mut list: ArrayList<u32> = original.iter().copied().collect();
        assert_eq!(list.remove(k), Ok(original[k]));

        let mut expected = original.clone();
        expected.remove(k);
        assert_eq!(collect(&list), expected, "removing index {k}");
    }
}

#[test]
fn test_failed_remove_leaves_list_unchanged() {
    let mut list: ArrayList<u8> = [1, 2, 3].into_iter().collect();
    assert_eq!(list.remove(3), Err(Error::OutOfRange { index: 3, len: 3 }));
    assert_eq!(collect(&list), vec![1, 2, 3]);
}

#[test]
fn test_size_accounting() {
    let mut list = ArrayList::new();
    let mut expected = 0usize;
    for i in 0..40 {
        list.push(i);
        expected += 1;
        if i % 3 == 0 && list.remove(0).is_ok() {
            expected -= 1;
        }
    }
    // Out-of-range removals do not count.
    assert!(list.remove(list.len()).is_err());
    assert_eq!(list.len(), expected);
}

// ============================================================================
// Capacity
// ============================================================================

#[test]
fn test_zero_capacity_rejected() {
    assert!(matches!(ArrayList::<u8>::with_capacity(0), Err(Error::InvalidCapacity)));
}

#[test]
fn test_growth_is_transparent() {
    let mut list = ArrayList::with_capacity(2).unwrap();
    for i in 0..100 {
        list.push(i);
    }
    assert_eq!(collect(&list), (0..100).collect::<Vec<_>>());
    assert!(list.capacity() >= 100);
}

#[test]
fn test_capacity_never_shrinks() {
    let mut list = ArrayList::new();
    for i in 0..11 {
        list.push(i);
    }
    assert_eq!(list.capacity(), 15);
    while !list.is_empty() {
        list.remove(0).unwrap();
    }
    assert_eq!(list.capacity(), 15);
}

#[test]
fn test_fifteen_items_stats() {
    let list: ArrayList<String> = (1..=15).map(|i| format!("Item {i}")).collect();
    let stats = list.stats();
    assert_eq!(stats.len, 15);
    assert_eq!(stats.capacity, 15);
    assert_eq!(stats.unused(), 0);
}

#[test]
fn test_double_growth_policy() {
    let options = StoreOptions {
        initial_capacity: 10,
        growth: GrowthPolicy::Double,
    };
    let mut list = ArrayList::with_options(options).unwrap();
    for i in 0..11 {
        list.push(i);
    }
    assert_eq!(list.capacity(), 20);
}

// ============================================================================
// Traits
// ============================================================================

#[test]
fn test_display() {
    let list: ArrayList<&str> = ["Apple", "Banana", "Cherry"].into_iter().collect();
    assert_eq!(list.to_string(), "[Apple, Banana, Cherry]");
    assert_eq!(ArrayList::<u8>::new().to_string(), "[]");
}

#[test]
fn test_debug() {
    let list: ArrayList<&str> = ["a", "b"].into_iter().collect();
    assert_eq!(format!("{list:?}"), r#"["a", "b"]"#);
}

#[test]
fn test_equality_ignores_capacity() {
    let mut small = ArrayList::with_capacity(1).unwrap();
    let mut large = ArrayList::with_capacity(50).unwrap();
    for i in 0..5 {
        small.push(i);
        large.push(i);
    }
    assert_eq!(small, large);
    large.push(5);
    assert_ne!(small, large);
}

#[test]
fn test_clone_is_independent() {
    let mut list: ArrayList<String> = ["x", "y"].into_iter().map(String::from).collect();
    let snapshot = list.clone();
    list.remove(0).unwrap();
    assert_eq!(collect(&snapshot), vec!["x", "y"]);
    assert_eq!(collect(&list), vec!["y"]);
}

#[test]
fn test_for_loop_and_into_iter() {
    let list: ArrayList<u32> = (1..=4).collect();
    let mut total = 0;
    for value in &list {
        total += value;
    }
    assert_eq!(total, 10);
    assert_eq!(list.into_iter().rev().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
}

#[test]
fn test_contains_and_position() {
    let list: ArrayList<&str> = ["a", "b", "a"].into_iter().collect();
    assert_eq!(list.position(&"a"), Some(0));
    assert_eq!(list.position(&"b"), Some(1));
    assert!(!list.contains(&"z"));
}
