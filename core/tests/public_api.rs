//! Integration tests for the public API.
//!
//! These exercise the containers only through what the crate exports.

use arraykit_core::script::{ContainerKind, ScriptErrorKind, Session};
use arraykit_core::{
    ArrayList, ArraySet, CursorState, DEFAULT_CAPACITY, Error, GrowthPolicy, StoreOptions,
};
use pretty_assertions::assert_eq;

#[test]
fn test_list_lifecycle() {
    let mut list = ArrayList::new();
    assert_eq!(list.capacity(), DEFAULT_CAPACITY);

    for i in 1..=15 {
        list.push(format!("Item {i}"));
    }
    assert_eq!(list.len(), 15);

    let removed = list.remove(5).expect("index 5 exists");
    assert_eq!(removed, "Item 6");
    assert_eq!(list.get(5).map(String::as_str), Ok("Item 7"));
    assert_eq!(list.len(), 14);

    let joined: Vec<&str> = list.iter().map(String::as_str).take(3).collect();
    assert_eq!(joined, vec!["Item 1", "Item 2", "Item 3"]);
}

#[test]
fn test_cursor_removal_scenario() {
    let mut container: ArrayList<&str> = ["Apple", "Banana", "Cherry", "Date"].into_iter().collect();
    assert_eq!(container.to_string(), "[Apple, Banana, Cherry, Date]");

    let mut cursor = container.cursor();
    let mut removed = Vec::new();
    while cursor.has_next() {
        let fruit = *cursor.next().expect("has_next was true");
        if fruit == "Banana" {
            removed.push(cursor.remove().expect("next() just succeeded"));
        }
    }
    assert_eq!(cursor.state(), CursorState::Exhausted);
    assert_eq!(cursor.next(), Err(Error::Exhausted));
    drop(cursor);

    assert_eq!(removed, vec!["Banana"]);
    assert_eq!(container.to_string(), "[Apple, Cherry, Date]");

    let mut cursor = container.cursor();
    assert_eq!(cursor.remove(), Err(Error::IllegalState));
}

#[test]
fn test_set_lifecycle() {
    let mut set = ArraySet::new();
    for fruit in ["Apple", "Banana", "Blueberry", "Cherry", "Cantaloupe", "Apple"] {
        set.insert(fruit.to_string());
    }
    assert_eq!(set.len(), 5);
    assert!(set.contains(&"Apple".to_string()));
    assert!(!set.contains(&"Grape".to_string()));

    assert!(set.remove(&"Banana".to_string()));
    assert!(!set.contains(&"Banana".to_string()));

    let snapshot = set.to_vec();
    set.clear();
    assert_eq!(snapshot, vec!["Apple", "Blueberry", "Cherry", "Cantaloupe"]);
    assert!(set.is_empty());
}

#[test]
fn test_options_and_errors() {
    assert_eq!(
        ArrayList::<u8>::with_options(StoreOptions::with_capacity(0)).unwrap_err(),
        Error::InvalidCapacity
    );

    let options = StoreOptions {
        initial_capacity: 3,
        growth: GrowthPolicy::Double,
    };
    let mut list = ArrayList::with_options(options).unwrap();
    list.extend([1, 2, 3, 4]);
    assert_eq!(list.stats().to_string(), "len=4 capacity=6 unused=2 utilization=66.7%");
}

#[test]
fn test_script_session() {
    let mut session = Session::new(ContainerKind::Set, StoreOptions::default()).unwrap();
    let output = session.run("add a; add a; add b; iter; stats").unwrap();
    assert_eq!(
        output,
        vec!["true", "false", "true", "a", "b", "len=2 capacity=10 unused=8 utilization=20.0%"]
    );

    let err = session.run("get 9").unwrap_err();
    assert_eq!(err.kind, ScriptErrorKind::Container(Error::OutOfRange { index: 9, len: 2 }));
    assert_eq!(err.kind.code(), "R002");
}
