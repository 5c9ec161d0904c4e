use std::collections::HashSet;

use super::*;

fn id(value: &str) -> Identifier {
    Identifier::from(value)
}

fn ids(values: &[&str]) -> Vec<Identifier> {
    values.iter().map(|value| id(value)).collect()
}

fn test_catalog() -> Vec<Item> {
    vec![
        Item::new("t1", "test1"),
        Item::new("t2", "test2"),
        Item::new("t3", "test3"),
    ]
}

fn store_with(selected: &[&str]) -> SelectionStore {
    let mut store = SelectionStore::new();
    store.set_catalog(test_catalog());
    store.set_selection(&ids(selected));
    store
}

fn assert_partition(store: &SelectionStore) {
    let available: HashSet<&Identifier> = store.available().map(|item| &item.value).collect();
    let selected: HashSet<&Identifier> = store.selected_items().map(|item| &item.value).collect();
    let catalog: HashSet<&Identifier> = store.catalog().iter().map(|item| &item.value).collect();

    assert!(available.is_disjoint(&selected));
    assert_eq!(&available | &selected, catalog);
}

#[test]
fn new_store_is_empty() {
    let store = SelectionStore::new();
    assert!(store.is_empty());
    assert_eq!(store.serialize(), "[]");
}

#[test]
fn set_selection_then_select_all_appends_in_catalog_order() {
    let mut store = store_with(&["t2"]);
    assert_eq!(store.serialize(), r#"["t2"]"#);

    store.select_all();
    assert_eq!(store.serialize(), r#"["t2","t1","t3"]"#);
    assert_partition(&store);
}

#[test]
fn unselect_all_empties_selection() {
    let mut store = store_with(&["t2"]);
    store.select_all();
    store.unselect_all();

    assert_eq!(store.serialize(), "[]");
    assert_eq!(store.available().count(), 3);
    assert_partition(&store);
}

#[test]
fn select_all_from_empty_selection_matches_catalog() {
    let mut store = store_with(&[]);
    store.select_all();
    assert_eq!(store.current(), ids(&["t1", "t2", "t3"]).as_slice());
}

#[test]
fn select_then_unselect_restores_previous_selection() {
    let mut store = store_with(&["t3"]);
    let before = store.current().to_vec();

    assert!(store.select(&id("t1")));
    assert_eq!(store.current(), ids(&["t3", "t1"]).as_slice());
    assert!(store.unselect(&id("t1")));

    assert_eq!(store.current(), before.as_slice());
}

#[test]
fn repeated_select_does_not_duplicate() {
    let mut store = store_with(&[]);
    assert!(store.select(&id("t1")));
    assert!(!store.select(&id("t1")));
    assert_eq!(store.current(), ids(&["t1"]).as_slice());
}

#[test]
fn unselect_of_missing_id_is_reported() {
    let mut store = store_with(&["t1"]);
    assert!(!store.unselect(&id("t9")));
    assert_eq!(store.current(), ids(&["t1"]).as_slice());
}

#[test]
fn set_selection_collapses_duplicates() {
    let store = store_with(&["t2", "t1", "t2"]);
    assert_eq!(store.current(), ids(&["t2", "t1"]).as_slice());
    assert_eq!(store.initial(), ids(&["t2", "t1"]).as_slice());
}

#[test]
fn set_selection_takes_a_copy() {
    let mut input = ids(&["t1"]);
    let mut store = SelectionStore::new();
    store.set_catalog(test_catalog());
    store.set_selection(&input);

    input.push(id("t2"));
    input[0] = id("t3");

    assert_eq!(store.current(), ids(&["t1"]).as_slice());
    assert_eq!(store.initial(), ids(&["t1"]).as_slice());
}

#[test]
fn reset_restores_baseline_and_is_idempotent() {
    let mut store = store_with(&["t1", "t3"]);
    store.unselect(&id("t1"));
    store.select(&id("t2"));

    store.reset();
    let once = store.current().to_vec();
    store.reset();

    assert_eq!(store.current(), once.as_slice());
    assert_eq!(store.current(), store.initial());
    assert_eq!(store.current(), ids(&["t1", "t3"]).as_slice());
}

#[test]
fn selection_actions_never_touch_baseline() {
    let mut store = store_with(&["t2"]);
    store.select(&id("t1"));
    store.unselect(&id("t2"));
    store.select_all();
    store.unselect_all();

    assert_eq!(store.initial(), ids(&["t2"]).as_slice());
}

#[test]
fn catalog_replacement_keeps_orphans_serialized() {
    let mut store = store_with(&["t1", "t3"]);
    store.set_catalog(vec![Item::new("t1", "test1"), Item::new("t2", "test2")]);

    assert_eq!(store.serialize(), r#"["t1","t3"]"#);
    assert_eq!(store.orphans().collect::<Vec<_>>(), vec![&id("t3")]);
    assert_eq!(store.selected_items().count(), 1);
    assert_partition(&store);
}

#[test]
fn select_all_does_not_duplicate_repeated_catalog_entries() {
    let mut store = SelectionStore::new();
    store.set_catalog(vec![Item::new("t1", "test1"), Item::new("t1", "again")]);
    store.select_all();
    assert_eq!(store.current(), ids(&["t1"]).as_slice());
}

#[test]
fn clear_empties_all_collections() {
    let mut store = store_with(&["t1"]);
    store.clear();

    assert!(store.is_empty());
    assert!(store.catalog().is_empty());
    assert_eq!(store.serialize(), "[]");
}

#[test]
fn serialized_selection_parses_back_to_current() {
    let mut store = SelectionStore::new();
    store.set_catalog(vec![Item::new(5_i64, "five"), Item::new("t1", "test1")]);
    store.set_selection(&[Identifier::from("t1")]);
    store.select(&Identifier::from(5_i64));

    let parsed: Vec<Identifier> = serde_json::from_str(&store.serialize()).expect("json");
    assert_eq!(parsed, store.current());
}

#[test]
fn partition_holds_across_mixed_operations() {
    let mut store = store_with(&["t2"]);
    assert_partition(&store);
    store.select(&id("t3"));
    assert_partition(&store);
    store.unselect(&id("t2"));
    assert_partition(&store);
    store.select_all();
    assert_partition(&store);
    store.reset();
    assert_partition(&store);
}
