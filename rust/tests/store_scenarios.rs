use avlstore::{AvlTree, DuplicatePolicy, IndexedStore, Record, StoreConfig};

fn store_with(values: &[i32]) -> IndexedStore {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| Record::new(format!("rec{i}"), value))
        .collect()
}

fn values(records: &[&Record]) -> Vec<i32> {
    records.iter().map(|r| r.value()).collect()
}

#[test]
fn test_inorder_traversal_sorts_by_value() {
    let store = store_with(&[10, 20, 5, 6, 15]);
    assert_eq!(values(&store.inorder_traversal()), vec![5, 6, 10, 15, 20]);
}

#[test]
fn test_ascending_three_rebalances_to_height_two() {
    let mut tree = AvlTree::new();
    for value in [1, 2, 3] {
        tree.insert(Record::new(format!("v{value}"), value));
    }

    assert_eq!(tree.height(), 2);
    assert_eq!(tree.root_record().map(Record::value), Some(2));
    assert_eq!(tree.first().map(Record::value), Some(1));
    assert_eq!(tree.last().map(Record::value), Some(3));
}

#[test]
fn test_range_query_between_stored_values() {
    let store = store_with(&[10, 20, 30, 40, 50, 25]);
    assert_eq!(values(&store.range_query(15, 35)), vec![20, 25, 30]);
}

#[test]
fn test_k_nearest_excludes_target_value() {
    let store = store_with(&[10, 20, 30]);
    assert_eq!(values(&store.find_k_nearest_keys(20, 5)), vec![30, 10]);
}

#[test]
fn test_search_after_insert_round_trips() {
    let mut store = IndexedStore::new();
    let records = [
        Record::new("alice", 30),
        Record::new("bob", 30),
        Record::new("carol", 25),
        Record::new("dave", 30),
        Record::new("erin", 35),
    ];
    for record in &records {
        store.insert(record.clone());
        assert_eq!(store.search(record.key(), record.value()), Some(record));
    }
    for record in &records {
        assert_eq!(store.search(record.key(), record.value()), Some(record));
    }
    assert_eq!(store.search("frank", 30), None);
}

#[test]
fn test_delete_decrements_count_and_keeps_invariants() {
    let mut store = store_with(&(0..64).map(|i| (i * 37) % 101).collect::<Vec<_>>());
    let before = store.count_records();

    let target = store.inorder_traversal()[10].clone();
    assert_eq!(
        store.delete_record(target.key(), target.value()),
        Some(target.clone())
    );

    assert_eq!(store.search(target.key(), target.value()), None);
    assert_eq!(store.count_records(), before - 1);
    assert_eq!(store.index().validate(), Ok(()));
}

#[test]
fn test_reject_policy_keeps_one_copy() {
    let config = StoreConfig::new().duplicate_policy(DuplicatePolicy::Reject);
    let mut store = IndexedStore::with_config(config).unwrap();

    assert!(store.insert(Record::new("x", 1)));
    assert!(!store.insert(Record::new("x", 1)));
    assert!(store.insert(Record::new("y", 1)));
    assert_eq!(store.count_records(), 2);
}

#[test]
fn test_clear_then_reuse() {
    let mut store = store_with(&[3, 1, 4, 1, 5, 9, 2, 6]);
    store.clear_database();
    assert_eq!(store.count_records(), 0);
    assert!(store.range_query(i32::MIN, i32::MAX).is_empty());

    store.insert(Record::new("again", 7));
    assert_eq!(values(&store.inorder_traversal()), vec![7]);
}
