use super::*;

use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(u8, i32),
    Delete(u8, i32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // Small key and value domains so duplicates and equal values are common
    prop_oneof![
        3 => (0u8..4, -20i32..20).prop_map(|(k, v)| Op::Insert(k, v)),
        2 => (0u8..4, -20i32..20).prop_map(|(k, v)| Op::Delete(k, v)),
    ]
}

/// Naive model: the multiset of stored records.
fn apply(tree: &mut AvlTree, model: &mut Vec<Record>, op: &Op) {
    match *op {
        Op::Insert(k, v) => {
            let record = Record::new(format!("k{k}"), v);
            assert!(tree.insert(record.clone()));
            model.push(record);
        }
        Op::Delete(k, v) => {
            let key = format!("k{k}");
            let removed = tree.delete_node(&key, v);
            match model.iter().position(|r| r.matches(&key, v)) {
                Some(pos) => {
                    model.remove(pos);
                    assert_eq!(removed, Some(Record::new(key, v)));
                }
                None => assert_eq!(removed, None),
            }
        }
    }
}

fn sorted_values(model: &[Record]) -> Vec<i32> {
    let mut values: Vec<i32> = model.iter().map(Record::value).collect();
    values.sort_unstable();
    values
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_mutations_preserve_invariants(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut tree = AvlTree::new();
        let mut model = Vec::new();

        for op in &ops {
            apply(&mut tree, &mut model, op);
            prop_assert_eq!(tree.validate(), Ok(()));
        }

        prop_assert_eq!(tree.len(), model.len());
        let values: Vec<i32> = tree.iter().map(Record::value).collect();
        prop_assert_eq!(values, sorted_values(&model));
        for record in &model {
            prop_assert!(tree.contains(record.key(), record.value()));
        }
    }

    #[test]
    fn prop_range_query_matches_filter(
        values in prop::collection::vec(-50i32..50, 0..120),
        a in -60i32..60,
        b in -60i32..60,
    ) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let mut tree = AvlTree::new();
        for (i, &value) in values.iter().enumerate() {
            tree.insert(Record::new(i.to_string(), value));
        }

        let got: Vec<i32> = tree.range_query(start, end).iter().map(|r| r.value()).collect();
        let mut expected: Vec<i32> = values.iter().copied().filter(|v| (start..=end).contains(v)).collect();
        expected.sort_unstable();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_k_nearest_is_closest_and_excludes_target(
        values in prop::collection::vec(-50i32..50, 0..120),
        target in -60i32..60,
        k in 0usize..20,
    ) {
        let mut tree = AvlTree::new();
        for (i, &value) in values.iter().enumerate() {
            tree.insert(Record::new(i.to_string(), value));
        }

        let result = tree.find_k_nearest_keys(target, k);
        let eligible: Vec<i32> = values.iter().copied().filter(|&v| v != target).collect();
        prop_assert_eq!(result.len(), k.min(eligible.len()));
        prop_assert!(result.iter().all(|r| r.value() != target));

        // Result runs farthest to nearest
        let distances: Vec<u32> = result.iter().map(|r| r.value().abs_diff(target)).collect();
        prop_assert!(distances.windows(2).all(|w| w[0] >= w[1]));

        // Nothing left out is strictly closer than the farthest pick
        if let Some(&worst) = distances.first() {
            let mut all: Vec<u32> = eligible.iter().map(|v| v.abs_diff(target)).collect();
            all.sort_unstable();
            prop_assert!(all[..result.len()].iter().all(|&d| d <= worst));
            if let Some(&next) = all.get(result.len()) {
                prop_assert!(next >= worst);
            }
        }
    }
}
