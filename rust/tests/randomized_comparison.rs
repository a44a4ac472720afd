//! Long random mutation sequences checked against a naive sorted `Vec`.

use avlstore::{AvlTree, Record};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 42;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn random_record(rng: &mut StdRng, key_space: u32, value_space: i32) -> Record {
    Record::new(
        format!("key_{}", rng.gen_range(0..key_space)),
        rng.gen_range(-value_space..value_space),
    )
}

fn model_values(model: &[Record]) -> Vec<i32> {
    let mut values: Vec<i32> = model.iter().map(Record::value).collect();
    values.sort_unstable();
    values
}

#[test]
fn test_random_inserts_and_deletes_match_model() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut tree = AvlTree::new();
    let mut model: Vec<Record> = Vec::new();

    for step in 0..5_000 {
        let record = random_record(&mut rng, 16, 200);
        if rng.gen_bool(0.6) {
            tree.insert(record.clone());
            model.push(record);
        } else {
            let removed = tree.delete_node(record.key(), record.value());
            match model.iter().position(|r| r == &record) {
                Some(pos) => {
                    model.remove(pos);
                    assert_eq!(removed, Some(record), "step {step}");
                }
                None => assert_eq!(removed, None, "step {step}"),
            }
        }

        if step % 250 == 0 {
            assert_eq!(tree.validate(), Ok(()), "step {step}");
        }
    }

    assert_eq!(tree.validate(), Ok(()));
    assert_eq!(tree.len(), model.len());
    let values: Vec<i32> = tree.iter().map(Record::value).collect();
    assert_eq!(values, model_values(&model));
    for record in &model {
        assert!(tree.contains(record.key(), record.value()));
    }
}

#[test]
fn test_random_range_queries_match_model() {
    let mut rng = StdRng::seed_from_u64(SEED + 1);
    let mut tree = AvlTree::new();
    let mut model = Vec::new();
    for _ in 0..2_000 {
        let record = random_record(&mut rng, 1_000, 5_000);
        tree.insert(record.clone());
        model.push(record);
    }

    for _ in 0..200 {
        let a = rng.gen_range(-6_000..6_000);
        let b = rng.gen_range(a..6_001);
        let got: Vec<i32> = tree.range_query(a, b).iter().map(|r| r.value()).collect();
        let expected: Vec<i32> = model_values(&model)
            .into_iter()
            .filter(|v| (a..=b).contains(v))
            .collect();
        assert_eq!(got, expected, "range [{a}, {b}]");
    }
}

#[test]
fn test_height_stays_logarithmic() {
    let mut rng = StdRng::seed_from_u64(SEED + 2);
    let mut tree = AvlTree::new();
    for _ in 0..10_000 {
        tree.insert(random_record(&mut rng, 100, 1_000_000));
    }
    // AVL bound: h < 1.4405 * log2(n + 2)
    let bound = (1.4405 * ((tree.len() + 2) as f64).log2()).floor() as i32;
    assert!(tree.height() <= bound, "height {} > {}", tree.height(), bound);

    // Drain half and check again
    let victims: Vec<Record> = tree.iter().step_by(2).cloned().collect();
    for record in &victims {
        assert!(tree.delete_node(record.key(), record.value()).is_some());
    }
    assert_eq!(tree.len(), 10_000 - victims.len());
    assert_eq!(tree.validate(), Ok(()));
}
