#![cfg(test)]

// Property tests for HashTable kept inside the crate so they can inspect
// bucket layout through crate-internal helpers.

use crate::config::TableConfig;
use crate::error::TableError;
use crate::hasher::BucketHasher;
use crate::table::HashTable;
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

// Pool-indexed operations so shrinking moves towards earlier keys and
// shorter op lists.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Delete(usize),
    Search(usize),
    Mutate(usize, i32),
    Resize(usize),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,6}", 1..=40).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            4 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            3 => idx.clone().prop_map(OpI::Delete),
            2 => idx.clone().prop_map(OpI::Search),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            1 => (0usize..64).prop_map(OpI::Resize),
            1 => Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..200).prop_map(move |ops| (pool.clone(), ops))
    })
}

const FLOOR: usize = 4;

fn config() -> TableConfig {
    TableConfig::new().with_min_capacity(FLOOR)
}

// Runs one scenario against `sut`, checking it stays equivalent to a
// std HashMap model.
fn run<H: BucketHasher>(
    mut sut: HashTable<i32, H>,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, i32> = HashMap::new();

    for op in ops {
        let cap_before = sut.capacity();
        match op {
            OpI::Insert(i, v) => {
                let k = &pool[i];
                prop_assert_eq!(sut.insert(k, v), Ok(()));
                model.insert(k.clone(), v);
                prop_assert_eq!(sut.get(k), Some(&v));
                if sut.capacity() != cap_before {
                    prop_assert!(sut.capacity() > cap_before, "insert only grows");
                }
            }
            OpI::Delete(i) => {
                let k = &pool[i];
                let res = sut.delete(k);
                match model.remove(k) {
                    Some(_) => prop_assert_eq!(res, Ok(())),
                    None => {
                        prop_assert_eq!(res, Err(TableError::KeyNotFound));
                        prop_assert_eq!(sut.capacity(), cap_before);
                    }
                }
                prop_assert!(!sut.contains_key(k));
                if sut.capacity() != cap_before {
                    prop_assert!(sut.capacity() < cap_before, "delete only shrinks");
                    prop_assert!(sut.capacity() >= FLOOR, "shrink stops at the floor");
                }
            }
            OpI::Search(i) => {
                let k = &pool[i];
                let found = sut.search(k).map(|e| (e.key().to_string(), *e.value()));
                let expected = model.get(k).map(|v| (k.clone(), *v));
                prop_assert_eq!(found, expected);
                prop_assert_eq!(sut.capacity(), cap_before, "search never resizes");
            }
            OpI::Mutate(i, d) => {
                let k = &pool[i];
                match (sut.get_mut(k), model.get_mut(k)) {
                    (Some(sv), Some(mv)) => {
                        *sv = sv.wrapping_add(d);
                        *mv = mv.wrapping_add(d);
                    }
                    (None, None) => {}
                    _ => prop_assert!(false, "presence mismatch for {:?}", k),
                }
            }
            OpI::Resize(n) => {
                let res = sut.resize(n);
                if n == 0 {
                    prop_assert_eq!(res, Err(TableError::InvalidInput));
                    prop_assert_eq!(sut.capacity(), cap_before);
                } else {
                    prop_assert_eq!(res, Ok(()));
                    prop_assert_eq!(sut.capacity(), n);
                }
            }
            OpI::Iterate => {
                let s: BTreeMap<String, i32> =
                    sut.iter().map(|(k, v)| (k.to_string(), *v)).collect();
                let m: BTreeMap<String, i32> =
                    model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                prop_assert_eq!(s, m);
            }
        }

        // Post-conditions after each op
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        prop_assert!(sut.capacity() > 0);
        let chained: usize = (0..sut.capacity()).filter_map(|i| sut.bucket_len(i)).sum();
        prop_assert_eq!(chained, sut.len());
        for (k, v) in &model {
            prop_assert_eq!(sut.get(k), Some(v));
        }
    }
    Ok(())
}

// Property: state-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - Insert of an existing key overwrites; `len` tracks distinct keys.
// - Delete of an absent key is `KeyNotFound` and leaves capacity alone.
// - Inserts only grow, deletes only shrink and never below the floor.
// - Explicit resizes keep every (key, value) pair reachable.
// - `len` equals the summed chain lengths after every op.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let sut = HashTable::with_config(FLOOR, config()).unwrap();
        run(sut, &pool, ops)?;
    }
}

// Everything lands in bucket 0.
#[derive(Clone, Default)]
struct ConstHasher;
impl BucketHasher for ConstHasher {
    fn bucket(&self, _key: &str, _table_size: usize) -> usize {
        0
    }
}

// Property: same invariants under total collision, which stresses chain
// splicing and migration of a single long chain.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        let sut = HashTable::with_config_and_hasher(FLOOR, config(), ConstHasher).unwrap();
        run(sut, &pool, ops)?;
    }
}
