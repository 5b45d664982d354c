// HashTable property tests against the public surface.
//
// Property 1: last write wins.
//  - For any sequence of inserts, each key maps to the most recent value
//    inserted for it, and `len()` equals the number of distinct keys.
//
// Property 2: size arithmetic.
//  - After N unique inserts and M deletes of inserted keys, `len()` is
//    N - M; deleting an absent key returns `KeyNotFound`.
//
// Property 3: resize preserves contents.
//  - Forcing a resize to any positive capacity keeps every pair.
use chain_hashtable::{HashTable, TableError, DEFAULT_CAPACITY};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

proptest! {
    #[test]
    fn prop_last_write_wins(writes in proptest::collection::vec(("[a-zA-Z0-9]{1,8}", any::<i32>()), 1..300)) {
        let mut t = HashTable::new();
        let mut model = HashMap::new();
        for (k, v) in writes {
            prop_assert_eq!(t.insert(&k, v), Ok(()));
            prop_assert_eq!(t.get(&k), Some(&v));
            model.insert(k, v);
        }
        prop_assert_eq!(t.len(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(t.get(k), Some(v));
        }
    }
}

proptest! {
    #[test]
    fn prop_size_after_inserts_and_deletes(
        keys in proptest::collection::btree_set("[a-z]{1,10}", 1..400),
        delete_mask in proptest::collection::vec(any::<bool>(), 400),
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let mut t = HashTable::new();
        for (i, k) in keys.iter().enumerate() {
            t.insert(k, i as i64).unwrap();
        }

        let mut deleted = BTreeSet::new();
        for (k, del) in keys.iter().zip(delete_mask.iter()) {
            if *del {
                prop_assert_eq!(t.delete(k), Ok(()));
                prop_assert_eq!(t.delete(k), Err(TableError::KeyNotFound));
                deleted.insert(k.clone());
            }
        }

        prop_assert_eq!(t.len(), keys.len() - deleted.len());
        prop_assert!(t.capacity() >= DEFAULT_CAPACITY);
        prop_assert!(t.load_factor() >= 0.0);
        for (i, k) in keys.iter().enumerate() {
            if deleted.contains(k) {
                prop_assert!(t.search(k).is_none());
            } else {
                prop_assert_eq!(t.get(k), Some(&(i as i64)));
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_resize_preserves_contents(
        pairs in proptest::collection::hash_map("[a-z]{0,6}", any::<i32>(), 0..200),
        new_capacity in 1usize..2000,
    ) {
        let mut t = HashTable::with_capacity(7);
        for (k, v) in &pairs {
            t.insert(k, *v).unwrap();
        }
        let len = t.len();
        prop_assert_eq!(t.resize(new_capacity), Ok(()));
        prop_assert_eq!(t.capacity(), new_capacity);
        prop_assert_eq!(t.len(), len);
        for (k, v) in &pairs {
            prop_assert_eq!(t.get(k), Some(v));
        }
        prop_assert_eq!(t.iter().count(), pairs.len());
    }
}
