//! DJB2 string hashing and the hasher seam used by `HashTable`.

/// Initial accumulator for DJB2.
const DJB2_SEED: u64 = 5381;

/// DJB2 over the bytes of `key`: `h = h * 33 + byte`, wrapping in a `u64`.
#[inline]
pub fn djb2(key: &str) -> u64 {
    key.bytes().fold(DJB2_SEED, |h, b| {
        (h << 5).wrapping_add(h).wrapping_add(u64::from(b))
    })
}

/// Maps `key` to a bucket index in `[0, table_size)`.
///
/// An empty key or a zero `table_size` yields index 0.
#[inline]
pub fn bucket_index(key: &str, table_size: usize) -> usize {
    if key.is_empty() || table_size == 0 {
        return 0;
    }
    (djb2(key) % table_size as u64) as usize
}

/// Strategy for turning a key into a bucket index.
///
/// Implementations must be deterministic and return a value in
/// `[0, table_size)` for any `table_size > 0`.
pub trait BucketHasher {
    fn bucket(&self, key: &str, table_size: usize) -> usize;
}

/// The default hasher: DJB2 reduced modulo the table size.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Djb2;

impl BucketHasher for Djb2 {
    #[inline]
    fn bucket(&self, key: &str, table_size: usize) -> usize {
        bucket_index(key, table_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: matches the classic DJB2 values for short inputs.
    #[test]
    fn known_values() {
        assert_eq!(djb2(""), 5381);
        assert_eq!(djb2("a"), 5381 * 33 + 97);
        assert_eq!(djb2("ab"), (5381 * 33 + 97) * 33 + 98);
    }

    /// Invariant: the index is always within range and stable across calls.
    #[test]
    fn index_in_range_and_deterministic() {
        for size in [1usize, 2, 7, 101, 152, 1733] {
            for i in 0..200 {
                let k = format!("perfkey{}", i);
                let a = bucket_index(&k, size);
                assert!(a < size);
                assert_eq!(a, bucket_index(&k, size));
                assert_eq!(a, Djb2.bucket(&k, size));
            }
        }
    }

    #[test]
    fn degenerate_inputs_map_to_zero() {
        assert_eq!(bucket_index("", 101), 0);
        assert_eq!(bucket_index("key1", 0), 0);
    }

    /// Long keys wrap instead of overflowing.
    #[test]
    fn long_keys_wrap() {
        let k = "z".repeat(4096);
        assert!(bucket_index(&k, 101) < 101);
    }

    /// Keys spread across buckets rather than piling into a few.
    #[test]
    fn spreads_sequential_keys() {
        let size = 101;
        let mut used = vec![false; size];
        for i in 0..1000 {
            used[bucket_index(&format!("perfkey{}", i), size)] = true;
        }
        let filled = used.iter().filter(|b| **b).count();
        assert!(filled > size * 3 / 4, "only {} of {} buckets used", filled, size);
    }
}
