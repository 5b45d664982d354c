//! HashTable: bucket array of owned chains with load-factor driven resizing.

use crate::chain::{Chain, ChainIter, Entry};
use crate::config::TableConfig;
use crate::error::TableError;
use crate::hasher::{BucketHasher, Djb2};
use core::fmt;

pub struct HashTable<V = i32, H = Djb2> {
    buckets: Vec<Chain<V>>,
    size: usize,
    config: TableConfig,
    hasher: H,
}

impl<V> HashTable<V> {
    /// Table with `DEFAULT_CAPACITY` buckets.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Table with `capacity` buckets; zero selects `DEFAULT_CAPACITY`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_hasher(capacity, Djb2)
    }

    /// Table with a custom resize policy.
    pub fn with_config(capacity: usize, config: TableConfig) -> Result<Self, TableError> {
        Self::with_config_and_hasher(capacity, config, Djb2)
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, H> HashTable<V, H>
where
    H: BucketHasher,
{
    pub fn with_hasher(capacity: usize, hasher: H) -> Self {
        let config = TableConfig::default();
        let capacity = if capacity == 0 {
            config.min_capacity
        } else {
            capacity
        };
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Chain::new);
        Self {
            buckets,
            size: 0,
            config,
            hasher,
        }
    }

    /// Fallible constructor: validates `config` and reports a bucket array
    /// that cannot be allocated as `MemoryError`.
    pub fn with_config_and_hasher(
        capacity: usize,
        config: TableConfig,
        hasher: H,
    ) -> Result<Self, TableError> {
        let config = config.validate()?;
        let capacity = if capacity == 0 {
            config.min_capacity
        } else {
            capacity
        };
        Ok(Self {
            buckets: alloc_buckets(capacity)?,
            size: 0,
            config,
            hasher,
        })
    }

    fn slot(hasher: &H, key: &str, capacity: usize) -> usize {
        hasher.bucket(key, capacity) % capacity
    }

    fn index_of(&self, key: &str) -> usize {
        Self::slot(&self.hasher, key, self.buckets.len())
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// `len / capacity`, or 0.0 for a table with no buckets.
    pub fn load_factor(&self) -> f64 {
        if self.buckets.is_empty() {
            return 0.0;
        }
        self.size as f64 / self.buckets.len() as f64
    }

    /// Inserts `key` or overwrites the value of an existing `key`.
    ///
    /// If the load factor has reached the grow threshold the table first
    /// grows by half (at least one bucket). A failed grow aborts the insert
    /// and leaves the table as it was.
    pub fn insert(&mut self, key: &str, value: V) -> Result<(), TableError> {
        if self.load_factor() >= self.config.grow_threshold {
            let grown = self.grown_capacity()?;
            self.resize(grown)?;
        }

        let idx = self.index_of(key);
        if let Some(entry) = self.buckets[idx].find_mut(key) {
            *entry.value_mut() = value;
            tracing::trace!(key, bucket = idx, "updated existing entry");
            return Ok(());
        }

        let owned = copy_key(key)?;
        self.buckets[idx].push_front(Entry::new(owned, value));
        self.size += 1;
        tracing::trace!(key, bucket = idx, size = self.size, "inserted entry");
        Ok(())
    }

    fn grown_capacity(&self) -> Result<usize, TableError> {
        let cap = self.buckets.len();
        let grown = cap
            .checked_add(cap.div_ceil(2))
            .ok_or(TableError::MemoryError)?;
        Ok(grown.max(cap.saturating_add(1)))
    }

    /// Looks up the entry for `key`. Never resizes.
    pub fn search(&self, key: &str) -> Option<&Entry<V>> {
        self.buckets[self.index_of(key)].find(key)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.search(key).map(Entry::value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let idx = self.index_of(key);
        self.buckets[idx].find_mut(key).map(Entry::value_mut)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Deletes `key`, returning `KeyNotFound` if it is absent.
    pub fn delete(&mut self, key: &str) -> Result<(), TableError> {
        self.remove(key).map(drop)
    }

    /// Unlinks `key` and returns its value.
    ///
    /// After removal the table shrinks by half (never below the floor
    /// capacity) once the load factor falls under the shrink threshold. A
    /// failed shrink is logged and the removal still stands.
    pub fn remove(&mut self, key: &str) -> Result<V, TableError> {
        let idx = self.index_of(key);
        let entry = self.buckets[idx]
            .remove(key)
            .ok_or(TableError::KeyNotFound)?;
        self.size -= 1;

        let floor = self.config.min_capacity;
        if self.load_factor() < self.config.shrink_threshold && self.capacity() > floor {
            let new_capacity = (self.capacity() / 2).max(floor);
            if let Err(error) = self.resize(new_capacity) {
                tracing::warn!(
                    %error,
                    capacity = self.capacity(),
                    new_capacity,
                    "shrink failed; keeping current capacity"
                );
            }
        }

        Ok(entry.into_value())
    }

    /// Rehashes every entry into a fresh array of `new_capacity` buckets.
    ///
    /// Entries are moved, not copied: old buckets are swept in index order,
    /// each chain head to tail, and every node is pushed onto the front of
    /// its new bucket. If the new array cannot be allocated the table is
    /// left untouched.
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), TableError> {
        if new_capacity == 0 {
            return Err(TableError::InvalidInput);
        }
        let mut fresh = alloc_buckets(new_capacity)?;

        for chain in self.buckets.iter_mut() {
            while let Some(node) = chain.pop_front() {
                let idx = Self::slot(&self.hasher, node.key(), new_capacity);
                fresh[idx].push_front(node);
            }
        }

        let old_capacity = self.buckets.len();
        self.buckets = fresh;
        tracing::debug!(old_capacity, new_capacity, size = self.size, "resized table");
        Ok(())
    }

    /// Removes every entry; capacity is kept.
    pub fn clear(&mut self) {
        for chain in self.buckets.iter_mut() {
            chain.clear();
        }
        self.size = 0;
    }

    /// Consumes the table, releasing every entry and the bucket array.
    pub fn destroy(self) {
        drop(self);
    }

    /// Chain length of bucket `index`, or `None` past the end.
    pub fn bucket_len(&self, index: usize) -> Option<usize> {
        self.buckets.get(index).map(Chain::len)
    }

    /// Non-empty buckets in index order, each with its chain head to tail.
    pub fn buckets(&self) -> impl Iterator<Item = (usize, ChainIter<'_, V>)> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, chain)| !chain.is_empty())
            .map(|(i, chain)| (i, chain.iter()))
    }

    /// Every entry in bucket order, then chain order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
        }
    }
}

fn alloc_buckets<V>(capacity: usize) -> Result<Vec<Chain<V>>, TableError> {
    let mut buckets = Vec::new();
    buckets.try_reserve_exact(capacity)?;
    buckets.resize_with(capacity, Chain::new);
    Ok(buckets)
}

fn copy_key(key: &str) -> Result<String, TableError> {
    let mut owned = String::new();
    owned.try_reserve_exact(key.len())?;
    owned.push_str(key);
    Ok(owned)
}

/// Iterator over `(key, value)` pairs of a `HashTable`.
pub struct Iter<'a, V> {
    buckets: core::slice::Iter<'a, Chain<V>>,
    chain: Option<ChainIter<'a, V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.as_mut().and_then(Iterator::next) {
                return Some((entry.key(), entry.value()));
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }
}

impl<'a, V, H: BucketHasher> IntoIterator for &'a HashTable<V, H> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: fmt::Display, H: BucketHasher> fmt::Display for HashTable<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "Hash table is empty");
        }
        writeln!(
            f,
            "Hash table contents ({} elements, capacity {}, load factor {:.2}):",
            self.size,
            self.capacity(),
            self.load_factor()
        )?;
        for (i, chain) in self.buckets() {
            write!(f, "Bucket {}: ", i)?;
            for entry in chain {
                write!(f, "[{}: {}] ", entry.key(), entry.value())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<V: fmt::Debug, H> fmt::Debug for HashTable<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("size", &self.size)
            .field("capacity", &self.buckets.len())
            .field("entries", &DebugEntries(&self.buckets))
            .finish()
    }
}

struct DebugEntries<'a, V>(&'a [Chain<V>]);

impl<V: fmt::Debug> fmt::Debug for DebugEntries<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.0
                    .iter()
                    .flat_map(|chain| chain.iter().map(|e| (e.key(), e.value()))),
            )
            .finish()
    }
}
