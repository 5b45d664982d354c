//! chain-hashtable: a single-threaded hash table with string keys,
//! separate chaining, and load-factor driven grow and shrink.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small table whose every invariant can be checked by reading
//!   one module at a time.
//! - Layers:
//!   - `hasher`: DJB2 over key bytes, reduced modulo the bucket count.
//!     `BucketHasher` is the seam; `Djb2` is the default.
//!   - `chain`: an owned singly linked list per bucket. The bucket slot
//!     owns the head, each node owns the next one.
//!   - `table`: `HashTable<V, H>` holding the bucket array, live entry
//!     count and resize policy.
//!
//! Constraints
//! - Single-threaded. Callers sharing a table across threads wrap the
//!   whole table in their own lock; resize replaces the bucket array.
//! - Keys are unique. Inserting an existing key overwrites its value.
//! - `len()` always equals the total length of all chains.
//! - `capacity()` is never zero.
//!
//! Resize policy
//! - Before an insert, if `len / capacity >= 0.75` the table grows to
//!   `max(capacity + 1, ceil(capacity * 1.5))`.
//! - After a delete, if `len / capacity < 0.25` and the capacity is above
//!   the floor (101 by default), it shrinks to `max(capacity / 2, floor)`.
//!   A failed shrink is logged and ignored; the delete has already happened.
//! - Resizing moves nodes into a freshly allocated array. The array is
//!   allocated before any node moves, so an allocation failure leaves the
//!   table exactly as it was.
//!
//! Errors
//! - Operations return `Result<(), TableError>`. `Status` mirrors the
//!   flat outcome codes (`Success` included) for reporting.
//!
//! Notes and non-goals
//! - No persistence, no concurrent access.
//! - Chain order is newest-first per bucket; a resize may reorder it.

mod chain;
pub mod config;
mod error;
pub mod hasher;
mod table;
mod table_proptest;

// Public surface
pub use chain::{ChainIter, Entry};
pub use config::{TableConfig, DEFAULT_CAPACITY, GROW_THRESHOLD, SHRINK_THRESHOLD};
pub use error::{Status, TableError};
pub use hasher::{BucketHasher, Djb2};
pub use table::{HashTable, Iter};
