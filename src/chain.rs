//! Chain: an owned singly linked list of entries sharing one bucket.
//!
//! Each bucket slot owns the head node and every node owns its successor,
//! so there is exactly one owner per entry and no aliasing. New entries
//! are pushed at the head; lookups scan head to tail.

use core::fmt;

/// A key/value record stored in a bucket chain.
pub struct Entry<V> {
    key: String,
    value: V,
    next: Link<V>,
}

type Link<V> = Option<Box<Entry<V>>>;

impl<V> Entry<V> {
    pub(crate) fn new(key: String, value: V) -> Box<Self> {
        Box::new(Entry {
            key,
            value,
            next: None,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub(crate) fn into_value(self: Box<Self>) -> V {
        self.value
    }
}

impl<V: fmt::Debug> fmt::Debug for Entry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}

pub(crate) struct Chain<V> {
    head: Link<V>,
}

impl<V> Chain<V> {
    pub(crate) const fn new() -> Self {
        Chain { head: None }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub(crate) fn len(&self) -> usize {
        self.iter().count()
    }

    /// Links `node` in as the new head.
    pub(crate) fn push_front(&mut self, mut node: Box<Entry<V>>) {
        node.next = self.head.take();
        self.head = Some(node);
    }

    /// Detaches the head node. Used to move nodes during migration.
    pub(crate) fn pop_front(&mut self) -> Option<Box<Entry<V>>> {
        let mut node = self.head.take()?;
        self.head = node.next.take();
        Some(node)
    }

    pub(crate) fn find(&self, key: &str) -> Option<&Entry<V>> {
        self.iter().find(|e| e.key == key)
    }

    pub(crate) fn find_mut(&mut self, key: &str) -> Option<&mut Entry<V>> {
        let mut cur = self.head.as_deref_mut();
        while let Some(node) = cur {
            if node.key == key {
                return Some(node);
            }
            cur = node.next.as_deref_mut();
        }
        None
    }

    /// Unlinks the first node whose key equals `key` and hands it back.
    pub(crate) fn remove(&mut self, key: &str) -> Option<Box<Entry<V>>> {
        // Walk the link slots themselves so unlinking the head and an
        // interior node are the same splice.
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| node.key != key) {
            link = &mut link.as_mut()?.next;
        }
        let mut removed = link.take()?;
        *link = removed.next.take();
        Some(removed)
    }

    pub(crate) fn iter(&self) -> ChainIter<'_, V> {
        ChainIter {
            cur: self.head.as_deref(),
        }
    }

    /// Drops every node without recursing down the chain.
    pub(crate) fn clear(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<V> Default for Chain<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for Chain<V> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Iterator over the entries of one bucket, head to tail.
pub struct ChainIter<'a, V> {
    cur: Option<&'a Entry<V>>,
}

impl<'a, V> Iterator for ChainIter<'a, V> {
    type Item = &'a Entry<V>;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cur?;
        self.cur = node.next.as_deref();
        Some(node)
    }
}

impl<'a, V> Clone for ChainIter<'a, V> {
    fn clone(&self) -> Self {
        ChainIter { cur: self.cur }
    }
}
