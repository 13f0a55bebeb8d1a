//! In-memory record collection with owned identifier sequence

use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic identifier source, starting at 1.
///
/// Each collection owns its own sequence; identifiers are never shared
/// between collections and never reused within one.
#[derive(Debug, Default)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Allocate the next identifier.
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

/// Insertion-ordered in-memory collection.
///
/// Records are plain `Clone` values; reads hand out copies so no lock is
/// held beyond the accessor call.
#[derive(Debug)]
pub struct MemoryCollection<T> {
    items: RwLock<Vec<T>>,
    sequence: IdSequence,
}

impl<T: Clone> MemoryCollection<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            sequence: IdSequence::new(),
        }
    }

    /// Insert a record built from a freshly allocated identifier and return
    /// the stored value.
    pub fn insert_with(&self, build: impl FnOnce(u64) -> T) -> T {
        let mut items = self.items.write();
        let record = build(self.sequence.next_id());
        items.push(record.clone());
        record
    }

    /// All records in insertion order.
    pub fn all(&self) -> Vec<T> {
        self.items.read().clone()
    }

    /// First record matching the predicate.
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.items.read().iter().find(|item| predicate(item)).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl<T: Clone> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}
