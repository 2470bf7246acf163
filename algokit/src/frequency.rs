//! Occurrence counting with first-seen iteration order.
//!
//! [`FrequencyMap`] is the counting primitive behind duplicate detection,
//! character counting, first-unique lookup and the anagram check.

use std::collections::HashMap;
use std::hash::Hash;

/// Mapping from value to occurrence count.
///
/// Lookups are hash-backed. Iteration yields keys in the order they were
/// first inserted; a key removed by [`FrequencyMap::decrement`] and inserted
/// again moves to the end. Removal leaves an empty slot in the order list,
/// which is compacted once empty slots outnumber live keys.
#[derive(Debug, Clone)]
pub struct FrequencyMap<K> {
    counts: HashMap<K, Entry>,
    order: Vec<Option<K>>,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    count: usize,
    slot: usize,
}

/// Empty slots tolerated before compaction regardless of map size.
const MIN_DEAD_SLOTS: usize = 16;

impl<K> Default for FrequencyMap<K> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> FrequencyMap<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `key`, returning its new count.
    pub fn increment(&mut self, key: K) -> usize {
        let next_slot = self.order.len();
        let entry = self.counts.entry(key.clone()).or_insert(Entry {
            count: 0,
            slot: next_slot,
        });
        if entry.count == 0 {
            self.order.push(Some(key));
        }
        entry.count += 1;
        entry.count
    }

    /// Remove one occurrence of `key`.
    ///
    /// Returns the remaining count, or `None` if the key was absent. A key
    /// whose count reaches zero is dropped from the map entirely.
    pub fn decrement(&mut self, key: &K) -> Option<usize> {
        let entry = self.counts.get_mut(key)?;
        entry.count -= 1;
        let remaining = entry.count;
        if remaining == 0 {
            let slot = entry.slot;
            self.counts.remove(key);
            self.order[slot] = None;
            if self.dead_slots() > self.counts.len().max(MIN_DEAD_SLOTS) {
                self.compact();
            }
        }
        Some(remaining)
    }

    fn dead_slots(&self) -> usize {
        self.order.len() - self.counts.len()
    }

    fn compact(&mut self) {
        let old = std::mem::take(&mut self.order);
        self.order.reserve(self.counts.len());
        for key in old.into_iter().flatten() {
            if let Some(entry) = self.counts.get_mut(&key) {
                entry.slot = self.order.len();
            }
            self.order.push(Some(key));
        }
    }

    /// Count for `key`; zero when absent.
    pub fn count(&self, key: &K) -> usize {
        self.counts.get(key).map_or(0, |e| e.count)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.counts.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().map(|e| e.count).sum()
    }

    /// `(key, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> + '_ {
        self.keys().map(move |k| (k, self.count(k)))
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.order.iter().flatten()
    }

    /// Keys whose count satisfies `pred`, in first-seen order.
    pub fn keys_where<'a>(
        &'a self,
        pred: impl Fn(usize) -> bool + 'a,
    ) -> impl Iterator<Item = &'a K> + 'a {
        self.iter().filter(move |(_, n)| pred(*n)).map(|(k, _)| k)
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for FrequencyMap<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Eq + Hash + Clone> Extend<K> for FrequencyMap<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.increment(key);
        }
    }
}
