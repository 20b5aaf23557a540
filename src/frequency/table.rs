// FrequencyTable: an ordered (key, count) mapping, highest count first.
//
// Counts are accumulated in discovery order, then stably sorted by count
// descending. Ties therefore keep the order in which keys were first seen.

use std::collections::HashMap;
use std::hash::Hash;

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<K> {
    entries: Vec<(K, usize)>,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K> FrequencyTable<K> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Entries in descending count order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(key, count)| (key, *count))
    }

    /// The first `n` entries (all of them if `n` exceeds the table size).
    pub fn top(&self, n: usize) -> &[(K, usize)] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn as_slice(&self) -> &[(K, usize)] {
        &self.entries
    }
}

impl<K: Eq> FrequencyTable<K> {
    pub fn get(&self, key: &K) -> Option<usize> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, count)| *count)
    }
}

/// Accumulates counts while remembering first-seen order.
pub(crate) struct Tally<K> {
    slots: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K: Eq + Hash + Clone> Tally<K> {
    pub(crate) fn new() -> Self {
        Self {
            slots: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, key: K) {
        match self.slots.get(&key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.slots.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    pub(crate) fn finish(self) -> FrequencyTable<K> {
        let mut entries = self.entries;
        // sort_by is stable: equal counts stay in discovery order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        FrequencyTable { entries }
    }
}

/// Serialized as a list of `{"key": ..., "count": ...}` objects so that
/// non-string keys (tuples) and the ordering both survive JSON.
impl<K: Serialize> Serialize for FrequencyTable<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Entry<'a, T> {
            key: &'a T,
            count: usize,
        }

        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for (key, count) in &self.entries {
            seq.serialize_element(&Entry { key, count: *count })?;
        }
        seq.end()
    }
}
