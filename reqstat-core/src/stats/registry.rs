use crate::ingest::Classification;
use crate::stats::{AccumulatorKey, StatAccumulator};
use ahash::AHashMap;
use std::ops::{Index, IndexMut};

/// Position of an entry inside an [`AccumulatorRegistry`].
///
/// Entries are never removed, so a slot stays valid for the life of the registry that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(usize);

/// Insertion-ordered map from key to accumulator.
#[derive(Debug, Default)]
pub struct AccumulatorRegistry {
    entries: Vec<(AccumulatorKey, StatAccumulator)>,
    index: AHashMap<AccumulatorKey, SlotId>,
}

impl AccumulatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the existing slot for `key`, or inserts `factory()` at the end.
    pub fn get_or_create<F>(&mut self, key: AccumulatorKey, factory: F) -> SlotId
    where
        F: FnOnce() -> StatAccumulator,
    {
        if let Some(slot) = self.index.get(&key) {
            return *slot;
        }
        self.push(key, factory())
    }

    /// Binds `accumulator` to `key`, replacing any previous value in place.
    ///
    /// A replaced entry keeps its original position in iteration order.
    pub fn rebind(&mut self, key: AccumulatorKey, accumulator: StatAccumulator) -> SlotId {
        match self.index.get(&key) {
            Some(slot) => {
                self.entries[slot.0].1 = accumulator;
                *slot
            }
            None => self.push(key, accumulator),
        }
    }

    fn push(&mut self, key: AccumulatorKey, accumulator: StatAccumulator) -> SlotId {
        let slot = SlotId(self.entries.len());
        self.index.insert(key.clone(), slot);
        self.entries.push((key, accumulator));
        slot
    }

    pub fn slot(&self, key: &AccumulatorKey) -> Option<SlotId> {
        self.index.get(key).copied()
    }

    pub fn get(&self, key: &AccumulatorKey) -> Option<&StatAccumulator> {
        self.slot(key).map(|slot| &self[slot])
    }

    pub fn key(&self, slot: SlotId) -> &AccumulatorKey {
        &self.entries[slot.0].0
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AccumulatorKey, &StatAccumulator)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Entries whose key carries `classification`, in insertion order.
    pub fn by_classification(
        &self,
        classification: Classification,
    ) -> impl Iterator<Item = (&AccumulatorKey, &StatAccumulator)> {
        self.iter()
            .filter(move |(key, _)| key.classification == classification)
    }
}

impl Index<SlotId> for AccumulatorRegistry {
    type Output = StatAccumulator;

    fn index(&self, slot: SlotId) -> &StatAccumulator {
        &self.entries[slot.0].1
    }
}

impl IndexMut<SlotId> for AccumulatorRegistry {
    fn index_mut(&mut self, slot: SlotId) -> &mut StatAccumulator {
        &mut self.entries[slot.0].1
    }
}
