use std::collections::BTreeMap;

/// Request counts per wall-clock minute.
///
/// Keys are epoch seconds truncated to the start of the minute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinuteBuckets {
    counts: BTreeMap<i64, u64>,
}

impl MinuteBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, timestamp_ms: i64) {
        let minute = timestamp_ms.div_euclid(60_000) * 60;
        *self.counts.entry(minute).or_insert(0) += 1;
    }

    pub fn get(&self, minute: i64) -> u64 {
        self.counts.get(&minute).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(minute, requests)` in ascending minute order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, u64)> + '_ {
        self.counts.iter().map(|(m, c)| (*m, *c))
    }
}
