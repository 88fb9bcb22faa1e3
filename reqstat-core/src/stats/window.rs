//! Cumulative ordinal windows.
//!
//! Records are grouped into fixed-width windows by ordinal: with a step of 100, ordinals 1 to 100
//! land in window 0, 101 to 200 in window 1, and so on. Each window is labelled by its last
//! ordinal (its threshold), so the keys read `ALL_100`, `ALL_200`, ...
//!
//! A window is not an isolated bucket. The first time a window is touched its accumulator is
//! cloned from the previous window, so `ALL_200` describes every record from ordinal 1 to 200.
//! Reading the windows in order gives the statistics "as of" each threshold.
//!
//! ```text
//! ordinal:   1 .. 100 | 101 .. 200 | 201 .. 300
//! window:        0    |     1      |     2
//! ALL_100:   [w0]
//! ALL_200:   [w0 + w1]             <- clone of ALL_100, then extended
//! ALL_300:   [w0 + w1 + w2]        <- clone of ALL_200, then extended
//! ```

use crate::ingest::{Classification, Record};
use crate::stats::{AccumulatorKey, AccumulatorRegistry, SlotId, StatAccumulator, StatsError};
use std::num::NonZeroU64;

pub struct WindowingPolicy {
    step: NonZeroU64,
    limit: Option<u64>,
    families: Vec<WindowFamily>,
}

/// Window accumulators of one classification, indexed by window number.
struct WindowFamily {
    classification: Classification,
    arena: Vec<SlotId>,
}

impl WindowingPolicy {
    /// Creates a policy tracking the `ALL` family.
    ///
    /// `limit` is compared against the zero-based ordinal; later records are ignored.
    pub fn new(step: NonZeroU64, limit: Option<u64>) -> Self {
        Self {
            step,
            limit,
            families: vec![WindowFamily::new(Classification::All)],
        }
    }

    pub fn with_family(mut self, classification: Classification) -> Self {
        if self.family(classification).is_none() {
            self.families.push(WindowFamily::new(classification));
        }
        self
    }

    pub fn step(&self) -> u64 {
        self.step.get()
    }

    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    /// Label of window `batch`: the last ordinal it covers.
    pub fn threshold(&self, batch: u64) -> u64 {
        (batch + 1) * self.step.get()
    }

    /// Routes `record` into the current window of every family that accepts it.
    pub fn observe(
        &mut self,
        registry: &mut AccumulatorRegistry,
        record: &Record,
    ) -> Result<(), StatsError> {
        let index = record.ordinal.checked_sub(1).ok_or(StatsError::ZeroOrdinal)?;

        if self.limit.is_some_and(|limit| index > limit) {
            tracing::trace!(ordinal = record.ordinal, "record past window limit ignored");
            return Ok(());
        }

        let batch = index / self.step.get();
        let step = self.step;

        for family in &mut self.families {
            if !family.classification.matches(record.classification) {
                continue;
            }

            let slot = family.advance(registry, step, record.ordinal, batch)?;
            registry[slot].add_record(record)?;
        }

        Ok(())
    }

    /// Returns window `batch` of `classification`, materializing it from window `batch - 1`
    /// when it does not exist yet.
    ///
    /// Unlike [`observe`](Self::observe) this never fills gaps: asking for a window whose
    /// predecessor is missing fails with [`StatsError::MissingPriorWindow`].
    pub fn materialize(
        &mut self,
        registry: &mut AccumulatorRegistry,
        classification: Classification,
        batch: u64,
    ) -> Result<SlotId, StatsError> {
        let step = self.step;
        let family = self
            .families
            .iter_mut()
            .find(|f| f.classification == classification)
            .ok_or(StatsError::UnknownFamily(classification))?;

        family.window(registry, step, batch)
    }

    /// Highest window materialized so far for `classification`.
    pub fn current_batch(&self, classification: Classification) -> Option<u64> {
        self.family(classification).and_then(WindowFamily::current_batch)
    }

    fn family(&self, classification: Classification) -> Option<&WindowFamily> {
        self.families
            .iter()
            .find(|f| f.classification == classification)
    }
}

impl WindowFamily {
    fn new(classification: Classification) -> Self {
        Self {
            classification,
            arena: Vec::new(),
        }
    }

    fn current_batch(&self) -> Option<u64> {
        (self.arena.len() as u64).checked_sub(1)
    }

    /// Moves the family forward to `batch`, carrying state through any windows this family
    /// saw no records in.
    ///
    /// `ALL` sees every record, so a window skipped there means the ordinals jumped. It is
    /// never filled and fails with [`StatsError::MissingPriorWindow`].
    fn advance(
        &mut self,
        registry: &mut AccumulatorRegistry,
        step: NonZeroU64,
        ordinal: u64,
        batch: u64,
    ) -> Result<SlotId, StatsError> {
        if let Some(current) = self.current_batch() {
            if batch < current {
                return Err(StatsError::OrdinalRegression {
                    family: self.classification,
                    ordinal,
                    batch,
                    current,
                });
            }
        }

        if self.classification != Classification::All {
            for skipped in self.arena.len() as u64..batch {
                self.window(registry, step, skipped)?;
            }
        }

        self.window(registry, step, batch)
    }

    fn window(
        &mut self,
        registry: &mut AccumulatorRegistry,
        step: NonZeroU64,
        batch: u64,
    ) -> Result<SlotId, StatsError> {
        if let Some(slot) = self.arena.get(batch as usize) {
            return Ok(*slot);
        }

        let accumulator = match batch.checked_sub(1) {
            None => StatAccumulator::new(),
            Some(prior) => {
                let Some(prior) = self.arena.get(prior as usize) else {
                    return Err(StatsError::MissingPriorWindow {
                        family: self.classification,
                        batch,
                    });
                };
                registry[*prior].clone()
            }
        };

        let threshold = (batch + 1) * step.get();
        let slot = registry.rebind(
            AccumulatorKey::window(self.classification, threshold),
            accumulator,
        );
        self.arena.push(slot);

        tracing::debug!(
            family = %self.classification,
            batch,
            threshold,
            "window materialized"
        );

        Ok(slot)
    }
}
