use crate::ingest::Record;
use crate::stats::StatsError;
use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits kept for every ingested sample.
pub const SAMPLE_SCALE: u32 = 12;

/// Fractional digits kept for second moments (squares of samples).
const SQUARE_SCALE: u32 = SAMPLE_SCALE * 2;

/// Running statistics over elapsed-time samples.
///
/// Every sample is rounded half-up to [`SAMPLE_SCALE`] digits on the way in. Derived values that
/// need a division round half-down. Mean and variance are treated as undefined (zero) below two
/// samples.
///
/// `Clone` is a full deep copy: window carry-forward relies on a cloned accumulator never
/// observing mutations of its source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatAccumulator {
    samples: Vec<Decimal>,
    sum: Decimal,
    sum_of_squares: Decimal,
    min: Option<Decimal>,
    max: Option<Decimal>,
    min_timestamp: Option<i64>,
    max_timestamp: Option<i64>,
}

impl StatAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails with [`StatsError::SampleOverflow`] when the running sums would leave the range of
    /// [`Decimal`]. The accumulator is left unchanged in that case.
    pub fn add(&mut self, elapsed: Decimal, timestamp: i64) -> Result<(), StatsError> {
        let value = elapsed.round_dp_with_strategy(SAMPLE_SCALE, RoundingStrategy::MidpointAwayFromZero);
        let overflow = || StatsError::SampleOverflow { value };

        let sum = self.sum.checked_add(value).ok_or_else(overflow)?;
        let sum_of_squares = value
            .checked_mul(value)
            .and_then(|square| self.sum_of_squares.checked_add(square))
            .ok_or_else(overflow)?;

        self.sum = sum;
        self.sum_of_squares = sum_of_squares;
        self.samples.push(value);

        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
        self.min_timestamp = Some(self.min_timestamp.map_or(timestamp, |t| t.min(timestamp)));
        self.max_timestamp = Some(self.max_timestamp.map_or(timestamp, |t| t.max(timestamp)));

        Ok(())
    }

    pub fn add_record(&mut self, record: &Record) -> Result<(), StatsError> {
        self.add(record.elapsed, record.timestamp)
    }

    pub fn count(&self) -> u64 {
        self.samples.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn sum(&self) -> Decimal {
        self.sum
    }

    /// Samples in arrival order, already rounded.
    pub fn samples(&self) -> &[Decimal] {
        &self.samples
    }

    pub fn mean(&self) -> Decimal {
        if self.count() < 2 {
            return Decimal::ZERO;
        }
        divide_half_down(self.sum, self.count(), SAMPLE_SCALE)
    }

    /// Population variance, `E[X^2] - E[X]^2`.
    ///
    /// Products keep at most 28 significant digits. With large integer parts the last digits of
    /// `E[X^2]` at scale 24 are rounded away, far below any reported precision.
    pub fn variance(&self) -> Decimal {
        if self.count() < 2 {
            return Decimal::ZERO;
        }
        let mean = self.mean();
        let mean_of_squares = divide_half_down(self.sum_of_squares, self.count(), SQUARE_SCALE);

        // E[X]^2 <= E[X^2], which fit when the samples were added
        mean_of_squares - mean.saturating_mul(mean)
    }

    /// Nearest-rank percentile for `p` in `(0, 1]`.
    pub fn percentile(&self, p: f64) -> Decimal {
        self.percentiles(&[p])[0]
    }

    /// Several nearest-rank percentiles over a single sorted copy of the samples.
    pub fn percentiles(&self, ranks: &[f64]) -> Vec<Decimal> {
        if self.samples.is_empty() {
            return vec![Decimal::ZERO; ranks.len()];
        }

        let mut sorted = self.samples.clone();
        sorted.sort_unstable();

        ranks
            .iter()
            .map(|p| sorted[nearest_rank(*p, sorted.len())])
            .collect()
    }

    pub fn min(&self) -> Decimal {
        self.min.unwrap_or(Decimal::ZERO)
    }

    pub fn max(&self) -> Decimal {
        self.max.unwrap_or(Decimal::ZERO)
    }

    /// Requests per second over the observed timestamp span (timestamps in milliseconds).
    pub fn requests_per_second(&self) -> u64 {
        let (Some(first), Some(last)) = (self.min_timestamp, self.max_timestamp) else {
            return 0;
        };

        let span = last.saturating_sub(first);
        if span <= 0 {
            return 0;
        }

        1000 * self.count() / span as u64
    }
}

fn divide_half_down(value: Decimal, count: u64, scale: u32) -> Decimal {
    (value / Decimal::from(count)).round_dp_with_strategy(scale, RoundingStrategy::MidpointTowardZero)
}

fn nearest_rank(p: f64, len: usize) -> usize {
    let rank = (p * len as f64).ceil() as i64 - 1;
    rank.clamp(0, len as i64 - 1) as usize
}
