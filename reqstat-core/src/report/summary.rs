use crate::stats::{AccumulatorKey, StatAccumulator};
use rust_decimal::Decimal;
use serde::Serialize;

pub const PERCENTILES: [f64; 3] = [0.90, 0.95, 0.99];

/// Every reported figure for one accumulator, computed once.
///
/// Decimals serialize as strings to keep their precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatRow {
    pub kind: String,
    pub total: u64,
    pub total_time: Decimal,
    pub avg_time: Decimal,
    pub variance: Decimal,
    pub p90: Decimal,
    pub p95: Decimal,
    pub p99: Decimal,
    pub min: Decimal,
    pub max: Decimal,
    pub rps: u64,
}

impl StatRow {
    pub fn new(key: &AccumulatorKey, stats: &StatAccumulator) -> Self {
        // one value per entry of PERCENTILES
        let ranks = stats.percentiles(&PERCENTILES);

        Self {
            kind: key.to_string(),
            total: stats.count(),
            total_time: stats.sum(),
            avg_time: stats.mean(),
            variance: stats.variance(),
            p90: ranks[0],
            p95: ranks[1],
            p99: ranks[2],
            min: stats.min(),
            max: stats.max(),
            rps: stats.requests_per_second(),
        }
    }
}
