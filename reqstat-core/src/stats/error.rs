use crate::ingest::Classification;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    // Windowing invariants
    #[error("window {batch} of {family} requested before window {} was materialized", .batch.saturating_sub(1))]
    MissingPriorWindow { family: Classification, batch: u64 },

    #[error(
        "record {ordinal} falls in window {batch} but {family} already advanced to window {current}"
    )]
    OrdinalRegression {
        family: Classification,
        ordinal: u64,
        batch: u64,
        current: u64,
    },

    #[error("record ordinals are 1-based, got 0")]
    ZeroOrdinal,

    #[error("no window family is configured for {0}")]
    UnknownFamily(Classification),

    // Arithmetic
    #[error("sample {value} is too large to accumulate")]
    SampleOverflow { value: Decimal },

    // Lifecycle
    #[error("accumulator registry is still borrowed by an active binding")]
    RegistryInUse,
}
