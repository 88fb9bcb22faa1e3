
use crate::ingest::{Classification, Record};
use rust_decimal::Decimal;

pub(crate) fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

/// Record `ordinal` with elapsed time `ordinal` ms, one second apart.
pub(crate) fn record(ordinal: u64, classification: Classification) -> Record {
    Record::new(
        ordinal,
        classification,
        Decimal::from(ordinal),
        1_000 * ordinal as i64,
    )
}
