mod console_tests;

use crate::bus::Publisher;
use crate::ingest::{Classification, Record};
use crate::stats::{CollectPlan, CollectedStats, Collector};
use rust_decimal::Decimal;

pub(crate) fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

/// Two static requests (10ms, 20ms) two seconds apart, plus one dynamic request (40ms).
pub(crate) fn sample_stats(plan: &CollectPlan) -> CollectedStats {
    let mut collector = Collector::new(plan);
    for record in [
        Record::new(1, Classification::Static, dec("10"), 1_718_000_000_000),
        Record::new(2, Classification::Static, dec("20"), 1_718_000_002_000),
        Record::new(3, Classification::Dynamic, dec("40"), 1_718_000_062_000),
    ] {
        collector.publish(&record).unwrap();
    }
    collector.finish().unwrap()
}
