mod parse_tests;

use crate::bus::Publisher;
use crate::ingest::Record;
use crate::stats::StatsError;

/// Keeps every published record; optionally rejects one ordinal.
#[derive(Default)]
pub(crate) struct VecPublisher {
    pub records: Vec<Record>,
    pub reject: Option<u64>,
}

impl Publisher<Record> for VecPublisher {
    type Error = StatsError;

    fn publish(&mut self, record: &Record) -> Result<(), StatsError> {
        if self.reject == Some(record.ordinal) {
            return Err(StatsError::ZeroOrdinal);
        }
        self.records.push(record.clone());
        Ok(())
    }
}
