use crate::bus::Publisher;
use crate::ingest::{IngestError, LineParser, Record};
use crate::stats::StatsError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    /// Records handed to the publisher.
    pub published: u64,
    /// Lines that did not match the access-log format.
    pub skipped: u64,
}

/// Reads lines, publishing one record per matched line.
///
/// Ordinals count matched lines from 1. With a `limit`, reading stops right after the record
/// whose ordinal equals the limit.
pub fn ingest<R, P>(
    reader: R,
    parser: &LineParser,
    limit: Option<u64>,
    publisher: &mut P,
) -> Result<IngestSummary, IngestError>
where
    R: BufRead,
    P: Publisher<Record, Error = StatsError>,
{
    let mut summary = IngestSummary::default();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| IngestError::Read {
            line: line_no as u64 + 1,
            source,
        })?;

        let ordinal = summary.published + 1;
        let Some(record) = parser.parse(&line, ordinal) else {
            tracing::trace!(line = line_no + 1, "line skipped");
            summary.skipped += 1;
            continue;
        };

        publisher
            .publish(&record)
            .map_err(|source| IngestError::Publish { ordinal, source })?;
        summary.published += 1;

        if limit.is_some_and(|limit| ordinal >= limit) {
            tracing::debug!(limit = ordinal, "request limit reached");
            break;
        }
    }

    Ok(summary)
}

pub fn ingest_file<P>(
    path: &Path,
    parser: &LineParser,
    limit: Option<u64>,
    publisher: &mut P,
) -> Result<IngestSummary, IngestError>
where
    P: Publisher<Record, Error = StatsError>,
{
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    ingest(BufReader::new(file), parser, limit, publisher)
}
