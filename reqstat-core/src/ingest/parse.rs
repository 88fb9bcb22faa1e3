use crate::ingest::{Record, StaticClassifier};
use http::Method;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

// [1718000000000][GET] ... at 12,345ms ... http://host/path
static LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(\d+)\]\[(GET|POST|PUT|DELETE|HEAD|OPTIONS|PATCH)\].*?at (\d+[.,]\d+)ms.*?(http://\S+)$")
        .expect("access log pattern is valid")
});

/// Fields extracted from one access-log line, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub timestamp: i64,
    pub method: Method,
    pub elapsed: Decimal,
    pub uri: String,
}

pub fn parse_line(line: &str) -> Option<RequestLine> {
    let caps = LINE_PATTERN.captures(line)?;

    let timestamp = caps[1].parse::<i64>().ok()?;
    let method = Method::from_bytes(caps[2].as_bytes()).ok()?;
    // decimal comma is common in these logs
    let elapsed = Decimal::from_str(&caps[3].replace(',', ".")).ok()?;

    Some(RequestLine {
        timestamp,
        method,
        elapsed,
        uri: caps[4].to_string(),
    })
}

/// Turns raw lines into classified records.
#[derive(Debug, Clone, Default)]
pub struct LineParser {
    classifier: StaticClassifier,
}

impl LineParser {
    pub fn new(classifier: StaticClassifier) -> Self {
        Self { classifier }
    }

    pub fn parse(&self, line: &str, ordinal: u64) -> Option<Record> {
        let request = parse_line(line)?;
        let classification = self.classifier.classify(&request.uri);

        Some(
            Record::new(ordinal, classification, request.elapsed, request.timestamp)
                .with_request(request.method, request.uri),
        )
    }
}
