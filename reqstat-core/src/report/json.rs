use crate::ingest::Classification;
use crate::report::{ReportError, StatRow};
use crate::stats::{AccumulatorRegistry, CollectedStats, MinuteBuckets};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub generated_at: DateTime<Utc>,
    pub published: u64,
    pub statistics: StatisticsSection,
    pub minutes: Vec<MinuteRow>,
}

#[derive(Debug, Serialize)]
pub struct StatisticsSection {
    pub all: Vec<StatRow>,
    #[serde(rename = "static")]
    pub static_requests: Vec<StatRow>,
    #[serde(rename = "dynamic")]
    pub dynamic_requests: Vec<StatRow>,
    pub methods: Vec<StatRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinuteRow {
    /// `YYYY-MM-DD HH:MM`, UTC
    pub minute: String,
    pub requests: u64,
}

impl JsonReport {
    pub fn new(stats: &CollectedStats, generated_at: DateTime<Utc>) -> Self {
        let registry = &stats.registry;

        Self {
            generated_at,
            published: stats.published,
            statistics: StatisticsSection {
                all: rows(registry, Classification::All),
                static_requests: rows(registry, Classification::Static),
                dynamic_requests: rows(registry, Classification::Dynamic),
                methods: rows(registry, Classification::Generic),
            },
            minutes: minute_rows(&stats.minutes),
        }
    }
}

fn rows(registry: &AccumulatorRegistry, classification: Classification) -> Vec<StatRow> {
    registry
        .by_classification(classification)
        .map(|(key, stats)| StatRow::new(key, stats))
        .collect()
}

fn minute_rows(minutes: &MinuteBuckets) -> Vec<MinuteRow> {
    minutes
        .iter()
        .map(|(minute, requests)| MinuteRow {
            minute: format_minute(minute),
            requests,
        })
        .collect()
}

pub fn format_minute(epoch_seconds: i64) -> String {
    DateTime::from_timestamp(epoch_seconds, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| epoch_seconds.to_string())
}

/// Writes `output-<unix millis>.json` into `dir` and returns its path.
pub fn write_json_report(stats: &CollectedStats, dir: &Path) -> Result<PathBuf, ReportError> {
    let now = Utc::now();
    let path = dir.join(format!("output-{}.json", now.timestamp_millis()));

    write_json_report_to(&JsonReport::new(stats, now), &path)?;
    Ok(path)
}

pub fn write_json_report_to(report: &JsonReport, path: &Path) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(report)?;

    fs::write(path, json).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
