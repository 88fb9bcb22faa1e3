use crate::ingest::DEFAULT_STATIC_MARKERS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReqstatConfig {
    pub collect: CollectConfig,
    pub window: WindowConfig,
    pub classifier: ClassifierConfig,
    pub report: ReportConfig,
}

/// Families collected next to `ALL`, which is always on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CollectConfig {
    #[serde(rename = "static")]
    pub static_requests: bool,
    #[serde(rename = "dynamic")]
    pub dynamic_requests: bool,
    /// Per HTTP method breakdown.
    pub methods: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    /// Window width in records. Windowed statistics are off when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<u64>,

    /// Maximum number of requests to read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    /// URI substrings marking a request as a static asset.
    pub static_markers: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            static_markers: DEFAULT_STATIC_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Print the statistics table to stdout.
    pub console: bool,
    /// Write a JSON report file.
    pub json: bool,
    /// Directory receiving report files.
    pub output_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            console: true,
            json: false,
            output_dir: PathBuf::from("."),
        }
    }
}
