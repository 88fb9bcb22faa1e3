use reqstat_core::cli::collect::collect_file;
use reqstat_core::conf::ReqstatConfig;
use reqstat_core::ingest::IngestSummary;
use reqstat_core::stats::CollectedStats;
use std::path::PathBuf;

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

/// Collects `file` from the fixtures directory with a config shaped by `configure`.
pub fn run_fixture(
    file: &str,
    configure: impl FnOnce(&mut ReqstatConfig),
) -> (CollectedStats, IngestSummary) {
    let mut config = ReqstatConfig::default();
    configure(&mut config);

    collect_file(&fixture_path(file), &config).expect("fixture collection failed")
}
