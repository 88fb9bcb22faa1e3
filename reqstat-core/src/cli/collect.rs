use crate::conf::{ReqstatConfig, lower_config, resolve_config, validate_config};
use crate::ingest::{IngestSummary, ingest_file};
use crate::report::{render_console, write_json_report};
use crate::stats::{CollectedStats, Collector};
use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone, Default)]
pub struct CollectArgs {
    /// Input log file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Amount of requests to read
    #[arg(short = 't', long = "to")]
    pub limit: Option<u64>,

    /// Window width (in requests) for cumulative windowed statistics
    #[arg(short, long)]
    pub step: Option<u64>,

    /// Collect statistics for static assets
    #[arg(long = "static")]
    pub collect_static: bool,

    /// Collect statistics for dynamic pages
    #[arg(long = "dynamic")]
    pub collect_dynamic: bool,

    /// Collect per HTTP method statistics
    #[arg(long)]
    pub methods: bool,

    /// Save statistics to a JSON report file
    #[arg(short = 'e', long)]
    pub json: bool,

    /// Directory for report files
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Do not print the statistics table
    #[arg(long)]
    pub no_console: bool,

    /// Path to a reqstat.toml config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl CollectArgs {
    /// Command-line flags win over the config file.
    pub fn apply(&self, config: &mut ReqstatConfig) {
        config.collect.static_requests |= self.collect_static;
        config.collect.dynamic_requests |= self.collect_dynamic;
        config.collect.methods |= self.methods;

        if self.step.is_some() {
            config.window.step = self.step;
        }
        if self.limit.is_some() {
            config.window.limit = self.limit;
        }

        config.report.json |= self.json;
        if self.no_console {
            config.report.console = false;
        }
        if let Some(dir) = &self.output_dir {
            config.report.output_dir = dir.clone();
        }
    }
}

pub fn run_collect(args: CollectArgs) -> Result<()> {
    let mut config =
        resolve_config(args.config.as_deref()).context("failed to load configuration")?;
    args.apply(&mut config);
    validate_config(&config).context("invalid configuration")?;

    tracing::info!(
        file = %args.file.display(),
        step = ?config.window.step,
        limit = ?config.window.limit,
        "starting request stats collector"
    );

    let (stats, summary) = collect_file(&args.file, &config)?;

    tracing::info!(
        published = summary.published,
        skipped = summary.skipped,
        accumulators = stats.registry.len(),
        "request stats collected"
    );

    if config.report.console {
        let color = io::stdout().is_terminal();
        print!("{}", render_console(&stats.registry, color));
    }

    if config.report.json {
        let path = write_json_report(&stats, &config.report.output_dir)?;
        tracing::info!(path = %path.display(), "request stats saved");
    }

    Ok(())
}

/// Runs one full collection over `path` with an already validated config.
pub fn collect_file(path: &Path, config: &ReqstatConfig) -> Result<(CollectedStats, IngestSummary)> {
    let (plan, parser) = lower_config(config);

    tracing::debug!(
        collect_static = plan.collect_static,
        collect_dynamic = plan.collect_dynamic,
        collect_methods = plan.collect_methods,
        step = ?config.window.step,
        limit = ?config.window.limit,
        "collection plan"
    );

    let mut collector = Collector::new(&plan);
    let summary = ingest_file(path, &parser, config.window.limit, &mut collector)
        .with_context(|| format!("failed to collect stats from {}", path.display()))?;

    let stats = collector.finish()?;
    Ok((stats, summary))
}
