//! High-level library API: run a whole batch with the real `wb_command`
//! engine, a dry-run engine, or any caller-supplied engine, and persist the
//! resulting report. Prefer these entrypoints over driving `core::batch`
//! directly.
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::batch::{BatchReport, Orchestrator};
use crate::core::params::ProjectionParams;
use crate::error::Result;
use crate::io::{DryRun, MetricMerger, SurfaceMapper, WbCommand};

/// Volumes to project and, optionally, one output base name per volume.
#[derive(Debug, Clone, Default)]
pub struct BatchInput {
    pub volumes: Vec<PathBuf>,
    pub output_names: Option<Vec<String>>,
}

/// Project every volume using `wb_command` found at `program`.
pub fn run_batch(
    params: &ProjectionParams,
    input: &BatchInput,
    program: &Path,
) -> Result<BatchReport> {
    let engine = WbCommand::new(program);
    run_batch_with(params, input, &engine, &engine, false)
}

/// Log the engine invocations for every volume without running them.
pub fn plan_batch(
    params: &ProjectionParams,
    input: &BatchInput,
    program: &Path,
) -> Result<BatchReport> {
    let engine = DryRun::new(program);
    run_batch_with(params, input, &engine, &engine, true)
}

/// Project every volume with caller-supplied engines.
pub fn run_batch_with<M: SurfaceMapper, G: MetricMerger>(
    params: &ProjectionParams,
    input: &BatchInput,
    mapper: M,
    merger: G,
    dry_run: bool,
) -> Result<BatchReport> {
    let orchestrator = Orchestrator::new(params, mapper, merger)?.dry_run(dry_run);
    let report = orchestrator.run(&input.volumes, input.output_names.as_deref())?;

    info!("Batch processing complete!");
    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);
    Ok(report)
}

/// Write the report as pretty-printed JSON.
pub fn write_report(report: &BatchReport, path: &Path) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, report)?;
    info!("Report written to {:?}", path);
    Ok(())
}
