//! Batch orchestration: validate each volume, resolve its projection strategy,
//! and drive the external mapping and merge steps in order.
//!
//! Volumes are processed one at a time in input order. Item-level problems
//! (missing input, existing output, unusable name) skip that volume; an engine
//! failure aborts the remaining steps of that volume only.
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::core::params::ProjectionParams;
use crate::core::request::{ProjectionRequest, output_path_for, volume_stem};
use crate::core::strategy::{RibbonSurfaces, pair_ribbon_surfaces};
use crate::error::{Error, ErrorKind, Result};
use crate::io::{MappingJob, MergeJob, MetricMerger, SurfaceMapper};
use crate::io::{hemisphere_metric_files, metric_paths};
use crate::types::HemispherePair;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeStatus {
    Projected,
    Skipped { reason: String },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    #[serde(flatten)]
    pub status: OutcomeStatus,
}

/// Per-file outcome log for one run
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub dry_run: bool,
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    fn record(&mut self, input: &Path, output: Option<PathBuf>, result: Result<()>) {
        let status = match result {
            Ok(()) => {
                self.processed += 1;
                OutcomeStatus::Projected
            }
            Err(e) if e.kind() == ErrorKind::ItemValidation => {
                error!("{}", e);
                self.skipped += 1;
                OutcomeStatus::Skipped {
                    reason: e.to_string(),
                }
            }
            Err(e) => {
                error!("Projection of {:?} failed: {}", input, e);
                self.errors += 1;
                OutcomeStatus::Failed {
                    reason: e.to_string(),
                }
            }
        };
        self.outcomes.push(FileOutcome {
            input: input.to_path_buf(),
            output,
            status,
        });
    }
}

/// Runs projections for a list of volumes against fixed surfaces and engines.
pub struct Orchestrator<'p, M, G> {
    params: &'p ProjectionParams,
    ribbon: Option<RibbonSurfaces>,
    mapper: M,
    merger: G,
    dry_run: bool,
}

impl<'p, M: SurfaceMapper, G: MetricMerger> Orchestrator<'p, M, G> {
    /// Validates the inner/outer surface pairing once for the whole run.
    pub fn new(params: &'p ProjectionParams, mapper: M, merger: G) -> Result<Self> {
        let ribbon = pair_ribbon_surfaces(
            params.inner_surfaces.clone(),
            params.outer_surfaces.clone(),
        )?;
        Ok(Self {
            params,
            ribbon,
            mapper,
            merger,
            dry_run: false,
        })
    }

    /// Marks the report as produced by engines that did not run anything.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn run(&self, volumes: &[PathBuf], output_names: Option<&[String]>) -> Result<BatchReport> {
        if let Some(names) = output_names {
            if names.len() != volumes.len() {
                return Err(Error::OutputNameCountMismatch {
                    volumes: volumes.len(),
                    names: names.len(),
                });
            }
        }

        let mut report = BatchReport {
            dry_run: self.dry_run,
            ..BatchReport::default()
        };

        for (i, volume) in volumes.iter().enumerate() {
            let name = output_names.map(|names| names[i].as_str());

            if !volume.is_file() {
                report.record(
                    volume,
                    None,
                    Err(Error::InputNotRegularFile {
                        path: volume.clone(),
                    }),
                );
                continue;
            }

            info!("Working on {:?} ...", volume);

            let output_path = match output_path_for(volume, name) {
                Ok(path) => path,
                Err(e) => {
                    report.record(volume, None, Err(e));
                    continue;
                }
            };

            // Checked before any engine work is requested
            if output_path.exists() && !self.params.overwrite {
                let err = Error::OutputExists {
                    path: output_path.clone(),
                };
                report.record(volume, Some(output_path), Err(err));
                continue;
            }

            let request = ProjectionRequest {
                input_volume: volume,
                surfaces: &self.params.surfaces,
                output_path,
                method: self.params.method,
                rc_method: self.params.rc_method,
                ribbon: self.ribbon.as_ref(),
            };
            let result = self.project(&request);
            report.record(volume, Some(request.output_path), result);
        }

        Ok(report)
    }

    /// Maps both hemispheres (left first) and merges them into the output.
    pub fn project(&self, request: &ProjectionRequest<'_>) -> Result<()> {
        let resolution = request.resolve();
        info!("Using {}", resolution.strategy.describe());
        for warning in &resolution.warnings {
            warn!("{}", warning);
        }

        let temp_files = hemisphere_metric_files(
            &volume_stem(request.input_volume),
            self.params.temp_dir.as_deref(),
        )?;
        let metrics = metric_paths(&temp_files);
        if self.params.verbose {
            info!(
                "Temporary surfaces: {:?}, {:?}",
                metrics.left, metrics.right
            );
        }

        for (hemisphere, surface) in request.surfaces.iter() {
            if self.params.verbose {
                info!("Working on {} hemisphere", hemisphere.short());
            }
            self.mapper.map_hemisphere(&MappingJob {
                hemisphere,
                volume: request.input_volume,
                surface,
                output: metrics.get(hemisphere),
                mapping: resolution.strategy.for_hemisphere(hemisphere),
            })?;
        }

        self.merger.merge(&MergeJob {
            output: &request.output_path,
            metrics: HemispherePair::new(metrics.left.as_path(), metrics.right.as_path()),
        })?;
        debug!("Wrote {:?}", request.output_path);

        // Dropping the handles removes the temporary metric files
        drop(temp_files);
        Ok(())
    }
}
