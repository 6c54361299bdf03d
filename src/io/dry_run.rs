use std::path::PathBuf;

use tracing::info;

use crate::error::Result;
use crate::io::workbench::{DEFAULT_PROGRAM, mapping_args, merge_args, render_command};
use crate::io::{MappingJob, MergeJob, MetricMerger, SurfaceMapper};

/// Logs the command lines `WbCommand` would run, and runs nothing.
#[derive(Debug, Clone)]
pub struct DryRun {
    program: PathBuf,
}

impl Default for DryRun {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl DryRun {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn program(&self) -> String {
        self.program.display().to_string()
    }
}

impl SurfaceMapper for DryRun {
    fn map_hemisphere(&self, job: &MappingJob<'_>) -> Result<()> {
        info!(
            "[dry run] {}",
            render_command(&self.program(), &mapping_args(job))
        );
        Ok(())
    }
}

impl MetricMerger for DryRun {
    fn merge(&self, job: &MergeJob<'_>) -> Result<()> {
        info!(
            "[dry run] {}",
            render_command(&self.program(), &merge_args(job))
        );
        Ok(())
    }
}
