//! I/O layer: the two external capabilities a projection needs (hemisphere
//! mapping and dense-scalar merging), the `wb_command` backed implementation,
//! a dry-run implementation, and the temporary per-hemisphere metric files.
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::core::strategy::HemisphereMapping;
use crate::error::Result;
use crate::types::{Hemisphere, HemispherePair};

pub mod dry_run;
pub mod workbench;

pub use dry_run::DryRun;
pub use workbench::WbCommand;

/// One volume-to-surface mapping call for a single hemisphere.
#[derive(Debug, Clone, Copy)]
pub struct MappingJob<'a> {
    pub hemisphere: Hemisphere,
    pub volume: &'a Path,
    pub surface: &'a Path,
    /// Hemisphere metric file to write.
    pub output: &'a Path,
    pub mapping: HemisphereMapping<'a>,
}

/// Combination of the two hemisphere metrics into one dense-scalar file.
#[derive(Debug, Clone, Copy)]
pub struct MergeJob<'a> {
    pub output: &'a Path,
    pub metrics: HemispherePair<&'a Path>,
}

pub trait SurfaceMapper {
    fn map_hemisphere(&self, job: &MappingJob<'_>) -> Result<()>;
}

pub trait MetricMerger {
    fn merge(&self, job: &MergeJob<'_>) -> Result<()>;
}

impl<T: SurfaceMapper + ?Sized> SurfaceMapper for &T {
    fn map_hemisphere(&self, job: &MappingJob<'_>) -> Result<()> {
        (**self).map_hemisphere(job)
    }
}

impl<T: MetricMerger + ?Sized> MetricMerger for &T {
    fn merge(&self, job: &MergeJob<'_>) -> Result<()> {
        (**self).merge(job)
    }
}

/// Create the two transient `.func.gii` files for one volume. They are removed
/// when the returned handles are dropped.
pub fn hemisphere_metric_files(
    stem: &str,
    temp_dir: Option<&Path>,
) -> Result<HemispherePair<NamedTempFile>> {
    HemispherePair::new((), ()).try_map(|hemisphere, ()| -> Result<NamedTempFile> {
        let prefix = format!("{}_{}_", stem, hemisphere.short());
        let mut builder = tempfile::Builder::new();
        builder.prefix(&prefix).suffix(".func.gii");
        let file = match temp_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        Ok(file)
    })
}

pub fn metric_paths(files: &HemispherePair<NamedTempFile>) -> HemispherePair<PathBuf> {
    files.as_ref().map(|f| f.path().to_path_buf())
}
