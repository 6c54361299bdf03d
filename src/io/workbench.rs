use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::core::strategy::HemisphereMapping;
use crate::error::{Error, Result};
use crate::io::{MappingJob, MergeJob, MetricMerger, SurfaceMapper};

pub const DEFAULT_PROGRAM: &str = "wb_command";

/// Arguments for `-volume-to-surface-mapping`, without the program name.
pub fn mapping_args(job: &MappingJob<'_>) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "-volume-to-surface-mapping".into(),
        job.volume.into(),
        job.surface.into(),
        job.output.into(),
    ];
    match job.mapping {
        HemisphereMapping::Direct(method) => args.push(method.mapping_flag().into()),
        HemisphereMapping::Ribbon {
            inner,
            outer,
            interpolate,
        } => {
            args.push("-ribbon-constrained".into());
            args.push(inner.into());
            args.push(outer.into());
            // Weighted averaging is the engine default and takes no flag
            if let Some(method) = interpolate {
                args.push("-interpolate".into());
                args.push(method.interpolate_value().into());
            }
        }
    }
    args
}

/// Arguments for `-cifti-create-dense-scalar`; left metric is always passed first.
pub fn merge_args(job: &MergeJob<'_>) -> Vec<OsString> {
    vec![
        "-cifti-create-dense-scalar".into(),
        job.output.into(),
        "-left-metric".into(),
        job.metrics.left.into(),
        "-right-metric".into(),
        job.metrics.right.into(),
    ]
}

/// Runs the Connectome Workbench command line tool as a blocking child process.
#[derive(Debug, Clone)]
pub struct WbCommand {
    program: PathBuf,
}

impl Default for WbCommand {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl WbCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &std::path::Path {
        &self.program
    }

    fn run(&self, step: String, args: Vec<OsString>) -> Result<()> {
        let program = self.program.display().to_string();
        debug!("Running: {}", render_command(&program, &args));

        let status = Command::new(&self.program)
            .args(&args)
            .status()
            .map_err(|source| Error::Spawn {
                program: program.clone(),
                step: step.clone(),
                source,
            })?;

        if !status.success() {
            return Err(Error::EngineFailed {
                program,
                step,
                status,
            });
        }
        Ok(())
    }
}

impl SurfaceMapper for WbCommand {
    fn map_hemisphere(&self, job: &MappingJob<'_>) -> Result<()> {
        self.run(
            format!("{} hemisphere mapping", job.hemisphere),
            mapping_args(job),
        )
    }
}

impl MetricMerger for WbCommand {
    fn merge(&self, job: &MergeJob<'_>) -> Result<()> {
        self.run("dense scalar creation".to_string(), merge_args(job))
    }
}

/// Shell-like rendering of a command line, for logs only.
pub fn render_command(program: &str, args: &[OsString]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::types::{DirectMethod, Hemisphere, HemispherePair};

    fn strings(args: Vec<OsString>) -> Vec<String> {
        args.into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn direct_mapping_appends_method_flag() {
        let job = MappingJob {
            hemisphere: Hemisphere::Left,
            volume: Path::new("sub-01_bold.nii.gz"),
            surface: Path::new("lh.midthickness.surf.gii"),
            output: Path::new("/tmp/l.func.gii"),
            mapping: HemisphereMapping::Direct(DirectMethod::Enclosing),
        };
        assert_eq!(
            strings(mapping_args(&job)),
            vec![
                "-volume-to-surface-mapping",
                "sub-01_bold.nii.gz",
                "lh.midthickness.surf.gii",
                "/tmp/l.func.gii",
                "-enclosing",
            ]
        );
    }

    #[test]
    fn ribbon_mapping_orders_inner_before_outer() {
        let job = MappingJob {
            hemisphere: Hemisphere::Right,
            volume: Path::new("t1.nii.gz"),
            surface: Path::new("rh.mid"),
            output: Path::new("r.func.gii"),
            mapping: HemisphereMapping::Ribbon {
                inner: Path::new("rh.white"),
                outer: Path::new("rh.pial"),
                interpolate: None,
            },
        };
        assert_eq!(
            strings(mapping_args(&job)),
            vec![
                "-volume-to-surface-mapping",
                "t1.nii.gz",
                "rh.mid",
                "r.func.gii",
                "-ribbon-constrained",
                "rh.white",
                "rh.pial",
            ]
        );
    }

    #[test]
    fn ribbon_interpolation_is_separate_arguments() {
        let job = MappingJob {
            hemisphere: Hemisphere::Left,
            volume: Path::new("t1.nii.gz"),
            surface: Path::new("lh.mid"),
            output: Path::new("l.func.gii"),
            mapping: HemisphereMapping::Ribbon {
                inner: Path::new("lh.white"),
                outer: Path::new("lh.pial"),
                interpolate: Some(DirectMethod::Cubic),
            },
        };
        let args = strings(mapping_args(&job));
        assert_eq!(&args[args.len() - 2..], ["-interpolate", "CUBIC"]);
    }

    #[test]
    fn merge_passes_left_metric_first() {
        let job = MergeJob {
            output: Path::new("t1.dscalar.nii"),
            metrics: HemispherePair::new(Path::new("l.func.gii"), Path::new("r.func.gii")),
        };
        assert_eq!(
            strings(merge_args(&job)),
            vec![
                "-cifti-create-dense-scalar",
                "t1.dscalar.nii",
                "-left-metric",
                "l.func.gii",
                "-right-metric",
                "r.func.gii",
            ]
        );
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let engine = WbCommand::new("/nonexistent/wb_command_for_tests");
        let job = MergeJob {
            output: Path::new("out.dscalar.nii"),
            metrics: HemispherePair::new(Path::new("l"), Path::new("r")),
        };
        let err = engine.merge(&job).unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_an_engine_failure() {
        let engine = WbCommand::new("false");
        let job = MergeJob {
            output: Path::new("out.dscalar.nii"),
            metrics: HemispherePair::new(Path::new("l"), Path::new("r")),
        };
        let err = engine.merge(&job).unwrap_err();
        assert!(matches!(err, Error::EngineFailed { .. }));
        assert_eq!(err.kind(), crate::error::ErrorKind::Execution);
    }
}
