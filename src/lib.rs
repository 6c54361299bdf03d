#![doc = r#"
nifti_to_dscalar — project NIfTI volumes into CIFTI surface space.

Each input volume (`.nii.gz`) is mapped onto a left and a right cortical
surface with Connectome Workbench's `wb_command -volume-to-surface-mapping`,
and the two hemisphere metrics are merged into one `.dscalar.nii` with
`wb_command -cifti-create-dense-scalar`. Hemisphere order is always L then R.

Two projection strategies exist:
- direct mapping (`trilinear`, `cubic` or `enclosing`; trilinear by default)
- ribbon-constrained mapping between inner (white matter) and outer (pial)
  surfaces, with weighted averaging by default

Requirements
------------
- `wb_command` on `PATH`, or its location passed explicitly.

Quick start
-----------
```rust,no_run
use std::path::Path;
use nifti_to_dscalar::{run_batch, BatchInput, HemispherePair, ProjectionParams};

fn main() -> nifti_to_dscalar::Result<()> {
    let params = ProjectionParams {
        surfaces: HemispherePair::new(
            "sub-01.L.midthickness.surf.gii".into(),
            "sub-01.R.midthickness.surf.gii".into(),
        ),
        ..ProjectionParams::default()
    };
    let input = BatchInput {
        volumes: vec!["sub-01_bold.nii.gz".into()],
        output_names: None,
    };

    let report = run_batch(&params, &input, Path::new("wb_command"))?;
    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Custom engines
--------------
The external steps sit behind the [`SurfaceMapper`] and [`MetricMerger`]
traits; [`run_batch_with`] accepts any implementation, which is how the
orchestration is tested without spawning processes.

Useful modules
--------------
- [`api`] — batch entry points and report output.
- [`core`] — strategy resolution, per-volume requests, orchestration.
- [`io`] — engine traits and the `wb_command` / dry-run implementations.
- [`types`] — `HemispherePair` and the method enums.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use core::batch::{BatchReport, FileOutcome, Orchestrator, OutcomeStatus};
pub use core::params::ProjectionParams;
pub use core::request::{ProjectionRequest, output_path_for};
pub use core::strategy::{
    ProjectionStrategy, Resolution, RibbonSurfaces, StrategyWarning, pair_ribbon_surfaces, resolve,
};
pub use error::{Error, ErrorKind, Result};
pub use types::{DirectMethod, Hemisphere, HemispherePair, Method, RibbonMethod};

// Engines
pub use io::{DryRun, MetricMerger, SurfaceMapper, WbCommand};

// High-level API re-exports
pub use api::{BatchInput, plan_batch, run_batch, run_batch_with, write_report};
