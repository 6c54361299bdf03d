use std::io::IsTerminal;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use nifti_to_dscalar::{
    BatchInput, HemispherePair, ProjectionParams, plan_batch, run_batch, write_report,
};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));
    // A second init (e.g. from tests) is not an error worth surfacing
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn params_from_args(args: &CliArgs) -> Result<ProjectionParams, AppError> {
    let inner_surfaces = args
        .inner_surfaces
        .clone()
        .map(|v| HemispherePair::from_vec("--inner_surfaces", v))
        .transpose()?;
    let outer_surfaces = args
        .outer_surfaces
        .clone()
        .map(|v| HemispherePair::from_vec("--outer_surfaces", v))
        .transpose()?;

    Ok(ProjectionParams {
        surfaces: HemispherePair::new(args.l_surface.clone(), args.r_surface.clone()),
        method: args.method.unwrap_or_default(),
        rc_method: args.rc_method,
        inner_surfaces,
        outer_surfaces,
        overwrite: args.overwrite,
        temp_dir: args.temp_dir.clone(),
        verbose: args.verbose,
    })
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    init_logging(args.verbose);

    if args.verbose {
        info!("Started at {}", chrono::Utc::now().to_rfc3339());
    }

    let params = params_from_args(&args)?;
    let input = BatchInput {
        volumes: args.nifti.clone(),
        output_names: args.output_name.clone(),
    };

    let report = if args.dry_run {
        plan_batch(&params, &input, &args.wb_command)?
    } else {
        run_batch(&params, &input, &args.wb_command)?
    };

    if let Some(path) = &args.report {
        write_report(&report, path)?;
    }

    if args.verbose {
        info!("Finished at {}", chrono::Utc::now().to_rfc3339());
    }

    if report.errors > 0 {
        error!("{} file(s) could not be projected", report.errors);
        return Err(AppError::BatchFailed {
            failed: report.errors,
        });
    }
    Ok(())
}
