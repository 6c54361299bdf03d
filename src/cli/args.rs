use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use nifti_to_dscalar::{Method, RibbonMethod};

#[derive(Parser, Debug)]
#[command(
    name = "nifti_to_dscalar",
    version,
    about = "Easily project .nii.gz files into surface space.\nHemisphere order is always L->R."
)]
pub struct CliArgs {
    /// Left surface to map onto
    #[arg(value_name = "L_SURFACE")]
    pub l_surface: PathBuf,

    /// Right surface to map onto
    #[arg(value_name = "R_SURFACE")]
    pub r_surface: PathBuf,

    /// Input NIFTI file(s)
    #[arg(value_name = "NIFTI", required = true, num_args = 1..)]
    pub nifti: Vec<PathBuf>,

    /// If set, will overwrite output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    /// Output name (without .dscalar.nii).
    /// Must be same length as nifti input, if provided.
    #[arg(short = 'o', long = "output_name", num_args = 1..)]
    pub output_name: Option<Vec<String>>,

    /// Method to use; use 'enclosing' for labels.
    /// Ignored with ribbon-constrained mapping, use --rc_method. Default: trilinear
    #[arg(short, long, value_enum)]
    pub method: Option<Method>,

    /// Method to use for ribbon-constrained mapping. Default: weighted_avg
    #[arg(long = "rc_method", value_enum)]
    pub rc_method: Option<RibbonMethod>,

    /// WM surfaces to use ribbon enclosed projection (L R).
    /// Must be used with --outer_surfaces. Short form: -wm
    #[arg(long = "inner_surfaces", num_args = 2, value_names = ["SURF_L", "SURF_R"])]
    pub inner_surfaces: Option<Vec<PathBuf>>,

    /// Pial surfaces to use ribbon enclosed projection (L R).
    /// Must be used with --inner_surfaces. Short form: -pial
    #[arg(long = "outer_surfaces", num_args = 2, value_names = ["SURF_L", "SURF_R"])]
    pub outer_surfaces: Option<Vec<PathBuf>>,

    /// Log timestamps, temporary files and per-hemisphere progress
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Path of the Connectome Workbench command line tool
    #[arg(long = "wb_command", env = "WB_COMMAND", default_value = "wb_command")]
    pub wb_command: PathBuf,

    /// Directory for temporary hemisphere metric files
    #[arg(long = "temp_dir")]
    pub temp_dir: Option<PathBuf>,

    /// Print the wb_command invocations without running them
    #[arg(long = "dry_run", default_value_t = false)]
    pub dry_run: bool,

    /// Write a JSON report of every file's outcome to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

/// Rewrite the single-dash long forms `-wm` and `-pial`, which clap cannot
/// express as short flags, into their `--` equivalents. Everything after a
/// `--` terminator is left alone.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut terminated = false;
    args.into_iter()
        .map(|arg| {
            if terminated {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    terminated = true;
                    arg
                }
                Some("-wm") => OsString::from("--inner_surfaces"),
                Some("-pial") => OsString::from("--outer_surfaces"),
                _ => arg,
            }
        })
        .collect()
}

impl CliArgs {
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        let argv = std::iter::once("nifti_to_dscalar")
            .chain(args.iter().copied())
            .map(OsString::from);
        CliArgs::try_parse_from(normalize_args(argv))
    }

    #[test]
    fn positional_surfaces_and_volumes() {
        let args = parse(&["lh.gii", "rh.gii", "a.nii.gz", "b.nii.gz"]).unwrap();
        assert_eq!(args.l_surface, PathBuf::from("lh.gii"));
        assert_eq!(args.r_surface, PathBuf::from("rh.gii"));
        assert_eq!(args.nifti.len(), 2);
        assert_eq!(args.method, None);
        assert_eq!(args.rc_method, None);
        assert!(!args.overwrite);
    }

    #[test]
    fn at_least_one_volume_is_required() {
        assert!(parse(&["lh.gii", "rh.gii"]).is_err());
    }

    #[test]
    fn short_ribbon_flags_take_two_surfaces() {
        let args = parse(&[
            "lh.gii", "rh.gii", "a.nii.gz", "-wm", "lh.white", "rh.white", "-pial", "lh.pial",
            "rh.pial", "--rc_method", "weighted_avg",
        ])
        .unwrap();
        assert_eq!(
            args.inner_surfaces,
            Some(vec![PathBuf::from("lh.white"), PathBuf::from("rh.white")])
        );
        assert_eq!(
            args.outer_surfaces,
            Some(vec![PathBuf::from("lh.pial"), PathBuf::from("rh.pial")])
        );
        assert_eq!(args.rc_method, Some(RibbonMethod::WeightedAvg));
    }

    #[test]
    fn tokens_after_terminator_are_not_rewritten() {
        let argv = ["prog", "-wm", "a", "b", "--", "-pial", "-wm"].map(OsString::from);
        assert_eq!(
            normalize_args(argv),
            ["prog", "--inner_surfaces", "a", "b", "--", "-pial", "-wm"].map(OsString::from)
        );

        let args = parse(&["lh.gii", "rh.gii", "--", "-wm"]).unwrap();
        assert_eq!(args.nifti, vec![PathBuf::from("-wm")]);
        assert_eq!(args.inner_surfaces, None);
    }

    #[test]
    fn method_values_are_restricted() {
        let args = parse(&["lh.gii", "rh.gii", "a.nii.gz", "-m", "enclosing"]).unwrap();
        assert_eq!(args.method, Some(Method::Enclosing));
        assert!(parse(&["lh.gii", "rh.gii", "a.nii.gz", "-m", "weighted_avg"]).is_err());
        assert!(parse(&["lh.gii", "rh.gii", "a.nii.gz", "-m", "unspecified"]).is_err());
    }

    #[test]
    fn output_names_are_collected() {
        let args = parse(&["lh.gii", "rh.gii", "a.nii.gz", "b.nii.gz", "-o", "x", "y"]).unwrap();
        assert_eq!(args.output_name, Some(vec!["x".to_string(), "y".to_string()]));
    }
}
