use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::{HemispherePair, Method, RibbonMethod};

/// Projection parameters shared by every volume of a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectionParams {
    /// Surfaces the volumes are mapped onto
    pub surfaces: HemispherePair<PathBuf>,
    /// Direct mapping method; `Unspecified` resolves to trilinear
    #[serde(default)]
    pub method: Method,
    /// Ribbon-constrained method; None means weighted averaging
    #[serde(default)]
    pub rc_method: Option<RibbonMethod>,
    /// White matter surfaces, must come with `outer_surfaces`
    #[serde(default)]
    pub inner_surfaces: Option<HemispherePair<PathBuf>>,
    /// Pial surfaces, must come with `inner_surfaces`
    #[serde(default)]
    pub outer_surfaces: Option<HemispherePair<PathBuf>>,
    #[serde(default)]
    pub overwrite: bool,
    /// Directory for the temporary hemisphere metric files; system default if None
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,
    #[serde(default)]
    pub verbose: bool,
}
