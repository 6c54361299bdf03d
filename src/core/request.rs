//! Per-volume work items and output naming.
use std::path::{Path, PathBuf};

use crate::core::strategy::{Resolution, RibbonSurfaces, resolve};
use crate::error::{Error, Result};
use crate::types::{HemispherePair, Method, RibbonMethod};

pub const VOLUME_EXTENSION: &str = ".nii.gz";
pub const DSCALAR_EXTENSION: &str = ".dscalar.nii";

/// Output path for a volume: `<name>.dscalar.nii` when a name is given,
/// otherwise the volume path with `.nii.gz` swapped for `.dscalar.nii`.
pub fn output_path_for(volume: &Path, name: Option<&str>) -> Result<PathBuf> {
    if let Some(name) = name {
        return Ok(PathBuf::from(format!("{name}{DSCALAR_EXTENSION}")));
    }

    let unrecognized = || Error::UnrecognizedVolumeExtension {
        path: volume.to_path_buf(),
    };
    let text = volume.to_str().ok_or_else(unrecognized)?;
    let base = text.strip_suffix(VOLUME_EXTENSION).ok_or_else(unrecognized)?;
    // "dir/.nii.gz" would become the hidden file "dir/.dscalar.nii"
    if base.is_empty() || base.ends_with(std::path::MAIN_SEPARATOR) || base.ends_with('/') {
        return Err(unrecognized());
    }
    Ok(PathBuf::from(format!("{base}{DSCALAR_EXTENSION}")))
}

/// Short label for temporary files derived from the volume's file name.
pub fn volume_stem(volume: &Path) -> String {
    let name = volume
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "volume".to_string());
    name.strip_suffix(VOLUME_EXTENSION)
        .map(str::to_string)
        .unwrap_or(name)
}

/// One unit of work: a single volume projected onto both hemispheres.
#[derive(Debug, Clone)]
pub struct ProjectionRequest<'a> {
    pub input_volume: &'a Path,
    pub surfaces: &'a HemispherePair<PathBuf>,
    pub output_path: PathBuf,
    pub method: Method,
    pub rc_method: Option<RibbonMethod>,
    pub ribbon: Option<&'a RibbonSurfaces>,
}

impl ProjectionRequest<'_> {
    pub fn resolve(&self) -> Resolution {
        resolve(self.method, self.rc_method, self.ribbon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_replaces_volume_extension() {
        assert_eq!(
            output_path_for(Path::new("a.nii.gz"), None).unwrap(),
            PathBuf::from("a.dscalar.nii")
        );
        assert_eq!(
            output_path_for(Path::new("data/sub-01.bold.nii.gz"), None).unwrap(),
            PathBuf::from("data/sub-01.bold.dscalar.nii")
        );
    }

    #[test]
    fn explicit_name_gets_extension_appended() {
        assert_eq!(
            output_path_for(Path::new("a.nii.gz"), Some("out/thickness")).unwrap(),
            PathBuf::from("out/thickness.dscalar.nii")
        );
    }

    #[test]
    fn volume_without_extension_is_rejected() {
        for bad in ["a.nii", "a.mgz", "anii.gz", "out/.nii.gz", ".nii.gz"] {
            let err = output_path_for(Path::new(bad), None).unwrap_err();
            assert!(
                matches!(err, Error::UnrecognizedVolumeExtension { .. }),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn stem_drops_directory_and_extension() {
        assert_eq!(volume_stem(Path::new("data/sub-01.nii.gz")), "sub-01");
        assert_eq!(volume_stem(Path::new("plain.nii")), "plain.nii");
    }
}
