//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Variants fall into the classes reported by [`Error::kind`]: whole-run
//! configuration problems, per-item validation problems, and failures of the
//! external engine.
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    /// Aborts the whole run before any volume is touched.
    Configuration,
    /// Skips one volume; the batch continues.
    ItemValidation,
    /// An external invocation failed for one volume.
    Execution,
    Io,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("If one of inner/outer surfaces is provided, both must be (got {provided} only)")]
    UnpairedRibbonSurfaces { provided: &'static str },

    #[error("Length of volume/name inputs does not match: {volumes} volume(s), {names} name(s)")]
    OutputNameCountMismatch { volumes: usize, names: usize },

    #[error("{arg} expects exactly two surfaces (L R), got {count}")]
    InvalidSurfacePair { arg: &'static str, count: usize },

    #[error("File {} is not a regular file, not doing anything", path.display())]
    InputNotRegularFile { path: PathBuf },

    #[error("Requested output file {} already exists, not doing anything", path.display())]
    OutputExists { path: PathBuf },

    #[error("Cannot derive an output name for {}: expected a .nii.gz volume", path.display())]
    UnrecognizedVolumeExtension { path: PathBuf },

    #[error("Failed to launch {program} ({step}): {source}")]
    Spawn {
        program: String,
        step: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} failed during {step}: {status}")]
    EngineFailed {
        program: String,
        step: String,
        status: ExitStatus,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnpairedRibbonSurfaces { .. }
            | Error::OutputNameCountMismatch { .. }
            | Error::InvalidSurfacePair { .. } => ErrorKind::Configuration,
            Error::InputNotRegularFile { .. }
            | Error::OutputExists { .. }
            | Error::UnrecognizedVolumeExtension { .. } => ErrorKind::ItemValidation,
            Error::Spawn { .. } | Error::EngineFailed { .. } => ErrorKind::Execution,
            Error::Io(_) | Error::Json(_) => ErrorKind::Io,
        }
    }
}
