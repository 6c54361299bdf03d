use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{failed} file(s) failed during projection")]
    BatchFailed { failed: usize },

    #[error(transparent)]
    Projection(#[from] nifti_to_dscalar::Error),
}
