//! Command Line Interface (CLI) layer.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration wiring (`runner`) that turns parsed flags into
//! `ProjectionParams` and runs the batch through `nifti_to_dscalar::api`.
//!
//! If you are embedding the projection into another application, prefer the
//! library API over calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
