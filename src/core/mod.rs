//! Core building blocks: projection strategy resolution, per-volume requests and
//! output naming, and the batch orchestrator. These are consumed by the
//! high-level `api` module.
pub mod batch;
pub mod params;
pub mod request;
pub mod strategy;
