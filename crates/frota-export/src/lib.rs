//! Spreadsheet export for the synthetic fleet datasets.
//!
//! This crate turns `frota-data` rosters and telemetry into downloadable
//! artifacts: CSV sheets (the tabular boundary), a zip archive (the packing
//! boundary), and the two end-to-end pipelines the CLI drives.

pub mod archive;
pub mod error;
pub mod pipeline;
pub mod sheet;

pub use error::ExportError;
pub use pipeline::{Bundle, complete_bundle, generate_bundle};
