//! tracelane: render flat trace event logs as interactive HTML timelines
//! or structured JSON exports.
//!
//! The pipeline is a single batch transform: CSV rows become
//! [`model::TaskRecord`]s, each lane's records are packed into
//! non-overlapping rows, the scene builder positions everything on one
//! canvas, and a renderer serializes the result.

pub mod color;
pub mod fmt_args;
pub mod io;
pub mod layout;
pub mod model;
pub mod render;

pub use io::{import_csv, ImportError};
pub use layout::Scene;
pub use model::{TaskRecord, TimeAxis};
pub use render::RenderFormat;
