//! docdiff Core - legend and detail kernel for document comparison results
//!
//! This crate provides the presentation-side data model for the output of a
//! document-comparison engine, including:
//! - Difference records and difference sets (base + compare sequences)
//! - Legend aggregation: dedup-by-id counting by change type and difference type
//! - Detail formatting: per-type hover content with an independently movable anchor
//! - JSON ingest of difference sets with per-record graceful degradation
//! - Legend display options loaded from TOML
//!
//! The comparison engine itself is an external producer; nothing here diffs documents.

pub mod config;
pub mod detail;
pub mod errors;
pub mod ingest;
pub mod legend;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use config::LegendOptions;
pub use detail::{format, Detail, DetailContent, DetailOverlay, Position};
pub use errors::{DocDiffError, ExError, ExErrorKind, Result};
pub use legend::{aggregate, render_legend, LegendCounts};
pub use model::{
    ChangeType, DifferenceBody, DifferenceId, DifferenceRecord, DifferenceSet, DifferenceType,
};
