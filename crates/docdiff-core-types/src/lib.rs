//! Core types shared across docdiff facilities
//!
//! This crate provides foundational types used by the error, logging and
//! ingest facilities:
//!
//! - **Correlation types**: ComparisonId
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::ComparisonId;
