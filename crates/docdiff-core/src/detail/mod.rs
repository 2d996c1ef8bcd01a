//! Detail overlay content for a single hovered difference.
//!
//! [`format`] is the stateless entry point: record + visibility + anchor in,
//! positioned content out. [`DetailOverlay`] holds the last formatted content
//! so pointer movement and visibility toggles never re-run formatting.

pub mod format;
pub mod overlay;

pub use format::{format, format_content, Detail, DetailContent, DetailKind, DetailLine, Position};
pub use overlay::{DetailOverlay, OverlayView};
