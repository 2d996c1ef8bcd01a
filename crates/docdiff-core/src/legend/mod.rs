//! Legend: deduplicated counts of differences per category.
//!
//! ## Entry point
//!
//! ```
//! use docdiff_core::legend::{aggregate, render_legend};
//! use docdiff_core::{DifferenceRecord, DifferenceSet, LegendOptions};
//!
//! let set = DifferenceSet::new(
//!     vec![DifferenceRecord::new("1").with_type("text").with_change_type("added")],
//!     vec![DifferenceRecord::new("1").with_type("text").with_change_type("added")],
//! );
//! let counts = aggregate(Some(&set));
//! assert_eq!(counts.get("added"), 1);
//! let legend = render_legend(&counts, &LegendOptions::default());
//! assert!(legend.contains("Added: 1"));
//! ```
//!
//! ## Guarantees
//!
//! - **Dedup**: an id seen in both lists is counted once.
//! - **Orthogonality**: change type and difference type are independent
//!   taxonomies; a record with both increments exactly two counters.
//! - **Totality**: absent or empty input yields the seven known categories at zero.
//! - **Open keys**: unrecognised values are counted under their literal value.

pub mod aggregate;
pub mod render;

pub use aggregate::{aggregate, LegendCounts, KNOWN_CATEGORIES};
pub use render::render_legend;
