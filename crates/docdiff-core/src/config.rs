//! Legend display options.
//!
//! Options are read from a small TOML file:
//!
//! ```toml
//! title = "Changes"
//! show_extra_categories = true
//! hide_zero = false
//! ```

use crate::errors::{DocDiffError, ExError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the legend is rendered. Counting is unaffected by these options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LegendOptions {
    /// Heading of the rendered legend
    pub title: String,
    /// Also list categories outside the seven known ones
    pub show_extra_categories: bool,
    /// Omit categories whose count is zero
    pub hide_zero: bool,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            title: "Differences".to_string(),
            show_extra_categories: false,
            hide_zero: false,
        }
    }
}

impl LegendOptions {
    /// Parse options from TOML text. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// - `Config` — invalid TOML, wrong value types, or unknown keys
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| {
            ExError::from(DocDiffError::ConfigParse {
                reason: e.to_string(),
            })
            .with_op("load_legend_options")
        })
    }

    /// Read and parse an options file.
    ///
    /// # Errors
    ///
    /// - `Io` — the file cannot be read
    /// - `Config` — the contents are not valid options
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ExError::from(DocDiffError::ReadFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
            .with_op("load_legend_options")
        })?;
        Self::from_toml_str(&text).map_err(|e| e.with_path(path))
    }
}
