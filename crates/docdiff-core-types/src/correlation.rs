//! Correlation types for comparison tracking
//!
//! Difference identifiers are only unique within one comparison result. A
//! `ComparisonId` tags each loaded difference set so that log events and
//! errors from different document-pair comparisons can be told apart.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for one comparison result (one base/compare document pair)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComparisonId(String);

impl ComparisonId {
    /// Generate a new random ComparisonId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (e.g. an id supplied by the comparison engine)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for ComparisonId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ComparisonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
