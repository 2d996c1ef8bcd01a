//! Legend aggregation over a difference set.

use crate::model::{ChangeType, DifferenceSet, DifferenceType};
use crate::{log_op_end, log_op_start};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The seven categories every legend shows, change types first.
pub const KNOWN_CATEGORIES: [&str; 7] = [
    "added", "deleted", "modified", "text", "image", "font", "style",
];

/// Category name → number of unique differences in that category.
///
/// Seeded with [`KNOWN_CATEGORIES`] at zero; any other literal `type` or
/// `changeType` value becomes its own key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendCounts {
    counts: BTreeMap<String, usize>,
    unique_records: usize,
}

impl Default for LegendCounts {
    fn default() -> Self {
        Self {
            counts: KNOWN_CATEGORIES
                .iter()
                .map(|k| (k.to_string(), 0))
                .collect(),
            unique_records: 0,
        }
    }
}

impl LegendCounts {
    /// Count for a category; unseen categories read as zero
    pub fn get(&self, category: &str) -> usize {
        self.counts.get(category).copied().unwrap_or(0)
    }

    pub fn change_type(&self, change_type: &ChangeType) -> usize {
        self.get(change_type.as_str())
    }

    pub fn difference_type(&self, kind: &DifferenceType) -> usize {
        self.get(kind.as_str())
    }

    /// The seven known categories in display order
    pub fn known(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        KNOWN_CATEGORIES.iter().map(move |k| (*k, self.get(k)))
    }

    /// Categories outside the known seven, sorted by key
    pub fn extra(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts
            .iter()
            .filter(|(k, _)| !KNOWN_CATEGORIES.contains(&k.as_str()))
            .map(|(k, v)| (k.as_str(), *v))
    }

    /// Every category, sorted by key
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn as_map(&self) -> &BTreeMap<String, usize> {
        &self.counts
    }

    /// Number of distinct records visited (after dedup)
    pub fn total_unique(&self) -> usize {
        self.unique_records
    }

    fn increment(&mut self, category: &str) {
        *self.counts.entry(category.to_string()).or_insert(0) += 1;
    }
}

/// Count unique differences by change type and by difference type.
///
/// Iterates base then compare, skipping any record whose id was already seen.
/// Never fails: `None` or an empty set yields the zero-seeded counts.
pub fn aggregate(set: Option<&DifferenceSet>) -> LegendCounts {
    let mut counts = LegendCounts::default();
    let Some(set) = set else {
        return counts;
    };

    log_op_start!(
        "aggregate_differences",
        base_len = set.base_differences.len(),
        compare_len = set.compare_differences.len()
    );
    let start = std::time::Instant::now();

    let mut uncategorised = 0usize;
    for record in set.unique() {
        counts.unique_records += 1;
        if let Some(change_type) = &record.change_type {
            counts.increment(change_type.as_str());
        }
        if let Some(kind) = &record.kind {
            counts.increment(kind.as_str());
        }
        if record.change_type.is_none() && record.kind.is_none() {
            uncategorised += 1;
        }
    }

    if uncategorised > 0 {
        tracing::debug!(
            op = "aggregate_differences",
            uncategorised,
            "differences without type or changeType are not shown in the legend"
        );
    }

    log_op_end!(
        "aggregate_differences",
        duration_ms = start.elapsed().as_millis() as u64,
        unique_len = counts.unique_records
    );

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DifferenceRecord;

    #[test]
    fn test_absent_set_is_all_zero() {
        let counts = aggregate(None);
        assert_eq!(counts, LegendCounts::default());
        assert!(counts.known().all(|(_, n)| n == 0));
        assert_eq!(counts.extra().count(), 0);
    }

    #[test]
    fn test_record_without_categories_counts_nothing() {
        let set = DifferenceSet::new(vec![DifferenceRecord::new("a")], vec![]);
        let counts = aggregate(Some(&set));
        assert!(counts.iter().all(|(_, n)| n == 0));
        assert_eq!(counts.total_unique(), 1);
    }

    #[test]
    fn test_literal_keys_for_unknown_values() {
        let set = DifferenceSet::new(
            vec![DifferenceRecord::new("a")
                .with_type("table")
                .with_change_type("moved")],
            vec![],
        );
        let counts = aggregate(Some(&set));
        assert_eq!(counts.get("table"), 1);
        assert_eq!(counts.get("moved"), 1);
        let extra: Vec<_> = counts.extra().collect();
        assert_eq!(extra, vec![("moved", 1), ("table", 1)]);
    }

    #[test]
    fn test_typed_accessors() {
        let set = DifferenceSet::new(
            vec![DifferenceRecord::new("a")
                .with_type(DifferenceType::Style)
                .with_change_type(ChangeType::Deleted)],
            vec![],
        );
        let counts = aggregate(Some(&set));
        assert_eq!(counts.difference_type(&DifferenceType::Style), 1);
        assert_eq!(counts.change_type(&ChangeType::Deleted), 1);
        assert_eq!(counts.change_type(&ChangeType::Added), 0);
    }
}
