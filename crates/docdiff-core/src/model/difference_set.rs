//! Difference set: the paired base/compare sequences from one comparison run.

use crate::model::difference::{DifferenceId, DifferenceRecord};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Which of the two sequences a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceList {
    BaseDifferences,
    CompareDifferences,
}

impl SourceList {
    pub fn field_name(&self) -> &'static str {
        match self {
            SourceList::BaseDifferences => "baseDifferences",
            SourceList::CompareDifferences => "compareDifferences",
        }
    }
}

impl fmt::Display for SourceList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Differences anchored to the base document and to the compare document.
///
/// The same change is frequently reported on both sides under one id;
/// [`DifferenceSet::unique`] yields each id once.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifferenceSet {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub base_differences: Vec<DifferenceRecord>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub compare_differences: Vec<DifferenceRecord>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<DifferenceRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<DifferenceRecord>>::deserialize(deserializer)?.unwrap_or_default())
}

impl DifferenceSet {
    pub fn new(
        base_differences: Vec<DifferenceRecord>,
        compare_differences: Vec<DifferenceRecord>,
    ) -> Self {
        Self {
            base_differences,
            compare_differences,
        }
    }

    /// Total records across both sequences, duplicates included
    pub fn len(&self) -> usize {
        self.base_differences.len() + self.compare_differences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base_differences.is_empty() && self.compare_differences.is_empty()
    }

    /// All records, base first, duplicates included
    pub fn iter(&self) -> impl Iterator<Item = &DifferenceRecord> {
        self.base_differences
            .iter()
            .chain(self.compare_differences.iter())
    }

    /// Records in base-then-compare order, skipping any whose id was already
    /// yielded. Records without an id are always yielded.
    pub fn unique(&self) -> UniqueRecords<'_> {
        UniqueRecords {
            inner: Box::new(self.iter()),
            seen: HashSet::new(),
        }
    }

    /// First record with the given id, searching base before compare
    pub fn find(&self, id: &DifferenceId) -> Option<&DifferenceRecord> {
        self.iter().find(|r| r.id.as_ref() == Some(id))
    }
}

/// Iterator returned by [`DifferenceSet::unique`].
pub struct UniqueRecords<'a> {
    inner: Box<dyn Iterator<Item = &'a DifferenceRecord> + 'a>,
    seen: HashSet<&'a DifferenceId>,
}

impl<'a> Iterator for UniqueRecords<'a> {
    type Item = &'a DifferenceRecord;

    fn next(&mut self) -> Option<Self::Item> {
        for record in self.inner.by_ref() {
            match &record.id {
                Some(id) if !self.seen.insert(id) => continue,
                _ => return Some(record),
            }
        }
        None
    }
}
