//! Ingest of difference sets emitted by the comparison engine.
//!
//! The document is decoded leniently: structural problems with the document
//! itself are errors, an item that is not a record is skipped and reported,
//! and a record field of the wrong JSON type is dropped on its own so the
//! record's categories still reach the legend.

use crate::errors::{DocDiffError, ExError, Result};
use crate::model::{DifferenceRecord, DifferenceSet, SourceList};
use crate::{log_op_end, log_op_error, log_op_start};
use docdiff_core_types::ComparisonId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

const OP: &str = "ingest_difference_set";

/// Fields that must be strings when present
const STRING_FIELDS: [&str; 9] = [
    "type",
    "changeType",
    "baseText",
    "compareText",
    "imageName",
    "fontName",
    "styleName",
    "text",
    "description",
];

/// A record dropped during ingest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    pub list: SourceList,
    pub index: usize,
    pub reason: String,
}

/// A field dropped from a record that was otherwise kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedField {
    pub list: SourceList,
    pub index: usize,
    /// Wire name, `bounds.width`/`bounds.height` for bounds sides
    pub field: String,
}

/// Result of ingesting one comparison result.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingested {
    /// Scope of id uniqueness for `set`
    pub comparison_id: ComparisonId,
    /// `None` when the engine reported `null`
    pub set: Option<DifferenceSet>,
    pub skipped: Vec<SkippedRecord>,
    pub dropped_fields: Vec<DroppedField>,
}

/// Decode a difference set from JSON bytes.
///
/// # Errors
///
/// - `InvalidDifferenceSet` — bytes are not UTF-8 JSON, the root is neither
///   an object nor `null`, or a difference list is present but not an array
pub fn parse_difference_set(bytes: &[u8]) -> Result<Ingested> {
    let comparison_id = ComparisonId::new();
    log_op_start!(OP, comparison_id = comparison_id.as_str(), bytes_len = bytes.len());
    let start = std::time::Instant::now();

    let Decoded {
        set,
        skipped,
        dropped_fields,
    } = decode(bytes).map_err(|e| {
        let e = e.with_comparison_id(comparison_id.clone());
        log_op_error!(
            OP,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            comparison_id = comparison_id.as_str()
        );
        e
    })?;

    log_op_end!(
        OP,
        duration_ms = start.elapsed().as_millis() as u64,
        comparison_id = comparison_id.as_str(),
        base_len = set.as_ref().map_or(0, |s| s.base_differences.len()),
        compare_len = set.as_ref().map_or(0, |s| s.compare_differences.len()),
        skipped_len = skipped.len(),
        dropped_len = dropped_fields.len()
    );

    Ok(Ingested {
        comparison_id,
        set,
        skipped,
        dropped_fields,
    })
}

/// Read a file and decode it as a difference set.
///
/// # Errors
///
/// - `Io` — the file cannot be read
/// - `InvalidDifferenceSet` — see [`parse_difference_set`]
pub fn load_difference_set(path: impl AsRef<Path>) -> Result<Ingested> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        ExError::from(DocDiffError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
        .with_op(OP)
    })?;
    parse_difference_set(&bytes).map_err(|e| e.with_path(path))
}

#[derive(Default)]
struct Decoded {
    set: Option<DifferenceSet>,
    skipped: Vec<SkippedRecord>,
    dropped_fields: Vec<DroppedField>,
}

fn decode(bytes: &[u8]) -> Result<Decoded> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        ExError::from(DocDiffError::InvalidUtf8 {
            reason: e.to_string(),
        })
        .with_op(OP)
    })?;

    let raw: Value = serde_json::from_str(text).map_err(|e| {
        ExError::from(DocDiffError::MalformedJson {
            reason: e.to_string(),
        })
        .with_op(OP)
    })?;

    let obj = match &raw {
        Value::Null => return Ok(Decoded::default()),
        Value::Object(obj) => obj,
        other => {
            return Err(ExError::from(DocDiffError::UnexpectedRoot {
                found: json_kind(other).to_string(),
            })
            .with_op(OP))
        }
    };

    let mut decoded = Decoded::default();
    let base = decode_list(obj, SourceList::BaseDifferences, &mut decoded)?;
    let compare = decode_list(obj, SourceList::CompareDifferences, &mut decoded)?;
    decoded.set = Some(DifferenceSet::new(base, compare));

    Ok(decoded)
}

fn decode_list(
    obj: &Map<String, Value>,
    list: SourceList,
    decoded: &mut Decoded,
) -> Result<Vec<DifferenceRecord>> {
    let items = match obj.get(list.field_name()) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(ExError::from(DocDiffError::ListNotArray {
                field: list.field_name().to_string(),
                found: json_kind(other).to_string(),
            })
            .with_op(OP))
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let decoded_record = match item {
            Value::Object(fields) => {
                let mut fields = fields.clone();
                for field in drop_malformed_fields(&mut fields) {
                    tracing::warn!(
                        op = OP,
                        list = list.field_name(),
                        index,
                        field = field.as_str(),
                        "dropping malformed difference field"
                    );
                    decoded.dropped_fields.push(DroppedField { list, index, field });
                }
                DifferenceRecord::deserialize(Value::Object(fields)).map_err(|e| e.to_string())
            }
            other => Err(format!("expected a record object, found {}", json_kind(other))),
        };

        match decoded_record {
            Ok(record) => records.push(record),
            Err(reason) => {
                tracing::warn!(
                    op = OP,
                    list = list.field_name(),
                    index,
                    reason = reason.as_str(),
                    "skipping undecodable difference record"
                );
                decoded.skipped.push(SkippedRecord {
                    list,
                    index,
                    reason,
                });
            }
        }
    }
    Ok(records)
}

/// Remove fields whose JSON type does not match the record shape.
///
/// Returns the wire names of the removed fields.
fn drop_malformed_fields(fields: &mut Map<String, Value>) -> Vec<String> {
    let mut dropped = Vec::new();

    if !matches!(
        fields.get("id"),
        None | Some(Value::Null | Value::String(_) | Value::Number(_))
    ) {
        fields.remove("id");
        dropped.push("id".to_string());
    }

    for name in STRING_FIELDS {
        if !matches!(fields.get(name), None | Some(Value::Null | Value::String(_))) {
            fields.remove(name);
            dropped.push(name.to_string());
        }
    }

    if !matches!(
        fields.get("bounds"),
        None | Some(Value::Null | Value::Object(_))
    ) {
        fields.remove("bounds");
        dropped.push("bounds".to_string());
    }
    if let Some(Value::Object(bounds)) = fields.get_mut("bounds") {
        for side in ["width", "height"] {
            if !matches!(bounds.get(side), None | Some(Value::Null | Value::Number(_))) {
                bounds.remove(side);
                dropped.push(format!("bounds.{side}"));
            }
        }
    }

    dropped
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;

    #[test]
    fn test_null_root_is_absent_set() {
        let ingested = parse_difference_set(b"null").unwrap();
        assert!(ingested.set.is_none());
        assert!(ingested.skipped.is_empty());
    }

    #[test]
    fn test_array_root_is_rejected() {
        let err = parse_difference_set(b"[]").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidDifferenceSet);
        assert!(err.message().contains("array"));
        assert!(err.comparison_id().is_some());
    }

    #[test]
    fn test_drop_malformed_fields_keeps_well_typed_ones() {
        let mut fields = match serde_json::json!({
            "id": [1],
            "type": "image",
            "changeType": 3,
            "imageName": "a.png",
            "bounds": {"x": 0, "width": "100", "height": 50}
        }) {
            Value::Object(fields) => fields,
            _ => unreachable!(),
        };

        let dropped = drop_malformed_fields(&mut fields);

        assert_eq!(dropped, vec!["id", "changeType", "bounds.width"]);
        assert_eq!(fields["type"], "image");
        assert_eq!(fields["bounds"]["height"], 50);
        assert!(fields["bounds"].get("width").is_none());
    }

    #[test]
    fn test_non_object_bounds_is_dropped_whole() {
        let mut fields = match serde_json::json!({"type": "image", "bounds": "100x50"}) {
            Value::Object(fields) => fields,
            _ => unreachable!(),
        };

        assert_eq!(drop_malformed_fields(&mut fields), vec!["bounds"]);
        assert!(!fields.contains_key("bounds"));
    }

    #[test]
    fn test_json_kind_names() {
        assert_eq!(json_kind(&Value::Bool(true)), "boolean");
        assert_eq!(json_kind(&Value::String(String::new())), "string");
    }
}
