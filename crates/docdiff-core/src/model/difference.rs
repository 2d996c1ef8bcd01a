//! Difference record model.
//!
//! Wire shape is the camelCase JSON emitted by the comparison engine. String
//! fields follow "empty means absent": an empty `type`, `changeType` or detail
//! string behaves exactly like a missing one.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque identifier of a difference record, unique within one comparison result.
///
/// The engine may emit ids as JSON strings or numbers; both normalise to the
/// same textual key, so `1` and `"1"` identify the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DifferenceId(String);

impl DifferenceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DifferenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DifferenceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DifferenceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u64> for DifferenceId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl Serialize for DifferenceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DifferenceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Number(n) => Self(number_text(&n)),
        })
    }
}

/// Text of a JSON number with integral floats written without a fraction,
/// so `1.0` reads as `1`.
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
        _ => n.to_string(),
    }
}

/// What kind of content changed.
///
/// Closed set with an open fallback: values outside the known four are kept
/// verbatim in `Other` and are never an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DifferenceType {
    Text,
    Image,
    Font,
    Style,
    Other(String),
}

impl DifferenceType {
    pub const KNOWN: [DifferenceType; 4] = [
        DifferenceType::Text,
        DifferenceType::Image,
        DifferenceType::Font,
        DifferenceType::Style,
    ];

    /// Wire value, also the legend category key
    pub fn as_str(&self) -> &str {
        match self {
            DifferenceType::Text => "text",
            DifferenceType::Image => "image",
            DifferenceType::Font => "font",
            DifferenceType::Style => "style",
            DifferenceType::Other(s) => s,
        }
    }

    /// Capitalised label used in detail headers and the legend
    pub fn label(&self) -> &str {
        match self {
            DifferenceType::Text => "Text",
            DifferenceType::Image => "Image",
            DifferenceType::Font => "Font",
            DifferenceType::Style => "Style",
            DifferenceType::Other(s) => s,
        }
    }

}

impl From<String> for DifferenceType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "text" => DifferenceType::Text,
            "image" => DifferenceType::Image,
            "font" => DifferenceType::Font,
            "style" => DifferenceType::Style,
            _ => DifferenceType::Other(s),
        }
    }
}

impl From<&str> for DifferenceType {
    fn from(s: &str) -> Self {
        DifferenceType::from(s.to_string())
    }
}

impl From<DifferenceType> for String {
    fn from(t: DifferenceType) -> Self {
        match t {
            DifferenceType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for DifferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the content changed. Same open-fallback rule as [`DifferenceType`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChangeType {
    Added,
    Deleted,
    Modified,
    Other(String),
}

impl ChangeType {
    pub const KNOWN: [ChangeType; 3] = [ChangeType::Added, ChangeType::Deleted, ChangeType::Modified];

    /// Wire value, also the legend category key
    pub fn as_str(&self) -> &str {
        match self {
            ChangeType::Added => "added",
            ChangeType::Deleted => "deleted",
            ChangeType::Modified => "modified",
            ChangeType::Other(s) => s,
        }
    }

    /// Capitalised label used in the legend
    pub fn label(&self) -> &str {
        match self {
            ChangeType::Added => "Added",
            ChangeType::Deleted => "Deleted",
            ChangeType::Modified => "Modified",
            ChangeType::Other(s) => s,
        }
    }
}

impl From<String> for ChangeType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "added" => ChangeType::Added,
            "deleted" => ChangeType::Deleted,
            "modified" => ChangeType::Modified,
            _ => ChangeType::Other(s),
        }
    }
}

impl From<&str> for ChangeType {
    fn from(s: &str) -> Self {
        ChangeType::from(s.to_string())
    }
}

impl From<ChangeType> for String {
    fn from(c: ChangeType) -> Self {
        match c {
            ChangeType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pixel extent of a changed image.
///
/// Numbers are kept as JSON numbers; integral values render without a
/// fraction whether the engine wrote `100` or `100.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Bounds {
    #[serde(default)]
    pub width: Option<serde_json::Number>,
    #[serde(default)]
    pub height: Option<serde_json::Number>,
}

impl Bounds {
    pub fn new(width: impl Into<serde_json::Number>, height: impl Into<serde_json::Number>) -> Self {
        Self {
            width: Some(width.into()),
            height: Some(height.into()),
        }
    }

    /// `"<width>x<height>"`, or `None` when either side is missing
    pub fn dimensions(&self) -> Option<String> {
        match (&self.width, &self.height) {
            (Some(w), Some(h)) => Some(format!("{}x{}", number_text(w), number_text(h))),
            _ => None,
        }
    }
}

/// One detected change between the base and compare documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DifferenceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DifferenceId>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<DifferenceType>,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub change_type: Option<ChangeType>,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub base_text: Option<String>,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub compare_text: Option<String>,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub style_name: Option<String>,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn non_empty<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()).map(T::from))
}

impl DifferenceRecord {
    /// Create a bare record with only an id
    pub fn new(id: impl Into<DifferenceId>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, kind: impl Into<DifferenceType>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_change_type(mut self, change_type: impl Into<ChangeType>) -> Self {
        self.change_type = Some(change_type.into());
        self
    }

    pub fn with_base_text(mut self, text: impl Into<String>) -> Self {
        self.base_text = Some(text.into());
        self
    }

    pub fn with_compare_text(mut self, text: impl Into<String>) -> Self {
        self.compare_text = Some(text.into());
        self
    }

    pub fn with_image_name(mut self, name: impl Into<String>) -> Self {
        self.image_name = Some(name.into());
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_font_name(mut self, name: impl Into<String>) -> Self {
        self.font_name = Some(name.into());
        self
    }

    pub fn with_style_name(mut self, name: impl Into<String>) -> Self {
        self.style_name = Some(name.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Project the record onto the variant for its type, borrowing only the
    /// fields that variant renders.
    pub fn body(&self) -> DifferenceBody<'_> {
        match &self.kind {
            Some(DifferenceType::Text) => DifferenceBody::Text {
                base_text: self.base_text.as_deref(),
                compare_text: self.compare_text.as_deref(),
            },
            Some(DifferenceType::Image) => DifferenceBody::Image {
                image_name: self.image_name.as_deref(),
                bounds: self.bounds.as_ref(),
            },
            Some(DifferenceType::Font) => DifferenceBody::Font {
                font_name: self.font_name.as_deref(),
                text: self.text.as_deref(),
            },
            Some(DifferenceType::Style) => DifferenceBody::Style {
                style_name: self.style_name.as_deref(),
                text: self.text.as_deref(),
            },
            Some(DifferenceType::Other(kind)) => DifferenceBody::Other {
                kind: Some(kind.as_str()),
                description: self.description.as_deref(),
            },
            None => DifferenceBody::Other {
                kind: None,
                description: self.description.as_deref(),
            },
        }
    }
}

/// Type-specific view of a [`DifferenceRecord`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DifferenceBody<'a> {
    Text {
        base_text: Option<&'a str>,
        compare_text: Option<&'a str>,
    },
    Image {
        image_name: Option<&'a str>,
        bounds: Option<&'a Bounds>,
    },
    Font {
        font_name: Option<&'a str>,
        text: Option<&'a str>,
    },
    Style {
        style_name: Option<&'a str>,
        text: Option<&'a str>,
    },
    Other {
        kind: Option<&'a str>,
        description: Option<&'a str>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_and_string_ids_normalise() {
        let a: DifferenceId = serde_json::from_value(json!(1)).unwrap();
        let b: DifferenceId = serde_json::from_value(json!("1")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_integral_float_id_matches_integer_id() {
        let a: DifferenceId = serde_json::from_value(json!(1.0)).unwrap();
        let b: DifferenceId = serde_json::from_value(json!(1.5)).unwrap();
        assert_eq!(a, DifferenceId::from(1));
        assert_eq!(b.as_str(), "1.5");
    }

    #[test]
    fn test_unknown_type_is_preserved_verbatim() {
        let record: DifferenceRecord =
            serde_json::from_value(json!({"id": "x", "type": "unknown-type"})).unwrap();
        assert_eq!(record.kind, Some(DifferenceType::Other("unknown-type".into())));
        assert_eq!(record.kind.as_ref().map(|k| k.as_str()), Some("unknown-type"));
    }

    #[test]
    fn test_empty_strings_read_as_absent() {
        let record: DifferenceRecord = serde_json::from_value(json!({
            "id": "x", "type": "", "changeType": "", "description": ""
        }))
        .unwrap();
        assert_eq!(record.kind, None);
        assert_eq!(record.change_type, None);
        assert_eq!(record.description, None);
    }

    #[test]
    fn test_camel_case_fields() {
        let record: DifferenceRecord = serde_json::from_value(json!({
            "id": 3, "type": "text", "changeType": "modified",
            "baseText": "old", "compareText": "new"
        }))
        .unwrap();
        assert_eq!(record.change_type, Some(ChangeType::Modified));
        assert_eq!(
            record.body(),
            DifferenceBody::Text {
                base_text: Some("old"),
                compare_text: Some("new")
            }
        );
    }

    #[test]
    fn test_bounds_dimensions_keep_integer_formatting() {
        assert_eq!(Bounds::new(100, 50).dimensions().as_deref(), Some("100x50"));

        let floats: Bounds =
            serde_json::from_value(json!({"width": 100.0, "height": 50.5})).unwrap();
        assert_eq!(floats.dimensions().as_deref(), Some("100x50.5"));

        let partial: Bounds = serde_json::from_value(json!({"width": 10})).unwrap();
        assert_eq!(partial.dimensions(), None);
    }

    #[test]
    fn test_body_without_type_is_other() {
        let record = DifferenceRecord::new("d").with_description("moved paragraph");
        assert_eq!(
            record.body(),
            DifferenceBody::Other {
                kind: None,
                description: Some("moved paragraph")
            }
        );
    }
}
