//! Per-type detail formatting.

use crate::model::{DifferenceBody, DifferenceRecord};
use docdiff_core_types::schema::EVENT_END;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback body for records of unknown type without a description
pub const NO_DESCRIPTION: &str = "No description available";

/// Screen coordinates supplied by the pointer layer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which template produced a [`DetailContent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailKind {
    Text,
    Image,
    Font,
    Style,
    Other,
}

/// One line under the header. Unlabeled lines are free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub value: String,
}

impl DetailLine {
    pub fn labeled(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            value: value.into(),
        }
    }

    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            label: None,
            value: value.into(),
        }
    }
}

impl fmt::Display for DetailLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{}: {}", label, self.value),
            None => f.write_str(&self.value),
        }
    }
}

/// Type-tagged overlay content: a header plus zero or more lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailContent {
    pub kind: DetailKind,
    pub header: String,
    pub lines: Vec<DetailLine>,
}

impl DetailContent {
    /// Lines rendered as `label: value` strings
    pub fn line_strings(&self) -> Vec<String> {
        self.lines.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for DetailContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)?;
        for line in &self.lines {
            write!(f, "\n{}", line)?;
        }
        Ok(())
    }
}

/// Formatted content anchored at a screen position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detail {
    pub content: DetailContent,
    pub position: Position,
}

/// Format a hovered difference for display at `(x, y)`.
///
/// Returns `None` when there is no difference or the overlay is hidden;
/// the display layer clears whatever it was showing.
pub fn format(
    difference: Option<&DifferenceRecord>,
    visible: bool,
    x: f64,
    y: f64,
) -> Option<Detail> {
    if !visible {
        return None;
    }
    let record = difference?;
    Some(Detail {
        content: format_content(record),
        position: Position::new(x, y),
    })
}

/// Build the overlay content for a record. Total over every field combination.
pub fn format_content(record: &DifferenceRecord) -> DetailContent {
    let change = record
        .change_type
        .as_ref()
        .map(|c| c.as_str())
        .unwrap_or("Difference");

    let content = match record.body() {
        DifferenceBody::Text {
            base_text,
            compare_text,
        } => {
            let mut lines = Vec::new();
            if let Some(base) = base_text {
                lines.push(DetailLine::labeled("Base", base));
            }
            if let Some(compare) = compare_text {
                lines.push(DetailLine::labeled("Compare", compare));
            }
            DetailContent {
                kind: DetailKind::Text,
                header: format!("Text {}", change),
                lines,
            }
        }
        DifferenceBody::Image { image_name, bounds } => {
            let mut lines = Vec::new();
            if let Some(name) = image_name {
                lines.push(DetailLine::labeled("Name", name));
            }
            if let Some(size) = bounds.and_then(|b| b.dimensions()) {
                lines.push(DetailLine::labeled("Size", size));
            }
            DetailContent {
                kind: DetailKind::Image,
                header: format!("Image {}", change),
                lines,
            }
        }
        DifferenceBody::Font { font_name, text } => DetailContent {
            kind: DetailKind::Font,
            header: format!("Font {}", change),
            lines: named_with_quote("Font", font_name, text),
        },
        DifferenceBody::Style { style_name, text } => DetailContent {
            kind: DetailKind::Style,
            header: format!("Style {}", change),
            lines: named_with_quote("Style", style_name, text),
        },
        DifferenceBody::Other { kind, description } => DetailContent {
            kind: DetailKind::Other,
            header: format!("{} Difference", kind.unwrap_or("Unknown")),
            lines: vec![DetailLine::plain(description.unwrap_or(NO_DESCRIPTION))],
        },
    };

    tracing::debug!(
        component = module_path!(),
        op = "format_detail",
        event = EVENT_END,
        difference_id = record.id.as_ref().map(|id| id.as_str()).unwrap_or(""),
        detail_kind = ?content.kind,
        line_count = content.lines.len(),
    );

    content
}

fn named_with_quote(label: &str, name: Option<&str>, text: Option<&str>) -> Vec<DetailLine> {
    let mut lines = Vec::new();
    if let Some(name) = name {
        lines.push(DetailLine::labeled(label, name));
    }
    if let Some(text) = text {
        lines.push(DetailLine::labeled("Text", format!("\"{}\"", text)));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Bounds;

    #[test]
    fn test_hidden_produces_nothing() {
        let record = DifferenceRecord::new("a").with_type("text");
        assert!(format(Some(&record), false, 0.0, 0.0).is_none());
    }

    #[test]
    fn test_text_lines_are_independent() {
        let record = DifferenceRecord::new("a")
            .with_type("text")
            .with_change_type("modified")
            .with_compare_text("after");
        let content = format_content(&record);
        assert_eq!(content.header, "Text modified");
        assert_eq!(content.line_strings(), vec!["Compare: after"]);
    }

    #[test]
    fn test_image_without_bounds_omits_size() {
        let record = DifferenceRecord::new("a")
            .with_type("image")
            .with_image_name("chart.png");
        let content = format_content(&record);
        assert_eq!(content.header, "Image Difference");
        assert_eq!(content.line_strings(), vec!["Name: chart.png"]);

        let sized = DifferenceRecord::new("b")
            .with_type("image")
            .with_bounds(Bounds::new(640, 480));
        assert_eq!(format_content(&sized).line_strings(), vec!["Size: 640x480"]);
    }

    #[test]
    fn test_font_quotes_text() {
        let record = DifferenceRecord::new("a")
            .with_type("font")
            .with_change_type("added")
            .with_font_name("Helvetica")
            .with_text("Hello");
        let content = format_content(&record);
        assert_eq!(content.kind, DetailKind::Font);
        assert_eq!(content.header, "Font added");
        assert_eq!(
            content.line_strings(),
            vec!["Font: Helvetica", "Text: \"Hello\""]
        );
    }

    #[test]
    fn test_style_quotes_text() {
        let record = DifferenceRecord::new("a")
            .with_type("style")
            .with_style_name("bold")
            .with_text("Title");
        let content = format_content(&record);
        assert_eq!(content.header, "Style Difference");
        assert_eq!(content.line_strings(), vec!["Style: bold", "Text: \"Title\""]);
    }

    #[test]
    fn test_missing_type_falls_back() {
        let content = format_content(&DifferenceRecord::new("a"));
        assert_eq!(content.kind, DetailKind::Other);
        assert_eq!(content.header, "Unknown Difference");
        assert_eq!(content.line_strings(), vec![NO_DESCRIPTION]);
    }

    #[test]
    fn test_display_joins_header_and_lines() {
        let record = DifferenceRecord::new("a")
            .with_type("text")
            .with_base_text("x")
            .with_compare_text("y");
        assert_eq!(
            format_content(&record).to_string(),
            "Text Difference\nBase: x\nCompare: y"
        );
    }
}
