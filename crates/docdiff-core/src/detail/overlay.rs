//! Stateful detail overlay driven by pointer events.

use crate::detail::format::{format_content, Detail, DetailContent, Position};
use crate::model::{DifferenceId, DifferenceRecord};

/// Holds the formatted content for the currently hovered difference.
///
/// Content is derived only in [`DetailOverlay::set_difference`]. Moving and
/// toggling visibility touch nothing but the anchor and the flag.
#[derive(Debug, Clone, Default)]
pub struct DetailOverlay {
    difference_id: Option<DifferenceId>,
    content: Option<DetailContent>,
    position: Position,
    visible: bool,
}

/// Borrowed view of what the overlay currently displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayView<'a> {
    pub content: &'a DetailContent,
    pub position: Position,
}

impl OverlayView<'_> {
    pub fn to_detail(&self) -> Detail {
        Detail {
            content: self.content.clone(),
            position: self.position,
        }
    }
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the hovered difference, formatting it once. `None` drops the
    /// held content.
    pub fn set_difference(&mut self, difference: Option<&DifferenceRecord>) {
        self.difference_id = difference.and_then(|r| r.id.clone());
        self.content = difference.map(format_content);
    }

    /// Re-anchor the overlay without reformatting.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.position = Position::new(x, y);
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn show(&mut self) {
        self.set_visible(true);
    }

    /// Clear the display. Held content is kept for the next `show`.
    pub fn hide(&mut self) {
        self.set_visible(false);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Id of the held difference, if it had one
    pub fn difference_id(&self) -> Option<&DifferenceId> {
        self.difference_id.as_ref()
    }

    /// What should be on screen now: nothing when hidden or empty.
    pub fn current(&self) -> Option<OverlayView<'_>> {
        if !self.visible {
            return None;
        }
        self.content.as_ref().map(|content| OverlayView {
            content,
            position: self.position,
        })
    }
}
