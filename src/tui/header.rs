//! Unified header component
//!
//! Provides a consistent header across all views with breadcrumb navigation
//! and an optional suffix (e.g., record counts).

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::theme::theme;
use crate::tui::views::Breadcrumb;

/// Height constant for the header (including bottom border)
pub const HEADER_HEIGHT: u16 = 2;

/// Unified header component for all views
pub struct Header {
    /// Breadcrumb navigation path
    breadcrumb: Breadcrumb,
    /// Optional suffix text (e.g., "(3 items)")
    suffix: Option<String>,
}

impl Header {
    /// Create a new header with the given breadcrumb
    pub fn new(breadcrumb: Breadcrumb) -> Self {
        Self {
            breadcrumb,
            suffix: None,
        }
    }

    /// Add a suffix to the header (e.g., status counts)
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        let s = suffix.into();
        if !s.is_empty() {
            self.suffix = Some(s);
        }
        self
    }

    /// Text shown in the header
    pub fn text(&self) -> String {
        match &self.suffix {
            Some(suffix) => self.breadcrumb.display_with_suffix(suffix),
            None => self.breadcrumb.display(),
        }
    }

    /// Render the header to the given area
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.text())
            .style(theme().header_style())
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(paragraph, area);
    }
}
