//! Screen layout helpers
//!
//! Splits the screen between the current view and the console panel, and
//! gives views a consistent header/content/footer layout.

use ratatui::prelude::*;

use crate::app::ConsolePanelState;
use crate::tui::header::{Header, HEADER_HEIGHT};

/// Default footer height (including top border)
pub const DEFAULT_FOOTER_HEIGHT: u16 = 2;

/// Height of a collapsed console panel (title bar with borders)
pub const COLLAPSED_CONSOLE_HEIGHT: u16 = 3;

/// Share of the screen given to an expanded console panel
pub const EXPANDED_CONSOLE_PERCENT: u16 = 45;

/// Split the screen into the view area (top) and the console panel (bottom)
pub fn split_main(area: Rect, console: &ConsolePanelState) -> (Rect, Rect) {
    let console_constraint = if console.expanded {
        Constraint::Percentage(EXPANDED_CONSOLE_PERCENT)
    } else {
        Constraint::Length(COLLAPSED_CONSOLE_HEIGHT)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), console_constraint])
        .split(area);

    (chunks[0], chunks[1])
}

/// Centered rectangle of at most `max_width` x `max_height` inside `area`
pub fn centered_rect(area: Rect, max_width: u16, max_height: u16) -> Rect {
    let width = max_width.min(area.width);
    let height = max_height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Screen layout builder
///
/// Handles header rendering and calculates content and footer areas.
pub struct ScreenLayout {
    /// Total area for the screen
    area: Rect,
    /// Header to render (optional, but typically present)
    header: Option<Header>,
    /// Footer height (set to 0 for no footer space)
    footer_height: u16,
}

impl ScreenLayout {
    /// Create a new screen layout for the given area
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            header: None,
            footer_height: DEFAULT_FOOTER_HEIGHT,
        }
    }

    /// Add a header to the layout
    pub fn with_header(mut self, header: Header) -> Self {
        self.header = Some(header);
        self
    }

    /// Render the header (if present) and return layout areas
    pub fn render(self, frame: &mut Frame) -> LayoutAreas {
        let header_height = if self.header.is_some() {
            HEADER_HEIGHT
        } else {
            0
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_height),
                Constraint::Min(0),
                Constraint::Length(self.footer_height),
            ])
            .split(self.area);

        if let Some(header) = &self.header {
            header.render(frame, chunks[0]);
        }

        LayoutAreas {
            content: chunks[1],
            footer: chunks[2],
        }
    }
}

/// Areas calculated by ScreenLayout
#[derive(Debug, Clone, Copy)]
pub struct LayoutAreas {
    /// Main content area
    pub content: Rect,
    /// Footer area
    pub footer: Rect,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::tui::views::Breadcrumb;

    #[test]
    fn test_split_main_expanded_and_collapsed() {
        let area = Rect::new(0, 0, 100, 40);
        let mut console = ConsolePanelState::from_config(&Config::default());

        let (main, panel) = split_main(area, &console);
        assert_eq!(main.height + panel.height, 40);
        assert!((17..=19).contains(&panel.height));

        console.toggle_expanded();
        let (main, panel) = split_main(area, &console);
        assert_eq!(panel.height, COLLAPSED_CONSOLE_HEIGHT);
        assert_eq!(main.height, 40 - COLLAPSED_CONSOLE_HEIGHT);
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(area, 50, 10);
        assert_eq!(rect, Rect::new(25, 15, 50, 10));

        let small = Rect::new(0, 0, 20, 5);
        assert_eq!(centered_rect(small, 50, 10), small);
    }

    #[test]
    fn test_screen_layout_creation() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 100, 30));
        assert!(layout.header.is_none());
        assert_eq!(layout.footer_height, DEFAULT_FOOTER_HEIGHT);
    }

    #[test]
    fn test_screen_layout_with_header() {
        let header = Header::new(Breadcrumb::new().push("Test"));
        let layout = ScreenLayout::new(Rect::new(0, 0, 100, 30)).with_header(header);
        assert!(layout.header.is_some());
    }
}
