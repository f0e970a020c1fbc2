//! View rendering modules
//!
//! Each view in the application has its own module for rendering logic.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, InputMode};
use crate::tui::theme::theme;

mod confirm;
mod console;
mod records;

pub use confirm::{render_confirm_dialog, ConfirmDialogConfig};
pub use console::render_console_panel;
pub use records::{render_record_detail, render_record_list};

/// Console shortcuts shown in every footer
pub const CONSOLE_KEYS_HINT: &str =
    "c: clear log | e: export | s: autoscroll | x: expand/collapse | PgUp/PgDn: scroll";

/// Footer shown while a confirmation dialog is open
pub const DIALOG_KEYS_HINT: &str = "y/Enter: confirm | n/Esc: cancel";

/// Breadcrumb navigation path segments
pub struct Breadcrumb {
    segments: Vec<String>,
}

impl Breadcrumb {
    /// Create a new breadcrumb with the root segment
    pub fn new() -> Self {
        Self {
            segments: vec!["Console Log Demo".to_string()],
        }
    }

    /// Add a segment to the breadcrumb path
    pub fn push(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Format the breadcrumb as a display string with " > " separators
    pub fn display(&self) -> String {
        self.segments.join(" > ")
    }

    /// Format the breadcrumb with an optional suffix (e.g., status info)
    pub fn display_with_suffix(&self, suffix: &str) -> String {
        if suffix.is_empty() {
            self.display()
        } else {
            format!("{} {}", self.display(), suffix)
        }
    }
}

impl Default for Breadcrumb {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the footer: a pending status message wins over the key hints
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState, view_hint: &str) {
    let t = theme();

    let (text, style) = if let Some(error) = &state.error_message {
        (format!(" {} ", error), t.error_banner_style())
    } else if let Some(info) = &state.info_message {
        (info.clone(), t.info_banner_style())
    } else if state.input_mode.is_confirming() {
        (DIALOG_KEYS_HINT.to_string(), t.muted_style())
    } else {
        (format!("{} | {}", view_hint, CONSOLE_KEYS_HINT), t.muted_style())
    };

    let footer = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, area);
}

/// Render any open confirmation dialog as an overlay
pub fn render_dialogs(frame: &mut Frame, area: Rect, state: &AppState) {
    match state.input_mode {
        InputMode::ConfirmingClear => {
            let count = state.console.entries.len();
            render_confirm_dialog(
                frame,
                area,
                ConfirmDialogConfig {
                    title: "Clear Console Log",
                    message: "Are you sure you want to erase the console log?",
                    notes: vec![format!("{} entries will be removed.", count)],
                },
            );
        }
        InputMode::ConfirmingQuit => {
            render_confirm_dialog(
                frame,
                area,
                ConfirmDialogConfig {
                    title: "Quit",
                    message: "Quit the application?",
                    notes: vec!["Console log entries are not kept between runs.".to_string()],
                },
            );
        }
        InputMode::Normal => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::backend::TestBackend;

    fn footer_text(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 2)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                render_footer(frame, area, state, "a: add");
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_footer_hints_follow_input_mode() {
        let mut state = AppState::new(&Config::default());
        let text = footer_text(&state);
        assert!(text.contains("a: add"));
        assert!(text.contains("c: clear log"));

        state.input_mode = InputMode::ConfirmingClear;
        let text = footer_text(&state);
        assert!(text.contains(DIALOG_KEYS_HINT));
        assert!(!text.contains("a: add"));
    }

    #[test]
    fn test_footer_message_wins_over_hints() {
        let mut state = AppState::new(&Config::default());
        state.input_mode = InputMode::ConfirmingQuit;
        state.error_message = Some("Failed to save records".to_string());
        assert!(footer_text(&state).contains("Failed to save records"));
    }

    #[test]
    fn test_breadcrumb_display() {
        let crumb = Breadcrumb::new().push("Items").push("Detail");
        assert_eq!(crumb.display(), "Console Log Demo > Items > Detail");
        assert_eq!(crumb.display_with_suffix(""), crumb.display());
        assert_eq!(
            crumb.display_with_suffix("(1)"),
            "Console Log Demo > Items > Detail (1)"
        );
    }
}
