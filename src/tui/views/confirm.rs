//! Unified confirmation dialog component
//!
//! Provides a consistent look and feel for all confirmation dialogs in the application.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::layout::centered_rect;
use crate::tui::theme::theme;

/// Maximum dialog width in columns
const DIALOG_WIDTH: u16 = 60;

/// Configuration for a confirmation dialog
pub struct ConfirmDialogConfig<'a> {
    /// Dialog title (e.g., "Clear Console Log")
    pub title: &'a str,
    /// Question asked to the user
    pub message: &'a str,
    /// Note lines (displayed in muted gray)
    pub notes: Vec<String>,
}

/// Render a unified confirmation dialog centered in `area`
///
/// Unified style:
/// - Border: Yellow (warning color, indicates destructive action)
/// - Notes: Muted gray
/// - Prompt: "Press y to confirm, n or Esc to cancel" (y=green, n/Esc=red)
/// - Alignment: Center
pub fn render_confirm_dialog(frame: &mut Frame, area: Rect, config: ConfirmDialogConfig) {
    let t = theme();

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            config.message,
            Style::default().fg(t.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for note in &config.notes {
        lines.push(Line::from(Span::styled(
            note.as_str(),
            Style::default().fg(t.text_muted),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("Press ", Style::default().fg(t.text)),
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" to confirm, ", Style::default().fg(t.text)),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" or ", Style::default().fg(t.text)),
        Span::styled(
            "Esc",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" to cancel", Style::default().fg(t.text)),
    ]));

    // Two border rows plus the content
    let height = lines.len() as u16 + 2;
    let dialog_area = centered_rect(area, DIALOG_WIDTH, height);

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(t.border_warning))
                .title(format!(" {} ", config.title)),
        );

    frame.render_widget(Clear, dialog_area);
    frame.render_widget(paragraph, dialog_area);
}
