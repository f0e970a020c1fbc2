//! Console log panel
//!
//! Displays the console log below the current view, with entries colored by
//! category and an optional scrollbar.

use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};

use crate::app::{AppState, ConsolePanelState};
use crate::console::{category, LogEntry};
use crate::logging::LogFileInfo;
use crate::tui::theme::theme;

fn panel_title(panel: &ConsolePanelState, log_file_info: Option<&LogFileInfo>) -> String {
    let mut title = format!(" Console Log ({} entries)", panel.entries.len());
    if panel.auto_scroll {
        title.push_str(" [auto-scroll]");
    }
    if !panel.expanded {
        title.push_str(" [collapsed: x to expand]");
    } else if let Some(info) = log_file_info {
        title.push_str(&format!(" - diagnostics: {}", info.path.display()));
    }
    title.push(' ');
    title
}

fn entry_item(entry: &LogEntry) -> ListItem<'_> {
    let t = theme();
    let category = category(&entry.message);
    let color = t.category_color(category);
    let time = entry.timestamp.format("%H:%M:%S%.3f");

    ListItem::new(Line::from(vec![
        Span::styled(format!("{} ", time), t.muted_style()),
        Span::styled(
            format!("{:6} ", category.label()),
            Style::default().fg(color).bold(),
        ),
        Span::styled(entry.message.as_str(), Style::default().fg(color)),
    ]))
}

/// Render the console panel
pub fn render_console_panel(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    log_file_info: Option<&LogFileInfo>,
) {
    let t = theme();
    let panel = &state.console;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(t.border))
        .title(Span::styled(panel_title(panel, log_file_info), t.header_style()));

    if !panel.expanded {
        frame.render_widget(block, area);
        return;
    }

    if panel.entries.is_empty() {
        let empty = Paragraph::new("No log entries yet.")
            .style(t.muted_style())
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // Visible area height (minus borders)
    let visible_height = area.height.saturating_sub(2) as usize;
    let entry_count = panel.entries.len();
    let scroll = panel.first_visible_in(visible_height);

    let items: Vec<ListItem> = panel
        .entries
        .iter()
        .skip(scroll)
        .take(visible_height)
        .map(|entry| entry_item(entry))
        .collect();

    frame.render_widget(List::new(items).block(block), area);

    if entry_count > visible_height && area.width > 0 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));

        let mut scrollbar_state = ScrollbarState::new(entry_count)
            .position(scroll)
            .viewport_content_length(visible_height);

        // Inside the right border
        let scrollbar_area = Rect {
            x: area.x + area.width - 1,
            y: area.y + 1,
            width: 1,
            height: area.height.saturating_sub(2),
        };
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}
