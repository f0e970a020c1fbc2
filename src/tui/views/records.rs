//! Record list and record detail views

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::app::AppState;
use crate::records::{Record, RecordStore};
use crate::tui::header::Header;
use crate::tui::layout::ScreenLayout;
use crate::tui::theme::theme;
use crate::tui::views::{render_footer, Breadcrumb};

/// Render the record list (main screen)
pub fn render_record_list(frame: &mut Frame, area: Rect, state: &AppState, records: &RecordStore) {
    let t = theme();

    let count = records.len();
    let suffix = format!("({} item{})", count, if count == 1 { "" } else { "s" });
    let header = Header::new(Breadcrumb::new().push("Items")).with_suffix(suffix);
    let areas = ScreenLayout::new(area).with_header(header).render(frame);

    if records.is_empty() {
        let empty = Paragraph::new("No items yet. Press 'a' to add one.")
            .style(t.muted_style())
            .block(Block::default().borders(Borders::ALL).title(" Items "));
        frame.render_widget(empty, areas.content);
    } else {
        let items: Vec<ListItem> = records
            .records()
            .iter()
            .map(|record| ListItem::new(format!("Item at {}", record.display_timestamp())))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Items "))
            .highlight_style(t.selected_style())
            .highlight_symbol("> ");

        let mut list_state = ListState::default();
        list_state.select(Some(state.selected_record_index.min(count - 1)));
        frame.render_stateful_widget(list, areas.content, &mut list_state);
    }

    render_footer(
        frame,
        areas.footer,
        state,
        "a: add | d: delete | ↑/k ↓/j: select | Enter: open | q: quit",
    );
}

/// Render the detail screen for a single record
pub fn render_record_detail(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    record: Option<&Record>,
) {
    let t = theme();

    let header = Header::new(Breadcrumb::new().push("Items").push("Detail"));
    let areas = ScreenLayout::new(area).with_header(header).render(frame);

    let lines = match record {
        Some(record) => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("Item at {}", record.display_timestamp()),
                Style::default().fg(t.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(format!("id: {}", record.id), t.muted_style())),
        ],
        None => vec![
            Line::from(""),
            Line::from(Span::styled("This item no longer exists.", t.muted_style())),
        ],
    };

    let detail = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Item "));
    frame.render_widget(detail, areas.content);

    render_footer(frame, areas.footer, state, "Esc/q: back");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::backend::TestBackend;
    use tempfile::TempDir;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_render_empty_record_list() {
        let temp_dir = TempDir::new().unwrap();
        let records = RecordStore::with_path(temp_dir.path().join("records.json"));
        let state = AppState::new(&Config::default());

        let mut terminal = Terminal::new(TestBackend::new(120, 12)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                render_record_list(frame, area, &state, &records);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("(0 items)"));
        assert!(text.contains("No items yet."));
    }

    #[test]
    fn test_render_record_list_with_info_message() {
        let temp_dir = TempDir::new().unwrap();
        let mut records = RecordStore::with_path(temp_dir.path().join("records.json"));
        records.add(Record::new());
        let mut state = AppState::new(&Config::default());
        state.info_message = Some("No logs available to share.".to_string());

        let mut terminal = Terminal::new(TestBackend::new(120, 12)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                render_record_list(frame, area, &state, &records);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("(1 item)"));
        assert!(text.contains("Item at "));
        assert!(text.contains("No logs available to share."));
    }

    #[test]
    fn test_render_missing_record_detail() {
        let state = AppState::new(&Config::default());
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                render_record_detail(frame, area, &state, None);
            })
            .unwrap();

        assert!(buffer_text(&terminal).contains("no longer exists"));
    }
}
