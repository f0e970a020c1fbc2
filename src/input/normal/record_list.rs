//! Record list input handler
//!
//! Handles keyboard input in the record list view.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, InputMode};

/// Handle key in record list (normal mode)
pub fn handle_record_list_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let count = app.records.len();

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.state.input_mode = InputMode::ConfirmingQuit;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.state.selected_record_index + 1 < count {
                app.state.selected_record_index += 1;
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.state.selected_record_index = app.state.selected_record_index.saturating_sub(1);
        }
        KeyCode::Enter => app.open_selected_record(),
        KeyCode::Char('a') => app.add_record(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected_record(),
        _ => {}
    }
    Ok(())
}
