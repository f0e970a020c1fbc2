//! Console panel input handler
//!
//! Handles the console panel shortcuts available from every view.

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, InputMode, CONSOLE_PAGE_SIZE};

/// Handle a console panel key, returning true if the key was consumed
pub fn handle_console_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') => {
            // Clearing is destructive; ask first
            app.state.input_mode = InputMode::ConfirmingClear;
        }
        KeyCode::Char('e') => app.export_console(),
        KeyCode::Char('s') => app.state.console.toggle_auto_scroll(),
        KeyCode::Char('x') => app.state.console.toggle_expanded(),
        KeyCode::PageUp => app.state.console.scroll_up(CONSOLE_PAGE_SIZE),
        KeyCode::PageDown => app.state.console.scroll_down(CONSOLE_PAGE_SIZE),
        KeyCode::Char('g') => app.state.console.scroll_to_top(),
        KeyCode::Char('G') => app.state.console.scroll_to_bottom(),
        _ => return false,
    }
    true
}
