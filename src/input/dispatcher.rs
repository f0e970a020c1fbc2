//! Main input dispatch logic
//!
//! Routes keyboard events to appropriate handlers based on current mode.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode};

/// Handle a key event by routing to the appropriate mode handler
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.state.error_message = Some("Ctrl+C disabled. Press 'q' to quit.".to_string());
        return Ok(());
    }

    match app.state.input_mode {
        InputMode::Normal => super::normal::handle_normal_mode_key(app, key),
        InputMode::ConfirmingClear => super::dialogs::handle_confirming_clear_key(app, key),
        InputMode::ConfirmingQuit => super::dialogs::handle_confirming_quit_key(app, key),
    }
}
