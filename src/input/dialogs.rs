//! Dialog input handlers
//!
//! Handles keyboard input for confirmation dialogs.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::{App, InputMode};

/// Handle key when confirming console log clear
pub fn handle_confirming_clear_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.clear_console();
            app.state.input_mode = InputMode::Normal;
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.state.input_mode = InputMode::Normal;
        }
        _ => {}
    }
    Ok(())
}

/// Handle key when confirming application quit
pub fn handle_confirming_quit_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.state.should_quit = true;
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.state.input_mode = InputMode::Normal;
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::dispatcher::test_support::{app_in, press};
    use crate::input::handle_key_event;
    use tempfile::TempDir;

    #[test]
    fn test_clear_requires_confirmation() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_in(&temp_dir);
        app.log("one");
        app.log("two");

        handle_key_event(&mut app, press(KeyCode::Char('c'))).unwrap();
        assert_eq!(app.state.input_mode, InputMode::ConfirmingClear);
        assert_eq!(app.console.len(), 2);

        handle_key_event(&mut app, press(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.state.input_mode, InputMode::Normal);
        assert_eq!(app.console.len(), 2);

        handle_key_event(&mut app, press(KeyCode::Char('c'))).unwrap();
        handle_key_event(&mut app, press(KeyCode::Char('y'))).unwrap();
        assert_eq!(app.state.input_mode, InputMode::Normal);
        assert!(app.console.is_empty());

        assert!(app.sync_console());
        assert!(app.state.console.entries.is_empty());
    }

    #[test]
    fn test_other_keys_keep_dialog_open() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_in(&temp_dir);
        app.log("one");
        app.state.input_mode = InputMode::ConfirmingClear;

        handle_confirming_clear_key(&mut app, press(KeyCode::Char('x'))).unwrap();
        assert_eq!(app.state.input_mode, InputMode::ConfirmingClear);
        assert_eq!(app.console.len(), 1);
    }
}
