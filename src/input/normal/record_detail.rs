//! Record detail input handler

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;

/// Handle key in record detail (normal mode)
pub fn handle_record_detail_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        app.navigate_back();
    }
    Ok(())
}
