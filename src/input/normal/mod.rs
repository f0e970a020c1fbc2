//! Normal mode input handlers
//!
//! Console panel keys work from every view; the rest depends on the view.

pub mod console;
pub mod record_detail;
pub mod record_list;

use anyhow::Result;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::app::{App, View};

/// Handle a key in normal mode
pub fn handle_normal_mode_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Only process key press events (not release/repeat)
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if console::handle_console_key(app, key) {
        return Ok(());
    }

    match app.state.view {
        View::RecordList => record_list::handle_record_list_key(app, key),
        View::RecordDetail(_) => record_detail::handle_record_detail_key(app, key),
    }
}
