//! Application state management
//!
//! Contains the main AppState struct and the console panel's presentation state.

use crate::config::Config;
use crate::console::Snapshot;

use super::input_mode::InputMode;
use super::view::View;

/// Lines moved by PgUp/PgDn in the console panel
pub const CONSOLE_PAGE_SIZE: usize = 10;

/// Presentation state of the console panel
#[derive(Debug, Clone)]
pub struct ConsolePanelState {
    /// Latest entries received from the console subscription
    pub entries: Snapshot,
    /// Whether the panel shows entries or only its title bar
    pub expanded: bool,
    /// Follow new entries as they arrive
    pub auto_scroll: bool,
    /// First visible entry, never past the last full page
    pub scroll: usize,
    /// Entry rows visible in the panel, as of the last render
    pub viewport_height: usize,
}

impl ConsolePanelState {
    /// Create panel state from configuration defaults
    pub fn from_config(config: &Config) -> Self {
        Self {
            entries: Snapshot::from(Vec::new()),
            expanded: config.console_expanded,
            auto_scroll: config.auto_scroll,
            scroll: 0,
            viewport_height: CONSOLE_PAGE_SIZE,
        }
    }

    /// Replace the entries with a newer snapshot
    pub fn update(&mut self, entries: Snapshot) {
        self.entries = entries;
        self.reclamp();
    }

    /// Record how many entry rows the panel can show
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
        self.reclamp();
    }

    /// First visible entry for a panel showing `height` rows
    pub fn first_visible_in(&self, height: usize) -> usize {
        let max_scroll = self.entries.len().saturating_sub(height.max(1));
        if self.auto_scroll {
            max_scroll
        } else {
            self.scroll.min(max_scroll)
        }
    }

    fn first_visible(&self) -> usize {
        self.first_visible_in(self.viewport_height)
    }

    fn max_scroll(&self) -> usize {
        self.entries.len().saturating_sub(self.viewport_height.max(1))
    }

    fn reclamp(&mut self) {
        self.scroll = self.first_visible();
    }

    /// Scroll towards older entries (disables auto-scroll)
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.first_visible().saturating_sub(lines);
        self.auto_scroll = false;
    }

    /// Scroll towards newer entries (disables auto-scroll)
    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = (self.first_visible() + lines).min(self.max_scroll());
        self.auto_scroll = false;
    }

    /// Jump to the oldest entry (disables auto-scroll)
    pub fn scroll_to_top(&mut self) {
        self.auto_scroll = false;
        self.scroll = 0;
    }

    /// Jump to the newest entry and follow new entries
    pub fn scroll_to_bottom(&mut self) {
        self.auto_scroll = true;
        self.scroll = self.max_scroll();
    }

    /// Toggle auto-scroll, jumping to the newest entry when enabled
    pub fn toggle_auto_scroll(&mut self) {
        if self.auto_scroll {
            self.auto_scroll = false;
        } else {
            self.scroll_to_bottom();
        }
    }

    /// Toggle between expanded and collapsed
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current view
    pub view: View,
    /// Current input mode
    pub input_mode: InputMode,
    /// Selected index in RecordList
    pub selected_record_index: usize,
    /// Console panel state
    pub console: ConsolePanelState,
    /// Error message to display (cleared on next keypress)
    pub error_message: Option<String>,
    /// Info message to display (cleared on next keypress)
    pub info_message: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Whether the UI needs to be re-rendered
    pub needs_render: bool,
}

impl AppState {
    /// Create the initial state from configuration
    pub fn new(config: &Config) -> Self {
        Self {
            view: View::default(),
            input_mode: InputMode::default(),
            selected_record_index: 0,
            console: ConsolePanelState::from_config(config),
            error_message: None,
            info_message: None,
            should_quit: false,
            needs_render: true,
        }
    }

    /// Clamp the record selection to a list of `count` records
    pub fn clamp_record_selection(&mut self, count: usize) {
        self.selected_record_index = self.selected_record_index.min(count.saturating_sub(1));
    }
}
