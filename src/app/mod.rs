//! Application state and main event loop
//!
//! This module contains the central application state and the main event loop
//! that ties together the record screens, the console log and the terminal UI.

mod input_mode;
mod state;
mod view;

pub use input_mode::InputMode;
pub use state::{AppState, ConsolePanelState, CONSOLE_PAGE_SIZE};
pub use view::View;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::config::{friendly_io_error_message, Config};
use crate::console::{export_to_sink, ExportOutcome, FileSink, LogStore, LogSubscription};
use crate::logging::LogFileInfo;
use crate::records::{Record, RecordStore};
use crate::tui::layout::split_main;
use crate::tui::views::{
    render_console_panel, render_dialogs, render_record_detail, render_record_list,
};
use crate::tui::Tui;

/// Main application struct
pub struct App {
    /// Application state
    pub(crate) state: AppState,
    /// Record store for record persistence
    pub(crate) records: RecordStore,
    /// Shared console log
    pub(crate) console: Arc<LogStore>,
    /// Subscription feeding the console panel
    console_sub: LogSubscription,
    /// Destination for console exports
    sink: FileSink,
    /// Information about the current diagnostic log file
    pub(crate) log_file_info: Option<LogFileInfo>,
}

impl App {
    /// Create a new application instance, loading records from disk
    pub fn new(config: Config, console: Arc<LogStore>, log_file_info: LogFileInfo) -> Self {
        let records = RecordStore::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load record store: {}, starting fresh", e);
            RecordStore::new()
        });
        tracing::debug!("Loaded {} records", records.len());

        let mut app = Self::with_records(config, console, records);
        app.log_file_info = Some(log_file_info);
        app
    }

    /// Create an application around an existing record store
    pub fn with_records(config: Config, console: Arc<LogStore>, records: RecordStore) -> Self {
        let mut console_sub = console.subscribe();
        let mut state = AppState::new(&config);
        state.console.update(console_sub.latest());

        Self {
            state,
            records,
            console,
            console_sub,
            sink: FileSink::new(config.export_dir),
            log_file_info: None,
        }
    }

    /// Append a message to the console log
    pub fn log(&self, message: impl Into<String>) {
        self.console.append(message);
    }

    /// Pull the latest console state into the panel, returning whether it changed
    pub fn sync_console(&mut self) -> bool {
        if !self.console_sub.has_changed() {
            return false;
        }
        let latest = self.console_sub.latest();
        self.state.console.update(latest);
        true
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        tracing::info!("consolelog started");
        self.log("ContentView appeared: Ready.");
        self.log(format!("Success -> Loaded {} items.", self.records.len()));

        let result = self.event_loop(&mut tui).await;

        self.console.unsubscribe(self.console_sub.id());
        tui.exit()?;

        result
    }

    /// Main event loop
    async fn event_loop(&mut self, tui: &mut Tui) -> Result<()> {
        let tick_rate = Duration::from_millis(16);

        self.state.needs_render = true;

        loop {
            if self.state.needs_render {
                self.render(tui)?;
                self.state.needs_render = false;
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => {
                        self.state.error_message = None;
                        self.state.info_message = None;
                        crate::input::dispatcher::handle_key_event(self, key)?;
                        self.state.needs_render = true;
                    }
                    Event::Resize(_, _) => {
                        self.state.needs_render = true;
                    }
                    _ => {}
                }
            }

            if self.sync_console() {
                self.state.needs_render = true;
            }

            if self.state.should_quit {
                break;
            }

            // Let other tasks run
            tokio::task::yield_now().await;
        }

        Ok(())
    }

    /// Render the current frame
    fn render(&mut self, tui: &mut Tui) -> Result<()> {
        // Scrolling works in whole pages of the panel as it is drawn
        let (_, console_area) = split_main(tui.size()?, &self.state.console);
        self.state
            .console
            .set_viewport_height(console_area.height.saturating_sub(2) as usize);

        let state = &self.state;
        let records = &self.records;
        let log_file_info = self.log_file_info.as_ref();

        tui.draw(|frame| {
            let area = frame.size();
            let (main_area, console_area) = split_main(area, &state.console);
            match state.view {
                View::RecordList => render_record_list(frame, main_area, state, records),
                View::RecordDetail(id) => {
                    render_record_detail(frame, main_area, state, records.get(id))
                }
            }
            render_console_panel(frame, console_area, state, log_file_info);
            render_dialogs(frame, area, state);
        })
    }

    /// Persist records, reporting failures to the user and the console
    fn save_records(&mut self) {
        if let Err(e) = self.records.save() {
            tracing::error!("Failed to save records: {:#}", e);
            self.log(format!("Error saving records: {:#}", e));
            self.state.error_message = Some(format!("Failed to save records: {}", e));
        }
    }

    /// Add a new record stamped with the current time
    pub fn add_record(&mut self) {
        self.log("private func addItem()");
        let record = Record::new();
        self.log(format!("ADD ITEM: {}", record.display_timestamp()));
        self.state.selected_record_index = self.records.add(record);
        self.save_records();
        self.log("Success -> addItem()");
    }

    /// Delete the selected record
    pub fn delete_selected_record(&mut self) {
        let index = self.state.selected_record_index;
        if self.records.get_at(index).is_none() {
            return;
        }

        self.log("private func deleteItems(offsets: IndexSet)");
        if let Some(record) = self.records.remove_at(index) {
            self.log(format!("DELETE ITEM: {}", record.display_timestamp()));
        }
        self.state.clamp_record_selection(self.records.len());
        self.save_records();
        self.log("Success -> deleteItems()");
    }

    /// Open the detail view for the selected record
    pub fn open_selected_record(&mut self) {
        if let Some(record) = self.records.get_at(self.state.selected_record_index) {
            let (id, shown) = (record.id, record.display_timestamp());
            self.state.view = View::RecordDetail(id);
            self.log(format!("NAVIGATED TO ITEM: {}", shown));
        }
    }

    /// Leave the current view for its parent
    pub fn navigate_back(&mut self) {
        if let Some(parent) = self.state.view.parent() {
            self.state.view = parent;
            if parent.is_record_list() {
                self.log("NAVIGATED TO: ContentView");
            }
        }
    }

    /// Clear the console log (called after the user confirmed)
    pub fn clear_console(&mut self) {
        self.console.clear();
        tracing::info!("Console log cleared by user");
    }

    /// Export the console log to the configured directory
    pub fn export_console(&mut self) {
        match export_to_sink(&self.console, &self.sink) {
            Ok(ExportOutcome::Delivered(path)) => {
                self.state.info_message = Some(format!("Exported to {}", path.display()));
            }
            Ok(ExportOutcome::NothingToExport) => {
                self.state.info_message = Some("No logs available to share.".to_string());
            }
            Err(e) => {
                tracing::error!("{}", e);
                self.state.error_message = Some(friendly_io_error_message(
                    e.io_error(),
                    "Error writing logs",
                ));
            }
        }
    }
}
