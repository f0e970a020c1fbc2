//! View enum and navigation helpers
//!
//! Defines the current view being displayed and provides navigation utilities.

use crate::records::RecordId;

/// Current view being displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// List of records (main landing page)
    #[default]
    RecordList,
    /// Single record detail
    RecordDetail(RecordId),
}

impl View {
    /// Check if this view is the record list
    pub fn is_record_list(&self) -> bool {
        matches!(self, View::RecordList)
    }

    /// Get the parent view for navigation (Esc key)
    pub fn parent(&self) -> Option<View> {
        match self {
            View::RecordList => None,
            View::RecordDetail(_) => Some(View::RecordList),
        }
    }
}
