//! Record management module
//!
//! Records are the demo's list items: a timestamped row that can be added,
//! opened and deleted from the main screen.

pub mod store;

pub use store::RecordStore;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a record
pub type RecordId = Uuid;

/// Display format for record timestamps
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single timestamped record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier
    pub id: RecordId,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Record {
    /// Create a record stamped with the current time
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }

    /// Creation time formatted for display in local time
    pub fn display_timestamp(&self) -> String {
        self.created_at
            .with_timezone(&Local)
            .format(DISPLAY_FORMAT)
            .to_string()
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}
