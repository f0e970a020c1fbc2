//! Diagnostic logging for consolelog
//!
//! Sets up the tracing file log and prunes old log files. This is separate
//! from the in-app console (see [`crate::console`]).

mod file_writer;
mod retention;

pub use file_writer::{init_file_logging, LogFileInfo, LoggingGuard, LOG_FILE_PREFIX};
pub use retention::{cleanup_old_logs, DEFAULT_RETENTION_DAYS};
