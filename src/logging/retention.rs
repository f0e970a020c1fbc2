//! Log file retention management
//!
//! Handles cleanup of old diagnostic log files based on age.

use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

use anyhow::Result;

use super::file_writer::LOG_FILE_PREFIX;

/// Default retention period in days
pub const DEFAULT_RETENTION_DAYS: u64 = 7;

/// Clean up log files older than `retention_days`
///
/// Only files named like our own logs are touched. Returns the number of files deleted.
pub fn cleanup_old_logs(logs_dir: &Path, retention_days: u64) -> Result<usize> {
    let retention = Duration::from_secs(retention_days.saturating_mul(24 * 60 * 60));
    let cutoff = SystemTime::now()
        .checked_sub(retention)
        .unwrap_or(SystemTime::UNIX_EPOCH);
    cleanup_logs_older_than(logs_dir, cutoff)
}

fn cleanup_logs_older_than(logs_dir: &Path, cutoff: SystemTime) -> Result<usize> {
    if !logs_dir.exists() {
        return Ok(0);
    }

    let mut deleted_count = 0;

    for entry in fs::read_dir(logs_dir)? {
        let entry = entry?;
        let path = entry.path();

        let is_log_file = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.starts_with(LOG_FILE_PREFIX) && name.ends_with(".log"));
        if !is_log_file {
            continue;
        }

        let modified = entry.metadata().and_then(|m| m.modified());
        if let Ok(modified) = modified {
            if modified < cutoff && fs::remove_file(&path).is_ok() {
                deleted_count += 1;
            }
        }
    }

    Ok(deleted_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        File::create(path).unwrap().write_all(b"test").unwrap();
    }

    #[test]
    fn test_cleanup_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        let count = cleanup_old_logs(temp_dir.path(), DEFAULT_RETENTION_DAYS).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_cleanup_nonexistent_dir() {
        let path = Path::new("/nonexistent/path/for/testing");
        let count = cleanup_old_logs(path, DEFAULT_RETENTION_DAYS).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_cleanup_keeps_recent_files() {
        let temp_dir = TempDir::new().unwrap();
        let log_file = temp_dir.path().join("consolelog-2026-01-21_14-30-45.log");
        touch(&log_file);

        let count = cleanup_old_logs(temp_dir.path(), DEFAULT_RETENTION_DAYS).unwrap();
        assert_eq!(count, 0);
        assert!(log_file.exists());
    }

    #[test]
    fn test_huge_retention_keeps_everything() {
        let temp_dir = TempDir::new().unwrap();
        let log_file = temp_dir.path().join("consolelog-2026-01-21_14-30-45.log");
        touch(&log_file);

        let count = cleanup_old_logs(temp_dir.path(), u64::MAX).unwrap();
        assert_eq!(count, 0);
        assert!(log_file.exists());
    }

    #[test]
    fn test_cleanup_removes_only_our_expired_logs() {
        let temp_dir = TempDir::new().unwrap();
        let ours = temp_dir.path().join("consolelog-2026-01-01_00-00-00.log");
        let other_prefix = temp_dir.path().join("other-2026-01-01_00-00-00.log");
        let export = temp_dir.path().join("iConsoleLog_20260101_000000_000.txt");
        touch(&ours);
        touch(&other_prefix);
        touch(&export);

        // A cutoff in the future makes every file look expired
        let cutoff = SystemTime::now() + Duration::from_secs(60);
        let count = cleanup_logs_older_than(temp_dir.path(), cutoff).unwrap();

        assert_eq!(count, 1);
        assert!(!ours.exists());
        assert!(other_prefix.exists());
        assert!(export.exists());
    }
}
