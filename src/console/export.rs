//! Console log export
//!
//! Turns a snapshot of the console store into a plain-text artifact and hands
//! it to an [`ArtifactSink`] for persistence.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::store::{LogEntry, LogStore};

/// First line of every exported file
pub const EXPORT_HEADER: &str = "iConsoleLog -> Console Log Output:";

/// Line placed under the header
pub const EXPORT_SEPARATOR: &str = " ------------------------------- ";

/// Prefix of exported file names
pub const EXPORT_FILE_PREFIX: &str = "iConsoleLog_";

/// Format of the per-entry timestamp line
const ENTRY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f %z";

/// Format of the timestamp embedded in the file name (digits and `_` only)
const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S_%3f";

/// Errors raised while delivering an artifact
#[derive(Debug, Error)]
pub enum ExportError {
    /// The sink could not write the artifact
    #[error("failed to write console log to {}: {source}", path.display())]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExportError {
    /// Underlying IO error
    pub fn io_error(&self) -> &io::Error {
        match self {
            ExportError::ArtifactWrite { source, .. } => source,
        }
    }
}

/// Exported console log, ready for a sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name derived from the export moment
    pub filename: String,
    /// Full text of the export
    pub content: String,
}

/// Result of exporting a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportResult {
    /// The store had entries
    Artifact(Artifact),
    /// The store was empty; nothing was produced
    EmptyBuffer,
}

/// Result of exporting a store into a sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The artifact was written to this path
    Delivered(PathBuf),
    /// The store was empty; the sink was not called
    NothingToExport,
}

/// Destination for exported artifacts
pub trait ArtifactSink {
    /// Persist the artifact, returning where it ended up
    fn deliver(&self, artifact: &Artifact) -> Result<PathBuf, ExportError>;
}

/// Sink writing artifacts as files into a directory
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    /// Create a sink writing into `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory artifacts are written to
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactSink for FileSink {
    fn deliver(&self, artifact: &Artifact) -> Result<PathBuf, ExportError> {
        let path = self.dir.join(&artifact.filename);
        let tmp_path = self.dir.join(format!("{}.tmp", artifact.filename));
        let write_err = |source| ExportError::ArtifactWrite {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(write_err)?;
        replace_via_temp(&tmp_path, &path, |tmp| fs::write(tmp, &artifact.content))
            .map_err(write_err)?;

        tracing::info!(path = %path.display(), bytes = artifact.content.len(), "Console log exported");
        Ok(path)
    }
}

/// Write `tmp_path` and rename it over `path`; the temp file never outlives a failure
fn replace_via_temp(
    tmp_path: &Path,
    path: &Path,
    write: impl FnOnce(&Path) -> io::Result<()>,
) -> io::Result<()> {
    let result = write(tmp_path).and_then(|()| fs::rename(tmp_path, path));
    if result.is_err() {
        let _ = fs::remove_file(tmp_path);
    }
    result
}

/// File name for an export taken at `at`
pub fn export_filename(at: DateTime<Utc>) -> String {
    format!(
        "{}{}.txt",
        EXPORT_FILE_PREFIX,
        at.format(FILENAME_TIMESTAMP_FORMAT)
    )
}

fn render_entry(entry: &LogEntry) -> String {
    format!(
        "{}:\n{}\n",
        entry.timestamp.format(ENTRY_TIMESTAMP_FORMAT),
        entry.message
    )
}

/// Render entries into the export text
pub fn render_content(entries: &[LogEntry]) -> String {
    let body: Vec<String> = entries.iter().map(render_entry).collect();
    format!(
        "{}\n{}\n\n{}",
        EXPORT_HEADER,
        EXPORT_SEPARATOR,
        body.join("\n\n")
    )
}

/// Export the current contents of `store`
pub fn export_snapshot(store: &LogStore) -> ExportResult {
    export_snapshot_at(store, Utc::now())
}

/// Export the current contents of `store`, naming the artifact after `at`
pub fn export_snapshot_at(store: &LogStore, at: DateTime<Utc>) -> ExportResult {
    let entries = store.snapshot();
    if entries.is_empty() {
        return ExportResult::EmptyBuffer;
    }

    ExportResult::Artifact(Artifact {
        filename: export_filename(at),
        content: render_content(&entries),
    })
}

/// Export `store` and deliver the artifact to `sink`
///
/// An empty store is not an error and never reaches the sink.
pub fn export_to_sink(
    store: &LogStore,
    sink: &dyn ArtifactSink,
) -> Result<ExportOutcome, ExportError> {
    match export_snapshot(store) {
        ExportResult::EmptyBuffer => {
            tracing::debug!("Console log export skipped: buffer is empty");
            Ok(ExportOutcome::NothingToExport)
        }
        ExportResult::Artifact(artifact) => sink.deliver(&artifact).map(ExportOutcome::Delivered),
    }
}
