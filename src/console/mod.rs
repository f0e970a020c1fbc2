//! Console log aggregation
//!
//! The console is the in-app log panel: a bounded, shared store of messages,
//! a content-based categorizer used for styling, and an exporter producing a
//! plain-text artifact from a snapshot of the store.

mod category;
mod export;
mod store;

pub use category::{category, Category};
pub use export::{
    export_filename, export_snapshot, export_snapshot_at, export_to_sink, render_content,
    Artifact, ArtifactSink, ExportError, ExportOutcome, ExportResult, FileSink, EXPORT_HEADER,
};
pub use store::{
    LogEntry, LogStore, LogSubscription, Snapshot, SubscriptionId, DEFAULT_CAPACITY,
};
