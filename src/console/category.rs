//! Message categorization
//!
//! Maps a console message to a display category by looking for marker
//! substrings in the text. Nothing here touches stored state.

/// Display category derived from a console message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Error,
    Success,
    Call,
    Delete,
    Info,
}

/// Markers checked in priority order; the first one found wins.
const MARKERS: &[(&str, Category)] = &[
    ("Error", Category::Error),
    ("Success", Category::Success),
    ("func", Category::Call),
    ("DELETE", Category::Delete),
];

impl Category {
    /// Short tag for this category
    pub fn label(&self) -> &'static str {
        match self {
            Category::Error => "ERROR",
            Category::Success => "OK",
            Category::Call => "CALL",
            Category::Delete => "DELETE",
            Category::Info => "INFO",
        }
    }
}

/// Categorize a message by its content
///
/// Case-sensitive, first match wins, falls back to [`Category::Info`].
pub fn category(message: &str) -> Category {
    MARKERS
        .iter()
        .find(|(marker, _)| message.contains(marker))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Info)
}
