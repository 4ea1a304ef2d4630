//! # Claim History
//!
//! Session-lived log of every `(input, output)` pair the client has shown.
//!
//! ```text
//! History (append-only)          HistoryPanel (what the panel shows)
//! ├── #0 echo   "sky is blue"    visible: bool
//! ├── #1 result "TRUE"           rows: snapshot taken on show,
//! └── ...                              plus entries appended while open
//! ```
//!
//! Entries are never edited or removed; the log only grows until the
//! process exits. The panel keeps its own copy of rendered rows so that
//! hiding it does not throw them away, mirroring how a closed panel keeps
//! its last contents until it is opened again.

use chrono::{DateTime, Local};

/// Where a history entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Interim entry recorded from the raw input before the service answered.
    Echo,
    /// Entry built from the service's response.
    Result,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub input: String,
    pub output: String,
    pub kind: EntryKind,
    pub recorded_at: DateTime<Local>,
}

impl HistoryEntry {
    pub fn new(input: impl Into<String>, output: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            kind,
            recorded_at: Local::now(),
        }
    }
}

/// Append-only, insertion-ordered log of history entries.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }
}

/// Visibility and rendered rows of the history panel.
#[derive(Debug, Default)]
pub struct HistoryPanel {
    visible: bool,
    rows: Vec<HistoryEntry>,
}

impl HistoryPanel {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn rows(&self) -> &[HistoryEntry] {
        &self.rows
    }

    /// Show the panel, discarding stale rows and rebuilding from the full log.
    pub fn show(&mut self, history: &History) {
        self.visible = true;
        self.rows.clear();
        self.rows.extend(history.entries().iter().cloned());
    }

    /// Hide the panel. Rows are kept until the next `show`.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Append a freshly recorded entry, but only while the panel is open.
    pub fn push_if_visible(&mut self, entry: &HistoryEntry) {
        if self.visible {
            self.rows.push(entry.clone());
        }
    }
}
