// Snapshot management for undoing text edits

use thiserror::Error;
use tracing::trace;

/// History lookup errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("Snapshot index {index} out of range for history of length {len}")]
    OutOfRange { index: usize, len: usize },
}

/// Immutable copy of a [`TextBuffer`]'s contents at one moment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    text: String,
}

impl Snapshot {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        self.text.len()
    }
}

/// Mutable text accumulator
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    pub fn new() -> Self {
        TextBuffer {
            text: String::new(),
        }
    }

    /// Append text to the end of the buffer
    pub fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Capture the current text as a snapshot
    pub fn capture(&self) -> Snapshot {
        Snapshot {
            text: self.text.clone(),
        }
    }

    /// Replace the current text wholesale with the snapshot's text
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.text.clear();
        self.text.push_str(&snapshot.text);
    }
}

/// Append-only list of snapshots, indexed by insertion order
#[derive(Debug, Default)]
pub struct History {
    snapshots: Vec<Snapshot>,
    current_memory: usize,
}

impl History {
    pub fn new() -> Self {
        History {
            snapshots: Vec::new(),
            current_memory: 0,
        }
    }

    /// Add a snapshot to history
    pub fn save(&mut self, snapshot: Snapshot) {
        self.current_memory += snapshot.estimated_size();
        self.snapshots.push(snapshot);
        trace!(
            index = self.snapshots.len() - 1,
            bytes = self.current_memory,
            "snapshot saved"
        );
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Result<&Snapshot, HistoryError> {
        self.snapshots.get(index).ok_or(HistoryError::OutOfRange {
            index,
            len: self.snapshots.len(),
        })
    }

    /// Most recently saved snapshot
    pub fn latest(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Total bytes of snapshot text held
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }
}
