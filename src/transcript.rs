//! Transcript Log
//!
//! Append-only, time-ordered sequence of transcript lines. The engine owns
//! the only instance per session; hosts read it through snapshots. Lines are
//! never mutated or reordered after insertion. The single bulk `clear`
//! operation replaces the whole log with empty.

use crate::models::{LineKind, TranscriptLine};

/// Append-only log of transcript lines
#[derive(Debug, Default)]
pub struct TranscriptLog {
    /// Lines in insertion order
    lines: Vec<TranscriptLine>,
    /// Next line id to assign
    next_id: u64,
}

impl TranscriptLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line, assigning its id and timestamp
    ///
    /// Returns the assigned line id. O(1) amortized; never blocks.
    pub fn append(&mut self, kind: LineKind, content: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.lines.push(TranscriptLine::new(id, kind, content));
        id
    }

    /// Atomically replace the log with an empty sequence
    ///
    /// Id assignment keeps counting upward so ids stay unique across clears.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Current transcript in insertion order
    pub fn snapshot(&self) -> Vec<TranscriptLine> {
        self.lines.clone()
    }

    /// Number of lines currently in the log
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Most recently appended line
    pub fn last(&self) -> Option<&TranscriptLine> {
        self.lines.last()
    }

    /// Borrow the lines without cloning
    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    /// Export the transcript as pretty-printed JSON
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.lines)
    }

    /// Export the transcript as plain text, one line per entry
    pub fn export_text(&self) -> String {
        let mut output = String::new();
        for line in &self.lines {
            output.push_str(&line.to_plain_text());
            output.push('\n');
        }
        output
    }
}
