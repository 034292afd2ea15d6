//! Transcript Line Model
//!
//! Represents a single line of the session transcript. Lines are created by
//! the engine when input is dispatched or when simulated responses complete,
//! and are immutable once appended.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Presentation category of a transcript line
///
/// This is a closed set: hosts switch rendering on it, and the dispatcher
/// relies on it to distinguish user input from engine output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Echo of the user's own input
    Input,
    /// Plain response output
    Output,
    /// Engine status and informational text
    System,
    /// Error text
    Error,
    /// Positive status text (checkmarks, completions)
    Success,
}

impl LineKind {
    /// Stable lowercase name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            LineKind::Input => "input",
            LineKind::Output => "output",
            LineKind::System => "system",
            LineKind::Error => "error",
            LineKind::Success => "success",
        }
    }
}

/// A single line of the session transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptLine {
    /// Unique identifier, strictly increasing in creation order
    pub id: u64,

    /// Presentation category
    pub kind: LineKind,

    /// Text payload; may embed newlines
    pub content: String,

    /// When this line was appended
    pub created_at: DateTime<Utc>,
}

impl TranscriptLine {
    /// Create a new transcript line with the current timestamp
    pub fn new(id: u64, kind: LineKind, content: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Check whether this line echoes user input
    pub fn is_input(&self) -> bool {
        matches!(self.kind, LineKind::Input)
    }

    /// Render the line as plain text for exports
    pub fn to_plain_text(&self) -> String {
        format!("[{}] {}", self.kind.as_str(), self.content)
    }
}
