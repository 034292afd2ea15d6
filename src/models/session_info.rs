//! Session Info Model
//!
//! Metadata describing a single assistant session: its identity, display
//! working directory, active model, and approval policy. The engine owns the
//! only mutable copy; hosts receive snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Approval policy for assistant actions
///
/// Consumed only for display in this engine; hosts that execute real actions
/// would branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalMode {
    /// Assistant suggests, user approves each action
    #[default]
    Suggest,
    /// Assistant acts without per-action approval
    Auto,
    /// User drives, assistant only acts when told
    Manual,
}

impl ApprovalMode {
    /// Stable lowercase name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalMode::Suggest => "suggest",
            ApprovalMode::Auto => "auto",
            ApprovalMode::Manual => "manual",
        }
    }

    /// Parse a mode name; `None` for anything outside the closed set
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "suggest" => Some(ApprovalMode::Suggest),
            "auto" => Some(ApprovalMode::Auto),
            "manual" => Some(ApprovalMode::Manual),
            _ => None,
        }
    }
}

/// Metadata for a single assistant session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    /// Opaque stable identifier, generated once per session lifetime
    pub session_id: String,

    /// Display path of the working directory
    pub workdir: String,

    /// Identifier of the active model
    pub model: String,

    /// Approval policy flag
    pub approval_mode: ApprovalMode,

    /// When the session started
    pub started_at: DateTime<Utc>,
}

impl SessionInfo {
    /// Create session metadata with a freshly generated id
    pub fn new(workdir: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            session_id: Uuid::new_v4().simple().to_string(),
            workdir: workdir.into(),
            model: model.into(),
            approval_mode: ApprovalMode::default(),
            started_at: Utc::now(),
        }
    }

    /// Session duration so far
    pub fn session_duration(&self) -> std::time::Duration {
        Utc::now()
            .signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or_default()
    }
}
