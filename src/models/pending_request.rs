//! Pending Request Model
//!
//! Ephemeral record of a free-text request that is currently being simulated.
//! Created when the dispatcher accepts a free-text submission; dropped when
//! the simulated response completes.

use chrono::{DateTime, Utc};

use crate::responses::RequestCategory;

/// An in-flight free-text request
#[derive(Debug, Clone)]
pub struct PendingRequest {
    /// The free-text command that triggered simulation
    pub raw_input: String,

    /// When the request entered the busy state
    pub started_at: DateTime<Utc>,

    /// Derived classification used to select canned output
    pub category: RequestCategory,
}

impl PendingRequest {
    /// Record a newly accepted free-text request
    pub fn new(raw_input: impl Into<String>, category: RequestCategory) -> Self {
        Self {
            raw_input: raw_input.into(),
            started_at: Utc::now(),
            category,
        }
    }

    /// Time elapsed since the request was accepted
    pub fn elapsed(&self) -> std::time::Duration {
        Utc::now()
            .signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or_default()
    }
}
