//! Engine Event Notifications
//!
//! Push notifications delivered to host subscribers over a
//! `tokio::sync::broadcast` channel. The host is notified on every transcript
//! append, on every state transition, and on transcript clear, so it can
//! drive a live scrolling view and an input-disabled indicator without
//! polling. Snapshots remain available for hosts that prefer to poll.

use crate::engine::EngineState;
use crate::models::TranscriptLine;

/// Capacity of the broadcast channel backing `subscribe`
///
/// Lagging subscribers miss events rather than blocking the engine.
pub const EVENT_CHANNEL_CAPACITY: usize = 256;

/// A state or transcript change observable by the host
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// A line was appended to the transcript
    LineAppended(TranscriptLine),
    /// The transcript was wiped by `/clear`
    TranscriptCleared,
    /// The engine moved to a new state
    StateChanged(EngineState),
}
