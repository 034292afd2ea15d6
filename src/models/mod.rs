//! Core data models for buddyterm
//!
//! This module contains the data structures that represent the domain
//! entities of a simulated assistant session: transcript lines, session
//! metadata, and in-flight requests.

pub mod pending_request;
pub mod session_info;
pub mod transcript_line;

// Re-exports for convenience
pub use pending_request::PendingRequest;
pub use session_info::{ApprovalMode, SessionInfo};
pub use transcript_line::{LineKind, TranscriptLine};
