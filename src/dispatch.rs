//! Command Dispatch
//!
//! Classifies raw user input into the three execution paths (session exit,
//! built-in directive, free-text request) and renders the output of the
//! synchronous built-ins. Classification is a pure function; the engine
//! performs the actual transcript mutation.

use crate::models::{LineKind, SessionInfo};
use crate::responses::{derive_category, RequestCategory};

/// Farewell line appended by the session-exit directive
pub const FAREWELL: &str = "Goodbye!";

/// Fixed help text emitted by `/help`
pub const HELP_LINES: &[&str] = &[
    "Available commands:",
    "  /clear - Clear terminal",
    "  /help - Show this help",
    "  /models - List available models",
    "  /session - Show session info",
    "  q or ctrl+c - Exit",
];

/// Header line emitted by `/models`
pub const MODELS_HEADER: &str = "Available models:";

/// Execution path chosen for a submitted input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// `q` or `exit`: end the session
    Exit,
    /// A recognized `/`-prefixed directive, handled synchronously
    BuiltIn(BuiltinDirective),
    /// Everything else: routed to the response simulator
    FreeText(RequestCategory),
}

/// The closed table of supported built-in directives
///
/// `/code`, `/review`, `/explain`, `/debug` are intentionally absent: they
/// fall through to free-text handling and act as categorized triggers there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinDirective {
    /// `/clear`: wipe the transcript
    Clear,
    /// `/help`: list available directives
    Help,
    /// `/models`: list the model catalog
    Models,
    /// `/session`: report session metadata
    Session,
}

/// Classify trimmed, non-empty input
///
/// Exit matching is exact and case-sensitive. An unrecognized `/`-prefixed
/// input falls through to free-text handling instead of erroring.
pub fn classify(input: &str) -> Dispatch {
    if input == "q" || input == "exit" {
        return Dispatch::Exit;
    }

    if input.starts_with('/') {
        match input {
            "/clear" => return Dispatch::BuiltIn(BuiltinDirective::Clear),
            "/help" => return Dispatch::BuiltIn(BuiltinDirective::Help),
            "/models" => return Dispatch::BuiltIn(BuiltinDirective::Models),
            "/session" => return Dispatch::BuiltIn(BuiltinDirective::Session),
            _ => {} // fall through to free text
        }
    }

    Dispatch::FreeText(derive_category(input))
}

/// Render the `/help` output
pub fn help_lines() -> Vec<(LineKind, String)> {
    HELP_LINES
        .iter()
        .map(|text| (LineKind::System, text.to_string()))
        .collect()
}

/// Render the `/models` output
///
/// One line per catalog entry; the active model is a `Success` line marked
/// `(current)`, the rest are `System` lines.
pub fn model_lines(catalog: &[String], active_model: &str) -> Vec<(LineKind, String)> {
    let mut lines = vec![(LineKind::System, MODELS_HEADER.to_string())];
    for model in catalog {
        if model == active_model {
            lines.push((LineKind::Success, format!("  • {} (current)", model)));
        } else {
            lines.push((LineKind::System, format!("  • {}", model)));
        }
    }
    lines
}

/// Render the `/session` output from a fresh session snapshot
pub fn session_lines(info: &SessionInfo) -> Vec<(LineKind, String)> {
    vec![
        (LineKind::System, format!("Session ID: {}", info.session_id)),
        (LineKind::System, format!("Workdir: {}", info.workdir)),
        (LineKind::System, format!("Model: {}", info.model)),
        (
            LineKind::System,
            format!("Approval: {}", info.approval_mode.as_str()),
        ),
    ]
}
