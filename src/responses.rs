//! Response Simulation
//!
//! Models the "thinking" behavior of the assistant: free-text requests are
//! classified into a category, a pseudo-random delay is drawn from configured
//! bounds, and a canned line sequence for the category is produced. No real
//! inference or I/O happens here.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use once_cell::sync::Lazy;

use crate::models::LineKind;

/// Derived classification of a free-text request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestCategory {
    /// Issue investigation and fix brainstorming
    Diagnose,
    /// Codebase explanation
    Explain,
    /// Code generation; surfaces a payload to the generated-code listener
    Generate,
    /// Stepping through a failure
    Debug,
    /// Code review
    Review,
    /// Anything else
    General,
}

impl RequestCategory {
    /// Stable lowercase name for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestCategory::Diagnose => "diagnose",
            RequestCategory::Explain => "explain",
            RequestCategory::Generate => "generate",
            RequestCategory::Debug => "debug",
            RequestCategory::Review => "review",
            RequestCategory::General => "general",
        }
    }
}

/// Classify a free-text request
///
/// Case-insensitive substring match in fixed priority order; the first match
/// wins. Pure function of the input text: the same input always yields the
/// same category.
pub fn derive_category(input: &str) -> RequestCategory {
    let lowered = input.to_lowercase();

    if lowered.contains("brainstorm") || lowered.contains("fix") {
        RequestCategory::Diagnose
    } else if lowered.contains("explain") {
        RequestCategory::Explain
    } else if lowered.contains("code") {
        RequestCategory::Generate
    } else if lowered.contains("debug") {
        RequestCategory::Debug
    } else if lowered.contains("review") {
        RequestCategory::Review
    } else {
        RequestCategory::General
    }
}

// Canned tables below are ordered (kind, text) pairs. Texts may contain the
// `{input}` placeholder, replaced with the raw request at render time.

static DIAGNOSE_LINES: Lazy<Vec<(LineKind, &'static str)>> = Lazy::new(|| {
    vec![
        (
            LineKind::System,
            "● I'll search for information about this issue and brainstorm potential fixes.",
        ),
        (
            LineKind::Success,
            "Fetch(https://github.com/anthropics/claude-code/issues/427)...",
        ),
        (LineKind::System, "└ Received 286.3KB (200 OK)"),
        (
            LineKind::System,
            "● Let me brainstorm potential fixes for implementing these prompt guidelines enforcement features in Claude CLI.",
        ),
        (
            LineKind::Success,
            "Search(pattern: \"**/utils/permissions/**\")...",
        ),
    ]
});

static EXPLAIN_LINES: Lazy<Vec<(LineKind, &'static str)>> = Lazy::new(|| {
    vec![
        (
            LineKind::System,
            "● I'll analyze this codebase and explain its structure and functionality.",
        ),
        (LineKind::Success, "Analyzing project structure..."),
        (
            LineKind::System,
            "This appears to be a web-based terminal interface for AI code assistance.",
        ),
    ]
});

static GENERATE_LINES: Lazy<Vec<(LineKind, &'static str)>> = Lazy::new(|| {
    vec![
        (LineKind::System, "● I'll write the code for this request."),
        (LineKind::Success, "Drafting implementation..."),
        (LineKind::Success, "Generated code sent to the editor."),
    ]
});

static DEBUG_LINES: Lazy<Vec<(LineKind, &'static str)>> = Lazy::new(|| {
    vec![
        (
            LineKind::System,
            "● Let me step through the failing path and isolate the defect.",
        ),
        (LineKind::Success, "Running diagnostics..."),
        (LineKind::System, "└ 0 warnings, 1 suspect call site"),
    ]
});

static REVIEW_LINES: Lazy<Vec<(LineKind, &'static str)>> = Lazy::new(|| {
    vec![
        (
            LineKind::System,
            "● I'll review this code for correctness and style.",
        ),
        (LineKind::Success, "Scanning changed files..."),
        (
            LineKind::System,
            "No blocking issues found; left two suggestions inline.",
        ),
    ]
});

static GENERAL_LINES: Lazy<Vec<(LineKind, &'static str)>> = Lazy::new(|| {
    vec![
        (LineKind::System, "● Processing: \"{input}\""),
        (LineKind::System, "How can I help you with your code today?"),
    ]
});

/// Canned line table for a category
pub fn response_table(category: RequestCategory) -> &'static [(LineKind, &'static str)] {
    match category {
        RequestCategory::Diagnose => &DIAGNOSE_LINES,
        RequestCategory::Explain => &EXPLAIN_LINES,
        RequestCategory::Generate => &GENERATE_LINES,
        RequestCategory::Debug => &DEBUG_LINES,
        RequestCategory::Review => &REVIEW_LINES,
        RequestCategory::General => &GENERAL_LINES,
    }
}

/// Render the canned lines for a category against the raw request
///
/// Substitutes the `{input}` placeholder with the request text.
pub fn render_response(category: RequestCategory, raw_input: &str) -> Vec<(LineKind, String)> {
    response_table(category)
        .iter()
        .map(|(kind, text)| (*kind, text.replace("{input}", raw_input)))
        .collect()
}

/// Draw a thinking delay from the configured bounds
///
/// The jitter source is the clock's subsecond nanoseconds; the simulation
/// only needs the delay to look varied, not to be statistically sound.
pub fn sample_delay(min_ms: u64, max_ms: u64) -> Duration {
    if max_ms <= min_ms {
        return Duration::from_millis(min_ms);
    }
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos() as u64;
    let span = max_ms - min_ms + 1;
    Duration::from_millis(min_ms + nanos % span)
}
