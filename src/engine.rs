//! Terminal Session Engine
//!
//! Composes the transcript log, command dispatcher, response simulator, and
//! session state into the `Idle | Busy | Ended` state machine exposed to the
//! host. Each engine instance is one independent session: no globals, no
//! shared registry. Hosts observe the session through snapshots or through
//! the broadcast event channel.

use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info};

use crate::config::{EngineConfig, SimulatorConfig};
use crate::dispatch::{self, BuiltinDirective, Dispatch};
use crate::error::{Error, Result};
use crate::events::{EngineEvent, EVENT_CHANNEL_CAPACITY};
use crate::models::{ApprovalMode, LineKind, PendingRequest, SessionInfo, TranscriptLine};
use crate::responses::{render_response, sample_delay, RequestCategory};
use crate::session::SessionState;
use crate::transcript::TranscriptLog;

/// Fixed capability-discovery lines seeded into every new session
pub const CAPABILITY_LINES: &[(LineKind, &str)] = &[
    (LineKind::Success, "✓ Found 1 MCP server • /mcp"),
    (LineKind::Success, "✓ Loaded project + user memory • /memory"),
];

/// Language tag passed to the generated-code listener
///
/// The simulator echoes the request text rather than producing real code, so
/// the payload is always plain text.
const GENERATED_PAYLOAD_LANGUAGE: &str = "text";

/// Position of the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    /// Ready for input
    #[default]
    Idle,
    /// A simulated response is pending; input is rejected
    Busy,
    /// The exit directive was issued; the session refuses further input
    Ended,
}

impl EngineState {
    /// Stable lowercase name for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineState::Idle => "idle",
            EngineState::Busy => "busy",
            EngineState::Ended => "ended",
        }
    }
}

/// Host-supplied options for a new session
#[derive(Default)]
pub struct SessionOptions {
    /// Display title for the welcome banner; falls back to the configured
    /// default when absent
    pub title: Option<String>,

    /// Lines seeded into the transcript after the fixed welcome sequence
    pub initial_lines: Vec<(LineKind, String)>,

    /// Listener invoked with `(language, code)` when a generate-category
    /// response completes
    pub code_listener: Option<CodeListener>,
}

/// Callback receiving generated-code payloads
pub type CodeListener = Arc<dyn Fn(&str, &str) + Send + Sync>;

/// Mutable session internals, serialized behind one lock
struct EngineInner {
    transcript: TranscriptLog,
    session: SessionState,
    state: EngineState,
    pending: Option<PendingRequest>,
    code_listener: Option<CodeListener>,
}

/// One simulated assistant session
pub struct TerminalEngine {
    inner: Arc<RwLock<EngineInner>>,
    events: broadcast::Sender<EngineEvent>,
    simulator: SimulatorConfig,
    title: String,
}

impl TerminalEngine {
    /// Create a session with default options
    pub fn new(config: EngineConfig) -> Self {
        Self::with_options(config, SessionOptions::default())
    }

    /// Create a session with host-supplied options
    ///
    /// The transcript is seeded with the three fixed welcome lines (banner
    /// plus capability discovery) followed by the caller's `initial_lines`.
    pub fn with_options(config: EngineConfig, options: SessionOptions) -> Self {
        let title = options
            .title
            .unwrap_or_else(|| config.session.title.clone());

        let mut transcript = TranscriptLog::new();
        transcript.append(
            LineKind::System,
            format!("✳ Welcome to {} research preview!", title),
        );
        for (kind, text) in CAPABILITY_LINES {
            transcript.append(*kind, *text);
        }
        for (kind, content) in options.initial_lines {
            transcript.append(kind, content);
        }

        let mut session_info = SessionInfo::new(
            config.session.workdir.clone(),
            config.session.model.clone(),
        );
        session_info.approval_mode = config.session.approval_mode;

        info!(
            "session {} created (model {}, workdir {})",
            session_info.session_id, session_info.model, session_info.workdir
        );

        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            inner: Arc::new(RwLock::new(EngineInner {
                transcript,
                session: SessionState::new(session_info, config.models),
                state: EngineState::Idle,
                pending: None,
                code_listener: options.code_listener,
            })),
            events,
            simulator: config.simulator,
            title,
        }
    }

    /// Session display title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Subscribe to append, clear, and state-transition events
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.events.subscribe()
    }

    /// Submit raw user input
    ///
    /// Validation happens before any transcript mutation: a rejected submit
    /// appends no lines. On success the input is echoed as an `Input` line
    /// and dispatched; built-ins and the exit directive complete
    /// synchronously, free text enters the busy state and completes after
    /// the simulated delay.
    pub async fn submit(&self, raw: &str) -> Result<Dispatch> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut inner = self.inner.write().await;
        match inner.state {
            EngineState::Ended => return Err(Error::SessionEnded),
            EngineState::Busy => return Err(Error::SessionBusy),
            EngineState::Idle => {}
        }

        let dispatch = dispatch::classify(trimmed);
        debug!("dispatching input as {:?}", dispatch);

        // The raw input is always echoed first, even when a /clear is about
        // to wipe it again.
        self.append(&mut inner, LineKind::Input, format!("> {}", trimmed));

        match dispatch {
            Dispatch::Exit => {
                self.append(&mut inner, LineKind::System, dispatch::FAREWELL);
                self.transition(&mut inner, EngineState::Ended);
            }
            Dispatch::BuiltIn(directive) => self.run_builtin(&mut inner, directive),
            Dispatch::FreeText(category) => {
                inner.pending = Some(PendingRequest::new(trimmed, category));
                self.transition(&mut inner, EngineState::Busy);
                self.spawn_completion(trimmed.to_string(), category);
            }
        }

        Ok(dispatch)
    }

    /// Current transcript in insertion order
    pub async fn transcript(&self) -> Vec<TranscriptLine> {
        self.inner.read().await.transcript.snapshot()
    }

    /// Current session metadata snapshot
    pub async fn session(&self) -> SessionInfo {
        self.inner.read().await.session.info()
    }

    /// Current state machine position
    pub async fn state(&self) -> EngineState {
        self.inner.read().await.state
    }

    /// Check whether a simulated response is pending
    pub async fn is_busy(&self) -> bool {
        self.inner.read().await.state == EngineState::Busy
    }

    /// The in-flight request, if any
    pub async fn pending_request(&self) -> Option<PendingRequest> {
        self.inner.read().await.pending.clone()
    }

    /// Switch the active model (external selector, not a transcript command)
    pub async fn set_model(&self, model: &str) -> Result<()> {
        self.inner.write().await.session.set_model(model)
    }

    /// Switch the approval mode
    pub async fn set_approval_mode(&self, mode: ApprovalMode) {
        self.inner.write().await.session.set_approval_mode(mode);
    }

    /// Parse and switch the approval mode by name
    pub async fn set_approval_mode_str(&self, mode: &str) -> Result<()> {
        self.inner.write().await.session.set_approval_mode_str(mode)
    }

    /// Replace the display working directory (reserved directive hook)
    pub async fn set_workdir(&self, workdir: &str) {
        self.inner.write().await.session.set_workdir(workdir);
    }

    /// Register the generated-code listener
    pub async fn set_code_listener(&self, listener: impl Fn(&str, &str) + Send + Sync + 'static) {
        self.inner.write().await.code_listener = Some(Arc::new(listener));
    }

    /// Export the transcript as pretty-printed JSON
    pub async fn export_transcript_json(&self) -> Result<String> {
        Ok(self.inner.read().await.transcript.export_json()?)
    }

    /// Export the transcript as plain text
    pub async fn export_transcript_text(&self) -> String {
        self.inner.read().await.transcript.export_text()
    }

    // === internals ===

    fn append(&self, inner: &mut EngineInner, kind: LineKind, content: impl Into<String>) {
        inner.transcript.append(kind, content);
        if let Some(line) = inner.transcript.last() {
            let _ = self.events.send(EngineEvent::LineAppended(line.clone()));
        }
    }

    fn transition(&self, inner: &mut EngineInner, state: EngineState) {
        debug!("state {} -> {}", inner.state.as_str(), state.as_str());
        inner.state = state;
        let _ = self.events.send(EngineEvent::StateChanged(state));
    }

    fn run_builtin(&self, inner: &mut EngineInner, directive: BuiltinDirective) {
        match directive {
            BuiltinDirective::Clear => {
                inner.transcript.clear();
                let _ = self.events.send(EngineEvent::TranscriptCleared);
            }
            BuiltinDirective::Help => {
                for (kind, text) in dispatch::help_lines() {
                    self.append(inner, kind, text);
                }
            }
            BuiltinDirective::Models => {
                let catalog = inner.session.model_catalog().to_vec();
                let active = inner.session.info().model;
                for (kind, text) in dispatch::model_lines(&catalog, &active) {
                    self.append(inner, kind, text);
                }
            }
            BuiltinDirective::Session => {
                // Fresh snapshot, never a cached copy
                let session_info = inner.session.info();
                for (kind, text) in dispatch::session_lines(&session_info) {
                    self.append(inner, kind, text);
                }
            }
        }
    }

    /// Finish a free-text request after the simulated thinking delay
    fn spawn_completion(&self, raw_input: String, category: RequestCategory) {
        let inner = Arc::clone(&self.inner);
        let events = self.events.clone();
        let delay = sample_delay(self.simulator.delay_min_ms, self.simulator.delay_max_ms);
        debug!(
            "simulating {} response in {}ms for {:?}",
            category.as_str(),
            delay.as_millis(),
            raw_input
        );

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let listener = {
                let mut guard = inner.write().await;
                for (kind, text) in render_response(category, &raw_input) {
                    guard.transcript.append(kind, text);
                    if let Some(line) = guard.transcript.last() {
                        let _ = events.send(EngineEvent::LineAppended(line.clone()));
                    }
                }
                guard.pending = None;
                guard.state = EngineState::Idle;
                let _ = events.send(EngineEvent::StateChanged(EngineState::Idle));

                if category == RequestCategory::Generate {
                    guard.code_listener.clone()
                } else {
                    None
                }
            };

            // Host callback runs outside the lock
            if let Some(listener) = listener {
                listener(GENERATED_PAYLOAD_LANGUAGE, &raw_input);
            }
        });
    }
}
