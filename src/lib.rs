//! buddyterm - A simulated AI coding-assistant terminal session engine
//!
//! This library provides the core functionality for a host application that
//! embeds an interactive coding-assistant terminal: users submit commands or
//! free-text requests, receive a scrolling transcript of typed lines, and the
//! session tracks its metadata (session id, working directory, active model,
//! approval mode). Responses are simulated: no process execution, network
//! calls, or real inference happen here.
//!
//! ## Features
//!
//! - **Transcript log:** Append-only, time-ordered line history with ids
//! - **Command dispatch:** Built-in directives (`/clear`, `/help`,
//!   `/models`, `/session`, `q`/`exit`) vs. free-text requests
//! - **Response simulation:** Category-derived canned responses after a
//!   pseudo-random thinking delay
//! - **State machine:** `Idle | Busy | Ended` with strict busy rejection
//! - **Events:** Broadcast notifications for appends, clears, and state
//!   transitions
//! - **Configuration:** TOML-based engine configuration with defaults
//!
//! ## Module Organization
//!
//! - [`engine`] - The terminal session engine and its state machine
//! - [`transcript`] - The append-only transcript log
//! - [`dispatch`] - Input classification and built-in directive output
//! - [`responses`] - Category derivation, canned tables, delay sampling
//! - [`session`] - Validated session-state mutation
//! - [`config`] - Engine configuration and file loading
//! - [`models`] - Data structures (TranscriptLine, SessionInfo, ...)
//! - [`events`] - Host notification events
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```no_run
//! use buddyterm::{EngineConfig, TerminalEngine};
//!
//! # async fn run() -> buddyterm::Result<()> {
//! let engine = TerminalEngine::new(EngineConfig::default());
//! let _events = engine.subscribe();
//!
//! engine.submit("/help").await?;
//! for line in engine.transcript().await {
//!     println!("{}", line.content);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! One engine instance is one logical session. Internals live behind a
//! single `tokio::sync::RwLock`; the only suspension point is the response
//! simulator's delay, which completes on a spawned task. Hosts running
//! several terminals side by side create one engine per terminal; there is
//! no process-wide session registry.

#[macro_use]
extern crate tracing;

pub mod config;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod events;
pub mod models;
pub mod responses;
pub mod session;
pub mod transcript;

// Re-exports for core functionality
pub use config::{EngineConfig, SessionDefaults, SimulatorConfig};
pub use dispatch::{BuiltinDirective, Dispatch};
pub use engine::{EngineState, SessionOptions, TerminalEngine};
pub use error::{Error, Result};
pub use events::EngineEvent;

// Convenience re-exports for common types
pub use config::loader::ConfigLoader;
pub use models::{ApprovalMode, LineKind, SessionInfo, TranscriptLine};
pub use responses::RequestCategory;

// Version information
/// The current version of buddyterm from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The library name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The library description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Initialize tracing with an env-filter subscriber
///
/// Honors `RUST_LOG`; defaults to `info` for this crate. Safe to call once
/// per process; hosts embedding their own subscriber should skip this.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", NAME)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

/// Create an engine from configuration found in standard locations
///
/// Falls back to defaults when no config file exists; a file that exists but
/// fails to parse or validate is reported rather than silently replaced.
pub fn create_engine() -> Result<TerminalEngine> {
    let config = match ConfigLoader::load() {
        Ok(config) => {
            info!("engine configuration loaded");
            config
        }
        Err(e) => {
            warn!("failed to load configuration: {}", e);
            return Err(Error::Other(format!("configuration error: {}", e)));
        }
    };

    Ok(TerminalEngine::new(config))
}
