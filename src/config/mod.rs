//! Configuration management for buddyterm
//!
//! Engine configuration: default session identity, the model catalog, and
//! the thinking-delay bounds. Values are data, not contract; hosts and
//! config files may replace any of them. Loading from TOML files lives in
//! [`loader`].

pub mod loader;

use serde::{Deserialize, Serialize};

use crate::models::ApprovalMode;

/// Main configuration structure for a terminal engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Default session identity
    pub session: SessionDefaults,

    /// Response simulator tuning
    pub simulator: SimulatorConfig,

    /// Closed set of selectable model identifiers
    pub models: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            session: SessionDefaults::default(),
            simulator: SimulatorConfig::default(),
            models: vec![
                "claude-sonnet-4".to_string(),
                "claude-opus-4".to_string(),
                "gpt-5".to_string(),
                "gpt-4.1".to_string(),
                "o4-mini".to_string(),
            ],
        }
    }
}

impl EngineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.models.is_empty() {
            return Err(ConfigError::EmptyModelCatalog);
        }
        if !self.models.iter().any(|m| *m == self.session.model) {
            return Err(ConfigError::DefaultModelNotInCatalog(
                self.session.model.clone(),
            ));
        }
        if self.simulator.delay_min_ms > self.simulator.delay_max_ms {
            return Err(ConfigError::InvalidDelayBounds {
                min_ms: self.simulator.delay_min_ms,
                max_ms: self.simulator.delay_max_ms,
            });
        }
        Ok(())
    }
}

/// Default identity of a freshly created session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDefaults {
    /// Display title used in the welcome banner
    pub title: String,

    /// Display path of the working directory
    pub workdir: String,

    /// Initially active model (must be in the catalog)
    pub model: String,

    /// Initial approval policy
    pub approval_mode: ApprovalMode,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            title: "Claude Web Buddy Terminal".to_string(),
            workdir: "~/dev/github.com/claude-web-buddy".to_string(),
            model: "claude-sonnet-4".to_string(),
            approval_mode: ApprovalMode::Suggest,
        }
    }
}

/// Response simulator tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Lower bound of the simulated thinking delay, in milliseconds
    pub delay_min_ms: u64,

    /// Upper bound of the simulated thinking delay, in milliseconds
    pub delay_max_ms: u64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            delay_min_ms: 800,
            delay_max_ms: 2300,
        }
    }
}

impl SimulatorConfig {
    /// Zero-delay configuration for deterministic tests
    pub fn immediate() -> Self {
        Self {
            delay_min_ms: 0,
            delay_max_ms: 0,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Model catalog cannot be empty")]
    EmptyModelCatalog,

    #[error("Default model '{0}' is not in the model catalog")]
    DefaultModelNotInCatalog(String),

    #[error("Invalid delay bounds: min {min_ms}ms > max {max_ms}ms")]
    InvalidDelayBounds { min_ms: u64, max_ms: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
