//! Session State Management
//!
//! Holds and validates the mutable session metadata: active model, approval
//! mode, and (reserved) working directory. All mutation goes through
//! validated setters; reads hand out snapshots.

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{ApprovalMode, SessionInfo};

/// Validated owner of the session metadata
#[derive(Debug)]
pub struct SessionState {
    /// Current session metadata
    info: SessionInfo,
    /// Closed set of selectable model identifiers
    model_catalog: Vec<String>,
}

impl SessionState {
    /// Create session state with the given defaults and model catalog
    pub fn new(info: SessionInfo, model_catalog: Vec<String>) -> Self {
        Self {
            info,
            model_catalog,
        }
    }

    /// Snapshot of the current session metadata
    pub fn info(&self) -> SessionInfo {
        self.info.clone()
    }

    /// The configured model catalog
    pub fn model_catalog(&self) -> &[String] {
        &self.model_catalog
    }

    /// Check whether a model id is the currently active one
    pub fn is_active_model(&self, model: &str) -> bool {
        self.info.model == model
    }

    /// Switch the active model
    ///
    /// Fails with `InvalidModel` when the id is not in the configured
    /// catalog; the change is observable on the next `info()` call.
    pub fn set_model(&mut self, model: &str) -> Result<()> {
        if !self.model_catalog.iter().any(|m| m == model) {
            return Err(Error::InvalidModel {
                model: model.to_string(),
            });
        }
        debug!("switching model: {} -> {}", self.info.model, model);
        self.info.model = model.to_string();
        Ok(())
    }

    /// Switch the approval mode
    pub fn set_approval_mode(&mut self, mode: ApprovalMode) {
        debug!(
            "switching approval mode: {} -> {}",
            self.info.approval_mode.as_str(),
            mode.as_str()
        );
        self.info.approval_mode = mode;
    }

    /// Parse and switch the approval mode by name
    ///
    /// Fails with `InvalidApprovalMode` for names outside the closed set.
    pub fn set_approval_mode_str(&mut self, mode: &str) -> Result<()> {
        match ApprovalMode::parse(mode) {
            Some(parsed) => {
                self.set_approval_mode(parsed);
                Ok(())
            }
            None => Err(Error::InvalidApprovalMode {
                mode: mode.to_string(),
            }),
        }
    }

    /// Replace the display working directory (reserved directive hook)
    pub fn set_workdir(&mut self, workdir: impl Into<String>) {
        self.info.workdir = workdir.into();
    }
}
