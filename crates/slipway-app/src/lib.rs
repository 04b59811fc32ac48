pub mod services;
pub mod session;

use std::sync::Arc;

use anyhow::{Context, Result};
use slipway_core::config::{SlipwayConfig, load_config, resolve_config_path};

pub use services::{
    CloneEvent, CloneRequest, ListingEvent, UpdateEvent, VerifyEvent, WorkflowServices,
};
pub use session::{LogLine, WorkflowSession};

pub struct App {
    services: Arc<dyn WorkflowServices>,
}

impl App {
    pub fn new(services: Arc<dyn WorkflowServices>) -> Self {
        Self { services }
    }

    /// Fresh workflow session with empty form fields.
    pub fn session(&self) -> WorkflowSession {
        WorkflowSession::new(self.services.clone())
    }

    /// Fresh session pre-filled from the user's config defaults.
    pub fn session_with_defaults(&self, config: &SlipwayConfig) -> WorkflowSession {
        let mut session = self.session();
        session.form.fork_target = config.defaults.fork_target.clone();
        session.form.gitlab_namespace = config.defaults.gitlab_namespace.clone();
        session.form.clone_path = config.defaults.clone_path.clone();
        session
    }

    /// Load the optional user config. A missing file is not an error; an
    /// unreadable or invalid one is.
    pub fn load_optional_config(&self) -> Result<Option<SlipwayConfig>> {
        let config_path = resolve_config_path().context("failed to resolve config path")?;
        if !config_path.exists() {
            return Ok(None);
        }

        let config = load_config(&config_path)
            .with_context(|| format!("invalid config at {}", config_path.display()))?;
        Ok(Some(config))
    }
}
