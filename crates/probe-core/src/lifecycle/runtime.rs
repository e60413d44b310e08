use anyhow::{Context, Result};
use detect_client::{Client, Session};
use tracing::info;

use crate::config::ProbeConfig;

/// Sequential driver for the probe. One test identifier is fully processed
/// (fetch → validate → install → execute → report) before the next is
/// considered; the session token and platform tag are set once at startup
/// and read-only afterwards.
pub struct ProbeRuntime {
    pub(super) config: ProbeConfig,
    pub(super) client: Client,
    pub(super) session: Option<Session>,
    pub(super) cycles_completed: u64,
}

impl ProbeRuntime {
    pub fn new(config: ProbeConfig) -> Self {
        let client = Client::new(config.api.clone());
        Self {
            config,
            client,
            session: None,
            cycles_completed: 0,
        }
    }

    pub fn api(&self) -> &str {
        self.client.api()
    }

    pub fn cycles_completed(&self) -> u64 {
        self.cycles_completed
    }

    /// One-shot endpoint registration plus artifact-directory setup.
    /// Failure here is fatal: the probe never enters the test loop
    /// without a session.
    pub async fn register(&mut self) -> Result<()> {
        let session = self
            .client
            .register(
                &self.config.account_id,
                &self.config.account_token,
                &self.config.hostname,
            )
            .await
            .context("endpoint registration failed")?;

        let dir = self.config.binary_dir();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed creating artifact directory {}", dir.display()))?;

        info!(
            host = %self.config.hostname,
            dos = %self.client.platform(),
            ca = %self.config.ca_host,
            "endpoint registered"
        );
        self.session = Some(session);
        Ok(())
    }
}
