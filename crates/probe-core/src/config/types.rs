use std::path::PathBuf;

/// Startup configuration for the probe. Layered defaults → optional TOML
/// file → `REDCELL_*` env overrides, then read-only for the process
/// lifetime.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Control service base URL. Test fetches GET this URL directly.
    pub api: String,
    /// Pinned artifact origin host; also names the artifact directory.
    pub ca_host: String,
    /// Account credentials exchanged for a session token at registration.
    pub account_id: String,
    pub account_token: String,
    /// Endpoint name reported at registration.
    pub hostname: String,
    /// Parent directory for the artifact directory.
    pub workdir: PathBuf,
}

impl ProbeConfig {
    /// Fixed directory artifacts are installed into, named after the
    /// trusted origin host.
    pub fn binary_dir(&self) -> PathBuf {
        self.workdir.join(&self.ca_host)
    }
}
