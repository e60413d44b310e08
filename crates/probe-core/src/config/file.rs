use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::constants::CONFIG_PATH_ENV;
use super::types::ProbeConfig;
use super::util::{env_non_empty, non_empty};

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    probe: Option<FileProbeConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct FileProbeConfig {
    api: Option<String>,
    ca_host: Option<String>,
    account: Option<String>,
    account_token: Option<String>,
    hostname: Option<String>,
    workdir: Option<String>,
}

impl ProbeConfig {
    pub(super) fn apply_file_config(&mut self) -> Result<bool> {
        let Some(path) = resolve_config_path() else {
            return Ok(false);
        };

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed reading config file {}", path.display()))?;
        let file_cfg: FileConfig = toml::from_str(&raw)
            .with_context(|| format!("failed parsing TOML config {}", path.display()))?;

        let Some(probe) = file_cfg.probe else {
            return Ok(true);
        };

        if let Some(v) = non_empty(probe.api) {
            self.api = v;
        }
        if let Some(v) = non_empty(probe.ca_host) {
            self.ca_host = v;
        }
        if let Some(v) = non_empty(probe.account) {
            self.account_id = v;
        }
        if let Some(v) = non_empty(probe.account_token) {
            self.account_token = v;
        }
        if let Some(v) = non_empty(probe.hostname) {
            self.hostname = v;
        }
        if let Some(v) = non_empty(probe.workdir) {
            self.workdir = PathBuf::from(v);
        }

        Ok(true)
    }
}

fn resolve_config_path() -> Option<PathBuf> {
    env_non_empty(CONFIG_PATH_ENV).map(PathBuf::from)
}
