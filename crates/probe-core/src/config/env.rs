use std::path::PathBuf;

use super::types::ProbeConfig;
use super::util::env_non_empty;

impl ProbeConfig {
    pub(super) fn apply_env_overrides(&mut self) {
        if let Some(v) = env_non_empty("REDCELL_API") {
            self.api = v;
        }
        if let Some(v) = env_non_empty("REDCELL_CA") {
            self.ca_host = v;
        }
        if let Some(v) = env_non_empty("REDCELL_ACCOUNT") {
            self.account_id = v;
        }
        if let Some(v) = env_non_empty("REDCELL_ACCOUNT_TOKEN") {
            self.account_token = v;
        }
        if let Some(v) = env_non_empty("REDCELL_HOSTNAME") {
            self.hostname = v;
        }
        if let Some(v) = env_non_empty("REDCELL_DIR") {
            self.workdir = PathBuf::from(v);
        }
    }
}
