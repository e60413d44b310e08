use std::path::PathBuf;

use super::constants::{DEFAULT_API, DEFAULT_CA_HOST};
use super::types::ProbeConfig;
use super::util::default_hostname;

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            api: DEFAULT_API.to_string(),
            ca_host: DEFAULT_CA_HOST.to_string(),
            account_id: String::new(),
            account_token: String::new(),
            hostname: default_hostname(),
            workdir: PathBuf::from("."),
        }
    }
}
