use anyhow::Result;

use super::types::ProbeConfig;

impl ProbeConfig {
    pub fn load() -> Result<Self> {
        let mut cfg = Self::default();
        cfg.apply_file_config()?;
        cfg.apply_env_overrides();
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        if self.account_id.trim().is_empty() || self.account_token.trim().is_empty() {
            anyhow::bail!(
                "account credentials are required; set REDCELL_ACCOUNT and REDCELL_ACCOUNT_TOKEN"
            );
        }
        Ok(())
    }
}
