pub(super) const DEFAULT_API: &str = "https://api.redcellsecurity.io";
pub(super) const DEFAULT_CA_HOST: &str = "redcell-account-us1.s3.amazonaws.com";

pub(super) const CONFIG_PATH_ENV: &str = "REDCELL_CONFIG";
