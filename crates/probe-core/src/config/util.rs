pub(super) fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

pub(super) fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|v| non_empty(Some(v)))
}

pub(super) fn default_hostname() -> String {
    env_non_empty("HOSTNAME")
        .or_else(|| env_non_empty("COMPUTERNAME"))
        .unwrap_or_else(|| "endpoint-dev".to_string())
}
