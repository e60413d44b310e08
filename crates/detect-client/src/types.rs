use std::fmt;

use url::Url;

/// Probe wire protocol version, sent as the `version` header on every fetch.
pub const PROTOCOL_VERSION: &str = "2";

/// Reserved exit code reported when the artifact vanished between install
/// and execution (third-party quarantine). Indistinguishable on the wire
/// from a test that genuinely exits 127.
pub const QUARANTINED_EXIT_CODE: i32 = 127;

/// Opaque session credential returned by endpoint registration. Created
/// once at startup and read-only for the lifetime of the probe.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: String) -> Option<Self> {
        if token.trim().is_empty() {
            return None;
        }
        Some(Self { token })
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }
}

/// `{os}-{arch}` tag describing the local platform, sent as the `dos`
/// header on every fetch. Immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct PlatformTag(String);

impl PlatformTag {
    pub fn current() -> Self {
        Self(format!("{}-{}", service_os_name(), std::env::consts::ARCH))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// The service's platform vocabulary uses "darwin", not "macos".
fn service_os_name() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        other => other,
    }
}

/// `{test_id}:{exit_code}` token carried back upstream as the `dat` header
/// of the follow-up fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultToken {
    test_id: String,
    exit_code: i32,
}

impl ResultToken {
    pub fn new(test_id: &str, exit_code: i32) -> Self {
        Self {
            test_id: test_id.to_string(),
            exit_code,
        }
    }

    pub fn quarantined(test_id: &str) -> Self {
        Self::new(test_id, QUARANTINED_EXIT_CODE)
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }
}

impl fmt::Display for ResultToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.test_id, self.exit_code)
    }
}

/// Raw payload returned by a fetch, together with the URL it was actually
/// served from after redirects. The served-from URL is what origin
/// validation inspects.
#[derive(Debug, Clone)]
pub struct FetchedArtifact {
    pub body: Vec<u8>,
    pub served_from: Url,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_rejects_empty_token() {
        assert!(Session::new(String::new()).is_none());
        assert!(Session::new("   ".to_string()).is_none());
        let session = Session::new("tok-1".to_string()).expect("non-empty token");
        assert_eq!(session.as_str(), "tok-1");
    }

    #[test]
    fn platform_tag_has_os_and_arch() {
        let tag = PlatformTag::current();
        let (os, arch) = tag.as_str().split_once('-').expect("os-arch shape");
        assert!(!os.is_empty());
        assert_eq!(arch, std::env::consts::ARCH);
        assert_ne!(os, "macos");
    }

    #[test]
    fn result_token_formats_id_and_code() {
        let token = ResultToken::new("abc-123", 101);
        assert_eq!(token.to_string(), "abc-123:101");
    }

    #[test]
    fn quarantine_and_genuine_127_are_indistinguishable() {
        // Known edge case: a test that really exits 127 produces the same
        // token as one removed from disk before execution. The wire format
        // carries no disambiguation.
        let quarantined = ResultToken::quarantined("abc-123");
        let genuine = ResultToken::new("abc-123", 127);
        assert_eq!(quarantined.to_string(), genuine.to_string());
        assert_eq!(quarantined.to_string(), "abc-123:127");
    }
}
