use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use url::Url;

fn uuid_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}")
            .expect("uuid pattern is valid")
    })
}

#[derive(Debug, PartialEq, Eq)]
pub enum OriginError {
    /// The served-from URL carries no UUID-shaped test identifier at all.
    MissingIdentifier { served_from: String },
    /// The embedded identifier is not the one this probe requested.
    IdentifierMismatch { expected: String, found: String },
    /// The URL host is not the pinned artifact origin.
    UntrustedHost { trusted: String, found: String },
}

impl fmt::Display for OriginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingIdentifier { served_from } => {
                write!(f, "no test identifier in served URL {}", served_from)
            }
            Self::IdentifierMismatch { expected, found } => {
                write!(
                    f,
                    "served test identifier {} does not match requested {}",
                    found, expected
                )
            }
            Self::UntrustedHost { trusted, found } => {
                write!(f, "artifact served from {} instead of {}", found, trusted)
            }
        }
    }
}

impl std::error::Error for OriginError {}

/// Accept an artifact only when the URL it was actually served from embeds
/// the requested test identifier and is hosted on the pinned origin.
///
/// The host comparison is flat string equality. No scheme, port or
/// subdomain leniency: the artifact store is a single known host and a
/// redirect anywhere else means a misconfigured or spoofed API silently
/// substituted a different artifact.
pub fn validate_origin(
    served_from: &Url,
    expected_test_id: &str,
    trusted_host: &str,
) -> Result<(), OriginError> {
    let found = match uuid_pattern().find(served_from.as_str()) {
        Some(m) => m.as_str(),
        None => {
            return Err(OriginError::MissingIdentifier {
                served_from: served_from.to_string(),
            })
        }
    };

    if expected_test_id.is_empty() || found != expected_test_id {
        return Err(OriginError::IdentifierMismatch {
            expected: expected_test_id.to_string(),
            found: found.to_string(),
        });
    }

    let host = served_from.host_str().unwrap_or_default();
    if host != trusted_host {
        return Err(OriginError::UntrustedHost {
            trusted: trusted_host.to_string(),
            found: host.to_string(),
        });
    }

    Ok(())
}
