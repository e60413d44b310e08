use std::fmt;

#[derive(Debug)]
pub enum ClientError {
    /// The registration exchange was rejected by the service. Carries the
    /// response body, which is the service's error message.
    Registration { status: Option<u16>, body: String },
    /// The request never completed (DNS, connect, TLS, read failure).
    Transport(reqwest::Error),
    /// Registration succeeded but the returned session token was empty.
    EmptySession,
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registration { status, body } => match status {
                Some(code) => write!(f, "registration rejected (HTTP {}): {}", code, body),
                None => write!(f, "registration failed: {}", body),
            },
            Self::Transport(err) => write!(f, "transport error: {}", err),
            Self::EmptySession => write!(f, "service returned an empty session token"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
