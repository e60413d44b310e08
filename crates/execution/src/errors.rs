use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ExecutionError {
    /// Writing the artifact (or creating its directory) failed.
    Install {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The artifact existed but could not be spawned (permissions,
    /// malformed binary).
    Spawn {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Install { path, source } => {
                write!(f, "failed installing artifact {}: {}", path.display(), source)
            }
            Self::Spawn { path, source } => {
                write!(f, "failed spawning artifact {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ExecutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Install { source, .. } | Self::Spawn { source, .. } => Some(source),
        }
    }
}

pub type ExecutionResult<T> = std::result::Result<T, ExecutionError>;
