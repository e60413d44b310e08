use std::path::{Path, PathBuf};

use crate::errors::{ExecutionError, ExecutionResult};

/// Deterministic on-disk location for a test's artifact.
pub fn artifact_path(dir: &Path, test_id: &str) -> PathBuf {
    if cfg!(windows) {
        dir.join(format!("{}.exe", test_id))
    } else {
        dir.join(test_id)
    }
}

/// Persist a fetched payload to its per-test path with execute permission.
/// Overwrites any previous payload for the same test identifier.
pub fn install(dir: &Path, test_id: &str, body: &[u8]) -> ExecutionResult<PathBuf> {
    let path = artifact_path(dir, test_id);

    std::fs::create_dir_all(dir).map_err(|source| ExecutionError::Install {
        path: path.clone(),
        source,
    })?;
    std::fs::write(&path, body).map_err(|source| ExecutionError::Install {
        path: path.clone(),
        source,
    })?;
    set_executable(&path)?;

    Ok(path)
}

#[cfg(unix)]
fn set_executable(path: &Path) -> ExecutionResult<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).map_err(|source| {
        ExecutionError::Install {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> ExecutionResult<()> {
    Ok(())
}
