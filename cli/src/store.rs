//! Bearer token persisted in a file so it survives between invocations.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use coursehub::session::{SessionError, SessionStore, ensure_non_empty};

/// Open `path` for writing, readable only by the owner.
#[cfg(unix)]
fn open_private(path: &Path) -> std::io::Result<File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let file = OpenOptions::new().write(true).create(true).truncate(true).mode(0o600).open(path)?;
    // `mode` only applies on creation; tighten a file left by older runs.
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    Ok(file)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().write(true).create(true).truncate(true).open(path)
}

/// Default token location: `<config dir>/coursehub/token`.
pub fn default_token_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(std::env::temp_dir).join("coursehub").join("token")
}

#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        (!token.is_empty()).then(|| token.to_owned())
    }

    fn set(&self, token: &str) -> Result<(), SessionError> {
        ensure_non_empty(token)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionError::Storage(e.to_string()))?;
        }
        let mut file = open_private(&self.path).map_err(|e| SessionError::Storage(e.to_string()))?;
        file.write_all(token.as_bytes()).map_err(|e| SessionError::Storage(e.to_string()))
    }

    fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to remove token file");
            }
        }
    }
}
