//! File-backed session store for the CLI.
//!
//! The file is a flat JSON object of string keys to string values, mirroring
//! the browser's `localStorage`; only [`TOKEN_KEY`] is used.

use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use super::store::{SessionStore, TOKEN_KEY};

/// Session persisted to a small JSON file
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> BTreeMap<String, String> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                tracing::warn!("Failed to read session file {:?}: {}", self.path, e);
                return BTreeMap::new();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Ignoring corrupt session file {:?}: {}", self.path, e);
            BTreeMap::new()
        })
    }

    fn store(&self, entries: &BTreeMap<String, String>) {
        if entries.is_empty() {
            if let Err(e) = std::fs::remove_file(&self.path) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("Failed to remove session file {:?}: {}", self.path, e);
                }
            }
            return;
        }

        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("Failed to create session directory {:?}: {}", parent, e);
                return;
            }
        }

        let json = match serde_json::to_string_pretty(entries) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to encode session: {}", e);
                return;
            }
        };

        if let Err(e) = self.write_private(json.as_bytes()) {
            tracing::warn!("Failed to write session file {:?}: {}", self.path, e);
        }
    }

    /// Write the file readable by the owner only
    fn write_private(&self, bytes: &[u8]) -> std::io::Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
            options.mode(0o600);

            // `mode` only applies on creation; tighten files left by older runs
            if let Ok(meta) = std::fs::metadata(&self.path) {
                if meta.permissions().mode() & 0o077 != 0 {
                    std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))?;
                }
            }
        }

        let mut file = options.open(&self.path)?;
        file.write_all(bytes)
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, token: &str) {
        let mut entries = self.load();
        entries.insert(TOKEN_KEY.to_string(), token.to_string());
        self.store(&entries);
    }

    fn read(&self) -> Option<String> {
        self.load().remove(TOKEN_KEY)
    }

    fn clear(&self) {
        let mut entries = self.load();
        if entries.remove(TOKEN_KEY).is_some() {
            self.store(&entries);
        }
    }
}
