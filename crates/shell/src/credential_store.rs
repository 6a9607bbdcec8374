//! Durable key-value storage for the signed-in session.

use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_KEY: &str = "user";
/// Older logins stored the access token here.
pub const LEGACY_TOKEN_KEY: &str = "token";
pub const LEGACY_USER_DATA_KEY: &str = "userData";
/// Avatar stored apart from the user record.
pub const USER_IMAGE_KEY: &str = "userImage";

/// Every key a logout must remove.
pub const SESSION_KEYS: &[&str] = &[
    ACCESS_TOKEN_KEY,
    REFRESH_TOKEN_KEY,
    USER_KEY,
    LEGACY_TOKEN_KEY,
    LEGACY_USER_DATA_KEY,
    USER_IMAGE_KEY,
];

/// Client-side storage that survives reloads (browser `localStorage`,
/// a file on desktop). Writes are best effort: failures are logged by the
/// implementation, never surfaced.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);

    fn clear_session(&mut self) {
        for key in SESSION_KEYS {
            self.remove(key);
        }
    }
}

/// Volatile store for tests and for platforms without durable storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryCredentialStore {
    entries: HashMap<String, String>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// JSON file backed store for native builds.
///
/// The whole map is rewritten on every change; the file holds a handful
/// of short strings.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileCredentialStore {
    /// Open the store at `path`. A missing file starts empty; an
    /// unreadable one is logged and starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "credential file is corrupt, starting empty");
                HashMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "credential file unreadable, starting empty");
                HashMap::new()
            }
        };
        Self { path, entries }
    }

    /// Open the store in the platform data directory
    /// (`~/.local/share/falcon/credentials.json` on Linux), or the working
    /// directory when there is none.
    pub fn open_default() -> Self {
        let path = dirs::data_dir()
            .map(|dir| dir.join("falcon"))
            .unwrap_or_default()
            .join("credentials.json");
        Self::open(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) {
        let result = serde_json::to_string(&self.entries)
            .map_err(std::io::Error::other)
            .and_then(|json| {
                if let Some(parent) = self.path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&self.path, json)
            });
        if let Err(e) = result {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to write credential file");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl CredentialStore for FileCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.flush();
        }
    }
}
