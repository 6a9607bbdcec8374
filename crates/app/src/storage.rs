//! The credential store each platform persists the session in.

#[cfg(target_arch = "wasm32")]
pub type PlatformStore = BrowserStorage;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = shell::FileCredentialStore;

#[cfg(target_arch = "wasm32")]
pub fn open_platform_store() -> PlatformStore {
    BrowserStorage::open()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_platform_store() -> PlatformStore {
    let store = shell::FileCredentialStore::open_default();
    tracing::debug!(path = %store.path().display(), "credential store opened");
    store
}

/// `window.localStorage`. When storage is unavailable (private mode,
/// sandboxed iframe) reads return nothing and writes are dropped.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage unavailable, sessions will not survive a reload");
        }
        Self { storage }
    }
}

#[cfg(target_arch = "wasm32")]
impl shell::CredentialStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                tracing::warn!(key, "failed to write localStorage");
            }
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.remove_item(key);
        }
    }
}
