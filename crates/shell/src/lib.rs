pub mod authenticator;
pub mod config;
pub mod credential_store;
pub mod session_store;
pub mod shell;

pub use authenticator::{Authenticator, HttpAuthenticator};
#[cfg(not(target_arch = "wasm32"))]
pub use credential_store::FileCredentialStore;
pub use credential_store::{CredentialStore, MemoryCredentialStore};
pub use shell::{Shell, ALREADY_SIGNED_IN, LOGIN_IN_PROGRESS};
