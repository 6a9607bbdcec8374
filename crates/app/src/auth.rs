use dioxus::prelude::*;
use shared_types::{Role, Session};
use shell::Shell;

use crate::storage::{open_platform_store, PlatformStore};

/// Global shell state: session, layout and active path behind one signal.
#[derive(Clone, Copy)]
pub struct AuthState {
    pub shell: Signal<Shell<PlatformStore>>,
}

impl AuthState {
    /// Restore the stored session once at startup.
    pub fn new() -> Self {
        let config = shell::config::load();
        let shell = Shell::rehydrate(open_platform_store(), config.access.missing_role);
        Self {
            shell: Signal::new(shell),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.shell.read().session().is_authenticated()
    }

    pub fn session(&self) -> Session {
        self.shell.read().session().clone()
    }

    pub fn role(&self) -> Role {
        self.shell.read().session().role()
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
