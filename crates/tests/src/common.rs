use std::cell::Cell;

use async_trait::async_trait;
use shared_types::{
    AppError, AuthGrant, LoginRequest, LoginResponse, MissingRolePolicy, Role, Session,
};
use shell::credential_store::{ACCESS_TOKEN_KEY, USER_KEY};
use shell::{Authenticator, MemoryCredentialStore, Shell};

pub type TestShell = Shell<MemoryCredentialStore>;

/// Authenticator returning a canned outcome and counting calls.
pub struct StubAuthenticator {
    outcome: Result<LoginResponse, AppError>,
    calls: Cell<usize>,
}

impl StubAuthenticator {
    /// Accepts any credentials and grants `role`.
    pub fn granting(role: &str) -> Self {
        let response = serde_json::json!({
            "access": "access-token",
            "refresh": "refresh-token",
            "user": { "id": 42, "name": "Test User", "role": role, "image": "profile.png" }
        });
        Self {
            outcome: Ok(serde_json::from_value(response).unwrap()),
            calls: Cell::new(0),
        }
    }

    /// Rejects every login, as the backend does with a `detail` body.
    pub fn rejecting(body: &str) -> Self {
        Self {
            outcome: Err(AppError::login_rejected(body)),
            calls: Cell::new(0),
        }
    }

    /// Answers with a 2xx response that carries no access token.
    pub fn tokenless() -> Self {
        Self {
            outcome: Ok(LoginResponse::default()),
            calls: Cell::new(0),
        }
    }

    /// The grant this stub hands out, for driving the shell by hand.
    pub fn grant(&self) -> AuthGrant {
        self.outcome
            .clone()
            .and_then(AuthGrant::from_response)
            .unwrap()
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl Authenticator for StubAuthenticator {
    async fn authenticate(&self, _request: &LoginRequest) -> Result<AuthGrant, AppError> {
        self.calls.set(self.calls.get() + 1);
        self.outcome.clone().and_then(AuthGrant::from_response)
    }
}

pub fn anonymous_shell() -> TestShell {
    Shell::rehydrate(MemoryCredentialStore::new(), MissingRolePolicy::SuperAdmin)
}

/// A shell whose store already holds `record` next to an access token.
pub fn shell_with_record(record: &str, policy: MissingRolePolicy) -> TestShell {
    let store =
        MemoryCredentialStore::with_entries([(ACCESS_TOKEN_KEY, "stored-token"), (USER_KEY, record)]);
    Shell::rehydrate(store, policy)
}

/// A shell signed in through the stub authenticator.
pub async fn signed_in_shell(role: &str) -> TestShell {
    let mut shell = anonymous_shell();
    shell
        .login(&StubAuthenticator::granting(role), login_request())
        .await
        .unwrap();
    shell
}

pub fn login_request() -> LoginRequest {
    LoginRequest::new("test", "password")
}

pub fn session_for(role: Role) -> Session {
    Session::authenticated("1", "Test User", role, "token")
}

pub fn paths(entries: &[shared_types::NavigationEntry]) -> Vec<&'static str> {
    entries.iter().map(|e| e.path).collect()
}
