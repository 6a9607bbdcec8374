use shared_types::{
    authorize, resolve, AppError, AuthGrant, Decision, LayoutController, LayoutFlags,
    LayoutState, LoginRequest, MissingRolePolicy, NavigationEntry, RoleRegistry, Session,
    LOGIN_PATH,
};

use crate::authenticator::Authenticator;
use crate::credential_store::CredentialStore;
use crate::session_store;

pub const ALREADY_SIGNED_IN: &str = "Already signed in";
pub const LOGIN_IN_PROGRESS: &str = "A login is already in progress";

/// The dashboard shell: session, layout and current location in one value.
///
/// Every event goes through a `&mut self` method, so each one is applied
/// to completion before the next is seen.
#[derive(Debug)]
pub struct Shell<S: CredentialStore> {
    registry: &'static RoleRegistry,
    store: S,
    policy: MissingRolePolicy,
    session: Session,
    layout: LayoutController,
    active_path: String,
    authenticating: bool,
}

impl<S: CredentialStore> Shell<S> {
    /// Start the shell with the standard registry, restoring any stored session.
    pub fn rehydrate(store: S, policy: MissingRolePolicy) -> Self {
        Self::with_registry(RoleRegistry::standard(), store, policy)
    }

    pub fn with_registry(registry: &'static RoleRegistry, mut store: S, policy: MissingRolePolicy) -> Self {
        let session = session_store::rehydrate(&mut store, policy);
        let active_path = if session.is_authenticated() {
            session.role().home_path()
        } else {
            LOGIN_PATH
        };
        Self {
            registry,
            store,
            policy,
            session,
            layout: LayoutController::new(),
            active_path: active_path.to_string(),
            authenticating: false,
        }
    }

    pub fn registry(&self) -> &'static RoleRegistry {
        self.registry
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Path of the view currently mounted (or being redirected to).
    pub fn active_path(&self) -> &str {
        &self.active_path
    }

    pub fn is_authenticating(&self) -> bool {
        self.authenticating
    }

    /// Sidebar entries for the current session.
    pub fn menu(&self) -> Vec<NavigationEntry> {
        resolve(self.registry, &self.session)
    }

    pub fn layout_state(&self) -> LayoutState {
        self.layout.state()
    }

    pub fn flags(&self) -> LayoutFlags {
        self.layout.flags()
    }

    /// Run the access check for `path` and apply its outcome.
    ///
    /// A mount updates the active path and settles the sidebar; a redirect
    /// only records the target, which the caller navigates to next.
    pub fn navigate(&mut self, path: &str) -> Decision {
        let decision = authorize(self.registry, &self.session, path);
        match &decision {
            Decision::Mount(_) => self.layout.after_navigation(),
            redirect => tracing::debug!(
                requested = path,
                target = redirect.target_path(),
                role = %self.session.role(),
                "navigation redirected"
            ),
        }
        self.active_path = decision.target_path().to_string();
        decision
    }

    /// Mark a login as in flight. Returns `false` if one already is, or if
    /// a session is already established.
    pub fn begin_login(&mut self) -> bool {
        if self.authenticating || self.session.is_authenticated() {
            return false;
        }
        self.authenticating = true;
        true
    }

    /// Commit the outcome of an authentication attempt.
    ///
    /// On success the grant is persisted and the role's home is returned as
    /// a redirect. On failure the session stays anonymous and the store is
    /// left untouched.
    pub fn apply_login_result(
        &mut self,
        result: Result<AuthGrant, AppError>,
    ) -> Result<Decision, AppError> {
        self.authenticating = false;

        let grant = result.inspect_err(|e| tracing::info!(error = %e, "login failed"))?;
        let session = Session::from_grant(&grant, self.policy)?;
        if !session.is_authenticated() {
            tracing::warn!(role = ?grant.user.role, "login granted for a role without dashboard access");
            return Err(AppError::authentication_failed(
                "This account does not have access to the dashboard",
            ));
        }

        session_store::persist(&mut self.store, &grant)?;
        tracing::info!(role = %session.role(), subject = session.subject_id(), "logged in");

        let decision = Decision::RedirectToRoleHome(session.role());
        self.session = session;
        self.layout.after_navigation();
        self.active_path = decision.target_path().to_string();
        Ok(decision)
    }

    /// Authenticate in one step. Callers that cannot hold `&mut self`
    /// across the await use [`Shell::begin_login`] and
    /// [`Shell::apply_login_result`] directly.
    pub async fn login<A: Authenticator>(
        &mut self,
        authenticator: &A,
        request: LoginRequest,
    ) -> Result<Decision, AppError> {
        if self.session.is_authenticated() {
            return Err(AppError::authentication_failed(ALREADY_SIGNED_IN));
        }
        request.validate()?;
        if !self.begin_login() {
            return Err(AppError::authentication_failed(LOGIN_IN_PROGRESS));
        }
        let result = authenticator.authenticate(&request).await;
        self.apply_login_result(result)
    }

    /// Forget the session, clear stored credentials and both sidebar flags.
    pub fn logout(&mut self) -> Decision {
        if self.session.is_authenticated() {
            tracing::info!(role = %self.session.role(), subject = self.session.subject_id(), "logged out");
        }
        self.store.clear_session();
        self.session = Session::anonymous();
        self.authenticating = false;
        self.layout.reset();
        self.active_path = LOGIN_PATH.to_string();
        Decision::RedirectToLogin
    }

    pub fn on_viewport_change(&mut self, width: u32) {
        self.layout.on_viewport_change(width);
    }

    pub fn toggle_sidebar(&mut self) {
        self.layout.toggle_sidebar();
    }

    pub fn close_sidebar(&mut self) {
        self.layout.close_sidebar();
    }
}
