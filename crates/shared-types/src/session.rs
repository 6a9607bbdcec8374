use std::fmt;

use crate::config::MissingRolePolicy;
use crate::error::AppError;
use crate::models::{AuthGrant, Role, UserRecord};

/// Display name used when no user is signed in.
pub const GUEST_NAME: &str = "Guest";
/// Display name for a bare access token found without a user record.
pub const FALLBACK_NAME: &str = "Super Admin";

/// The currently authenticated identity.
///
/// Fields are private so that the credential invariant holds: a session
/// without a credential is always [`Role::Anonymous`], and an anonymous
/// session never carries a credential.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    subject_id: String,
    display_name: String,
    role: Role,
    credential: Option<String>,
    refresh_credential: Option<String>,
    avatar_ref: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl Session {
    pub fn anonymous() -> Self {
        Self {
            subject_id: String::new(),
            display_name: GUEST_NAME.to_string(),
            role: Role::Anonymous,
            credential: None,
            refresh_credential: None,
            avatar_ref: None,
        }
    }

    /// Build an authenticated session. Collapses to the anonymous session
    /// when the role is `Anonymous` or the credential is empty.
    pub fn authenticated(
        subject_id: impl Into<String>,
        display_name: impl Into<String>,
        role: Role,
        credential: impl Into<String>,
    ) -> Self {
        let credential = credential.into();
        if role == Role::Anonymous || credential.is_empty() {
            return Self::anonymous();
        }
        Self {
            subject_id: subject_id.into(),
            display_name: display_name.into(),
            role,
            credential: Some(credential),
            refresh_credential: None,
            avatar_ref: None,
        }
    }

    /// Build a session from a stored user record and its access token.
    pub fn from_record(
        record: &UserRecord,
        credential: impl Into<String>,
        policy: MissingRolePolicy,
    ) -> Result<Self, AppError> {
        let role = Role::from_stored(record.role.as_deref(), policy)?;
        Ok(Self::authenticated(
            record.subject_id(),
            record.display_name(),
            role,
            credential,
        )
        .with_avatar(record.avatar().map(str::to_string)))
    }

    /// Build a session from a bare access token with no user record.
    pub fn from_bare_credential(
        credential: impl Into<String>,
        policy: MissingRolePolicy,
    ) -> Result<Self, AppError> {
        let role = Role::from_stored(None, policy)?;
        Ok(Self::authenticated("", FALLBACK_NAME, role, credential))
    }

    /// Build a session from a successful login.
    pub fn from_grant(grant: &AuthGrant, policy: MissingRolePolicy) -> Result<Self, AppError> {
        Ok(Self::from_record(&grant.user, grant.credential.clone(), policy)?
            .with_refresh_credential(grant.refresh_credential.clone()))
    }

    pub fn with_refresh_credential(mut self, refresh: Option<String>) -> Self {
        if self.is_authenticated() {
            self.refresh_credential = refresh.filter(|t| !t.is_empty());
        }
        self
    }

    pub fn with_avatar(mut self, avatar_ref: Option<String>) -> Self {
        if self.is_authenticated() {
            self.avatar_ref = avatar_ref.filter(|a| !a.is_empty());
        }
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    pub fn refresh_credential(&self) -> Option<&str> {
        self.refresh_credential.as_deref()
    }

    pub fn avatar_ref(&self) -> Option<&str> {
        self.avatar_ref.as_deref()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("subject_id", &self.subject_id)
            .field("display_name", &self.display_name)
            .field("role", &self.role)
            .field("credential", &self.credential.as_ref().map(|_| "<redacted>"))
            .field("avatar_ref", &self.avatar_ref)
            .finish()
    }
}
