use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::MissingRolePolicy;
use crate::error::AppError;

/// Dashboard role controlling which menu and screens a session can reach.
///
/// - `SuperAdmin`: manages admin accounts.
/// - `Admin`: runs sub-admins, clients, warehouses and billing.
/// - `Client`: manages its own customers and sales.
/// - `Anonymous`: no credential. Only public pages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    Client,
    #[default]
    Anonymous,
}

impl Role {
    /// Every role, in privilege order.
    pub const ALL: [Role; 4] = [Role::SuperAdmin, Role::Admin, Role::Client, Role::Anonymous];

    /// Parse a stored role string. Unknown values fail closed to `Anonymous`.
    ///
    /// Accepts the legacy `superadmin` spelling written by older logins.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "super_admin" | "superadmin" | "super-admin" => Role::SuperAdmin,
            "admin" => Role::Admin,
            "client" => Role::Client,
            _ => Role::Anonymous,
        }
    }

    /// Resolve the role of a stored user record.
    ///
    /// A missing or blank role is settled by `policy`; under
    /// [`MissingRolePolicy::Anonymous`] the record counts as malformed.
    pub fn from_stored(raw: Option<&str>, policy: MissingRolePolicy) -> Result<Self, AppError> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => Ok(Role::from_str_or_default(s)),
            None => match policy {
                MissingRolePolicy::SuperAdmin => Ok(Role::SuperAdmin),
                MissingRolePolicy::Anonymous => {
                    Err(AppError::malformed_session("user record has no role"))
                }
            },
        }
    }

    /// Lowercase string for storage and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Admin => "admin",
            Role::Client => "client",
            Role::Anonymous => "anonymous",
        }
    }

    /// Human-readable name shown in the sidebar badge.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::Admin => "Admin",
            Role::Client => "Client",
            Role::Anonymous => "Guest",
        }
    }

    /// Notification shown after a successful login.
    pub fn welcome_message(&self) -> String {
        let name = self.display_name();
        format!("Welcome {name}! Redirecting to {name} Dashboard...")
    }

    /// Landing page for the role. Anonymous sessions land on the login page.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "/superAdminDashboard",
            Role::Admin => "/adminDashboard",
            Role::Client => "/clientDashboard",
            Role::Anonymous => crate::route_guard::LOGIN_PATH,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User identifier as sent by the login endpoint (numeric or string).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SubjectId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectId::Number(n) => write!(f, "{n}"),
            SubjectId::Text(s) => f.write_str(s),
        }
    }
}

/// Placeholder image name the backend sends for users without an avatar.
const PLACEHOLDER_IMAGE: &str = "profile.png";

/// Serialized user record kept in the credential store under `user`.
///
/// Mirrors the `user` object of the login response. Every field is optional
/// so that partially populated records still parse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SubjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl UserRecord {
    /// Opaque subject identifier, empty when the record carries no id.
    pub fn subject_id(&self) -> String {
        self.id.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    /// First non-empty of name, username, email; `"User"` otherwise.
    pub fn display_name(&self) -> String {
        [&self.name, &self.username, &self.email]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
            .unwrap_or("User")
            .to_string()
    }

    /// Avatar reference, ignoring the backend's placeholder image.
    pub fn avatar(&self) -> Option<&str> {
        self.image
            .as_deref()
            .filter(|img| !img.is_empty() && *img != PLACEHOLDER_IMAGE)
    }
}

/// Login request sent to the authenticator.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

pub const USERNAME_REQUIRED: &str = "Username is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";

impl LoginRequest {
    /// Reject a blank username or an empty password before any network call.
    /// Whitespace counts as blank for the username only.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.username.trim().is_empty() {
            return Err(AppError::validation(USERNAME_REQUIRED));
        }
        if self.password.is_empty() {
            return Err(AppError::validation(PASSWORD_REQUIRED));
        }
        Ok(())
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Raw login endpoint response: `{"access", "refresh", "user"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LoginResponse {
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub refresh: Option<String>,
    #[serde(default)]
    pub user: Option<UserRecord>,
}

/// Successful authentication: credentials plus the user record to persist.
#[derive(Clone, PartialEq)]
pub struct AuthGrant {
    pub credential: String,
    pub refresh_credential: Option<String>,
    pub user: UserRecord,
}

impl AuthGrant {
    /// Validate a login response. A response without an access token
    /// cannot establish a session.
    pub fn from_response(response: LoginResponse) -> Result<Self, AppError> {
        let credential = response
            .access
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                AppError::authentication_failed("Login response did not include an access token")
            })?;
        Ok(Self {
            credential,
            refresh_credential: response.refresh.filter(|t| !t.is_empty()),
            user: response.user.unwrap_or_default(),
        })
    }
}

impl fmt::Debug for AuthGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthGrant")
            .field("credential", &"<redacted>")
            .field("refresh_credential", &self.refresh_credential.as_ref().map(|_| "<redacted>"))
            .field("user", &self.user)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;

    #[test]
    fn role_from_str_or_default_known_values() {
        assert_eq!(Role::from_str_or_default("admin"), Role::Admin);
        assert_eq!(Role::from_str_or_default("Admin"), Role::Admin);
        assert_eq!(Role::from_str_or_default("client"), Role::Client);
        assert_eq!(Role::from_str_or_default("super_admin"), Role::SuperAdmin);
        assert_eq!(Role::from_str_or_default("superadmin"), Role::SuperAdmin);
        assert_eq!(Role::from_str_or_default(" SUPERADMIN "), Role::SuperAdmin);
    }

    #[test]
    fn role_from_str_or_default_unknown_fails_closed() {
        assert_eq!(Role::from_str_or_default(""), Role::Anonymous);
        assert_eq!(Role::from_str_or_default("owner"), Role::Anonymous);
        assert_eq!(Role::from_str_or_default("root"), Role::Anonymous);
    }

    #[test]
    fn role_as_str_roundtrip() {
        for role in Role::ALL {
            assert_eq!(Role::from_str_or_default(role.as_str()), role);
        }
    }

    #[test]
    fn role_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Role::SuperAdmin).unwrap(), "\"super_admin\"");
        let parsed: Role = serde_json::from_str("\"client\"").unwrap();
        assert_eq!(parsed, Role::Client);
    }

    #[test]
    fn missing_role_follows_policy() {
        assert_eq!(
            Role::from_stored(None, MissingRolePolicy::SuperAdmin).unwrap(),
            Role::SuperAdmin
        );
        assert_eq!(
            Role::from_stored(Some("  "), MissingRolePolicy::SuperAdmin).unwrap(),
            Role::SuperAdmin
        );
        let err = Role::from_stored(None, MissingRolePolicy::Anonymous).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::MalformedSessionRecord);
    }

    #[test]
    fn present_role_ignores_policy() {
        assert_eq!(
            Role::from_stored(Some("client"), MissingRolePolicy::Anonymous).unwrap(),
            Role::Client
        );
    }

    #[test]
    fn home_paths() {
        assert_eq!(Role::SuperAdmin.home_path(), "/superAdminDashboard");
        assert_eq!(Role::Admin.home_path(), "/adminDashboard");
        assert_eq!(Role::Client.home_path(), "/clientDashboard");
        assert_eq!(Role::Anonymous.home_path(), "/login");
    }

    #[test]
    fn user_record_parses_login_payload() {
        let json = r#"{"id": 7, "username": "ops", "email": "ops@falcon.io", "role": "admin", "image": "profile.png", "phone": "555"}"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.subject_id(), "7");
        assert_eq!(record.display_name(), "ops");
        assert_eq!(record.role.as_deref(), Some("admin"));
        assert_eq!(record.avatar(), None);
    }

    #[test]
    fn user_record_accepts_null_role_and_string_id() {
        let record: UserRecord = serde_json::from_str(r#"{"id": "u-1", "role": null}"#).unwrap();
        assert_eq!(record.subject_id(), "u-1");
        assert_eq!(record.role, None);
        assert_eq!(record.display_name(), "User");
    }

    #[test]
    fn display_name_prefers_name_then_username_then_email() {
        let mut record = UserRecord {
            name: Some("Dana".into()),
            username: Some("dana01".into()),
            email: Some("dana@falcon.io".into()),
            ..UserRecord::default()
        };
        assert_eq!(record.display_name(), "Dana");
        record.name = Some(String::new());
        assert_eq!(record.display_name(), "dana01");
        record.username = None;
        assert_eq!(record.display_name(), "dana@falcon.io");
    }

    #[test]
    fn avatar_keeps_real_images() {
        let record = UserRecord {
            image: Some("https://cdn.falcon.io/u/7.png".into()),
            ..UserRecord::default()
        };
        assert_eq!(record.avatar(), Some("https://cdn.falcon.io/u/7.png"));
    }

    #[test]
    fn login_request_debug_hides_password() {
        let req = LoginRequest::new("ops", "hunter22");
        let printed = format!("{req:?}");
        assert!(printed.contains("ops"));
        assert!(!printed.contains("hunter22"));
    }

    #[test]
    fn auth_grant_requires_access_token() {
        let err = AuthGrant::from_response(LoginResponse::default()).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::AuthenticationFailed);

        let grant = AuthGrant::from_response(LoginResponse {
            access: Some("a1".into()),
            refresh: Some(String::new()),
            user: None,
        })
        .unwrap();
        assert_eq!(grant.credential, "a1");
        assert_eq!(grant.refresh_credential, None);
        assert_eq!(grant.user, UserRecord::default());
    }

    #[test]
    fn login_request_requires_username_and_password() {
        assert_eq!(LoginRequest::new("ops", "pw").validate(), Ok(()));
        assert_eq!(
            LoginRequest::new("   ", "pw").validate().unwrap_err().message,
            USERNAME_REQUIRED
        );
        assert_eq!(
            LoginRequest::new("", "").validate().unwrap_err().message,
            USERNAME_REQUIRED
        );
        let err = LoginRequest::new("ops", "").validate().unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.message, PASSWORD_REQUIRED);
        // A password of spaces is still a password.
        assert_eq!(LoginRequest::new("ops", "  ").validate(), Ok(()));
    }

    #[test]
    fn welcome_message_names_the_role() {
        assert_eq!(
            Role::Admin.welcome_message(),
            "Welcome Admin! Redirecting to Admin Dashboard..."
        );
        assert_eq!(
            Role::SuperAdmin.welcome_message(),
            "Welcome Super Admin! Redirecting to Super Admin Dashboard..."
        );
    }

    #[test]
    fn auth_grant_debug_hides_tokens() {
        let grant = AuthGrant {
            credential: "secret-access".into(),
            refresh_credential: Some("secret-refresh".into()),
            user: UserRecord::default(),
        };
        let printed = format!("{grant:?}");
        assert!(!printed.contains("secret-access"));
        assert!(!printed.contains("secret-refresh"));
    }
}
