use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// What a stored session with no role resolves to.
///
/// `SuperAdmin` keeps the dashboard's historical fallback: a user record
/// without a role (or a bare access token) opens the super-admin menu.
/// `Anonymous` treats such a record as malformed and signs the user out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingRolePolicy {
    #[default]
    SuperAdmin,
    Anonymous,
}

pub const DEFAULT_LOGIN_URL: &str = "http://localhost:8000/api/login/";
pub const DEFAULT_LOGIN_TIMEOUT_MS: u64 = 10_000;

/// Login endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthConfig {
    #[serde(default = "default_login_url")]
    pub login_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_login_url() -> String {
    DEFAULT_LOGIN_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_LOGIN_TIMEOUT_MS
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_url: default_login_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Access-scoping settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AccessConfig {
    #[serde(default)]
    pub missing_role: MissingRolePolicy,
}

/// Top-level config file structure matching `config.toml`.
///
/// Every section defaults so that a missing or partial file still yields
/// a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub access: AccessConfig,
}

impl AppConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        let config: AppConfig =
            toml::from_str(contents).map_err(|e| AppError::config(e.to_string()))?;
        if config.auth.login_url.trim().is_empty() {
            return Err(AppError::config("auth.login_url must not be empty"));
        }
        Ok(config)
    }
}
