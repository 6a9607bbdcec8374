use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    AuthenticationFailed,
    MalformedSessionRecord,
    Network,
    Config,
    ValidationError,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::AuthenticationFailed => write!(f, "AuthenticationFailed"),
            AppErrorKind::MalformedSessionRecord => write!(f, "MalformedSessionRecord"),
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::Config => write!(f, "Config"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured application error shared by the shell and the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

/// Notification text when the server gives no usable reason.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn authentication_failed(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::AuthenticationFailed, message)
    }

    pub fn malformed_session(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::MalformedSessionRecord, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Network, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Config, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InternalError, message)
    }

    /// Build an `AuthenticationFailed` error from a rejected login response body.
    ///
    /// The backend reports the reason as `detail` (DRF style) or `message`.
    /// Anything else falls back to [`LOGIN_FAILED_MESSAGE`].
    pub fn login_rejected(body: &str) -> Self {
        let reason = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                ["detail", "message"].iter().find_map(|key| {
                    value
                        .get(key)
                        .and_then(|v| v.as_str())
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                })
            });
        Self::authentication_failed(reason.unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_string()))
    }

    /// Text for the transient notification shown on the login page.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::AuthenticationFailed if !self.message.is_empty() => self.message.clone(),
            AppErrorKind::AuthenticationFailed => LOGIN_FAILED_MESSAGE.to_string(),
            AppErrorKind::ValidationError => self.message.clone(),
            AppErrorKind::Network => {
                "Could not reach the server. Please try again.".to_string()
            }
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
