use crate::models::Role;
use crate::navigation::RoleRegistry;
use crate::session::Session;

pub const LOGIN_PATH: &str = "/login";

/// Paths reachable without a session.
pub const PUBLIC_PATHS: &[&str] = &[LOGIN_PATH];

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Mount the view for this (normalized) path.
    Mount(String),
    RedirectToLogin,
    RedirectToRoleHome(Role),
}

impl Decision {
    /// The path the shell ends up on after applying the decision.
    pub fn target_path(&self) -> &str {
        match self {
            Decision::Mount(path) => path,
            Decision::RedirectToLogin => LOGIN_PATH,
            Decision::RedirectToRoleHome(role) => role.home_path(),
        }
    }

    pub fn is_mount(&self) -> bool {
        matches!(self, Decision::Mount(_))
    }
}

/// Canonical form of a requested path: no query string or fragment,
/// no trailing slash (except the root), always rooted.
pub fn normalize_path(raw: &str) -> String {
    let path = raw
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

/// Decide whether `requested_path` may be mounted for `session`.
///
/// Total: unknown and unauthorized paths become redirects, never errors.
pub fn authorize(registry: &RoleRegistry, session: &Session, requested_path: &str) -> Decision {
    let path = normalize_path(requested_path);
    let role = session.role();

    if is_public_path(&path) {
        return if session.is_authenticated() {
            Decision::RedirectToRoleHome(role)
        } else {
            Decision::Mount(path)
        };
    }

    if !session.is_authenticated() {
        return Decision::RedirectToLogin;
    }

    if registry
        .entries_for_role(role)
        .iter()
        .any(|entry| entry.path == path && entry.allows(role))
    {
        Decision::Mount(path)
    } else {
        Decision::RedirectToRoleHome(role)
    }
}
