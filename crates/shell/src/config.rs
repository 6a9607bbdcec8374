use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "config.toml";

/// Copy compiled into the binary, used on wasm32 and when no file is found.
const BUNDLED_CONFIG: &str = include_str!("../../../config.toml");

/// Environment variable overriding `auth.login_url`.
pub const LOGIN_URL_ENV: &str = "FALCON_LOGIN_URL";

/// Load the configuration once and return it. Later calls return the
/// cached value.
///
/// Problems are logged and fall back to defaults; startup never fails on
/// configuration.
pub fn load() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let mut config = parse_or_default(&read_source());
        if let Some(url) = login_url_override() {
            tracing::info!(url = %url, "login URL overridden from {LOGIN_URL_ENV}");
            config.auth.login_url = url;
        }
        tracing::debug!(
            login_url = %config.auth.login_url,
            timeout_ms = config.auth.timeout_ms,
            missing_role = ?config.access.missing_role,
            "configuration loaded"
        );
        config
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn read_source() -> String {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::debug!("{CONFIG_PATH} not read ({e}), using bundled configuration");
            BUNDLED_CONFIG.to_string()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_source() -> String {
    BUNDLED_CONFIG.to_string()
}

#[cfg(not(target_arch = "wasm32"))]
fn login_url_override() -> Option<String> {
    dotenvy::dotenv().ok();
    std::env::var(LOGIN_URL_ENV)
        .ok()
        .filter(|url| !url.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
fn login_url_override() -> Option<String> {
    option_env!("FALCON_LOGIN_URL")
        .filter(|url| !url.trim().is_empty())
        .map(str::to_string)
}

fn parse_or_default(contents: &str) -> AppConfig {
    AppConfig::from_toml_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid configuration, using defaults");
        AppConfig::default()
    })
}
