use std::time::Duration;

use async_trait::async_trait;
use shared_types::{AppError, AuthConfig, AuthGrant, LoginRequest, LoginResponse};

/// Exchanges a username and password for an [`AuthGrant`].
///
/// `?Send` so that browser implementations (whose futures are not `Send`)
/// can implement it too.
#[async_trait(?Send)]
pub trait Authenticator {
    async fn authenticate(&self, request: &LoginRequest) -> Result<AuthGrant, AppError>;
}

/// Posts credentials as JSON to the backend login endpoint.
#[derive(Debug, Clone)]
pub struct HttpAuthenticator {
    client: reqwest::Client,
    login_url: String,
    timeout: Duration,
}

impl HttpAuthenticator {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            login_url: config.login_url.clone(),
            timeout: Duration::from_millis(config.timeout_ms),
        }
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn request(&self, body: &LoginRequest) -> reqwest::RequestBuilder {
        let builder = self.client.post(&self.login_url).json(body);
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(self.timeout);
        builder
    }
}

#[async_trait(?Send)]
impl Authenticator for HttpAuthenticator {
    async fn authenticate(&self, request: &LoginRequest) -> Result<AuthGrant, AppError> {
        let response = self.request(request).send().await.map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = AppError::login_rejected(&body);
            tracing::info!(status = status.as_u16(), reason = %error.message, "login rejected");
            return Err(error);
        }

        let body: LoginResponse = response.json().await.map_err(|e| {
            tracing::warn!(error = %e, "login response was not valid JSON");
            AppError::authentication_failed("Unexpected response from the server")
        })?;
        AuthGrant::from_response(body)
    }
}

/// Transport failures surface to the user as failed logins.
fn transport_error(e: reqwest::Error) -> AppError {
    let network = if e.is_timeout() {
        AppError::network("login request timed out")
    } else {
        AppError::network(e.to_string())
    };
    tracing::warn!(error = %network, "login request failed");
    AppError::authentication_failed(network.friendly_message())
}
