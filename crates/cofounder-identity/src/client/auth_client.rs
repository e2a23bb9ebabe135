//! HTTP client for the identity provider's auth API (GoTrue-compatible).
//!
//! Only the calls the application needs are wrapped: building the OAuth
//! authorize URL and revoking a session.

use reqwest::{StatusCode, Url};
use std::time::Duration;
use tracing::{debug, info};

/// Auth API client configuration
#[derive(Debug, Clone)]
pub struct AuthClientConfig {
    /// Auth API base URL (e.g., `https://<project>.supabase.co/auth/v1`)
    pub url: String,
    /// Public API key sent with every request
    pub anon_key: String,
    /// OAuth provider used for sign-in
    pub oauth_provider: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for AuthClientConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:9999".to_string(),
            anon_key: String::new(),
            oauth_provider: "linkedin_oidc".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl From<&cofounder_common::AuthConfig> for AuthClientConfig {
    fn from(config: &cofounder_common::AuthConfig) -> Self {
        Self {
            url: config.url.clone(),
            anon_key: config.anon_key.clone(),
            oauth_provider: config.oauth_provider.clone(),
            ..Default::default()
        }
    }
}

/// Error type for auth API calls
#[derive(Debug, thiserror::Error)]
pub enum AuthClientError {
    #[error("Invalid auth API URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("Auth API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Auth API returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Result type for auth API calls
pub type AuthClientResult<T> = Result<T, AuthClientError>;

/// Thin client over the provider's auth endpoints
#[derive(Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: Url,
    anon_key: String,
    oauth_provider: String,
}

impl std::fmt::Debug for AuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthClient")
            .field("base_url", &self.base_url.as_str())
            .field("oauth_provider", &self.oauth_provider)
            .finish_non_exhaustive()
    }
}

impl AuthClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the HTTP client cannot be built
    pub fn new(config: AuthClientConfig) -> AuthClientResult<Self> {
        // a trailing slash keeps `join` from dropping the last path segment
        let base = format!("{}/", config.url.trim_end_matches('/'));
        let base_url = Url::parse(&base).map_err(|e| AuthClientError::InvalidUrl(e.to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(AuthClientError::Build)?;

        info!(
            url = %base_url,
            oauth_provider = %config.oauth_provider,
            "Auth client created"
        );

        Ok(Self {
            http,
            base_url,
            anon_key: config.anon_key,
            oauth_provider: config.oauth_provider,
        })
    }

    fn endpoint(&self, path: &str) -> AuthClientResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| AuthClientError::InvalidUrl(e.to_string()))
    }

    /// OAuth sign-in URL that returns the browser to `redirect_to`
    ///
    /// # Errors
    /// Returns an error if the URL cannot be built
    pub fn authorize_url(&self, redirect_to: &str) -> AuthClientResult<Url> {
        let mut url = self.endpoint("authorize")?;
        url.query_pairs_mut()
            .append_pair("provider", &self.oauth_provider)
            .append_pair("redirect_to", redirect_to);
        Ok(url)
    }

    /// Revoke the session behind `access_token`
    ///
    /// # Errors
    /// Returns an error if the request fails or the provider rejects it
    pub async fn logout(&self, access_token: &str) -> AuthClientResult<()> {
        let url = self.endpoint("logout")?;
        debug!(url = %url, "Revoking session");

        let response = self
            .http
            .post(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(AuthClientError::Status { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(url: &str) -> AuthClient {
        AuthClient::new(AuthClientConfig {
            url: url.to_string(),
            anon_key: "anon-key".to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_authorize_url() {
        let client = client("https://project.supabase.co/auth/v1");
        let url = client
            .authorize_url("http://localhost:3000/auth/callback")
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://project.supabase.co/auth/v1/authorize?provider=linkedin_oidc&redirect_to=http%3A%2F%2Flocalhost%3A3000%2Fauth%2Fcallback"
        );
    }

    #[test]
    fn test_trailing_slash_is_tolerated() {
        let client = client("https://project.supabase.co/auth/v1/");
        let url = client
            .authorize_url("https://app.example.com/auth/callback")
            .unwrap();
        assert!(url
            .as_str()
            .starts_with("https://project.supabase.co/auth/v1/authorize?"));
    }

    #[test]
    fn test_invalid_base_url() {
        let result = AuthClient::new(AuthClientConfig {
            url: "not a url".to_string(),
            ..Default::default()
        });
        assert!(matches!(result, Err(AuthClientError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_logout_sends_key_and_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/logout")
            .match_header("apikey", "anon-key")
            .match_header("authorization", "Bearer session-token")
            .with_status(204)
            .create_async()
            .await;

        client(&server.url()).logout("session-token").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_logout_rejected() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/logout")
            .with_status(401)
            .with_body(r#"{"msg":"invalid JWT"}"#)
            .create_async()
            .await;

        let err = client(&server.url()).logout("expired").await.unwrap_err();
        match err {
            AuthClientError::Status { status, body } => {
                assert_eq!(status, StatusCode::UNAUTHORIZED);
                assert!(body.contains("invalid JWT"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
