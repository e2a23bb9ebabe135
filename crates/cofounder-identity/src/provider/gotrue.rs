//! `IdentityProvider` backed by a GoTrue-compatible auth service
//!
//! Session introspection verifies the access token locally; sign-in and
//! sign-out go through the provider's HTTP API.

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use cofounder_common::{AppError, AuthConfig, JwtService};
use cofounder_core::entities::Identity;
use cofounder_core::error::DomainError;
use cofounder_core::traits::{IdentityProvider, RepoResult};

use crate::client::{AuthClient, AuthClientConfig, AuthClientError};

/// Identity provider adapter
#[derive(Debug, Clone)]
pub struct GoTrueIdentityProvider {
    client: AuthClient,
    jwt: JwtService,
}

impl GoTrueIdentityProvider {
    pub fn new(client: AuthClient, jwt: JwtService) -> Self {
        Self { client, jwt }
    }

    /// Build the adapter from application config
    ///
    /// # Errors
    /// Returns an error if the auth API URL is invalid
    pub fn from_config(config: &AuthConfig) -> Result<Self, AuthClientError> {
        let client = AuthClient::new(AuthClientConfig::from(config))?;
        Ok(Self::new(client, JwtService::new(&config.jwt_secret)))
    }
}

fn provider_error(err: AuthClientError) -> DomainError {
    DomainError::IdentityProvider(err.to_string())
}

#[async_trait]
impl IdentityProvider for GoTrueIdentityProvider {
    fn authorize_url(&self, redirect_to: &str) -> RepoResult<String> {
        self.client
            .authorize_url(redirect_to)
            .map(String::from)
            .map_err(provider_error)
    }

    #[instrument(skip_all)]
    async fn get_user(&self, access_token: &str) -> RepoResult<Option<Identity>> {
        match self.jwt.verify_access_token(access_token) {
            Ok(identity) => Ok(Some(identity)),
            Err(AppError::InvalidToken | AppError::TokenExpired) => {
                debug!("Access token rejected");
                Ok(None)
            }
            Err(e) => Err(DomainError::IdentityProvider(e.to_string())),
        }
    }

    #[instrument(skip_all)]
    async fn sign_out(&self, access_token: &str) -> RepoResult<()> {
        self.client
            .logout(access_token)
            .await
            .map_err(provider_error)?;
        info!("Session revoked");
        Ok(())
    }
}
