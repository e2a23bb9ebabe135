//! Access token verification
//!
//! The identity provider signs session tokens with a shared HS256 secret.
//! Verifying them locally avoids a provider round trip on every request.

use chrono::{Duration, Utc};
use cofounder_core::{Identity, IdentityMetadata, UserId};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Audience claim of a signed-in session
pub const AUTHENTICATED_AUDIENCE: &str = "authenticated";

/// Access token claims as issued by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account UUID)
    pub sub: String,
    pub aud: String,
    /// Issued at (Unix timestamp)
    #[serde(default)]
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// OIDC profile forwarded from the OAuth provider
    #[serde(default)]
    pub user_metadata: IdentityMetadata,
}

impl Claims {
    /// Get the account ID
    ///
    /// # Errors
    /// Returns an error if the subject is not a UUID
    pub fn user_id(&self) -> Result<UserId, AppError> {
        UserId::parse(&self.sub).map_err(|_| AppError::InvalidToken)
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Convert verified claims into the session identity
    ///
    /// # Errors
    /// Returns an error if the subject is not a UUID
    pub fn into_identity(self) -> Result<Identity, AppError> {
        Ok(Identity {
            id: self.user_id()?,
            email: self.email,
            metadata: self.user_metadata,
        })
    }
}

/// JWT service for verifying (and, for local tooling, issuing) session tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    /// Create a new JWT service with the provider's signing secret
    #[must_use]
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[AUTHENTICATED_AUDIENCE]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Decode and validate a JWT token
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                    _ => AppError::InvalidToken,
                }
            })?;

        Ok(token_data.claims)
    }

    /// Validate an access token and return the identity behind it
    ///
    /// # Errors
    /// Returns an error if the token is invalid, expired, or has a malformed subject
    pub fn verify_access_token(&self, token: &str) -> Result<Identity, AppError> {
        self.decode_token(token)?.into_identity()
    }

    /// Sign a token for `identity` the way the provider does
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_access_token(
        &self,
        identity: &Identity,
        expires_in_secs: i64,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: identity.id.to_string(),
            aud: AUTHENTICATED_AUDIENCE.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(expires_in_secs)).timestamp(),
            email: identity.email.clone(),
            role: Some(AUTHENTICATED_AUDIENCE.to_string()),
            user_metadata: identity.metadata.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode JWT: {e}")))
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("algorithms", &self.validation.algorithms)
            .finish_non_exhaustive()
    }
}
