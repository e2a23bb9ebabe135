//! # cofounder-identity
//!
//! Identity provider adapter: OAuth sign-in initiation, session
//! introspection and sign-out against a GoTrue-compatible auth service.
//!
//! ## Example
//!
//! ```ignore
//! use cofounder_identity::GoTrueIdentityProvider;
//!
//! let provider = GoTrueIdentityProvider::from_config(&config.auth)?;
//! let login_url = provider.authorize_url("http://localhost:3000/auth/callback")?;
//! let identity = provider.get_user(access_token).await?;
//! ```

pub mod client;
pub mod provider;

pub use client::{AuthClient, AuthClientConfig, AuthClientError, AuthClientResult};
pub use provider::GoTrueIdentityProvider;
