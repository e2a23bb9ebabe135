//! Identity provider HTTP client

mod auth_client;

pub use auth_client::{AuthClient, AuthClientConfig, AuthClientError, AuthClientResult};
