//! Business logic services
//!
//! This module contains the use cases behind the HTTP API: session handling,
//! the auth callback, onboarding, the directory and profile editing.

pub mod auth_callback;
pub mod context;
pub mod directory;
pub mod error;
pub mod onboarding;
pub mod profile;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use auth_callback::AuthCallbackService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use directory::DirectoryService;
pub use error::{ServiceError, ServiceResult};
pub use onboarding::OnboardingService;
pub use profile::ProfileService;
pub use session::SessionService;
