//! Navigation decisions
//!
//! Where a visitor ends up after the OAuth callback or when opening the
//! directory depends only on the session identity and the stored profile.

use serde::{Deserialize, Serialize};

use crate::entities::{Identity, Profile};

pub const LOGIN_PATH: &str = "/login";
pub const ONBOARDING_PATH: &str = "/signup";
pub const DIRECTORY_PATH: &str = "/dashboard";
pub const CALLBACK_PATH: &str = "/auth/callback";

/// Shown when the callback finds no session
pub const AUTH_ERROR_MESSAGE: &str =
    "User not found after authentication. Please try logging in again.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", content = "message", rename_all = "snake_case")]
pub enum Route {
    Login,
    Onboarding,
    Directory,
    /// Terminal failure with a user-facing message and a way back to login
    Error(String),
}

impl Route {
    /// Client path for this route; errors point back to login
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login | Self::Error(_) => LOGIN_PATH,
            Self::Onboarding => ONBOARDING_PATH,
            Self::Directory => DIRECTORY_PATH,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Page the decision is made for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    AuthCallback,
    Directory,
}

/// Decide where to send the visitor
///
/// A profile that failed to load is passed as `None`: the user is sent to
/// onboarding rather than shown an error.
pub fn resolve_route(
    entry: EntryPoint,
    identity: Option<&Identity>,
    profile: Option<&Profile>,
) -> Route {
    if identity.is_none() {
        return match entry {
            EntryPoint::AuthCallback => Route::Error(AUTH_ERROR_MESSAGE.to_string()),
            EntryPoint::Directory => Route::Login,
        };
    }

    match profile {
        Some(profile) if profile.onboarding_complete => Route::Directory,
        _ => Route::Onboarding,
    }
}
