//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod directory;
pub mod health;
pub mod onboarding;
pub mod profiles;
