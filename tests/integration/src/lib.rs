//! Integration test utilities for the co-founder matching API
//!
//! Spawns the real application against PostgreSQL and drives it over HTTP.
//! Sessions are minted locally with the configured JWT secret, so no live
//! identity provider is needed.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
