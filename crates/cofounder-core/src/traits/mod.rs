//! Ports implemented by the infrastructure crates

mod identity;
mod repositories;

pub use identity::IdentityProvider;
pub use repositories::{ProfileRepository, RepoResult};
