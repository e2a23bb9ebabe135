//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in cofounder-core.

mod error;
mod profile;

pub use profile::PgProfileRepository;
