//! Entity to model mappers
//!
//! - `From<ProfileModel> for Profile`: convert database rows to domain objects
//! - `ProfileUpsert`: prepare a change set for binding

mod profile;

pub use profile::ProfileUpsert;
