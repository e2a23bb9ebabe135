//! Database models - SQLx-compatible structs for PostgreSQL tables

mod profile;

pub use profile::ProfileModel;
