//! Error handling utilities for repositories

use cofounder_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert a failed read into a fetch error
pub fn map_read_error(e: SqlxError) -> DomainError {
    DomainError::ProfileFetch(e.to_string())
}

/// Convert a failed write into a persistence error
pub fn map_write_error(e: SqlxError) -> DomainError {
    DomainError::Persistence(e.to_string())
}
