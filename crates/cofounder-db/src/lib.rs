//! # cofounder-db
//!
//! Database layer implementing the profile repository with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Idempotent schema bootstrap
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cofounder_db::{create_pool, ensure_schema, DatabaseConfig, PgProfileRepository};
//! use cofounder_core::traits::ProfileRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     ensure_schema(&pool).await?;
//!     let profile_repo = PgProfileRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::PgProfileRepository;
pub use schema::ensure_schema;
