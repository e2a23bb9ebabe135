//! # cofounder-service
//!
//! Application layer containing use cases, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::*;
