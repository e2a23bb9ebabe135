//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{DirectoryQuery, SubmitOnboardingRequest, UpdateProfileRequest};

pub use responses::{
    AuthorizeResponse, DirectoryPage, DirectoryResponse, FounderTypeBadge,
    HealthChecks, HealthResponse, OptionsResponse, ProfileCard, ProfileFormResponse,
    ProfileResponse, ProfileStats, ProfileSummary, ReadinessResponse, RouteResponse,
    SubmissionResponse, WizardSnapshot,
};
