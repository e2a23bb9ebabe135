//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::onboarding::FormField;
use crate::value_objects::UserId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Profile not found: {0}")]
    ProfileNotFound(UserId),

    // =========================================================================
    // Authentication Errors
    // =========================================================================
    #[error("Not signed in")]
    NotAuthenticated,

    #[error("{0}")]
    AuthResolution(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Please fill in all required fields: {}", join_fields(.0))]
    MissingRequiredFields(Vec<FormField>),

    #[error("Invalid value for {field}: {value}")]
    InvalidFieldValue { field: FormField, value: String },

    #[error("Field is read-only for signed-in users: {0}")]
    ReadOnlyField(FormField),

    #[error("Profile can only be submitted from the final step (current step: {step})")]
    SubmitNotAllowed { step: u8 },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Error saving profile: {0}")]
    Persistence(String),

    #[error("Error loading profile: {0}")]
    ProfileFetch(String),

    #[error("Identity provider error: {0}")]
    IdentityProvider(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ProfileNotFound(_) => "UNKNOWN_PROFILE",

            Self::NotAuthenticated => "NOT_AUTHENTICATED",
            Self::AuthResolution(_) => "AUTH_RESOLUTION_ERROR",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingRequiredFields(_) => "MISSING_REQUIRED_FIELDS",
            Self::InvalidFieldValue { .. } => "INVALID_FIELD_VALUE",
            Self::ReadOnlyField(_) => "READ_ONLY_FIELD",
            Self::SubmitNotAllowed { .. } => "SUBMIT_NOT_ALLOWED",

            Self::Persistence(_) => "PERSISTENCE_ERROR",
            Self::ProfileFetch(_) => "PROFILE_FETCH_ERROR",
            Self::IdentityProvider(_) => "IDENTITY_PROVIDER_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ProfileNotFound(_))
    }

    /// Check if this is an authentication error
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::NotAuthenticated | Self::AuthResolution(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::MissingRequiredFields(_)
                | Self::InvalidFieldValue { .. }
                | Self::ReadOnlyField(_)
                | Self::SubmitNotAllowed { .. }
        )
    }

    /// Check if the failure is on the storage side and worth a manual retry
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_) | Self::ProfileFetch(_))
    }

    /// Missing fields reported by a rejected wizard submit
    pub fn missing_fields(&self) -> Option<&[FormField]> {
        match self {
            Self::MissingRequiredFields(fields) => Some(fields),
            _ => None,
        }
    }
}
