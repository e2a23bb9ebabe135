//! # cofounder-core
//!
//! Domain layer containing entities, value objects, the onboarding wizard,
//! directory filters, route resolution and the ports implemented by the
//! infrastructure crates.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod directory;
pub mod entities;
pub mod error;
pub mod onboarding;
pub mod routing;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use directory::{DirectoryFilter, FounderTypeFilter, LocationFilter, SortOrder};
pub use entities::{
    CalendarType, FounderType, HasIdea, Identity, IdentityMetadata, Profile, ProfileChanges,
};
pub use error::DomainError;
pub use onboarding::{
    FieldValue, FormField, OnboardingForm, OnboardingWizard, Submission, WizardMode, WizardStep,
};
pub use routing::{resolve_route, EntryPoint, Route};
pub use traits::{IdentityProvider, ProfileRepository, RepoResult};
pub use value_objects::{UserId, UserIdParseError};
