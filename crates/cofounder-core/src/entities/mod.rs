//! Domain entities - core business objects

mod identity;
mod profile;

pub use identity::{Identity, IdentityMetadata};
pub use profile::{
    member_since_label, CalendarType, FounderType, HasIdea, ParseEnumError, Profile,
    ProfileChanges,
};
