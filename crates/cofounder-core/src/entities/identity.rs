//! Identity - the authenticated account as reported by the identity provider

use serde::{Deserialize, Serialize};

use crate::value_objects::UserId;

/// Provider-side account for the current session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    /// Account email
    pub email: Option<String>,
    #[serde(default)]
    pub metadata: IdentityMetadata,
}

/// OIDC profile claims forwarded by the provider (`user_metadata`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityMetadata {
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub email: Option<String>,
    pub picture: Option<String>,
}

impl Identity {
    pub fn new(id: UserId, email: Option<String>) -> Self {
        Self {
            id,
            email,
            metadata: IdentityMetadata::default(),
        }
    }

    pub fn first_name(&self) -> Option<&str> {
        non_blank(self.metadata.given_name.as_deref())
    }

    pub fn last_name(&self) -> Option<&str> {
        non_blank(self.metadata.family_name.as_deref())
    }

    /// Metadata email first, then the account email
    pub fn email(&self) -> Option<&str> {
        non_blank(self.metadata.email.as_deref()).or_else(|| non_blank(self.email.as_deref()))
    }

    pub fn avatar_url(&self) -> Option<&str> {
        non_blank(self.metadata.picture.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_prefers_metadata() {
        let mut identity = Identity::new(UserId::generate(), Some("account@example.com".to_string()));
        assert_eq!(identity.email(), Some("account@example.com"));

        identity.metadata.email = Some("oidc@example.com".to_string());
        assert_eq!(identity.email(), Some("oidc@example.com"));
    }

    #[test]
    fn test_blank_metadata_is_absent() {
        let mut identity = Identity::new(UserId::generate(), None);
        identity.metadata.given_name = Some("  ".to_string());
        assert_eq!(identity.first_name(), None);
        assert_eq!(identity.email(), None);
    }
}
