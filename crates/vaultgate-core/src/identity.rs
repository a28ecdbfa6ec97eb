//! The signed-in principal.

use serde::{Deserialize, Serialize};

/// Minimal profile of an authenticated user.
///
/// Only exists while a session is active. "Nobody signed in" is always
/// `Option::<Identity>::None`, never a placeholder value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Identity {
    pub fn new(id: impl Into<String>, email: Option<String>) -> Self {
        Self {
            id: id.into(),
            email,
        }
    }

    /// Email when the provider supplied one, otherwise the id.
    pub fn display_name(&self) -> &str {
        self.email.as_deref().unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_email() {
        let identity = Identity::new("u1", Some("a@b.com".to_string()));
        assert_eq!(identity.display_name(), "a@b.com");
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let identity = Identity::new("u1", None);
        assert_eq!(identity.display_name(), "u1");
    }

    #[test]
    fn test_missing_email_deserializes_as_none() {
        let identity: Identity = toml::from_str(r#"id = "u1""#).unwrap();
        assert_eq!(identity, Identity::new("u1", None));
    }
}
