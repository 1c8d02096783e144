#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::schema::{ApiModel, SchemaDescriptor};

/// Canonical resource representation of a user.
///
/// `name` is the identity a user is addressed by; the optional fields
/// serialize as explicit `null`s when unset, so the wire shape always
/// carries all three keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct User {
    pub name: String,
    pub nick_name: Option<String>,
    pub phone: Option<String>,
}

impl User {
    /// Create a user with only the required name set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nick_name: None,
            phone: None,
        }
    }

    pub fn with_nick_name(mut self, nick_name: impl Into<String>) -> Self {
        self.nick_name = Some(nick_name.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

impl ApiModel for User {
    const SCHEMA: SchemaDescriptor = SchemaDescriptor {
        name: "User",
        fields: &["name", "nickName", "phone"],
    };
}

#[cfg(test)]
mod tests {
    use super::User;

    #[test]
    fn builder_sets_optional_fields() {
        let user = User::new("Hamilton")
            .with_nick_name("Ham")
            .with_phone("0086-123456");

        assert_eq!(user.name, "Hamilton");
        assert_eq!(user.nick_name.as_deref(), Some("Ham"));
        assert_eq!(user.phone.as_deref(), Some("0086-123456"));
    }

    #[test]
    fn bare_user_leaves_optional_fields_unset() {
        let user = User::new("Hamilton");

        assert!(user.nick_name.is_none());
        assert!(user.phone.is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_camel_case_with_explicit_nulls() {
        let user = User::new("Hamilton");
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Hamilton",
                "nickName": null,
                "phone": null,
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_wire_payload() {
        let user: User = serde_json::from_str(
            r#"{"name":"Hamilton","nickName":"Ham","phone":"0086-123456"}"#,
        )
        .unwrap();

        assert_eq!(
            user,
            User::new("Hamilton")
                .with_nick_name("Ham")
                .with_phone("0086-123456")
        );
    }
}
