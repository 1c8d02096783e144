#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::models::user::User;
use crate::schema::{ApiModel, SchemaDescriptor};

/// Request payload for creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CreateUserInput {
    pub name: String,
    pub nick_name: Option<String>,
    pub phone: Option<String>,
}

impl CreateUserInput {
    /// Create a request for a user with the given name.
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

/// The create operation stores the input fields verbatim as the new user.
impl From<CreateUserInput> for User {
    fn from(input: CreateUserInput) -> Self {
        User {
            name: input.name,
            nick_name: input.nick_name,
            phone: input.phone,
        }
    }
}

impl ApiModel for CreateUserInput {
    const SCHEMA: SchemaDescriptor = SchemaDescriptor {
        name: "CreateUserInput",
        fields: &["name", "nickName", "phone"],
    };
}
