#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::models::user::User;
use crate::schema::{ApiModel, SchemaDescriptor};

/// Response payload of the create operation: the user as stored.
///
/// This is intentionally a thin wrapper around [`User`] so the response
/// keeps its own type identity while serializing to exactly the user's
/// wire shape.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CreateUserOutput(pub User);

impl CreateUserOutput {
    pub fn user(&self) -> &User {
        &self.0
    }

    pub fn into_user(self) -> User {
        self.0
    }
}

impl From<User> for CreateUserOutput {
    fn from(user: User) -> Self {
        Self(user)
    }
}

impl From<CreateUserOutput> for User {
    fn from(output: CreateUserOutput) -> Self {
        output.0
    }
}

impl ApiModel for CreateUserOutput {
    const SCHEMA: SchemaDescriptor = SchemaDescriptor {
        name: "CreateUserOutput",
        fields: &["name", "nickName", "phone"],
    };
}

#[cfg(test)]
mod tests {
    use super::{CreateUserOutput, User};

    #[test]
    fn converts_both_ways_losslessly() {
        let user = User::new("Hamilton").with_phone("0086-123456");
        let output = CreateUserOutput::from(user.clone());

        assert_eq!(output.user(), &user);
        assert_eq!(User::from(output), user);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_to_the_user_wire_shape() {
        let user = User::new("Hamilton").with_nick_name("Ham");
        let output = CreateUserOutput::from(user.clone());

        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            serde_json::to_value(&user).unwrap()
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_from_a_plain_user_document() {
        let output: CreateUserOutput =
            serde_json::from_str(r#"{"name":"Hamilton","nickName":null,"phone":null}"#)
                .unwrap();

        assert_eq!(output.into_user(), User::new("Hamilton"));
    }
}
