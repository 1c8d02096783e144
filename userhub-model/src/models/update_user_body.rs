#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::models::user::User;
use crate::schema::{ApiModel, SchemaDescriptor};

/// Patch payload for updating a user.
///
/// The target user is addressed by the request path, not by the payload,
/// so only the mutable fields appear here. An unset field leaves the
/// stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UpdateUserBody {
    pub nick_name: Option<String>,
    pub phone: Option<String>,
}

impl UpdateUserBody {
    /// The empty patch; applying it changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nick_name(mut self, nick_name: impl Into<String>) -> Self {
        self.nick_name = Some(nick_name.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// True when no field is set, i.e. applying the patch is a no-op.
    pub fn is_empty(&self) -> bool {
        self.nick_name.is_none() && self.phone.is_none()
    }

    /// Overwrite the fields of `user` that this patch sets.
    pub fn apply(&self, user: &mut User) {
        if let Some(nick_name) = &self.nick_name {
            user.nick_name = Some(nick_name.clone());
        }
        if let Some(phone) = &self.phone {
            user.phone = Some(phone.clone());
        }
    }
}

impl ApiModel for UpdateUserBody {
    const SCHEMA: SchemaDescriptor = SchemaDescriptor {
        name: "UpdateUserBody",
        fields: &["nickName", "phone"],
    };
}
