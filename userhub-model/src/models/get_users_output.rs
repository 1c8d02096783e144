#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::models::user::User;
use crate::schema::{ApiModel, SchemaDescriptor};

/// One page of users plus the total number of matches.
///
/// `total` counts every match server-side, so it can exceed `list.len()`
/// when the caller asked for a bounded page.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GetUsersOutput {
    pub total: i64,
    /// Users on this page. Servers may emit `null` instead of an empty
    /// array; both decode to an empty list.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "list_or_empty")
    )]
    pub list: Vec<User>,
}

#[cfg(feature = "serde")]
fn list_or_empty<'de, D>(deserializer: D) -> Result<Vec<User>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<Vec<User>> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}

impl GetUsersOutput {
    pub fn new(total: i64, list: Vec<User>) -> Self {
        Self { total, list }
    }

    /// True when the page itself carries no users.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl ApiModel for GetUsersOutput {
    const SCHEMA: SchemaDescriptor = SchemaDescriptor {
        name: "GetUsersOutput",
        fields: &["total", "list"],
    };
}
