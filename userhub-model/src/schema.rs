//! Compile-time schema metadata for the model surface.
//!
//! Each model carries the name and field listing of its wire schema, and
//! [`SCHEMAS`] lists every schema this crate exposes. The listing is the
//! closed world of the surface: [`find`] resolves exactly those names and
//! nothing else.

use crate::error::{ModelError, Result};
use crate::models::{
    CreateUserInput, CreateUserOutput, GetUsersOutput, UpdateUserBody, User,
};

/// Name and field listing of one wire schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaDescriptor {
    /// Schema name as published in the API description.
    pub name: &'static str,
    /// Field names exactly as they appear on the wire.
    pub fields: &'static [&'static str],
}

/// Schema metadata carried by every model type.
pub trait ApiModel {
    /// Descriptor of this model's wire schema.
    const SCHEMA: SchemaDescriptor;

    /// Wire-level schema name of this model.
    fn schema_name() -> &'static str {
        Self::SCHEMA.name
    }
}

/// Every schema exposed by the model surface, in declaration order.
pub static SCHEMAS: [SchemaDescriptor; 5] = [
    CreateUserInput::SCHEMA,
    CreateUserOutput::SCHEMA,
    GetUsersOutput::SCHEMA,
    UpdateUserBody::SCHEMA,
    User::SCHEMA,
];

/// Look up a schema descriptor by its wire name.
pub fn find(name: &str) -> Result<&'static SchemaDescriptor> {
    SCHEMAS
        .iter()
        .find(|schema| schema.name == name)
        .ok_or_else(|| ModelError::UnknownSchema(name.to_string()))
}
