//! One-import snapshot of the model surface.
//!
//! Prefer this module when a consumer crate wants the whole payload
//! vocabulary at once; import individual model modules instead when a
//! narrow dependency footprint matters.

pub use super::error::{ModelError, Result as ModelResult};
pub use super::models::{
    CreateUserInput, CreateUserOutput, GetUsersOutput, UpdateUserBody, User,
};
pub use super::schema::{ApiModel, SchemaDescriptor};
