//! Core data model definitions shared across Userhub crates.
//!
//! The [`models`] module aggregates every payload model of the user API
//! behind one namespace, and [`schema`] describes the wire schemas those
//! models implement. All bindings are resolved at compile time.
#![allow(missing_docs)]

pub mod error;
pub mod models;
pub mod prelude;
pub mod schema;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use models::{
    CreateUserInput, CreateUserOutput, GetUsersOutput, UpdateUserBody, User,
};
pub use schema::{ApiModel, SchemaDescriptor, SCHEMAS};
