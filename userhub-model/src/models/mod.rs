//! Payload models of the user API, aggregated behind one namespace.
//!
//! Every model is a compile-time binding: importing this module pulls in
//! the whole surface at zero runtime cost and cannot observe a partially
//! populated namespace. Consumers that want a narrower footprint can
//! import each model from its own submodule instead; both routes name the
//! same definitions.

pub mod create_user_input;
pub mod create_user_output;
pub mod get_users_output;
pub mod update_user_body;
pub mod user;

pub use create_user_input::CreateUserInput;
pub use create_user_output::CreateUserOutput;
pub use get_users_output::GetUsersOutput;
pub use update_user_body::UpdateUserBody;
pub use user::User;
