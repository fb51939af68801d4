//! # User Schema
//!
//! **INTERNAL USE ONLY**: This crate exists solely to provide schema-generated value types
//! for integration testing `refract-core` and for the `refract` CLI.
//! It is not intended for production use.
//!
//! The modules mirror the schema modules `user` and `service`, written the way the schema
//! compiler emits Rust code. [`UserStore`] serves the `service` messages from memory.
use once_cell::sync::Lazy;
use refract_core::registry::TypeRegistry;

pub mod service;
pub mod store;
mod timestamp;
pub mod user;

pub use service::{AddUserRequest, AddUserResponse, GetUserRequest, GetUserResponse};
pub use store::{StoreError, UserStore};
pub use user::{Pet, SubscriptionStatus, TARZAN, Trial, User};

/// Every record of the schema.
pub static REGISTRY: Lazy<TypeRegistry> = Lazy::new(|| {
    let mut registry = TypeRegistry::new();
    registry
        .register::<AddUserRequest>()
        .register::<AddUserResponse>()
        .register::<GetUserRequest>()
        .register::<GetUserResponse>();
    registry
});
