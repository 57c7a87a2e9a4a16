//! Wire DTOs for the HTTP API.
//!
//! Entity models are never serialized directly; every resource has an explicit
//! DTO describing exactly which fields are exposed. This is what keeps the
//! user's password out of every response.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod starship;
pub mod user;
