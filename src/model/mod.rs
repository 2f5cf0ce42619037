//! JSON-facing DTOs.
//!
//! Each DTO is the serialized form of one table row and is the only shape callers should
//! expose over an API. Enumerated columns are rendered as their stored labels
//! (`"Planet Post"`, `"Galactic Empire"`), never as Rust variant names.

pub mod character;
pub mod favorite;
pub mod follower;
pub mod media;
pub mod planet;
pub mod post;
pub mod user;
