//! Test fixture modules for database row creation.
//!
//! - `user` - users with a known password
//! - `universe` - planets and characters
//! - `social` - posts, media, favorites and follow edges
//! - `factory` - in-memory models that never touch the database

pub mod factory;
pub mod social;
pub mod universe;
pub mod user;
