//! Data access layer repositories.
//!
//! One repository per table. Every repository borrows any [`sea_orm::ConnectionTrait`], so the
//! same code runs against a pooled connection or inside a transaction.

pub mod character;
pub mod favorite;
pub mod follower;
pub mod media;
pub mod planet;
pub mod post;
pub mod user;
