//! SeaORM entities for the holonet schema.
//!
//! Tables: `user`, `follower`, `post`, `media`, `character`, `planet`, `favorite`.

pub mod prelude;

pub mod character;
pub mod favorite;
pub mod follower;
pub mod media;
pub mod planet;
pub mod post;
pub mod sea_orm_active_enums;
pub mod subject;
pub mod user;
