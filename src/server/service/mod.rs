//! Services combining repositories with application rules.

pub mod favorite;
pub mod user;
