//! Persistence layer for the holonet galactic social network.
//!
//! - [`model`] holds the JSON-facing DTOs built from database rows.
//! - [`server`] holds configuration, repositories, services and startup.

pub mod model;
pub mod server;
