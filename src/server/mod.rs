//! Server-side data layer.
//!
//! This module contains everything that touches the database: configuration, connection
//! startup and migrations, repositories for each table, and the services that combine them
//! (password hashing, favorite expansion). HTTP routing is left to the consuming application.

#![warn(missing_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod service;
pub mod startup;
pub mod util;
