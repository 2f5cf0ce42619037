//! Helpers shared by services.

pub mod password;
