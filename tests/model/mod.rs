//! Serialization contract tests for the JSON-facing DTOs.
//!
//! Each test pins the exact JSON object a DTO produces: key set, key names and enum labels.

mod favorite;
mod universe;
