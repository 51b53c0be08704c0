//! Data models for the upload catalog.
//!
//! Entities map to database rows via `sqlx::FromRow` and serialize as JSON
//! via `serde`.

pub mod upload;
