//! Shorefront Persistence - Database entities and schema bootstrap
//!
//! This crate provides:
//! - SeaORM entity definitions for the CMS schema
//! - Table creation for embedded sqlite and test databases

pub mod entity;
pub mod schema;

// Re-export sea-orm for convenience
pub use sea_orm;

// Re-export entity prelude
pub use entity::prelude::*;

pub use schema::create_tables;
