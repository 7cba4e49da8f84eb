//! # pirates-entity
//!
//! Domain entity models. Every struct in this crate represents a database
//! table row or a value passed into a repository. Database entities
//! additionally derive `sqlx::FromRow`.

pub mod account;
