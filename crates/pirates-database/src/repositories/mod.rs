//! SQL-backed account store implementations.

pub mod account;

pub use account::{PgAccountStore, SqliteAccountStore};
