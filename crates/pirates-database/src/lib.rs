//! # pirates-database
//!
//! Connection pool management, table bootstrap, and the account store
//! implementations (PostgreSQL, SQLite, and in-memory).

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryAccountStore;
pub use repositories::{PgAccountStore, SqliteAccountStore};
pub use store::AccountStore;
