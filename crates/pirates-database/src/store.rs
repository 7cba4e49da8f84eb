//! Account store abstraction.

use async_trait::async_trait;

use pirates_core::result::AppResult;
use pirates_entity::account::{Account, CreateAccount};

/// Durable record of username to password hash.
///
/// Implementations must enforce username uniqueness atomically: when several
/// callers race to create the same username, exactly one succeeds and the
/// others receive a `DuplicateUsername` error.
#[async_trait]
pub trait AccountStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new account. Fails with `DuplicateUsername` on an exact,
    /// case-sensitive username match.
    async fn create(&self, data: &CreateAccount) -> AppResult<Account>;

    /// Look up an account by exact username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>>;
}
