//! In-memory account store backed by a concurrent map.
//!
//! Used by tests; no configured backend selects it.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use pirates_core::error::AppError;
use pirates_core::result::AppResult;
use pirates_entity::account::{Account, CreateAccount};

use crate::store::AccountStore;

/// Account store that keeps every record in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryAccountStore {
    accounts: Arc<DashMap<String, Account>>,
}

impl MemoryAccountStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store holds no accounts.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn create(&self, data: &CreateAccount) -> AppResult<Account> {
        // The entry guard holds the shard lock, so check and insert are one step.
        match self.accounts.entry(data.username.clone()) {
            Entry::Occupied(_) => Err(AppError::duplicate_username(&data.username)),
            Entry::Vacant(slot) => {
                let account = Account {
                    username: data.username.clone(),
                    password_hash: data.password_hash.clone(),
                    created_at: Utc::now(),
                };
                slot.insert(account.clone());
                debug!(username = %account.username, "Account stored in memory");
                Ok(account)
            }
        }
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        Ok(self.accounts.get(username).map(|entry| entry.value().clone()))
    }
}
