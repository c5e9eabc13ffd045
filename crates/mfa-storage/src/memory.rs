//! In-memory secret store.

use std::collections::HashMap;

use async_trait::async_trait;
use mfa_model::TotpCredential;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::error::{StorageError, StorageResult};
use crate::store::SecretStore;

/// In-memory [`SecretStore`] implementation.
///
/// Keyed by user ID, one credential per user. Intended for tests and
/// single-process embedding; contents are lost on process exit.
#[derive(Debug, Default)]
pub struct MemorySecretStore {
    credentials: RwLock<HashMap<Uuid, TotpCredential>>,
}

impl MemorySecretStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored credentials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.credentials.read().len()
    }

    /// Checks whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.credentials.read().is_empty()
    }
}

#[async_trait]
impl SecretStore for MemorySecretStore {
    async fn load(&self, user_id: Uuid) -> StorageResult<Option<TotpCredential>> {
        Ok(self.credentials.read().get(&user_id).cloned())
    }

    async fn save(&self, credential: &TotpCredential) -> StorageResult<()> {
        let replaced = self
            .credentials
            .write()
            .insert(credential.user_id, credential.clone());
        tracing::debug!(
            user_id = %credential.user_id,
            replaced = replaced.is_some(),
            "stored totp credential"
        );
        Ok(())
    }

    async fn delete(&self, user_id: Uuid) -> StorageResult<()> {
        match self.credentials.write().remove(&user_id) {
            Some(_) => {
                tracing::debug!(user_id = %user_id, "deleted totp credential");
                Ok(())
            }
            None => Err(StorageError::not_found(user_id)),
        }
    }
}
