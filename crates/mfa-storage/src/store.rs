//! Secret storage provider trait.

use async_trait::async_trait;
use mfa_model::TotpCredential;
use uuid::Uuid;

use crate::error::StorageResult;

/// Provider for TOTP credential storage.
///
/// Implementations must be thread-safe and support concurrent access;
/// the verification engine may load credentials from any number of
/// requests in parallel.
///
/// ## Security Note
///
/// Secret data should be encrypted at rest. Implementations must ensure
/// secrets are never logged.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Loads the credential for a user, if one exists.
    async fn load(&self, user_id: Uuid) -> StorageResult<Option<TotpCredential>>;

    /// Saves a credential, replacing any existing one for the same user.
    async fn save(&self, credential: &TotpCredential) -> StorageResult<()>;

    /// Deletes the credential for a user.
    ///
    /// ## Errors
    ///
    /// Returns [`StorageError::NotFound`](crate::StorageError::NotFound)
    /// if the user has no stored credential.
    async fn delete(&self, user_id: Uuid) -> StorageResult<()>;

    /// Checks whether a user has an enrolled credential.
    async fn has_credential(&self, user_id: Uuid) -> StorageResult<bool> {
        Ok(self.load(user_id).await?.is_some())
    }
}
