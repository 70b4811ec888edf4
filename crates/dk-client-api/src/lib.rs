// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Access key client contract
//!
//! Reconciliation code depends on [`KeyClientApi`] rather than on a concrete
//! server dialect. The REST transport in `dk-rest-client` implements it for
//! real servers and `dk-client-mock` implements it in memory for tests.

pub mod error;

pub use error::*;

use async_trait::async_trait;
use dk_domain_types::{AccessKey, Permission, RepositoryRef};

/// Operations on the access keys of a single repository
///
/// Implementations must be safe to share across tasks. Calls are cancelled by
/// dropping the returned future; implementations must not keep working on a
/// request after that.
#[async_trait]
pub trait KeyClientApi: Send + Sync {
    /// Grant `key` access to `repo`.
    ///
    /// Returns the key as stored by the server: identical to the input except
    /// that `id` is populated. Each call performs one remote mutation and is
    /// not idempotent; repeating it may create a duplicate key.
    async fn create_access_key(
        &self,
        repo: &RepositoryRef,
        key: &AccessKey,
    ) -> KeyClientResult<AccessKey>;

    async fn delete_access_key(&self, _repo: &RepositoryRef, _id: u64) -> KeyClientResult<()> {
        Err(KeyClientError::Unsupported("delete_access_key"))
    }

    async fn get_access_key(&self, _repo: &RepositoryRef, _id: u64) -> KeyClientResult<AccessKey> {
        Err(KeyClientError::Unsupported("get_access_key"))
    }

    async fn list_access_keys(&self, _repo: &RepositoryRef) -> KeyClientResult<Vec<AccessKey>> {
        Err(KeyClientError::Unsupported("list_access_keys"))
    }

    async fn update_access_key_permission(
        &self,
        _repo: &RepositoryRef,
        _id: u64,
        _permission: Permission,
    ) -> KeyClientResult<()> {
        Err(KeyClientError::Unsupported("update_access_key_permission"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct EchoClient;

    #[async_trait]
    impl KeyClientApi for EchoClient {
        async fn create_access_key(
            &self,
            repo: &RepositoryRef,
            key: &AccessKey,
        ) -> KeyClientResult<AccessKey> {
            repo.validate()?;
            Ok(key.clone().with_id(1))
        }
    }

    #[tokio::test]
    async fn test_reserved_operations_report_unsupported() {
        let client: Arc<dyn KeyClientApi> = Arc::new(EchoClient);
        let repo = RepositoryRef::new("PRJ", "service");

        let err = client.delete_access_key(&repo, 1).await.unwrap_err();
        assert!(matches!(err, KeyClientError::Unsupported("delete_access_key")));

        let err = client.get_access_key(&repo, 1).await.unwrap_err();
        assert!(matches!(err, KeyClientError::Unsupported("get_access_key")));

        let err = client.list_access_keys(&repo).await.unwrap_err();
        assert!(matches!(err, KeyClientError::Unsupported("list_access_keys")));

        let err = client
            .update_access_key_permission(&repo, 1, Permission::Write)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            KeyClientError::Unsupported("update_access_key_permission")
        ));
    }

    #[tokio::test]
    async fn test_trait_object_create() {
        let client: Arc<dyn KeyClientApi> = Arc::new(EchoClient);
        let key = AccessKey::new("ssh-ed25519 AAAA", "ci", Permission::Read);

        let created = client
            .create_access_key(&RepositoryRef::new("PRJ", "service"), &key)
            .await
            .unwrap();
        assert_eq!(created, key.with_id(1));

        let err = client
            .create_access_key(&RepositoryRef::new("", "service"), &created)
            .await
            .unwrap_err();
        assert!(matches!(err, KeyClientError::InvalidRepository(_)));
    }
}
