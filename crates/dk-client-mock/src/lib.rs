// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! In-memory access key client for testing
//!
//! [`MockKeyClient`] implements [`KeyClientApi`] without any network access,
//! so code written against the capability can be exercised in unit tests.
//! Only registered repositories exist; everything else reports `NotFound`.

use async_trait::async_trait;
use dk_client_api::{KeyClientApi, KeyClientError, KeyClientResult};
use dk_domain_types::{AccessKey, RepositoryRef};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Mock access key client backed by in-memory maps
#[derive(Debug, Clone, Default)]
pub struct MockKeyClient {
    repositories: Arc<RwLock<HashSet<RepositoryRef>>>,
    keys: Arc<RwLock<HashMap<RepositoryRef, Vec<AccessKey>>>>,
    next_id: Arc<AtomicU64>,
    /// Failure returned by the next create call, then cleared
    pending_failure: Arc<RwLock<Option<String>>>,
    calls: Arc<AtomicU64>,
}

impl MockKeyClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock where the given repositories exist
    pub async fn with_repositories<I>(repositories: I) -> Self
    where
        I: IntoIterator<Item = RepositoryRef>,
    {
        let client = Self::new();
        for repo in repositories {
            client.add_repository(repo).await;
        }
        client
    }

    pub async fn add_repository(&self, repo: RepositoryRef) {
        self.repositories.write().await.insert(repo);
    }

    /// Make the next create call fail with `RequestFailed`
    pub async fn fail_next(&self, message: impl Into<String>) {
        *self.pending_failure.write().await = Some(message.into());
    }

    /// Keys created on `repo`, in creation order
    pub async fn keys_for(&self, repo: &RepositoryRef) -> Vec<AccessKey> {
        self.keys.read().await.get(repo).cloned().unwrap_or_default()
    }

    /// Number of create calls received, including failed ones
    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeyClientApi for MockKeyClient {
    async fn create_access_key(
        &self,
        repo: &RepositoryRef,
        key: &AccessKey,
    ) -> KeyClientResult<AccessKey> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        repo.validate()?;

        if let Some(message) = self.pending_failure.write().await.take() {
            return Err(KeyClientError::request_failed(message));
        }

        if !self.repositories.read().await.contains(repo) {
            return Err(KeyClientError::NotFound);
        }

        // Server ids start at 1
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let created = key.clone().with_id(id);
        self.keys
            .write()
            .await
            .entry(repo.clone())
            .or_default()
            .push(created.clone());

        Ok(created)
    }
}
