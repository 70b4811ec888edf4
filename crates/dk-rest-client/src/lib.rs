// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! REST transport for Git server SSH access keys
//!
//! [`RestKeyClient`] talks to the `rest/keys/1.0` endpoint of a Git server and
//! implements [`KeyClientApi`] so reconciliation code can depend on the
//! capability instead of this dialect. Build one with [`new_client`] or
//! [`new_repository_client`].
//!
//! The client never retries. Every request carries the configured bearer
//! token, and every call can be cancelled by dropping its future.

pub mod auth;
pub mod client;
pub mod config;
pub mod convert;
pub mod error;
pub mod factory;

pub use client::*;
pub use config::*;
pub use error::*;
pub use factory::*;

use async_trait::async_trait;
use dk_client_api::{KeyClientApi, KeyClientError, KeyClientResult};
use dk_domain_types::{AccessKey, RepositoryRef};

#[async_trait]
impl KeyClientApi for client::RestKeyClient {
    async fn create_access_key(
        &self,
        repo: &RepositoryRef,
        key: &AccessKey,
    ) -> KeyClientResult<AccessKey> {
        self.create_access_key(repo, key).await.map_err(KeyClientError::from)
    }
}
