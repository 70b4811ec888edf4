// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! `dk create`

use anyhow::{Context, bail};
use clap::Args;
use dk_client_api::KeyClientApi;
use dk_domain_types::{AccessKey, Permission, RepositoryRef};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Project key, e.g. PRJ
    #[arg(long)]
    pub project: String,

    /// Repository name within the project
    #[arg(long)]
    pub repo: String,

    /// File containing the SSH public key
    #[arg(long)]
    pub key_file: PathBuf,

    /// Key label; defaults to the comment field of the public key
    #[arg(long)]
    pub label: Option<String>,

    /// Access granted to the key: read or write
    #[arg(long, default_value = "read")]
    pub permission: Permission,
}

/// JSON printed after a key is created
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedKey {
    pub id: Option<u64>,
    pub project_key: String,
    pub repo_name: String,
    pub label: String,
    pub permission: String,
    pub public_key: String,
}

impl CreateArgs {
    pub async fn run(&self, client: &dyn KeyClientApi) -> anyhow::Result<CreatedKey> {
        let text = std::fs::read_to_string(&self.key_file)
            .with_context(|| format!("reading public key {}", self.key_file.display()))?;
        let public_key = text.trim();
        if public_key.is_empty() {
            bail!("public key file {} is empty", self.key_file.display());
        }

        let label = match &self.label {
            Some(label) => label.clone(),
            None => key_comment(public_key).unwrap_or_default().to_string(),
        };

        let repo = RepositoryRef::new(self.project.clone(), self.repo.clone());
        let key = AccessKey::new(public_key, label, self.permission);

        tracing::info!(repository = %repo, permission = %key.permission, "Creating access key");
        let created = client
            .create_access_key(&repo, &key)
            .await
            .with_context(|| format!("creating access key on {}", repo))?;

        Ok(CreatedKey {
            id: created.id,
            project_key: repo.project_key,
            repo_name: repo.repo_name,
            label: created.label,
            permission: created.permission.to_string(),
            public_key: created.public_key,
        })
    }
}

/// Comment field of an OpenSSH public key line (`type base64 comment`)
fn key_comment(public_key: &str) -> Option<&str> {
    let mut parts = public_key.splitn(3, char::is_whitespace);
    parts.next()?;
    parts.next()?;
    parts.next().map(str::trim).filter(|c| !c.is_empty())
}
