// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Request and response payloads of the access key endpoint

use serde::{Deserialize, Serialize};

/// Read-only access to the repository
pub const PERMISSION_REPO_READ: &str = "REPO_READ";
/// Read and write access to the repository
pub const PERMISSION_REPO_WRITE: &str = "REPO_WRITE";

/// Public SSH key as sent in an upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicSshKey {
    pub text: String,
    pub label: String,
}

/// Body of `POST .../ssh`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadKeyPayload {
    pub key: PublicSshKey,
    /// One of [`PERMISSION_REPO_READ`] or [`PERMISSION_REPO_WRITE`]
    pub permission: String,
}

/// Access key as described by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDescription {
    pub key: KeyInfo,
    pub repository: RepositoryInfo,
    pub permission: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInfo {
    pub id: u64,
    pub text: String,
    pub label: String,
}

/// Repository the key was added to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryInfo {
    pub name: String,
    pub id: u64,
    pub project: ProjectInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub key: String,
}
