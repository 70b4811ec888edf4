// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Access key domain types

use std::fmt;
use std::str::FromStr;

/// Level of access a key is granted on a single repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    Read,
    Write,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Permission::Read => write!(f, "read"),
            Permission::Write => write!(f, "write"),
        }
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "read" => Ok(Permission::Read),
            "write" => Ok(Permission::Write),
            _ => Err(format!("Invalid permission: {}. Use 'read' or 'write'", s)),
        }
    }
}

/// An SSH public key with scoped access to a repository
///
/// `id` is assigned by the server and is `None` until the key has been
/// created. Callers never choose it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessKey {
    pub id: Option<u64>,
    /// Public key text, e.g. `ssh-ed25519 AAAA... user@host`
    pub public_key: String,
    /// Free-form description shown by the server
    pub label: String,
    pub permission: Permission,
}

impl AccessKey {
    pub fn new(
        public_key: impl Into<String>,
        label: impl Into<String>,
        permission: Permission,
    ) -> Self {
        Self {
            id: None,
            public_key: public_key.into(),
            label: label.into(),
            permission,
        }
    }

    /// Returns a copy carrying the server-assigned id
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}
