// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Wire contract for the Git server SSH access key REST API
//!
//! These shapes mirror the server's JSON schema for
//! `/rest/keys/1.0/projects/{projectKey}/repos/{repoName}/ssh`. They live only
//! for one request/response cycle; clients translate them to the domain types
//! in `dk-domain-types` before handing results to callers.

pub mod error;
pub mod types;

pub use error::*;
pub use types::*;
