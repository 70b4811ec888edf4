// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Domain types for deploy-key management
//!
//! These types describe repositories and the SSH access keys granted on them.
//! They deliberately carry no serialization attributes: every server dialect
//! translates to and from them at its own boundary.

pub mod access_key;
pub mod repository;

pub use access_key::*;
pub use repository::*;
