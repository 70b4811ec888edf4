// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error taxonomy shared by every [`crate::KeyClientApi`] implementation

use dk_domain_types::InvalidRepositoryRef;
use thiserror::Error;

pub type KeyClientResult<T> = Result<T, KeyClientError>;

/// Boxed cause carried by [`KeyClientError::RequestFailed`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by access key clients
///
/// Every variant is recoverable; nothing is retried on the caller's behalf.
#[derive(Debug, Error)]
pub enum KeyClientError {
    /// The server reports that the repository does not exist
    #[error("not found")]
    NotFound,

    /// Network failure, unexpected status, or an unusable payload
    #[error("request failed: {source}")]
    RequestFailed {
        #[source]
        source: BoxError,
    },

    /// The repository identifiers cannot address a repository
    #[error("invalid repository: {0}")]
    InvalidRepository(#[from] InvalidRepositoryRef),

    /// The operation is part of the contract but has no implementation
    #[error("operation not supported: {0}")]
    Unsupported(&'static str),
}

impl KeyClientError {
    pub fn request_failed(source: impl Into<BoxError>) -> Self {
        KeyClientError::RequestFailed {
            source: source.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, KeyClientError::NotFound)
    }

    pub fn is_request_failed(&self) -> bool {
        matches!(self, KeyClientError::RequestFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_request_failed_keeps_source() {
        let err = KeyClientError::request_failed("connection reset");
        assert!(err.is_request_failed());
        assert!(!err.is_not_found());
        assert_eq!(err.source().unwrap().to_string(), "connection reset");
        assert_eq!(err.to_string(), "request failed: connection reset");
    }

    #[test]
    fn test_invalid_repository_from() {
        let err: KeyClientError = InvalidRepositoryRef::EmptyRepoName.into();
        assert!(matches!(
            err,
            KeyClientError::InvalidRepository(InvalidRepositoryRef::EmptyRepoName)
        ));
    }
}
