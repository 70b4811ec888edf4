// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for the REST transport

use dk_client_api::KeyClientError;
use dk_domain_types::InvalidRepositoryRef;
use reqwest::StatusCode;
use thiserror::Error;

/// Result type for REST client operations
pub type RestClientResult<T> = Result<T, RestClientError>;

/// REST client error types
#[derive(Debug, Error)]
pub enum RestClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parsing failed: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Token is not a valid header value")]
    InvalidToken,

    #[error("TLS configuration failed: {0}")]
    Tls(String),

    #[error("Server returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("Repository not found")]
    NotFound,

    #[error("Server returned unknown permission '{0}'")]
    UnknownPermission(String),

    #[error("Invalid repository: {0}")]
    InvalidRepository(#[from] InvalidRepositoryRef),
}

impl From<RestClientError> for KeyClientError {
    fn from(err: RestClientError) -> Self {
        match err {
            RestClientError::NotFound => KeyClientError::NotFound,
            RestClientError::InvalidRepository(invalid) => {
                KeyClientError::InvalidRepository(invalid)
            }
            other => KeyClientError::request_failed(other),
        }
    }
}
