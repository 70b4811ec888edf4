// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Access key REST client implementation

use dk_domain_types::{AccessKey, RepositoryRef};
use dk_rest_api_contract::{ErrorResponse, KeyDescription};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as HttpClient, Response, StatusCode};
use url::Url;

use crate::convert;
use crate::error::{RestClientError, RestClientResult};

/// Upper bound on the part of a rejected request's body that is read and kept
pub const MAX_ERROR_BODY_LEN: usize = 4 * 1024;

/// REST client for the SSH access key endpoint of a Git server
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RestKeyClient {
    http_client: HttpClient,
    base_url: Url,
}

impl RestKeyClient {
    pub(crate) fn from_parts(http_client: HttpClient, base_url: Url) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Grant an SSH key access to a repository.
    ///
    /// Dropping the returned future aborts the in-flight request.
    pub async fn create_access_key(
        &self,
        repo: &RepositoryRef,
        key: &AccessKey,
    ) -> RestClientResult<AccessKey> {
        repo.validate()?;

        let body = serde_json::to_vec(&convert::upload_payload(key))?;
        let url = self.access_keys_url(repo)?;

        tracing::debug!(
            project = %repo.project_key,
            repo = %repo.repo_name,
            permission = %key.permission,
            "Creating access key"
        );

        let response = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let description: KeyDescription = self.handle_response(repo, response).await?;
        let created = convert::access_key_from_description(description)?;

        tracing::debug!(
            project = %repo.project_key,
            repo = %repo.repo_name,
            key_id = ?created.id,
            "Access key created"
        );

        Ok(created)
    }

    /// URL of the access key collection of `repo`.
    ///
    /// Identifiers are appended as single, percent-encoded path segments so
    /// they cannot add or remove path components.
    pub fn access_keys_url(&self, repo: &RepositoryRef) -> RestClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RestClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend([
                "rest",
                "keys",
                "1.0",
                "projects",
                repo.project_key.as_str(),
                "repos",
                repo.repo_name.as_str(),
                "ssh",
            ]);
        Ok(url)
    }

    async fn handle_response(
        &self,
        repo: &RepositoryRef,
        response: Response,
    ) -> RestClientResult<KeyDescription> {
        let status = response.status();

        if status.is_success() {
            let bytes = response.bytes().await?;
            return serde_json::from_slice(&bytes).map_err(RestClientError::from);
        }

        let text = read_error_body(response).await;
        let message = serde_json::from_str::<ErrorResponse>(&text)
            .ok()
            .and_then(|e| e.summary())
            .unwrap_or(text);

        tracing::warn!(
            project = %repo.project_key,
            repo = %repo.repo_name,
            status = status.as_u16(),
            %message,
            "Access key request rejected"
        );

        if status == StatusCode::NOT_FOUND {
            Err(RestClientError::NotFound)
        } else {
            Err(RestClientError::Status { status, message })
        }
    }
}

/// Read at most [`MAX_ERROR_BODY_LEN`] bytes of an error body.
///
/// The status alone decides the error kind, so a body that fails midway keeps
/// whatever arrived before the failure.
async fn read_error_body(mut response: Response) -> String {
    let mut body = Vec::new();
    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                body.extend_from_slice(&chunk);
                if body.len() > MAX_ERROR_BODY_LEN {
                    break;
                }
            }
            Ok(None) => break,
            Err(err) => {
                tracing::debug!(error = %err, "Error body could not be read");
                break;
            }
        }
    }
    truncate_body(body)
}

fn truncate_body(mut body: Vec<u8>) -> String {
    let truncated = body.len() > MAX_ERROR_BODY_LEN;
    body.truncate(MAX_ERROR_BODY_LEN);
    let mut text = String::from_utf8_lossy(&body).into_owned();
    if truncated {
        text.push_str("...");
    }
    text
}
