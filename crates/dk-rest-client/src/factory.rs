// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Construction of configured clients
//!
//! Pure wiring: nothing here touches the network.

use std::sync::Arc;

use dk_client_api::KeyClientApi;
use reqwest::Client as HttpClient;
use url::Url;

use crate::auth::bearer_headers;
use crate::client::RestKeyClient;
use crate::config::ClientConfig;
use crate::error::{RestClientError, RestClientResult};

const USER_AGENT: &str = concat!("dk-rest-client/", env!("CARGO_PKG_VERSION"));

/// Build a REST client from connection settings.
pub fn new_client(config: ClientConfig) -> RestClientResult<RestKeyClient> {
    let base_url = parse_base_url(&config.base_url)?;

    let mut builder = HttpClient::builder()
        .user_agent(USER_AGENT)
        .default_headers(bearer_headers(&config.token)?);
    if let Some(tls) = &config.tls {
        builder = tls.apply(builder)?;
    }
    let http_client = builder.build().map_err(|e| RestClientError::Tls(e.to_string()))?;

    tracing::debug!(base_url = %base_url, "Configured access key client");

    Ok(RestKeyClient::from_parts(http_client, base_url))
}

/// Build a client and expose only the [`KeyClientApi`] capability.
pub fn new_repository_client(config: ClientConfig) -> RestClientResult<Arc<dyn KeyClientApi>> {
    Ok(Arc::new(new_client(config)?))
}

fn parse_base_url(base_url: &str) -> RestClientResult<Url> {
    let url = Url::parse(base_url)?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(RestClientError::InvalidBaseUrl(base_url.to_string()));
    }
    Ok(url)
}
