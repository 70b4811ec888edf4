// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Bearer token authentication

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::error::{RestClientError, RestClientResult};

/// Build the default headers that authenticate every request.
///
/// The header is marked sensitive so it is never printed by the HTTP stack.
pub fn bearer_headers(token: &str) -> RestClientResult<HeaderMap> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
        .map_err(|_| RestClientError::InvalidToken)?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header() {
        let headers = bearer_headers("secret-token").unwrap();
        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer secret-token");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_token_with_newline_is_rejected() {
        assert!(matches!(
            bearer_headers("abc\r\nX-Injected: 1"),
            Err(RestClientError::InvalidToken)
        ));
    }
}
