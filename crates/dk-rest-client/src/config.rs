// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Connection settings consumed by the client factory

use reqwest::{Certificate, ClientBuilder, Identity};

use crate::error::{RestClientError, RestClientResult};

/// Connection parameters for a Git server
///
/// Used once by [`crate::new_client`]; the resulting client never looks at it
/// again.
#[derive(Clone, Default)]
pub struct ClientConfig {
    /// Personal access token sent as a bearer credential
    pub token: String,
    /// Server root, e.g. `https://git.example.com` or `https://example.com/bitbucket`
    pub base_url: String,
    /// TLS trust and identity; `None` uses the HTTP stack's defaults
    pub tls: Option<TlsPolicy>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("tls", &self.tls)
            .finish()
    }
}

/// Caller supplied TLS policy, applied to the HTTP client as given
#[derive(Clone)]
pub struct TlsPolicy {
    /// Extra trusted root certificates, one PEM document each
    pub root_certificates_pem: Vec<Vec<u8>>,
    /// Client certificate and private key in a single PEM document
    pub client_identity_pem: Option<Vec<u8>>,
    /// Trust the built-in root store in addition to `root_certificates_pem`
    pub use_builtin_roots: bool,
    /// Skip server certificate verification
    pub accept_invalid_certs: bool,
}

impl Default for TlsPolicy {
    fn default() -> Self {
        Self {
            root_certificates_pem: Vec::new(),
            client_identity_pem: None,
            use_builtin_roots: true,
            accept_invalid_certs: false,
        }
    }
}

impl std::fmt::Debug for TlsPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TlsPolicy")
            .field("root_certificates", &self.root_certificates_pem.len())
            .field("client_identity", &self.client_identity_pem.is_some())
            .field("use_builtin_roots", &self.use_builtin_roots)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

impl TlsPolicy {
    pub(crate) fn apply(&self, mut builder: ClientBuilder) -> RestClientResult<ClientBuilder> {
        builder = builder
            .tls_built_in_root_certs(self.use_builtin_roots)
            .danger_accept_invalid_certs(self.accept_invalid_certs);

        for pem in &self.root_certificates_pem {
            let certificate =
                Certificate::from_pem(pem).map_err(|e| RestClientError::Tls(e.to_string()))?;
            builder = builder.add_root_certificate(certificate);
        }

        if let Some(pem) = &self.client_identity_pem {
            let identity =
                Identity::from_pem(pem).map_err(|e| RestClientError::Tls(e.to_string()))?;
            builder = builder.identity(identity);
        }

        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig {
            token: "super-secret".to_string(),
            base_url: "https://git.example.com".to_string(),
            tls: Some(TlsPolicy {
                client_identity_pem: Some(b"private".to_vec()),
                ..Default::default()
            }),
        };

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(!rendered.contains("private"));
        assert!(rendered.contains("git.example.com"));
    }

    #[test]
    fn test_default_policy_trusts_builtin_roots() {
        let policy = TlsPolicy::default();
        assert!(policy.use_builtin_roots);
        assert!(!policy.accept_invalid_certs);
        assert!(policy.root_certificates_pem.is_empty());
    }
}
