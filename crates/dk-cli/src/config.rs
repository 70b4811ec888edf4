// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Configuration file handling
//!
//! Values come from, in increasing priority: the TOML file given with
//! `--config`, environment variables, and command-line flags. Clap merges the
//! last two before we get here.

use anyhow::{Context, bail};
use dk_rest_client::{ClientConfig, TlsPolicy};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Contents of the TOML configuration file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub tls: Option<FileTlsConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileTlsConfig {
    /// PEM files with additional trusted roots
    #[serde(default)]
    pub ca_certificates: Vec<PathBuf>,
    /// PEM file holding the client certificate and its private key
    pub client_identity: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub builtin_roots: bool,
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

fn default_true() -> bool {
    true
}

impl FileConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }
}

impl FileTlsConfig {
    /// Read the referenced PEM files. Relative paths are taken relative to `base_dir`.
    fn into_policy(self, base_dir: &Path) -> anyhow::Result<TlsPolicy> {
        let read = |path: &Path| {
            let path = base_dir.join(path);
            std::fs::read(&path).with_context(|| format!("reading {}", path.display()))
        };

        let root_certificates_pem = self
            .ca_certificates
            .iter()
            .map(|p| read(p.as_path()))
            .collect::<anyhow::Result<Vec<_>>>()?;
        let client_identity_pem = self.client_identity.as_deref().map(read).transpose()?;

        Ok(TlsPolicy {
            root_certificates_pem,
            client_identity_pem,
            use_builtin_roots: self.builtin_roots,
            accept_invalid_certs: self.accept_invalid_certs,
        })
    }
}

/// Merge the file with flag/environment overrides into a client configuration
pub fn resolve(
    file: Option<(FileConfig, PathBuf)>,
    base_url: Option<String>,
    token: Option<String>,
) -> anyhow::Result<ClientConfig> {
    let (file, base_dir) = match file {
        Some((config, path)) => {
            let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
            (config, dir)
        }
        None => (FileConfig::default(), PathBuf::new()),
    };

    let Some(base_url) = base_url.or(file.base_url) else {
        bail!("no server configured; pass --base-url, set DK_BASE_URL, or add base-url to the config file");
    };
    let Some(token) = token.or(file.token) else {
        bail!("no token configured; pass --token, set DK_TOKEN, or add token to the config file");
    };
    let tls = file.tls.map(|tls| tls.into_policy(&base_dir)).transpose()?;

    Ok(ClientConfig {
        token,
        base_url,
        tls,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dk.toml");
        fs::write(
            &path,
            r#"
base-url = "https://git.example.com"
token = "from-file"

[tls]
ca-certificates = ["ca.pem"]
client-identity = "client.pem"
accept-invalid-certs = true
"#,
        )
        .unwrap();

        let config = FileConfig::load(&path).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("https://git.example.com"));
        let tls = config.tls.unwrap();
        assert_eq!(tls.ca_certificates, vec![PathBuf::from("ca.pem")]);
        assert!(tls.builtin_roots);
        assert!(tls.accept_invalid_certs);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dk.toml");
        fs::write(&path, "base_url = \"https://git.example.com\"\n").unwrap();

        assert!(FileConfig::load(&path).is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let file = FileConfig {
            base_url: Some("https://file.example.com".to_string()),
            token: Some("from-file".to_string()),
            tls: None,
        };

        let config = resolve(
            Some((file, PathBuf::from("dk.toml"))),
            Some("https://flag.example.com".to_string()),
            None,
        )
        .unwrap();

        assert_eq!(config.base_url, "https://flag.example.com");
        assert_eq!(config.token, "from-file");
        assert!(config.tls.is_none());
    }

    #[test]
    fn test_missing_values_are_reported() {
        let err = resolve(None, None, Some("t".to_string())).unwrap_err();
        assert!(err.to_string().contains("--base-url"));

        let err = resolve(None, Some("https://git.example.com".to_string()), None).unwrap_err();
        assert!(err.to_string().contains("--token"));
    }

    #[test]
    fn test_tls_files_are_read_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ca.pem"), b"ca-bytes").unwrap();
        fs::write(dir.path().join("client.pem"), b"identity-bytes").unwrap();

        let file = FileConfig {
            base_url: Some("https://git.example.com".to_string()),
            token: Some("t".to_string()),
            tls: Some(FileTlsConfig {
                ca_certificates: vec![PathBuf::from("ca.pem")],
                client_identity: Some(PathBuf::from("client.pem")),
                builtin_roots: false,
                accept_invalid_certs: false,
            }),
        };

        let config = resolve(Some((file, dir.path().join("dk.toml"))), None, None).unwrap();
        let tls = config.tls.unwrap();
        assert_eq!(tls.root_certificates_pem, vec![b"ca-bytes".to_vec()]);
        assert_eq!(tls.client_identity_pem, Some(b"identity-bytes".to_vec()));
        assert!(!tls.use_builtin_roots);
    }

    #[test]
    fn test_missing_pem_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = FileConfig {
            base_url: Some("https://git.example.com".to_string()),
            token: Some("t".to_string()),
            tls: Some(FileTlsConfig {
                ca_certificates: vec![PathBuf::from("missing.pem")],
                client_identity: None,
                builtin_roots: true,
                accept_invalid_certs: false,
            }),
        };

        let err = resolve(Some((file, dir.path().join("dk.toml"))), None, None).unwrap_err();
        assert!(err.to_string().contains("missing.pem"));
    }
}
