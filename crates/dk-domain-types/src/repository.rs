// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Repository identity within a Git server's project namespace

use thiserror::Error;

/// Identifies a repository by project key and repository name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryRef {
    pub project_key: String,
    pub repo_name: String,
}

/// Reasons a [`RepositoryRef`] cannot address a repository
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRepositoryRef {
    #[error("project key must not be empty")]
    EmptyProjectKey,

    #[error("repository name must not be empty")]
    EmptyRepoName,

    #[error("'{0}' is not a usable path segment")]
    DotSegment(String),
}

impl RepositoryRef {
    pub fn new(project_key: impl Into<String>, repo_name: impl Into<String>) -> Self {
        Self {
            project_key: project_key.into(),
            repo_name: repo_name.into(),
        }
    }

    /// Check that both identifiers can be used as path segments.
    ///
    /// `.` and `..` are rejected because URL normalisation would collapse
    /// them and the request would land on a different resource.
    pub fn validate(&self) -> Result<(), InvalidRepositoryRef> {
        if self.project_key.is_empty() {
            return Err(InvalidRepositoryRef::EmptyProjectKey);
        }
        if self.repo_name.is_empty() {
            return Err(InvalidRepositoryRef::EmptyRepoName);
        }
        for segment in [&self.project_key, &self.repo_name] {
            if segment == "." || segment == ".." {
                return Err(InvalidRepositoryRef::DotSegment(segment.clone()));
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.project_key, self.repo_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_regular_identifiers() {
        assert!(RepositoryRef::new("PRJ", "service").validate().is_ok());
        assert!(RepositoryRef::new("My Proj", "repo/1").validate().is_ok());
        assert!(RepositoryRef::new("PRJ", "../other").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_identifiers() {
        assert_eq!(
            RepositoryRef::new("", "service").validate(),
            Err(InvalidRepositoryRef::EmptyProjectKey)
        );
        assert_eq!(
            RepositoryRef::new("PRJ", "").validate(),
            Err(InvalidRepositoryRef::EmptyRepoName)
        );
    }

    #[test]
    fn test_validate_rejects_dot_segments() {
        assert_eq!(
            RepositoryRef::new("PRJ", "..").validate(),
            Err(InvalidRepositoryRef::DotSegment("..".to_string()))
        );
        assert_eq!(
            RepositoryRef::new(".", "service").validate(),
            Err(InvalidRepositoryRef::DotSegment(".".to_string()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(RepositoryRef::new("PRJ", "service").to_string(), "PRJ/service");
    }
}
