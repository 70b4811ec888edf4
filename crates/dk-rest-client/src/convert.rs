// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Translation between domain types and the wire contract
//!
//! Nothing outside this module knows the wire spelling of a permission or
//! the nesting of the upload payload.

use dk_domain_types::{AccessKey, Permission};
use dk_rest_api_contract::{
    KeyDescription, PERMISSION_REPO_READ, PERMISSION_REPO_WRITE, PublicSshKey, UploadKeyPayload,
};

use crate::error::{RestClientError, RestClientResult};

pub fn permission_to_wire(permission: Permission) -> &'static str {
    match permission {
        Permission::Read => PERMISSION_REPO_READ,
        Permission::Write => PERMISSION_REPO_WRITE,
    }
}

pub fn permission_from_wire(permission: &str) -> RestClientResult<Permission> {
    match permission {
        PERMISSION_REPO_READ => Ok(Permission::Read),
        PERMISSION_REPO_WRITE => Ok(Permission::Write),
        other => Err(RestClientError::UnknownPermission(other.to_string())),
    }
}

pub fn upload_payload(key: &AccessKey) -> UploadKeyPayload {
    UploadKeyPayload {
        key: PublicSshKey {
            text: key.public_key.clone(),
            label: key.label.clone(),
        },
        permission: permission_to_wire(key.permission).to_string(),
    }
}

pub fn access_key_from_description(description: KeyDescription) -> RestClientResult<AccessKey> {
    Ok(AccessKey {
        id: Some(description.key.id),
        public_key: description.key.text,
        label: description.key.label,
        permission: permission_from_wire(&description.permission)?,
    })
}
