/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

use serde::{Deserialize, Serialize};

// Use Option<type> to avoid breaking serde deserialize ops on receiving json responses with
// some struct fields missing.
// Only identifying fields (uuid, uri) are safe to keep non-optional.

pub const SERVER_HARDWARE_CATEGORY: &str = "server-hardware";

/// Returns the trailing id of a OneView resource uri, e.g.
/// `/rest/server-profiles/abc` -> `abc`.
pub fn id_from_uri(uri: &str) -> &str {
    uri.trim_end_matches('/').rsplit('/').next().unwrap_or(uri)
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceList<T> {
    #[serde(default = "Vec::new")]
    pub members: Vec<T>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub next_page_uri: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub recommended_actions: Option<Vec<String>>,
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginRequest {
    pub user_name: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_login_domain: Option<String>,
}

// keep the password out of debug logs
impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("user_name", &self.user_name)
            .field("auth_login_domain", &self.auth_login_domain)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct LoginSession {
    #[serde(rename = "sessionID")]
    pub session_id: String,
}

/// Entry of the OneView index search (`/rest/index/resources`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexResource {
    pub category: String,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerHardware {
    pub uuid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub virtual_serial_number: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub part_number: Option<String>,
    /// On, Off, PoweringOn, PoweringOff, Resetting, Unknown
    #[serde(default)]
    pub power_state: Option<String>,
    /// OK, Warning, Critical, Disabled, Unknown
    #[serde(default)]
    pub status: Option<String>,
    /// Profile lifecycle, e.g. ProfileApplied or NoProfileApplied.
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub server_profile_uri: Option<String>,
    #[serde(default)]
    pub server_hardware_type_uri: Option<String>,
    /// Enclosure group the hardware belongs to.
    #[serde(default)]
    pub server_group_uri: Option<String>,
    #[serde(default)]
    pub processor_count: Option<u32>,
    #[serde(default)]
    pub processor_type: Option<String>,
    #[serde(default)]
    pub memory_mb: Option<u64>,
    #[serde(default)]
    pub rom_version: Option<String>,
}

impl ServerHardware {
    /// Matches `serial` against the physical and the virtual serial number.
    pub fn has_serial(&self, serial: &str) -> bool {
        [&self.serial_number, &self.virtual_serial_number]
            .into_iter()
            .flatten()
            .any(|s| !s.is_empty() && s == serial)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerProfile {
    pub uri: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub server_hardware_uri: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub local_storage: Option<LocalStorage>,
    #[serde(default)]
    pub san_storage: Option<SanStorage>,
}

impl ServerProfile {
    pub fn id(&self) -> &str {
        id_from_uri(&self.uri)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalStorage {
    #[serde(default, rename = "sasLogicalJBODs")]
    pub sas_logical_jbods: Vec<SasLogicalJbod>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SasLogicalJbod {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub device_slot: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanStorage {
    #[serde(default)]
    pub volume_attachments: Vec<VolumeAttachment>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeAttachment {
    #[serde(default)]
    pub id: Option<u64>,
    /// Unset while the volume is still being created.
    #[serde(default)]
    pub volume_uri: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerProfileTemplate {
    pub uri: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub server_hardware_type_uri: Option<String>,
    #[serde(default)]
    pub enclosure_group_uri: Option<String>,
}

impl ServerProfileTemplate {
    pub fn id(&self) -> &str {
        id_from_uri(&self.uri)
    }
}
