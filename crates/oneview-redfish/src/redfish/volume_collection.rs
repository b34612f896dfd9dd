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

use std::borrow::Cow;

use axum::Router;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::get;
use liboneview::oneview_model::{ServerProfile, id_from_uri};
use serde_json::json;
use tracing::instrument;

use crate::error::ApiError;
use crate::json::JsonExt;
use crate::{AppState, redfish};

const NAME: &str = "Storage Volume Collection";

pub fn collection(system_id: &str) -> redfish::Collection<'static> {
    redfish::Collection {
        odata_id: Cow::Owned(format!("/redfish/v1/Systems/{system_id}/Storage/1/Volumes")),
        odata_type: Cow::Borrowed("#VolumeCollection.VolumeCollection"),
        name: Cow::Borrowed(NAME),
    }
}

pub fn add_routes(r: Router<AppState>) -> Router<AppState> {
    const SYSTEM_ID: &str = "{system_id}";
    r.route(&collection(SYSTEM_ID).odata_id, get(get_volume_collection))
}

/// Local JBODs first, then attached SAN volumes.
pub fn volume_ids(server_profile: &ServerProfile) -> Vec<String> {
    let jbods = server_profile
        .local_storage
        .iter()
        .flat_map(|storage| &storage.sas_logical_jbods)
        .map(|jbod| jbod.id.to_string());
    let san_volumes = server_profile
        .san_storage
        .iter()
        .flat_map(|storage| &storage.volume_attachments)
        .filter_map(|attachment| attachment.volume_uri.as_deref())
        .map(|uri| id_from_uri(uri).to_string());
    jbods.chain(san_volumes).collect()
}

pub fn volume_collection(server_profile: &ServerProfile) -> serde_json::Value {
    let collection = collection(server_profile.id());
    let members = volume_ids(server_profile)
        .iter()
        .map(|volume_id| json!({"@odata.id": format!("{}/{volume_id}", collection.odata_id)}))
        .collect::<Vec<_>>();
    collection
        .with_members(&members)
        .patch(json!({"Description": NAME}))
}

#[instrument(skip(state))]
async fn get_volume_collection(
    State(state): State<AppState>,
    Path(system_id): Path<String>,
) -> Result<Response, ApiError> {
    let server_profile = state.oneview.get_server_profile(&system_id).await?;
    Ok(volume_collection(&server_profile).into_ok_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_san_volumes_are_skipped() {
        let server_profile: ServerProfile = serde_json::from_value(json!({
            "uri": "/rest/server-profiles/p1",
            "localStorage": {"sasLogicalJBODs": [{"id": 7}]},
            "sanStorage": {"volumeAttachments": [
                {"id": 1},
                {"id": 2, "volumeUri": "/rest/storage-volumes/V2"}
            ]}
        }))
        .unwrap();
        assert_eq!(volume_ids(&server_profile), vec!["7", "V2"]);
    }

    #[test]
    fn profile_without_storage_has_no_members() {
        let server_profile: ServerProfile =
            serde_json::from_value(json!({"uri": "/rest/server-profiles/p1"})).unwrap();
        let volumes = volume_collection(&server_profile);
        assert_eq!(volumes["Members@odata.count"], json!(0));
        assert_eq!(volumes["Description"], NAME);
        assert_eq!(
            volumes["@odata.id"],
            "/redfish/v1/Systems/p1/Storage/1/Volumes"
        );
    }
}
