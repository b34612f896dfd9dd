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
use liboneview::oneview_model::{
    SERVER_HARDWARE_CATEGORY, ServerHardware, ServerProfileTemplate, id_from_uri,
};
use serde_json::json;
use tracing::instrument;

use crate::error::ApiError;
use crate::json::{JsonExt, JsonPatch};
use crate::redfish::status::Status;
use crate::{AppState, redfish};

pub fn collection() -> redfish::Collection<'static> {
    redfish::Collection {
        odata_id: Cow::Borrowed("/redfish/v1/CompositionService/ResourceBlocks"),
        odata_type: Cow::Borrowed("#ResourceBlockCollection.ResourceBlockCollection"),
        name: Cow::Borrowed("Resource Block Collection"),
    }
}

pub fn resource<'a>(block_id: &'a str) -> redfish::Resource<'a> {
    let odata_id = format!("{}/{block_id}", collection().odata_id);
    redfish::Resource {
        odata_id: Cow::Owned(odata_id),
        odata_type: Cow::Borrowed("#ResourceBlock.v1_1_0.ResourceBlock"),
        id: Cow::Borrowed(block_id),
        name: Cow::Borrowed("Resource Block"),
    }
}

pub fn add_routes(r: Router<AppState>) -> Router<AppState> {
    const BLOCK_ID: &str = "{block_id}";
    r.route(&collection().odata_id, get(get_resource_block_collection))
        .route(&resource(BLOCK_ID).odata_id, get(get_resource_block))
}

/// Maps the OneView profile lifecycle of a server onto its composition state.
pub fn composition_state(server_hardware: &ServerHardware) -> &'static str {
    match server_hardware.state.as_deref() {
        Some("ProfileApplied") => "Composed",
        Some("NoProfileApplied") => "Unused",
        Some("ApplyingProfile" | "RemovingProfile" | "UpdatingFirmware") => "Composing",
        _ => "Failed",
    }
}

/// Templates able to compose `server_hardware` are its resource zones.
fn zone_templates<'a>(
    server_hardware: &ServerHardware,
    templates: &'a [ServerProfileTemplate],
) -> impl Iterator<Item = &'a ServerProfileTemplate> {
    let enclosure_group = server_hardware.server_group_uri.clone();
    let hardware_type = server_hardware.server_hardware_type_uri.clone();
    templates.iter().filter(move |template| {
        template.enclosure_group_uri == enclosure_group
            && template.server_hardware_type_uri == hardware_type
    })
}

/// OneView filter expressions selecting the templates of `server_hardware`.
pub fn template_filters(server_hardware: &ServerHardware) -> Vec<String> {
    [
        ("enclosureGroupUri", &server_hardware.server_group_uri),
        ("serverHardwareTypeUri", &server_hardware.server_hardware_type_uri),
    ]
    .into_iter()
    .filter_map(|(attr, uri)| uri.as_ref().map(|uri| format!("{attr}='{uri}'")))
    .collect()
}

pub fn server_hardware_resource_block(
    server_hardware: &ServerHardware,
    templates: &[ServerProfileTemplate],
) -> serde_json::Value {
    let block_id = server_hardware.uuid.as_str();
    let systems = server_hardware
        .serial_number
        .iter()
        .map(|serial| redfish::computer_system::resource_block_system(block_id, serial).entity_ref())
        .collect::<Vec<_>>();
    let composed_systems = server_hardware
        .server_profile_uri
        .iter()
        .map(|uri| redfish::computer_system::resource(id_from_uri(uri)).entity_ref())
        .collect::<Vec<_>>();
    let zones = zone_templates(server_hardware, templates)
        .map(|template| redfish::links::resource_zone(template.id()).entity_ref())
        .collect::<Vec<_>>();

    resource(block_id)
        .with_name(&server_hardware.name)
        .json_patch()
        .patch(json!({
            "ResourceBlockType": ["ComputerSystem"],
            "Status": Status::from_oneview(server_hardware.status.as_deref()).into_json(),
            "CompositionStatus": {
                "Reserved": false,
                "CompositionState": composition_state(server_hardware),
                "SharingCapable": false,
            },
            "ComputerSystems": systems,
            "Links": {
                "ComputerSystems": composed_systems,
                "Chassis": [redfish::links::chassis(block_id).entity_ref()],
                "Zones": zones,
            },
        }))
}

#[instrument(skip(state))]
async fn get_resource_block_collection(State(state): State<AppState>) -> Result<Response, ApiError> {
    let members = state
        .oneview
        .get_server_hardware_list()
        .await?
        .iter()
        .map(|server_hardware| resource(&server_hardware.uuid).entity_ref())
        .collect::<Vec<_>>();
    Ok(collection().with_members(&members).into_ok_response())
}

#[instrument(skip(state))]
async fn get_resource_block(
    State(state): State<AppState>,
    Path(block_id): Path<String>,
) -> Result<Response, ApiError> {
    let index = state.oneview.find_index_resources(&block_id).await?;
    let Some(category) = index.first().map(|resource| resource.category.as_str()) else {
        return Err(ApiError::NotFound(format!(
            "Resource block {block_id} not found"
        )));
    };

    match category {
        SERVER_HARDWARE_CATEGORY => {
            let server_hardware = state.oneview.get_server_hardware(&block_id).await?;
            let templates = state
                .oneview
                .get_server_profile_templates(&template_filters(&server_hardware))
                .await?;
            Ok(server_hardware_resource_block(&server_hardware, &templates).into_ok_response())
        }
        other => {
            tracing::debug!(category = other, "No resource block mapping");
            Err(ApiError::NotFound(format!(
                "Resource block {block_id} not found"
            )))
        }
    }
}
