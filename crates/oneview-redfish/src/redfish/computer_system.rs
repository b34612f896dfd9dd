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
use liboneview::oneview_model::ServerHardware;
use serde_json::json;
use tracing::instrument;

use crate::error::ApiError;
use crate::json::{JsonExt, JsonPatch};
use crate::redfish::status::Status;
use crate::{AppState, redfish};

const MANUFACTURER: &str = "HPE";

/// Composed system, identified by the OneView server profile.
pub fn resource<'a>(system_id: &'a str) -> redfish::Resource<'a> {
    let odata_id = format!("/redfish/v1/Systems/{system_id}");
    redfish::Resource {
        odata_id: Cow::Owned(odata_id),
        odata_type: Cow::Borrowed("#ComputerSystem.v1_4_0.ComputerSystem"),
        id: Cow::Borrowed(system_id),
        name: Cow::Borrowed("System"),
    }
}

/// Physical system contained in a resource block, identified by serial number.
pub fn resource_block_system<'a>(block_id: &str, serial: &'a str) -> redfish::Resource<'a> {
    let odata_id = format!(
        "{}/Systems/{serial}",
        redfish::resource_block::resource(block_id).odata_id
    );
    redfish::Resource {
        odata_id: Cow::Owned(odata_id),
        odata_type: Cow::Borrowed("#ComputerSystem.v1_4_0.ComputerSystem"),
        id: Cow::Borrowed(serial),
        name: Cow::Borrowed("System"),
    }
}

pub fn add_routes(r: Router<AppState>) -> Router<AppState> {
    const BLOCK_ID: &str = "{block_id}";
    const SERIAL: &str = "{serial}";
    r.route(
        &resource_block_system(BLOCK_ID, SERIAL).odata_id,
        get(get_resource_block_system),
    )
}

pub fn resource_block_computer_system(server_hardware: &ServerHardware, serial: &str) -> serde_json::Value {
    let block_id = server_hardware.uuid.as_str();
    resource_block_system(block_id, serial)
        .with_name(&server_hardware.name)
        .json_patch()
        .patch(json!({
            "SystemType": "Physical",
            "Manufacturer": MANUFACTURER,
            "Model": server_hardware.model,
            "SerialNumber": server_hardware.serial_number,
            "PartNumber": server_hardware.part_number,
            "UUID": server_hardware.uuid,
            "PowerState": server_hardware.power_state,
            "BiosVersion": server_hardware.rom_version,
            "Status": Status::from_oneview(server_hardware.status.as_deref()).into_json(),
            "ProcessorSummary": {
                "Count": server_hardware.processor_count,
                "Model": server_hardware.processor_type,
            },
            "MemorySummary": {
                "TotalSystemMemoryGiB": server_hardware.memory_mb.map(|mb| mb / 1024),
            },
            "Links": {
                "ResourceBlocks": [redfish::resource_block::resource(block_id).entity_ref()],
                "Chassis": [redfish::links::chassis(block_id).entity_ref()],
                "ManagedBy": [redfish::links::manager(block_id).entity_ref()],
            },
        }))
}

#[instrument(skip(state))]
async fn get_resource_block_system(
    State(state): State<AppState>,
    Path((block_id, serial)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let server_hardware = state.oneview.get_server_hardware(&block_id).await?;
    if !server_hardware.has_serial(&serial) {
        return Err(ApiError::NotFound(format!(
            "Computer system {serial} not found in resource block {block_id}"
        )));
    }
    Ok(resource_block_computer_system(&server_hardware, &serial).into_ok_response())
}
