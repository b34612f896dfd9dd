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

//! Resources referenced by links but served by other Redfish services.

use std::borrow::Cow;

use crate::redfish;

pub fn chassis(chassis_id: &str) -> redfish::Resource<'_> {
    redfish::Resource {
        odata_id: Cow::Owned(format!("/redfish/v1/Chassis/{chassis_id}")),
        odata_type: Cow::Borrowed("#Chassis.v1_7_0.Chassis"),
        id: Cow::Borrowed(chassis_id),
        name: Cow::Borrowed("Chassis"),
    }
}

pub fn manager(manager_id: &str) -> redfish::Resource<'_> {
    redfish::Resource {
        odata_id: Cow::Owned(format!("/redfish/v1/Managers/{manager_id}")),
        odata_type: Cow::Borrowed("#Manager.v1_4_0.Manager"),
        id: Cow::Borrowed(manager_id),
        name: Cow::Borrowed("Manager"),
    }
}

pub fn resource_zone(zone_id: &str) -> redfish::Resource<'_> {
    redfish::Resource {
        odata_id: Cow::Owned(format!(
            "/redfish/v1/CompositionService/ResourceZones/{zone_id}"
        )),
        odata_type: Cow::Borrowed("#Zone.v1_1_0.Zone"),
        id: Cow::Borrowed(zone_id),
        name: Cow::Borrowed("Resource Zone"),
    }
}
