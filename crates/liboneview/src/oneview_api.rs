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

use reqwest::StatusCode;

use crate::oneview_model::*;
use crate::{OneView, OneViewApiClient, OneViewApiError};

// Macro for GET operations that return a single resource by id
macro_rules! get_by_id {
    ($self:expr, $base_url:literal, $return_type:ty, $id:expr) => {{
        let url = format!("{}/{}", $base_url, $id);
        let (_status, item): (StatusCode, $return_type) = $self.client.get(&url, &[]).await?;
        Ok(item)
    }};
}

#[derive(Clone, Debug)]
pub struct OneViewApi {
    pub client: OneViewApiClient,
}

impl OneViewApi {
    pub fn new(client: OneViewApiClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl OneView for OneViewApi {
    async fn find_index_resources(&self, uuid: &str) -> Result<Vec<IndexResource>, OneViewApiError> {
        let filter = format!("uuid={uuid}");
        self.client
            .get_all("rest/index/resources", &[("filter", filter.as_str())])
            .await
    }

    async fn get_server_hardware(&self, id: &str) -> Result<ServerHardware, OneViewApiError> {
        get_by_id!(self, "rest/server-hardware", ServerHardware, id)
    }

    async fn get_server_hardware_list(&self) -> Result<Vec<ServerHardware>, OneViewApiError> {
        self.client.get_all("rest/server-hardware", &[]).await
    }

    async fn get_server_profile(&self, id: &str) -> Result<ServerProfile, OneViewApiError> {
        get_by_id!(self, "rest/server-profiles", ServerProfile, id)
    }

    async fn get_server_profile_templates(
        &self,
        filters: &[String],
    ) -> Result<Vec<ServerProfileTemplate>, OneViewApiError> {
        let query = filters
            .iter()
            .map(|f| ("filter", f.as_str()))
            .collect::<Vec<_>>();
        self.client
            .get_all("rest/server-profile-templates", &query)
            .await
    }
}
