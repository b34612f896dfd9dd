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

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use liboneview::oneview_model::{
    IndexResource, SERVER_HARDWARE_CATEGORY, ServerHardware, ServerProfile,
    ServerProfileTemplate,
};
use liboneview::{OneView, OneViewApiError};
use oneview_redfish::{AppState, router};
use tower::{Layer, ServiceExt};
use tower_http::normalize_path::NormalizePathLayer;

pub const BLOCK_ID: &str = "30303437-3034-4D32-3230-313133364752";
pub const SERIAL: &str = "2M201136GR";
pub const PROFILE_ID: &str = "b425802b-a6a5-4941-8885-aab68dfa2ee2";

/// How the mocked OneView answers every call.
#[derive(Clone, Copy, Debug)]
pub enum Reply {
    Fixture,
    NotFound,
    Failure,
}

pub struct MockOneView {
    index_reply: Reply,
    hardware_reply: Reply,
    templates_reply: Reply,
    profile_reply: Reply,
    index_category: Option<&'static str>,
    pub template_filters: Mutex<Vec<String>>,
}

impl MockOneView {
    pub fn new(reply: Reply) -> Self {
        Self {
            index_reply: reply,
            hardware_reply: reply,
            templates_reply: reply,
            profile_reply: reply,
            index_category: Some(SERVER_HARDWARE_CATEGORY),
            template_filters: Mutex::new(Vec::new()),
        }
    }

    /// Index search answers with a resource of `category`, none when unset.
    pub fn with_index_category(mut self, category: Option<&'static str>) -> Self {
        self.index_category = category;
        self
    }

    pub fn with_hardware_reply(mut self, reply: Reply) -> Self {
        self.hardware_reply = reply;
        self
    }

    pub fn with_templates_reply(mut self, reply: Reply) -> Self {
        self.templates_reply = reply;
        self
    }
}

fn reply<T: serde::de::DeserializeOwned>(
    reply: Reply,
    url: &str,
    fixture: &str,
) -> Result<T, OneViewApiError> {
    match reply {
        Reply::Fixture => Ok(serde_json::from_value(oneview_fixture(fixture)).unwrap()),
        Reply::NotFound => Err(OneViewApiError::ResourceNotFound {
            url: url.to_string(),
            message: format!("Resource not found at {url}"),
        }),
        Reply::Failure => Err(OneViewApiError::JsonDeserializeError {
            url: url.to_string(),
            body: "{".to_string(),
            source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        }),
    }
}

#[async_trait::async_trait]
impl OneView for MockOneView {
    async fn find_index_resources(&self, uuid: &str) -> Result<Vec<IndexResource>, OneViewApiError> {
        let url = format!("/rest/index/resources?filter=uuid={uuid}");
        reply::<serde_json::Value>(self.index_reply, &url, "ServerHardware")?;
        Ok(self
            .index_category
            .map(|category| IndexResource {
                category: category.to_string(),
                uri: Some(format!("/rest/{category}/{uuid}")),
                name: None,
            })
            .into_iter()
            .collect())
    }

    async fn get_server_hardware(&self, id: &str) -> Result<ServerHardware, OneViewApiError> {
        reply(
            self.hardware_reply,
            &format!("/rest/server-hardware/{id}"),
            "ServerHardware",
        )
    }

    async fn get_server_hardware_list(&self) -> Result<Vec<ServerHardware>, OneViewApiError> {
        let server_hardware = reply(self.hardware_reply, "/rest/server-hardware", "ServerHardware")?;
        Ok(vec![server_hardware])
    }

    async fn get_server_profile(&self, id: &str) -> Result<ServerProfile, OneViewApiError> {
        reply(
            self.profile_reply,
            &format!("/rest/server-profiles/{id}"),
            "ServerProfile",
        )
    }

    async fn get_server_profile_templates(
        &self,
        filters: &[String],
    ) -> Result<Vec<ServerProfileTemplate>, OneViewApiError> {
        self.template_filters
            .lock()
            .unwrap()
            .extend(filters.iter().cloned());
        reply(
            self.templates_reply,
            "/rest/server-profile-templates",
            "ServerProfileTemplates",
        )
    }
}

fn mockup(dir: &str, name: &str) -> serde_json::Value {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "mockups", dir, &format!("{name}.json")]
        .iter()
        .collect();
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("cannot read {}: {err}", path.display()));
    serde_json::from_str(&content).unwrap()
}

pub fn oneview_fixture(name: &str) -> serde_json::Value {
    mockup("oneview", name)
}

pub fn redfish_fixture(name: &str) -> serde_json::Value {
    mockup("redfish", name)
}

pub fn error_fixture(name: &str) -> serde_json::Value {
    mockup("errors", name)
}

pub fn test_app(oneview: Arc<MockOneView>) -> Router {
    router(AppState { oneview })
}

pub async fn get(oneview: Arc<MockOneView>, uri: &str) -> Response {
    let app = NormalizePathLayer::trim_trailing_slash().layer(test_app(oneview));
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn json_body(response: Response) -> serde_json::Value {
    let body_bytes = response
        .into_body()
        .collect()
        .await
        .expect("Empty response body?")
        .to_bytes();
    serde_json::from_slice(&body_bytes).unwrap()
}

pub fn assert_json_response(response: &Response, status: StatusCode) {
    assert_eq!(response.status(), status);
    assert_eq!(
        response.headers()[axum::http::header::CONTENT_TYPE],
        oneview_redfish::json::APPLICATION_JSON
    );
}
