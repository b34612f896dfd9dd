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

mod oneview_api;
pub mod oneview_model;

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwapOption;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue, USER_AGENT};
use reqwest::{Client as HttpClient, ClientBuilder, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

pub use crate::oneview_api::OneViewApi;
use crate::oneview_model::*;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_API_VERSION: u32 = 600;
const MAX_CONTENT_LENGTH: u64 = 20 * 1024 * 1024;

const AUTH_HEADER: &str = "Auth";
const API_VERSION_HEADER: &str = "X-API-Version";
const LOGIN_SESSIONS: &str = "rest/login-sessions";

/// OneView reports missing resources with this error code, sometimes with a
/// status other than 404.
pub const RESOURCE_NOT_FOUND: &str = "RESOURCE_NOT_FOUND";

#[derive(thiserror::Error, Debug)]
pub enum OneViewApiError {
    #[error("Network error talking to OneView at {url}. {source}")]
    NetworkError { url: String, source: reqwest::Error },

    #[error("{message}")]
    ResourceNotFound { url: String, message: String },

    #[error("HTTP {status_code} at {url}: {response_body}")]
    HTTPErrorCode {
        url: String,
        status_code: StatusCode,
        response_body: String,
    },

    #[error("API error {status}: {message} at {url}")]
    APIError {
        url: String,
        status: StatusCode,
        message: String,
    },

    #[error("API error {status}: no response at {url}")]
    APINoResponseError { url: String, status: StatusCode },

    #[error("Could not deserialize response from {url}. Body: {body}. {source}")]
    JsonDeserializeError {
        url: String,
        body: String,
        source: serde_json::Error,
    },

    #[error("Could not serialize request body for {url}. {source}")]
    JsonSerializeError {
        url: String,
        source: serde_json::Error,
    },

    #[error("Remote returned empty body at {url}, {source}")]
    NoContent { url: String, source: reqwest::Error },

    #[error("Session rejected at {url}")]
    Unauthorized { url: String },

    #[error("Login failure: {0}")]
    LoginFailure(String),

    #[error("Reqwest error: '{0}'")]
    ReqwestError(#[from] reqwest::Error),
}

impl OneViewApiError {
    /// True when OneView told us the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, OneViewApiError::ResourceNotFound { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub auth_login_domain: Option<String>,
    pub api_version: u32,
}

impl Default for Endpoint {
    fn default() -> Self {
        Endpoint {
            host: "".to_string(),
            username: None,
            password: None,
            auth_login_domain: None,
            api_version: DEFAULT_API_VERSION,
        }
    }
}

#[derive(Clone, Debug)]
pub struct OneViewClientPoolBuilder {
    pub timeout: Duration,
    pub accept_invalid_certs: bool,
}

impl OneViewClientPoolBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(&self) -> Result<OneViewClientPool, OneViewApiError> {
        let client = ClientBuilder::new()
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .timeout(self.timeout)
            .build()?;

        Ok(OneViewClientPool { client })
    }
}

#[derive(Debug, Clone)]
pub struct OneViewClientPool {
    client: HttpClient,
}

impl OneViewClientPool {
    pub fn builder(allow_insecure: bool) -> OneViewClientPoolBuilder {
        OneViewClientPoolBuilder {
            timeout: DEFAULT_TIMEOUT,
            // appliances usually ship self-signed certs
            accept_invalid_certs: allow_insecure,
        }
    }

    /// Creates a client for `endpoint` and opens a login session when
    /// credentials are configured.
    pub async fn create_client(&self, endpoint: Endpoint) -> Result<Arc<dyn OneView>, OneViewApiError> {
        let api = OneViewApiClient::new(self.client.clone(), endpoint);
        if api.endpoint.username.is_some() {
            api.login().await?;
        }
        Ok(Arc::new(OneViewApi::new(api)))
    }
}

#[derive(Debug, Clone)]
pub struct OneViewApiClient {
    endpoint: Endpoint,
    client: HttpClient,
    session: Arc<ArcSwapOption<String>>,
}

impl OneViewApiClient {
    pub fn new(client: HttpClient, endpoint: Endpoint) -> Self {
        Self {
            client,
            endpoint,
            session: Arc::new(ArcSwapOption::empty()),
        }
    }

    pub fn session_id(&self) -> Option<String> {
        self.session.load_full().map(|s| s.as_ref().clone())
    }

    pub async fn login(&self) -> Result<(), OneViewApiError> {
        let Some(username) = self.endpoint.username.clone() else {
            return Err(OneViewApiError::LoginFailure(
                "no username configured".to_string(),
            ));
        };
        let request = LoginRequest {
            user_name: username,
            password: self.endpoint.password.clone().unwrap_or_default(),
            auth_login_domain: self.endpoint.auth_login_domain.clone(),
        };
        let (_status, session): (StatusCode, Option<LoginSession>) = self
            ._req(&Method::POST, LOGIN_SESSIONS, &[], &Some(request))
            .await
            .map_err(|e| OneViewApiError::LoginFailure(e.to_string()))?;
        let session = session.ok_or_else(|| {
            OneViewApiError::LoginFailure("empty login-sessions response".to_string())
        })?;
        debug!("Opened OneView session at {}", self.endpoint.host);
        self.session.store(Some(Arc::new(session.session_id)));
        Ok(())
    }

    pub async fn get<T>(&self, api: &str, query: &[(&str, &str)]) -> Result<(StatusCode, T), OneViewApiError>
    where
        T: DeserializeOwned + ::std::fmt::Debug,
    {
        let (status_code, resp_opt) = self.req::<T, String>(Method::GET, api, query, None).await?;
        match resp_opt {
            Some(response_body) => Ok((status_code, response_body)),
            None => Err(OneViewApiError::APINoResponseError {
                url: api.to_string(),
                status: status_code,
            }),
        }
    }

    /// Fetches every page of a OneView list by following `nextPageUri`.
    pub async fn get_all<T>(&self, api: &str, query: &[(&str, &str)]) -> Result<Vec<T>, OneViewApiError>
    where
        T: DeserializeOwned + ::std::fmt::Debug,
    {
        let mut members = Vec::new();
        let (_status, mut page): (StatusCode, ResourceList<T>) = self.get(api, query).await?;
        loop {
            members.append(&mut page.members);
            let Some(next) = page.next_page_uri.take().filter(|uri| !uri.is_empty()) else {
                break;
            };
            // the next page uri already carries the original query
            (_, page) = self.get(next.trim_start_matches('/'), &[]).await?;
        }
        Ok(members)
    }

    async fn req<T, B>(
        &self,
        method: Method,
        api: &str,
        query: &[(&str, &str)],
        body: Option<B>,
    ) -> Result<(StatusCode, Option<T>), OneViewApiError>
    where
        T: DeserializeOwned + ::std::fmt::Debug,
        B: Serialize + ::std::fmt::Debug,
    {
        match self._req(&method, api, query, &body).await {
            Ok(x) => Ok(x),
            Err(OneViewApiError::NetworkError { .. }) => {
                debug!("Network error, retrying");
                self._req(&method, api, query, &body).await
            }
            Err(OneViewApiError::Unauthorized { .. }) if self.endpoint.username.is_some() => {
                debug!("OneView session expired, logging in again");
                self.login().await?;
                self._req(&method, api, query, &body).await
            }
            Err(e) => Err(e),
        }
    }

    async fn _req<T, B>(
        &self,
        method: &Method,
        api: &str,
        query: &[(&str, &str)],
        body: &Option<B>,
    ) -> Result<(StatusCode, Option<T>), OneViewApiError>
    where
        T: DeserializeOwned + ::std::fmt::Debug,
        B: Serialize + ::std::fmt::Debug,
    {
        let url = format!("{}/{}", self.endpoint.host.trim_end_matches('/'), api);

        let body_enc = match body {
            Some(b) => Some(serde_json::to_string(&b).map_err(|e| {
                OneViewApiError::JsonSerializeError {
                    url: url.clone(),
                    source: e,
                }
            })?),
            None => None,
        };

        let mut req_b = self.client.request(method.clone(), &url);
        req_b = req_b.header(ACCEPT, HeaderValue::from_static("application/json"));
        req_b = req_b.header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        req_b = req_b.header(USER_AGENT, HeaderValue::from_static("liboneview/0.1"));
        req_b = req_b.header(API_VERSION_HEADER, self.endpoint.api_version.to_string());
        // login requests carry credentials instead of a session
        if api != LOGIN_SESSIONS
            && let Some(session) = self.session.load_full()
        {
            req_b = req_b.header(AUTH_HEADER, session.as_str());
        }
        if !query.is_empty() {
            req_b = req_b.query(query);
        }
        if let Some(b) = body_enc {
            req_b = req_b.body(b);
        }

        let mut response = req_b.send().await.map_err(|e| OneViewApiError::NetworkError {
            url: url.clone(),
            source: e,
        })?;
        let status_code = response.status();
        // check content length in case of junk responses
        if let Some(len) = response.content_length()
            && len > MAX_CONTENT_LENGTH
        {
            return Err(OneViewApiError::APIError {
                url,
                status: status_code,
                message: format!("Content length {len} exceeds 20MB limit"),
            });
        }
        // chunked responses carry no content length, cap what is read
        let mut response_buffer = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| OneViewApiError::NoContent {
                url: url.clone(),
                source: e,
            })?
        {
            if (response_buffer.len() + chunk.len()) as u64 > MAX_CONTENT_LENGTH {
                return Err(OneViewApiError::APIError {
                    url,
                    status: status_code,
                    message: "Response body exceeds 20MB limit".to_string(),
                });
            }
            response_buffer.extend_from_slice(&chunk);
        }
        let response_body = String::from_utf8_lossy(&response_buffer).to_string();
        debug!("RX {status_code} {}", truncate(&response_body, 1500));

        if !status_code.is_success() {
            return Err(classify_error(url, status_code, response_body));
        }

        let mut res = None;
        if !response_body.is_empty() {
            match serde_json::from_str(&response_body) {
                Ok(v) => res.insert(v),
                Err(e) => {
                    return Err(OneViewApiError::JsonDeserializeError {
                        url,
                        body: response_body,
                        source: e,
                    });
                }
            };
        }
        Ok((status_code, res))
    }
}

fn classify_error(url: String, status_code: StatusCode, response_body: String) -> OneViewApiError {
    if status_code == StatusCode::UNAUTHORIZED {
        return OneViewApiError::Unauthorized { url };
    }
    let error = serde_json::from_str::<ErrorResponse>(&response_body).ok();
    let not_found = status_code == StatusCode::NOT_FOUND
        || error
            .as_ref()
            .and_then(|e| e.error_code.as_deref())
            .is_some_and(|code| code == RESOURCE_NOT_FOUND);
    if not_found {
        let message = error
            .and_then(|e| e.message)
            .unwrap_or_else(|| format!("Resource not found at {url}"));
        return OneViewApiError::ResourceNotFound { url, message };
    }
    OneViewApiError::HTTPErrorCode {
        url,
        status_code,
        response_body,
    }
}

fn truncate(s: &str, len: usize) -> &str {
    let mut end = len.min(s.len());
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Read-only view of the OneView inventory used by the Redfish service.
#[async_trait::async_trait]
pub trait OneView: Send + Sync + 'static {
    /// Searches the OneView index for resources carrying `uuid`.
    async fn find_index_resources(&self, uuid: &str) -> Result<Vec<IndexResource>, OneViewApiError>;
    async fn get_server_hardware(&self, id: &str) -> Result<ServerHardware, OneViewApiError>;
    async fn get_server_hardware_list(&self) -> Result<Vec<ServerHardware>, OneViewApiError>;
    async fn get_server_profile(&self, id: &str) -> Result<ServerProfile, OneViewApiError>;
    /// `filters` are OneView filter expressions, e.g. `name='web'`. All of
    /// them must match.
    async fn get_server_profile_templates(
        &self,
        filters: &[String],
    ) -> Result<Vec<ServerProfileTemplate>, OneViewApiError>;
}
