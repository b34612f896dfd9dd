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

use mockito::{Matcher, Mock};

pub enum Method {
    Get,
    Post,
}

impl Method {
    fn to_string(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

pub const SESSION_ID: &str = "LTIxNjUzMjc0OTUzzHoF7eEkZLEUWVA-fuOZP4VGA3U8e67E";

pub async fn add_mock(
    server: &mut mockito::ServerGuard,
    path: &str,
    response_body: &str,
    method: &Method,
    status_code: usize,
) -> Mock {
    server
        .mock(method.to_string(), path)
        .with_status(status_code)
        .with_header("content-type", "application/json")
        .with_body(response_body)
        .create_async()
        .await
}

/// Mocks the login-sessions endpoint handing out [`SESSION_ID`].
pub async fn add_login_mock(server: &mut mockito::ServerGuard) -> Mock {
    server
        .mock("POST", "/rest/login-sessions")
        .match_header("x-api-version", "600")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "userName": "administrator",
            "password": "secret",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(r#"{{"sessionID": "{SESSION_ID}"}}"#))
        .create_async()
        .await
}

pub async fn create_mock_http_server() -> mockito::ServerGuard {
    // Request a new server from the pool
    mockito::Server::new_async().await
}

pub fn endpoint(server: &mockito::ServerGuard) -> liboneview::Endpoint {
    liboneview::Endpoint {
        host: server.url(),
        username: Some("administrator".to_string()),
        password: Some("secret".to_string()),
        ..Default::default()
    }
}
